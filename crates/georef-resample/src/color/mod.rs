//! Color space conversions for RGB stacks.

mod hsv;

pub use hsv::{hsv_from_rgb, rgb_from_hsv};
