use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::correspondence::Correspondence;
use crate::model::{TransformMethod, TransformModel};

/// Summary of one adjustment run.
///
/// Produced by [`crate::fit::fit`] together with the fitted model and never
/// mutated afterwards. The precision fields are `None` when the system was
/// minimally determined (zero degrees of freedom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentReport {
    /// Residual vector per correspondence, `model(origin) - destination`.
    pub residuals: Vec<[f64; 2]>,
    /// Root mean square of the residual components.
    pub rms: f64,
    /// Redundancy of the system: equations minus parameters.
    pub degrees_of_freedom: usize,
    /// Number of estimated parameters.
    pub num_params: usize,
    /// A-posteriori variance factor `r^T r / (n - m)`.
    pub sigma0_sq: Option<f64>,
    /// Parameter covariance `sigma0^2 * (A^T A)^-1`, row-major m x m.
    pub covariance: Option<Vec<f64>>,
}

impl AdjustmentReport {
    /// The a-posteriori standard deviation of unit weight, `sqrt(sigma0^2)`.
    pub fn sigma0(&self) -> Option<f64> {
        self.sigma0_sq.map(f64::sqrt)
    }

    /// Standard deviation of each estimated parameter, the square root of
    /// the covariance diagonal.
    pub fn param_std_devs(&self) -> Option<Vec<f64>> {
        let cov = self.covariance.as_ref()?;
        let m = self.num_params;
        Some((0..m).map(|i| cov[i * m + i].sqrt()).collect())
    }
}

/// Target language for rendered reports.
///
/// The language is an explicit argument of [`report_text`]; there is no
/// process-wide locale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLanguage {
    /// English labels.
    English,
    /// Spanish labels.
    Spanish,
}

struct Labels {
    title: &'static str,
    parameters: &'static str,
    scale: &'static str,
    rotation: &'static str,
    residuals: &'static str,
    point: &'static str,
    rms: &'static str,
    dof: &'static str,
    sigma0: &'static str,
    std_devs: &'static str,
}

fn labels(language: ReportLanguage) -> Labels {
    match language {
        ReportLanguage::English => Labels {
            title: "Adjustment report",
            parameters: "Parameters",
            scale: "scale",
            rotation: "rotation [rad]",
            residuals: "Residuals",
            point: "point",
            rms: "RMS",
            dof: "degrees of freedom",
            sigma0: "sigma0",
            std_devs: "parameter std. deviations",
        },
        ReportLanguage::Spanish => Labels {
            title: "Informe de ajuste",
            parameters: "Parametros",
            scale: "escala",
            rotation: "rotacion [rad]",
            residuals: "Residuos",
            point: "punto",
            rms: "EMC",
            dof: "grados de libertad",
            sigma0: "sigma0",
            std_devs: "desviaciones tipicas de los parametros",
        },
    }
}

fn param_names(method: TransformMethod) -> &'static [&'static str] {
    match method {
        TransformMethod::Translation => &["tx", "ty"],
        TransformMethod::Helmert => &["a", "b", "tx", "ty"],
        TransformMethod::Affine => &["a", "b", "tx", "d", "e", "ty"],
    }
}

/// Render a fitted model and its adjustment summary as plain text.
///
/// The report lists the fitted parameters (with the derived scale and
/// rotation for Helmert models), the residual vector of every
/// correspondence, the RMS, and, for over-determined systems, `sigma0` and
/// the parameter standard deviations.
///
/// # Arguments
///
/// * `model` - The fitted transformation.
/// * `report` - The adjustment summary produced with the model.
/// * `correspondences` - The observations the model was fitted from.
/// * `language` - Target language for the labels.
pub fn report_text(
    model: &TransformModel,
    report: &AdjustmentReport,
    correspondences: &[Correspondence],
    language: ReportLanguage,
) -> String {
    let l = labels(language);
    let mut out = String::new();

    let _ = writeln!(out, "{}: {}", l.title, model.method());
    let _ = writeln!(out, "{}:", l.parameters);
    for (name, value) in param_names(model.method()).iter().zip(model.params()) {
        let _ = writeln!(out, "  {name} = {value:.6}");
    }
    if let (Some(scale), Some(rotation)) = (model.scale(), model.rotation()) {
        let _ = writeln!(out, "  {} = {scale:.6}", l.scale);
        let _ = writeln!(out, "  {} = {rotation:.6}", l.rotation);
    }

    let _ = writeln!(out, "{}:", l.residuals);
    for (i, (c, r)) in correspondences.iter().zip(&report.residuals).enumerate() {
        let _ = writeln!(
            out,
            "  {} {}: ({:.3}, {:.3}) -> vx = {:.4}, vy = {:.4}",
            l.point,
            i + 1,
            c.origin[0],
            c.origin[1],
            r[0],
            r[1]
        );
    }

    let _ = writeln!(out, "{} = {:.6}", l.rms, report.rms);
    let _ = writeln!(out, "{} = {}", l.dof, report.degrees_of_freedom);
    if let Some(sigma0) = report.sigma0() {
        let _ = writeln!(out, "{} = {sigma0:.6}", l.sigma0);
    }
    if let Some(std_devs) = report.param_std_devs() {
        let _ = writeln!(out, "{}:", l.std_devs);
        for (name, sd) in param_names(model.method()).iter().zip(std_devs) {
            let _ = writeln!(out, "  {name}: {sd:.6}");
        }
    }

    out
}
