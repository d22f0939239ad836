//! Batch scoring of formulas against the dataset.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use naval_core::stats::{mean, min_max};

use crate::CalibrationError;
use crate::dataset::VesselSpecification;
use crate::formulas::PowerFormula;

/// One formula's prediction for one vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselPrediction {
    pub vessel: String,
    pub predicted_hp: f64,
    pub actual_hp: f64,
    /// `(predicted − actual) / actual × 100`.
    pub error_percent: f64,
}

impl VesselPrediction {
    pub fn absolute_error_percent(&self) -> f64 {
        self.error_percent.abs()
    }
}

/// Aggregate accuracy of one formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaScore {
    pub formula: String,
    pub mean_absolute_error: f64,
    pub min_absolute_error: f64,
    pub max_absolute_error: f64,
    pub predictions: Vec<VesselPrediction>,
}

/// Formulas ranked by ascending mean absolute percentage error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub vessel_count: usize,
    pub rankings: Vec<FormulaScore>,
}

impl RankingReport {
    pub fn best(&self) -> Option<&FormulaScore> {
        self.rankings.first()
    }

    pub fn score(&self, formula: &str) -> Option<&FormulaScore> {
        self.rankings.iter().find(|s| s.formula == formula)
    }
}

fn score_formula(
    formula: &dyn PowerFormula,
    vessels: &[VesselSpecification],
) -> Result<FormulaScore, CalibrationError> {
    let predictions = vessels
        .par_iter()
        .map(|vessel| -> Result<VesselPrediction, CalibrationError> {
            let predicted_hp = formula.predict(vessel)?;
            Ok(VesselPrediction {
                vessel: vessel.name.clone(),
                predicted_hp,
                actual_hp: vessel.power_hp,
                error_percent: (predicted_hp - vessel.power_hp) / vessel.power_hp * 100.0,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let absolute: Vec<f64> = predictions
        .iter()
        .map(VesselPrediction::absolute_error_percent)
        .collect();
    let mean_absolute_error = mean(&absolute).ok_or(CalibrationError::EmptyDataset)?;
    let (min_absolute_error, max_absolute_error) =
        min_max(&absolute).ok_or(CalibrationError::EmptyDataset)?;

    Ok(FormulaScore {
        formula: formula.name().to_string(),
        mean_absolute_error,
        min_absolute_error,
        max_absolute_error,
        predictions,
    })
}

/// Score every formula against every vessel and rank the formulas.
///
/// Predictions keep dataset order; ties in the ranking keep formula order.
pub fn run_formula_comparison(
    vessels: &[VesselSpecification],
    formulas: &[Box<dyn PowerFormula>],
) -> Result<RankingReport, CalibrationError> {
    if vessels.is_empty() {
        return Err(CalibrationError::EmptyDataset);
    }

    let mut rankings = formulas
        .iter()
        .map(|formula| score_formula(formula.as_ref(), vessels))
        .collect::<Result<Vec<_>, _>>()?;
    rankings.sort_by(|a, b| a.mean_absolute_error.total_cmp(&b.mean_absolute_error));

    for (rank, score) in rankings.iter().enumerate() {
        info!(
            rank = rank + 1,
            formula = %score.formula,
            mean_abs_error = score.mean_absolute_error,
            "formula ranked"
        );
    }

    Ok(RankingReport {
        vessel_count: vessels.len(),
        rankings,
    })
}
