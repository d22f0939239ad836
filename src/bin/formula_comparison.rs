use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use naval_power_calculator::calibration::{
    CoefficientAnalysis, DisplacementFactor, FleetSummary, RankingReport, VesselSpecification,
    analyze_class_coefficients, displacement_factors, fleet_summary, run_formula_comparison,
    standard_formulas,
};
use naval_power_calculator::export::{self, predictions};
use naval_power_calculator::{logging, setup};

/// Score the candidate power formulas against the historical vessel dataset.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rank power-prediction formulas against historical warships"
)]
struct Cli {
    /// Vessel dataset CSV (defaults to the bundled dataset)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Registry override file or directory (YAML/TOML)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Write per-vessel predictions as CSV (use '-' for stdout)
    #[arg(long)]
    predictions: Option<PathBuf>,

    /// Write rankings and coefficient analysis as a JSON report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the per-vessel prediction table for every formula
    #[arg(long, default_value_t = false)]
    details: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Serialize)]
struct CalibrationReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    fleet: Option<FleetSummary>,
    #[serde(flatten)]
    ranking: &'a RankingReport,
    coefficients: &'a CoefficientAnalysis,
    displacement_factors: &'a [DisplacementFactor],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let registry = setup::registry(cli.registry.as_deref())?;
    let vessels = setup::dataset(cli.dataset.as_deref())?;
    let formulas = standard_formulas(&registry);

    let ranking = run_formula_comparison(&vessels, &formulas)?;
    let coefficients = analyze_class_coefficients(&vessels)?;
    let factors = displacement_factors(&vessels)?;
    let fleet = fleet_summary(&vessels);

    if let Some(summary) = &fleet {
        print_fleet(summary);
    }
    if cli.details {
        print_predictions(&vessels, &ranking);
    }
    print_rankings(&ranking);
    print_coefficients(&coefficients);
    print_factors(&factors);

    if let Some(path) = &cli.predictions {
        write_predictions(path, &vessels, &ranking)?;
    }
    if let Some(path) = &cli.report {
        export::report::write_json(
            path,
            "formula_comparison",
            naval_power_calculator::version(),
            &CalibrationReport {
                fleet,
                ranking: &ranking,
                coefficients: &coefficients,
                displacement_factors: &factors,
            },
        )?;
    }
    Ok(())
}

fn print_fleet(summary: &FleetSummary) {
    println!("=== Dataset ===");
    println!(
        "{} vessels, mean displacement {:.0} t, mean max speed {:.1} kt, mean {:.2} hp/t",
        summary.vessel_count,
        summary.mean_displacement,
        summary.mean_max_speed,
        summary.mean_power_displacement_ratio
    );
}

fn print_predictions(vessels: &[VesselSpecification], ranking: &RankingReport) {
    for score in &ranking.rankings {
        println!("\n=== {} ===", score.formula);
        println!(
            "{:<28} {:>9} {:>10} {:>10} {:>8}",
            "vessel", "disp_t", "actual_hp", "pred_hp", "err_%"
        );
        for (vessel, prediction) in vessels.iter().zip(&score.predictions) {
            println!(
                "{:<28} {:>9.0} {:>10.0} {:>10.0} {:>+8.1}",
                vessel.name,
                vessel.displacement_full,
                prediction.actual_hp,
                prediction.predicted_hp,
                prediction.error_percent
            );
        }
    }
}

fn print_rankings(ranking: &RankingReport) {
    println!("\n=== Formula ranking ({} vessels) ===", ranking.vessel_count);
    println!(
        "{:>4} {:<24} {:>10} {:>10} {:>10}",
        "rank", "formula", "mean_%", "min_%", "max_%"
    );
    for (idx, score) in ranking.rankings.iter().enumerate() {
        println!(
            "{:>4} {:<24} {:>10.2} {:>10.2} {:>10.2}",
            idx + 1,
            score.formula,
            score.mean_absolute_error,
            score.min_absolute_error,
            score.max_absolute_error
        );
    }
    if let Some(best) = ranking.best() {
        println!(
            "Best formula: {} ({:.2}% mean absolute error)",
            best.formula, best.mean_absolute_error
        );
    }
    if let Some(engine_model) = ranking.score("admiralty") {
        println!(
            "Engine calculator model (admiralty): {:.2}% mean absolute error",
            engine_model.mean_absolute_error
        );
    }
}

fn print_coefficients(analysis: &CoefficientAnalysis) {
    println!("\n=== Admiralty coefficients by class ===");
    println!(
        "Fleet average: raw {:.1}, adjusted to 27 kt {:.1}",
        analysis.fleet_raw_average, analysis.fleet_adjusted_average
    );
    println!(
        "{:<10} {:>5} {:>9} {:>9} {:>9}",
        "class", "n", "raw", "adjusted", "dev"
    );
    for class in &analysis.classes {
        println!(
            "{:<10} {:>5} {:>9.1} {:>9.1} {:>+9.1}{}",
            class.hull_type.as_str(),
            class.vessel_count,
            class.raw_coefficient,
            class.adjusted_coefficient,
            class.deviation,
            if class.outlier { "  OUTLIER" } else { "" }
        );
    }
}

fn print_factors(factors: &[DisplacementFactor]) {
    println!("\n=== Displacement normalization ===");
    for factor in factors {
        let range = match factor.max_displacement {
            Some(max) => format!("{:.0}-{:.0} t", factor.min_displacement, max),
            None => format!(">= {:.0} t", factor.min_displacement),
        };
        println!(
            "{:<14} n={:<3} baseline C {:>6.1}  multiplier {:.3}",
            range, factor.vessel_count, factor.baseline_coefficient, factor.normalization_multiplier
        );
    }
}

fn write_predictions(
    path: &std::path::Path,
    vessels: &[VesselSpecification],
    ranking: &RankingReport,
) -> anyhow::Result<()> {
    let mut writer = export::writer_for_path(path)?;
    predictions::write_header(writer.as_mut())?;
    for score in &ranking.rankings {
        for (vessel, prediction) in vessels.iter().zip(&score.predictions) {
            predictions::Record {
                formula: &score.formula,
                vessel: &vessel.name,
                vessel_type: vessel.vessel_type.as_str(),
                displacement_t: vessel.displacement_full,
                max_speed_kt: vessel.max_speed_knots,
                actual_hp: prediction.actual_hp,
                predicted_hp: prediction.predicted_hp,
                error_pct: prediction.error_percent,
            }
            .write_to(writer.as_mut())?;
        }
    }
    writer.flush()?;
    Ok(())
}
