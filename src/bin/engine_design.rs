use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use naval_power_calculator::config::load_design_requests;
use naval_power_calculator::engine::{
    ComparisonRow, ConfigurationComparison, EngineDesignInput, EnginePriority,
    EngineSystemOutput, calculate_engine_system, compare_configurations,
};
use naval_power_calculator::export::{self, comparison};
use naval_power_calculator::propulsion::{HullType, Registry};
use naval_power_calculator::{logging, setup};

/// Size the propulsion plant of a warship design and derive its trade-offs.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Engine system calculator (Admiralty-coefficient power model)"
)]
struct Cli {
    /// Propulsion configuration id (diesel, gas-turbine, CODAG, COGAG, ...)
    #[arg(long, default_value = "CODAG")]
    configuration: String,

    /// Hull category
    #[arg(long, value_enum, default_value_t = HullArg::Frigate)]
    hull_type: HullArg,

    /// Full-load displacement in tonnes
    #[arg(long, default_value_t = 5000.0)]
    displacement: f64,

    /// Hull drag coefficient (dimensionless, typically 0.05-0.3)
    #[arg(long, default_value_t = 0.12)]
    drag: f64,

    /// Desired top speed in knots
    #[arg(long, default_value_t = 30.0)]
    top_speed: f64,

    /// Desired cruising speed in knots (defaults to the hull heuristic)
    #[arg(long)]
    cruise_speed: Option<f64>,

    /// Design priority
    #[arg(long, value_enum, default_value_t = PriorityArg::Balanced)]
    priority: PriorityArg,

    /// Evaluate the design against every configuration instead of one
    #[arg(long, default_value_t = false)]
    compare: bool,

    /// Batch file of design requests (YAML list or TOML [[designs]])
    #[arg(long, conflicts_with = "compare")]
    requests: Option<PathBuf>,

    /// Registry override file or directory (YAML/TOML)
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Write the comparison table as CSV (use '-' for stdout)
    #[arg(long, requires = "compare")]
    csv: Option<PathBuf>,

    /// Write the comparison table as a JSON report
    #[arg(long, requires = "compare")]
    json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum HullArg {
    Corvette,
    Frigate,
    Destroyer,
    Cruiser,
    Carrier,
}

impl From<HullArg> for HullType {
    fn from(value: HullArg) -> Self {
        match value {
            HullArg::Corvette => HullType::Corvette,
            HullArg::Frigate => HullType::Frigate,
            HullArg::Destroyer => HullType::Destroyer,
            HullArg::Cruiser => HullType::Cruiser,
            HullArg::Carrier => HullType::Carrier,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PriorityArg {
    Efficiency,
    Power,
    Reliability,
    Balanced,
}

impl From<PriorityArg> for EnginePriority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Efficiency => EnginePriority::Efficiency,
            PriorityArg::Power => EnginePriority::Power,
            PriorityArg::Reliability => EnginePriority::Reliability,
            PriorityArg::Balanced => EnginePriority::Balanced,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let registry = setup::registry(cli.registry.as_deref())?;

    if let Some(path) = &cli.requests {
        return run_batch(&registry, path);
    }

    let mut input = EngineDesignInput::new(
        cli.configuration.clone(),
        cli.hull_type.into(),
        cli.displacement,
        cli.drag,
        cli.top_speed,
    )
    .with_priority(cli.priority.into());
    if let Some(cruise) = cli.cruise_speed {
        input = input.with_cruising_speed(cruise);
    }

    if cli.compare {
        let rows = compare_configurations(&registry, &input);
        print_comparison(&input, &rows);
        if let Some(path) = &cli.csv {
            write_comparison_csv(path, &rows)?;
        }
        if let Some(path) = &cli.json {
            let body: Vec<ComparisonRow<'_>> = rows.iter().map(ComparisonRow::from).collect();
            export::report::write_json(
                path,
                "engine_design",
                naval_power_calculator::version(),
                &ComparisonReport {
                    input: &input,
                    configurations: body,
                },
            )?;
        }
        return Ok(());
    }

    let output = calculate_engine_system(&registry, &input)?;
    print_output(&output);
    Ok(())
}

#[derive(serde::Serialize)]
struct ComparisonReport<'a> {
    input: &'a EngineDesignInput,
    configurations: Vec<ComparisonRow<'a>>,
}

fn run_batch(registry: &Registry, path: &std::path::Path) -> anyhow::Result<()> {
    let records = load_design_requests(path)?;
    if records.is_empty() {
        return Err(anyhow::anyhow!(
            "No design requests found in {}",
            path.display()
        ));
    }
    let mut failed = 0usize;
    for (idx, record) in records.iter().enumerate() {
        let label = record
            .label
            .clone()
            .unwrap_or_else(|| format!("design #{}", idx + 1));
        let result = EngineDesignInput::try_from(record)
            .and_then(|input| calculate_engine_system(registry, &input));
        match result {
            Ok(output) => {
                println!("--- {} ---", label);
                print_output(&output);
            }
            Err(err) => {
                failed += 1;
                eprintln!("{}: {err}", label);
            }
        }
    }
    if failed > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} design requests failed",
            failed,
            records.len()
        ));
    }
    Ok(())
}

fn print_output(output: &EngineSystemOutput) {
    println!("=== Engine System ({}) ===", output.configuration);
    println!("Max power        : {:.0} hp", output.max_power);
    println!("Engine weight    : {:.1} t", output.total_engine_weight);
    println!("Engine volume    : {:.1} m3", output.engine_volume);
    println!("Total cost       : {:.0}", output.total_cost);
    println!(
        "Speed            : max {:.1} kt, cruise {:.1} kt",
        output.max_speed, output.cruising_speed
    );
    println!("Range            : {:.0} nm", output.max_range);
    println!(
        "Reliability      : MTBF {:.0} h, score {:.1}",
        output.mtbf, output.reliability_score
    );
    println!(
        "Fuel             : full {:.4} t/h, cruise {:.4} t/h",
        output.fuel_consumption_at_full_power, output.fuel_consumption_at_cruise
    );
    println!("Operating cost   : {:.0} per hour", output.operating_cost_per_hour);
    println!(
        "Ratings          : acceleration {}, heat {}, complexity {}",
        output.acceleration_rating, output.heat_signature, output.complexity_rating
    );
}

fn print_comparison(input: &EngineDesignInput, rows: &[ConfigurationComparison]) {
    println!(
        "=== Configuration comparison: {} {:.0} t, {:.1} kt, {} priority ===",
        input.hull_type, input.displacement_tonnes, input.top_speed_knots, input.priority
    );
    println!(
        "{:<14} {:>10} {:>9} {:>14} {:>8} {:>8} {:>9} {:>5} {:>5} {:>5}",
        "config",
        "power_hp",
        "weight_t",
        "cost",
        "range",
        "mtbf_h",
        "fuel_t/h",
        "acc",
        "heat",
        "cplx"
    );
    for row in rows {
        match &row.result {
            Ok(o) => println!(
                "{:<14} {:>10.0} {:>9.1} {:>14.0} {:>8.0} {:>8.0} {:>9.4} {:>5} {:>5} {:>5}",
                row.configuration.as_str(),
                o.max_power,
                o.total_engine_weight,
                o.total_cost,
                o.max_range,
                o.mtbf,
                o.fuel_consumption_at_full_power,
                o.acceleration_rating,
                o.heat_signature,
                o.complexity_rating
            ),
            Err(err) => println!("{:<14} error: {}", row.configuration.as_str(), err),
        }
    }
}

fn write_comparison_csv(
    path: &std::path::Path,
    rows: &[ConfigurationComparison],
) -> anyhow::Result<()> {
    let mut writer = export::writer_for_path(path)?;
    comparison::write_header(writer.as_mut())?;
    for row in rows {
        let record = comparison::Record {
            configuration: row.configuration.as_str(),
            outcome: match &row.result {
                Ok(o) => Ok(comparison::Metrics {
                    max_power_hp: o.max_power,
                    engine_weight_t: o.total_engine_weight,
                    total_cost: o.total_cost,
                    engine_volume_m3: o.engine_volume,
                    cruising_speed_kt: o.cruising_speed,
                    max_range_nm: o.max_range,
                    mtbf_h: o.mtbf,
                    reliability_score: o.reliability_score,
                    fuel_full_t_h: o.fuel_consumption_at_full_power,
                    fuel_cruise_t_h: o.fuel_consumption_at_cruise,
                    operating_cost_h: o.operating_cost_per_hour,
                    acceleration: o.acceleration_rating,
                    heat_signature: o.heat_signature,
                    complexity: o.complexity_rating,
                }),
                Err(err) => Err(err.to_string()),
            },
        };
        record.write_to(writer.as_mut())?;
    }
    writer.flush()?;
    Ok(())
}
