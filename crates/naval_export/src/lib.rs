//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod predictions {
    use std::io::{self, Write};

    pub const HEADER: &str =
        "formula,vessel,vessel_type,displacement_t,max_speed_kt,actual_hp,predicted_hp,error_pct";

    /// Write the per-vessel predictions CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row for one formula/vessel pair.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub formula: &'a str,
        pub vessel: &'a str,
        pub vessel_type: &'a str,
        pub displacement_t: f64,
        pub max_speed_kt: f64,
        pub actual_hp: f64,
        pub predicted_hp: f64,
        pub error_pct: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},\"{}\",{},{:.1},{:.2},{:.0},{:.0},{:.3}",
                self.formula,
                self.vessel.replace('"', "\"\""),
                self.vessel_type,
                self.displacement_t,
                self.max_speed_kt,
                self.actual_hp,
                self.predicted_hp,
                self.error_pct,
            )
        }
    }
}

pub mod comparison {
    use std::io::{self, Write};

    pub const HEADER: &str = "configuration,status,max_power_hp,engine_weight_t,total_cost,engine_volume_m3,cruising_speed_kt,max_range_nm,mtbf_h,reliability_score,fuel_full_t_h,fuel_cruise_t_h,operating_cost_h,acceleration,heat_signature,complexity";

    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Metric columns of a successful configuration row.
    #[derive(Debug, Clone)]
    pub struct Metrics {
        pub max_power_hp: f64,
        pub engine_weight_t: f64,
        pub total_cost: f64,
        pub engine_volume_m3: f64,
        pub cruising_speed_kt: f64,
        pub max_range_nm: f64,
        pub mtbf_h: f64,
        pub reliability_score: f64,
        pub fuel_full_t_h: f64,
        pub fuel_cruise_t_h: f64,
        pub operating_cost_h: f64,
        pub acceleration: u8,
        pub heat_signature: u8,
        pub complexity: u8,
    }

    /// CSV row of the configuration comparison table. Failed rows carry the error text.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub configuration: &'a str,
        pub outcome: Result<Metrics, String>,
    }

    impl<'a> Record<'a> {
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            match &self.outcome {
                Ok(m) => writeln!(
                    writer,
                    "{},ok,{:.0},{:.1},{:.0},{:.1},{:.1},{:.0},{:.0},{:.1},{:.4},{:.4},{:.0},{},{},{}",
                    self.configuration,
                    m.max_power_hp,
                    m.engine_weight_t,
                    m.total_cost,
                    m.engine_volume_m3,
                    m.cruising_speed_kt,
                    m.max_range_nm,
                    m.mtbf_h,
                    m.reliability_score,
                    m.fuel_full_t_h,
                    m.fuel_cruise_t_h,
                    m.operating_cost_h,
                    m.acceleration,
                    m.heat_signature,
                    m.complexity,
                ),
                Err(message) => writeln!(
                    writer,
                    "{},\"error: {}\",,,,,,,,,,,,,,",
                    self.configuration,
                    message.replace('"', "\"\""),
                ),
            }
        }
    }
}

pub mod report {
    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    #[derive(Serialize)]
    struct Envelope<'a, T: Serialize> {
        tool: &'a str,
        version: &'a str,
        generated_at: String,
        #[serde(flatten)]
        body: &'a T,
    }

    /// Write a pretty JSON report, stamped with the generating tool and UTC time.
    pub fn write_json<T: Serialize>(
        path: &Path,
        tool: &str,
        version: &str,
        body: &T,
    ) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let envelope = Envelope {
            tool,
            version,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            body,
        };
        to_writer_pretty(File::create(path)?, &envelope)?;
        Ok(())
    }
}
