use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use urcalib_frame::{CalibrationRecord, JOINT_COUNT};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RecordOutput<'a> {
    source: &'a str,
    timestamp: String,
    calibration: &'a CalibrationRecord,
}

pub fn print_record(record: &CalibrationRecord, source: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = RecordOutput {
                source,
                timestamp: now_unix_seconds(),
                calibration: record,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            println!("{}", record_table(record));
            println!("calibration status: {}", record.calibration_status());
            println!("source: {source}");
        }
        OutputFormat::Pretty => {
            println!("Calibration from {source}:");
            println!("{record}");
        }
    }
}

fn record_table(record: &CalibrationRecord) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["JOINT", "CHECKSUM", "THETA", "A", "D", "ALPHA"]);

    for joint in 0..JOINT_COUNT {
        table.add_row(vec![
            joint.to_string(),
            format!("{:#010x}", record.joint_checksums()[joint]),
            format!("{:.6}", record.theta()[joint]),
            format!("{:.6}", record.a()[joint]),
            format!("{:.6}", record.d()[joint]),
            format!("{:.6}", record.alpha()[joint]),
        ]);
    }
    table
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
