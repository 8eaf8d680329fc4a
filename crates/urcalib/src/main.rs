mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "urcalib",
    version,
    about = "Read robot kinematics calibration from the controller primary interface"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). `RUST_LOG` takes precedence when set.
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_read_subcommand() {
        let cli = Cli::try_parse_from([
            "urcalib",
            "read",
            "--host",
            "192.168.56.101",
            "--port",
            "30011",
            "--hold",
        ])
        .expect("read args should parse");

        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.host, "192.168.56.101");
                assert_eq!(args.port, 30011);
                assert!(args.hold);
                assert_eq!(args.connect_timeout, "5s");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_decode_with_global_format() {
        let cli = Cli::try_parse_from(["urcalib", "decode", "capture.bin", "--format", "json"])
            .expect("decode args should parse");

        assert!(matches!(cli.command, Command::Decode(_)));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Cli::try_parse_from(["urcalib", "read", "--port", "70000"])
            .expect_err("port out of range should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn decode_requires_path() {
        let err = Cli::try_parse_from(["urcalib", "decode"]).expect_err("path is required");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
