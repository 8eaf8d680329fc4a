use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use urcalib_transport::{ConnectConfig, DEFAULT_HOST, DEFAULT_PORT};

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod read;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read the calibration from a live controller.
    Read(ReadArgs),
    /// Extract the calibration from a captured primary interface stream.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Read(args) => read::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Controller host.
    #[arg(long, env = "URCALIB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Primary interface port.
    #[arg(long, env = "URCALIB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Connect timeout (e.g. 5s, 500ms).
    #[arg(long, default_value = "5s")]
    pub connect_timeout: String,
    /// Read timeout (e.g. 10s). Blocks indefinitely when unset.
    #[arg(long)]
    pub read_timeout: Option<String>,
    /// Keep running after printing until interrupted (Ctrl-C).
    #[arg(long)]
    pub hold: bool,
}

impl ReadArgs {
    pub fn connect_config(&self) -> CliResult<ConnectConfig> {
        Ok(ConnectConfig {
            connect_timeout: parse_timeout(&self.connect_timeout)?,
            read_timeout: self.read_timeout.as_deref().map(parse_timeout).transpose()?,
            ..ConnectConfig::new(self.host.clone(), self.port)
        })
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding raw bytes captured from the primary interface.
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn parse_timeout(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "timeout must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid timeout value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "timeout must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        _ => Ok(Duration::from_secs(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_args() -> ReadArgs {
        ReadArgs {
            host: "10.0.0.2".to_string(),
            port: 30011,
            connect_timeout: "750ms".to_string(),
            read_timeout: Some("10s".to_string()),
            hold: false,
        }
    }

    #[test]
    fn parse_timeout_units() {
        assert_eq!(parse_timeout("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout("2").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_timeout("150ms").unwrap(), Duration::from_millis(150));
    }

    #[test]
    fn parse_timeout_invalid() {
        assert_eq!(parse_timeout("0s").unwrap_err().code, USAGE);
        assert_eq!(parse_timeout("").unwrap_err().code, USAGE);
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn read_args_build_connect_config() {
        let config = read_args().connect_config().unwrap();
        assert_eq!(config.addr(), "10.0.0.2:30011");
        assert_eq!(config.connect_timeout, Duration::from_millis(750));
        assert_eq!(config.read_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn read_args_reject_bad_read_timeout() {
        let args = ReadArgs {
            read_timeout: Some("fast".to_string()),
            ..read_args()
        };
        assert_eq!(args.connect_config().unwrap_err().code, USAGE);
    }
}
