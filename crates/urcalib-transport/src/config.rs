use std::time::Duration;

/// Service name of the controller's read-only primary interface.
pub const DEFAULT_HOST: &str = "urcontrol-primary-read-only";

/// Port of the controller's read-only primary interface.
pub const DEFAULT_PORT: u16 = 30011;

/// Default connect timeout: 5 seconds.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to connect to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    /// Hostname or IP address of the controller.
    pub host: String,
    /// TCP port of the primary interface.
    pub port: u16,
    /// Timeout applied to each connection attempt.
    pub connect_timeout: Duration,
    /// Read timeout for blocking reads. `None` blocks indefinitely.
    pub read_timeout: Option<Duration>,
}

impl ConnectConfig {
    /// Config for `host:port` with default timeouts.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// The `host:port` string used for resolution and diagnostics.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: None,
        }
    }
}
