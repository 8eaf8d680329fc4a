//! Read the kinematics calibration of a robot from its controller's
//! primary interface.
//!
//! # Crate Structure
//!
//! - [`transport`] — Blocking byte sources and the TCP controller connection
//! - [`frame`] — Frame decoding, the message scanner, and the calibration record
//!
//! ```no_run
//! use urcalib::{read_calibration, ConnectConfig};
//!
//! let record = read_calibration(&ConnectConfig::default())?;
//! println!("{record}");
//! # Ok::<(), urcalib::frame::ScanError>(())
//! ```

/// Re-export transport types.
pub mod transport {
    pub use urcalib_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use urcalib_frame::*;
}

pub use urcalib_frame::{read_calibration, scan_reader, CalibrationRecord};
pub use urcalib_transport::ConnectConfig;
