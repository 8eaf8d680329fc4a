//! Primary interface frame decoding and kinematics calibration extraction.
//!
//! The controller streams length-prefixed frames, big-endian throughout:
//! - A 4-byte length covering the whole frame, header included
//! - A 1-byte message type
//!
//! A "robot state" frame (type 16) carries nested sub-frames with the same
//! header. One of those, "kinematics info" (type 5), holds the calibration.
//! [`MessageScanner`] walks the stream, skips everything else byte-exactly,
//! and returns the first [`CalibrationRecord`] it finds.

pub mod codec;
pub mod decoder;
pub mod error;
pub mod record;
pub mod scanner;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use codec::{
    FrameHeader, HEADER_SIZE, JOINT_COUNT, KINEMATICS_INFO, KINEMATICS_PAYLOAD_SIZE, ROBOT_STATE,
};
pub use decoder::FrameDecoder;
pub use error::{ProtocolError, Result, ScanError};
pub use record::CalibrationRecord;
pub use scanner::MessageScanner;
pub use session::{read_calibration, scan_reader};
