use std::fmt;

use serde::Serialize;
use urcalib_transport::ByteSource;

use crate::codec::JOINT_COUNT;
use crate::decoder::FrameDecoder;

/// Kinematics calibration of the robot arm, one entry per joint.
///
/// `theta`, `a`, `d` and `alpha` are the Denavit-Hartenberg parameters
/// reported by the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationRecord {
    joint_checksums: [u32; JOINT_COUNT],
    theta: [f64; JOINT_COUNT],
    a: [f64; JOINT_COUNT],
    d: [f64; JOINT_COUNT],
    alpha: [f64; JOINT_COUNT],
    calibration_status: u32,
}

impl CalibrationRecord {
    pub fn new(
        joint_checksums: [u32; JOINT_COUNT],
        theta: [f64; JOINT_COUNT],
        a: [f64; JOINT_COUNT],
        d: [f64; JOINT_COUNT],
        alpha: [f64; JOINT_COUNT],
        calibration_status: u32,
    ) -> Self {
        Self {
            joint_checksums,
            theta,
            a,
            d,
            alpha,
            calibration_status,
        }
    }

    /// Decode a kinematics info payload.
    ///
    /// Reads the fixed field sequence only. The sub-message's declared
    /// length is not consulted here; the scanner owns length accounting.
    pub fn read_from<S: ByteSource>(
        decoder: &mut FrameDecoder<S>,
    ) -> urcalib_transport::Result<Self> {
        let joint_checksums = decoder.read_u32_array()?;
        let theta = decoder.read_f64_array()?;
        let a = decoder.read_f64_array()?;
        let d = decoder.read_f64_array()?;
        let alpha = decoder.read_f64_array()?;
        let calibration_status = decoder.read_u32()?;

        Ok(Self::new(
            joint_checksums,
            theta,
            a,
            d,
            alpha,
            calibration_status,
        ))
    }

    pub fn joint_checksums(&self) -> &[u32; JOINT_COUNT] {
        &self.joint_checksums
    }

    pub fn theta(&self) -> &[f64; JOINT_COUNT] {
        &self.theta
    }

    pub fn a(&self) -> &[f64; JOINT_COUNT] {
        &self.a
    }

    pub fn d(&self) -> &[f64; JOINT_COUNT] {
        &self.d
    }

    pub fn alpha(&self) -> &[f64; JOINT_COUNT] {
        &self.alpha
    }

    pub fn calibration_status(&self) -> u32 {
        self.calibration_status
    }
}

impl fmt::Display for CalibrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "joint_checksums: {:?}", self.joint_checksums)?;
        writeln!(f, "theta:           {:?}", self.theta)?;
        writeln!(f, "a:               {:?}", self.a)?;
        writeln!(f, "d:               {:?}", self.d)?;
        writeln!(f, "alpha:           {:?}", self.alpha)?;
        write!(f, "calibration_status: {}", self.calibration_status)
    }
}
