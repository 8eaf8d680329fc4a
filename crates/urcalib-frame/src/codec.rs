/// Frame header: length (4) + type (1) = 5 bytes.
pub const HEADER_SIZE: usize = 5;

/// Top-level container message carrying robot state sub-messages.
pub const ROBOT_STATE: u8 = 16;

/// Sub-message type carrying the kinematics calibration.
pub const KINEMATICS_INFO: u8 = 5;

/// Number of joints on the robot arm.
pub const JOINT_COUNT: usize = 6;

pub(crate) const U32_SIZE: usize = 4;
pub(crate) const F64_SIZE: usize = 8;

/// Fixed decode width of a kinematics info payload:
/// checksums, theta, a, d, alpha, then the calibration status.
pub const KINEMATICS_PAYLOAD_SIZE: usize =
    JOINT_COUNT * U32_SIZE + 4 * JOINT_COUNT * F64_SIZE + U32_SIZE;

/// Header shared by every frame and sub-frame on the primary interface.
///
/// Wire format:
/// ```text
/// ┌──────────────────┬──────────┬──────────────────────┐
/// │ Length (4B BE)   │ Type     │ Body                 │
/// │ incl. header     │ (1B)     │ (Length - 5 bytes)   │
/// └──────────────────┴──────────┴──────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Total frame length in bytes, header included.
    pub length: u32,
    /// Message or sub-message type.
    pub message_type: u8,
}

impl FrameHeader {
    /// Decode a header from its raw wire bytes.
    pub fn parse(raw: &[u8; HEADER_SIZE]) -> Self {
        let [l0, l1, l2, l3, message_type] = *raw;
        Self {
            length: u32::from_be_bytes([l0, l1, l2, l3]),
            message_type,
        }
    }

    /// Length of the body following the header, or `None` for a corrupt header.
    pub fn body_len(&self) -> Option<u32> {
        self.length.checked_sub(HEADER_SIZE as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_big_endian_header() {
        let header = FrameHeader::parse(&[0x00, 0x00, 0x01, 0x2C, 0x10]);
        assert_eq!(header.length, 300);
        assert_eq!(header.message_type, ROBOT_STATE);
        assert_eq!(header.body_len(), Some(295));
    }

    #[test]
    fn header_length_is_unsigned() {
        let header = FrameHeader::parse(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(header.length, u32::MAX);
        assert_eq!(header.message_type, 255);
        assert_eq!(header.body_len(), Some(u32::MAX - 5));
    }

    #[test]
    fn header_shorter_than_itself_has_no_body() {
        let header = FrameHeader::parse(&[0x00, 0x00, 0x00, 0x04, KINEMATICS_INFO]);
        assert_eq!(header.length, 4);
        assert_eq!(header.body_len(), None);
    }

    #[test]
    fn empty_frame_has_empty_body() {
        let header = FrameHeader {
            length: HEADER_SIZE as u32,
            message_type: 1,
        };
        assert_eq!(header.body_len(), Some(0));
    }

    #[test]
    fn kinematics_payload_width() {
        assert_eq!(KINEMATICS_PAYLOAD_SIZE, 220);
    }
}
