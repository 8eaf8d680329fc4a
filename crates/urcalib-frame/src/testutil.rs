//! Wire builders for tests. The protocol is read-only; nothing here ships.

use bytes::{BufMut, BytesMut};

use crate::codec::HEADER_SIZE;
use crate::record::CalibrationRecord;

pub(crate) fn kinematics_payload(record: &CalibrationRecord) -> Vec<u8> {
    let mut buf = BytesMut::new();
    for v in record.joint_checksums() {
        buf.put_u32(*v);
    }
    for field in [record.theta(), record.a(), record.d(), record.alpha()] {
        for v in field {
            buf.put_f64(*v);
        }
    }
    buf.put_u32(record.calibration_status());
    buf.to_vec()
}

/// A frame whose header declares `length` regardless of the body size.
pub(crate) fn frame_with_length(length: u32, message_type: u8, body: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(HEADER_SIZE + body.len());
    buf.put_u32(length);
    buf.put_u8(message_type);
    buf.put_slice(body);
    buf.to_vec()
}

pub(crate) fn frame(message_type: u8, body: &[u8]) -> Vec<u8> {
    frame_with_length((HEADER_SIZE + body.len()) as u32, message_type, body)
}

/// A container frame wrapping the given sub-frames.
pub(crate) fn container(message_type: u8, subs: &[Vec<u8>]) -> Vec<u8> {
    frame(message_type, &subs.concat())
}
