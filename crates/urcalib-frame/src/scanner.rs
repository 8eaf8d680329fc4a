use tracing::{debug, info, warn};
use urcalib_transport::ByteSource;

use crate::codec::{
    FrameHeader, HEADER_SIZE, KINEMATICS_INFO, KINEMATICS_PAYLOAD_SIZE, ROBOT_STATE,
};
use crate::decoder::FrameDecoder;
use crate::error::{ProtocolError, Result};
use crate::record::CalibrationRecord;

enum ScanState {
    AwaitTopLevel,
    /// Inside a robot state message with `remaining` body bytes unread.
    AwaitSubMessage { remaining: u32 },
    Done(Box<CalibrationRecord>),
}

/// Walks primary interface messages until a kinematics info sub-message
/// turns up, then decodes it.
///
/// Sub-messages have no terminator; only the container length says where
/// they end. Every skip and decode is charged against that length, and a
/// sub-message claiming more than is left fails with
/// [`ProtocolError::FrameOverrun`]. There is no resynchronization.
///
/// Scanning is single-shot: [`MessageScanner::scan`] consumes the scanner.
pub struct MessageScanner<S> {
    decoder: FrameDecoder<S>,
    messages_seen: u64,
    sub_messages_skipped: u64,
}

impl<S: ByteSource> MessageScanner<S> {
    pub fn new(source: S) -> Self {
        Self {
            decoder: FrameDecoder::new(source),
            messages_seen: 0,
            sub_messages_skipped: 0,
        }
    }

    /// Scan until the calibration record is decoded.
    ///
    /// Blocks on the source; returns the first stream or protocol error.
    pub fn scan(mut self) -> Result<CalibrationRecord> {
        let mut state = ScanState::AwaitTopLevel;
        loop {
            state = match self.step(state)? {
                ScanState::Done(record) => {
                    info!(
                        messages = self.messages_seen,
                        skipped_sub_messages = self.sub_messages_skipped,
                        bytes = self.decoder.consumed(),
                        "kinematics info found"
                    );
                    return Ok(*record);
                }
                next => next,
            };
        }
    }

    fn step(&mut self, state: ScanState) -> Result<ScanState> {
        match state {
            ScanState::AwaitTopLevel => {
                let (header, body) = self.read_header()?;
                self.messages_seen += 1;

                if header.message_type != ROBOT_STATE {
                    debug!(
                        message_type = header.message_type,
                        length = header.length,
                        "skipping message"
                    );
                    self.decoder.skip(u64::from(body))?;
                    return Ok(ScanState::AwaitTopLevel);
                }

                debug!(length = header.length, "entering robot state message");
                Ok(ScanState::AwaitSubMessage { remaining: body })
            }
            ScanState::AwaitSubMessage { remaining: 0 } => {
                debug!("robot state message exhausted without kinematics info");
                Ok(ScanState::AwaitTopLevel)
            }
            ScanState::AwaitSubMessage { remaining } => {
                let remaining = remaining
                    .checked_sub(HEADER_SIZE as u32)
                    .ok_or(ProtocolError::FrameOverrun {
                        declared: HEADER_SIZE as u32,
                        remaining,
                    })?;
                let (header, body) = self.read_header()?;

                if header.message_type == KINEMATICS_INFO {
                    return self.decode_kinematics(header, body, remaining);
                }

                let remaining = remaining
                    .checked_sub(body)
                    .ok_or(ProtocolError::FrameOverrun {
                        declared: header.length,
                        remaining: remaining + HEADER_SIZE as u32,
                    })?;
                debug!(
                    sub_type = header.message_type,
                    length = header.length,
                    remaining,
                    "skipping sub-message"
                );
                self.decoder.skip(u64::from(body))?;
                self.sub_messages_skipped += 1;
                Ok(ScanState::AwaitSubMessage { remaining })
            }
            ScanState::Done(record) => Ok(ScanState::Done(record)),
        }
    }

    fn decode_kinematics(
        &mut self,
        header: FrameHeader,
        body: u32,
        remaining: u32,
    ) -> Result<ScanState> {
        if body as usize != KINEMATICS_PAYLOAD_SIZE || body > remaining {
            warn!(
                length = header.length,
                expected = KINEMATICS_PAYLOAD_SIZE + HEADER_SIZE,
                remaining,
                "kinematics info length disagrees with its fixed layout"
            );
        }

        let record = CalibrationRecord::read_from(&mut self.decoder)?;

        // Leave the source on the next frame boundary when the controller
        // appends fields this layout does not know about.
        if let Some(extra) = (body as usize).checked_sub(KINEMATICS_PAYLOAD_SIZE) {
            if extra > 0 {
                self.decoder.skip(extra as u64)?;
            }
        }

        Ok(ScanState::Done(Box::new(record)))
    }

    fn read_header(&mut self) -> Result<(FrameHeader, u32)> {
        let header = self.decoder.read_header()?;
        let body = header
            .body_len()
            .ok_or(ProtocolError::InvalidHeaderLength {
                length: header.length,
                message_type: header.message_type,
            })?;
        Ok((header, body))
    }
}
