use std::io::Read;

use tracing::{debug, warn};
use urcalib_transport::{ConnectConfig, ControllerStream, StreamSource};

use crate::error::Result;
use crate::record::CalibrationRecord;
use crate::scanner::MessageScanner;

/// Connect to the controller, scan once for the kinematics calibration, and
/// close the connection.
///
/// The connection is closed on every path before this returns. A failure to
/// shut it down cleanly after a successful scan is logged, not returned.
pub fn read_calibration(config: &ConnectConfig) -> Result<CalibrationRecord> {
    let stream = ControllerStream::connect(config)?;
    let mut source = StreamSource::new(stream);

    let result = MessageScanner::new(&mut source).scan();
    let stream = source.into_inner();

    match (result, stream.close()) {
        (Ok(record), Ok(())) => Ok(record),
        (Ok(record), Err(err)) => {
            warn!(addr = %config.addr(), error = %err, "failed to close controller connection");
            Ok(record)
        }
        (Err(err), close) => {
            if let Err(close_err) = close {
                debug!(error = %close_err, "close after failed scan also failed");
            }
            Err(err)
        }
    }
}

/// Scan any blocking reader, such as a captured primary interface stream.
pub fn scan_reader<R: Read>(reader: R) -> Result<CalibrationRecord> {
    MessageScanner::new(StreamSource::new(reader)).scan()
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    use urcalib_transport::StreamError;

    use super::*;
    use crate::codec::{KINEMATICS_INFO, ROBOT_STATE};
    use crate::error::{ProtocolError, ScanError};
    use crate::testutil::{container, frame, frame_with_length, kinematics_payload};

    fn sample() -> CalibrationRecord {
        CalibrationRecord::new(
            [11, 12, 13, 14, 15, 16],
            [0.0; 6],
            [0.0, -0.6127, -0.57155, 0.0, 0.0, 0.0],
            [0.1807, 0.0, 0.0, 0.17415, 0.11985, 0.11655],
            [1.5708, 0.0, 0.0, 1.5708, -1.5708, 0.0],
            2,
        )
    }

    fn controller_stream(record: &CalibrationRecord) -> Vec<u8> {
        let mut wire = frame(20, b"URControl 5.x");
        wire.extend(container(
            ROBOT_STATE,
            &[
                frame(0, &[0; 42]),
                frame(1, &[0; 246]),
                frame(KINEMATICS_INFO, &kinematics_payload(record)),
                frame(2, &[0; 32]),
            ],
        ));
        wire
    }

    /// Serve `wire`, then wait until the client releases the connection.
    /// Returns whether the release was observed.
    fn serve_once(wire: Vec<u8>) -> (ConnectConfig, std::thread::JoinHandle<bool>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = std::thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();
            conn.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
            conn.write_all(&wire).unwrap();
            conn.shutdown(std::net::Shutdown::Write).unwrap();

            let mut buf = [0u8; 1];
            match conn.read(&mut buf) {
                Ok(0) => true,
                Err(err) => err.kind() == std::io::ErrorKind::ConnectionReset,
                Ok(_) => false,
            }
        });

        (ConnectConfig::new("127.0.0.1", port), server)
    }

    #[test]
    fn read_calibration_over_tcp_and_release() {
        let expected = sample();
        let (config, server) = serve_once(controller_stream(&expected));

        let record = read_calibration(&config).unwrap();
        assert_eq!(record, expected);
        assert!(server.join().unwrap(), "connection should be released");
    }

    #[test]
    fn read_calibration_releases_connection_on_error() {
        let mut wire = controller_stream(&sample());
        wire.truncate(wire.len() - 100);
        let (config, server) = serve_once(wire);

        let err = read_calibration(&config).unwrap_err();
        assert!(matches!(err, ScanError::Stream(StreamError::Truncated { .. })));
        assert!(server.join().unwrap(), "connection should be released");
    }

    #[test]
    fn read_calibration_propagates_protocol_error() {
        let wire = frame_with_length(2, ROBOT_STATE, &[]);
        let (config, server) = serve_once(wire);

        let err = read_calibration(&config).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Protocol(ProtocolError::InvalidHeaderLength { .. })
        ));
        assert!(server.join().unwrap(), "connection should be released");
    }

    #[test]
    fn read_calibration_connect_failure() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = read_calibration(&ConnectConfig::new("127.0.0.1", port)).unwrap_err();
        assert!(matches!(err, ScanError::Stream(StreamError::Connect { .. })));
    }

    #[test]
    fn scan_reader_over_capture() {
        let expected = sample();
        let record = scan_reader(Cursor::new(controller_stream(&expected))).unwrap();
        assert_eq!(record, expected);
    }
}
