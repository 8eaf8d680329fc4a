use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use urcalib_frame::read_calibration;

use crate::cmd::ReadArgs;
use crate::exit::{scan_error, CliError, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat};

const HOLD_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let config = args.connect_config()?;
    let addr = config.addr();

    info!(%addr, "reading calibration");
    let record =
        read_calibration(&config).map_err(|err| scan_error("calibration read failed", err))?;
    print_record(&record, &addr, format);

    if args.hold {
        // Default SIGINT handling stays in place until the record is printed.
        let running = Arc::new(AtomicBool::new(true));
        install_ctrlc_handler(running.clone())?;
        info!("holding until interrupted");
        while running.load(Ordering::SeqCst) {
            std::thread::sleep(HOLD_POLL_INTERVAL);
        }
        info!("shut down");
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
