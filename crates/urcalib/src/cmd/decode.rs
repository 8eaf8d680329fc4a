use std::fs::File;

use tracing::info;
use urcalib_frame::scan_reader;

use crate::cmd::DecodeArgs;
use crate::exit::{io_error, scan_error, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let source = args.path.display().to_string();
    let file = File::open(&args.path).map_err(|err| io_error("open capture failed", err))?;

    info!(path = %source, "decoding capture");
    let record = scan_reader(file).map_err(|err| scan_error("decode failed", err))?;
    print_record(&record, &source, format);

    Ok(SUCCESS)
}
