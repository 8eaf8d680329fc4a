use urcalib_transport::{DEFAULT_HOST, DEFAULT_PORT};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("urcalib {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: urcalib");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("URCALIB_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("default_endpoint: {DEFAULT_HOST}:{DEFAULT_PORT}");
    println!(
        "joint_count: {}, kinematics_payload: {} bytes",
        urcalib_frame::JOINT_COUNT,
        urcalib_frame::KINEMATICS_PAYLOAD_SIZE
    );

    Ok(SUCCESS)
}
