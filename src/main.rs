//! # ethaddr
//! Print the hardware address of network interfaces, or tidy up address text

use std::process::ExitCode;

use clap::Parser;
use log::error;

use ethaddr::{decode, get_hardware_address, Error, MacAddr, Result, Separator};

/// Logging level when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(version, about = "Look up and normalise EUI-48 hardware addresses")]
struct Args {
    /// Character joining the octets, ':' or '-'
    #[arg(short, long, default_value_t = ':')]
    separator: char,

    /// Treat the arguments as addresses to re-format instead of interface names
    #[arg(short, long)]
    normalise: bool,

    /// Interface names, or address text with --normalise
    #[arg(required = true)]
    targets: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let args = Args::parse();

    let separator = match Separator::try_from(args.separator) {
        Ok(separator) => separator,
        Err(error) => {
            report(&error);
            return ExitCode::FAILURE;
        }
    };

    let mut status = ExitCode::SUCCESS;
    for target in &args.targets {
        match handle(target, args.normalise) {
            Ok(address) if args.normalise => println!("{}", address.to_eui48(separator)),
            Ok(address) => println!("{} {}", target, address.to_eui48(separator)),
            Err(error) => {
                report(&error);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

/// Either decode the text or look the interface up
fn handle(target: &str, normalise: bool) -> Result<MacAddr> {
    if normalise {
        decode(target)
    } else {
        get_hardware_address(target)
    }
}

/// Log an error along with the OS error underneath it, if any
fn report(error: &Error) {
    use std::error::Error as _;

    match error.source() {
        Some(source) => error!("{}: {}", error, source),
        None => error!("{}", error),
    }
}
