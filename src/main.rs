use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use hex_ieee754::{OutputMode, RenderConfig, Session};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// Takes in data as a hexadecimal value (from standard in) and outputs its
/// floating-point representation.
///
/// 1-8 hex digits are read as binary32, 9-16 as binary64; a 0x prefix is
/// optional. Enter q or quit to stop, or -h for in-stream directives. The
/// exit status is the number of inputs that could not be decoded.
#[derive(Parser, Debug)]
#[command(name = "float", version)]
struct Args {
    /// Print the value with this many decimal places
    #[arg(short, long)]
    precision: Option<u16>,

    /// Print only the value, without the field table
    #[arg(short, long, conflicts_with = "verbose")]
    simple: bool,

    /// Also print width, raw bits, class, and unbiased exponent
    #[arg(short, long)]
    verbose: bool,

    /// Also print the value's dCBOR encoding
    #[arg(short, long)]
    cbor: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,

    /// Hex values to decode instead of reading standard input
    values: Vec<String>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let mode = if self.simple {
            OutputMode::Simple
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Table
        };
        RenderConfig::new(self.precision, mode, self.cbor)
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut session = Session::new(args.render_config());
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    if args.values.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read standard input")?;
            if session.handle_line(&line, &mut out, &mut err)? {
                break;
            }
            out.flush()?;
        }
    } else {
        for value in &args.values {
            if session.handle_line(value, &mut out, &mut err)? {
                break;
            }
        }
    }
    out.flush()?;

    debug!(failures = session.failures(), "done");
    let status = u8::try_from(session.failures()).unwrap_or(u8::MAX);
    Ok(ExitCode::from(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_flags_match_directives() {
        let args =
            Args::try_parse_from(["float", "-c", "-s", "-p", "3"]).unwrap();
        assert_eq!(
            args.render_config(),
            RenderConfig::new(Some(3), OutputMode::Simple, true)
        );
    }

    #[test]
    fn precision_out_of_range_is_a_usage_error() {
        assert!(Args::try_parse_from(["float", "-p", "70000"]).is_err());
    }
}
