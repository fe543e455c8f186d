use std::io::{self, Write};

use tracing::debug;

use crate::{
    DecodedValue, Directive, RenderConfig, Report, Result, classify, decode,
};

/// Printed for the `-h` / `--help` directive.
pub const USAGE: &str = "\
Enter hexadecimal bit patterns (1-8 digits for binary32, 9-16 for binary64,
optionally prefixed with 0x). Directives:
  -s, --simple        value only
  -t, --table         value and field table
  -v, --verbose       value, field table, and details
  -c, --cbor          toggle dCBOR output
  -pN, --precision=N  N decimal places (-p alone resets)
  -h, --help          this text
  q, quit             stop reading input
";

/// What a single input token did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decoded,
    Configured,
    Rejected,
    Quit,
}

/// Processes input tokens one at a time, carrying the render options and the
/// count of rejected tokens between them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: RenderConfig,
    failures: usize,
}

impl Session {
    pub fn new(config: RenderConfig) -> Self { Self { config, failures: 0 } }

    pub fn config(&self) -> &RenderConfig { &self.config }

    /// Number of tokens rejected so far.
    pub fn failures(&self) -> usize { self.failures }

    /// Handles one whitespace-free token: a quit command, a directive
    /// starting with `-`, or a hex value. Reports go to `out`, rejections to
    /// `err`. Only write failures are returned as errors.
    pub fn handle(
        &mut self,
        token: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<Outcome> {
        if is_quit(token) {
            debug!("quit requested");
            return Ok(Outcome::Quit);
        }

        let action = match parse_action(token) {
            Ok(action) => action,
            Err(e) => {
                self.failures += 1;
                writeln!(err, "{token} is not recognized: {e}")?;
                return Ok(Outcome::Rejected);
            }
        };

        match action {
            Action::Directive(Directive::Help) => {
                out.write_all(USAGE.as_bytes())?;
                Ok(Outcome::Configured)
            }
            Action::Directive(directive) => {
                debug!(?directive, "applying directive");
                self.config.apply(directive);
                Ok(Outcome::Configured)
            }
            Action::Value(value) => {
                debug!(
                    token,
                    width = %value.width(),
                    bits = value.bits().value(),
                    "decoded"
                );
                write!(out, "{}", Report::new(&value, &self.config))?;
                Ok(Outcome::Decoded)
            }
        }
    }

    /// Handles every whitespace-separated token of `line`, stopping at a
    /// quit command. Returns true if one was seen.
    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<bool> {
        for token in line.split_whitespace() {
            if self.handle(token, &mut *out, &mut *err)? == Outcome::Quit {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn is_quit(token: &str) -> bool {
    token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit")
}

enum Action {
    Directive(Directive),
    Value(DecodedValue),
}

fn parse_action(token: &str) -> Result<Action> {
    if token.starts_with('-') {
        return Ok(Action::Directive(token.parse()?));
    }
    let width = classify(token)?;
    Ok(Action::Value(decode(token, width)?))
}
