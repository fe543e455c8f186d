use std::str::FromStr;

use crate::Error;

/// How much of a decoded value the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Value line only.
    Simple,
    /// Value line and field table.
    #[default]
    Table,
    /// Value line, field table, and a details line.
    Verbose,
}

/// Rendering options, owned by whoever drives the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderConfig {
    /// Fixed number of decimals for the value line; `None` prints the
    /// shortest representation that round-trips. Bounded by the largest
    /// precision `core::fmt` accepts.
    pub precision: Option<u16>,
    pub mode: OutputMode,
    /// Append the value's dCBOR encoding.
    pub cbor: bool,
}

impl RenderConfig {
    pub fn new(precision: Option<u16>, mode: OutputMode, cbor: bool) -> Self {
        Self { precision, mode, cbor }
    }

    /// Applies an in-stream directive. `Help` leaves the config unchanged.
    pub fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Mode(mode) => self.mode = mode,
            Directive::ToggleCbor => self.cbor = !self.cbor,
            Directive::Precision(precision) => self.precision = precision,
            Directive::Help => {}
        }
    }
}

/// An option given on the input stream rather than on the command line,
/// e.g. `-v` or `--precision=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Mode(OutputMode),
    ToggleCbor,
    Precision(Option<u16>),
    Help,
}

impl FromStr for Directive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let directive = match s {
            "-s" | "--simple" => Self::Mode(OutputMode::Simple),
            "-t" | "--table" => Self::Mode(OutputMode::Table),
            "-v" | "--verbose" => Self::Mode(OutputMode::Verbose),
            "-c" | "--cbor" => Self::ToggleCbor,
            "-h" | "--help" => Self::Help,
            "-p" | "--precision" => Self::Precision(None),
            _ => {
                let digits = s
                    .strip_prefix("--precision=")
                    .or_else(|| s.strip_prefix("-p"))
                    .ok_or_else(|| Error::InvalidDirective(s.to_owned()))?;
                if digits.is_empty()
                    || !digits.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(Error::InvalidDirective(s.to_owned()));
                }
                let precision = digits
                    .parse()
                    .map_err(|_| Error::InvalidDirective(s.to_owned()))?;
                Self::Precision(Some(precision))
            }
        };
        Ok(directive)
    }
}
