use core::fmt;

use crate::{DecodedValue, OutputMode, RenderConfig, cbor::cbor_summary};

const COLUMN: &str = "||";
const HEADERS: [&str; 3] = ["Sign", "Exponent", "Mantissa"];

/// The printable breakdown of one decoded value under a `RenderConfig`.
///
/// Every line, including the last, ends with a newline.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    value: &'a DecodedValue,
    config: &'a RenderConfig,
}

impl<'a> Report<'a> {
    pub fn new(value: &'a DecodedValue, config: &'a RenderConfig) -> Self {
        Self { value, config }
    }

    fn write_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.config.precision {
            Some(p) => {
                writeln!(f, "{:.p$}", self.value.value(), p = usize::from(p))
            }
            None => writeln!(f, "{}", self.value.value()),
        }
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.value.bit_string();
        let Some(fields) = self.value.fields(&bits) else {
            return Err(fmt::Error);
        };
        let cells = [fields.sign, fields.exponent, fields.mantissa];
        let widths = HEADERS.map(str::len);
        let widths = [0, 1, 2].map(|i| widths[i].max(cells[i].len()));

        let rule_len = COLUMN.len() * 4 + widths.iter().sum::<usize>();
        let rule = "=".repeat(rule_len);

        writeln!(f, "{rule}")?;
        write_row(f, &HEADERS, &widths)?;
        write_row(f, &cells, &widths)?;
        writeln!(f, "{rule}")
    }

    fn write_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.value.width();
        write!(
            f,
            "{} 0x{:0digits$x} {}",
            width,
            self.value.bits(),
            self.value.class(),
            digits = width.hex_digits(),
        )?;
        if self.value.is_quiet_nan() {
            write!(f, " quiet")?;
        }
        if let Some(exponent) = self.value.unbiased_exponent() {
            write!(f, " exponent={exponent}")?;
        }
        writeln!(f)
    }
}

/// Right-aligns each cell in its column.
fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[&str; 3],
    widths: &[usize; 3],
) -> fmt::Result {
    write!(f, "{COLUMN}")?;
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        write!(f, "{cell:>width$}{COLUMN}")?;
    }
    writeln!(f)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_value(f)?;
        if self.config.mode != OutputMode::Simple {
            self.write_table(f)?;
        }
        if self.config.mode == OutputMode::Verbose {
            self.write_details(f)?;
        }
        if self.config.cbor {
            writeln!(f, "cbor: {}", cbor_summary(self.value))?;
        }
        Ok(())
    }
}

/// Renders `value` under `config` into a string.
pub fn render(value: &DecodedValue, config: &RenderConfig) -> String {
    Report::new(value, config).to_string()
}
