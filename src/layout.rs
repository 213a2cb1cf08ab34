use std::fmt::Display;
use std::io::Write;

/// Column widths of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub line_width: usize,
    pub symbol_width: usize,
    pub decimal_width: usize,
    pub alternate_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            line_width: 100,
            symbol_width: 20,
            decimal_width: 21,
            alternate_width: 27,
        }
    }
}

impl Layout {
    pub fn major_rule(&self) -> String {
        repchar('=', self.line_width)
    }

    pub fn minor_rule(&self) -> String {
        repchar('-', self.line_width)
    }

    /**
     * Section title, flush with the right edge minus a two column margin.
     */
    pub fn write_banner<W: Write>(&self, out: &mut W, title: &str) -> std::io::Result<()> {
        let rule = self.major_rule();
        writeln!(out, "{}", rule)?;
        emit_right_aligned(out, self.line_width.saturating_sub(2), title)?;
        writeln!(out, "{}", rule)
    }
}

pub fn repchar(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

/**
 * Prints `record` right-aligned in a field of `width` characters.
 *
 * A record wider than the field is printed as is.
 */
pub fn emit_right_aligned<W: Write, T: Display + ?Sized>(
    out: &mut W,
    width: usize,
    record: &T,
) -> std::io::Result<()> {
    let line = record.to_string();
    writeln!(out, "{:>width$}", line, width = width)
}
