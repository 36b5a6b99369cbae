use std::fmt::Display;
use std::io::{self, Write};

const INDENT_STEP: &str = "    ";

/// Indenting line printer for the reasoner's console reports. An explicit
/// object handed to the reporting layer, never process-wide state.
pub struct Reporter<W: Write> {
    out: W,
    indent: u16,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, indent: 0 }
    }
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        for _ in 0..self.indent {
            write!(self.out, "{INDENT_STEP}")?;
        }
        writeln!(self.out, "{text}")
    }
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
    pub fn inc_indent(&mut self) {
        self.indent += 1;
    }
    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}
