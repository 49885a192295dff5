use std::io::{self, Write};

use crate::calculator::AreaCalculator;
use crate::error::{Result, ShapeError};

/// Reports the total area of a calculator's shapes.
///
/// The printer only formats and writes. Where the line goes is up to the
/// caller: [`print`](Self::print) uses stdout, [`print_to`](Self::print_to)
/// takes any writer.
pub struct AreaPrinter<'a> {
    calculator: &'a AreaCalculator<'a>,
}

impl<'a> AreaPrinter<'a> {
    pub fn new(calculator: &'a AreaCalculator<'a>) -> Self {
        AreaPrinter { calculator }
    }

    /// The report line, without a trailing newline.
    pub fn report(&self) -> String {
        format!("Sum of the areas: {}", self.calculator.sum())
    }

    pub fn print_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.report()).map_err(ShapeError::Output)?;
        out.flush().map_err(ShapeError::Output)
    }

    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.print_to(&mut handle)
    }
}
