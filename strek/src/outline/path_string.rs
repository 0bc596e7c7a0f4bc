//! Serializing outlines to textual path data.

use core::fmt::Write;

use outline_types::Point;

use super::{
    decompose::elevate_conic,
    sink::{Abort, OutlineSink},
};
use crate::{
    buffer::TextBuffer,
    error::{Error, Result},
};

/// Operator tokens and their placement for a textual path language.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PathFormat<'t> {
    pub move_to: &'t str,
    pub line_to: &'t str,
    pub cubic_to: &'t str,
    /// Token for quadratic segments. When absent, quadratic segments are
    /// written as equivalent cubics.
    pub conic_to: Option<&'t str>,
    /// If true, each token is written before its operands, otherwise
    /// after them.
    pub prefix: bool,
}

impl<'t> PathFormat<'t> {
    pub const fn new(
        move_to: &'t str,
        line_to: &'t str,
        cubic_to: &'t str,
        conic_to: Option<&'t str>,
        prefix: bool,
    ) -> Self {
        Self {
            move_to,
            line_to,
            cubic_to,
            conic_to,
            prefix,
        }
    }
}

impl PathFormat<'static> {
    /// SVG path data, for example `M 0 0L 10 0Q 10 10 0 10`.
    pub const fn svg() -> Self {
        Self::new("M", "L", "C", Some("Q"), true)
    }

    /// PostScript operators, one segment per line.
    pub const fn postscript() -> Self {
        Self::new("moveto\n", "lineto\n", "curveto\n", None, false)
    }

    /// PDF content stream path operators, one segment per line.
    pub const fn pdf() -> Self {
        Self::new("m\n", "l\n", "c\n", None, false)
    }
}

impl Default for PathFormat<'static> {
    fn default() -> Self {
        Self::svg()
    }
}

/// Sink that renders segments as text in a given [`PathFormat`].
///
/// Quadratic segments are always accepted; if the format has no token for
/// them they are raised to cubics using the last emitted end point.
#[derive(Debug)]
pub struct PathStringSink<'f, 't> {
    format: &'f PathFormat<'t>,
    buffer: TextBuffer,
    last: Point<f64>,
    failed: bool,
}

impl<'f, 't> PathStringSink<'f, 't> {
    pub fn new(format: &'f PathFormat<'t>) -> Self {
        Self {
            format,
            buffer: TextBuffer::new(),
            last: Point::default(),
            failed: false,
        }
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Consumes the sink and returns the rendered text.
    ///
    /// `result` is the outcome of the decomposition that fed this sink. An
    /// abort caused by a failed allocation is reported as
    /// [`Error::AllocationFailure`].
    pub fn finish(self, result: Result<()>) -> Result<String> {
        if self.failed {
            return Err(Error::AllocationFailure);
        }
        result?;
        Ok(self.buffer.into_string())
    }

    fn write_segment(&mut self, token: &str, operands: &[Point<f64>]) -> Result<(), Abort> {
        let written = if self.format.prefix {
            self.write_prefix(token, operands)
        } else {
            self.write_postfix(token, operands)
        };
        if written.is_err() {
            self.failed = true;
            return Err(Abort);
        }
        if let Some(last) = operands.last() {
            self.last = *last;
        }
        Ok(())
    }

    fn write_prefix(&mut self, token: &str, operands: &[Point<f64>]) -> core::fmt::Result {
        self.buffer.write_str(token)?;
        for point in operands {
            write!(self.buffer, " {} {}", point.x, point.y)?;
        }
        Ok(())
    }

    fn write_postfix(&mut self, token: &str, operands: &[Point<f64>]) -> core::fmt::Result {
        for point in operands {
            write!(self.buffer, "{} {} ", point.x, point.y)?;
        }
        self.buffer.write_str(token)
    }
}

impl OutlineSink for PathStringSink<'_, '_> {
    fn accepts_conics(&self) -> bool {
        true
    }

    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.write_segment(self.format.move_to, &[to])
    }

    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.write_segment(self.format.line_to, &[to])
    }

    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        match self.format.conic_to {
            Some(token) => self.write_segment(token, &[control, to]),
            None => {
                let (c0, c1) = elevate_conic(self.last, control, to);
                self.write_segment(self.format.cubic_to, &[c0, c1, to])
            }
        }
    }

    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort> {
        self.write_segment(self.format.cubic_to, &[control1, control2, to])
    }
}
