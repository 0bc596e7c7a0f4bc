//! Flattened vertex and opcode arrays for plotting libraries.

use outline_types::Point;
use thiserror::Error;

use super::sink::{Abort, OutlineSink};
use crate::{
    buffer::RecordBuffer,
    error::{Error, Result},
};

/// Opcode attached to each vertex, using matplotlib's path code numbering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum PointCode {
    Stop = 0,
    MoveTo = 1,
    LineTo = 2,
    /// Control or end point of a quadratic segment.
    Conic = 3,
    /// Control or end point of a cubic segment.
    Cubic = 4,
}

/// A byte that is not a valid [`PointCode`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
#[error("invalid point code {0}")]
pub struct InvalidPointCode(pub u8);

impl TryFrom<u8> for PointCode {
    type Error = InvalidPointCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Stop,
            1 => Self::MoveTo,
            2 => Self::LineTo,
            3 => Self::Conic,
            4 => Self::Cubic,
            _ => return Err(InvalidPointCode(value)),
        })
    }
}

impl From<PointCode> for u8 {
    fn from(value: PointCode) -> Self {
        value as u8
    }
}

/// Parallel arrays of vertices and their opcodes.
///
/// Both arrays always have the same length.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointsAndCodes {
    points: Vec<[f64; 2]>,
    codes: Vec<u8>,
}

impl PointsAndCodes {
    /// Creates the arrays from existing parts.
    ///
    /// Returns `None` if the lengths differ or a code is out of range.
    pub fn from_parts(points: Vec<[f64; 2]>, codes: Vec<u8>) -> Option<Self> {
        if codes.iter().any(|c| PointCode::try_from(*c).is_err()) {
            return None;
        }
        Self::new(points, codes)
    }

    fn new(points: Vec<[f64; 2]>, codes: Vec<u8>) -> Option<Self> {
        (points.len() == codes.len()).then_some(Self { points, codes })
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Returns the vertices as a flat `x0, y0, x1, y1, ...` slice.
    pub fn flat_points(&self) -> &[f64] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns an iterator over each opcode and its vertex.
    pub fn iter(&self) -> impl Iterator<Item = (PointCode, [f64; 2])> + '_ {
        self.codes.iter().zip(&self.points).map(|(code, point)| {
            // codes are validated on construction
            (PointCode::try_from(*code).unwrap_or(PointCode::Stop), *point)
        })
    }
}

/// Sink that collects vertices and opcodes.
#[derive(Default, Debug)]
pub(crate) struct PointsAndCodesSink {
    points: RecordBuffer<[f64; 2]>,
    codes: RecordBuffer<u8>,
    failed: bool,
}

impl PointsAndCodesSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self, result: Result<()>) -> Result<PointsAndCodes> {
        if self.failed {
            return Err(Error::AllocationFailure);
        }
        result?;
        // one code is pushed with every point
        PointsAndCodes::new(self.points.into_vec(), self.codes.into_vec())
            .ok_or(Error::AllocationFailure)
    }

    fn push(&mut self, code: PointCode, points: &[Point<f64>]) -> Result<(), Abort> {
        if self.try_push(code, points).is_err() {
            self.failed = true;
            return Err(Abort);
        }
        Ok(())
    }

    fn try_push(&mut self, code: PointCode, points: &[Point<f64>]) -> Result<()> {
        self.points.ensure(points.len())?;
        self.codes.ensure(points.len())?;
        for point in points {
            self.points.push([point.x, point.y])?;
            self.codes.push(code.into())?;
        }
        Ok(())
    }
}

impl OutlineSink for PointsAndCodesSink {
    fn accepts_conics(&self) -> bool {
        true
    }

    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.push(PointCode::MoveTo, &[to])
    }

    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.push(PointCode::LineTo, &[to])
    }

    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        self.push(PointCode::Conic, &[control, to])
    }

    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort> {
        self.push(PointCode::Cubic, &[control1, control2, to])
    }
}
