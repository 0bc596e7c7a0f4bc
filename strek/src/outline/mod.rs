//! Glyph outlines and their decomposition into curve segments.
//!
//! An [`Outline`] borrows the point, tag and contour arrays produced by a
//! font engine. Segments can be delivered to any [`OutlineSink`], rendered
//! to a path string with [`Outline::to_path_string`] or collected into
//! plotting friendly arrays with [`Outline::points_and_codes`].

mod decompose;
mod extents;
mod path_string;
mod points_and_codes;
mod sink;

use core::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use outline_types::{from_26dot6, BoundingBox, Point, PointTag};

use crate::error::{OutlineError, Result};

pub use decompose::{elevate_conic, DecomposeSettings};
pub use extents::Orientation;
pub use path_string::{PathFormat, PathStringSink};
pub use points_and_codes::{InvalidPointCode, PointCode, PointsAndCodes};
pub use sink::{Abort, DecompositionEvent, NullSink, OutlineSink};

use extents::ExtentsSink;
use points_and_codes::PointsAndCodesSink;

/// Outline of a glyph in 26.6 fixed point coordinates.
#[derive(Debug)]
pub struct Outline<'a> {
    points: &'a [Point<i64>],
    tags: &'a [PointTag],
    contours: &'a [u16],
    points_and_codes: OnceCell<PointsAndCodes>,
    #[cfg(test)]
    computations: core::sync::atomic::AtomicUsize,
}

impl<'a> Outline<'a> {
    /// Creates an outline from points, their tags and the index of the
    /// last point of each contour.
    ///
    /// The structure is validated in the same way as `FT_Outline_Check`.
    pub fn new(
        points: &'a [Point<i64>],
        tags: &'a [PointTag],
        contours: &'a [u16],
    ) -> Result<Self> {
        if let Err(e) = validate(points, tags, contours) {
            log::warn!("rejecting outline: {e}");
            return Err(e.into());
        }
        Ok(Self {
            points,
            tags,
            contours,
            points_and_codes: OnceCell::new(),
            #[cfg(test)]
            computations: Default::default(),
        })
    }

    /// Creates an outline from raw FreeType tag bytes.
    pub fn from_raw_tags(
        points: &'a [Point<i64>],
        tags: &'a [u8],
        contours: &'a [u16],
    ) -> Result<Self> {
        Self::new(points, bytemuck::cast_slice(tags), contours)
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn n_contours(&self) -> usize {
        self.contours.len()
    }

    pub fn points(&self) -> &'a [Point<i64>] {
        self.points
    }

    pub fn tags(&self) -> &'a [PointTag] {
        self.tags
    }

    pub fn contours(&self) -> &'a [u16] {
        self.contours
    }

    /// Returns an iterator over the point index range of each contour.
    pub fn contour_ranges(&self) -> impl Iterator<Item = RangeInclusive<usize>> + 'a {
        let mut start = 0;
        self.contours.iter().map(move |end| {
            let end = *end as usize;
            let range = start..=end;
            start = end + 1;
            range
        })
    }

    /// Returns the box enclosing all points, including control points.
    ///
    /// An outline without points produces [`BoundingBox::EMPTY`].
    pub fn control_box(&self) -> BoundingBox<f64> {
        let mut bbox = BoundingBox::EMPTY;
        for point in self.points {
            bbox.include_point(point.map(from_26dot6));
        }
        bbox
    }

    /// Returns the exact box enclosing the outline, using the extrema of
    /// each curve rather than its control points.
    ///
    /// This matches `FT_Outline_Get_BBox`. An outline without points
    /// produces [`BoundingBox::EMPTY`].
    pub fn bbox(&self) -> Result<BoundingBox<f64>> {
        let mut sink = ExtentsSink::new();
        self.decompose(&mut sink, DecomposeSettings::default())?;
        Ok(sink.finish())
    }

    /// Returns the fill orientation of the outline, determined from the
    /// signed area of its points.
    pub fn orientation(&self) -> Orientation {
        extents::orientation(self.points, self.contour_ranges())
    }

    /// Walks the outline and reports each segment to the sink.
    pub fn decompose(&self, sink: impl OutlineSink, settings: DecomposeSettings) -> Result<()> {
        decompose::decompose(self, settings, sink)
    }

    /// Returns all segments of the outline.
    pub fn events(&self, settings: DecomposeSettings) -> Result<Vec<DecompositionEvent>> {
        let mut events = Vec::new();
        self.decompose(&mut events, settings)?;
        Ok(events)
    }

    /// Renders the outline as path text.
    pub fn to_path_string(&self, format: &PathFormat) -> Result<String> {
        self.to_path_string_with(format, DecomposeSettings::default())
    }

    /// Renders the outline as path text after applying a shift and delta
    /// to every coordinate.
    pub fn to_path_string_with(
        &self,
        format: &PathFormat,
        settings: DecomposeSettings,
    ) -> Result<String> {
        let mut sink = PathStringSink::new(format);
        let result = self.decompose(&mut sink, settings);
        sink.finish(result)
    }

    /// Returns the vertices of the outline along with an opcode for each.
    ///
    /// The arrays are computed on first use and cached. A failed
    /// computation is not cached.
    pub fn points_and_codes(&self) -> Result<&PointsAndCodes> {
        self.points_and_codes.get_or_try_init(|| {
            #[cfg(test)]
            self.computations
                .fetch_add(1, core::sync::atomic::Ordering::Relaxed);
            let mut sink = PointsAndCodesSink::new();
            let result = self.decompose(&mut sink, DecomposeSettings::default());
            let points_and_codes = sink.finish(result)?;
            log::debug!(
                "cached {} points and codes for outline with {} contours",
                points_and_codes.len(),
                self.n_contours()
            );
            Ok(points_and_codes)
        })
    }
}

fn validate(
    points: &[Point<i64>],
    tags: &[PointTag],
    contours: &[u16],
) -> Result<(), OutlineError> {
    if points.len() != tags.len() {
        return Err(OutlineError::PointTagMismatch {
            num_points: points.len(),
            num_tags: tags.len(),
        });
    }
    let mut end_prev: Option<usize> = None;
    for (ix, end) in contours.iter().enumerate() {
        let end = *end as usize;
        if end_prev.is_some_and(|prev| end <= prev) {
            return Err(OutlineError::ContourOrder(ix));
        }
        if end >= points.len() {
            return Err(OutlineError::ContourOutOfBounds(ix));
        }
        end_prev = Some(end);
    }
    let covered = end_prev.map(|end| end + 1).unwrap_or_default();
    if covered != points.len() {
        return Err(OutlineError::UncoveredPoints {
            covered,
            num_points: points.len(),
        });
    }
    Ok(())
}
