//! Exact extents and fill orientation of an outline.

use kurbo::{CubicBez, Line, ParamCurve, ParamCurveExtrema, PathSeg, QuadBez, Rect};
use outline_types::{BoundingBox, Point};

use super::sink::{Abort, OutlineSink};

/// Direction in which the contours of an outline are filled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Clockwise outer contours, the filled area is to the right of the
    /// direction of travel. Used by TrueType outlines.
    TrueType,
    /// Counter-clockwise outer contours, the filled area is to the left of
    /// the direction of travel. Used by PostScript outlines.
    PostScript,
    /// The outline is empty in one direction or has no area.
    None,
}

impl Orientation {
    pub const FILL_RIGHT: Self = Self::TrueType;
    pub const FILL_LEFT: Self = Self::PostScript;
}

fn kurbo_point(point: Point<f64>) -> kurbo::Point {
    kurbo::Point::new(point.x, point.y)
}

/// Sink that accumulates the tight bounds of every segment.
#[derive(Default)]
pub(crate) struct ExtentsSink {
    bbox: Option<Rect>,
    last: kurbo::Point,
}

impl ExtentsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> BoundingBox<f64> {
        match self.bbox {
            Some(rect) => BoundingBox {
                x_min: rect.x0,
                y_min: rect.y0,
                x_max: rect.x1,
                y_max: rect.y1,
            },
            None => BoundingBox::EMPTY,
        }
    }

    fn include(&mut self, rect: Rect) {
        self.bbox = Some(match self.bbox {
            Some(bbox) => bbox.union(rect),
            None => rect,
        });
    }

    fn segment(&mut self, seg: PathSeg) {
        self.include(ParamCurveExtrema::bounding_box(&seg));
        self.last = seg.end();
    }
}

impl OutlineSink for ExtentsSink {
    fn accepts_conics(&self) -> bool {
        true
    }

    fn move_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        let to = kurbo_point(to);
        self.include(Rect::from_points(to, to));
        self.last = to;
        Ok(())
    }

    fn line_to(&mut self, to: Point<f64>) -> Result<(), Abort> {
        self.segment(PathSeg::Line(Line::new(self.last, kurbo_point(to))));
        Ok(())
    }

    fn conic_to(&mut self, control: Point<f64>, to: Point<f64>) -> Result<(), Abort> {
        self.segment(PathSeg::Quad(QuadBez::new(
            self.last,
            kurbo_point(control),
            kurbo_point(to),
        )));
        Ok(())
    }

    fn cubic_to(
        &mut self,
        control1: Point<f64>,
        control2: Point<f64>,
        to: Point<f64>,
    ) -> Result<(), Abort> {
        self.segment(PathSeg::Cubic(CubicBez::new(
            self.last,
            kurbo_point(control1),
            kurbo_point(control2),
            kurbo_point(to),
        )));
        Ok(())
    }
}

/// Computes the fill orientation from the signed area of the polygon
/// formed by all points, as `FT_Outline_Get_Orientation` does.
pub(crate) fn orientation(
    points: &[Point<i64>],
    contour_ranges: impl Iterator<Item = core::ops::RangeInclusive<usize>>,
) -> Orientation {
    if points.is_empty() {
        return Orientation::TrueType;
    }
    let mut cbox = BoundingBox {
        x_min: i64::MAX,
        y_min: i64::MAX,
        x_max: i64::MIN,
        y_max: i64::MIN,
    };
    for point in points {
        cbox.include_point(*point);
    }
    if cbox.x_min == cbox.x_max || cbox.y_min == cbox.y_max {
        return Orientation::None;
    }
    let mut area: i128 = 0;
    for range in contour_ranges {
        let mut prev = points[*range.end()];
        for point in &points[range] {
            area += (point.y as i128 - prev.y as i128) * (point.x as i128 + prev.x as i128);
            prev = *point;
        }
    }
    match area.signum() {
        1 => Orientation::PostScript,
        -1 => Orientation::TrueType,
        _ => Orientation::None,
    }
}
