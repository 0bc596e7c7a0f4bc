//! FreeType style outline decomposition.

use outline_types::{from_26dot6, Point, PointTag};

use super::{
    sink::{Abort, OutlineSink},
    Outline,
};
use crate::error::{Error, OutlineError, Result};

/// Transform applied to every coordinate before it reaches the sink.
///
/// Each raw 26.6 coordinate `v` becomes `(v << shift) - delta`. This is
/// the transform `FT_Outline_Decompose` documents for its `shift` and
/// `delta` fields. `shift` must be less than 64; larger values are
/// rejected with [`OutlineError::InvalidShift`]. Bits shifted out of range
/// are the caller's responsibility.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposeSettings {
    pub shift: u32,
    pub delta: i64,
}

impl DecomposeSettings {
    pub const fn new(shift: u32, delta: i64) -> Self {
        Self { shift, delta }
    }

    fn transform(&self, point: Point<i64>) -> Point<i64> {
        point.map(|v| (v << self.shift) - self.delta)
    }
}

/// Computes the control points of the cubic that exactly reproduces the
/// quadratic curve from `p0` through `control` to `p1`.
pub fn elevate_conic(
    p0: Point<f64>,
    control: Point<f64>,
    p1: Point<f64>,
) -> (Point<f64>, Point<f64>) {
    let c0 = Point::new(
        (2.0 * control.x + p0.x) / 3.0,
        (2.0 * control.y + p0.y) / 3.0,
    );
    let c1 = Point::new(
        (p1.x + 2.0 * control.x) / 3.0,
        (p1.y + 2.0 * control.y) / 3.0,
    );
    (c0, c1)
}

impl From<Abort> for Error {
    fn from(_: Abort) -> Self {
        Error::ConsumerAbort
    }
}

/// Converts coordinates and keeps track of the last emitted point so
/// that quadratic segments can be raised for sinks that reject them.
struct Emitter<S> {
    sink: S,
    conics: bool,
    last: Point<f64>,
}

impl<S: OutlineSink> Emitter<S> {
    fn new(sink: S) -> Self {
        let conics = sink.accepts_conics();
        Self {
            sink,
            conics,
            last: Point::default(),
        }
    }

    fn move_to(&mut self, to: Point<i64>) -> Result<(), Abort> {
        let to = to.map(from_26dot6);
        self.sink.move_to(to)?;
        self.last = to;
        Ok(())
    }

    fn line_to(&mut self, to: Point<i64>) -> Result<(), Abort> {
        let to = to.map(from_26dot6);
        self.sink.line_to(to)?;
        self.last = to;
        Ok(())
    }

    fn conic_to(&mut self, control: Point<i64>, to: Point<i64>) -> Result<(), Abort> {
        let control = control.map(from_26dot6);
        let to = to.map(from_26dot6);
        if self.conics {
            self.sink.conic_to(control, to)?;
        } else {
            let (c0, c1) = elevate_conic(self.last, control, to);
            self.sink.cubic_to(c0, c1, to)?;
        }
        self.last = to;
        Ok(())
    }

    fn cubic_to(
        &mut self,
        control1: Point<i64>,
        control2: Point<i64>,
        to: Point<i64>,
    ) -> Result<(), Abort> {
        let to = to.map(from_26dot6);
        self.sink.cubic_to(
            control1.map(from_26dot6),
            control2.map(from_26dot6),
            to,
        )?;
        self.last = to;
        Ok(())
    }
}

fn midpoint(a: Point<i64>, b: Point<i64>) -> Point<i64> {
    Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}

/// Walks every contour of the outline and reports its segments to the
/// sink.
///
/// This is equivalent to [`FT_Outline_Decompose`](https://freetype.org/freetype2/docs/reference/ft2-outline_processing.html#ft_outline_decompose).
pub(crate) fn decompose(
    outline: &Outline,
    settings: DecomposeSettings,
    sink: impl OutlineSink,
) -> Result<()> {
    if settings.shift >= i64::BITS {
        log::warn!("invalid decomposition shift {}", settings.shift);
        return Err(OutlineError::InvalidShift(settings.shift).into());
    }
    let mut emitter = Emitter::new(sink);
    match walk(outline, settings, &mut emitter) {
        Ok(()) => Ok(()),
        Err(WalkError::Abort) => {
            log::warn!("outline decomposition aborted by sink");
            Err(Error::ConsumerAbort)
        }
        Err(WalkError::Invalid(e)) => {
            log::warn!("invalid outline: {e}");
            Err(e.into())
        }
    }
}

enum WalkError {
    Abort,
    Invalid(OutlineError),
}

impl From<Abort> for WalkError {
    fn from(_: Abort) -> Self {
        Self::Abort
    }
}

fn walk<S: OutlineSink>(
    outline: &Outline,
    settings: DecomposeSettings,
    emitter: &mut Emitter<S>,
) -> Result<(), WalkError> {
    let points = outline.points();
    let tags = outline.tags();
    let point = |ix: usize| settings.transform(points[ix]);
    for range in outline.contour_ranges() {
        let first = *range.start();
        let last = *range.end();
        let mut limit = last;
        let mut start = point(first);
        // index of the next point to visit
        let mut next = first + 1;
        let first_tag = tags[first];
        if first_tag.is_cubic() {
            return Err(WalkError::Invalid(OutlineError::ExpectedConicOrOnCurve(
                first,
            )));
        }
        if first_tag.is_conic() {
            if tags[last].is_on_curve() {
                start = point(last);
                limit -= 1;
            } else {
                start = midpoint(start, point(last));
            }
            next = first;
        }
        emitter.move_to(start)?;
        let mut closed = false;
        'contour: while next <= limit {
            let ix = next;
            let tag: PointTag = tags[ix];
            if tag.is_on_curve() {
                emitter.line_to(point(ix))?;
                next = ix + 1;
                continue;
            }
            if tag.is_conic() {
                let mut control = point(ix);
                let mut ix = ix;
                while ix < limit {
                    ix += 1;
                    let to = point(ix);
                    if tags[ix].is_on_curve() {
                        emitter.conic_to(control, to)?;
                        next = ix + 1;
                        continue 'contour;
                    }
                    if !tags[ix].is_conic() {
                        return Err(WalkError::Invalid(
                            OutlineError::ExpectedConicOrOnCurve(ix),
                        ));
                    }
                    emitter.conic_to(control, midpoint(control, to))?;
                    control = to;
                }
                emitter.conic_to(control, start)?;
                closed = true;
                break;
            }
            // cubic controls come in pairs
            if ix + 1 > limit || !tags[ix + 1].is_cubic() {
                return Err(WalkError::Invalid(OutlineError::ExpectedCubic(ix + 1)));
            }
            let control1 = point(ix);
            let control2 = point(ix + 1);
            let end_ix = ix + 2;
            if end_ix <= limit {
                emitter.cubic_to(control1, control2, point(end_ix))?;
                next = end_ix + 1;
                continue;
            }
            emitter.cubic_to(control1, control2, start)?;
            closed = true;
            break;
        }
        if !closed {
            emitter.line_to(start)?;
        }
    }
    Ok(())
}
