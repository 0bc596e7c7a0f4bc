//! Error types for decomposition and layout.

use thiserror::Error;

use crate::face::Encoding;

/// Alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that may occur when decomposing outlines or computing a layout.
#[derive(Debug, Error)]
pub enum Error {
    /// An output buffer could not be grown.
    #[error("failed to allocate memory for an output buffer")]
    AllocationFailure,

    /// Layout requires the face to have a Unicode character map selected.
    #[error("layout requires a Unicode character map (selected: {0:?})")]
    UnsupportedEncoding(Option<Encoding>),

    /// The outline sink requested that decomposition stop.
    #[error("decomposition was aborted by the consumer")]
    ConsumerAbort,

    /// The font engine failed while resolving glyphs, kerning or metrics.
    #[error("font engine error: {0}")]
    FontEngine(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The outline structure is malformed.
    #[error(transparent)]
    InvalidOutline(#[from] OutlineError),
}

impl Error {
    pub(crate) fn font_engine(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::FontEngine(Box::new(e))
    }
}

/// Structural problems detected in an outline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// Expected number of points to == number of tags.
    #[error("Number of points ({num_points}) and tags ({num_tags}) must match")]
    PointTagMismatch { num_points: usize, num_tags: usize },

    /// Contour end point at this index was not greater than its preceding
    /// end point.
    #[error("Contour end point at index {0} was not greater than preceding end point")]
    ContourOrder(usize),

    /// Contour end point at this index refers past the last point.
    #[error("Contour end point at index {0} is out of bounds")]
    ContourOutOfBounds(usize),

    /// The last contour does not end at the last point.
    #[error("Contours cover {covered} of {num_points} points")]
    UncoveredPoints { covered: usize, num_points: usize },

    /// Expected a conic off-curve or on-curve point at this index.
    #[error("Expected conic off-curve or on-curve point at index {0}")]
    ExpectedConicOrOnCurve(usize),

    /// Expected a cubic off-curve point at this index.
    #[error("Expected cubic off-curve point at index {0}")]
    ExpectedCubic(usize),

    /// The coordinate shift is not smaller than the coordinate width.
    #[error("Shift of {0} bits exceeds 63")]
    InvalidShift(u32),
}
