/// Tag byte describing the role of a point in an outline.
///
/// This uses the FreeType convention: bit 0 marks an on-curve point. For
/// off-curve points, bit 1 distinguishes a cubic control point (set) from
/// a conic (quadratic) control point (clear). Bit 2 and bits 5-7 may carry
/// a scan converter drop-out mode; they are preserved but play no part in
/// classification.
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash, Debug)]
#[cfg_attr(
    feature = "bytemuck",
    derive(bytemuck::AnyBitPattern, bytemuck::NoUninit)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PointTag(u8);

impl PointTag {
    // Note: a conic control point is signified by the absence of both
    // ON_CURVE and CUBIC bits.
    const ON_CURVE: u8 = 0x01;
    const CUBIC: u8 = 0x02;
    const CURVE_MASK: u8 = Self::ON_CURVE | Self::CUBIC;

    /// Creates a new on curve point tag.
    pub const fn on_curve() -> Self {
        Self(Self::ON_CURVE)
    }

    /// Creates a new off curve conic point tag.
    pub const fn conic() -> Self {
        Self(0)
    }

    /// Creates a new off curve cubic point tag.
    pub const fn cubic() -> Self {
        Self(Self::CUBIC)
    }

    /// Creates a point tag from the raw byte reported by the font engine.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        self.0 & Self::ON_CURVE != 0
    }

    /// Returns true if this is an off curve conic point.
    #[inline]
    pub const fn is_conic(self) -> bool {
        self.0 & Self::CURVE_MASK == 0
    }

    /// Returns true if this is an off curve cubic point.
    #[inline]
    pub const fn is_cubic(self) -> bool {
        self.0 & Self::CURVE_MASK == Self::CUBIC
    }

    /// Returns a copy with everything but the curve classification bits
    /// cleared.
    pub const fn curve_bits(self) -> Self {
        Self(self.0 & Self::CURVE_MASK)
    }

    /// Returns the underlying bits.
    pub const fn to_bits(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::PointTag;

    #[test]
    fn classification() {
        assert!(PointTag::on_curve().is_on_curve());
        assert!(PointTag::conic().is_conic());
        assert!(PointTag::cubic().is_cubic());
        assert!(!PointTag::cubic().is_on_curve());
        assert!(!PointTag::conic().is_cubic());
    }

    #[test]
    fn engine_bytes() {
        // tags dumped from a TrueType glyph: drop-out bits set alongside
        // the curve bits
        let on = PointTag::from_bits(61);
        assert!(on.is_on_curve());
        assert_eq!(on.curve_bits(), PointTag::on_curve());
        let on = PointTag::from_bits(25);
        assert!(on.is_on_curve());
        assert!(PointTag::from_bits(0).is_conic());
        assert!(PointTag::from_bits(0x18).is_conic());
        // the cubic bit is meaningless for on curve points
        assert!(!PointTag::from_bits(0x03).is_cubic());
        assert_eq!(PointTag::from_bits(61).to_bits(), 61);
    }
}
