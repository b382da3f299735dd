use derive_more::{Add, Display, From, Into, Mul, Sub};

/// A fraction of the destination viewport along one axis. Valid values lie
/// in `[0.0, 1.0]`; the renderer multiplies these against the viewport's
/// pixel dimensions to place the text block.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Add, Sub, Mul, Display, From, Into)]
pub struct Frac(pub f32);

impl Frac {
    pub const ZERO: Frac = Frac(0.0);
    pub const ONE: Frac = Frac(1.0);

    /// Whether the fraction lies within the unit interval.
    pub fn in_bounds(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

/// The rendering size of one line of text. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Display, From, Into)]
pub struct FontSize(pub f32);

impl FontSize {
    /// The smaller of two sizes.
    pub fn min(self, other: FontSize) -> FontSize {
        FontSize(self.0.min(other.0))
    }

    /// The larger of two sizes.
    pub fn max(self, other: FontSize) -> FontSize {
        FontSize(self.0.max(other.0))
    }
}
