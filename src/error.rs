use thiserror::Error;

/// All errors that the crate can generate. Only profile construction is
/// fallible; the reflow path itself is total over its input domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("layout fraction `{field}` is {value}, outside [0, 1]")]
    /// A geometric field of a profile lay outside the unit interval
    FractionOutOfBounds { field: &'static str, value: f32 },

    #[error("a layout profile must fit at least one line per page")]
    /// The per-page line budget was zero
    ZeroLineBudget,

    #[error("a layout profile must fit at least one character per line")]
    /// The per-line character budget was zero
    ZeroCharBudget,
}
