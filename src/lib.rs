mod error;
pub use error::*;

/// Pure functions implementing the reflow core: wrapping, pagination, and
/// style resampling
pub mod layout;

mod page;
pub use page::*;

/// Layout profiles for the known presentation contexts
pub mod profile;
pub use profile::{get_layout, LayoutProfile};

mod reflow;
pub use reflow::*;

mod units;
pub use units::*;
