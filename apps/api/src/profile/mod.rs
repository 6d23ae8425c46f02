// Profile normalization: provider payload in, render-ready view out.
// Nothing in this module performs I/O or returns an error.

pub mod dates;
pub mod raw;
pub mod view;

pub use raw::RawProfile;
pub use view::{normalize, ProfileView};
