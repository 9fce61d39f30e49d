pub mod footer;
#[allow(clippy::module_inception)]
pub mod layout;
pub mod navbar;

pub use layout::Layout;
