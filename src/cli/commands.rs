pub mod query;
pub mod serve;

pub use query::{ListTarget, parse_filter, run_query};
pub use serve::serve;
