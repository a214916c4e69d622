pub mod dedup;
pub(crate) mod util;

pub use dedup::{DuplicateMatcher, ImportVerdict};
