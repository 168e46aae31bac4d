//! Term classification and cleanup

mod org;
mod stopwords;

pub use org::{clean, is_university};
pub use stopwords::is_generic;
