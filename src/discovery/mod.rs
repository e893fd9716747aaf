//! URL discovery
//!
//! Reading the input text and extracting candidate URLs from it.

pub mod finder;
pub mod input;

// Re-export commonly used items
pub use finder::{Finder, UrlFinder};
pub use input::InputSource;
