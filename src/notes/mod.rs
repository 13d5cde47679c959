pub mod classifier;
pub mod cleaner;
pub mod dates;
pub mod metadata;
pub mod parser;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::*;
pub use cleaner::*;
pub use dates::*;
pub use metadata::*;
pub use parser::*;
pub use types::*;
