pub mod definition;
pub mod document;

pub use definition::*;
pub use document::*;
