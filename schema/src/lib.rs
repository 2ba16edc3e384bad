// Pokemon Catalog Schema - Shared type definitions
// This crate contains the plain data types shared between the catalog engine,
// the query-service decode layer, and the RON fixture records. It carries no
// engine logic of its own.

// Re-export the main types
pub use catalog::*;
pub use detail::*;
pub use evolution::*;

pub mod catalog;
pub mod detail;
pub mod evolution;
