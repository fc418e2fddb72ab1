//! SQL plumbing: fixed statements, per-request predicate builder, bind values.

mod builder;
pub mod params;
pub mod statement;
pub use builder::*;
pub use params::*;
pub use statement::*;
