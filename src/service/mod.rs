pub mod query;
pub mod validation;

pub use query::QueryService;
