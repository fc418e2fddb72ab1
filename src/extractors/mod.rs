pub mod query_params;

pub use query_params::QueryParams;
