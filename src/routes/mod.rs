pub mod common;
pub mod datasets;

pub use common::common_routes;
pub use datasets::dataset_routes;
