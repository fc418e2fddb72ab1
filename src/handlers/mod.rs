//! HTTP handlers, one module per dataset. Each validates its parameters
//! before touching the pool.

pub mod ahcb;
pub mod apb;
pub mod bom;
pub mod pinkerton;
pub mod relcensus;
