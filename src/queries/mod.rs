//! Fixed SQL and row records, one module per dataset.

pub mod ahcb;
pub mod apb;
pub mod bom;
pub mod pinkerton;
pub mod relcensus;

use crate::sql::{Statement, StatementRegistry};

fn all() -> Vec<&'static Statement> {
    vec![
        &ahcb::STATES,
        &ahcb::COUNTY_BY_ID,
        &apb::VERSE,
        &apb::VERSES,
        &apb::VERSE_TREND,
        &apb::BIBLE_BOOKS,
        &bom::PARISHES,
        &bom::CAUSES,
        &bom::CHRISTENINGS,
        &relcensus::DENOMINATIONS,
        &relcensus::DENOMINATION_FAMILIES,
        &pinkerton::CASE,
    ]
}

/// Every fixed statement, prepared during startup.
pub fn registry() -> StatementRegistry {
    StatementRegistry::new(all())
}
