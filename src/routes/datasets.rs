//! Dataset route table. Path-templated routes answer with and without the
//! trailing slash.

use crate::handlers::{ahcb, apb, bom, pinkerton, relcensus};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn dataset_routes(state: AppState) -> Router {
    Router::new()
        .route("/ahcb/states/:date/", get(ahcb::states))
        .route("/ahcb/states/:date", get(ahcb::states))
        .route("/ahcb/counties/:date/", get(ahcb::counties))
        .route("/ahcb/counties/:date", get(ahcb::counties))
        .route("/ahcb/counties/:date/id/:id/", get(ahcb::county_by_id))
        .route("/ahcb/counties/:date/id/:id", get(ahcb::county_by_id))
        .route("/apb/verse", get(apb::verse))
        .route("/apb/verses", get(apb::verses))
        .route("/apb/verse-trend", get(apb::verse_trend))
        .route("/apb/verse-quotations", get(apb::verse_quotations))
        .route("/apb/bible-books", get(apb::bible_books))
        .route("/bom/parishes", get(bom::parishes))
        .route("/bom/bills", get(bom::bills))
        .route("/bom/causes", get(bom::causes))
        .route("/bom/christenings", get(bom::christenings))
        .route("/relcensus/city-membership", get(relcensus::city_membership))
        .route("/relcensus/denominations", get(relcensus::denominations))
        .route("/relcensus/denomination-families", get(relcensus::denomination_families))
        .route("/pinkerton/cases", get(pinkerton::cases))
        .route("/pinkerton/case/:id", get(pinkerton::case))
        .with_state(state)
}
