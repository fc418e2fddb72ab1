//! Detective agency case files.

use crate::error::AppError;
use crate::extractors::QueryParams;
use crate::queries::pinkerton::{Case, CaseSummary, CASE, CASES_BASE};
use crate::response::json_response;
use crate::service::validation::{parse_int, year_range};
use crate::service::QueryService;
use crate::sql::SelectBuilder;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};

pub async fn cases(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let start = params.optional_int("start-year")?;
    let end = params.optional_int("end-year")?;
    if let (Some(s), Some(e)) = (start, end) {
        year_range(s, e)?;
    }

    let mut b = SelectBuilder::new(CASES_BASE);
    if let Some(s) = start {
        b.gte("c.start_year", s);
    }
    if let Some(e) = end {
        b.lte("c.end_year", e);
    }
    b.order_by("c.start_year, c.id");
    let rows: Vec<CaseSummary> = QueryService::fetch_all(&state.pool, &b.build()).await?;
    json_response(&rows)
}

pub async fn case(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    let id = parse_int("id", &id)?;
    let case: Case = CASE
        .query_as()
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("case {}", id)))?;
    json_response(&case)
}
