//! Boundary collections for a point in time. Dates outside a dataset's
//! coverage are clamped, never rejected.

use crate::error::AppError;
use crate::extractors::QueryParams;
use crate::queries::ahcb::{
    COUNTIES_BASE, COUNTIES_COLLECTION_PREFIX, COUNTIES_COLLECTION_SUFFIX, COUNTIES_RANGE, COUNTY_BY_ID, STATES,
    STATES_RANGE,
};
use crate::response::geojson_response;
use crate::service::QueryService;
use crate::sql::SelectBuilder;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};

pub async fn states(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, AppError> {
    let date = STATES_RANGE.clamp(&date)?;
    let doc: String = STATES.query_scalar().bind(date).fetch_one(&state.pool).await?;
    Ok(geojson_response(doc, true))
}

/// Optional `state` may repeat; codes are matched lower-case.
pub async fn counties(
    State(state): State<AppState>,
    Path(date): Path<String>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let date = COUNTIES_RANGE.clamp(&date)?;
    let states: Vec<String> = params.values("state").iter().map(|s| s.to_ascii_lowercase()).collect();

    let mut b = SelectBuilder::new(COUNTIES_BASE);
    b.lte("c.start_date", date).gte("c.end_date", date);
    if !states.is_empty() {
        b.any("c.state_terr", states);
    }
    let q = b.build().wrapped(COUNTIES_COLLECTION_PREFIX, COUNTIES_COLLECTION_SUFFIX);
    let doc = QueryService::fetch_text(&state.pool, &q).await?;
    Ok(geojson_response(doc, true))
}

pub async fn county_by_id(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let date = COUNTIES_RANGE.clamp(&date)?;
    let (count, doc): (i64, String) = COUNTY_BY_ID
        .query_as()
        .bind(date)
        .bind(&id)
        .fetch_one(&state.pool)
        .await?;
    if count == 0 {
        return Err(AppError::NotFound(format!("county {} on {}", id, date)));
    }
    Ok(geojson_response(doc, false))
}
