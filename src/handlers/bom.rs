//! Bills of Mortality: parishes, weekly/general bills, causes, christenings.

use crate::error::AppError;
use crate::extractors::QueryParams;
use crate::queries::bom::{
    Bill, BillType, Cause, Christening, CountType, Parish, BILLS_BASE, BILLS_DEFAULT_LIMIT, BILLS_MAX_LIMIT,
    CAUSES, CHRISTENINGS, PARISHES,
};
use crate::response::json_response;
use crate::service::validation::{parse_enum, year_range};
use crate::service::QueryService;
use crate::sql::SelectBuilder;
use crate::state::AppState;
use axum::{extract::State, response::Response};

fn required_years(params: &QueryParams) -> Result<(i32, i32), AppError> {
    year_range(params.required_int("start-year")?, params.required_int("end-year")?)
}

fn non_negative(name: &str, v: Option<i32>) -> Result<Option<i64>, AppError> {
    match v {
        Some(n) if n < 0 => Err(AppError::BadRequest(format!("{} must not be negative", name))),
        other => Ok(other.map(i64::from)),
    }
}

pub async fn parishes(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows: Vec<Parish> = PARISHES.query_as().fetch_all(&state.pool).await?;
    json_response(&rows)
}

/// `bill-type` is strict (unknown ⇒ 400); `count-type` is permissive
/// (unknown ⇒ no filter). `parish` may repeat.
pub async fn bills(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let (start, end) = required_years(&params)?;
    let bill_type = params
        .optional("bill-type")?
        .map(|raw| parse_enum::<BillType>("bill-type", raw))
        .transpose()?;
    let count_type = params
        .optional("count-type")?
        .and_then(|raw| match raw.parse::<CountType>() {
            Ok(c) => Some(c),
            Err(()) => {
                tracing::debug!(count_type = raw, "ignoring unrecognized count-type filter");
                None
            }
        });
    let parishes = params.int_values("parish")?;
    let limit = non_negative("limit", params.optional_int("limit")?)?
        .unwrap_or(BILLS_DEFAULT_LIMIT)
        .min(BILLS_MAX_LIMIT);
    let offset = non_negative("offset", params.optional_int("offset")?)?.unwrap_or(0);

    let mut b = SelectBuilder::new(BILLS_BASE);
    b.gte("w.year", start).lte("w.year", end);
    if let Some(t) = bill_type {
        b.eq("b.bill_type", t.db_value());
    }
    if let Some(c) = count_type {
        b.eq("b.count_type", c.db_value());
    }
    if !parishes.is_empty() {
        b.any("b.parish_id", parishes);
    }
    b.order_by("w.year, w.week_no, p.name").limit(limit).offset(offset);

    let rows: Vec<Bill> = QueryService::fetch_all(&state.pool, &b.build()).await?;
    json_response(&rows)
}

pub async fn causes(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let (start, end) = required_years(&params)?;
    let rows: Vec<Cause> = CAUSES.query_as().bind(start).bind(end).fetch_all(&state.pool).await?;
    json_response(&rows)
}

pub async fn christenings(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let (start, end) = required_years(&params)?;
    let rows: Vec<Christening> = CHRISTENINGS
        .query_as()
        .bind(start)
        .bind(end)
        .fetch_all(&state.pool)
        .await?;
    json_response(&rows)
}
