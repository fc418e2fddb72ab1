//! Church membership from the Census of Religious Bodies.

use crate::error::AppError;
use crate::extractors::QueryParams;
use crate::queries::relcensus::{
    CityMembership, Denomination, DenominationFamily, CENSUS_YEARS, CITY_MEMBERSHIP_BASE, DENOMINATIONS,
    DENOMINATION_FAMILIES,
};
use crate::response::json_response;
use crate::service::QueryService;
use crate::sql::SelectBuilder;
use crate::state::AppState;
use axum::{extract::State, response::Response};

fn census_year(params: &QueryParams) -> Result<i32, AppError> {
    let year = params.required_int("year")?;
    if !CENSUS_YEARS.contains(&year) {
        return Err(AppError::BadRequest(format!("no census for year {}", year)));
    }
    Ok(year)
}

pub async fn city_membership(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let year = census_year(&params)?;
    let denomination = params.optional("denomination")?;
    let family = params.optional("family")?;

    let mut b = SelectBuilder::new(CITY_MEMBERSHIP_BASE);
    b.eq("m.year", year);
    if let Some(d) = denomination {
        b.eq_ignore_case("d.name", d);
    }
    if let Some(f) = family {
        b.eq_ignore_case("d.family_relec", f);
    }
    b.order_by("m.state, m.city, d.name");
    let rows: Vec<CityMembership> = QueryService::fetch_all(&state.pool, &b.build()).await?;
    json_response(&rows)
}

pub async fn denominations(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let family = params.optional("family")?.map(str::to_string);
    let rows: Vec<Denomination> = DENOMINATIONS.query_as().bind(family).fetch_all(&state.pool).await?;
    json_response(&rows)
}

pub async fn denomination_families(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows: Vec<DenominationFamily> = DENOMINATION_FAMILIES.query_as().fetch_all(&state.pool).await?;
    json_response(&rows)
}
