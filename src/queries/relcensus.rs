//! U.S. Census of Religious Bodies: membership by city and denomination.

use crate::nullable::Nullable;
use crate::sql::Statement;
use serde::Serialize;

/// Census years with city-level membership data.
pub const CENSUS_YEARS: [i32; 4] = [1906, 1916, 1926, 1936];

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CityMembership {
    pub city: String,
    pub state: String,
    pub lat: Nullable<f64>,
    pub lon: Nullable<f64>,
    pub year: i32,
    pub denomination: String,
    pub family_relec: Nullable<String>,
    pub churches: Nullable<i32>,
    pub members_total: Nullable<i32>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Denomination {
    pub name: String,
    pub short_name: Nullable<String>,
    pub denomination_id: String,
    pub family_census: Nullable<String>,
    pub family_relec: Nullable<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DenominationFamily {
    pub family_relec: String,
}

pub const CITY_MEMBERSHIP_BASE: &str = "SELECT m.city, m.state, m.lat, m.lon, m.year, \
     d.name AS denomination, d.family_relec, m.churches, m.members_total \
     FROM relcensus.membership_city m \
     JOIN relcensus.denominations d ON d.denomination_id = m.denomination_id";

/// `$1` is an optional family; NULL returns every denomination.
pub static DENOMINATIONS: Statement = Statement::new(
    "relcensus_denominations",
    "SELECT name, short_name, denomination_id, family_census, family_relec \
     FROM relcensus.denominations \
     WHERE ($1::text IS NULL OR lower(family_relec) = lower($1)) \
     ORDER BY name",
);

pub static DENOMINATION_FAMILIES: Statement = Statement::new(
    "relcensus_denomination_families",
    "SELECT DISTINCT family_relec FROM relcensus.denominations \
     WHERE family_relec IS NOT NULL ORDER BY family_relec",
);
