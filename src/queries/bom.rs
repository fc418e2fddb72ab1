//! London Bills of Mortality: weekly and general bills of burials by parish,
//! causes of death, christenings.

use crate::nullable::Nullable;
use crate::sql::Statement;
use serde::Serialize;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillType {
    Weekly,
    General,
}

impl BillType {
    /// Value stored in `bom.bill_of_mortality.bill_type`.
    pub fn db_value(&self) -> &'static str {
        match self {
            BillType::Weekly => "Weekly",
            BillType::General => "General",
        }
    }
}

impl FromStr for BillType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(BillType::Weekly),
            "general" => Ok(BillType::General),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountType {
    Buried,
    Plague,
}

impl CountType {
    pub fn db_value(&self) -> &'static str {
        match self {
            CountType::Buried => "Buried",
            CountType::Plague => "Plague",
        }
    }
}

impl FromStr for CountType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buried" => Ok(CountType::Buried),
            "plague" => Ok(CountType::Plague),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Parish {
    pub id: i32,
    pub name: String,
    pub canonical_name: Nullable<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Bill {
    pub id: i32,
    pub parish_id: i32,
    pub parish_name: String,
    pub count_type: String,
    pub count: Nullable<i32>,
    pub week_id: String,
    pub week_no: Nullable<i32>,
    pub start_day: Nullable<i32>,
    pub start_month: Nullable<String>,
    pub end_day: Nullable<i32>,
    pub end_month: Nullable<String>,
    pub year: i32,
    pub bill_type: String,
    pub missing: Nullable<bool>,
    pub illegible: Nullable<bool>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Cause {
    pub id: i32,
    pub death: String,
    pub count: Nullable<i32>,
    pub week_id: String,
    pub week_no: Nullable<i32>,
    pub year: i32,
    pub descriptive_text: Nullable<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Christening {
    pub id: i32,
    pub christening: String,
    pub count: Nullable<i32>,
    pub week_id: String,
    pub week_no: Nullable<i32>,
    pub year: i32,
}

/// Default page size for `/bom/bills`.
pub const BILLS_DEFAULT_LIMIT: i64 = 25;
pub const BILLS_MAX_LIMIT: i64 = 1000;

pub const BILLS_BASE: &str = "SELECT b.id, b.parish_id, p.name AS parish_name, b.count_type, b.count, \
     b.week_id, w.week_no, w.start_day, w.start_month, w.end_day, w.end_month, w.year, \
     b.bill_type, b.missing, b.illegible \
     FROM bom.bill_of_mortality b \
     JOIN bom.parishes p ON p.id = b.parish_id \
     JOIN bom.week w ON w.week_id = b.week_id";

pub static PARISHES: Statement = Statement::new(
    "bom_parishes",
    "SELECT id, name, canonical_name FROM bom.parishes ORDER BY name",
);

pub static CAUSES: Statement = Statement::new(
    "bom_causes",
    "SELECT c.id, c.death, c.count, c.week_id, w.week_no, w.year, c.descriptive_text \
     FROM bom.causes_of_death c JOIN bom.week w ON w.week_id = c.week_id \
     WHERE w.year >= $1 AND w.year <= $2 \
     ORDER BY w.year, w.week_no, c.death",
);

pub static CHRISTENINGS: Statement = Statement::new(
    "bom_christenings",
    "SELECT ch.id, ch.christening, ch.count, ch.week_id, w.week_no, w.year \
     FROM bom.christenings ch JOIN bom.week w ON w.week_id = ch.week_id \
     WHERE w.year >= $1 AND w.year <= $2 \
     ORDER BY w.year, w.week_no, ch.christening",
);
