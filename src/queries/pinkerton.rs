//! Pinkerton National Detective Agency case files.

use crate::nullable::Nullable;
use crate::sql::Statement;
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CaseSummary {
    pub id: i32,
    pub title: String,
    pub start_year: Nullable<i32>,
    pub end_year: Nullable<i32>,
    pub location: Nullable<String>,
    pub client: Nullable<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Case {
    pub id: i32,
    pub title: String,
    pub start_year: Nullable<i32>,
    pub end_year: Nullable<i32>,
    pub location: Nullable<String>,
    pub client: Nullable<String>,
    pub summary: Nullable<String>,
    #[serde(rename = "box")]
    pub box_no: Nullable<String>,
    pub folder: Nullable<String>,
}

pub const CASES_BASE: &str =
    "SELECT c.id, c.title, c.start_year, c.end_year, c.location, c.client FROM pinkerton.cases c";

pub static CASE: Statement = Statement::new(
    "pinkerton_case",
    "SELECT id, title, start_year, end_year, location, client, summary, box AS box_no, folder \
     FROM pinkerton.cases WHERE id = $1",
);
