//! America's Public Bible: verse texts and their quotation rates in
//! historical newspapers.

use crate::nullable::Nullable;
use crate::sql::Statement;
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

/// Newspaper corpus a quotation was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Corpus {
    /// Chronicling America.
    Chronam,
    /// Nineteenth Century U.S. Newspapers.
    Ncnp,
}

impl Corpus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Corpus::Chronam => "chronam",
            Corpus::Ncnp => "ncnp",
        }
    }
}

impl FromStr for Corpus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chronam" => Ok(Corpus::Chronam),
            "ncnp" => Ok(Corpus::Ncnp),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Verse {
    pub reference: String,
    pub text: Nullable<String>,
    pub version: Nullable<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TrendPoint {
    pub year: i32,
    pub n: Nullable<f64>,
    pub smoothed: Nullable<f64>,
}

#[derive(Debug, Serialize)]
pub struct VerseTrend {
    pub reference: String,
    pub corpus: Corpus,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Quotation {
    pub doc_id: String,
    pub date: Nullable<NaiveDate>,
    pub title: Nullable<String>,
    pub state: Nullable<String>,
    pub corpus: String,
    pub probability: f64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BibleBook {
    pub book: String,
    pub testament: String,
    pub position: i32,
}

pub static VERSE: Statement = Statement::new(
    "apb_verse",
    "SELECT reference_id AS reference, text, version FROM apb.scriptures WHERE reference_id = $1",
);

pub static VERSES: Statement = Statement::new(
    "apb_verses",
    "SELECT reference_id AS reference, text, version FROM apb.scriptures \
     WHERE reference_id = ANY($1) ORDER BY reference_id",
);

pub static VERSE_TREND: Statement = Statement::new(
    "apb_verse_trend",
    "SELECT year, n, smoothed FROM apb.rate_quotations_verses \
     WHERE reference_id = $1 AND corpus = $2 ORDER BY year",
);

pub static BIBLE_BOOKS: Statement = Statement::new(
    "apb_bible_books",
    "SELECT book, testament, position FROM apb.bible_books ORDER BY position",
);

pub const QUOTATIONS_BASE: &str = "SELECT q.doc_id, q.date, i.title, i.state, q.corpus, q.probability \
     FROM apb.quotations q LEFT JOIN apb.items i ON i.id = q.doc_id";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::service::validation::parse_enum;

    #[test]
    fn corpus_is_case_insensitive() {
        assert_eq!(parse_enum::<Corpus>("corpus", "ChronAm").unwrap(), Corpus::Chronam);
        assert_eq!(parse_enum::<Corpus>("corpus", "NCNP").unwrap(), Corpus::Ncnp);
        assert!(matches!(
            parse_enum::<Corpus>("corpus", "gale"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn trend_envelope_shape() {
        let body = VerseTrend {
            reference: "John 3:16".into(),
            corpus: Corpus::Ncnp,
            trend: vec![TrendPoint {
                year: 1840,
                n: Nullable::new(3.0),
                smoothed: Nullable::null(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "reference": "John 3:16",
                "corpus": "ncnp",
                "trend": [{"year": 1840, "n": 3.0, "smoothed": null}]
            })
        );
    }
}
