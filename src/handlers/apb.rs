//! Verse lookups and quotation trends.

use crate::error::AppError;
use crate::extractors::QueryParams;
use crate::queries::apb::{
    BibleBook, Corpus, Quotation, TrendPoint, Verse, VerseTrend, BIBLE_BOOKS, QUOTATIONS_BASE, VERSE, VERSES,
    VERSE_TREND,
};
use crate::response::json_response;
use crate::service::validation::parse_enum;
use crate::service::QueryService;
use crate::sql::SelectBuilder;
use crate::state::AppState;
use axum::{extract::State, response::Response};

/// Exactly one `ref`; 404 when the verse is unknown.
pub async fn verse(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let reference = params.single("ref")?;
    let verse: Verse = VERSE
        .query_as()
        .bind(reference)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(reference.to_string()))?;
    json_response(&verse)
}

/// One or more `ref` values, matched as a set.
pub async fn verses(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let refs: Vec<String> = params
        .required_values("ref")?
        .into_iter()
        .map(str::to_string)
        .collect();
    let rows: Vec<Verse> = VERSES.query_as().bind(refs).fetch_all(&state.pool).await?;
    json_response(&rows)
}

/// `corpus` is required and must be recognized.
pub async fn verse_trend(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let reference = params.single("ref")?;
    let corpus: Corpus = parse_enum("corpus", params.single("corpus")?)?;
    let trend: Vec<TrendPoint> = VERSE_TREND
        .query_as()
        .bind(reference)
        .bind(corpus.as_str())
        .fetch_all(&state.pool)
        .await?;
    json_response(&VerseTrend {
        reference: reference.to_string(),
        corpus,
        trend,
    })
}

/// An unrecognized `corpus` drops the filter instead of failing.
pub async fn verse_quotations(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let reference = params.single("ref")?;
    let corpus = match params.optional("corpus")? {
        Some(raw) => match raw.parse::<Corpus>() {
            Ok(c) => Some(c),
            Err(()) => {
                tracing::debug!(corpus = raw, "ignoring unrecognized corpus filter");
                None
            }
        },
        None => None,
    };

    let mut b = SelectBuilder::new(QUOTATIONS_BASE);
    b.eq("q.reference_id", reference);
    if let Some(c) = corpus {
        b.eq("q.corpus", c.as_str());
    }
    b.order_by("q.date, q.doc_id");
    let rows: Vec<Quotation> = QueryService::fetch_all(&state.pool, &b.build()).await?;
    json_response(&rows)
}

pub async fn bible_books(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows: Vec<BibleBook> = BIBLE_BOOKS.query_as().fetch_all(&state.pool).await?;
    json_response(&rows)
}
