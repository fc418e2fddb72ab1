//! Router behaviour that does not need a live database: validation answers
//! before the pool is touched, and the pool here points at a closed port so
//! any request that does reach it fails with a 500.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use dataset_api::response::geojson_response;
use dataset_api::{apply_middleware, build_router, AppState};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tower::ServiceExt;

fn unreachable_state() -> AppState {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(300))
        .connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .expect("lazy pool");
    AppState { pool }
}

fn app() -> Router {
    build_router(unreachable_state(), false)
}

async fn get_uri(app: Router, uri: &str) -> (StatusCode, String) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn unmatched_route_is_plain_404() {
    let res = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"404 page not found");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn health_and_readiness() {
    let (status, body) = get_uri(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);

    let (status, body) = get_uri(app(), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let ready: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(ready["database"], "unavailable");
    assert_eq!(ready["statements"], 12);

    let (status, body) = get_uri(app(), "/version").await;
    assert_eq!(status, StatusCode::OK);
    let version: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(version["name"], "dataset-api");
    assert_eq!(version["datasets"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn malformed_parameters_are_rejected_before_the_database() {
    let cases = [
        "/apb/verse",
        "/apb/verse?ref=",
        "/apb/verse?ref=John+3:16&ref=John+3:17",
        "/apb/verses",
        "/apb/verse-trend?ref=John+3:16",
        "/apb/verse-trend?ref=John+3:16&corpus=gale",
        "/apb/verse-quotations",
        "/bom/bills?end-year=1754",
        "/bom/bills?start-year=abc&end-year=1754",
        "/bom/bills?start-year=1754&end-year=1669",
        "/bom/bills?start-year=1669&end-year=1754&parish=aldgate",
        "/bom/bills?start-year=1669&end-year=1754&limit=-1",
        "/bom/causes?start-year=1669",
        "/bom/christenings?start-year=x&end-year=1700",
        "/relcensus/city-membership",
        "/relcensus/city-membership?year=1927",
        "/relcensus/city-membership?year=1926&denomination=a&denomination=b",
        "/pinkerton/cases?start-year=1890&end-year=1880",
        "/pinkerton/case/abc",
        "/ahcb/states/1920-15-40/",
        "/ahcb/states/1920-15-40",
        "/ahcb/states/1789-7-4/",
        "/ahcb/states/+1789-07-04/",
        "/ahcb/counties/July-4-1789/",
        "/ahcb/counties/17890704/id/va_ffx/",
    ];
    for uri in cases {
        let (status, body) = get_uri(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, "Bad Request", "{uri}");
    }
}

/// `bill-type` is strict: an unknown value is a 400.
#[tokio::test]
async fn unknown_bill_type_is_rejected() {
    let (status, _) = get_uri(app(), "/bom/bills?start-year=1669&end-year=1754&bill-type=annual").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// `count-type` is permissive: an unknown value drops the filter, so the
/// request proceeds to the (unreachable) database.
#[tokio::test]
async fn unknown_count_type_is_ignored() {
    let (status, body) = get_uri(app(), "/bom/bills?start-year=1669&end-year=1754&count-type=drowned").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}

#[tokio::test]
async fn unknown_quotation_corpus_is_ignored() {
    let (status, _) = get_uri(app(), "/apb/verse-quotations?ref=John+3:16&corpus=gale").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Any non-empty reference goes to the lookup; only the database decides
/// whether it exists.
#[tokio::test]
async fn verse_references_are_not_shape_checked() {
    for uri in [
        "/apb/verse?ref=Unknownbook",
        "/apb/verse?ref=John+3:16+(KJV)",
        "/apb/verse?ref=St.+John+3:16",
        "/apb/verses?ref=not-a-verse&ref=John+3:16",
        "/apb/verse-trend?ref=Unknownbook&corpus=chronam",
    ] {
        let (status, _) = get_uri(app(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
}

#[tokio::test]
async fn out_of_range_dates_are_clamped_not_rejected() {
    for uri in ["/ahcb/states/2020-06-09/", "/ahcb/states/1620-06-09/", "/ahcb/counties/1500-01-01/?state=va"] {
        let (status, _) = get_uri(app(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
}

#[tokio::test]
async fn database_failure_hides_detail() {
    let (status, body) = get_uri(app(), "/bom/parishes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
    assert!(!body.contains("127.0.0.1"));
}

async fn boom() -> &'static str {
    panic!("boom")
}

async fn fine() -> &'static str {
    "fine"
}

#[tokio::test]
async fn panics_become_500_and_the_service_keeps_serving() {
    let router = Router::new().route("/boom", get(boom)).route("/fine", get(fine));
    let app = apply_middleware(router, true);

    let (status, body) = get_uri(app.clone(), "/boom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");

    let (status, body) = get_uri(app, "/fine").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "fine");
}

async fn feature_collection() -> axum::response::Response {
    let doc = r#"{"type":"FeatureCollection","features":[{"type":"Feature","id":"va_state_1","geometry":null,"properties":{"name":"Virginia"}}]}"#;
    geojson_response(doc.to_string(), true)
}

#[tokio::test]
async fn compressed_geojson_varies_on_encoding_once() {
    let app = apply_middleware(Router::new().route("/geo", get(feature_collection)), false);
    let res = app
        .oneshot(
            Request::builder()
                .uri("/geo")
                .header(header::ORIGIN, "https://example.org")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_ENCODING], "gzip");
    assert_eq!(res.headers()[header::CACHE_CONTROL], "public, max-age=86400");
    let accept_encoding = res
        .headers()
        .get_all(header::VARY)
        .iter()
        .filter(|v| v.to_str().unwrap().to_ascii_lowercase().contains("accept-encoding"))
        .count();
    assert_eq!(accept_encoding, 1);
}
