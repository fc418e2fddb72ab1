//! Response encoding: JSON bodies and GeoJSON passthrough.

use crate::error::AppError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Shared-cache lifetime for the boundary collections; the datasets are frozen.
pub const GEO_CACHE_CONTROL: &str = "public, max-age=86400";

/// Serialize `data` as the whole response body. Encoding failures surface as 500.
pub fn json_response<T: Serialize>(data: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(data)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        body,
    )
        .into_response())
}

/// Write a database-built GeoJSON document byte-for-byte. `Vary` is left to
/// the compression layer, which appends it for every compressible body.
pub fn geojson_response(document: String, cacheable: bool) -> Response {
    let mut res = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        document,
    )
        .into_response();
    if cacheable {
        res.headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static(GEO_CACHE_CONTROL));
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;

    async fn body_string(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn geojson_is_passed_through_verbatim() {
        let doc = r#"{"type":"FeatureCollection",  "features":[{"type":"Feature","id":"va_state_1","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"z":1,"a":2}}]}"#;
        let res = geojson_response(doc.to_string(), true);
        assert_eq!(res.headers()[header::CACHE_CONTROL], GEO_CACHE_CONTROL);
        assert!(res.headers().get(header::VARY).is_none());
        assert_eq!(res.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(body_string(res).await, doc);
    }

    #[tokio::test]
    async fn uncached_geojson_has_no_cache_headers() {
        let res = geojson_response("{}".into(), false);
        assert!(res.headers().get(header::CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn bare_array_keeps_row_order() {
        #[derive(Serialize)]
        struct Row {
            year: i32,
            n: Nullable<f64>,
        }
        let rows = vec![
            Row { year: 1850, n: Nullable::new(1.5) },
            Row { year: 1840, n: Nullable::null() },
        ];
        let res = json_response(&rows).unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            body_string(res).await,
            r#"[{"year":1850,"n":1.5},{"year":1840,"n":null}]"#
        );
    }

    #[test]
    fn encode_failure_is_an_error() {
        use std::collections::HashMap;
        // Non-string map keys cannot be encoded as JSON object keys.
        let mut m: HashMap<(i32, i32), i32> = HashMap::new();
        m.insert((1, 2), 3);
        let err = json_response(&m).unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
