use crate::api::AppState;
use crate::domain::model::ClassificationError;
use crate::utils::error::ClassifyError;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Number Classification API",
        "usage": {
            "endpoint": "/api/classify-number",
            "example": "/api/classify-number?number=371"
        }
    }))
}

pub async fn health() -> &'static str {
    "OK"
}

/// Raw `number` value. Repeated keys are joined with `,`, which never
/// parses, so `?number=1&number=2` is rejected with `"1,2"` echoed.
fn number_param(pairs: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "number")
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

pub async fn classify_number(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let raw = match params {
        Ok(Query(pairs)) => number_param(&pairs),
        Err(rejection) => {
            tracing::debug!("Rejected query string: {}", rejection);
            None
        }
    };

    match state.service.classify(raw.as_deref()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            match &e {
                ClassifyError::InvalidNumber { .. } => {
                    tracing::debug!("Invalid classification input: {}", e)
                }
                _ => tracing::error!("Classification failed for {:?}: {}", raw, e),
            }
            bad_request(raw)
        }
    }
}

/// 400 with the raw input echoed. Error details stay in the logs.
fn bad_request(raw: Option<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ClassificationError::new(raw))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::router;
    use crate::core::ClassificationService;
    use crate::domain::ports::FactProvider;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot

    struct FixedProvider;

    #[async_trait]
    impl FactProvider for FixedProvider {
        async fn fetch_fact(&self, number: i64) -> Result<String> {
            Ok(format!("{} is a number.", number))
        }
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_number_param() {
        assert_eq!(number_param(&pairs(&[])), None);
        assert_eq!(number_param(&pairs(&[("other", "1")])), None);
        assert_eq!(
            number_param(&pairs(&[("number", "371"), ("other", "x")])),
            Some("371".to_string())
        );
        assert_eq!(
            number_param(&pairs(&[("number", "1"), ("number", "2")])),
            Some("1,2".to_string())
        );
    }

    #[tokio::test]
    async fn test_unexpected_failure_hides_details() {
        let service = ClassificationService::new(Arc::new(FixedProvider), Duration::from_secs(2))
            .with_profiler(|_| panic!("predicate exploded"));
        let app = router(AppState::new(service));

        let request = Request::builder()
            .uri("/api/classify-number?number=12")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"number": "12", "error": true}));
    }
}
