pub mod error;
pub mod handler;
pub mod request;
pub mod response;
pub mod wrapper;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::consult::ConsultationService;
use crate::store::ConsultationStore;
use handler::ApiDoc;

pub fn router(service: Arc<ConsultationService>, store: ConsultationStore) -> Router {
    Router::new()
        .route("/consult", post(handler::consult))
        .route("/consultations", get(handler::list_consultations))
        .route("/consultations/{id}", delete(handler::delete_consultation))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(service))
        .layer(Extension(store))
        // 로컬 프론트엔드 개발 서버에서의 호출 허용
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use sea_orm::ConnectionTrait;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ConsultConfig;
    use crate::consult::NO_KEYWORDS_MESSAGE;
    use crate::database::setup_memory_database;
    use crate::registry::{RegistryError, RegistryLookup};
    use crate::testing::{product, FakeChatModel, FakeRegistry};

    async fn app(model: FakeChatModel, registry: FakeRegistry) -> (Router, ConsultationStore) {
        let store = ConsultationStore::new(setup_memory_database().await);
        let service = Arc::new(ConsultationService::new(
            Arc::new(model),
            Arc::new(registry),
            ConsultConfig::default(),
        ));
        (router(service, store.clone()), store)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_consult_success_is_recorded() {
        let registry = FakeRegistry::default()
            .with("루테인", RegistryLookup::Found(vec![product("아이클리어 루테인", "눈 건강에 도움")]))
            .with("아스타잔틴", RegistryLookup::Unavailable(RegistryError::Timeout));
        let (app, _store) = app(FakeChatModel::with_keywords("루테인, 아스타잔틴"), registry).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/consult",
            Some(json!({ "message": "요즘 눈이 침침해요" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prescription"], "루테인, 아스타잔틴 등의 영양성분의 섭취가 필요해요.");
        assert_eq!(body["products"], json!([{ "name": "아이클리어 루테인", "desc": "눈 건강에 도움 요약" }]));
        assert_eq!(body["warnings"], json!([RegistryError::Timeout.to_string()]));
        assert!(body.get("result").is_none());

        let (status, list) = send(&app, Method::GET, "/consultations", None).await;
        assert_eq!(status, StatusCode::OK);
        let items = list.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["userMessage"], "요즘 눈이 침침해요");
        assert_eq!(
            items[0]["aiResponse"],
            "루테인, 아스타잔틴 등의 영양성분의 섭취가 필요해요.\n\n● 아이클리어 루테인\n눈 건강에 도움 요약"
        );
        assert_eq!(items[0]["summary"], "루테인, 아스타잔틴 등의 영양성분의 섭취가 필요해요.");
        assert!(items[0]["date"].is_string());
        assert!(items[0]["time"].is_string());
    }

    #[tokio::test]
    async fn test_consult_without_keywords_stores_failure_message() {
        let (app, _store) = app(FakeChatModel::with_keywords(""), FakeRegistry::default()).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/consult",
            Some(json!({ "message": "오늘 점심 뭐 먹지" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": NO_KEYWORDS_MESSAGE }));

        let (_, list) = send(&app, Method::GET, "/consultations", None).await;
        assert_eq!(list[0]["aiResponse"], NO_KEYWORDS_MESSAGE);
        assert_eq!(list[0]["summary"], "오늘 점심 뭐 먹지...");
    }

    #[tokio::test]
    async fn test_consult_reports_persistence_failure() {
        let (app, store) = app(FakeChatModel::with_keywords(""), FakeRegistry::default()).await;
        store.save("먼저 저장", "응답", None).await.unwrap();
        drop_table(&store).await;

        let (status, body) = send(&app, Method::POST, "/consult", Some(json!({ "message": "두통" }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], NO_KEYWORDS_MESSAGE);
        assert_eq!(body["warnings"], json!([handler::PERSISTENCE_WARNING]));

        let (status, list) = send(&app, Method::GET, "/consultations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_consult_llm_error_is_internal_error() {
        let registry =
            FakeRegistry::default().with("루테인", RegistryLookup::Found(vec![product("루테인", "눈 건강")]));
        let (app, _store) = app(FakeChatModel::with_keywords("루테인").failing_summaries(), registry).await;

        let (status, body) = send(&app, Method::POST, "/consult", Some(json!({ "message": "눈" }))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "서버 내부 오류가 발생했습니다." }));
    }

    #[tokio::test]
    async fn test_delete_consultation() {
        let (app, store) = app(FakeChatModel::default(), FakeRegistry::default()).await;
        let id = store.save("잠이 안 와요", "응답", None).await.unwrap();

        let (status, body) = send(&app, Method::DELETE, &format!("/consultations/{}", id + 1), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "해당 상담 기록을 찾을 수 없습니다." }));
        assert_eq!(store.list().await.len(), 1);

        let (status, body) = send(&app, Method::DELETE, &format!("/consultations/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "삭제되었습니다." }));
        assert!(store.list().await.is_empty());

        drop_table(&store).await;
        let (status, body) = send(&app, Method::DELETE, &format!("/consultations/{}", id), None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "삭제 중 오류가 발생했습니다." }));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let (app, _store) = app(FakeChatModel::default(), FakeRegistry::default()).await;

        let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/consult").is_some());
        assert!(doc["paths"].get("/consultations/{id}").is_some());
    }

    async fn drop_table(store: &ConsultationStore) {
        store
            .connection()
            .execute_unprepared("DROP TABLE consultation")
            .await
            .unwrap();
    }
}
