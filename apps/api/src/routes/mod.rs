pub mod health;

use axum::{middleware, routing::get, Router};

use crate::content::{admin, handlers};
use crate::models::career::{Education, Experience, Project};
use crate::models::recognition::{Achievement, Certification, Publication};
use crate::models::skills::{Interest, Language, Skill, SkillCategory};
use crate::state::AppState;
use crate::store::{ContentStore, Record};

/// List/create and per-id read/replace/delete routes for one entity.
fn collection_routes<S: ContentStore, R: Record>() -> Router<AppState<S>> {
    Router::new()
        .route(
            &format!("/api/v1/admin/{}", R::COLLECTION),
            get(admin::handle_list::<S, R>).post(admin::handle_create::<S, R>),
        )
        .route(
            &format!("/api/v1/admin/{}/:id", R::COLLECTION),
            get(admin::handle_get::<S, R>)
                .put(admin::handle_update::<S, R>)
                .delete(admin::handle_delete::<S, R>),
        )
}

pub fn build_router<S: ContentStore>(state: AppState<S>) -> Router {
    let admin_routes = Router::new()
        .route(
            "/api/v1/admin/profile",
            get(admin::handle_get_profile::<S>)
                .put(admin::handle_put_profile::<S>)
                .delete(admin::handle_delete_profile::<S>),
        )
        .merge(collection_routes::<S, SkillCategory>())
        .merge(collection_routes::<S, Skill>())
        .merge(collection_routes::<S, Language>())
        .merge(collection_routes::<S, Certification>())
        .merge(collection_routes::<S, Interest>())
        .merge(collection_routes::<S, Education>())
        .merge(collection_routes::<S, Experience>())
        .merge(collection_routes::<S, Project>())
        .merge(collection_routes::<S, Achievement>())
        .merge(collection_routes::<S, Publication>())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin::<S>,
        ));

    Router::new()
        .route("/health", get(health::health_handler::<S>))
        .route("/api/v1/resume", get(handlers::handle_get_resume::<S>))
        .merge(admin_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fixtures::{make_category, make_profile};
    use crate::store::MemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_config(admin_token: Option<&str>) -> Config {
        Config {
            database_url: None,
            database_max_connections: 1,
            admin_token: admin_token.map(str::to_string),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    fn app(store: MemoryStore, admin_token: Option<&str>) -> Router {
        build_router(AppState::new(store, test_config(admin_token)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let app = app(MemoryStore::new(), None);
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store"], "memory");
    }

    #[tokio::test]
    async fn test_resume_on_empty_store() {
        let app = app(MemoryStore::new(), None);
        let (status, body) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["profile"].is_null());
        assert_eq!(body["skills"], json!([]));
        assert_eq!(body["featured_projects"], json!([]));
    }

    #[tokio::test]
    async fn test_create_skill_then_resume_shows_it() {
        let app = app(MemoryStore::new(), None);
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/admin/skills",
            Some(json!({"name": "Rust", "proficiency": 95, "is_featured": true, "id": 77})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);

        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(resume["featured_skills"][0]["name"], "Rust");
    }

    #[tokio::test]
    async fn test_out_of_range_proficiency_rejected() {
        let app = app(MemoryStore::new(), None);
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/admin/skills",
            Some(json!({"name": "Rust", "proficiency": 120})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["fields"][0]["field"], "proficiency");
    }

    #[tokio::test]
    async fn test_skill_with_unknown_category_rejected() {
        let app = app(MemoryStore::new(), None);
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/admin/skills",
            Some(json!({"name": "Rust", "proficiency": 90, "category_id": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["fields"][0]["field"], "category_id");
    }

    #[tokio::test]
    async fn test_unknown_enum_value_rejected() {
        let app = app(MemoryStore::new(), None);
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/admin/languages",
            Some(json!({"name": "Klingon", "proficiency": "fluent"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert!(body["error"]["message"].as_str().unwrap().contains("fluent"));
    }

    #[tokio::test]
    async fn test_malformed_json_body_uses_error_envelope() {
        let app = app(MemoryStore::new(), None);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/admin/interests")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_record() {
        let app = app(MemoryStore::new(), None);
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/admin/interests/9",
            Some(json!({"name": "Chess"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::DELETE, "/api/v1/admin/interests/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = MemoryStore::new();
        store.insert(make_category("Backend", 3)).await.unwrap();
        let app = app(store, None);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/admin/skill-categories/1",
            Some(json!({"name": "Systems", "order": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Systems");

        let (_, fetched) = send(&app, Method::GET, "/api/v1/admin/skill-categories/1", None).await;
        assert_eq!(fetched["order"], 1);
    }

    #[tokio::test]
    async fn test_admin_list_search_and_order() {
        let app = app(MemoryStore::new(), None);
        for (company, start) in [("Acme", "2019-01-01"), ("Globex", "2023-02-01"), ("Initech", "2021-06-01")] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/v1/admin/experience",
                Some(json!({"company": company, "role": "Engineer", "start_date": start})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, all) = send(&app, Method::GET, "/api/v1/admin/experience", None).await;
        let companies: Vec<_> = all
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["company"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(companies, vec!["Globex", "Initech", "Acme"]);

        let (_, hits) = send(&app, Method::GET, "/api/v1/admin/experience?q=init", None).await;
        assert_eq!(hits.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_put_is_upsert() {
        let app = app(MemoryStore::new(), None);
        let (status, _) = send(&app, Method::GET, "/api/v1/admin/profile", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let mut profile = serde_json::to_value(make_profile("Ada")).unwrap();
        let (status, first) = send(&app, Method::PUT, "/api/v1/admin/profile", Some(profile.clone())).await;
        assert_eq!(status, StatusCode::OK);

        profile["name"] = json!("Ada Lovelace");
        let (_, second) = send(&app, Method::PUT, "/api/v1/admin/profile", Some(profile)).await;
        assert_eq!(second["id"], first["id"]);

        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(resume["profile"]["name"], "Ada Lovelace");

        let (status, _) = send(&app, Method::DELETE, "/api/v1/admin/profile", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, resume) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert!(resume["profile"].is_null());
    }

    #[tokio::test]
    async fn test_admin_token_enforced() {
        let app = app(MemoryStore::new(), Some("s3cret"));

        let (status, body) = send(&app, Method::GET, "/api/v1/admin/skills", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");

        let request = Request::builder()
            .uri("/api/v1/admin/skills")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Public routes stay open.
        let (status, _) = send(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
