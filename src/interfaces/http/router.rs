//! HTTP router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ContactService, TravelCatalogService, WhatsappLinks};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{contact, health, metrics, pages};

/// State shared by the page and contact handlers.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub catalog: Arc<TravelCatalogService>,
    pub contact: Arc<ContactService>,
    pub whatsapp: Arc<WhatsappLinks>,
}

// `PortalContext` only needs the repositories
impl FromRef<AppState> for Arc<dyn RepositoryProvider> {
    fn from_ref(s: &AppState) -> Self {
        Arc::clone(&s.repos)
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Pages
        pages::overview,
        pages::travels,
        pages::travel_detail,
        pages::gallery,
        pages::travel_gallery,
        // Inquiries
        pages::whatsapp_travel,
        pages::whatsapp_general,
        // Contact
        contact::contact_page,
        contact::submit_contact,
        // Operations
        health::health_check,
        metrics::prometheus_metrics,
    ),
    components(
        schemas(
            ApiResponse<String>,
            contact::ContactForm,
            health::HealthResponse,
            health::HealthStatus,
        )
    ),
    tags(
        (name = "Pages", description = "Public pages: overview, listings, travel detail and galleries"),
        (name = "Inquiries", description = "Redirects to WhatsApp chats"),
        (name = "Contact", description = "Contact form forwarded to staff by mail"),
        (name = "Operations", description = "Health check and Prometheus metrics"),
    ),
    info(
        title = "Travel Portal",
        version = "1.0.0",
        description = "Page payloads of the travel agency portal. Every page carries the template \
                       name (`view`), the active portal and its social links.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the router with all routes.
///
/// `metrics` is `None` when no Prometheus recorder is installed; `/metrics`
/// and the request metrics middleware are then left out.
pub fn create_router(
    state: AppState,
    health_state: health::HealthState,
    metrics_state: Option<metrics::MetricsState>,
) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::overview))
        .route("/travels/", get(pages::travels))
        .route("/travel-details/{travel_uuid}/", get(pages::travel_detail))
        .route("/gallery/", get(pages::gallery))
        .route("/travel-gallery/{travel_uuid}/", get(pages::travel_gallery))
        .route("/whatsapp-travel/{travel_uuid}/", get(pages::whatsapp_travel))
        .route("/whatsapp-general/", get(pages::whatsapp_general))
        .route(
            "/contact/",
            get(contact::contact_page).post(contact::submit_contact),
        )
        .fallback(pages::not_found)
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(page_routes);

    if let Some(metrics_state) = metrics_state {
        let metrics_routes = Router::new()
            .route("/metrics", get(metrics::prometheus_metrics))
            .with_state(metrics_state);
        app = app
            .merge(metrics_routes)
            .layer(middleware::from_fn(metrics::http_metrics_middleware));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::{Duration, Utc};
    use sea_orm::Database;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::MediaUrls;
    use crate::domain::travel::model::tests::sample_travel;
    use crate::domain::{Portal, SocialMediaAccount, TravelImage};
    use crate::infrastructure::{InMemoryStorage, LogMailSender};

    const UPCOMING: &str = "8f0e3a52-6d38-4c55-9a43-1b1f1d7c9e10";
    const CANCELLED: &str = "1c9d58a0-3f5e-4b7a-8e1d-2a4c6b8d0f12";
    const FINISHED: &str = "5b7e2c14-9a0d-4f63-b1e8-7c3d5a9f2e40";

    fn seeded_storage() -> InMemoryStorage {
        let storage = InMemoryStorage::new();
        let today = Utc::now().date_naive();

        let mut upcoming = sample_travel();
        upcoming.start_date = today + Duration::days(30);
        upcoming.end_date = today + Duration::days(37);
        storage.insert_travel(upcoming.clone());

        let mut cancelled = upcoming.clone();
        cancelled.id = 2;
        cancelled.uuid = CANCELLED.to_string();
        cancelled.cancelled = true;
        storage.insert_travel(cancelled);

        let mut finished = upcoming;
        finished.id = 3;
        finished.uuid = FINISHED.to_string();
        finished.start_date = today - Duration::days(60);
        finished.end_date = today - Duration::days(53);
        storage.insert_travel(finished);

        storage.insert_image(TravelImage {
            id: 10,
            travel_id: 1,
            image: "travel/images/plaza.jpg".to_string(),
            is_gallery_image: false,
        });
        storage.add_staff_email("ventas@viajeras.test");
        storage
    }

    fn with_portal(storage: InMemoryStorage) -> InMemoryStorage {
        storage.insert_portal(Portal {
            id: 1,
            name: "Viajeras".to_string(),
            address: "Zona 10".to_string(),
            email: "hola@viajeras.test".to_string(),
            mobile_phone: "3357-0444".to_string(),
            theme_color: None,
            is_active: true,
        });
        storage.add_social_account(
            1,
            SocialMediaAccount {
                name: "Instagram".to_string(),
                url: "https://instagram.com/viajeras".to_string(),
            },
        );
        storage
    }

    async fn app(storage: InMemoryStorage) -> Router {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(storage);
        let state = AppState {
            catalog: Arc::new(TravelCatalogService::new(
                Arc::clone(&repos),
                MediaUrls::new("/media/"),
                9,
            )),
            contact: Arc::new(ContactService::new(
                Arc::clone(&repos),
                Arc::new(LogMailSender),
                "no-reply@viajeras.test",
            )),
            whatsapp: Arc::new(WhatsappLinks::new("502", "50233570444")),
            repos,
        };
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let health = health::HealthState::new(db, Arc::clone(&state.repos));
        create_router(state, health, None)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn overview_carries_view_portal_and_upcoming_travels() {
        let (status, body) = get(app(with_portal(seeded_storage())).await, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "travel/overview.html");
        assert_eq!(body["portal"]["name"], "Viajeras");
        assert_eq!(body["social_media_accounts"][0]["name"], "Instagram");
        let travels = body["travels"].as_array().unwrap();
        assert_eq!(travels.len(), 1);
        assert_eq!(travels[0]["uuid"], UPCOMING);
        assert_eq!(travels[0]["cover_image"], "/media/travel/travels/machu.jpg");
    }

    #[tokio::test]
    async fn travel_detail_is_nested_under_travel() {
        let uri = format!("/travel-details/{}/", UPCOMING.to_uppercase());
        let (status, body) = get(app(with_portal(seeded_storage())).await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "travel/details.html");
        assert_eq!(body["travel"]["uuid"], UPCOMING);
        assert_eq!(body["travel"]["counter"], 10);
        assert_eq!(body["travel"]["travel_images"][0], "/media/travel/images/plaza.jpg");
    }

    #[tokio::test]
    async fn cancelled_travel_detail_renders_fallback() {
        let uri = format!("/travel-details/{}/", CANCELLED);
        let (status, body) = get(app(with_portal(seeded_storage())).await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "travel/detail_not_found.html");
        assert_eq!(body["reason"], "Viaje no disponible");
    }

    #[tokio::test]
    async fn gallery_without_images_is_not_ready() {
        let uri = format!("/travel-gallery/{}/", FINISHED);
        let (status, body) = get(app(with_portal(seeded_storage())).await, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reason"], "Oops! Imagenes no se han cargado");
    }

    #[tokio::test]
    async fn past_travels_are_listed_in_gallery() {
        let (status, body) = get(app(with_portal(seeded_storage())).await, "/gallery/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "travel/gallery.html");
        assert_eq!(body["travels"][0]["travels"][0]["uuid"], FINISHED);
        assert_eq!(body["years"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_uuid_gets_no_results_page() {
        let (status, body) =
            get(app(with_portal(seeded_storage())).await, "/travel-details/not-a-uuid/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["reason"], "No se encontraron resultados");
    }

    #[tokio::test]
    async fn unknown_route_gets_no_results_page() {
        let (status, body) = get(app(with_portal(seeded_storage())).await, "/nope/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["view"], "travel/detail_not_found.html");
    }

    #[tokio::test]
    async fn whatsapp_travel_redirects_with_referer() {
        let request = Request::builder()
            .uri(format!("/whatsapp-travel/{}/", UPCOMING))
            .header(header::REFERER, "https://viajeras.test/travels/")
            .body(Body::empty())
            .unwrap();
        let response = app(with_portal(seeded_storage()))
            .await
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response.headers()[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("https://wa.me/50233570444?text="));
        assert!(location.contains("Machu+Picchu"));
        assert!(location.contains("https%3A%2F%2Fviajeras.test%2Ftravels%2F"));
    }

    #[tokio::test]
    async fn whatsapp_general_redirects() {
        let response = app(with_portal(seeded_storage()))
            .await
            .oneshot(Request::builder().uri("/whatsapp-general/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .starts_with("https://wa.me/50233570444?text=Hola"));
    }

    #[tokio::test]
    async fn pages_need_an_active_portal() {
        let (status, body) = get(app(seeded_storage()).await, "/travels/").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn contact_form_is_validated() {
        let (status, body) = post_form(
            app(with_portal(seeded_storage())).await,
            "/contact/",
            "name=Ana&email=not-an-email&subject=Hola&message=Info",
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn contact_form_is_forwarded() {
        let (status, body) = post_form(
            app(with_portal(seeded_storage())).await,
            "/contact/",
            "name=Ana&email=ana%40correo.test&subject=Hola&message=Quiero+viajar",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "contact.html");
        assert_eq!(body["sent"], true);
    }

    #[tokio::test]
    async fn health_reports_database_and_portal() {
        let (status, body) = get(app(with_portal(seeded_storage())).await, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["database_latency_ms"].is_u64());
        assert_eq!(body["portal_configured"], true);
    }

    #[tokio::test]
    async fn openapi_document_lists_every_route() {
        let (status, body) = get(app(seeded_storage()).await, "/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        for path in [
            "/",
            "/travels/",
            "/travel-details/{travel_uuid}/",
            "/gallery/",
            "/travel-gallery/{travel_uuid}/",
            "/whatsapp-travel/{travel_uuid}/",
            "/whatsapp-general/",
            "/contact/",
            "/health",
            "/metrics",
        ] {
            assert!(body["paths"][path].is_object(), "{} is not documented", path);
        }
        assert!(body["components"]["schemas"]["HealthStatus"].is_object());
    }

    #[tokio::test]
    async fn health_is_degraded_without_portal() {
        let (status, body) = get(app(seeded_storage()).await, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["portal_configured"], false);
    }
}
