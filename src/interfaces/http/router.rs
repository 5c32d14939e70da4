//! API router with OpenAPI document

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::FromRef,
    handler::Handler,
    http::{header, Method, StatusCode},
    middleware,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::application::voice::session_config;
use crate::application::{
    AllergenService, AvailabilityService, MenuService, OrderService, ReservationService,
    SessionRateLimiter, VoiceSessionProvider, VoiceSessionService,
};
use crate::config::AppConfig;
use crate::domain::{RepositoryProvider, ResponseCache};

use super::error::method_not_allowed;
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::{allergens, availability, health, menu, orders, reservations, session};

/// Unified state for every `/api/*` route.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub availability: Arc<AvailabilityService>,
    pub reservations: Arc<ReservationService>,
    pub menu: Arc<MenuService>,
    pub allergens: Arc<AllergenService>,
    pub orders: Arc<OrderService>,
    pub voice: Arc<VoiceSessionService>,
    /// Read out in fallback messages when something breaks
    pub restaurant_phone: String,
}

impl ApiState {
    pub fn from_config(
        config: &AppConfig,
        repos: Arc<dyn RepositoryProvider>,
        cache: Arc<dyn ResponseCache>,
        provider: Arc<dyn VoiceSessionProvider>,
    ) -> Self {
        let limiter = SessionRateLimiter::new(
            config.voice.max_sessions_per_address,
            config.voice.rate_limit_window(),
        );
        Self {
            availability: Arc::new(AvailabilityService::new(
                repos.clone(),
                cache.clone(),
                config.cache.availability_ttl(),
            )),
            reservations: Arc::new(ReservationService::new(repos.clone())),
            menu: Arc::new(MenuService::new(
                repos.clone(),
                cache,
                config.cache.menu_ttl(),
            )),
            allergens: Arc::new(AllergenService::new(repos.clone())),
            orders: Arc::new(OrderService::new(repos, config.restaurant.delivery_fee)),
            voice: Arc::new(VoiceSessionService::new(
                limiter,
                provider,
                config.voice.api_key.clone(),
                session_config(&config.restaurant, &config.voice),
            )),
            restaurant_phone: config.restaurant.phone.clone(),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for availability::AvailabilityState {
    fn from_ref(s: &ApiState) -> Self {
        Self {
            service: Arc::clone(&s.availability),
        }
    }
}

impl FromRef<ApiState> for reservations::ReservationState {
    fn from_ref(s: &ApiState) -> Self {
        Self {
            service: Arc::clone(&s.reservations),
            restaurant_phone: s.restaurant_phone.clone(),
        }
    }
}

impl FromRef<ApiState> for menu::MenuState {
    fn from_ref(s: &ApiState) -> Self {
        Self {
            service: Arc::clone(&s.menu),
        }
    }
}

impl FromRef<ApiState> for allergens::AllergenState {
    fn from_ref(s: &ApiState) -> Self {
        Self {
            service: Arc::clone(&s.allergens),
            restaurant_phone: s.restaurant_phone.clone(),
        }
    }
}

impl FromRef<ApiState> for orders::OrderState {
    fn from_ref(s: &ApiState) -> Self {
        Self {
            service: Arc::clone(&s.orders),
            restaurant_phone: s.restaurant_phone.clone(),
        }
    }
}

impl FromRef<ApiState> for session::SessionState {
    fn from_ref(s: &ApiState) -> Self {
        Self {
            service: Arc::clone(&s.voice),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        availability::check_availability,
        reservations::create_reservation,
        reservations::cancel_reservation,
        menu::get_menu,
        allergens::check_allergens,
        orders::create_order,
        session::create_session,
    ),
    components(
        schemas(
            health::HealthResponse,
            health::ComponentHealth,
            availability::CheckAvailabilityRequest,
            reservations::CreateReservationRequest,
            reservations::CancelReservationRequest,
            menu::GetMenuRequest,
            allergens::CheckAllergensRequest,
            orders::CreateOrderRequest,
            orders::OrderItemRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Reservations", description = "Table availability, booking and cancellation"),
        (name = "Menu", description = "Menu listing and allergen checks"),
        (name = "Orders", description = "Pickup and delivery orders"),
        (name = "Voice", description = "Ephemeral realtime voice sessions"),
    ),
    info(
        title = "Restaurant Voice Assistant API",
        version = "1.0.0",
        description = "Tool endpoints called by the restaurant's realtime voice assistant",
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Answer plain `OPTIONS` requests; CORS preflights are handled by the
/// CORS layer before they get here.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST-only tool endpoint: `OPTIONS` gets an empty 200, anything else a
/// JSON 405.
fn tool_route<H, T>(handler: H) -> MethodRouter<ApiState>
where
    H: Handler<T, ApiState>,
    T: 'static,
{
    post(handler)
        .options(preflight)
        .fallback(method_not_allowed)
}

/// Create the application router
pub fn create_router(
    api_state: ApiState,
    health_state: health::HealthState,
    metrics_state: MetricsState,
    public_dir: &Path,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/check-availability",
            tool_route(availability::check_availability),
        )
        .route(
            "/create-reservation",
            tool_route(reservations::create_reservation),
        )
        .route(
            "/cancel-reservation",
            tool_route(reservations::cancel_reservation),
        )
        .route("/get-menu", tool_route(menu::get_menu))
        .route("/check-allergens", tool_route(allergens::check_allergens))
        .route("/create-order", tool_route(orders::create_order))
        .route("/session", tool_route(session::create_session))
        .with_state(api_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(metrics_state);

    Router::new()
        .route("/api-doc/openapi.json", get(openapi_json))
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(public_dir))
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{repos, FakeProvider, DAY};
    use crate::infrastructure::database::testing::{available_tables, seeded_db, set_available_tables, slot};
    use crate::infrastructure::InMemoryCache;
    use axum::body::Body;
    use axum::http::{Request, Response};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use sea_orm::DatabaseConnection;
    use serde_json::{json, Value};
    use std::sync::atomic::Ordering;
    use tempfile::TempDir;
    use tokio::time::Instant;
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        db: DatabaseConnection,
        _public: TempDir,
    }

    impl TestApp {
        async fn send(&self, req: Request<Body>) -> Response<Body> {
            self.router.clone().oneshot(req).await.unwrap()
        }

        async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
            let resp = self
                .send(
                    Request::builder()
                        .method("POST")
                        .uri(uri)
                        .header("content-type", "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await;
            let status = resp.status();
            (status, json_body(resp).await)
        }
    }

    async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
        axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn json_body(resp: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(resp).await).unwrap()
    }

    fn config(api_key: Option<&str>, max_sessions: u32) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.voice.api_key = api_key.map(String::from);
        cfg.voice.max_sessions_per_address = max_sessions;
        cfg
    }

    async fn app_with(cfg: AppConfig, provider: Arc<FakeProvider>) -> TestApp {
        let db = seeded_db().await;
        let public = tempfile::tempdir().unwrap();
        std::fs::write(public.path().join("index.html"), "<h1>Il-Barri</h1>").unwrap();

        let state = ApiState::from_config(&cfg, repos(&db), Arc::new(InMemoryCache::new()), provider);
        let health_state = health::HealthState {
            db: db.clone(),
            started_at: Arc::new(Instant::now()),
        };
        let metrics_state = MetricsState {
            handle: PrometheusBuilder::new().build_recorder().handle(),
        };
        TestApp {
            router: create_router(state, health_state, metrics_state, public.path()),
            db,
            _public: public,
        }
    }

    async fn app() -> TestApp {
        app_with(config(Some("sk-test"), 10), Arc::new(FakeProvider::ok())).await
    }

    fn is_confirmation_code(code: &str) -> bool {
        code.len() == 9
            && code.starts_with("RES")
            && code[3..].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    // ── Routing ────────────────────────────────────────────────

    #[tokio::test]
    async fn health_reports_version_and_database() {
        let app = app().await;
        let resp = app
            .send(Request::get("/health").body(Body::empty()).unwrap())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["database"]["status"], "ok");
        assert!(body["uptime_seconds"].is_u64());
    }

    #[tokio::test]
    async fn non_post_methods_get_json_405() {
        let app = app().await;
        for uri in ["/api/check-availability", "/api/get-menu", "/api/session"] {
            let resp = app
                .send(Request::get(uri).body(Body::empty()).unwrap())
                .await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
            assert_eq!(json_body(resp).await, json!({"error": "Method not allowed"}));
        }
    }

    #[tokio::test]
    async fn plain_options_returns_empty_200() {
        let app = app().await;
        let resp = app
            .send(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/create-order")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        let app = app().await;
        let resp = app
            .send(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/get-menu")
                    .header("origin", "https://voice.example.com")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn request_id_is_generated_or_echoed() {
        let app = app().await;
        let resp = app
            .send(Request::get("/health").body(Body::empty()).unwrap())
            .await;
        assert!(resp.headers().contains_key("x-request-id"));

        let resp = app
            .send(
                Request::get("/health")
                    .header("x-request-id", "call-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(resp.headers()["x-request-id"], "call-42");
    }

    #[tokio::test]
    async fn static_files_are_served_from_public_dir() {
        let app = app().await;
        let resp = app.send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_bytes(resp).await, b"<h1>Il-Barri</h1>");

        let resp = app
            .send(Request::get("/missing.js").body(Body::empty()).unwrap())
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn openapi_document_lists_tool_endpoints() {
        let app = app().await;
        let resp = app
            .send(Request::get("/api-doc/openapi.json").body(Body::empty()).unwrap())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let doc = json_body(resp).await;
        for path in [
            "/api/check-availability",
            "/api/create-reservation",
            "/api/cancel-reservation",
            "/api/get-menu",
            "/api/check-allergens",
            "/api/create-order",
            "/api/session",
        ] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[tokio::test]
    async fn metrics_endpoint_renders_text() {
        let app = app().await;
        let resp = app
            .send(Request::get("/metrics").body(Body::empty()).unwrap())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    // ── Availability ───────────────────────────────────────────

    #[tokio::test]
    async fn availability_requires_all_parameters() {
        let app = app().await;
        let (status, body) = app
            .post("/api/check-availability", json!({"date": DAY, "time": "19:00"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameters");
        assert_eq!(body["required"], json!(["date", "time", "party_size"]));
    }

    #[tokio::test]
    async fn malformed_json_uses_missing_parameters_shape() {
        let app = app().await;
        let resp = app
            .send(
                Request::post("/api/check-availability")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"date\": "))
                    .unwrap(),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Missing required parameters");
    }

    #[tokio::test]
    async fn unparseable_date_is_rejected() {
        let app = app().await;
        let (status, body) = app
            .post(
                "/api/check-availability",
                json!({"date": "next friday", "time": "19:00", "party_size": 2}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid date or time");
    }

    #[tokio::test]
    async fn repeated_availability_checks_are_served_from_cache() {
        let app = app().await;
        let request = || {
            Request::post("/api/check-availability")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"date": DAY, "time": "19:00", "party_size": 4}).to_string(),
                ))
                .unwrap()
        };

        let first = body_bytes(app.send(request()).await).await;
        let parsed: Value = serde_json::from_slice(&first).unwrap();
        assert_eq!(parsed["available"], true);
        assert_eq!(parsed["tables_available"], 5);

        set_available_tables(&app.db, slot("19:00"), 0).await;

        let second = body_bytes(app.send(request()).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn full_slot_is_reported_unavailable() {
        let app = app().await;
        set_available_tables(&app.db, slot("20:00"), 0).await;
        let (status, body) = app
            .post(
                "/api/check-availability",
                json!({"date": DAY, "time": "20:00", "party_size": 2}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false);
        assert!(body.get("tables_available").is_none());
    }

    // ── Reservations ───────────────────────────────────────────

    fn reservation_body(time: &str) -> Value {
        json!({
            "customer_name": "Maria Borg",
            "customer_phone": "+356 9912 3456",
            "party_size": 4,
            "reservation_date": DAY,
            "reservation_time": time,
            "dietary_restrictions": ["vegetarian"],
            "occasion": "birthday"
        })
    }

    #[tokio::test]
    async fn reservation_takes_a_table() {
        let app = app().await;
        let (status, body) = app
            .post("/api/create-reservation", reservation_body("19:30"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["availability_updated"], true);
        assert_eq!(body["dietary_restrictions"], json!(["vegetarian"]));
        assert!(is_confirmation_code(body["confirmation_code"].as_str().unwrap()));
        assert_eq!(available_tables(&app.db, slot("19:30")).await, 4);
    }

    #[tokio::test]
    async fn reservation_on_full_slot_still_succeeds() {
        let app = app().await;
        set_available_tables(&app.db, slot("19:30"), 0).await;
        let (status, body) = app
            .post("/api/create-reservation", reservation_body("19:30"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["availability_updated"], false);
        assert_eq!(available_tables(&app.db, slot("19:30")).await, 0);
    }

    #[tokio::test]
    async fn reservation_without_phone_is_rejected() {
        let app = app().await;
        let mut body = reservation_body("19:30");
        body["customer_phone"] = json!("");
        let (status, body) = app.post("/api/create-reservation", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameters");
        assert_eq!(body["required"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn cancellation_returns_the_table_once() {
        let app = app().await;
        let (_, created) = app
            .post("/api/create-reservation", reservation_body("20:30"))
            .await;
        let code = created["confirmation_code"].as_str().unwrap().to_string();
        assert_eq!(available_tables(&app.db, slot("20:30")).await, 4);

        let (status, body) = app
            .post(
                "/api/cancel-reservation",
                json!({"confirmation_code": code.to_lowercase(), "customer_phone": "35699123456"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "cancelled");
        assert_eq!(body["availability_updated"], true);
        assert_eq!(available_tables(&app.db, slot("20:30")).await, 5);

        let (status, body) = app
            .post(
                "/api/cancel-reservation",
                json!({"confirmation_code": code, "customer_phone": "+356 9912 3456"}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Reservation already cancelled");
    }

    #[tokio::test]
    async fn cancellation_with_wrong_phone_is_not_found() {
        let app = app().await;
        let (_, created) = app
            .post("/api/create-reservation", reservation_body("21:00"))
            .await;
        let (status, body) = app
            .post(
                "/api/cancel-reservation",
                json!({
                    "confirmation_code": created["confirmation_code"],
                    "customer_phone": "+356 7700 0000"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Reservation not found");
    }

    // ── Menu and allergens ─────────────────────────────────────

    #[tokio::test]
    async fn menu_without_filters_lists_available_items() {
        let app = app().await;
        let resp = app
            .send(Request::post("/api/get-menu").body(Body::empty()).unwrap())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["category"], "all");
        assert_eq!(body["dietary_filter"], Value::Null);
        assert_eq!(body["count"], 9);
        assert!(body["items"][0]["price"].is_number());
    }

    #[tokio::test]
    async fn unknown_menu_category_is_empty() {
        let app = app().await;
        let (status, body) = app
            .post("/api/get-menu", json!({"category": "brunch"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert_eq!(body["items"], json!([]));
    }

    #[tokio::test]
    async fn menu_dietary_filter_narrows_category() {
        let app = app().await;
        let (_, body) = app
            .post(
                "/api/get-menu",
                json!({"category": "starters", "dietary_filter": "vegan"}),
            )
            .await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["items"][0]["name"], "Bigilla");
    }

    #[tokio::test]
    async fn allergen_match_is_case_insensitive() {
        let app = app().await;
        let (status, body) = app
            .post(
                "/api/check-allergens",
                json!({"item_name": "pastizzi", "allergens": ["Gluten", "nuts"]}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["item_name"], "Pastizzi");
        assert_eq!(body["safe"], false);
        assert_eq!(body["has_allergens"], true);
        assert_eq!(body["found_allergens"], json!(["Gluten"]));
    }

    #[tokio::test]
    async fn allergen_check_for_unknown_item_is_404() {
        let app = app().await;
        let (status, body) = app
            .post(
                "/api/check-allergens",
                json!({"item_name": "Ftira", "allergens": ["gluten"]}),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Menu item not found");
        assert_eq!(body["item_name"], "Ftira");
        assert_eq!(
            body["message"],
            "Sorry, I couldn't find \"Ftira\" on our menu. Could you try a different item?"
        );
    }

    #[tokio::test]
    async fn allergen_check_needs_a_non_empty_list() {
        let app = app().await;
        let (status, body) = app
            .post(
                "/api/check-allergens",
                json!({"item_name": "Pastizzi", "allergens": []}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing or invalid parameters");
        assert_eq!(body["required"], json!(["item_name", "allergens (array)"]));
    }

    // ── Orders ─────────────────────────────────────────────────

    fn order_body(order_type: &str) -> Value {
        json!({
            "customer_name": "Joe Vella",
            "customer_phone": "+356 7912 0000",
            "order_type": order_type,
            "items": [
                {"item_name": "Pastizzi", "quantity": 2},
                {"item_name": "Unicorn Steak", "quantity": 1}
            ]
        })
    }

    #[tokio::test]
    async fn pickup_total_uses_menu_prices() {
        let app = app().await;
        let (status, body) = app.post("/api/create-order", order_body("pickup")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_amount"].as_f64(), Some(9.0));
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert!(body.get("delivery_address").map_or(true, Value::is_null));

        let number = body["order_number"].as_str().unwrap();
        assert!(number.starts_with("ORD") && number[3..].chars().all(|c| c.is_ascii_digit()));
        let minutes = body["estimated_time_minutes"].as_i64().unwrap();
        assert!((30..=44).contains(&minutes));
    }

    #[tokio::test]
    async fn delivery_adds_the_fee() {
        let app = app().await;
        let mut order = order_body("delivery");
        order["delivery_address"] = json!("12 Republic Street");
        let (status, body) = app.post("/api/create-order", order).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_amount"].as_f64(), Some(12.0));
        assert_eq!(body["delivery_address"], "12 Republic Street");
    }

    #[tokio::test]
    async fn order_validation_errors() {
        let app = app().await;

        let (status, body) = app.post("/api/create-order", order_body("dine-in")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid order_type");

        let (status, body) = app.post("/api/create-order", order_body("delivery")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing delivery address");

        let mut empty = order_body("pickup");
        empty["items"] = json!([]);
        let (status, body) = app.post("/api/create-order", empty).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameters");
    }

    // ── Voice sessions ─────────────────────────────────────────

    fn session_request(forwarded_for: &str) -> Request<Body> {
        Request::post("/api/session")
            .header("x-forwarded-for", forwarded_for)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn session_relays_only_the_ephemeral_credentials() {
        let provider = Arc::new(FakeProvider::ok());
        let app = app_with(config(Some("sk-live"), 10), provider.clone()).await;
        let resp = app.send(session_request("203.0.113.1")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(
            body,
            json!({"client_secret": "ek_0", "session_id": "sess_0", "expires_at": 1_900_000_000})
        );
        assert_eq!(provider.last_key.lock().unwrap().as_deref(), Some("sk-live"));
    }

    #[tokio::test]
    async fn sessions_are_rate_limited_per_address() {
        let app = app_with(config(Some("sk-live"), 2), Arc::new(FakeProvider::ok())).await;
        tokio::time::pause();

        for _ in 0..2 {
            let resp = app.send(session_request("203.0.113.1")).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        let resp = app.send(session_request("203.0.113.1")).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            json_body(resp).await,
            json!({"error": "Too many requests. Please try again later."})
        );

        let resp = app.send(session_request("198.51.100.9")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        tokio::time::advance(std::time::Duration::from_secs(3601)).await;
        let resp = app.send(session_request("203.0.113.1")).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error() {
        let provider = Arc::new(FakeProvider::ok());
        let app = app_with(config(None, 10), provider.clone()).await;
        let resp = app.send(session_request("203.0.113.1")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(resp).await,
            json!({"error": "Server configuration error", "details": "API key not properly configured"})
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rejected_api_key_is_a_configuration_error() {
        let app = app_with(config(Some("sk-revoked"), 10), Arc::new(FakeProvider::failing(401))).await;
        let (status, body) = app.post("/api/session", json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server configuration error");
        assert_eq!(body["details"], "Invalid API key");
    }

    #[tokio::test]
    async fn provider_failure_hides_provider_body() {
        let app = app_with(config(Some("sk-live"), 10), Arc::new(FakeProvider::failing(502))).await;
        let (status, body) = app.post("/api/session", json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to create session with provider");
        assert_eq!(body["details"], session::PROVIDER_FAILURE_DETAILS);
        assert!(!body.to_string().contains("nope"));
    }
}
