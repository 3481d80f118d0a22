//! Health endpoints: liveness & readiness probes for orchestration and load
//! balancers. Documented in OpenAPI via Utoipa.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{get, http::header, web, HttpResponse};

/// Shared health state for readiness and liveness checks.
///
/// Tracks readiness and whether the process should report itself as alive
/// to orchestrators.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during
    /// shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503 to
    /// trigger restarts.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe. Returns 200 when dependencies are initialised and the
/// server can handle traffic; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while the process is marked alive and 503
/// once draining. Call [`HealthState::mark_unhealthy`] before graceful
/// shutdown to surface the drain early.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, web, App};

    use super::*;

    #[actix_web::test]
    async fn ready_reports_503_until_marked() {
        let state = web::Data::new(HealthState::new());
        let app =
            actix_test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let before = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(
            before.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );

        state.mark_ready();
        let after = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(after.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn live_reports_503_once_unhealthy() {
        let state = web::Data::new(HealthState::new());
        let app = actix_test::init_service(App::new().app_data(state.clone()).service(live)).await;

        let before = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/live")
                .to_request(),
        )
        .await;
        assert_eq!(before.status(), actix_web::http::StatusCode::OK);

        state.mark_unhealthy();
        let after = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/live")
                .to_request(),
        )
        .await;
        assert_eq!(
            after.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
