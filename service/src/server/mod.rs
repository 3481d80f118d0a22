//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use user_service::doc::ApiDoc;
use user_service::domain::ports::{InMemoryUserRepository, UserCommand, UserQuery};
use user_service::domain::{UserCommandService, UserQueryService};
use user_service::inbound::http::health::{live, ready, HealthState};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::users::{create_user, delete_user, get_user};
use user_service::outbound::persistence::DieselUserRepository;
use user_service::Trace;

/// Build the user port implementations based on configuration.
///
/// Uses the PostgreSQL-backed repository when a pool is available,
/// otherwise falls back to the in-memory adapter. Command and query
/// services share a single repository instance either way.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let repository = Arc::new(DieselUserRepository::new(pool.clone()));
            let users: Arc<dyn UserCommand> = Arc::new(UserCommandService::new(repository.clone()));
            let users_query: Arc<dyn UserQuery> = Arc::new(UserQueryService::new(repository));
            HttpState::new(users, users_query)
        }
        None => {
            let repository = Arc::new(InMemoryUserRepository::new());
            let users: Arc<dyn UserCommand> = Arc::new(UserCommandService::new(repository.clone()));
            let users_query: Arc<dyn UserQuery> = Arc::new(UserQueryService::new(repository));
            HttpState::new(users, users_query)
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(create_user)
        .service(get_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
