//! Server construction and route wiring.

mod config;
mod state_builders;

pub use config::{AppConfig, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::applications::{list_applications, submit_application};
use crate::inbound::http::auth::{issue_token, logout};
use crate::inbound::http::feedback::submit_feedback;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::jobs::{
    count_jobs, create_job, delete_job, get_job, list_jobs, list_owned_jobs, upsert_job,
};
use crate::inbound::http::state::HttpState;
use state_builders::build_http_state;

#[cfg(debug_assertions)]
async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    web::Json(crate::doc::ApiDoc::openapi())
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
        .service(issue_token)
        .service(logout)
        .service(list_jobs)
        .service(count_jobs)
        .service(get_job)
        .service(list_owned_jobs)
        .service(create_job)
        .service(upsert_job)
        .service(delete_job)
        .service(submit_application)
        .service(list_applications)
        .service(submit_feedback)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route("/api-docs/openapi.json", web::get().to(openapi_json));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
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
