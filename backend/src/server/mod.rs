//! Server construction and middleware wiring.

mod config;
mod cors;
mod state_builders;

pub use config::ServerConfig;
pub use cors::build_cors;
pub use state_builders::{MovieStore, build_http_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::error::json_config;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::movies;
use crate::inbound::http::state::HttpState;
use config::Bind;

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub cors_origins: Vec<String>,
}

/// Assemble the application: movie routes, health probes, tracing, CORS and,
/// in debug builds, Swagger UI at `/docs`.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        cors_origins,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(build_cors(&cors_origins))
        .wrap(Trace)
        .configure(movies::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. The health state
/// is marked ready once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind,
        store,
        cors_origins,
    } = config;
    let http_state = web::Data::new(build_http_state(&store));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            cors_origins: cors_origins.clone(),
        })
    });
    let server = match bind {
        Bind::Address(addr) => server.bind(addr)?,
        Bind::Listener(listener) => server.listen(listener)?,
    }
    .run();

    health_state.mark_ready();
    Ok(server)
}
