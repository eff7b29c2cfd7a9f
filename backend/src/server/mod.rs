//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_ports;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::oneshot;
use tracing::{debug, info};

use hotel_backend::middleware::{Trace, any_origin_cors};
#[cfg(debug_assertions)]
use hotel_backend::doc::ApiDoc;
use hotel_backend::domain::ports::ReservationOrchestrator;
use hotel_backend::inbound::graphql::{HotelSchema, build_schema, graphql_endpoint, graphql_usage};
use hotel_backend::inbound::grpc::{ReservationGrpcService, ReservationServiceServer};
use hotel_backend::inbound::http::configure;
use hotel_backend::inbound::http::health::{HealthState, live, ready};
use hotel_backend::inbound::http::state::HttpState;
use hotel_backend::inbound::soap::soap_endpoint;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    schema: web::Data<HotelSchema>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        schema,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(schema)
        .wrap(Trace)
        .wrap(any_origin_cors())
        .configure(configure)
        .service(soap_endpoint)
        .service(graphql_endpoint)
        .service(graphql_usage)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

fn create_http_server(deps: AppDependencies, bind_addr: SocketAddr) -> std::io::Result<Server> {
    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}

fn grpc_server(
    orchestrator: Arc<dyn ReservationOrchestrator>,
    bind_addr: SocketAddr,
    shutdown: oneshot::Receiver<()>,
) -> impl Future<Output = Result<(), tonic::transport::Error>> {
    tonic::transport::Server::builder()
        .add_service(ReservationServiceServer::new(ReservationGrpcService::new(
            orchestrator,
        )))
        .serve_with_shutdown(bind_addr, async move { shutdown.await.unwrap_or_default() })
}

/// Drive both listeners until either stops, then stop the other.
///
/// Actix handles SIGINT and SIGTERM itself; once it resolves, `stop_grpc`
/// fires so the gRPC listener drains too.
async fn serve_both<G>(http: Server, grpc: G, stop_grpc: oneshot::Sender<()>) -> Result<()>
where
    G: Future<Output = Result<(), tonic::transport::Error>>,
{
    let http_handle = http.handle();
    let http = async move {
        let outcome = http.await.wrap_err("HTTP server failed");
        if stop_grpc.send(()).is_err() {
            debug!("gRPC listener already stopped");
        }
        outcome
    };
    let grpc = async move {
        let outcome = grpc.await.wrap_err("gRPC server failed");
        http_handle.stop(true).await;
        outcome
    };
    tokio::try_join!(http, grpc).map(|_| ())
}

/// Build every facade over one set of services and run both listeners until
/// either stops.
///
/// # Errors
///
/// Returns an error when demo data cannot be seeded, a socket cannot be
/// bound, or either listener fails.
pub async fn run(health_state: web::Data<HealthState>, config: ServerConfig) -> Result<()> {
    let ports = build_ports(&config)
        .await
        .wrap_err("failed to prepare services")?;
    let orchestrator = ports.reservations.clone();
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: web::Data::new(HttpState::new(ports)),
        schema: web::Data::new(build_schema(orchestrator.clone())),
    };

    let http = create_http_server(deps, config.http_addr)
        .wrap_err_with(|| format!("failed to bind HTTP listener on {}", config.http_addr))?;
    let (stop_grpc, grpc_stopped) = oneshot::channel();
    let grpc = grpc_server(orchestrator, config.grpc_addr, grpc_stopped);

    info!(http = %config.http_addr, grpc = %config.grpc_addr, "listeners started");
    health_state.mark_ready();

    let outcome = serve_both(http, grpc, stop_grpc).await;
    health_state.mark_unhealthy();
    info!("listeners stopped");
    outcome
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{App, HttpResponse};
    use rstest::rstest;

    use super::*;

    fn free_local_addr() -> SocketAddr {
        std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("ephemeral port")
    }

    async fn memory_orchestrator() -> Arc<dyn ReservationOrchestrator> {
        let config = ServerConfig::new(free_local_addr(), free_local_addr()).with_demo_data(false);
        build_ports(&config)
            .await
            .expect("in-memory ports")
            .reservations
    }

    #[rstest]
    #[actix_web::test]
    async fn stopping_http_also_stops_grpc() {
        let http = HttpServer::new(|| App::new().route("/", web::get().to(HttpResponse::Ok)))
            .workers(1)
            .disable_signals()
            .bind(free_local_addr())
            .expect("bind HTTP")
            .run();
        let http_handle = http.handle();
        let grpc_addr = free_local_addr();
        let (stop_grpc, grpc_stopped) = oneshot::channel();
        let grpc = grpc_server(memory_orchestrator().await, grpc_addr, grpc_stopped);

        let (outcome, ()) = tokio::time::timeout(
            Duration::from_secs(10),
            async { tokio::join!(serve_both(http, grpc, stop_grpc), http_handle.stop(true)) },
        )
        .await
        .expect("both listeners stop");

        assert!(outcome.is_ok());
        assert!(
            tokio::net::TcpStream::connect(grpc_addr).await.is_err(),
            "gRPC listener should be closed"
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn grpc_listener_honours_its_shutdown_signal() {
        let (stop_grpc, grpc_stopped) = oneshot::channel();
        let grpc = grpc_server(memory_orchestrator().await, free_local_addr(), grpc_stopped);
        stop_grpc.send(()).expect("listener is waiting");

        let outcome = tokio::time::timeout(Duration::from_secs(10), grpc)
            .await
            .expect("gRPC listener stops");
        assert!(outcome.is_ok());
    }
}
