/// Signed URL Service - HTTP Server
///
/// Serves the bucket listing page and the signed URL endpoint backing it.
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use secret_store::SecretStore;
use signed_url_service::handlers;
use signed_url_service::Config;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting signed-url-service");

    // Load configuration from environment; required values missing here are
    // reported per request so the deployment surfaces a readable error
    let config = Config::from_env();

    // Initialize AWS clients
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let s3_client = aws_sdk_s3::Client::new(&aws_config);

    let secret_store = SecretStore::new().await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize secret store: {e}"),
        )
    })?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("signed-url-service HTTP listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(s3_client.clone()))
            .app_data(web::Data::new(secret_store.clone()))
            .wrap(middleware::Logger::default())
            .route(
                "/health",
                web::get()
                    .to(|| async { HttpResponse::Ok().json(serde_json::json!({"status": "ok"})) }),
            )
            .route("/", web::get().to(handlers::index))
            .route("/api/signed-url", web::get().to(handlers::signed_url))
    })
    .bind(bind_address)?
    .run()
    .await
}
