use std::net::SocketAddr;
use std::sync::Arc;

use rust_freight::config::{Config, StorageConfig};
use rust_freight::db::{create_pool, run_migrations, MemoryRecordStore, PgRecordStore, RecordStore};
use rust_freight::http_client::HttpClient;
use rust_freight::mail::{EmailOutbox, HttpMailSender, LogMailSender, MailSender, RetryPolicy};
use rust_freight::middleware::AuthLayer;
use rust_freight::proto::documents::document_service_server::DocumentServiceServer;
use rust_freight::proto::health::health_server::HealthServer;
use rust_freight::proto::inventory::freight_service_server::FreightServiceServer;
use rust_freight::proto::maintenance::maintenance_service_server::MaintenanceServiceServer;
use rust_freight::proto::notifications::notification_service_server::NotificationServiceServer;
use rust_freight::proto::orders::order_service_server::OrderServiceServer;
use rust_freight::proto::quotes::quote_service_server::QuoteServiceServer;
use rust_freight::services::{
    DocumentServiceImpl, FreightServiceImpl, HealthServiceImpl, MaintenanceServiceImpl,
    NotificationServiceImpl, OrderServiceImpl, QuoteServiceImpl,
};
use rust_freight::storage::{GcsBackend, MemoryBackend, R2Backend, StorageBackend};
use rust_freight::workflows::Workflows;

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("freight_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_freight=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting rust-freight gRPC server...");

    // Record store
    let store: Arc<dyn RecordStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            tracing::info!("Database connection established");
            Arc::new(PgRecordStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory record store");
            Arc::new(MemoryRecordStore::new())
        }
    };

    // Blob storage
    let storage: Arc<dyn StorageBackend> = match config.storage.clone() {
        StorageConfig::Gcs { bucket } => Arc::new(GcsBackend::new(bucket).await?),
        StorageConfig::R2 {
            bucket,
            account_id,
            access_key,
            secret_key,
        } => Arc::new(R2Backend::new(bucket, account_id, access_key, secret_key)?),
        StorageConfig::Memory => {
            tracing::warn!("No storage bucket configured, keeping files in memory");
            Arc::new(MemoryBackend::new("local"))
        }
    };

    // Outbound mail
    let sender: Arc<dyn MailSender> = match &config.mail.api_url {
        Some(api_url) => {
            tracing::info!("Mail delivery enabled: {}", api_url);
            Arc::new(HttpMailSender::new(
                HttpClient::new()?,
                api_url.clone(),
                config.mail.api_key.clone(),
                config.mail.from.clone(),
            ))
        }
        None => {
            tracing::info!("MAIL_API_URL not set, mail will only be logged");
            Arc::new(LogMailSender)
        }
    };
    let (outbox, _outbox_task) = EmailOutbox::spawn(
        sender,
        RetryPolicy {
            max_attempts: config.mail.max_attempts,
            base_delay: config.mail.retry_base,
        },
    );

    // Create services
    let workflows = Workflows::new(store, storage, outbox);
    let freight_service = FreightServiceImpl::new(workflows.freight.clone());
    let maintenance_service = MaintenanceServiceImpl::new(workflows.maintenance.clone());
    let quote_service = QuoteServiceImpl::new(workflows.orders.clone());
    let order_service = OrderServiceImpl::new(workflows.orders.clone());
    let document_service = DocumentServiceImpl::new(workflows.documents.clone());
    let notification_service = NotificationServiceImpl::new(workflows.notifications.clone());
    let health_service = HealthServiceImpl::new();

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    // Build reflection service
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    // Build and run server with gRPC-Web support
    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new()) // Enable gRPC-Web
        .layer(AuthLayer::new(&config.jwt_secret, &config.jwt_audience))
        .add_service(reflection_service)
        .add_service(FreightServiceServer::new(freight_service))
        .add_service(MaintenanceServiceServer::new(maintenance_service))
        .add_service(QuoteServiceServer::new(quote_service))
        .add_service(OrderServiceServer::new(order_service))
        .add_service(DocumentServiceServer::new(document_service))
        .add_service(NotificationServiceServer::new(notification_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
