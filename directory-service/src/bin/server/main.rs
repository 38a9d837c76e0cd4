use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenAuthority;
use chrono::Duration;
use directory_service::config::Config;
use directory_service::domain::paging::channel::PageQueryChannel;
use directory_service::domain::user::service::DirectoryService;
use directory_service::inbound::http::router::create_router;
use directory_service::outbound::repositories::InMemoryUserDirectory;
use directory_service::seed;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "directory-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_seconds = config.token.ttl_seconds,
        seed_demo_users = config.seed.demo_users,
        "Configuration loaded"
    );

    let directory = Arc::new(InMemoryUserDirectory::new());
    let password_hasher = PasswordHasher::new();
    let token_authority = TokenAuthority::with_ttl(
        config.token.secret.as_bytes(),
        Duration::seconds(config.token.ttl_seconds),
    );
    let page_queries = PageQueryChannel::new(Arc::clone(&directory));

    let directory_service = Arc::new(DirectoryService::new(
        directory,
        password_hasher,
        token_authority,
        page_queries,
    ));

    if config.seed.demo_users {
        seed::seed_demo_users(directory_service.as_ref()).await;
        tracing::info!("Demo users seeded");
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(directory_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
