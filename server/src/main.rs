//! Ticketd HTTP server binary.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use ticketd_auth::{
    AuthService, TokenCodec, TokenConfig,
    providers::{ConsoleEmailSender, EmailSender, SmtpEmailSender, UserStore},
    stores::PgUserStore,
};
use ticketd_server::{AppState, Config, build_router};
use ticketd_tickets::{TicketService, TicketStore, stores::PgTicketStore};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketd_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ticketd HTTP server");

    // Load configuration
    let config = Config::from_env();
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // Connect to the database and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    info!("Database connected, migrations applied");

    // Wire up services
    let mailer: Arc<dyn EmailSender> = match &config.smtp {
        Some(smtp) => {
            info!(smtp_host = %smtp.host, "SMTP email sender configured");
            Arc::new(SmtpEmailSender::new(
                smtp.host.clone(),
                smtp.port,
                smtp.user.clone(),
                smtp.password.clone(),
                smtp.from.clone(),
            ))
        }
        None => {
            info!("SMTP_HOST not set, emails go to the log");
            Arc::new(ConsoleEmailSender::new())
        }
    };

    let token_config = TokenConfig::new(config.auth.secret_key.clone())
        .with_access_ttl(config.auth.access_token_expire_minutes)
        .with_refresh_ttl(config.auth.refresh_token_expire_days);
    let auth = AuthService::new(
        Arc::new(PgUserStore::new(pool.clone())) as Arc<dyn UserStore>,
        mailer,
        TokenCodec::from_config(&token_config),
    );
    let tickets = TicketService::new(Arc::new(PgTicketStore::new(pool)) as Arc<dyn TicketStore>);

    // Serve
    let app = build_router(AppState::new(auth, tickets));
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
