// src/main.rs

use std::{net::SocketAddr, sync::Arc};

use school_quiz::config::Config;
use school_quiz::routes;
use school_quiz::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "scoring.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database connected...");

    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied successfully.");

    let questions = AppState::load_questions(&config.questions_path).await;
    tracing::info!(
        "Loaded {} questions ({} answer keys) from {}",
        questions.questions.len(),
        questions.answers.len(),
        config.questions_path
    );

    let state = AppState {
        pool,
        questions: Arc::new(questions),
    };

    let app = routes::create_router(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!("Scoring service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
