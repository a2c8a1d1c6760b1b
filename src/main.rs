//! # 식단 기록 서버 진입점
//!
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성
//! 4. 데이터베이스 마이그레이션 실행
//! 5. 라우터 조립 및 HTTP 서버 시작

use anyhow::Result;
use diet_tracker::{build_router, config::Config, db, routes::AppState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diet_tracker=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting diet tracker on {}:{}", config.host, config.port);

    // create_if_missing: 첫 실행 시 DB 파일을 만듭니다.
    // foreign_keys: meals.user_id → users.id 참조 무결성 (SQLite는 기본값이 꺼짐)
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options)
        .await?;

    tracing::info!("Running database migrations...");
    db::run_migrations(&pool).await?;

    let state = AppState {
        pool,
        session_max_age_days: config.session_max_age_days,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Ctrl-C를 받으면 진행 중인 요청을 마무리하고 종료합니다.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // 신호를 받을 수 없으면 종료 트리거 없이 계속 실행합니다.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
