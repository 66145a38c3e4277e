use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use sqlx::{postgres::PgPoolOptions, Connection, Executor, PgConnection, PgPool};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    configuration::{DatabaseSettings, PageSettings, PasswordDisplay, Settings},
    controller::{health, home},
    store::{PgUserStore, UserStore},
    view_engine::TeraView,
    Result,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tera_engine: Arc<TeraView>,
    pub page: PageSettings,
}

impl AppState {
    /// State backed by Postgres. The pool connects lazily, so this succeeds
    /// even while the database is down; requests then fail individually.
    pub fn build(configuration: &Settings) -> Result<Self> {
        let db_pool = Arc::new(get_connection_pool(&configuration.database));
        Self::with_store(
            Arc::new(PgUserStore::new(db_pool)),
            configuration.page.clone(),
        )
    }

    pub fn with_store(users: Arc<dyn UserStore>, page: PageSettings) -> Result<Self> {
        Ok(Self {
            users,
            tera_engine: Arc::new(TeraView::build()?),
            page,
        })
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self> {
        let state = AppState::build(configuration)?;
        if state.page.password_display == PasswordDisplay::Plain {
            tracing::warn!(
                "page.password_display is `plain`: stored passwords are rendered \
                in clear text on the home page. Set it to `masked` to hide them."
            );
        }

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<()> {
        tracing::info!(port = self.port, "listening");
        axum::serve(self.listener, app(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down");
}

/// Creates a fresh database named after `config.database_name` and runs the
/// bundled migrations on it. Used to provision throwaway test databases.
pub async fn configuration_database(config: &DatabaseSettings) -> Result<PgPool> {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .context("Failed to connect to Postgres")?;
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .context("Failed to create database.")?;

    let db_pool = PgPool::connect_with(config.with_db())
        .await
        .context("Failed to connect to Postgres.")?;

    sqlx::migrate!("./migrations").run(&db_pool).await?;
    Ok(db_pool)
}
