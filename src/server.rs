//! Server runtime
//!
//! [`ServerHandle`] owns the full lifecycle: metrics recorder, database and
//! migrations, services, HTTP listener and graceful shutdown.

use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use crate::application::ports::MailSender;
use crate::application::{ContactService, MediaUrls, TravelCatalogService, WhatsappLinks};
use crate::config::{AppConfig, MailConfig, MailTransport};
use crate::domain::RepositoryProvider;
use crate::infrastructure::{
    init_database, run_migrations, DatabaseConfig, LogMailSender, OutboxMailSender,
    SeaOrmRepositoryProvider,
};
use crate::interfaces::http::modules::health::HealthState;
use crate::interfaces::http::modules::metrics::MetricsState;
use crate::interfaces::{create_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running portal server.
///
/// ```rust,no_run
/// use travel_portal::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Port actually bound (differs from the config when it asked for 0).
    pub port: u16,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    http_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting travel portal...");

        let prometheus = prometheus_handle();

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
        };
        let db = init_database(&db_config).await?;
        if opts.auto_migrate {
            run_migrations(&db).await?;
        }

        // ── Repositories & Services ────────────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        let catalog = Arc::new(TravelCatalogService::new(
            repos.clone(),
            MediaUrls::new(app_cfg.site.media_url.clone()),
            app_cfg.site.overview_limit,
        ));
        let contact = Arc::new(ContactService::new(
            repos.clone(),
            mail_sender(&app_cfg.mail),
            app_cfg.mail.from.clone(),
        ));
        let whatsapp = Arc::new(WhatsappLinks::new(
            app_cfg.whatsapp.country_code.clone(),
            app_cfg.whatsapp.general_phone.clone(),
        ));

        let state = AppState {
            repos: repos.clone(),
            catalog,
            contact,
            whatsapp,
        };
        let router = create_router(
            state,
            HealthState::new(db.clone(), repos.clone()),
            prometheus.map(|handle| MetricsState { handle }),
        );

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let http_shutdown = shutdown.signal();

        // ── HTTP server ────────────────────────────────────────
        let addr = app_cfg.server.address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();
        info!("🌐 Portal listening on http://{}", addr);
        info!("Swagger UI available at http://{}/docs/", addr);

        let http_server = axum::serve(listener, router).with_graceful_shutdown(async move {
            http_shutdown.wait().await;
            info!("🛑 HTTP server received shutdown signal");
        });

        let http_task = tokio::spawn(async move {
            if let Err(e) = http_server.await {
                error!("HTTP server error: {}", e);
            }
        });

        info!("🚀 Travel portal started");

        Ok(Self {
            repos,
            config: app_cfg,
            port,
            db,
            shutdown,
            http_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop.
    ///
    /// In-flight requests get `shutdown_timeout` seconds once shutdown is
    /// triggered; after that the server task is aborted.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            mut http_task,
            ..
        } = self;

        let signal = shutdown.signal();
        let exited = tokio::select! {
            result = &mut http_task => Some(result),
            _ = signal.wait() => None,
        };

        match exited {
            Some(result) => log_http_exit(result),
            None => {
                info!("⏳ Draining in-flight requests...");
                let grace = shutdown.timeout();
                match tokio::time::timeout(grace, &mut http_task).await {
                    Ok(result) => log_http_exit(result),
                    Err(_) => {
                        warn!("Shutdown timeout elapsed, aborting HTTP server");
                        http_task.abort();
                    }
                }
            }
        }

        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Travel portal shutdown complete");
    }

    pub async fn shutdown(self) {
        info!("🛑 Shutting down travel portal...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.http_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn log_http_exit(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("HTTP server stopped"),
        Err(e) => error!("HTTP server task panicked: {}", e),
    }
}

/// The global recorder can only be installed once per process, so a
/// restarted server reuses the first handle. `None` when another recorder
/// already owns the slot.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = HANDLE.get() {
        return Some(handle.clone());
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("📊 Prometheus metrics recorder installed");
            Some(HANDLE.get_or_init(|| handle).clone())
        }
        Err(e) => {
            warn!("Metrics disabled, cannot install Prometheus recorder: {}", e);
            None
        }
    }
}

fn mail_sender(config: &MailConfig) -> Arc<dyn MailSender> {
    match config.transport {
        MailTransport::Log => {
            info!("✉️ Mail transport: log");
            Arc::new(LogMailSender)
        }
        MailTransport::Outbox => {
            info!("✉️ Mail transport: outbox at {}", config.outbox_dir.display());
            Arc::new(OutboxMailSender::new(config.outbox_dir.clone()))
        }
    }
}

/// Initialize tracing from the application config.
///
/// `RUST_LOG` takes precedence over `logging.level`. Call once at startup.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.server.shutdown_timeout = 1;
        config.database.url = "sqlite::memory:".to_string();
        config
    }

    #[tokio::test]
    async fn server_starts_and_shuts_down() {
        let handle = ServerHandle::start(ServerOptions {
            config: test_config(),
            auto_migrate: true,
        })
        .await
        .unwrap();
        assert_ne!(handle.port, 0);
        assert!(handle.is_running());
        assert!(handle.repos.portals().find_active().await.unwrap().is_none());
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn mail_transport_follows_config() {
        use crate::application::ports::OutgoingMail;

        let dir = tempfile::tempdir().unwrap();
        let outbox = dir.path().join("outbox");
        let mail = || OutgoingMail {
            from: "web@portal.test".into(),
            to: vec!["staff@portal.test".into()],
            subject: "Consulta".into(),
            body: "Hola".into(),
        };

        let mut config = MailConfig {
            outbox_dir: outbox.clone(),
            ..MailConfig::default()
        };
        mail_sender(&config).send(mail()).await.unwrap();
        assert!(!outbox.exists());

        config.transport = MailTransport::Outbox;
        mail_sender(&config).send(mail()).await.unwrap();
        assert_eq!(std::fs::read_dir(&outbox).unwrap().count(), 1);
    }
}
