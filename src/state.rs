use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{info, warn};

use tally_config::{
    CorsConfig, EdgeConfigSettings, GateConfig, I18nConfig, InvoiceTokenConfig, ServerConfig,
    SessionConfig,
};
use tally_edge_config::{EdgeConfigStore, MemoryEdgeConfig, RedisEdgeConfig};

use crate::modules::invoices::repository::{InvoiceRepository, PgInvoiceRepository};

#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceRepository>,
    pub edge_config: Arc<dyn EdgeConfigStore>,
    pub token_config: InvoiceTokenConfig,
    pub session_config: SessionConfig,
    pub i18n_config: I18nConfig,
    pub gate_config: GateConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("i18n_config", &self.i18n_config)
            .field("gate_config", &self.gate_config)
            .field("cors_config", &self.cors_config)
            .field("server_config", &self.server_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state(metrics: Option<PrometheusHandle>) -> anyhow::Result<AppState> {
    let db = tally_db::init_db_pool().await?;
    let gate_config = GateConfig::from_env();
    let edge_config = init_edge_config(&EdgeConfigSettings::from_env(), &gate_config).await?;

    Ok(AppState {
        invoices: Arc::new(PgInvoiceRepository::new(db)),
        edge_config,
        token_config: InvoiceTokenConfig::from_env(),
        session_config: SessionConfig::from_env(),
        i18n_config: I18nConfig::from_env(),
        gate_config,
        cors_config: CorsConfig::from_env(),
        server_config: ServerConfig::from_env(),
        metrics,
    })
}

async fn init_edge_config(
    settings: &EdgeConfigSettings,
    gate_config: &GateConfig,
) -> anyhow::Result<Arc<dyn EdgeConfigStore>> {
    match &settings.redis_url {
        Some(url) => {
            let store = RedisEdgeConfig::new(url, &settings.key_prefix).await?;
            info!(prefix = %settings.key_prefix, "Edge config store connected");
            Ok(Arc::new(store))
        }
        None => {
            warn!(
                users = settings.static_beta.len(),
                "EDGE_CONFIG_REDIS_URL not set, using in-process beta allowlist"
            );
            Ok(Arc::new(MemoryEdgeConfig::with_list(
                &gate_config.beta_key,
                settings.static_beta.clone(),
            )))
        }
    }
}
