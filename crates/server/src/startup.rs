use axum::Router;
use configs::AppConfig;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::access::TokenStore;
use service::file::reference_store::FileReferenceStore;

/// Load the backing file and the token allow-list. A store that cannot be
/// loaded is fatal.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let store = FileReferenceStore::open(&cfg.storage.data_file).await?;
    let tokens = TokenStore::new(cfg.auth.tokens.iter().cloned());
    if tokens.is_empty() {
        return Err(StartupError::InvalidConfig("no authorization tokens configured".into()));
    }
    info!(tokens = tokens.len(), "authorization tokens loaded");
    Ok(AppState::new(store, tokens))
}

/// Public entry: build the app from a validated configuration and serve it
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state);

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(StartupError::Bind)?;
    info!(%addr, data_file = %cfg.storage.data_file, "starting reference values server");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::values::ReferenceValueStore;

    fn config_for(data_file: &std::path::Path, tokens: &[&str]) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.storage.data_file = data_file.display().to_string();
        cfg.auth.tokens = tokens.iter().map(|t| t.to_string()).collect();
        cfg
    }

    #[tokio::test]
    async fn build_state_loads_store_and_tokens() -> anyhow::Result<()> {
        let tmp = std::env::temp_dir().join(format!("startup_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, br#"[{"id":"a","name":"n","reference":1.5,"description":"","image_url":""}]"#).await?;

        let state = build_state(&config_for(&tmp, &["t1"])).await?;
        assert_eq!(state.store.list().await.len(), 1);
        assert!(state.tokens.is_valid("t1"));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn build_state_fails_on_missing_file_or_tokens() -> anyhow::Result<()> {
        let missing = std::env::temp_dir().join(format!("startup_missing_{}.json", uuid::Uuid::new_v4()));
        let err = build_state(&config_for(&missing, &["t1"])).await.err();
        assert!(matches!(err, Some(StartupError::Store(_))));

        let tmp = std::env::temp_dir().join(format!("startup_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"[]").await?;
        let err = build_state(&config_for(&tmp, &[])).await.err();
        assert!(matches!(err, Some(StartupError::InvalidConfig(_))));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
