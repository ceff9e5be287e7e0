use crd_provider::{destroy, Provider, StateStore};
use crd_utils::ProviderConfig;
use log::{error, info};

pub async fn handle_destroy(config: &ProviderConfig) {
    let provider = match Provider::from_config(config).await {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to load provider: {}", e);
            std::process::exit(1);
        }
    };
    let store = StateStore::new(&config.state_path);
    let mut state = match store.load().await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to load state: {}", e);
            std::process::exit(1);
        }
    };

    let report = destroy(&provider, &mut state).await;
    if let Err(e) = store.save(&mut state).await {
        error!("Failed to save state: {}", e);
        std::process::exit(1);
    }
    for change in &report.applied {
        println!("{:<8} {}", change.action.to_string(), change.address());
    }
    if report.has_error() {
        error!("Destroy failed:\n{}", report.diagnostics);
        std::process::exit(1);
    }
    info!("Destroyed {} resources", report.applied.len());
}
