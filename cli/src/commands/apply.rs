use super::read_host_config;
use crd_provider::{apply, plan, Provider, StateStore};
use crd_utils::ProviderConfig;
use log::{error, info};
use std::path::Path;

pub async fn handle_apply(config: &ProviderConfig, config_path: &Path, dry_run: bool) {
    if let Err(e) = run_apply(config, config_path, dry_run).await {
        error!("Apply failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_apply(config: &ProviderConfig, config_path: &Path, dry_run: bool) -> anyhow::Result<()> {
    let host_config = read_host_config(config_path).await?;
    let provider = Provider::from_config(config).await?;
    let store = StateStore::new(&config.state_path);
    let mut state = store.load().await?;

    if dry_run {
        for change in plan(&provider, &host_config, &state)? {
            println!("{:<8} {}", change.action.to_string(), change.address());
        }
        return Ok(());
    }

    let report = apply(&provider, &host_config, &mut state).await?;
    // Whatever was applied before a failure is kept.
    store.save(&mut state).await?;
    for change in &report.applied {
        println!("{:<8} {}", change.action.to_string(), change.address());
    }
    if report.has_error() {
        anyhow::bail!("{}", report.diagnostics);
    }
    for warning in report.diagnostics.iter() {
        info!("{}", warning);
    }
    Ok(())
}
