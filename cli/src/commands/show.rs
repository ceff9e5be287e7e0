use crd_provider::StateStore;
use crd_utils::{epoch_nanos_to_timestamp, join_documents, ProviderConfig};
use log::error;

pub async fn handle_show(config: &ProviderConfig, yaml: bool) {
    let state = match StateStore::new(&config.state_path).load().await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to load state: {}", e);
            std::process::exit(1);
        }
    };

    if yaml {
        let documents: Vec<String> = state
            .resources
            .iter()
            .map(|entry| entry.state.yaml.clone())
            .collect();
        print!("{}", join_documents(&documents));
        return;
    }

    println!("{:<70} {:<20} {:<25}", "Address", "ID", "Rendered");
    for entry in &state.resources {
        let rendered = entry
            .state
            .id
            .parse::<u128>()
            .ok()
            .and_then(epoch_nanos_to_timestamp)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<70} {:<20} {:<25}",
            entry.address(),
            entry.state.id,
            rendered
        );
    }
}
