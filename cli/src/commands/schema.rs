use crd_provider::Provider;
use crd_utils::ProviderConfig;
use log::error;

pub async fn handle_schema(config: &ProviderConfig, type_name: Option<&str>) {
    let provider = match Provider::from_config(config).await {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to load provider: {}", e);
            std::process::exit(1);
        }
    };
    let output = match type_name {
        Some(type_name) => match provider.get(type_name) {
            Some(resource) => serde_json::to_string_pretty(&resource.schema()),
            None => {
                error!(
                    "Unknown resource type {}, known types: {}",
                    type_name,
                    provider.type_names().join(", ")
                );
                std::process::exit(1);
            }
        },
        None => serde_json::to_string_pretty(&provider.schemas()),
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize schema: {}", e);
            std::process::exit(1);
        }
    }
}
