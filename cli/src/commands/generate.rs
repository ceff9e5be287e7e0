use crd_templator::{generate_to_dir, read_crds, GenerateOptions};
use log::{error, info};
use std::path::Path;

pub async fn handle_generate(crds: &Path, out: &Path, crate_path: &str) {
    let definitions = match read_crds(crds).await {
        Ok(definitions) => definitions,
        Err(e) => {
            error!("Failed to read CRDs: {}", e);
            std::process::exit(1);
        }
    };
    let options = GenerateOptions {
        crate_path: crate_path.to_string(),
    };
    match generate_to_dir(&definitions, out, &options).await {
        Ok(written) => {
            info!("Generated {} files in {}", written.len(), out.display());
            for path in written {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            error!("Failed to generate resources: {}", e);
            std::process::exit(1);
        }
    }
}
