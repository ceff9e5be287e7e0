mod commands;

use clap::{Parser, Subcommand};
use crd_utils::{setup_logging, setup_logging_with_level, ProviderConfig};
use log::LevelFilter;
use std::path::PathBuf;

/// Kubernetes CRDs as Terraform-style manifest resources.
#[derive(Parser)]
#[command(name = "crd-provider")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log at debug level regardless of LOG_LEVEL
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Resource type name prefix [env: CRD_PROVIDER_NAME]
    #[arg(long, global = true)]
    provider_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust resource modules from CRD files
    Generate {
        /// CRD file or directory of CRD files
        #[arg(long)]
        crds: PathBuf,

        /// Output directory for the generated modules
        #[arg(long)]
        out: PathBuf,

        /// Path of the runtime crate as seen from the generated code
        #[arg(long, default_value = "crate")]
        crate_path: String,
    },

    /// Print resource schemas as JSON
    Schema {
        /// Extra CRD file or directory [env: CRD_PROVIDER_CRD_DIR]
        #[arg(long)]
        crds: Option<PathBuf>,

        /// Only print the schema of this resource type
        #[arg(long = "type")]
        type_name: Option<String>,
    },

    /// Create, update or delete resources so that state matches the config
    Apply {
        /// Host configuration file (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Extra CRD file or directory [env: CRD_PROVIDER_CRD_DIR]
        #[arg(long)]
        crds: Option<PathBuf>,

        /// State file [env: CRD_PROVIDER_STATE]
        #[arg(long)]
        state: Option<PathBuf>,

        /// Only print the plan
        #[arg(long)]
        dry_run: bool,
    },

    /// List resources in state
    Show {
        /// State file [env: CRD_PROVIDER_STATE]
        #[arg(long)]
        state: Option<PathBuf>,

        /// Print all manifests as one multi-document YAML stream
        #[arg(long)]
        yaml: bool,
    },

    /// Delete every resource in state
    Destroy {
        /// Extra CRD file or directory [env: CRD_PROVIDER_CRD_DIR]
        #[arg(long)]
        crds: Option<PathBuf>,

        /// State file [env: CRD_PROVIDER_STATE]
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let logging = if cli.verbose {
        setup_logging_with_level(LevelFilter::Debug)
    } else {
        setup_logging()
    };
    if let Err(e) = logging {
        eprintln!("Failed to set up logging: {}", e);
    }

    let mut config = ProviderConfig::from_env();
    if let Some(provider_name) = cli.provider_name {
        config.provider_name = provider_name;
    }

    match cli.command {
        Commands::Generate {
            crds,
            out,
            crate_path,
        } => commands::generate::handle_generate(&crds, &out, &crate_path).await,
        Commands::Schema { crds, type_name } => {
            config.crd_dir = crds.or(config.crd_dir);
            commands::schema::handle_schema(&config, type_name.as_deref()).await
        }
        Commands::Apply {
            config: config_path,
            crds,
            state,
            dry_run,
        } => {
            config.crd_dir = crds.or(config.crd_dir);
            config.state_path = state.unwrap_or(config.state_path);
            commands::apply::handle_apply(&config, &config_path, dry_run).await
        }
        Commands::Show { state, yaml } => {
            config.state_path = state.unwrap_or(config.state_path);
            commands::show::handle_show(&config, yaml).await
        }
        Commands::Destroy { crds, state } => {
            config.crd_dir = crds.or(config.crd_dir);
            config.state_path = state.unwrap_or(config.state_path);
            commands::destroy::handle_destroy(&config).await
        }
    }
}
