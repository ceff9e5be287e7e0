use async_trait::async_trait;
use crd_defs::{Diagnostics, ManifestError, ResourceSchema, ResourceState};
use crd_utils::new_resource_id;
use log::debug;
use serde_json::Value;

pub const YAML_ERROR_SUMMARY: &str = "Could not generate YAML";

#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub config: Value,
}

#[derive(Debug, Clone)]
pub struct CreateResponse {
    pub state: Option<ResourceState>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub state: ResourceState,
}

#[derive(Debug, Clone)]
pub struct ReadResponse {
    pub state: Option<ResourceState>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub config: Value,
    pub prior_state: ResourceState,
}

#[derive(Debug, Clone)]
pub struct UpdateResponse {
    pub state: Option<ResourceState>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub state: ResourceState,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteResponse {
    pub diagnostics: Diagnostics,
}

/// A manifest resource. Implementors only describe their schema and how a
/// config becomes YAML; the lifecycle is shared.
///
/// The host validates the config against [`Resource::schema`] before it calls
/// `create` or `update`.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name without the provider prefix.
    fn type_name_suffix(&self) -> String;

    fn schema(&self) -> ResourceSchema;

    fn api_version(&self) -> String;

    fn kind(&self) -> String;

    /// Stamps `apiVersion`/`kind` onto the config and marshals it.
    fn render(&self, config: &Value) -> Result<String, ManifestError>;

    fn type_name(&self, provider_name: &str) -> String {
        format!("{}_{}", provider_name, self.type_name_suffix())
    }

    async fn create(&self, request: CreateRequest) -> CreateResponse {
        let (state, diagnostics) = self.render_state(&request.config);
        CreateResponse { state, diagnostics }
    }

    /// State is owned by the host, so reading returns it unchanged.
    async fn read(&self, request: ReadRequest) -> ReadResponse {
        ReadResponse {
            state: Some(request.state),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Same as create: a new ID and the YAML regenerated from scratch.
    async fn update(&self, request: UpdateRequest) -> UpdateResponse {
        debug!(
            "Replacing manifest {} of {}",
            request.prior_state.id,
            self.kind()
        );
        let (state, diagnostics) = self.render_state(&request.config);
        UpdateResponse { state, diagnostics }
    }

    /// Nothing exists outside of state, the host simply drops the entry.
    async fn delete(&self, _request: DeleteRequest) -> DeleteResponse {
        DeleteResponse::default()
    }

    fn render_state(&self, config: &Value) -> (Option<ResourceState>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        match self.render(config) {
            Ok(yaml) => {
                let state = ResourceState {
                    id: new_resource_id(),
                    yaml,
                    values: config.clone(),
                };
                (Some(state), diagnostics)
            }
            Err(e) => {
                diagnostics.add_error(
                    YAML_ERROR_SUMMARY,
                    &format!(
                        "An unexpected error occurred while marshalling the {} manifest: {}",
                        self.kind(),
                        e
                    ),
                );
                (None, diagnostics)
            }
        }
    }
}
