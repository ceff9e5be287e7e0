//! A minimal host: plans configured resources against state and drives the
//! resource lifecycle.

use crate::errors::ProviderError;
use crate::provider::Provider;
use crate::resource::{CreateRequest, DeleteRequest, ReadRequest, UpdateRequest};
use crd_defs::{get_resource_address, Diagnostics, HostConfig, ResourceConfig, StateEntry, StateFile};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{}", action)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedChange {
    pub action: Action,
    pub type_name: String,
    pub name: String,
}

impl PlannedChange {
    pub fn address(&self) -> String {
        get_resource_address(&self.type_name, &self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    pub applied: Vec<PlannedChange>,
    pub diagnostics: Diagnostics,
}

impl ApplyReport {
    pub fn has_error(&self) -> bool {
        self.diagnostics.has_error()
    }
}

/// Configured resources in declaration order, then deletions for every state
/// entry that is no longer configured.
pub fn plan(
    provider: &Provider,
    config: &HostConfig,
    state: &StateFile,
) -> Result<Vec<PlannedChange>, ProviderError> {
    let mut seen = HashSet::new();
    let mut changes = Vec::new();
    for resource in &config.resources {
        let address = get_resource_address(&resource.type_name, &resource.name);
        if !seen.insert(address.clone()) {
            return Err(ProviderError::DuplicateAddress(address));
        }
        if provider.get(&resource.type_name).is_none() {
            return Err(ProviderError::UnknownType(resource.type_name.clone()));
        }
        let action = match state.find(&resource.type_name, &resource.name) {
            None => Action::Create,
            Some(entry) if entry.state.values != resource.values => Action::Update,
            Some(_) => Action::Read,
        };
        changes.push(PlannedChange {
            action,
            type_name: resource.type_name.clone(),
            name: resource.name.clone(),
        });
    }
    for entry in &state.resources {
        if !seen.contains(&entry.address()) {
            changes.push(PlannedChange {
                action: Action::Delete,
                type_name: entry.type_name.clone(),
                name: entry.name.clone(),
            });
        }
    }
    Ok(changes)
}

/// Applies the plan to `state`. Stops at the first change that produces an
/// error; changes applied before it stay in `state`.
pub async fn apply(
    provider: &Provider,
    config: &HostConfig,
    state: &mut StateFile,
) -> Result<ApplyReport, ProviderError> {
    let changes = plan(provider, config, state)?;
    let mut report = ApplyReport::default();
    for change in changes {
        let diagnostics = match change.action {
            Action::Delete => delete_entry(provider, &change, state).await,
            _ => {
                let resource_config = config
                    .resources
                    .iter()
                    .find(|r| r.type_name == change.type_name && r.name == change.name)
                    .ok_or_else(|| ProviderError::UnknownType(change.type_name.clone()))?;
                apply_configured(provider, &change, resource_config, state).await?
            }
        };
        let failed = diagnostics.has_error();
        report.diagnostics.extend(diagnostics.prefixed(&change.address()));
        if failed {
            warn!("{} of {} failed, stopping", change.action, change.address());
            break;
        }
        info!("{} {}", change.action, change.address());
        report.applied.push(change);
    }
    Ok(report)
}

/// Deletes every resource in state, last created first.
pub async fn destroy(provider: &Provider, state: &mut StateFile) -> ApplyReport {
    let mut report = ApplyReport::default();
    let changes: Vec<PlannedChange> = state
        .resources
        .iter()
        .rev()
        .map(|entry| PlannedChange {
            action: Action::Delete,
            type_name: entry.type_name.clone(),
            name: entry.name.clone(),
        })
        .collect();
    for change in changes {
        let diagnostics = delete_entry(provider, &change, state).await;
        let failed = diagnostics.has_error();
        report.diagnostics.extend(diagnostics.prefixed(&change.address()));
        if failed {
            break;
        }
        report.applied.push(change);
    }
    report
}

async fn apply_configured(
    provider: &Provider,
    change: &PlannedChange,
    resource_config: &ResourceConfig,
    state: &mut StateFile,
) -> Result<Diagnostics, ProviderError> {
    let resource = provider
        .get(&change.type_name)
        .ok_or_else(|| ProviderError::UnknownType(change.type_name.clone()))?;
    let prior = state.find(&change.type_name, &change.name).cloned();

    if change.action != Action::Read {
        let diagnostics = provider.validate(&change.type_name, &resource_config.values)?;
        if diagnostics.has_error() {
            return Ok(diagnostics);
        }
    }

    let (new_state, diagnostics) = match (change.action, prior) {
        (Action::Create, _) | (Action::Update, None) => {
            let response = resource
                .create(CreateRequest {
                    config: resource_config.values.clone(),
                })
                .await;
            (response.state, response.diagnostics)
        }
        (Action::Update, Some(prior)) => {
            let response = resource
                .update(UpdateRequest {
                    config: resource_config.values.clone(),
                    prior_state: prior.state,
                })
                .await;
            (response.state, response.diagnostics)
        }
        (_, Some(prior)) => {
            let response = resource.read(ReadRequest { state: prior.state }).await;
            (response.state, response.diagnostics)
        }
        (_, None) => (None, Diagnostics::new()),
    };

    if let Some(new_state) = new_state {
        debug!("{} has id {}", change.address(), new_state.id);
        state.upsert(StateEntry {
            type_name: change.type_name.clone(),
            name: change.name.clone(),
            state: new_state,
        });
    }
    Ok(diagnostics)
}

async fn delete_entry(provider: &Provider, change: &PlannedChange, state: &mut StateFile) -> Diagnostics {
    let entry = match state.find(&change.type_name, &change.name) {
        Some(entry) => entry.clone(),
        None => return Diagnostics::new(),
    };
    let diagnostics = match provider.get(&change.type_name) {
        Some(resource) => {
            resource
                .delete(DeleteRequest { state: entry.state })
                .await
                .diagnostics
        }
        None => {
            warn!(
                "Resource type {} is no longer known, dropping {} from state",
                change.type_name,
                change.address()
            );
            Diagnostics::new()
        }
    };
    if !diagnostics.has_error() {
        state.remove(&change.type_name, &change.name);
    }
    diagnostics
}
