use serde::{Deserialize, Serialize};

pub const STATE_FORMAT_VERSION: u32 = 1;

/// What a manifest resource keeps in state: the generated ID, the rendered
/// YAML, and the config it was rendered from.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ResourceState {
    pub id: String,
    pub yaml: String,
    pub values: serde_json::Value,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct StateEntry {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub state: ResourceState,
}

impl StateEntry {
    pub fn address(&self) -> String {
        get_resource_address(&self.type_name, &self.name)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct StateFile {
    pub version: u32,
    pub serial: u64,
    pub resources: Vec<StateEntry>,
}

impl Default for StateFile {
    fn default() -> Self {
        StateFile {
            version: STATE_FORMAT_VERSION,
            serial: 0,
            resources: vec![],
        }
    }
}

impl StateFile {
    pub fn find(&self, type_name: &str, name: &str) -> Option<&StateEntry> {
        self.resources
            .iter()
            .find(|e| e.type_name == type_name && e.name == name)
    }

    /// Replaces the entry with the same address, or appends a new one.
    pub fn upsert(&mut self, entry: StateEntry) {
        match self
            .resources
            .iter_mut()
            .find(|e| e.type_name == entry.type_name && e.name == entry.name)
        {
            Some(existing) => *existing = entry,
            None => self.resources.push(entry),
        }
    }

    pub fn remove(&mut self, type_name: &str, name: &str) -> Option<StateEntry> {
        let index = self
            .resources
            .iter()
            .position(|e| e.type_name == type_name && e.name == name)?;
        Some(self.resources.remove(index))
    }
}

pub fn get_resource_address(type_name: &str, name: &str) -> String {
    format!("{}.{}", type_name, name)
}
