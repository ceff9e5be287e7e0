use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Dotted attribute path the diagnostic is attached to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        match &self.path {
            Some(path) => write!(f, "{}: {} ({}): {}", severity, self.summary, path, self.detail),
            None => write!(f, "{}: {}: {}", severity, self.summary, self.detail),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics(vec![])
    }

    pub fn add_error(&mut self, summary: &str, detail: &str) {
        self.push(Severity::Error, summary, detail, None);
    }

    pub fn add_warning(&mut self, summary: &str, detail: &str) {
        self.push(Severity::Warning, summary, detail, None);
    }

    pub fn add_attribute_error(&mut self, path: &str, summary: &str, detail: &str) {
        self.push(Severity::Error, summary, detail, Some(path.to_string()));
    }

    fn push(&mut self, severity: Severity, summary: &str, detail: &str, path: Option<String>) {
        self.0.push(Diagnostic {
            severity,
            summary: summary.to_string(),
            detail: detail.to_string(),
            path,
        });
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Moves every diagnostic under `prefix`, e.g. a resource address.
    pub fn prefixed(self, prefix: &str) -> Diagnostics {
        Diagnostics(
            self.0
                .into_iter()
                .map(|mut d| {
                    d.path = Some(match d.path {
                        Some(path) => format!("{}.{}", prefix, path),
                        None => prefix.to_string(),
                    });
                    d
                })
                .collect(),
        )
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
