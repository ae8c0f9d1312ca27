// Copyright (c) 2026 Voltaic Systems s.r.o.
//
// This file is part of Voltaic.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: licensing@voltaic-systems.example

//! Issues, categories, severities, metrics, and the top-level
//! `ValidationResult` (§4.5, §6, §7).

use serde::{Deserialize, Serialize};

/// How serious an [`Issue`] is. `ValidationResult.valid` is exactly "no
/// `Error`-severity issue" (§7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// The six issue categories the rule engine emits into (§4.5, §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electrical,
    WireSizing,
    Layout,
    Terminal,
    AiQuality,
    PowerCapacity,
}

/// A single finding emitted by the rule engine.
///
/// Messages are stable, machine-consumable strings (§4.6): an external
/// generator feeds them back into its own prompt verbatim, so rule
/// implementations must not interpolate anything non-deterministic (timing,
/// floating point formatted with platform-dependent precision, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wire_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            component_ids: Vec::new(),
            wire_id: None,
            wire_ids: Vec::new(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_component(mut self, id: impl Into<String>) -> Self {
        self.component_ids.push(id.into());
        self
    }

    #[must_use]
    pub fn with_components(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.component_ids.extend(ids);
        self
    }

    #[must_use]
    pub fn with_wire(mut self, id: impl Into<String>) -> Self {
        self.wire_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_wires(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.wire_ids.extend(ids);
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// The key §5's output ordering sorts on: (category, severity, first
    /// referenced component id, wire id).
    #[must_use]
    pub fn sort_key(&self) -> (u8, u8, &str, &str) {
        let category_rank = match self.category {
            Category::Electrical => 0,
            Category::WireSizing => 1,
            Category::Layout => 2,
            Category::Terminal => 3,
            Category::AiQuality => 4,
            Category::PowerCapacity => 5,
        };
        // Errors sort before warnings before info within a category.
        let severity_rank = match self.severity {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        };
        let component_id = self.component_ids.first().map_or("", String::as_str);
        let wire_id = self.wire_id.as_deref().unwrap_or("");
        (category_rank, severity_rank, component_id, wire_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_references() {
        let issue = Issue::new(Severity::Error, Category::Electrical, "bad")
            .with_component("c1")
            .with_wire("w1")
            .with_suggestion("fix it");
        assert_eq!(issue.component_ids, vec!["c1".to_owned()]);
        assert_eq!(issue.wire_id.as_deref(), Some("w1"));
        assert_eq!(issue.suggestion.as_deref(), Some("fix it"));
    }
}
