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

//! `ValidationResult`, per-wire results, and the structured `Metrics` the
//! quality score is computed from (§4.5, §6).

use crate::issue::{Category, Issue, Severity};
use crate::wire::Gauge;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Terminal sizing state for a wire (§4.2, §4.4 state machine). Distinct
/// from [`Severity`]: a wire's sizing status feeds into whether *issues*
/// get emitted about it, not the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingStatus {
    Valid,
    Warning,
    Error,
}

/// Per-wire electrical quantities: current, reference voltage, drop, and
/// the recommended gauge (§1 output #1, §4.2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResult {
    pub wire_id: String,
    pub current_a: f64,
    pub reference_voltage_v: f64,
    pub voltage_drop_v: f64,
    pub voltage_drop_pct: f64,
    pub recommended_gauge: Gauge,
    pub sizing_status: SizingStatus,
    /// Number of conductors in this wire's parallel run (1 if none).
    pub parallel_count: u32,
}

/// The structured counts and sub-scores the quality score (§4.5) is a
/// deterministic function of, and that an iterative generator can use to
/// prioritize what to fix next without re-parsing issue text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub error_count: u32,
    pub warning_count: u32,
    pub info_count: u32,
    pub overlap_count: u32,
    pub invalid_terminal_count: u32,
    pub wire_sizing_issue_count: u32,
    pub electrical_error_count: u32,
    pub near_edge_count: u32,
    pub average_component_spacing_px: f64,
    pub layout_efficiency: f64,
}

impl Metrics {
    #[must_use]
    pub fn from_issues(issues: &[Issue], overlap_count: u32, near_edge_count: u32, average_component_spacing_px: f64) -> Self {
        let mut error_count = 0u32;
        let mut warning_count = 0u32;
        let mut info_count = 0u32;
        let mut invalid_terminal_count = 0u32;
        let mut wire_sizing_issue_count = 0u32;
        let mut electrical_error_count = 0u32;

        for issue in issues {
            match issue.severity {
                Severity::Error => error_count += 1,
                Severity::Warning => warning_count += 1,
                Severity::Info => info_count += 1,
            }
            match issue.category {
                Category::Terminal => invalid_terminal_count += 1,
                Category::WireSizing => wire_sizing_issue_count += 1,
                Category::Electrical if issue.severity == Severity::Error => {
                    electrical_error_count += 1;
                }
                _ => {}
            }
        }

        let layout_efficiency = layout_efficiency(overlap_count, near_edge_count, average_component_spacing_px);

        Self {
            error_count,
            warning_count,
            info_count,
            overlap_count,
            invalid_terminal_count,
            wire_sizing_issue_count,
            electrical_error_count,
            near_edge_count,
            average_component_spacing_px,
            layout_efficiency,
        }
    }
}

/// Layout efficiency sub-score (§4.5): 100 minus penalties, clamped to
/// [0, 100].
#[must_use]
pub fn layout_efficiency(overlap_count: u32, near_edge_count: u32, average_spacing_px: f64) -> f64 {
    let mut efficiency = 100.0 - 20.0 * f64::from(overlap_count) - 5.0 * f64::from(near_edge_count);
    if average_spacing_px < 150.0 {
        efficiency -= 20.0;
    }
    if average_spacing_px > 500.0 {
        efficiency -= 10.0;
    }
    efficiency.clamp(0.0, 100.0)
}

/// The quality score (§4.5): starts at 100, subtracts per-severity and
/// per-category penalties, adds a small layout bonus/penalty, clamped to
/// [0, 100].
#[must_use]
pub fn quality_score(metrics: &Metrics) -> f64 {
    let score = 100.0
        - 10.0 * f64::from(metrics.error_count)
        - 3.0 * f64::from(metrics.warning_count)
        - 1.0 * f64::from(metrics.info_count)
        - 15.0 * f64::from(metrics.overlap_count)
        - 10.0 * f64::from(metrics.invalid_terminal_count)
        - 5.0 * f64::from(metrics.wire_sizing_issue_count)
        - 20.0 * f64::from(metrics.electrical_error_count)
        + 0.3 * (metrics.layout_efficiency - 50.0);
    score.clamp(0.0, 100.0)
}

/// The engine's top-level output (§1, §6): `validate(design) ->
/// ValidationResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub score: f64,
    pub issues: Vec<Issue>,
    pub metrics: Metrics,
    pub wire_results: HashMap<String, WireResult>,
}

impl ValidationResult {
    /// Assemble the result from a (category, severity) pre-sorted issue
    /// list per §5's ordering, computed metrics, and per-wire results.
    #[must_use]
    pub fn new(
        mut issues: Vec<Issue>,
        overlap_count: u32,
        near_edge_count: u32,
        average_component_spacing_px: f64,
        wire_results: HashMap<String, WireResult>,
    ) -> Self {
        issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        let metrics = Metrics::from_issues(&issues, overlap_count, near_edge_count, average_component_spacing_px);
        let score = quality_score(&metrics);
        let valid = metrics.error_count == 0;
        Self {
            valid,
            score,
            issues,
            metrics,
            wire_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;

    #[test]
    fn no_issues_scores_one_hundred_with_clean_layout() {
        let metrics = Metrics::from_issues(&[], 0, 0, 200.0);
        assert_eq!(quality_score(&metrics), 100.0);
    }

    #[test]
    fn score_clamps_at_zero() {
        let issues: Vec<Issue> = (0..50)
            .map(|_| Issue::new(Severity::Error, Category::Electrical, "bad"))
            .collect();
        let metrics = Metrics::from_issues(&issues, 10, 10, 10.0);
        assert_eq!(quality_score(&metrics), 0.0);
    }

    #[test]
    fn layout_efficiency_penalizes_tight_and_sparse_spacing() {
        assert!(layout_efficiency(0, 0, 100.0) < layout_efficiency(0, 0, 300.0));
        assert!(layout_efficiency(0, 0, 600.0) < layout_efficiency(0, 0, 300.0));
    }

    #[test]
    fn valid_result_requires_zero_errors() {
        let issues = vec![Issue::new(Severity::Warning, Category::Layout, "close")];
        let result = ValidationResult::new(issues, 0, 1, 200.0, HashMap::new());
        assert!(result.valid);

        let issues = vec![Issue::new(Severity::Error, Category::Electrical, "bad")];
        let result = ValidationResult::new(issues, 0, 0, 200.0, HashMap::new());
        assert!(!result.valid);
    }
}
