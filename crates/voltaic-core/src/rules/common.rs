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

//! Small traversal helpers shared by the rule groups (§4.5).

use std::collections::HashSet;

use voltaic_types::{Component, ComponentKind, Design, Role, Wire};

#[must_use]
pub fn other_end<'w>(wire: &'w Wire, from_id: &str) -> (&'w str, &'w str) {
    if wire.from_component_id == from_id {
        (wire.to_component_id.as_str(), wire.to_terminal.as_str())
    } else {
        (wire.from_component_id.as_str(), wire.from_terminal.as_str())
    }
}

/// All wires incident to `component_id` at exactly `terminal_id`.
pub fn wires_on_terminal<'a>(
    design: &'a Design,
    component_id: &'a str,
    terminal_id: &'a str,
) -> impl Iterator<Item = &'a Wire> {
    design.wires_incident_to(component_id).filter(move |w| {
        (w.from_component_id == component_id && w.from_terminal == terminal_id)
            || (w.to_component_id == component_id && w.to_terminal == terminal_id)
    })
}

/// Does tracing from `start_id` (excluding `entry_wire_id`), through DC
/// transit components only, ever reach a component of `target`? Used by E5
/// ("connects, directly or via fuses/switches, to a solar panel") and E8
/// ("trace from the fuse's out terminal").
#[must_use]
pub fn reaches_kind(design: &Design, start_id: &str, entry_wire_id: &str, target: ComponentKind) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    find_kind(design, start_id, entry_wire_id, target, &mut visited)
}

fn find_kind<'d>(
    design: &'d Design,
    component_id: &'d str,
    entry_wire_id: &str,
    target: ComponentKind,
    visited: &mut HashSet<&'d str>,
) -> bool {
    if visited.contains(component_id) {
        return false;
    }
    visited.insert(component_id);
    let Some(component) = design.component_by_id(component_id) else { return false };
    let Some(kind) = component.kind() else { return false };
    if kind == target {
        return true;
    }
    if kind.role() != Role::Transit {
        return false;
    }
    for wire in design.wires_incident_to(component_id) {
        if wire.id == entry_wire_id {
            continue;
        }
        let (other_id, _) = other_end(wire, component_id);
        if find_kind(design, other_id, &wire.id, target, visited) {
            return true;
        }
    }
    false
}

#[must_use]
pub fn kind_of<'d>(design: &'d Design, id: &str) -> Option<ComponentKind> {
    design.component_by_id(id).and_then(Component::kind)
}
