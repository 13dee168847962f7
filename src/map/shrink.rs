//! Ring removal for battle-royale map documents.
//!
//! Each invocation removes the outermost ring of the map: the tile list is
//! cut back to the spiral prefix of the next smaller radius, and every
//! structure that references a map position (civilization exploration
//! history, unit movement memories, barbarian camps) is filtered against the
//! pre-decrement radius. The document keeps referential consistency: nothing
//! left in it points at a removed tile.
//!
//! Documents arrive from an evolving external game client, so missing or
//! partial substructures are tolerated as empty rather than treated as
//! fatal; only an exhausted radius stops the process.

use std::collections::BTreeMap;

use serde_json::Value;

use super::hex::{position_distance, tile_count};

const RADIUS_PTR: &str = "/tileMap/mapParameters/mapSize/radius";

/// The map radius is already at its minimum; a stop signal, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("map radius is already at its minimum")]
pub struct NotShrinkable;

/// Diagnostics from one shrink pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkReport {
    /// Radius stored back into the document.
    pub new_radius: i64,
    /// Per-owner count of units whose movement memories were inspected.
    /// Seeded at 0 for every civilization present in the document.
    pub units_touched: BTreeMap<String, u64>,
}

/// Removes the outermost ring of the map document in place.
///
/// Returns `Err(NotShrinkable)` without touching the document when the
/// stored radius is absent, non-numeric, or already 0; callers must treat
/// that as "stop shrinking".
pub fn shrink(doc: &mut Value) -> Result<ShrinkReport, NotShrinkable> {
    let radius = doc
        .pointer(RADIUS_PTR)
        .and_then(Value::as_i64)
        .filter(|r| *r > 0)
        .ok_or(NotShrinkable)?;

    let mut report = ShrinkReport {
        new_radius: radius - 1,
        units_touched: BTreeMap::new(),
    };

    // Cut the tile list back to the spiral prefix of the next smaller
    // radius. Ring-major enumeration makes truncation sufficient.
    if let Some(Value::Array(tiles)) = doc.pointer_mut("/tileMap/tileList") {
        tiles.truncate(tile_count(radius - 1));
    }

    // Drop out-of-range exploration history per civilization.
    if let Some(Value::Array(civs)) = doc.get_mut("civilizations") {
        for civ in civs.iter_mut() {
            if let Some(name) = civ.get("civName").and_then(Value::as_str) {
                report.units_touched.insert(name.to_string(), 0);
            }
            if let Some(Value::Array(explored)) = civ.get_mut("exploredTiles") {
                explored.retain(|pos| position_distance(pos) < radius);
            }
        }
    }

    // Drop out-of-range movement memories on units of the surviving tiles.
    if let Some(Value::Array(tiles)) = doc.pointer_mut("/tileMap/tileList") {
        for tile in tiles.iter_mut() {
            for slot in ["militaryUnit", "civilianUnit"] {
                if let Some(unit) = tile.get_mut(slot) {
                    filter_unit_memories(unit, radius, &mut report.units_touched);
                }
            }
        }
    }

    // Remove camps whose tile no longer exists.
    if let Some(Value::Object(camps)) = doc.pointer_mut("/barbarians/camps") {
        camps.retain(|_, camp| {
            camp.get("position").map_or(0, position_distance) < radius
        });
    }

    if let Some(stored) = doc.pointer_mut(RADIUS_PTR) {
        *stored = Value::from(radius - 1);
    }

    Ok(report)
}

fn filter_unit_memories(unit: &mut Value, radius: i64, counts: &mut BTreeMap<String, u64>) {
    let owner = unit
        .get("owner")
        .and_then(Value::as_str)
        .map(str::to_string);
    if let Some(Value::Array(memories)) = unit.get_mut("movementMemories") {
        if let Some(owner) = owner {
            *counts.entry(owner).or_insert(0) += 1;
        }
        memories.retain(|m| m.get("position").map_or(0, position_distance) < radius);
    }
}
