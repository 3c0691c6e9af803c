//! Document roots and shared value types.
//!
//! A [`Blueprint`] is one factory layout; a [`BlueprintBook`] is an ordered
//! collection of blueprints with a currently-selected index. Both are plain
//! value types: the codec never mutates them, and rebuilding one is the
//! owning caller's job.
//!
//! Serialization rule for the whole document model: an *optional* field is
//! omitted from the JSON when it equals its type's zero value (never emitted
//! as `null`); a *required* field is always emitted, even when zero. Absent
//! keys decode to the zero value, which is what makes encode/decode a
//! bijection on these types.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::schedule::Schedule;

// ---------------------------------------------------------------------------
// Blueprint
// ---------------------------------------------------------------------------

/// A single factory layout.
///
/// `entities`, `tiles`, `icons`, and `schedules` are order-preserving:
/// sequence order is part of the document, not an implementation detail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Blueprint {
    /// Fixed token identifying the container kind (`"blueprint"`).
    pub item: String,
    pub label: String,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub label_color: Color,
    pub entities: Vec<Entity>,
    pub tiles: Vec<Tile>,
    pub icons: Vec<Icon>,
    pub schedules: Vec<Schedule>,
    /// Packed game version, preserved verbatim and never interpreted.
    pub version: u64,
}

// ---------------------------------------------------------------------------
// Blueprint book
// ---------------------------------------------------------------------------

/// An ordered book of blueprints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintBook {
    /// Fixed token identifying the container kind (`"blueprint-book"`).
    pub item: String,
    pub label: String,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub label_color: Color,
    /// Insertion order is book order.
    pub blueprints: Vec<Blueprint>,
    /// Position of the selected blueprint. Must reference a valid index when
    /// `blueprints` is non-empty; the codec round-trips it without checking.
    pub active_index: u32,
    pub version: u64,
}

// ---------------------------------------------------------------------------
// Shared value types
// ---------------------------------------------------------------------------

/// A 2D position in tiles. Fractional coordinates are meaningful (entities
/// larger than one tile are anchored at their center).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGBA color. Channels are independent floats; no range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// One slot on a blueprint's visual icon palette.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    pub index: u32,
    pub signal: SignalId,
}

/// A signal reference: opaque name plus a signal class token
/// (`"item"`, `"fluid"`, `"virtual"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalId {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One placed tile. Tiles carry no relationships beyond their position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tile {
    pub name: String,
    pub position: Position,
}
