//! Placed entities and their kind-dependent configuration.
//!
//! [`Entity`] carries every field any entity kind can use; fields irrelevant
//! to an entity's `name` are simply absent (zero-valued in memory, omitted
//! on the wire). The codec does not know which fields go with which kind --
//! `name` is an opaque token, and unknown combinations pass through
//! untouched.
//!
//! `entity_number` is the document-local identity. Wire endpoints
//! ([`ConnectionData::entity_id`]) and schedule locomotive lists refer to it
//! as a foreign key; whether the referenced entity exists is a validation
//! concern outside this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blueprint::{Color, Position, SignalId};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One placed object in a blueprint.
///
/// Required: `entity_number`, `name`, `position`. Everything else is
/// conditionally present depending on the entity kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Unique within the owning blueprint. Foreign-key target for circuit
    /// connections and schedule locomotive lists.
    pub entity_number: u64,
    /// Opaque entity-type token, e.g. `"wooden-chest"`.
    pub name: String,
    pub position: Position,
    /// Facing, in eighth-turns clockwise from north.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub direction: u8,
    /// Continuous facing for curved rail and similar, `0.0..1.0`.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub orientation: f64,
    /// Circuit-wire attachments to other entities.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub connections: Connection,
    /// Adjacent electric poles, by entity number.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub neighbours: Vec<u64>,
    /// Opaque circuit/logistic condition payload. Preserved verbatim,
    /// never interpreted.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub control_behavior: serde_json::Map<String, serde_json::Value>,
    /// Item requests placed with the entity (e.g. modules), name to count.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub items: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub recipe: String,
    /// First inventory slot blocked off by the red bar.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub bar: u16,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub inventory: Inventory,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub infinity_settings: InfinitySettings,
    /// Underground belt side (`"input"` / `"output"`) and similar subtype
    /// tokens.
    #[serde(rename = "type", skip_serializing_if = "crate::is_default")]
    pub kind: String,
    /// Splitter input lane priority (`"left"` / `"right"`).
    #[serde(skip_serializing_if = "crate::is_default")]
    pub input_priority: String,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub output_priority: String,
    /// Splitter item filter.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub filter: String,
    /// Inserter or loader filters.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub filters: Vec<ItemFilter>,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub filter_mode: String,
    /// Inserter hand-size override.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub override_stack_size: u8,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub drop_position: Position,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub pickup_position: Position,
    /// Logistic chest request slots.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub request_filters: Vec<LogisticFilter>,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub request_from_buffers: bool,
    /// Programmable speaker playback settings.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub parameters: SpeakerParameters,
    /// Programmable speaker alert settings.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub alert_message: SpeakerAlertParameters,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub auto_launch: bool,
    /// Graphics variation for decorative entities.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub variation: u8,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub color: Color,
    /// Train stop station name.
    #[serde(skip_serializing_if = "crate::is_default")]
    pub station: String,
}

// ---------------------------------------------------------------------------
// Circuit wiring
// ---------------------------------------------------------------------------

/// Circuit-wire attachments, keyed by connector side.
///
/// Most entities have a single connector (side `"1"`); combinators expose an
/// input and an output side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    #[serde(rename = "1")]
    pub side_one: ConnectionPoint,
    #[serde(rename = "2")]
    pub side_two: ConnectionPoint,
}

/// The red and green wires attached to one connector side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionPoint {
    pub red: Vec<ConnectionData>,
    pub green: Vec<ConnectionData>,
}

/// One wire endpoint: a weak reference to another entity in the same
/// blueprint. The target's existence is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionData {
    pub entity_id: u64,
    /// Connector side on the target entity.
    pub circuit: u32,
}

// ---------------------------------------------------------------------------
// Inventories and filters
// ---------------------------------------------------------------------------

/// Filtered inventory configuration (cargo wagons).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    pub filters: Vec<ItemFilter>,
    #[serde(skip_serializing_if = "crate::is_default")]
    pub bar: u16,
}

/// One slot filter: item name at a 1-based slot index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
    pub name: String,
    pub index: u32,
}

/// Infinity chest / infinity pipe configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfinitySettings {
    pub remove_unfiltered_items: bool,
    pub filters: Vec<InfinityFilter>,
}

/// One infinity chest filter. `mode` is an opaque token
/// (`"at-least"`, `"at-most"`, `"exactly"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfinityFilter {
    pub name: String,
    pub count: u32,
    pub mode: String,
    pub index: u32,
}

/// One logistic request slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticFilter {
    pub name: String,
    pub index: u32,
    pub count: u32,
}

// ---------------------------------------------------------------------------
// Programmable speaker
// ---------------------------------------------------------------------------

/// Speaker playback settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerParameters {
    pub playback_volume: f64,
    pub playback_globally: bool,
    pub allow_polyphony: bool,
}

/// Speaker alert settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerAlertParameters {
    pub show_alert: bool,
    pub show_on_map: bool,
    pub icon_signal_id: SignalId,
    pub alert_message: String,
}
