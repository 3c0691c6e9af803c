//! Blueprint Core -- codec and document model for the blueprint exchange format.
//!
//! Factory layouts are shared between tools as a single opaque text string
//! (the *exchange string*). This crate is the reversible transform between
//! that string and a typed in-memory document, and nothing more: no
//! validation of placements or recipes, no simulation of the encoded logic,
//! no I/O beyond the caller-supplied string.
//!
//! # Pipeline
//!
//! Decoding peels three layers, encoding applies them in reverse:
//!
//! 1. **Transport** ([`transport`]) -- a `'0'` version marker, base64 text
//!    encoding, and a zlib-compressed payload.
//! 2. **Envelope** ([`envelope`]) -- the one-key JSON object distinguishing
//!    a single blueprint from a book of blueprints.
//! 3. **Document model** ([`blueprint`], [`entity`], [`schedule`]) -- the
//!    typed schema the JSON parses into, preserving every field needed for a
//!    faithful round trip.
//!
//! # Key Types
//!
//! - [`Blueprint`] / [`BlueprintBook`] -- the two document roots.
//! - [`Envelope`] -- tagged union over the two roots.
//! - [`decode_blueprint`] / [`Blueprint::encode`] -- string to document and
//!   back; [`decode_blueprint_book`] / [`BlueprintBook::encode`] for books.
//! - [`CodecError`] / [`TransportError`] -- per-layer failure reporting.
//!
//! Every transform is a synchronous, allocation-local function: no shared
//! state, safe to call from any number of threads at once.

pub mod blueprint;
pub mod entity;
pub mod envelope;
pub mod schedule;
pub mod transport;

pub use blueprint::{Blueprint, BlueprintBook, Color, Icon, Position, SignalId, Tile};
pub use entity::{
    Connection, ConnectionData, ConnectionPoint, Entity, InfinityFilter, InfinitySettings,
    Inventory, ItemFilter, LogisticFilter, SpeakerAlertParameters, SpeakerParameters,
};
pub use envelope::{CodecError, Envelope, decode_blueprint, decode_blueprint_book};
pub use schedule::{Schedule, ScheduleRecord, WaitCondition};
pub use transport::{TransportError, decode_exchange, encode_exchange};

/// Skip predicate shared by every optional document field: a field is
/// omitted from the JSON exactly when it holds its type's zero value.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
