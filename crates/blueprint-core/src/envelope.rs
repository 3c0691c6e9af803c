//! Envelope: the one-key JSON object wrapping a document root.
//!
//! On the wire the root object has two optional keys, `blueprint` and
//! `blueprint_book`; a well-formed document populates exactly one. In memory
//! that duality is a proper tagged union, [`Envelope`], so "exactly one
//! present" is structural rather than a runtime check.
//!
//! This module also hosts the whole-pipeline entry points:
//! [`decode_blueprint`] / [`decode_blueprint_book`] and the `encode` methods
//! on [`Blueprint`] and [`BlueprintBook`].

use serde::{Deserialize, Serialize};

use crate::blueprint::{Blueprint, BlueprintBook};
use crate::transport::{self, TransportError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors from the full decode/encode pipeline. Together with the transport
/// variants this names the failing layer: base64, compression, JSON, or
/// envelope variant.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("malformed document JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("document contains both a blueprint and a blueprint book")]
    AmbiguousEnvelope,
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// A decoded document root: a single blueprint or a book of blueprints.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Blueprint(Blueprint),
    BlueprintBook(BlueprintBook),
}

/// Wire shape of the root object. Kept private so the invariant-free
/// two-option form never escapes this module.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct EnvelopeDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    blueprint: Option<Blueprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    blueprint_book: Option<BlueprintBook>,
}

impl Envelope {
    /// Parse document bytes into a root, if one is present.
    ///
    /// Returns `Ok(None)` when the object carries neither key (unknown keys
    /// are not an error), and [`CodecError::AmbiguousEnvelope`] when it
    /// carries both.
    pub fn parse(document: &[u8]) -> Result<Option<Self>, CodecError> {
        let doc: EnvelopeDoc = serde_json::from_slice(document)?;
        match (doc.blueprint, doc.blueprint_book) {
            (Some(_), Some(_)) => Err(CodecError::AmbiguousEnvelope),
            (Some(bp), None) => Ok(Some(Envelope::Blueprint(bp))),
            (None, Some(book)) => Ok(Some(Envelope::BlueprintBook(book))),
            (None, None) => Ok(None),
        }
    }

    /// Serialize to document bytes. Only the populated variant's key is
    /// emitted; the other is omitted entirely, never written as `null`.
    pub fn to_json(&self) -> Result<Vec<u8>, CodecError> {
        let doc = match self {
            Envelope::Blueprint(bp) => EnvelopeDoc {
                blueprint: Some(bp.clone()),
                blueprint_book: None,
            },
            Envelope::BlueprintBook(book) => EnvelopeDoc {
                blueprint: None,
                blueprint_book: Some(book.clone()),
            },
        };
        serde_json::to_vec(&doc)
            .map_err(|err| TransportError::EncodingFailed(err.to_string()).into())
    }

    /// Full decode: exchange string to root.
    pub fn decode(exchange: &str) -> Result<Option<Self>, CodecError> {
        let document = transport::decode_exchange(exchange)?;
        Self::parse(&document)
    }

    /// Full encode: root to exchange string.
    pub fn encode(&self) -> Result<String, CodecError> {
        let document = self.to_json()?;
        Ok(transport::encode_exchange(&document)?)
    }
}

// ---------------------------------------------------------------------------
// Pipeline entry points
// ---------------------------------------------------------------------------

/// Decode an exchange string and extract the blueprint root.
///
/// When the string decodes cleanly but holds a blueprint book (or nothing),
/// this returns the zero-value `Blueprint` with no error. Callers must treat
/// a zero value as "not a blueprint", not as an empty one. Transform
/// failures in any layer still error.
pub fn decode_blueprint(exchange: &str) -> Result<Blueprint, CodecError> {
    match Envelope::decode(exchange)? {
        Some(Envelope::Blueprint(bp)) => Ok(bp),
        _ => Ok(Blueprint::default()),
    }
}

/// Decode an exchange string and extract the blueprint-book root.
///
/// Same wrong-variant contract as [`decode_blueprint`], with the roles
/// swapped.
pub fn decode_blueprint_book(exchange: &str) -> Result<BlueprintBook, CodecError> {
    match Envelope::decode(exchange)? {
        Some(Envelope::BlueprintBook(book)) => Ok(book),
        _ => Ok(BlueprintBook::default()),
    }
}

impl Blueprint {
    /// Encode into an exchange string. The input is not mutated.
    pub fn encode(&self) -> Result<String, CodecError> {
        Envelope::Blueprint(self.clone()).encode()
    }
}

impl BlueprintBook {
    /// Encode into an exchange string. The input is not mutated.
    pub fn encode(&self) -> Result<String, CodecError> {
        Envelope::BlueprintBook(self.clone()).encode()
    }
}
