//! Transport codec: exchange string to raw document bytes and back.
//!
//! The wire layout on encode is
//! `'0' || base64_nopad( zlib_best( document ) )`: a literal version-marker
//! character, then the zlib-compressed document in unpadded standard-alphabet
//! base64. Compression and text encoding run as a single streaming pass --
//! the compressor writes straight into the base64 encoder and is finished
//! before the encoder flushes its final quantum.
//!
//! Decode is deliberately more tolerant than encode: it accepts the marker
//! present or already stripped, and both padded and unpadded base64.
//! Historical producers emitted padded output; current ones do not, and both
//! kinds of string circulate. The asymmetry is part of the format, not a
//! defect to normalize away.
//!
//! This module returns the decompressed document bytes unparsed; mapping
//! them onto the typed model is [`crate::envelope`]'s job.

use std::io;
use std::io::{Read, Write};

use base64::Engine as _;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD_NO_PAD};
use base64::write::EncoderStringWriter;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

/// Version marker prefixed to every encoded exchange string.
///
/// Stripping it on decode is unambiguous: a zlib stream's first byte never
/// base64-encodes to `'0'`, so a leading `'0'` can only be the marker.
pub const VERSION_MARKER: char = '0';

/// Decode engine: standard alphabet, padding accepted but not required.
const BASE64_READ: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors from the transport layer, one variant per wire layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("invalid compressed stream: {0}")]
    InvalidCompressedStream(String),
    #[error("compressed stream ended before the logical end of data")]
    TruncatedStream,
    #[error("exchange encoding failed: {0}")]
    EncodingFailed(String),
}

// ---------------------------------------------------------------------------
// Decode / encode
// ---------------------------------------------------------------------------

/// Unwrap an exchange string into the raw document bytes it carries.
pub fn decode_exchange(exchange: &str) -> Result<Vec<u8>, TransportError> {
    let body = exchange.strip_prefix(VERSION_MARKER).unwrap_or(exchange);
    let compressed = BASE64_READ.decode(body)?;

    let mut document = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut document)
        .map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => TransportError::TruncatedStream,
            _ => TransportError::InvalidCompressedStream(err.to_string()),
        })?;
    Ok(document)
}

/// Wrap raw document bytes into an exchange string.
pub fn encode_exchange(document: &[u8]) -> Result<String, TransportError> {
    let mut out = String::new();
    out.push(VERSION_MARKER);

    let encoder = EncoderStringWriter::from_consumer(&mut out, &STANDARD_NO_PAD);
    let mut compressor = ZlibEncoder::new(encoder, Compression::best());
    compressor
        .write_all(document)
        .map_err(|err| TransportError::EncodingFailed(err.to_string()))?;
    let encoder = compressor
        .finish()
        .map_err(|err| TransportError::EncodingFailed(err.to_string()))?;
    encoder.into_inner();

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() {
        let document = br#"{"blueprint":{"label":"Test"}}"#;
        let exchange = encode_exchange(document).unwrap();
        assert!(exchange.starts_with(VERSION_MARKER));
        assert_eq!(decode_exchange(&exchange).unwrap(), document);
    }

    #[test]
    fn encode_emits_no_padding() {
        // Sweep lengths so the compressed size crosses every mod-3 residue.
        for n in 0..16 {
            let document = vec![b'x'; n * 7 + 1];
            let exchange = encode_exchange(&document).unwrap();
            assert!(!exchange.contains('='), "padded output for len {n}");
            assert_eq!(decode_exchange(&exchange).unwrap(), document);
        }
    }

    #[test]
    fn decode_accepts_stripped_marker() {
        let exchange = encode_exchange(b"marker tolerance").unwrap();
        let stripped = &exchange[1..];
        assert_eq!(decode_exchange(stripped).unwrap(), b"marker tolerance");
    }

    #[test]
    fn decode_accepts_padded_historical_form() {
        // Historical producers emitted padded base64 after the marker.
        let mut compressor = ZlibEncoder::new(Vec::new(), Compression::default());
        compressor.write_all(b"padded producer").unwrap();
        let compressed = compressor.finish().unwrap();

        let mut exchange = String::new();
        exchange.push(VERSION_MARKER);
        exchange.push_str(&base64::engine::general_purpose::STANDARD.encode(&compressed));
        assert_eq!(decode_exchange(&exchange).unwrap(), b"padded producer");
    }

    #[test]
    fn rejects_non_base64_input() {
        let err = decode_exchange("0 this is !!! not base64").unwrap_err();
        assert!(matches!(err, TransportError::InvalidBase64(_)));
    }

    #[test]
    fn rejects_valid_base64_that_is_not_zlib() {
        // "AAAA" decodes to three zero bytes, which is not a zlib header.
        let err = decode_exchange("0AAAA").unwrap_err();
        assert!(matches!(err, TransportError::InvalidCompressedStream(_)));
    }

    #[test]
    fn reports_truncated_streams() {
        let mut compressor = ZlibEncoder::new(Vec::new(), Compression::best());
        compressor
            .write_all(&[0u8; 4096])
            .unwrap();
        let compressed = compressor.finish().unwrap();
        let cut = &compressed[..compressed.len() / 2];

        let mut exchange = String::new();
        exchange.push(VERSION_MARKER);
        exchange.push_str(&STANDARD_NO_PAD.encode(cut));
        let err = decode_exchange(&exchange).unwrap_err();
        assert!(matches!(err, TransportError::TruncatedStream));
    }

    #[test]
    fn empty_input_is_a_truncated_stream() {
        assert!(matches!(
            decode_exchange("").unwrap_err(),
            TransportError::TruncatedStream
        ));
    }
}
