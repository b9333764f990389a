//! Encodes text and binary data into QR Code symbols.
//!
//! Implements the encoding pipeline of the ISO/IEC 18004 QR Code Model 2
//! standard for all 40 versions and all four error correction levels:
//! mode analysis, version sizing, bit stream assembly, Reed-Solomon error
//! correction over GF(256), block interleaving, matrix construction and
//! automatic mask selection by penalty score. The output is the raw module
//! matrix; rendering it to pixels or paper is left to the caller.
//!
//! # Examples
//!
//! ```
//! use qrgen_rs::{Ecl, QrCode};
//!
//! let qr = QrCode::encode_text("HELLO WORLD", Ecl::Quartile)?;
//! assert_eq!(21, qr.size());
//! for row in 0..qr.size() {
//!     for col in 0..qr.size() {
//!         let dark = qr.module(row, col);
//!         // paint the module
//!         # let _ = dark;
//!     }
//! }
//! # Ok::<(), qrgen_rs::QrError>(())
//! ```
//!
//! The error correction level parses from its single-letter name, which is
//! convenient at configuration boundaries:
//!
//! ```
//! use qrgen_rs::{Ecl, encode};
//!
//! let ecl: Ecl = "Q".parse().unwrap_or_default();
//! let qr = encode("31415926535897932384626433832795", ecl)?;
//! # Ok::<(), qrgen_rs::QrError>(())
//! ```

#![forbid(unsafe_code)]

// The set of all legal characters in alphanumeric mode,
// where each character value maps to the index in the string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

mod bit_buffer;
mod ecl;
mod error;
mod format_info;
mod gf256;
mod interleave;
mod mask;
mod matrix;
mod mode;
mod penalty;
mod qr_code;
mod reed_solomon;
mod segment;
pub mod tables;
mod version;

pub use bit_buffer::BitBuffer;
pub use ecl::Ecl;
pub use error::QrError;
pub use format_info::{FORMAT_GENERATOR, FORMAT_MASK, VERSION_GENERATOR, format_word, version_word};
pub use mask::Mask;
pub use matrix::ModuleGrid;
pub use mode::{Mode, is_alphanumeric, is_numeric};
pub use qr_code::QrCode;
pub use segment::Segment;
pub use version::Version;

/// Encodes `text` at the given error correction level.
///
/// The convenience spelling of [`QrCode::encode_text`].
pub fn encode(text: &str, ecl: Ecl) -> Result<QrCode, QrError> {
    QrCode::encode_text(text, ecl)
}
