//! pseudobin-codec - Pseudo-binary telemetry decoding
//!
//! Decodes windows of pseudo-binary data-logger messages into integers and
//! scales them into display-ready measurements.
//!
//! # Features
//!
//! - **Injected tables**: every variant decodes through a [`CharacterValueTable`]
//!   supplied by the caller
//! - **Three variants**: `positive`, `signed` (range-halving fold), `b`
//! - **Deterministic rounding**: half away from zero on the shortest decimal form
//!
//! # Example
//!
//! ```rust
//! use pseudobin_codec::{transform, Decoder, ScaleParameters, Variant, Window};
//!
//! let decoder = Decoder::ascii_6bit();
//! let message = "`BST@Ff@Ffj";
//!
//! let text = Window::new(4, 3).unwrap().extract(message).unwrap();
//! let decoded = decoder.decode(Variant::Positive, text).unwrap();
//! assert_eq!(decoded, 422);
//!
//! let params = ScaleParameters::new(100.0, 1.0, 0.0, 2);
//! assert_eq!(transform(decoded, &params).unwrap().text, "4.22");
//! ```
//!
//! # Variants
//!
//! | Variant | Table | Result |
//! |---------|-------|--------|
//! | `positive` | positive table | `sum(d_i * base^(w-1-i))` |
//! | `signed` | signed table | as above, minus `base^w` when in the upper half |
//! | `b` | B table | as `positive` |

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod numfmt;
pub mod reading;
pub mod table;
pub mod transform;
pub mod variant;
pub mod window;

// Re-exports for convenience
pub use decoder::{decode_signed, decode_unsigned, Decoder};
pub use encoder::{encode, encode_variant};
pub use error::{CodecError, DecodeError, Result, TableError, TransformError};
pub use reading::Reading;
pub use table::{CharacterValueTable, TableBuilder, MAX_BASE};
pub use transform::{transform, ProcessedValue, ScaleParameters, MAX_DIGITS};
pub use variant::{TableSet, Variant};
pub use window::{Segments, Window};
