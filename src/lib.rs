//! Reed-Solomon GF(256) correction-byte encoder for QR codes
//!
//! Pure computation only: callers hand over message bytes and a
//! correction-byte count and get back the correction codewords to append.
//! Symbol assembly, masking, and rendering belong to the consumer.

pub mod encoder;
pub mod error;
pub mod galois;
pub mod polynomial;

pub use encoder::{
    correction, correction_bytes, generator_polynomial, message_polynomial, CorrectionBytes,
    Encoder,
};
pub use error::{Result, RsError};
pub use galois::{Gf256, GaloisField};
pub use polynomial::Polynomial;
