//! Reed-Solomon correction-byte computation for QR codes
//!
//! The systematic layout places the message bytes in the high-order terms of
//! the codeword polynomial and reserves the lowest `k` exponents for the
//! correction remainder. The correction bytes are the remainder of dividing
//! the message polynomial by the generator polynomial, the fixed product of
//! the linear factors `(x - 2^i)` for `i` in `0..k`.
//!
//! [`Encoder`] caches the generator polynomial per correction-byte count;
//! construction of the generator is independent of message content.

use crate::error::Result;
use crate::galois::{GaloisField, Gf256};
use crate::polynomial::Polynomial;
use log::debug;
use rayon::prelude::*;
use smallvec::SmallVec;

/// Correction codewords for a single message. QR error-correction levels use
/// 7-30 bytes per block, so the common case stays on the stack.
pub type CorrectionBytes = SmallVec<[u8; 32]>;

/// Build the message polynomial for a systematic encoding with `k`
/// correction bytes.
///
/// The byte at index `i` becomes the coefficient of `x^(k + n - i - 1)` for
/// a message of length `n`, so the first byte lands on the highest exponent
/// and exponents `0..k` stay free for the remainder.
pub fn message_polynomial<F: GaloisField>(message: &[u8], k: usize) -> Polynomial<F> {
    let n = message.len();
    Polynomial::new(
        message
            .iter()
            .enumerate()
            .map(|(i, &byte)| ((k + n - i - 1) as u32, byte)),
    )
}

/// Build the generator polynomial for `k` correction bytes: the product of
/// `(x - 2^i)` for `i` in `0..k`.
///
/// Subtraction equals addition in GF(256), so each linear factor is the
/// two-term polynomial `x + 2^i`. `k = 0` yields the empty product, the
/// constant polynomial 1.
pub fn generator_polynomial<F: GaloisField>(k: usize) -> Polynomial<F> {
    let mut generator = Polynomial::term(1, 0);
    for i in 0..k {
        let factor = Polynomial::new([(1, 1), (0, F::pow(2, i as u32))]);
        generator = generator.mul(&factor);
    }
    generator
}

/// Compute the Reed-Solomon correction polynomial for `message` with `k`
/// correction bytes.
///
/// The result has degree strictly below `k` (or is the zero polynomial);
/// its coefficients at exponents `k-1, k-2, .., 0` are the correction bytes.
pub fn correction<F: GaloisField>(message: &[u8], k: usize) -> Result<Polynomial<F>> {
    debug!(
        "encoding {} message bytes with {} correction bytes",
        message.len(),
        k
    );
    message_polynomial::<F>(message, k).remainder(&generator_polynomial::<F>(k))
}

/// Compute the `k` correction bytes for `message` over the standard QR field
pub fn correction_bytes(message: &[u8], k: usize) -> Result<CorrectionBytes> {
    let remainder = correction::<Gf256>(message, k)?;
    Ok(read_correction_bytes(&remainder, k))
}

fn read_correction_bytes<F: GaloisField>(remainder: &Polynomial<F>, k: usize) -> CorrectionBytes {
    (0..k as u32)
        .rev()
        .map(|power| remainder.coefficient(power))
        .collect()
}

/// Reed-Solomon encoder with a cached generator polynomial
pub struct Encoder<F: GaloisField = Gf256> {
    correction_count: usize,
    generator: Polynomial<F>,
}

impl Encoder<Gf256> {
    /// Create an encoder over the standard QR field, caching the generator
    /// polynomial for `correction_count` correction bytes
    pub fn new(correction_count: usize) -> Self {
        Self::with_field(correction_count)
    }
}

impl<F: GaloisField> Encoder<F> {
    /// Create an encoder over an explicit field backend
    pub fn with_field(correction_count: usize) -> Self {
        Encoder {
            correction_count,
            generator: generator_polynomial::<F>(correction_count),
        }
    }

    /// Number of correction bytes this encoder produces
    pub fn correction_count(&self) -> usize {
        self.correction_count
    }

    /// The cached generator polynomial
    pub fn generator(&self) -> &Polynomial<F> {
        &self.generator
    }

    /// Correction polynomial for `message`
    pub fn correction(&self, message: &[u8]) -> Result<Polynomial<F>> {
        debug!(
            "encoding {} message bytes with cached generator of degree {}",
            message.len(),
            self.generator.degree()
        );
        message_polynomial::<F>(message, self.correction_count).remainder(&self.generator)
    }

    /// Correction bytes for `message`, highest exponent first
    pub fn correction_bytes(&self, message: &[u8]) -> Result<CorrectionBytes> {
        let remainder = self.correction(message)?;
        Ok(read_correction_bytes(&remainder, self.correction_count))
    }

    /// Full systematic codeword: the message followed by its correction bytes
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        let correction = self.correction_bytes(message)?;
        let mut codeword = Vec::with_capacity(message.len() + correction.len());
        codeword.extend_from_slice(message);
        codeword.extend_from_slice(&correction);
        Ok(codeword)
    }

    /// Check the systematic-code law: a valid codeword's polynomial leaves a
    /// zero remainder when divided by the generator
    pub fn verify(&self, codeword: &[u8]) -> Result<bool> {
        let poly = message_polynomial::<F>(codeword, 0);
        Ok(poly.remainder(&self.generator)?.is_zero())
    }

    /// Encode independent messages in parallel.
    ///
    /// Each message is a separate pure computation against the shared cached
    /// generator, so no synchronization is needed.
    pub fn correction_batch(&self, messages: &[&[u8]]) -> Result<Vec<CorrectionBytes>>
    where
        F: Sync,
    {
        messages
            .par_iter()
            .map(|message| self.correction_bytes(message))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Poly = Polynomial<Gf256>;

    #[test]
    fn test_message_polynomial_layout() {
        let poly: Poly = message_polynomial(&[5, 9], 2);
        assert_eq!(poly, Poly::new([(3, 5), (2, 9)]));
    }

    #[test]
    fn test_message_polynomial_empty() {
        let poly: Poly = message_polynomial(&[], 4);
        assert!(poly.is_zero());
    }

    #[test]
    fn test_generator_polynomial_two_factors() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let generator: Poly = generator_polynomial(2);
        assert_eq!(generator, Poly::new([(2, 1), (1, 3), (0, 2)]));
    }

    #[test]
    fn test_generator_polynomial_empty_product() {
        let generator: Poly = generator_polynomial(0);
        assert_eq!(generator, Poly::term(1, 0));
    }

    #[test]
    fn test_generator_leading_coefficient_is_one() {
        for k in 0..16 {
            let generator: Poly = generator_polynomial(k);
            assert_eq!(generator.degree(), k as u32);
            assert_eq!(generator.coefficient(k as u32), 1);
        }
    }

    #[test]
    fn test_correction_worked_example() {
        // (5x^3 + 9x^2) mod (x^2 + 3x + 2) = 12, read as bytes [0, 12]
        let bytes = correction_bytes(&[5, 9], 2).unwrap();
        assert_eq!(bytes.as_slice(), &[0, 12]);
    }

    #[test]
    fn test_encoder_matches_free_functions() {
        let encoder = Encoder::new(10);
        let message = b"hello reed-solomon";
        assert_eq!(
            encoder.correction_bytes(message).unwrap(),
            correction_bytes(message, 10).unwrap()
        );
    }

    #[test]
    fn test_encode_and_verify_round_trip() {
        let encoder = Encoder::new(7);
        let codeword = encoder.encode(b"some payload").unwrap();
        assert_eq!(codeword.len(), b"some payload".len() + 7);
        assert!(encoder.verify(&codeword).unwrap());

        // Corrupting any byte breaks the divisibility law
        let mut corrupted = codeword.clone();
        corrupted[3] ^= 0x40;
        assert!(!encoder.verify(&corrupted).unwrap());
    }

    #[test]
    fn test_correction_degree_below_k() {
        let encoder = Encoder::new(13);
        let remainder = encoder.correction(b"degree bound check").unwrap();
        assert!(remainder.is_zero() || remainder.degree() < 13);
    }

    #[test]
    fn test_correction_batch_matches_serial() {
        let encoder = Encoder::new(10);
        let messages: Vec<&[u8]> = vec![b"first", b"second", b"third message"];
        let batch = encoder.correction_batch(&messages).unwrap();
        assert_eq!(batch.len(), 3);
        for (message, bytes) in messages.iter().zip(&batch) {
            assert_eq!(bytes, &encoder.correction_bytes(message).unwrap());
        }
    }

    #[test]
    fn test_zero_correction_count() {
        let encoder = Encoder::new(0);
        let bytes = encoder.correction_bytes(b"anything").unwrap();
        assert!(bytes.is_empty());
        assert_eq!(encoder.encode(b"anything").unwrap(), b"anything");
    }
}
