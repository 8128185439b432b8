//! Galois Field GF(2^8) arithmetic for QR Reed-Solomon encoding
//!
//! This module implements 8-bit Galois Field arithmetic using the QR standard
//! irreducible polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1), with the field
//! generator element 2.
//!
//! Arithmetic goes through the [`GaloisField`] trait so the polynomial and
//! encoder layers never commit to a particular backend; [`Gf256`] is the
//! standard table-based implementation. Alternative backends (for example a
//! carry-less-multiply one) only need to satisfy the trait.

use crate::error::{Result, RsError};
use std::sync::OnceLock;

/// QR codes use GF(2^8) with irreducible polynomial 0x11D
const GF_GENERATOR: u32 = 0x11D;

/// Field arithmetic over GF(256), exposed as a capability.
///
/// All operations are closed over `u8`. Addition and subtraction are both
/// XOR (the field has characteristic 2) but remain distinct operations so
/// the abstraction stays correct over fields where they differ.
pub trait GaloisField {
    fn add(a: u8, b: u8) -> u8;
    fn sub(a: u8, b: u8) -> u8;
    fn mul(a: u8, b: u8) -> u8;
    /// Field quotient; fails with [`RsError::DivisionByZero`] when `b` is 0.
    fn div(a: u8, b: u8) -> Result<u8>;
    /// Repeated field multiplication. `pow(a, 0)` is 1 for every `a`.
    fn pow(base: u8, exponent: u32) -> u8;
}

/// Precomputed logarithm and exponential tables for fast multiplication/division
pub struct GaloisTable {
    log: [u8; 256],
    exp: [u8; 512], // 2x size to avoid a modulo on multiplication
}

impl GaloisTable {
    /// Create a new table set for the 0x11D field
    pub fn new() -> Self {
        let mut table = GaloisTable {
            log: [0; 256],
            exp: [0; 512],
        };
        table.build_tables();
        table
    }

    fn build_tables(&mut self) {
        let mut value = 1u32;

        // Powers of the generator element 2 cycle through all 255 nonzero
        // elements before repeating.
        for i in 0..255 {
            self.exp[i] = value as u8;
            self.log[value as usize] = i as u8;

            value <<= 1;
            if value & 0x100 != 0 {
                value ^= GF_GENERATOR;
            }
        }

        // Duplicate the table so log(a) + log(b) indexes without wrapping
        for i in 255..510 {
            self.exp[i] = self.exp[i - 255];
        }
    }

    #[inline]
    pub fn log(&self, a: u8) -> usize {
        self.log[a as usize] as usize
    }

    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i]
    }
}

impl Default for GaloisTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Global table instance, built on first use
static GALOIS_TABLE: OnceLock<GaloisTable> = OnceLock::new();

fn table() -> &'static GaloisTable {
    GALOIS_TABLE.get_or_init(GaloisTable::new)
}

/// The standard QR field: GF(256) under 0x11D, backed by the global
/// log/antilog tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gf256;

impl GaloisField for Gf256 {
    #[inline]
    fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let t = table();
        t.exp(t.log(a) + t.log(b))
    }

    #[inline]
    fn div(a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let t = table();
        let (log_a, log_b) = (t.log(a), t.log(b));

        // Subtraction in log space, with wraparound
        let log_result = if log_a >= log_b {
            log_a - log_b
        } else {
            log_a + 255 - log_b
        };

        Ok(t.exp(log_result))
    }

    #[inline]
    fn pow(base: u8, exponent: u32) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }

        let t = table();
        let log_result = (t.log(base) as u64 * exponent as u64) % 255;
        t.exp(log_result as usize)
    }
}

/// Convenience functions over the standard field
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    Gf256::add(a, b)
}

#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    Gf256::sub(a, b)
}

#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    Gf256::mul(a, b)
}

#[inline]
pub fn gf_div(a: u8, b: u8) -> Result<u8> {
    Gf256::div(a, b)
}

#[inline]
pub fn gf_pow(base: u8, exponent: u32) -> u8 {
    Gf256::pow(base, exponent)
}
