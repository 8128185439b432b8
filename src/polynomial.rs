//! Immutable sparse polynomials over GF(256)
//!
//! A [`Polynomial`] is a map from exponent to field-element coefficient.
//! Every operation is pure and returns a new value, so a cached polynomial
//! (such as a generator polynomial reused across encode calls) can be shared
//! freely with no aliasing hazards.
//!
//! An exponent that is absent means coefficient 0, and an exponent that is
//! explicitly present with coefficient 0 is treated identically by equality
//! and degree computation.

use crate::error::{Result, RsError};
use crate::galois::{GaloisField, Gf256};
use log::trace;
use rustc_hash::FxHashMap;
use std::fmt;
use std::marker::PhantomData;

/// Sparse polynomial over a GF(256) backend, exponent → coefficient
#[derive(Debug)]
pub struct Polynomial<F: GaloisField = Gf256> {
    terms: FxHashMap<u32, u8>,
    field: PhantomData<F>,
}

impl<F: GaloisField> Polynomial<F> {
    /// The zero polynomial (no terms)
    pub fn zero() -> Self {
        Polynomial {
            terms: FxHashMap::default(),
            field: PhantomData,
        }
    }

    /// Build a polynomial from an explicit exponent → coefficient mapping.
    ///
    /// Duplicate exponents keep the last coefficient seen. Zero coefficients
    /// may be passed; they are invisible to `degree` and equality.
    pub fn new<I: IntoIterator<Item = (u32, u8)>>(terms: I) -> Self {
        Polynomial {
            terms: terms.into_iter().collect(),
            field: PhantomData,
        }
    }

    /// The single-term polynomial `coefficient * x^power`
    pub fn term(coefficient: u8, power: u32) -> Self {
        Self::new([(power, coefficient)])
    }

    /// Coefficient of `x^power`, defaulting to 0 for absent exponents
    pub fn coefficient(&self, power: u32) -> u8 {
        self.terms.get(&power).copied().unwrap_or(0)
    }

    /// Largest exponent with a nonzero coefficient, or 0 if every
    /// coefficient is zero
    pub fn degree(&self) -> u32 {
        self.terms
            .iter()
            .filter(|&(_, &coeff)| coeff != 0)
            .map(|(&power, _)| power)
            .max()
            .unwrap_or(0)
    }

    /// True when every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.terms.values().all(|&coeff| coeff == 0)
    }

    /// Iterate over the nonzero terms as `(power, coefficient)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.terms
            .iter()
            .filter(|&(_, &coeff)| coeff != 0)
            .map(|(&power, &coeff)| (power, coeff))
    }

    /// Field-add `coefficient * x^power` to this polynomial
    pub fn add_term(&self, coefficient: u8, power: u32) -> Self {
        let mut terms = self.terms.clone();
        let entry = terms.entry(power).or_insert(0);
        *entry = F::add(*entry, coefficient);
        Polynomial {
            terms,
            field: PhantomData,
        }
    }

    /// Field-subtract `coefficient * x^power` from this polynomial.
    ///
    /// Numerically identical to [`add_term`](Self::add_term) in
    /// characteristic 2, but routed through the field's own subtraction.
    pub fn sub_term(&self, coefficient: u8, power: u32) -> Self {
        let mut terms = self.terms.clone();
        let entry = terms.entry(power).or_insert(0);
        *entry = F::sub(*entry, coefficient);
        Polynomial {
            terms,
            field: PhantomData,
        }
    }

    /// Multiply this polynomial by the single term `coefficient * x^power`.
    ///
    /// Every exponent shifts up by `power` and every coefficient is
    /// field-multiplied by `coefficient`.
    pub fn mul_term(&self, coefficient: u8, power: u32) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(&p, &c)| (p + power, F::mul(c, coefficient)))
            .collect();
        Polynomial {
            terms,
            field: PhantomData,
        }
    }

    /// Term-wise field sum
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (&power, &coeff) in &other.terms {
            let entry = terms.entry(power).or_insert(0);
            *entry = F::add(*entry, coeff);
        }
        Polynomial {
            terms,
            field: PhantomData,
        }
    }

    /// Term-wise field difference
    pub fn sub(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (&power, &coeff) in &other.terms {
            let entry = terms.entry(power).or_insert(0);
            *entry = F::sub(*entry, coeff);
        }
        Polynomial {
            terms,
            field: PhantomData,
        }
    }

    /// Full convolution product of two polynomials
    pub fn mul(&self, other: &Self) -> Self {
        let mut product = Self::zero();
        for (power, coeff) in other.iter() {
            product = product.add(&self.mul_term(coeff, power));
        }
        product
    }

    /// Remainder of dividing this polynomial by `denominator` (the quotient
    /// is not returned).
    ///
    /// Long division by repeated leading-term cancellation: each iteration
    /// zeroes the current leading coefficient, so the degree strictly
    /// decreases (or the intermediate becomes zero) and the loop runs at
    /// most `self.degree() - denominator.degree() + 1` times. The returned
    /// polynomial has degree strictly below `denominator.degree()`, or is
    /// the zero polynomial.
    ///
    /// Fails with [`RsError::ZeroDenominator`] when `denominator` has no
    /// nonzero coefficient.
    pub fn remainder(&self, denominator: &Self) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RsError::ZeroDenominator);
        }

        let den_degree = denominator.degree();
        let den_lead = denominator.coefficient(den_degree);

        let mut current = self.clone();
        while !current.is_zero() && current.degree() >= den_degree {
            let num_degree = current.degree();
            // Quotient term that cancels the current leading term
            let quot_coeff = F::div(current.coefficient(num_degree), den_lead)?;
            let quotient = Self::term(quot_coeff, num_degree - den_degree);

            trace!(
                "division step: degree {} leading coefficient {}",
                num_degree,
                current.coefficient(num_degree)
            );

            current = current.sub(&quotient.mul(denominator));
        }

        Ok(current)
    }
}

impl<F: GaloisField> Clone for Polynomial<F> {
    fn clone(&self) -> Self {
        Polynomial {
            terms: self.terms.clone(),
            field: PhantomData,
        }
    }
}

impl<F: GaloisField> Default for Polynomial<F> {
    fn default() -> Self {
        Self::zero()
    }
}

// Zero-coefficient entries never affect equality
impl<F: GaloisField> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        self.iter()
            .all(|(power, coeff)| other.coefficient(power) == coeff)
            && other
                .iter()
                .all(|(power, coeff)| self.coefficient(power) == coeff)
    }
}

impl<F: GaloisField> Eq for Polynomial<F> {}

impl<F: GaloisField> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut powers: Vec<u32> = self.iter().map(|(power, _)| power).collect();
        powers.sort_unstable_by(|a, b| b.cmp(a));

        if powers.is_empty() {
            return write!(f, "0");
        }

        let rendered: Vec<String> = powers
            .iter()
            .map(|&power| {
                let coeff = self.coefficient(power);
                if power == 0 {
                    format!("{}", coeff)
                } else {
                    format!("{}*x^{}", coeff, power)
                }
            })
            .collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
