//! Property-based tests for GF(256) arithmetic and polynomial algebra
//!
//! These tests use proptest to validate the algebraic laws the encoder
//! relies on: commutativity and distributivity of the polynomial ring,
//! the degree bound on division remainders, and the systematic-code
//! divisibility law for full codewords.

use proptest::prelude::*;
use rs256::galois::{gf_add, gf_div, gf_mul, gf_sub};
use rs256::{Encoder, Gf256, Polynomial};

type Poly = Polynomial<Gf256>;

/// Arbitrary sparse polynomial with small exponents
fn arb_poly() -> impl Strategy<Value = Poly> {
    prop::collection::vec((0u32..24, any::<u8>()), 0..8).prop_map(|terms| Poly::new(terms))
}

/// Arbitrary polynomial with at least one nonzero coefficient
fn arb_nonzero_poly() -> impl Strategy<Value = Poly> {
    arb_poly().prop_filter("denominator must be nonzero", |p| !p.is_zero())
}

proptest! {
    /// Property: addition and subtraction coincide in characteristic 2
    #[test]
    fn prop_field_add_equals_sub(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(gf_add(a, b), gf_sub(a, b));
    }

    /// Property: division inverts multiplication for nonzero divisors
    #[test]
    fn prop_field_div_inverts_mul(a in any::<u8>(), b in 1u8..=255) {
        prop_assert_eq!(gf_div(gf_mul(a, b), b).unwrap(), a);
    }

    /// Property: polynomial addition is commutative
    #[test]
    fn prop_poly_addition_commutative(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(p.add(&q), q.add(&p));
    }

    /// Property: polynomial multiplication is commutative
    #[test]
    fn prop_poly_multiplication_commutative(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(p.mul(&q), q.mul(&p));
    }

    /// Property: multiplication distributes over addition
    #[test]
    fn prop_poly_distributive(p in arb_poly(), q in arb_poly(), r in arb_poly()) {
        let left = p.mul(&q.add(&r));
        let right = p.mul(&q).add(&p.mul(&r));
        prop_assert_eq!(left, right);
    }

    /// Property: subtraction matches addition term-wise over this field
    #[test]
    fn prop_poly_sub_equals_add(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(p.sub(&q), p.add(&q));
    }

    /// Property: the remainder's degree is strictly below the denominator's,
    /// or the remainder is zero
    #[test]
    fn prop_remainder_degree_bound(p in arb_poly(), den in arb_nonzero_poly()) {
        let remainder = p.remainder(&den).unwrap();
        prop_assert!(remainder.is_zero() || remainder.degree() < den.degree());
    }

    /// Property: any nonzero polynomial divides itself exactly
    #[test]
    fn prop_remainder_of_self_is_zero(p in arb_nonzero_poly()) {
        prop_assert!(p.remainder(&p).unwrap().is_zero());
    }

    /// Property: explicit zero coefficients never affect equality
    #[test]
    fn prop_zero_terms_invisible(p in arb_poly(), power in 0u32..24) {
        let padded = Poly::new(p.iter().chain([(power, 0)].into_iter().filter(|&(pw, _)| p.coefficient(pw) == 0)));
        prop_assert_eq!(padded, p);
    }

    /// Property: appending the correction bytes yields a codeword divisible
    /// by the generator polynomial
    #[test]
    fn prop_systematic_code_law(
        message in prop::collection::vec(any::<u8>(), 0..64),
        k in 1usize..=30,
    ) {
        let encoder = Encoder::new(k);

        let remainder = encoder.correction(&message).unwrap();
        prop_assert!(remainder.is_zero() || remainder.degree() < k as u32);

        let codeword = encoder.encode(&message).unwrap();
        prop_assert_eq!(codeword.len(), message.len() + k);
        prop_assert!(encoder.verify(&codeword).unwrap());
    }
}
