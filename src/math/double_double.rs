//! Unevaluated sum of two binary128 values.

use super::F128;
use super::utils::{fast_two_sum, two_prod, two_sum};

/// `hi + lo` with `|lo| <= ulp(hi) / 2`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DoubleDouble {
    pub(crate) hi: F128,
    pub(crate) lo: F128,
}

impl DoubleDouble {
    #[inline(always)]
    pub(crate) const fn new(hi: F128, lo: F128) -> Self {
        Self { hi, lo }
    }

    /// Table entries are stored as `(hi_bits, lo_bits)`.
    #[inline(always)]
    pub(crate) const fn from_bit_pair(pair: (u128, u128)) -> Self {
        Self {
            hi: F128::from_bits(pair.0),
            lo: F128::from_bits(pair.1),
        }
    }

    // valid only for |a| >= |b|
    #[inline(always)]
    pub(crate) fn from_exact_add(a: F128, b: F128) -> Self {
        let (hi, lo) = fast_two_sum(a, b);
        Self { hi, lo }
    }

    #[inline(always)]
    pub(crate) fn from_full_exact_add(a: F128, b: F128) -> Self {
        let (hi, lo) = two_sum(a, b);
        Self { hi, lo }
    }

    #[inline(always)]
    pub(crate) fn from_exact_mult(a: F128, b: F128) -> Self {
        let (hi, lo) = two_prod(a, b);
        Self { hi, lo }
    }

    #[inline(always)]
    pub(crate) fn to_f128(self) -> F128 {
        self.hi + self.lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_exact_add_keeps_the_residual() {
        let tiny = F128::from_bits(0x3f00_0000_0000_0000_0000_0000_0000_0000);
        let dd = DoubleDouble::from_full_exact_add(tiny, F128::ONE);
        assert_eq!(dd.hi, F128::ONE);
        assert_eq!(dd.lo, tiny);
        assert_eq!(dd.to_f128(), F128::ONE);
        let dd = DoubleDouble::from_exact_add(F128::TEN, F128::HALF);
        assert_eq!(dd.hi.to_f64(), 10.5);
        assert!(dd.lo.is_zero());
    }

    #[test]
    fn exact_mult_of_table_constants() {
        let ln2 = DoubleDouble::from_bit_pair((F128::LN_2.to_bits(), 0));
        let dd = DoubleDouble::from_exact_mult(ln2.hi, F128::LOG2_E);
        // ln2 * log2(e) rounds to just below one.
        assert_eq!(dd.hi, F128::ONE.next_down());
        assert!(dd.lo.is_sign_positive());
        assert!(dd.lo.abs() < F128::EPSILON);
    }
}
