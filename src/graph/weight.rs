use num_traits::{Bounded, CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use std::fmt::{Debug, Display};

/// Edge weight and path length type used by every solver in the crate
///
/// Distances are totally ordered and additions are checked, so a path sum can
/// never wrap around into a small value. `infinity()` is the sentinel used by
/// the flat distance view for unreachable vertices; it is strictly larger than
/// any distance a solver will ever report.
pub trait Weight: Copy + Ord + Debug + Display + Send + Sync + 'static {
    /// The additive identity
    fn zero() -> Self;

    /// Sentinel meaning "no known path"
    fn infinity() -> Self;

    /// Adds two weights, returning `None` if the sum cannot be represented
    /// or would reach the sentinel. Signed operands may be negative.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// True if the value is strictly below zero
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

macro_rules! impl_weight_for_int {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }

                fn infinity() -> Self {
                    <$t as Bounded>::max_value()
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other).filter(|sum| *sum != Self::infinity())
                }
            }
        )*
    };
}

impl_weight_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Weight for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn infinity() -> Self {
        OrderedFloat(f64::INFINITY)
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        if sum.is_finite() {
            Some(OrderedFloat(sum))
        } else {
            None
        }
    }
}

