use std::ops::Add;

/// Numeric weight of an edge.
///
/// Implemented for all primitive integer and floating point types. Integer
/// types use their maximum value as the infinity reported for unreachable
/// vertices. The algorithms track reachability separately, so a finite
/// distance equal to the maximum is still a distance.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;

    /// Sum of the two weights, or `None` if it does not fit in the type.
    fn checked_add(&self, other: &Self) -> Option<Self>;

    fn is_inf(&self) -> bool {
        *self == Self::inf()
    }

    fn is_negative(&self) -> bool {
        // The check for unsignedness lets the comparison be optimized away,
        // because `is_unsigned` is a constant in practice.
        !Self::is_unsigned() && *self < Self::zero()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                <$ty>::checked_add(*self, *other)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn checked_add(&self, other: &Self) -> Option<Self> {
                Some(*self + *other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

/// Result of relaxing an arc `u -> v` against the current distance of `v`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Relaxation<W> {
    /// The path through the arc is shorter.
    Improved(W),
    Unchanged,
    /// The sum is above the range of the type and `v` has no distance yet.
    Overflow,
    /// The sum is below the range of the type.
    Underflow,
}

/// Relaxes an arc with `weight` from a vertex at distance `from` to a vertex at
/// distance `to`, where `None` stands for unreachable.
pub(crate) fn relax<W: Weight>(from: &Option<W>, weight: &W, to: &Option<W>) -> Relaxation<W> {
    let Some(from) = from else {
        return Relaxation::Unchanged;
    };

    match from.checked_add(weight) {
        Some(sum) => {
            if to.as_ref().map_or(true, |to| sum < *to) {
                Relaxation::Improved(sum)
            } else {
                Relaxation::Unchanged
            }
        }
        None if weight.is_negative() => Relaxation::Underflow,
        // A sum above the range never beats a known distance.
        None if to.is_some() => Relaxation::Unchanged,
        None => Relaxation::Overflow,
    }
}
