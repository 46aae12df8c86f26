use serde::{Deserialize, Deserializer, Serialize};

// ──────────────────────────────────────────────
// Bounded: numeric types that can be clamped
// ──────────────────────────────────────────────

/// Numeric types a [`BoundedValue`] can hold.
pub trait Bounded: Copy + PartialOrd + Default {
    /// Clamp `self` into `[lower, upper]`. Callers guarantee `lower <= upper`.
    fn clamp_between(self, lower: Self, upper: Self) -> Self;

    /// `self` as a finite number: NaN becomes `fallback`, infinities become
    /// the type's finite extremes. Identity for integers.
    fn finite_or(self, fallback: Self) -> Self;
}

macro_rules! impl_bounded_int {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                fn clamp_between(self, lower: Self, upper: Self) -> Self {
                    self.clamp(lower, upper)
                }

                fn finite_or(self, _fallback: Self) -> Self {
                    self
                }
            }
        )*
    };
}

macro_rules! impl_bounded_float {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                fn clamp_between(self, lower: Self, upper: Self) -> Self {
                    // NaN has no place in the interval; pin it to the floor.
                    if self.is_nan() || self < lower {
                        lower
                    } else if self > upper {
                        upper
                    } else {
                        self
                    }
                }

                fn finite_or(self, fallback: Self) -> Self {
                    if self.is_nan() {
                        fallback
                    } else if self == <$t>::INFINITY {
                        <$t>::MAX
                    } else if self == <$t>::NEG_INFINITY {
                        <$t>::MIN
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

impl_bounded_int!(i16, i32, i64, u16, u32, u64, usize);
impl_bounded_float!(f32, f64);

// ──────────────────────────────────────────────
// BoundedValue
// ──────────────────────────────────────────────

/// A value that always lies within the closed interval `[lower, upper]`.
///
/// Out-of-range input is clamped, never rejected. The type is `Copy`, so
/// every change produces a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundedValue<T> {
    value: T,
    lower: T,
    upper: T,
}

impl<T: Bounded> BoundedValue<T> {
    /// Build a bounded value, clamping `value` into range. Inverted bounds
    /// are swapped. A NaN bound takes the other bound (or zero when both are
    /// NaN); infinite bounds are pinned to the type's finite extremes.
    pub fn new(value: T, lower: T, upper: T) -> Self {
        let lower = lower.finite_or(upper.finite_or(T::default()));
        let upper = upper.finite_or(lower);
        let (lower, upper) = if lower > upper {
            (upper, lower)
        } else {
            (lower, upper)
        };
        Self {
            value: value.clamp_between(lower, upper),
            lower,
            upper,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn bounds(&self) -> (T, T) {
        (self.lower, self.upper)
    }

    /// Apply `f` to the current value and clamp the result into the same
    /// bounds.
    #[must_use]
    pub fn update(self, f: impl FnOnce(T) -> T) -> Self {
        Self {
            value: f(self.value).clamp_between(self.lower, self.upper),
            ..self
        }
    }
}

impl<'de, T> Deserialize<'de> for BoundedValue<T>
where
    T: Bounded + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<T> {
            value: T,
            lower: T,
            upper: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Ok(BoundedValue::new(raw.value, raw.lower, raw.upper))
    }
}
