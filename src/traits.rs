use core::fmt::Debug;
use num_traits::Float;

/// Trait for floating-point distribution parameters and variates.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Copy + PartialEq + PartialOrd + Debug + Float {
    /// Convert an `f64` literal into `Self`.
    ///
    /// Exact for `f64`, rounded to nearest for `f32`.
    #[inline]
    fn lit(v: f64) -> Self {
        // Finite f64 values always cast to f32/f64.
        <Self as num_traits::NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// `2`, the most common non-trivial constant in the moment formulas.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Copy + PartialEq + PartialOrd + Debug + Float> FloatScalar for T {}
