//! Shape-preserving element-wise evaluation.
//!
//! Distribution methods come in a scalar form (`pdf(x: T) -> T`) and an
//! element-wise form (`pdf_each(xs)`) that accepts anything implementing
//! [`Elementwise`]: a bare scalar, a fixed-size array, a `Vec`, a slice, or
//! any nesting of those. The output has the same shape as the input.
//!
//! ```
//! use loguniform::Elementwise;
//!
//! let doubled = [[1.0_f64, 2.0], [3.0, 4.0]].map_elements(&mut |v: f64| 2.0 * v);
//! assert_eq!(doubled, [[2.0, 4.0], [6.0, 8.0]]);
//!
//! let scalar = 3.0_f64.map_elements(&mut |v: f64| v + 1.0);
//! assert_eq!(scalar, 4.0);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A container of `T` values (possibly just one) that can be mapped
/// element-wise without changing its shape.
pub trait Elementwise<T>: Sized {
    /// Same shape as `Self`, holding the mapped values.
    type Output;

    /// Apply `f` to every element, preserving shape.
    fn map_elements<F: FnMut(T) -> T>(self, f: &mut F) -> Self::Output;

    /// `true` if `pred` holds for every element (vacuously for empty input).
    fn all_elements<F: FnMut(T) -> bool>(&self, pred: &mut F) -> bool;
}

macro_rules! impl_elementwise_scalar {
    ($($t:ty),*) => {
        $(
            impl Elementwise<$t> for $t {
                type Output = $t;

                #[inline]
                fn map_elements<F: FnMut($t) -> $t>(self, f: &mut F) -> $t {
                    f(self)
                }

                #[inline]
                fn all_elements<F: FnMut($t) -> bool>(&self, pred: &mut F) -> bool {
                    pred(*self)
                }
            }
        )*
    };
}

impl_elementwise_scalar!(f32, f64);

impl<T, C: Elementwise<T>, const N: usize> Elementwise<T> for [C; N] {
    type Output = [C::Output; N];

    fn map_elements<F: FnMut(T) -> T>(self, f: &mut F) -> Self::Output {
        self.map(|c| c.map_elements(&mut *f))
    }

    fn all_elements<F: FnMut(T) -> bool>(&self, pred: &mut F) -> bool {
        self.iter().all(|c| c.all_elements(&mut *pred))
    }
}

#[cfg(feature = "alloc")]
impl<T, C: Elementwise<T>> Elementwise<T> for Vec<C> {
    type Output = Vec<C::Output>;

    fn map_elements<F: FnMut(T) -> T>(self, f: &mut F) -> Self::Output {
        self.into_iter().map(|c| c.map_elements(&mut *f)).collect()
    }

    fn all_elements<F: FnMut(T) -> bool>(&self, pred: &mut F) -> bool {
        self.iter().all(|c| c.all_elements(&mut *pred))
    }
}

/// Borrowed slices map into an owned `Vec`.
#[cfg(feature = "alloc")]
impl<T, C: Elementwise<T> + Clone> Elementwise<T> for &[C] {
    type Output = Vec<C::Output>;

    fn map_elements<F: FnMut(T) -> T>(self, f: &mut F) -> Self::Output {
        self.iter().cloned().map(|c| c.map_elements(&mut *f)).collect()
    }

    fn all_elements<F: FnMut(T) -> bool>(&self, pred: &mut F) -> bool {
        self.iter().all(|c| c.all_elements(&mut *pred))
    }
}
