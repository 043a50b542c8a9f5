//! Log-uniform distributions.
//!
//! Each distribution implements [`ContinuousDistribution`], which gives a
//! consistent API: scalar evaluation (`pdf`, `ln_pdf`, `cdf`, `sf`,
//! `quantile`), shape-preserving element-wise evaluation (`pdf_each`, …),
//! inverse-transform sampling and summary statistics.
//!
//! Single draws go through [`rand::distr::Distribution`], which both
//! distributions implement; `sample_n` and `rvs` draw in bulk.
//!
//! | Distribution | Parameters | Support | Density |
//! |---|---|---|---|
//! | [`LogUniform`] | lower a, upper b | [a, b] | 1 / (x C), C = ln(b/a) |
//! | [`ModifiedLogUniform`] | knee k, upper b | [0, b] | 1 / (max(x, k) C), C = ln(b/k) + 1 |
//!
//! # Example
//!
//! ```
//! use loguniform::stats::{LogUniform, ContinuousDistribution};
//!
//! let d = LogUniform::new(1.0_f64, 1000.0).unwrap();
//! assert!((d.cdf(10.0) - 1.0 / 3.0).abs() < 1e-14);
//! assert_eq!(d.support(), (1.0, 1000.0));
//! ```

mod log_uniform;
mod modified_log_uniform;


pub use log_uniform::LogUniform;
pub use modified_log_uniform::ModifiedLogUniform;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{Elementwise, FloatScalar};

/// Errors from distribution construction and probability-domain checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    #[error("distribution parameter out of valid range")]
    InvalidParameter,
    /// A probability or confidence level lies outside [0, 1].
    #[error("probability outside [0, 1]")]
    Domain,
}

/// Trait for continuous probability distributions.
///
/// Implementors supply the scalar density, cdf, unchecked inverse cdf and
/// moments about a point of their choosing; everything else is provided.
///
/// Evaluation never fails on out-of-support `x`: the density is `0`, the log
/// density `-∞`, and the cdf `0` or `1`. NaN inputs propagate to NaN outputs.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Closed support `(lower, upper)`.
    fn support(&self) -> (T, T);

    /// Probability density function.
    fn pdf(&self, x: T) -> T;

    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;

    /// Inverse cdf without the domain check. `p` must lie in [0, 1].
    fn inverse_cdf(&self, p: T) -> T;

    /// Point `s` that [`shifted_moment`](Self::shifted_moment) is taken about.
    fn moment_origin(&self) -> T;

    /// Moment E\[(X − s)ⁿ\] about `s = moment_origin()`, for `n >= 1`.
    ///
    /// Central moments are assembled from these, so `s` should sit close to
    /// the bulk of the mass.
    fn shifted_moment(&self, n: i32) -> T;

    /// Most likely value.
    fn mode(&self) -> T;

    /// Survival function P(X > x) = 1 − cdf(x).
    fn sf(&self, x: T) -> T {
        T::one() - self.cdf(x)
    }

    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    ///
    /// Fails with [`StatsError::Domain`] unless `0 ≤ p ≤ 1` (NaN included).
    fn quantile(&self, p: T) -> Result<T, StatsError> {
        if !in_unit_interval(p) {
            return Err(StatsError::Domain);
        }
        Ok(self.inverse_cdf(p))
    }

    /// Equal-tailed interval holding a fraction `alpha` of the probability
    /// mass around the median.
    fn interval(&self, alpha: T) -> Result<(T, T), StatsError> {
        if !in_unit_interval(alpha) {
            return Err(StatsError::Domain);
        }
        let two = T::two();
        let lo = self.inverse_cdf((T::one() - alpha) / two);
        let hi = self.inverse_cdf((T::one() + alpha) / two);
        Ok((lo, hi))
    }

    /// Element-wise [`pdf`](Self::pdf) over a scalar or container.
    fn pdf_each<X: Elementwise<T>>(&self, x: X) -> X::Output
    where
        Self: Sized,
    {
        x.map_elements(&mut |v| self.pdf(v))
    }

    /// Element-wise [`ln_pdf`](Self::ln_pdf).
    fn ln_pdf_each<X: Elementwise<T>>(&self, x: X) -> X::Output
    where
        Self: Sized,
    {
        x.map_elements(&mut |v| self.ln_pdf(v))
    }

    /// Element-wise [`cdf`](Self::cdf).
    fn cdf_each<X: Elementwise<T>>(&self, x: X) -> X::Output
    where
        Self: Sized,
    {
        x.map_elements(&mut |v| self.cdf(v))
    }

    /// Element-wise [`sf`](Self::sf).
    fn sf_each<X: Elementwise<T>>(&self, x: X) -> X::Output
    where
        Self: Sized,
    {
        x.map_elements(&mut |v| self.sf(v))
    }

    /// Element-wise [`quantile`](Self::quantile).
    ///
    /// All of `p` is checked before anything is evaluated; a single value
    /// outside [0, 1] fails the whole call.
    fn quantile_each<X: Elementwise<T>>(&self, p: X) -> Result<X::Output, StatsError>
    where
        Self: Sized,
    {
        if !p.all_elements(&mut |v| in_unit_interval(v)) {
            return Err(StatsError::Domain);
        }
        Ok(p.map_elements(&mut |v| self.inverse_cdf(v)))
    }

    /// Draw `size` independent variates. `size == 0` gives an empty vector.
    #[cfg(feature = "alloc")]
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Vec<T>
    where
        Self: Sized,
        StandardUniform: Distribution<T>,
    {
        log::trace!("drawing {size} variates");
        (0..size).map(|_| inverse_transform(self, &mut *rng)).collect()
    }

    /// [`sample_n`](Self::sample_n) using the thread-local generator.
    #[cfg(feature = "std")]
    fn rvs(&self, size: usize) -> Vec<T>
    where
        Self: Sized,
        StandardUniform: Distribution<T>,
    {
        self.sample_n(&mut rand::rng(), size)
    }

    /// Expected value E\[X\].
    fn mean(&self) -> T {
        self.moment_origin() + self.shifted_moment(1)
    }

    /// Variance Var(X).
    fn variance(&self) -> T {
        let m1 = self.shifted_moment(1);
        self.shifted_moment(2) - m1 * m1
    }

    /// Standard deviation.
    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    /// Median, `quantile(0.5)`.
    fn median(&self) -> T {
        self.inverse_cdf(T::lit(0.5))
    }

    /// Skewness E\[(X − μ)³\] / σ³.
    fn skewness(&self) -> T {
        shape_moments(self).0
    }

    /// Excess kurtosis E\[(X − μ)⁴\] / σ⁴ − 3.
    fn excess_kurtosis(&self) -> T {
        shape_moments(self).1
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Inverse-transform sampling: `u ~ U[0, 1)` mapped through the inverse cdf.
#[inline]
pub(crate) fn inverse_transform<T, D, R>(d: &D, rng: &mut R) -> T
where
    T: FloatScalar,
    D: ContinuousDistribution<T> + ?Sized,
    R: Rng + ?Sized,
    StandardUniform: Distribution<T>,
{
    let u: T = rng.random();
    d.inverse_cdf(u)
}

#[inline]
pub(crate) fn in_unit_interval<T: FloatScalar>(p: T) -> bool {
    p >= T::zero() && p <= T::one()
}

/// Skewness and excess kurtosis from the first four shifted moments.
/// Central moments do not depend on the shift.
fn shape_moments<T: FloatScalar, D: ContinuousDistribution<T> + ?Sized>(d: &D) -> (T, T) {
    let m1 = d.shifted_moment(1);
    let m2 = d.shifted_moment(2);
    let m3 = d.shifted_moment(3);
    let m4 = d.shifted_moment(4);

    let three = T::lit(3.0);
    let mu2 = m1 * m1;
    let var = m2 - mu2;
    let c3 = m3 - three * m1 * m2 + T::two() * mu2 * m1;
    let c4 = m4 - T::lit(4.0) * m1 * m3 + T::lit(6.0) * mu2 * m2 - three * mu2 * mu2;

    (c3 / var.powf(T::lit(1.5)), c4 / (var * var) - three)
}
