use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::FloatScalar;
use super::{inverse_transform, ContinuousDistribution, StatsError};

/// Modified log-uniform distribution on [0, b] with a knee k.
///
/// Uniform below the knee, reciprocal above it:
///
/// ```text
/// f(x) = 1 / (k C)   0 ≤ x < k
/// f(x) = 1 / (x C)   k ≤ x ≤ b
/// C    = ln(b) − ln(k) + 1
/// ```
///
/// The density is continuous at the knee and, unlike [`LogUniform`](super::LogUniform),
/// the support includes zero.
///
/// # Example
///
/// ```
/// use loguniform::stats::{ModifiedLogUniform, ContinuousDistribution};
///
/// let d = ModifiedLogUniform::new(1.0_f64, 1000.0).unwrap();
/// let c = 1000.0_f64.ln() + 1.0;
/// assert!((d.pdf(0.5) - 1.0 / c).abs() < 1e-15);
/// assert!((d.pdf(10.0) - 1.0 / (10.0 * c)).abs() < 1e-15);
/// assert_eq!(d.cdf(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedLogUniform<T> {
    knee: T,
    b: T,
    /// Total mass before normalization, ln(b) − ln(k) + 1.
    norm: T,
}

impl<T: FloatScalar> ModifiedLogUniform<T> {
    /// Create a modified log-uniform distribution. Requires `0 < knee < b < ∞`.
    pub fn new(knee: T, b: T) -> Result<Self, StatsError> {
        if !(knee > T::zero() && b > knee && b.is_finite()) {
            log::debug!("rejected ModifiedLogUniform parameters knee = {knee:?}, b = {b:?}");
            return Err(StatsError::InvalidParameter);
        }
        // b / knee can overflow for a tiny knee; the logs cannot.
        let norm = T::one() + (b.ln() - knee.ln());
        log::debug!("ModifiedLogUniform on [0, {b:?}], knee {knee:?}, normalization {norm:?}");
        Ok(Self { knee, b, norm })
    }

    /// Breakpoint between the uniform and reciprocal segments.
    pub fn knee(&self) -> T {
        self.knee
    }

    /// Upper bound.
    pub fn b(&self) -> T {
        self.b
    }

    /// Constant density on the uniform segment, 1 / (k C).
    #[inline]
    fn flat_density(&self) -> T {
        T::one() / (self.knee * self.norm)
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for ModifiedLogUniform<T> {
    fn support(&self) -> (T, T) {
        (T::zero(), self.b)
    }

    fn pdf(&self, x: T) -> T {
        if x >= T::zero() && x < self.knee {
            self.flat_density()
        } else if x >= self.knee && x <= self.b {
            T::one() / (x * self.norm)
        } else if x.is_nan() {
            x
        } else {
            T::zero()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        // The flat segment uses ln(k) so x = 0 never reaches ln.
        if x >= T::zero() && x < self.knee {
            -self.knee.ln() - self.norm.ln()
        } else if x >= self.knee && x <= self.b {
            -x.ln() - self.norm.ln()
        } else if x.is_nan() {
            x
        } else {
            T::neg_infinity()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x < T::zero() {
            T::zero()
        } else if x < self.knee {
            x / (self.knee * self.norm)
        } else if x > self.b {
            T::one()
        } else {
            (T::one() + (x.ln() - self.knee.ln())) / self.norm
        }
    }

    fn inverse_cdf(&self, p: T) -> T {
        if p <= T::zero() {
            return T::zero();
        }
        if p >= T::one() {
            return self.b;
        }
        // cdf(knee) = 1/C
        if p * self.norm < T::one() {
            p * self.norm * self.knee
        } else {
            let t = p * self.norm - T::one();
            let x = self.knee * t.exp();
            let x = if x.is_finite() { x } else { (self.knee.ln() + t).exp() };
            x.max(self.knee).min(self.b)
        }
    }

    fn moment_origin(&self) -> T {
        T::zero()
    }

    fn shifted_moment(&self, n: i32) -> T {
        let nf = T::lit(f64::from(n));
        let kn = self.knee.powi(n);
        kn / ((nf + T::one()) * self.norm) + (self.b.powi(n) - kn) / (nf * self.norm)
    }

    fn mode(&self) -> T {
        T::zero()
    }
}

impl<T: FloatScalar> Distribution<T> for ModifiedLogUniform<T>
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        inverse_transform(self, rng)
    }
}
