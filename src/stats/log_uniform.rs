use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::FloatScalar;
use super::{inverse_transform, ContinuousDistribution, StatsError};

/// Log-uniform (reciprocal) distribution on [a, b].
///
/// f(x) = 1 / (x C) for a ≤ x ≤ b, with C = ln(b / a). Equivalently,
/// ln(X) is uniform on [ln a, ln b].
///
/// # Example
///
/// ```
/// use loguniform::stats::{LogUniform, ContinuousDistribution};
///
/// let d = LogUniform::new(1.0_f64, 1000.0).unwrap();
/// assert!((d.pdf(1.0) - 1.0 / 1000.0_f64.ln()).abs() < 1e-15);
/// assert!((d.cdf(10.0) - 1.0 / 3.0).abs() < 1e-14);
/// assert_eq!(d.quantile(1.0), Ok(1000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogUniform<T> {
    a: T,
    b: T,
    /// ln(b / a), shared by every evaluation.
    log_range: T,
}

impl<T: FloatScalar> LogUniform<T> {
    /// Create a log-uniform distribution on [a, b]. Requires `0 < a < b < ∞`.
    pub fn new(a: T, b: T) -> Result<Self, StatsError> {
        if !(a > T::zero() && b > a && b.is_finite()) {
            log::debug!("rejected LogUniform parameters a = {a:?}, b = {b:?}");
            return Err(StatsError::InvalidParameter);
        }
        let log_range = ln_ratio(b, a);
        log::debug!("LogUniform on [{a:?}, {b:?}], log range {log_range:?}");
        Ok(Self { a, b, log_range })
    }

    /// Lower bound.
    pub fn a(&self) -> T {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> T {
        self.b
    }

    #[inline]
    fn contains(&self, x: T) -> bool {
        x >= self.a && x <= self.b
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for LogUniform<T> {
    fn support(&self) -> (T, T) {
        (self.a, self.b)
    }

    fn pdf(&self, x: T) -> T {
        if self.contains(x) {
            T::one() / (x * self.log_range)
        } else if x.is_nan() {
            x
        } else {
            T::zero()
        }
    }

    fn ln_pdf(&self, x: T) -> T {
        if self.contains(x) {
            -x.ln() - self.log_range.ln()
        } else if x.is_nan() {
            x
        } else {
            T::neg_infinity()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x < self.a {
            T::zero()
        } else if x > self.b {
            T::one()
        } else {
            // NaN falls through and propagates.
            ln_ratio(x, self.a) / self.log_range
        }
    }

    fn inverse_cdf(&self, p: T) -> T {
        if p <= T::zero() {
            self.a
        } else if p >= T::one() {
            self.b
        } else {
            let t = p * self.log_range;
            let x = self.a + self.a * t.exp_m1();
            let x = if x.is_finite() { x } else { (self.a.ln() + t).exp() };
            x.max(self.a).min(self.b)
        }
    }

    fn moment_origin(&self) -> T {
        self.a
    }

    /// E\[(X − a)ⁿ\] = (1/C) ∫₀ʷ yⁿ / (y + a) dy with w = b − a.
    fn shifted_moment(&self, n: i32) -> T {
        let a = self.a;
        let w = self.b - a;
        let r = w / a;
        if r < T::lit(0.5) {
            // aⁿ ∫₀ʳ tⁿ / (1 + t) dt = wⁿ r Σⱼ (−r)ʲ / (n + 1 + j)
            let mut sum = T::zero();
            let mut power = T::one();
            for j in 0..MAX_SERIES_TERMS {
                let term = power / T::lit(f64::from(n + 1 + j));
                sum = sum + term;
                if term.abs() <= T::epsilon() * sum.abs() {
                    break;
                }
                power = -power * r;
            }
            w.powi(n) * r * sum / self.log_range
        } else {
            // Polynomial division of yⁿ by (y + a).
            let mut acc = (-a).powi(n) * self.log_range;
            for k in 0..n {
                let term = a.powi(n - 1 - k) * w.powi(k + 1) / T::lit(f64::from(k + 1));
                acc = if (n - 1 - k) % 2 == 0 { acc + term } else { acc - term };
            }
            acc / self.log_range
        }
    }

    fn mode(&self) -> T {
        self.a
    }
}

const MAX_SERIES_TERMS: i32 = 200;

/// ln(x / a) for `x >= a > 0`, accurate when x ≈ a and free of overflow in
/// x / a.
#[inline]
fn ln_ratio<T: FloatScalar>(x: T, a: T) -> T {
    let r = (x - a) / a;
    if r.is_finite() {
        r.ln_1p()
    } else {
        x.ln() - a.ln()
    }
}

impl<T: FloatScalar> Distribution<T> for LogUniform<T>
where
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        inverse_transform(self, rng)
    }
}
