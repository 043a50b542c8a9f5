//! # loguniform
//!
//! Log-uniform (reciprocal) and modified log-uniform probability
//! distributions, no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use loguniform::{ContinuousDistribution, LogUniform, ModifiedLogUniform};
//!
//! let d = LogUniform::new(1.0_f64, 1000.0).unwrap();
//! assert!((d.cdf(10.0) - 1.0 / 3.0).abs() < 1e-14);
//!
//! // Element-wise evaluation preserves the shape of the input.
//! let densities = d.pdf_each([0.5_f64, 1.0, 10.0]);
//! assert_eq!(densities[0], 0.0);
//!
//! let m = ModifiedLogUniform::new(1.0_f64, 1000.0).unwrap();
//! assert_eq!(m.support(), (0.0, 1000.0));
//! assert!(m.quantile(1.5).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`stats`] — [`LogUniform`] on `[a, b]` and [`ModifiedLogUniform`] on
//!   `[0, b]` (uniform below a knee, reciprocal above it). Both implement
//!   [`ContinuousDistribution`]: `pdf`, `ln_pdf`, `cdf`, `sf`, `quantile`,
//!   `interval`, summary statistics, and sampling through `rand`.
//!
//! - [`elementwise`] — [`Elementwise`], the shape-preserving map used by the
//!   `*_each` methods. Implemented for `f32`, `f64`, arrays, `Vec` and
//!   slices, nested arbitrarily.
//!
//! - [`traits`] — [`FloatScalar`], the float bound (`f32`, `f64`).
//!
//! ## Sampling
//!
//! Sampling is inverse-transform: a `U[0, 1)` draw from the caller's
//! [`rand::Rng`] is mapped through the inverse cdf. Single draws use
//! [`rand::distr::Distribution::sample`]; `sample_n` returns a `Vec` (empty
//! when asked for zero draws). With `std`, `rvs` uses the thread-local
//! generator.
//!
//! ```
//! use loguniform::{ContinuousDistribution, LogUniform};
//! use rand::distr::Distribution;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let d = LogUniform::new(1.0_f64, 100.0).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let x = d.sample(&mut rng);
//! assert!((1.0..=100.0).contains(&x));
//! assert_eq!(d.sample_n(&mut rng, 25).len(), 25);
//! ```
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, thread-local RNG (`rvs`) |
//! | `alloc`   | via std  | `Vec` support for `Elementwise` and `sample_n` |
//! | `libm`    | no       | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod elementwise;
pub mod stats;
pub mod traits;

pub use elementwise::Elementwise;
pub use stats::{ContinuousDistribution, LogUniform, ModifiedLogUniform, StatsError};
pub use traits::FloatScalar;
