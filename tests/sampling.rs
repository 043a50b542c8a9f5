use loguniform::{ContinuousDistribution, LogUniform, ModifiedLogUniform};
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Two-sided Kolmogorov–Smirnov statistic of `samples` against `cdf`.
fn ks_statistic(mut samples: Vec<f64>, cdf: impl Fn(f64) -> f64) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = samples.len() as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i + 1) as f64 / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// KS critical value at α = 0.001.
fn ks_critical(n: usize) -> f64 {
    1.95 / (n as f64).sqrt()
}

#[test]
fn log_of_log_uniform_samples_is_uniform() {
    let d = LogUniform::new(1.0_f64, 1000.0).unwrap();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let samples = d.sample_n(&mut rng, 10_000);
    assert_eq!(samples.len(), 10_000);

    let log_max = 1000.0_f64.ln();
    let logs: Vec<f64> = samples.iter().map(|x| x.ln()).collect();
    assert!(logs.iter().all(|&t| (0.0..=log_max).contains(&t)));

    let stat = ks_statistic(logs, |t| t / log_max);
    assert!(stat < ks_critical(10_000), "KS statistic {stat}");
}

#[test]
fn modified_samples_follow_cdf() {
    let d = ModifiedLogUniform::new(1.0_f64, 1000.0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let samples = d.sample_n(&mut rng, 10_000);
    assert!(samples.iter().all(|&x| (0.0..=1000.0).contains(&x)));

    let stat = ks_statistic(samples.clone(), |x| d.cdf(x));
    assert!(stat < ks_critical(10_000), "KS statistic {stat}");

    // About 1/C of the mass sits on the flat segment below the knee.
    let below = samples.iter().filter(|&&x| x < 1.0).count() as f64 / 10_000.0;
    let expected = 1.0 / (1000.0_f64.ln() + 1.0);
    assert!((below - expected).abs() < 0.02, "fraction below knee {below}");
}

#[test]
fn sample_mean_near_analytic_mean() {
    let d = LogUniform::new(1.0_f64, 1000.0).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let samples = d.sample_n(&mut rng, 20_000);
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!(
        (mean - d.mean()).abs() < 0.1 * d.mean(),
        "sample mean {mean}, analytic {}",
        d.mean()
    );
}

#[test]
fn single_draws_stay_in_support() {
    let d = LogUniform::new(0.01_f64, 0.02).unwrap();
    let m = ModifiedLogUniform::new(0.5_f64, 2.0).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1_000 {
        let x = d.sample(&mut rng);
        assert!((0.01..=0.02).contains(&x));
        let y = m.sample(&mut rng);
        assert!((0.0..=2.0).contains(&y));
    }
}

#[test]
fn sample_iter_and_rng_sample() {
    use rand::Rng;

    let d = ModifiedLogUniform::new(2.0_f64, 20.0).unwrap();
    let rng = StdRng::seed_from_u64(11);
    let xs: Vec<f64> = d.sample_iter(rng).take(50).collect();
    assert_eq!(xs.len(), 50);
    assert!(xs.iter().all(|&x| (0.0..=20.0).contains(&x)));

    let mut rng = StdRng::seed_from_u64(11);
    let first: f64 = rng.sample(d);
    assert_eq!(first, xs[0]);
}

#[test]
fn seeded_sampling_is_reproducible() {
    let d = LogUniform::new(1.0_f64, 50.0).unwrap();
    let a = d.sample_n(&mut StdRng::seed_from_u64(99), 100);
    let b = d.sample_n(&mut StdRng::seed_from_u64(99), 100);
    assert_eq!(a, b);
}

#[test]
fn zero_and_one_sized_draws() {
    let d = ModifiedLogUniform::new(1.0_f64, 10.0).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    assert!(d.sample_n(&mut rng, 0).is_empty());
    assert_eq!(d.sample_n(&mut rng, 1).len(), 1);
    assert_eq!(d.rvs(0).len(), 0);
    assert_eq!(d.rvs(3).len(), 3);
}

#[test]
fn f32_sampling() {
    let d = LogUniform::new(1.0_f32, 100.0).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let xs = d.sample_n(&mut rng, 1_000);
    assert!(xs.iter().all(|&x| (1.0..=100.0).contains(&x)));
}
