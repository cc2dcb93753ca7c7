///
/// Single-pass mean and variance accumulator (Welford's online algorithm).
///
/// Observations are never stored: each `push` updates the count, the running mean and
/// the running sum of squared deviations from the mean (`m2`).
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMoments {
    n: u64,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, value: f64) {
        self.n += 1;
        let delta = value - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.n
    }

    /// Arithmetic mean, `0.0` when nothing was observed.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (`n - 1` denominator). Defined as `0.0` below two observations.
    pub fn sample_std(&self) -> f64 {
        if self.n > 1 {
            (self.m2 / (self.n - 1) as f64).sqrt()
        } else {
            0.0
        }
    }
}

impl<T: Into<f64>> FromIterator<T> for RunningMoments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut moments = RunningMoments::new();
        for value in iter {
            moments.push(value.into());
        }
        moments
    }
}
