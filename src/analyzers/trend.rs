//! Exponential moving average used to smooth the inbound bandwidth series

/// Computes the EMA of `samples` over the given window.
///
/// Returns `None` when the sequence is shorter than `window + 2` — too little
/// data for a meaningful trend, so none is produced at all. Otherwise the
/// output has the same length as the input: the first `window` positions are
/// the warm-up period and carry no value, position `window` is seeded with
/// the raw sample at that index, and each later position follows
/// `ema[i] = ema[i-1] + alpha * (samples[i] - ema[i-1])` with
/// `alpha = 2 / (window + 1)`.
///
/// The seed is the raw sample, not an average of the warm-up span. Output
/// compatibility with existing captures depends on that choice.
pub fn ema(samples: &[f64], window: usize) -> Option<Vec<Option<f64>>> {
    if samples.len() < window + 2 {
        return None;
    }
    let alpha = 2.0 / (window as f64 + 1.0);

    let mut smoothed = vec![None; window];
    let mut previous = samples[window];
    smoothed.push(Some(previous));
    for &sample in &samples[window + 1..] {
        previous += alpha * (sample - previous);
        smoothed.push(Some(previous));
    }
    Some(smoothed)
}

/// Arithmetic mean, `0.0` for an empty sequence.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
