/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to one decimal place from the exact binary value, the way the
/// health panel prints averages.
///
/// Values exactly halfway between two tenths (`x.x5` is only exact for
/// `.25`/`.75` endings) round away from zero. Everything else rounds to the
/// nearest tenth of the stored value, so `70.05` (stored as `70.0499..`)
/// becomes `70.0`.
pub fn round_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let magnitude = value.abs();
    let quarters = magnitude * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        // exact tie: magnitude * 10 is exact here
        (magnitude * 10.0 + 0.5).floor() / 10.0
    } else {
        format!("{magnitude:.1}").parse().unwrap_or(magnitude)
    };

    rounded.copysign(value)
}
