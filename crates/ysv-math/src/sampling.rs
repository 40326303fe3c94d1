//! Scalar helpers and pressure sampling grids.

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `num` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Hard bound on the interior points of a [`pressure_grid`].
pub const MAX_GRID_SAMPLES: usize = 100_000;

/// Smallest step of at least `step` that covers `span` in at most
/// `max_samples` intervals.
pub fn capped_step(span: f64, step: f64, max_samples: usize) -> f64 {
    if max_samples == 0 {
        return step;
    }
    step.max(span / max_samples as f64)
}

/// Sample pressures on the multiples of `step` between `start` and `end`.
///
/// Both boundaries are always included, even when they fall between grid
/// points, so an envelope that begins at an apex or ends at the view limit
/// is drawn all the way. Grid points closer than `1e-9·step` to a boundary
/// are merged into it. The step widens when the range would need more than
/// [`MAX_GRID_SAMPLES`] points. Returns an empty grid when `start > end` or
/// any input (or the range width) is non-finite.
pub fn pressure_grid(start: f64, end: f64, step: f64) -> Vec<f64> {
    let span = end - start;
    if !(span.is_finite() && step.is_finite() && step > 0.0) || start > end {
        return Vec::new();
    }
    let step = capped_step(span, step, MAX_GRID_SAMPLES);

    let eps = step * 1e-9;
    let mut grid = vec![start];

    let first = (start / step).ceil() as i64;
    let last = (end / step).floor() as i64;
    for k in first..=last {
        let p = k as f64 * step;
        if p > start + eps && p < end - eps {
            grid.push(p);
        }
    }

    if end > start + eps {
        grid.push(end);
    }
    grid
}
