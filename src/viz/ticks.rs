//! Tick positions and visible ranges.

use super::config::TickSpec;
use crate::sample::linspace;

/// Fraction of the data span added on each side when a range is autoscaled.
pub const AUTO_MARGIN: f64 = 0.05;

/// Default number of intervals asked of the "nice" tick generator.
const AUTO_TICK_TARGET: usize = 6;

/// Visible range for data spanning `lo..=hi`, padded by [`AUTO_MARGIN`].
///
/// With `sticky_zero`, a bound sitting exactly on 0 is not padded (bars grow from 0).
/// Degenerate spans are widened so the range always has positive width.
pub fn auto_range(lo: f64, hi: f64, sticky_zero: bool) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if (hi - lo).abs() < f64::EPSILON {
        let d = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        return (lo - d, hi + d);
    }
    let pad = (hi - lo) * AUTO_MARGIN;
    let lo_out = if sticky_zero && lo == 0.0 { lo } else { lo - pad };
    let hi_out = if sticky_zero && hi == 0.0 { hi } else { hi + pad };
    (lo_out, hi_out)
}

/// Normalize user limits: ordered, finite, with positive width.
pub fn normalize_limits((lo, hi): (f64, f64)) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if hi - lo < f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

/// Generate "nice" tick values in [min, max] with roughly max_ticks steps.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let range = if max > min { max - min } else { 1.0 };
    if max_ticks == 0 {
        return vec![min];
    }
    let raw_step = range / (max_ticks as f64).max(1.0);
    let mag = 10.0_f64.powf(raw_step.log10().floor());
    let norm = if mag > 0.0 { raw_step / mag } else { raw_step };
    let step = if norm <= 1.0 {
        1.0 * mag
    } else if norm <= 2.0 {
        2.0 * mag
    } else if norm <= 2.5 {
        2.5 * mag
    } else if norm <= 5.0 {
        5.0 * mag
    } else {
        10.0 * mag
    };
    let step = step.max(f64::EPSILON);
    stepped(((min / step).ceil() * step, max), step)
}

/// `lo, lo + step, ...` up to and including `hi` (within rounding).
fn stepped((lo, hi): (f64, f64), step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() {
        return Vec::new();
    }
    let n = ((hi - lo) / step + 1e-9).floor();
    if n < 0.0 || n > 10_000.0 {
        return Vec::new();
    }
    (0..=n as usize)
        .map(|k| clean(lo + k as f64 * step))
        .collect()
}

/// Snap values like 0.30000000000000004 back onto the decimal grid.
fn clean(v: f64) -> f64 {
    let r = (v * 1e9).round() / 1e9;
    if r == 0.0 { 0.0 } else { r }
}

/// Resolve a tick spec against a visible range. The result is ascending and
/// contains only values inside the range.
pub fn tick_values(spec: &TickSpec, (lo, hi): (f64, f64)) -> Vec<f64> {
    let eps = (hi - lo).abs() * 1e-9;
    let inside = |v: &f64| *v >= lo - eps && *v <= hi + eps;
    let mut values: Vec<f64> = match spec {
        TickSpec::Auto => nice_ticks(lo, hi, AUTO_TICK_TARGET),
        TickSpec::Fixed(values) => values.iter().copied().filter(|v| v.is_finite()).collect(),
        TickSpec::Step(step) => stepped((lo, hi), *step),
        TickSpec::Evenly(n) => linspace(lo, hi, *n).into_iter().map(clean).collect(),
    };
    values.retain(inside);
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup_by(|a, b| (*a - *b).abs() <= eps);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_includes_upper_limit() {
        assert_eq!(
            tick_values(&TickSpec::Step(5.0), (-10.0, 10.0)),
            vec![-10.0, -5.0, 0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn fixed_ticks_outside_range_are_dropped() {
        let t = tick_values(&TickSpec::Fixed(vec![20.0, 0.0, 5.0, -1.0]), (0.0, 10.0));
        assert_eq!(t, vec![0.0, 5.0]);
    }

    #[test]
    fn evenly_spans_the_range() {
        assert_eq!(
            tick_values(&TickSpec::Evenly(5), (0.0, 1.0)),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
    }

    #[test]
    fn auto_ticks_are_round_and_inside() {
        let t = tick_values(&TickSpec::Auto, (0.0, 1.0));
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        let t = tick_values(&TickSpec::Auto, (-0.37, 22.1));
        assert!(t.iter().all(|v| *v >= -0.37 && *v <= 22.1));
        assert!(t.contains(&0.0) && t.contains(&20.0));
    }

    #[test]
    fn auto_range_pads_and_sticks_at_zero() {
        let (lo, hi) = auto_range(0.0, 20.0, true);
        assert_eq!(lo, 0.0);
        assert!((hi - 21.0).abs() < 1e-9);
        let (lo, hi) = auto_range(0.0, 20.0, false);
        assert!((lo + 1.0).abs() < 1e-9 && (hi - 21.0).abs() < 1e-9);
        let (lo, hi) = auto_range(3.0, 3.0, false);
        assert!(lo < 3.0 && hi > 3.0);
    }

    #[test]
    fn limits_are_ordered() {
        assert_eq!(normalize_limits((1.0, 0.0)), (0.0, 1.0));
        assert_eq!(normalize_limits((2.0, 2.0)), (1.5, 2.5));
    }
}
