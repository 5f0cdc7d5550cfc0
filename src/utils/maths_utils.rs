use std::num::ParseFloatError;

use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

/// Parses a numeric cell.
///
/// `Ok(None)` is a missing value (empty cell, `NaN`, `null`); `Err` means
/// the cell holds text that is not a number.
pub fn parse_numeric(raw: &str) -> Result<Option<f64>, ParseFloatError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    match s.to_ascii_lowercase().as_str() {
        "nan" | "null" | "none" | "n/a" | "na" => return Ok(None),
        _ => {}
    }
    let value = s.parse::<f64>()?;
    Ok(value.is_finite().then_some(value))
}

/// Arithmetic mean of the present values, `None` when nothing is present.
pub fn mean_present(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    Some(present.mean())
}

/// Mean over the last `window` entries (all entries if there are fewer).
/// Missing values inside the window are skipped, not counted.
pub fn trailing_mean(values: &[Option<f64>], window: usize) -> Option<f64> {
    let start = values.len().saturating_sub(window);
    mean_present(&values[start..])
}

pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    Some((get_min(vec)?, get_max(vec)?))
}

/// Widens `(min, max)` by `pct` of its span on both sides.
/// A flat range is widened by `pct` of its magnitude instead (or by 1.0 around zero).
pub fn pad_range(min: f64, max: f64, pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 {
        span * pct
    } else if min != 0.0 {
        min.abs() * pct
    } else {
        1.0
    };
    (min - pad, max + pad)
}
