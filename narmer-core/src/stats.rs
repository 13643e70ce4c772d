//! Weissman score
//!
//! `W = scale · (target_ratio / source_ratio) · (ln source_time / ln target_time)`
//!
//! Rates a target algorithm against a standard one by comparing a quality
//! ratio (compression ratio, F1, ...) and the time each needs.

use crate::error::{Error, Result};

/// Scaling constant used when none is given
pub const DEFAULT_SCALE: f64 = 1.0;

/// Weissman score of a target algorithm against a source algorithm
///
/// Times are checked before ratios; any non-positive value is an
/// [`Error::InvalidArgument`]. Equal times short-circuit to the scaled ratio
/// term. A target time of exactly 1 is nudged by `f64::EPSILON` so that its
/// logarithm is non-zero.
///
/// # Example
///
/// ```rust
/// use narmer_core::weissman_score;
///
/// assert_eq!(weissman_score(1.0, 1.0, 1.0, 1.0, 2.0).unwrap(), 2.0);
/// assert!(weissman_score(0.0, 1.0, 1.0, 1.0, 1.0).is_err());
/// ```
pub fn weissman_score(
    target_ratio: f64,
    target_time: f64,
    source_ratio: f64,
    source_time: f64,
    scale: f64,
) -> Result<f64> {
    if !(target_time > 0.0 && source_time > 0.0) {
        return Err(Error::InvalidArgument(
            "compression times must be positive values".into(),
        ));
    }
    if !(target_ratio > 0.0 && source_ratio > 0.0) {
        return Err(Error::InvalidArgument(
            "compression ratios must be positive values".into(),
        ));
    }

    if source_time == target_time {
        return Ok(scale * (target_ratio / source_ratio));
    }

    let target_time = if target_time == 1.0 {
        target_time + f64::EPSILON
    } else {
        target_time
    };
    let time_term = source_time.ln() / target_time.ln();

    if target_ratio == source_ratio {
        Ok(scale * time_term)
    } else {
        Ok(scale * (target_ratio / source_ratio) * time_term)
    }
}
