//! Bounded step-until-change search.
//!
//! A coarse scan evaluates a discrete function at fixed steps until its
//! value differs from the value at the start. The scan never runs more than
//! `max_steps` steps; running out is an outcome, not an error. Optionally
//! the last step is bisected down to [`REFINE_TOLERANCE_DAYS`].

/// Bisection stops once the bracket is this narrow (one second).
pub const REFINE_TOLERANCE_DAYS: f64 = 1.0 / 86_400.0;

const MAX_BISECTIONS: u32 = 64;

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

/// Result of a bounded scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The boundary instant and the number of coarse steps taken.
    ///
    /// Forward: the first instant carrying a new value.
    /// Backward: the earliest instant still carrying the start value.
    Changed { jd: f64, steps: u32 },
    /// No change within `max_steps`.
    Undetermined,
}

impl StepOutcome {
    pub fn jd(&self) -> Option<f64> {
        match self {
            Self::Changed { jd, .. } => Some(*jd),
            Self::Undetermined => None,
        }
    }
}

/// Step from `start_jd` until `f` differs from `f(start_jd)`.
///
/// `step_days` must be positive; the direction sets its sign.
pub fn step_until_change<T, E, F>(
    start_jd: f64,
    step_days: f64,
    max_steps: u32,
    direction: StepDirection,
    refine: bool,
    f: F,
) -> Result<StepOutcome, E>
where
    T: PartialEq,
    F: Fn(f64) -> Result<T, E>,
{
    let signed_step = match direction {
        StepDirection::Forward => step_days,
        StepDirection::Backward => -step_days,
    };
    let start_value = f(start_jd)?;

    let mut t_same = start_jd;
    for k in 1..=max_steps {
        let t = start_jd + k as f64 * signed_step;
        if f(t)? == start_value {
            t_same = t;
            continue;
        }
        let boundary = if refine {
            bisect_change(t_same, t, &start_value, &f)?
        } else {
            match direction {
                StepDirection::Forward => t,
                StepDirection::Backward => t_same,
            }
        };
        return Ok(StepOutcome::Changed {
            jd: boundary,
            steps: k,
        });
    }
    Ok(StepOutcome::Undetermined)
}

/// Narrow `[t_same, t_changed]` (in either order) until it is within
/// tolerance; returns the end of the bracket that matches the scan's
/// reporting convention.
fn bisect_change<T, E, F>(
    mut t_same: f64,
    mut t_changed: f64,
    start_value: &T,
    f: &F,
) -> Result<f64, E>
where
    T: PartialEq,
    F: Fn(f64) -> Result<T, E>,
{
    let forward = t_changed > t_same;
    for _ in 0..MAX_BISECTIONS {
        if (t_changed - t_same).abs() <= REFINE_TOLERANCE_DAYS {
            break;
        }
        let mid = 0.5 * (t_same + t_changed);
        if f(mid)? == *start_value {
            t_same = mid;
        } else {
            t_changed = mid;
        }
    }
    Ok(if forward { t_changed } else { t_same })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_at(x: f64) -> Result<i64, ()> {
        Ok(x.floor() as i64)
    }

    #[test]
    fn forward_coarse_reports_first_changed_step() {
        let out = step_until_change(0.1, 0.25, 10, StepDirection::Forward, false, floor_at);
        let Ok(StepOutcome::Changed { jd, steps }) = out else {
            panic!("expected a change, got {out:?}");
        };
        assert_eq!(steps, 4);
        assert!((jd - 1.1).abs() < 1e-12);
    }

    #[test]
    fn forward_refined_converges_on_boundary() {
        let out = step_until_change(0.1, 0.25, 10, StepDirection::Forward, true, floor_at).unwrap();
        let jd = out.jd().unwrap();
        assert!(jd >= 1.0 && jd - 1.0 <= REFINE_TOLERANCE_DAYS, "{jd}");
        assert_eq!(floor_at(jd), Ok(1));
    }

    #[test]
    fn backward_coarse_reports_one_step_later() {
        let out = step_until_change(2.6, 0.25, 10, StepDirection::Backward, false, floor_at);
        // 2.6 → 2.35 → 2.1 → 1.85 changes; entry reported at 2.1
        let Ok(StepOutcome::Changed { jd, steps }) = out else {
            panic!("expected a change, got {out:?}");
        };
        assert_eq!(steps, 3);
        assert!((jd - 2.1).abs() < 1e-12);
    }

    #[test]
    fn backward_refined_converges_on_entry() {
        let out = step_until_change(2.6, 0.25, 10, StepDirection::Backward, true, floor_at).unwrap();
        let jd = out.jd().unwrap();
        assert!(jd >= 2.0 && jd - 2.0 <= REFINE_TOLERANCE_DAYS, "{jd}");
        assert_eq!(floor_at(jd), Ok(2));
    }

    #[test]
    fn exhaustion_is_undetermined() {
        let out = step_until_change(0.0, 0.001, 50, StepDirection::Forward, true, floor_at);
        assert_eq!(out, Ok(StepOutcome::Undetermined));
        assert_eq!(out.unwrap().jd(), None);
    }

    #[test]
    fn errors_propagate() {
        let out: Result<StepOutcome, &str> =
            step_until_change(0.0, 1.0, 5, StepDirection::Forward, false, |t| {
                if t > 2.5 { Err("boom") } else { Ok(0) }
            });
        assert_eq!(out, Err("boom"));
    }
}
