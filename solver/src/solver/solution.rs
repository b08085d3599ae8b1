use na::Vector3;

/// Interpolation data for one accepted step over [t0, t0 + h].
///
/// Coefficients are stored in the nested Horner form of Hairer's dopri5
/// continuous output: with theta = (t - t0) / h and theta1 = 1 - theta,
///
/// y(t) = r0 + theta (r1 + theta1 (r2 + theta (r3 + theta1 r4)))
///
/// A cubic Hermite segment is the same polynomial with r4 = 0.
#[derive(Clone, Debug)]
pub struct DenseSegment {
    pub t0: f64,
    pub h: f64,
    pub rcont: [Vector3<f64>; 5],
}

impl DenseSegment {
    pub fn evaluate(&self, t: f64) -> Vector3<f64> {
        let theta = (t - self.t0) / self.h;
        let theta1 = 1.0 - theta;
        self.rcont[0]
            + theta
                * (self.rcont[1]
                    + theta1 * (self.rcont[2] + theta * (self.rcont[3] + theta1 * self.rcont[4])))
    }
}

/// Result of one integration run.
///
/// `times` is strictly increasing, starts at 0 and ends exactly at the
/// requested final time. `states[i]` is the state at `times[i]`.
#[derive(Clone, Debug)]
pub struct Solution {
    pub times: Vec<f64>,
    pub states: Vec<Vector3<f64>>,
    /// derivative evaluations spent on this run
    pub evaluations: usize,
    /// accepted step count
    pub accepted: usize,
    /// rejected step count
    pub rejected: usize,
    /// per-step interpolation segments, present when dense output was requested
    pub dense: Option<Vec<DenseSegment>>,
}

impl Solution {
    /// Evaluate the continuous interpolant at time `t`.
    ///
    /// Returns None when the run was made without dense output or `t`
    /// lies outside the integrated interval.
    pub fn evaluate_at(&self, t: f64) -> Option<Vector3<f64>> {
        let segments = self.dense.as_ref()?;
        let t_start = *self.times.first()?;
        let t_end = *self.times.last()?;
        if t < t_start || t > t_end {
            return None;
        }
        // rightmost segment starting at or before t; the final segment
        // also answers t = t_end
        let index = segments
            .partition_point(|segment| segment.t0 <= t)
            .saturating_sub(1);
        Some(segments[index].evaluate(t))
    }

    /// Sample the interpolant at `points` evenly spaced times over the
    /// integrated interval, both endpoints included.
    pub fn sample(&self, points: usize) -> Option<(Vec<f64>, Vec<Vector3<f64>>)> {
        let t_end = *self.times.last()?;
        let times = sample_times(t_end, points);
        let mut states = Vec::with_capacity(times.len());
        for t in &times {
            states.push(self.evaluate_at(*t)?);
        }
        Some((times, states))
    }
}

/// `points` evenly spaced sample times over [0, t_final], the first
/// exactly 0 and the last exactly t_final.
pub fn sample_times(t_final: f64, points: usize) -> Vec<f64> {
    if points == 1 {
        return vec![0.0];
    }
    let step = t_final / (points - 1) as f64;
    (0..points)
        .map(|i| {
            if i == points - 1 {
                t_final
            } else {
                i as f64 * step
            }
        })
        .collect()
}
