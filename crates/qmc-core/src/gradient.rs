//! Piecewise-linear gradient evaluation

use crate::point::ControlPoint;
use crate::GradientError;

/// A named, sampleable colormap
///
/// Backend adapters produce concrete implementations: continuous evaluation
/// for the plot backend, a pre-computed lookup table for the texture backend.
/// Both must agree with the piecewise-linear formula of [`LinearGradient`]
/// within floating-point tolerance at every sampled position.
pub trait Colormap: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Interpolated RGBA at position `t`, clamped to [0, 1]
    fn sample(&self, t: f32) -> [f32; 4];
}

/// Continuous piecewise-linear interpolation over a control point sequence
///
/// Control points are parameterized uniformly by index: point `i` of `N` sits
/// at position `i / (N - 1)`. Evaluation locates the bracketing pair and
/// blends each channel independently.
#[derive(Debug, Clone)]
pub struct LinearGradient {
    points: Vec<ControlPoint>,
}

impl LinearGradient {
    /// Build a gradient from an ordered control point sequence
    ///
    /// Fails when fewer than 2 points are supplied.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self, GradientError> {
        if points.len() < 2 {
            return Err(GradientError::TooFewPoints {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Interpolated RGBA at position `t`, clamped to [0, 1]
    pub fn eval(&self, t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);
        let last = self.points.len() - 1;
        let scaled = t * last as f32;
        let i = (scaled.floor() as usize).min(last - 1);
        let frac = scaled - i as f32;
        self.points[i].lerp(&self.points[i + 1], frac).channels()
    }

    /// Pre-compute `resolution` evenly spaced samples over [0, 1]
    ///
    /// Fails when `resolution` is below 2 (the table must cover both ends).
    pub fn sample_table(&self, resolution: usize) -> Result<Vec<[f32; 4]>, GradientError> {
        if resolution < 2 {
            return Err(GradientError::InvalidResolution { resolution });
        }
        let step = 1.0 / (resolution - 1) as f32;
        Ok((0..resolution).map(|i| self.eval(i as f32 * step)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grayscale() -> LinearGradient {
        LinearGradient::new(vec![
            ControlPoint::rgb(0.0, 0.0, 0.0),
            ControlPoint::rgb(1.0, 1.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_too_few_points() {
        let err = LinearGradient::new(vec![ControlPoint::rgb(1.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, GradientError::TooFewPoints { count: 1 });
    }

    #[test]
    fn test_endpoints_match_control_points() {
        let g = LinearGradient::new(vec![
            ControlPoint::rgb(0.1, 0.2, 0.3),
            ControlPoint::rgb(0.4, 0.5, 0.6),
            ControlPoint::rgb(0.7, 0.8, 0.9),
        ])
        .unwrap();
        assert_eq!(g.eval(0.0), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(g.eval(1.0), [0.7, 0.8, 0.9, 1.0]);
    }

    #[test]
    fn test_midpoint_blend() {
        assert_eq!(grayscale().eval(0.5), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_eval_clamps_out_of_range() {
        let g = grayscale();
        assert_eq!(g.eval(-1.0), g.eval(0.0));
        assert_eq!(g.eval(2.0), g.eval(1.0));
    }

    #[test]
    fn test_three_point_bracketing() {
        // 0.25 falls halfway into the first segment of a 3-point gradient
        let g = LinearGradient::new(vec![
            ControlPoint::rgb(0.0, 0.0, 0.0),
            ControlPoint::rgb(1.0, 0.0, 0.0),
            ControlPoint::rgb(1.0, 1.0, 0.0),
        ])
        .unwrap();
        let [r, g_ch, b, a] = g.eval(0.25);
        assert!((r - 0.5).abs() < 1e-6);
        assert!(g_ch.abs() < 1e-6);
        assert!(b.abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_sample_table_resolution() {
        let table = grayscale().sample_table(5).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table[0], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(table[2], [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(table[4], [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_invalid_resolution() {
        let err = grayscale().sample_table(1).unwrap_err();
        assert_eq!(err, GradientError::InvalidResolution { resolution: 1 });
    }

    #[test]
    fn test_table_matches_continuous_eval() {
        let g = LinearGradient::new(vec![
            ControlPoint::rgb(0.0, 0.1, 0.9),
            ControlPoint::rgb(0.3, 0.5, 0.4),
            ControlPoint::rgb(0.9, 0.9, 0.1),
        ])
        .unwrap();
        let table = g.sample_table(256).unwrap();
        for (i, texel) in table.iter().enumerate() {
            let t = i as f32 / 255.0;
            let direct = g.eval(t);
            for c in 0..4 {
                assert!((texel[c] - direct[c]).abs() < 1e-6);
            }
        }
    }
}
