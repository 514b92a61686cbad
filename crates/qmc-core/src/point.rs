//! Control point representation

/// One authored RGBA color anchoring a gradient at an implicit position
///
/// Channel intensities are in [0, 1]. The position of a point inside a
/// gradient is implicit: point `i` of `N` sits at `i / (N - 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ControlPoint {
    /// Create an opaque control point from RGB channels
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn channels(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear blend between two points, `t` in [0, 1]
    pub fn lerp(&self, other: &ControlPoint, t: f32) -> ControlPoint {
        ControlPoint {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_defaults_alpha() {
        let p = ControlPoint::rgb(0.2, 0.4, 0.6);
        assert_eq!(p.channels(), [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn test_lerp_midpoint() {
        let black = ControlPoint::rgb(0.0, 0.0, 0.0);
        let white = ControlPoint::rgb(1.0, 1.0, 1.0);
        let mid = black.lerp(&white, 0.5);
        assert_eq!(mid.channels(), [0.5, 0.5, 0.5, 1.0]);
    }
}
