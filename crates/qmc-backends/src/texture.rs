//! Texture backend: fixed-size lookup tables for GPU upload
//!
//! The texture backend pre-computes an evenly spaced RGBA table per gradient,
//! sized for a Nx1 texture. Sampling filters linearly between adjacent
//! texels, so it agrees with the continuous formula at every texel position.

use std::sync::Arc;

use once_cell::sync::Lazy;
use qmc_core::{BackendId, Colormap, ControlPoint, GradientError, GradientName, LinearGradient};

use crate::catalogue::{Catalogue, InMemoryCatalogue};
use crate::registry::BackendAdapter;

/// Texel count matching a 256x1 colormap texture
pub const DEFAULT_RESOLUTION: usize = 256;

/// Pre-sampled colormap table
#[derive(Debug)]
pub struct TextureColormap {
    name: GradientName,
    table: Vec<[f32; 4]>,
}

impl TextureColormap {
    pub fn resolution(&self) -> usize {
        self.table.len()
    }

    pub fn texels(&self) -> &[[f32; 4]] {
        &self.table
    }

    /// Table as tightly packed RGBA8 bytes for texture upload
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.table.len() * 4);
        for texel in &self.table {
            for channel in texel {
                bytes.push((channel * 255.0).round() as u8);
            }
        }
        bytes
    }
}

impl Colormap for TextureColormap {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn sample(&self, t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);
        let last = self.table.len() - 1;
        let scaled = t * last as f32;
        let i = (scaled.floor() as usize).min(last - 1);
        let frac = scaled - i as f32;
        let lo = self.table[i];
        let hi = self.table[i + 1];
        [
            lo[0] + (hi[0] - lo[0]) * frac,
            lo[1] + (hi[1] - lo[1]) * frac,
            lo[2] + (hi[2] - lo[2]) * frac,
            lo[3] + (hi[3] - lo[3]) * frac,
        ]
    }
}

/// Adapter building [`TextureColormap`]s at a fixed resolution
pub struct TextureBackend {
    resolution: usize,
}

impl TextureBackend {
    pub fn new(resolution: usize) -> Self {
        Self { resolution }
    }
}

impl Default for TextureBackend {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl BackendAdapter for TextureBackend {
    type Colormap = TextureColormap;

    fn id(&self) -> BackendId {
        BackendId::Texture
    }

    fn build(
        &self,
        name: GradientName,
        points: Vec<ControlPoint>,
    ) -> Result<TextureColormap, GradientError> {
        let table = LinearGradient::new(points)?.sample_table(self.resolution)?;
        Ok(TextureColormap { name, table })
    }
}

static CATALOGUE: Lazy<Arc<InMemoryCatalogue<TextureColormap>>> =
    Lazy::new(|| Arc::new(InMemoryCatalogue::new()));

/// The process-wide texture colormap catalogue
pub fn global_catalogue() -> Arc<dyn Catalogue<TextureColormap>> {
    Arc::clone(&*CATALOGUE) as Arc<dyn Catalogue<TextureColormap>>
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(points: Vec<ControlPoint>, resolution: usize) -> TextureColormap {
        TextureBackend::new(resolution)
            .build(GradientName::Navia, points)
            .unwrap()
    }

    #[test]
    fn test_table_has_requested_resolution() {
        let colormap = build(
            vec![
                ControlPoint::rgb(0.0, 0.0, 0.0),
                ControlPoint::rgb(1.0, 1.0, 1.0),
            ],
            64,
        );
        assert_eq!(colormap.resolution(), 64);
    }

    #[test]
    fn test_sample_matches_continuous_formula() {
        let points = vec![
            ControlPoint::rgb(0.0, 0.1, 0.9),
            ControlPoint::rgb(0.3, 0.5, 0.4),
            ControlPoint::rgb(0.9, 0.9, 0.1),
        ];
        let gradient = LinearGradient::new(points.clone()).unwrap();
        let colormap = build(points, DEFAULT_RESOLUTION);
        for i in 0..DEFAULT_RESOLUTION {
            let t = i as f32 / (DEFAULT_RESOLUTION - 1) as f32;
            let direct = gradient.eval(t);
            let lut = colormap.sample(t);
            for c in 0..4 {
                assert!((direct[c] - lut[c]).abs() < 1e-5, "mismatch at t={t}");
            }
        }
    }

    #[test]
    fn test_endpoints_hit_control_points() {
        let colormap = build(
            vec![
                ControlPoint::rgb(0.1, 0.2, 0.3),
                ControlPoint::rgb(0.7, 0.8, 0.9),
            ],
            DEFAULT_RESOLUTION,
        );
        assert_eq!(colormap.sample(0.0), [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(colormap.sample(1.0), [0.7, 0.8, 0.9, 1.0]);
    }

    #[test]
    fn test_rgba8_bytes() {
        let colormap = build(
            vec![
                ControlPoint::rgb(0.0, 0.0, 0.0),
                ControlPoint::rgb(1.0, 1.0, 1.0),
            ],
            2,
        );
        assert_eq!(colormap.to_rgba8(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_build_rejects_bad_resolution() {
        let err = TextureBackend::new(1)
            .build(
                GradientName::Navia,
                vec![
                    ControlPoint::rgb(0.0, 0.0, 0.0),
                    ControlPoint::rgb(1.0, 1.0, 1.0),
                ],
            )
            .unwrap_err();
        assert_eq!(err, GradientError::InvalidResolution { resolution: 1 });
    }
}
