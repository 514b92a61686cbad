//! Plot backend: continuous colormaps for immediate-mode plotting
//!
//! The plot backend evaluates gradients continuously and hands out
//! [`egui::Color32`] values ready for plot meshes and legends.

use std::sync::Arc;

use egui::Color32;
use once_cell::sync::Lazy;
use qmc_core::{BackendId, Colormap, ControlPoint, GradientError, GradientName, LinearGradient};

use crate::catalogue::{Catalogue, InMemoryCatalogue};
use crate::registry::BackendAdapter;

/// Continuously evaluated colormap
#[derive(Debug)]
pub struct PlotColormap {
    name: GradientName,
    gradient: LinearGradient,
}

impl PlotColormap {
    pub fn gradient(&self) -> &LinearGradient {
        &self.gradient
    }

    /// Interpolated color at `t` as an 8-bit egui color
    pub fn color32(&self, t: f32) -> Color32 {
        let [r, g, b, a] = self.sample(t);
        Color32::from_rgba_unmultiplied(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            (a * 255.0).round() as u8,
        )
    }
}

impl Colormap for PlotColormap {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn sample(&self, t: f32) -> [f32; 4] {
        self.gradient.eval(t)
    }
}

/// Adapter building [`PlotColormap`]s
pub struct PlotBackend;

impl BackendAdapter for PlotBackend {
    type Colormap = PlotColormap;

    fn id(&self) -> BackendId {
        BackendId::Plot
    }

    fn build(
        &self,
        name: GradientName,
        points: Vec<ControlPoint>,
    ) -> Result<PlotColormap, GradientError> {
        let gradient = LinearGradient::new(points)?;
        Ok(PlotColormap { name, gradient })
    }
}

static CATALOGUE: Lazy<Arc<InMemoryCatalogue<PlotColormap>>> =
    Lazy::new(|| Arc::new(InMemoryCatalogue::new()));

/// The process-wide plot colormap catalogue
pub fn global_catalogue() -> Arc<dyn Catalogue<PlotColormap>> {
    Arc::clone(&*CATALOGUE) as Arc<dyn Catalogue<PlotColormap>>
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grayscale() -> PlotColormap {
        PlotBackend
            .build(
                GradientName::Lipari,
                vec![
                    ControlPoint::rgb(0.0, 0.0, 0.0),
                    ControlPoint::rgb(1.0, 1.0, 1.0),
                ],
            )
            .unwrap()
    }

    #[test]
    fn test_sample_matches_gradient() {
        let colormap = grayscale();
        assert_eq!(colormap.sample(0.5), [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(colormap.name(), "lipari");
    }

    #[test]
    fn test_color32_rounds_channels() {
        let colormap = grayscale();
        assert_eq!(colormap.color32(0.0), Color32::from_rgba_unmultiplied(0, 0, 0, 255));
        assert_eq!(
            colormap.color32(0.5),
            Color32::from_rgba_unmultiplied(128, 128, 128, 255)
        );
        assert_eq!(
            colormap.color32(1.0),
            Color32::from_rgba_unmultiplied(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_colormaps_format_for_diagnostics() {
        let colormap: Arc<dyn Colormap> = Arc::new(grayscale());
        let repr = format!("{colormap:?}");
        assert!(repr.contains("PlotColormap"));
    }

    #[test]
    fn test_build_rejects_single_point() {
        let err = PlotBackend
            .build(GradientName::Navia, vec![ControlPoint::rgb(1.0, 0.0, 0.0)])
            .unwrap_err();
        assert_eq!(err, GradientError::TooFewPoints { count: 1 });
    }
}
