//! Plot configuration shared across visualization functions

use plotters::prelude::*;

use crate::classification::Band;

/// Fill colors of the three bands
///
/// Defaults follow the usual traffic-light reading: green for the low band
/// (fast, low power), yellow for the middle band, red for the high band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPalette {
    /// Fill of [`Band::Low`]
    pub low: RGBColor,
    /// Fill of [`Band::Medium`]
    pub medium: RGBColor,
    /// Fill of [`Band::High`]
    pub high: RGBColor,
}

impl Default for BandPalette {
    fn default() -> Self {
        Self {
            low: RGBColor(46, 160, 67),
            medium: RGBColor(240, 200, 40),
            high: RGBColor(210, 50, 45),
        }
    }
}

impl BandPalette {
    /// Grayscale palette, light to dark
    pub fn grayscale() -> Self {
        Self {
            low: RGBColor(220, 220, 220),
            medium: RGBColor(140, 140, 140),
            high: RGBColor(50, 50, 50),
        }
    }

    /// Fill color of `band`
    pub fn color(&self, band: Band) -> RGBColor {
        match band {
            Band::Low => self.low,
            Band::Medium => self.medium,
            Band::High => self.high,
        }
    }
}

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust
/// use hocl_rs::output::visualization::{BandPalette, PlotConfig};
///
/// let mut config = PlotConfig::heatmap("Generation time");
/// config.palette = BandPalette::grayscale();
/// config.width = 1920;
/// config.height = 1080;
/// assert_eq!(config.xlabel, "Resistance (Ω)");
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (empty: derived from the volume unit)
    pub ylabel: String,

    /// Band fill colors
    pub palette: BandPalette,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Show the band legend (default: true)
    pub show_legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            palette: BandPalette::default(),
            background: WHITE,
            show_grid: true,
            show_legend: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for volume × resistance heatmaps with optional custom title
    ///
    /// Sets xlabel to "Resistance (Ω)" and title to custom value or
    /// "HOCl Generation Map"
    ///
    /// ```rust
    /// use hocl_rs::output::visualization::{PlotConfig, NO_TITLE};
    ///
    /// assert_eq!(PlotConfig::heatmap(NO_TITLE).title, "HOCl Generation Map");
    /// assert_eq!(PlotConfig::heatmap(format!("{} ppm", 100)).title, "100 ppm");
    /// ```
    pub fn heatmap(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Resistance (Ω)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "HOCl Generation Map".to_string());
        config
    }

    /// Builder pattern: set palette
    pub fn palette(mut self, palette: BandPalette) -> Self {
        self.palette = palette;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
