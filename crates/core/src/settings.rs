//! The scene configuration record and its update surface.
//!
//! [`Settings`] is always fully populated: every field has a default forming
//! a valid initial state, and [`Settings::apply`] produces a new snapshot
//! with exactly one field replaced. Out-of-range values are clamped here, at
//! the boundary, so the generator and document builder never see them.
//! Color-list operations that would violate the 1..=8 bound are silent
//! no-ops, never errors.

use crate::color::Color;
use crate::error::SceneError;
use serde::{Deserialize, Serialize};

/// Slider bounds for the circle count.
pub const MIN_CIRCLES: usize = 10;
pub const MAX_CIRCLES: usize = 100;

/// Maximum number of palette entries.
pub const MAX_COLORS: usize = 8;

/// Layer blur standard deviation bounds.
pub const MIN_LAYER_BLUR: f64 = 1.0;
pub const MAX_LAYER_BLUR: f64 = 50.0;

/// Uniform scale transform bounds.
pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 2.0;

/// Color appended by [`SettingsUpdate::AddColor`].
const NEW_COLOR: Color = Color { r: 0, g: 0, b: 0 };

/// Tunable parameters of the animated scene.
///
/// Serializes in camelCase with hex color strings, matching the record an
/// exported artifact embeds verbatim. Missing fields in an external JSON
/// record fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Logical scene width.
    pub width: f64,
    /// Logical scene height.
    pub height: f64,
    /// Number of circles to generate (10..=100).
    pub circle_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Animation duration bounds in seconds.
    pub min_duration: f64,
    pub max_duration: f64,
    /// Palette, 1..=8 entries; insertion order is display order.
    pub colors: Vec<Color>,
    /// Toggles the blur + color-matrix merge filter.
    pub goo_enabled: bool,
    /// Toggles a blur over the whole composited layer.
    pub layer_blur_enabled: bool,
    /// Layer blur standard deviation (1..=50), meaningful only when enabled.
    pub layer_blur_amount: f64,
    /// Uniform visual scale transform (0.1..=2.0).
    pub scale: f64,
    /// When true the rendered document fills the host viewport.
    pub viewport_scale: bool,
    /// Offset of the visible window into the logical coordinate space.
    pub x_position: f64,
    pub y_position: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            circle_count: 50,
            min_radius: 10.0,
            max_radius: 50.0,
            min_duration: 20.0,
            max_duration: 40.0,
            colors: default_palette(),
            goo_enabled: true,
            layer_blur_enabled: false,
            layer_blur_amount: 20.0,
            scale: 1.0,
            viewport_scale: true,
            x_position: 0.0,
            y_position: 0.0,
        }
    }
}

fn default_palette() -> Vec<Color> {
    ["#ff6b6b", "#4ecdc4", "#45b7d1", "#f7d794"]
        .iter()
        .map(|hex| Color::from_hex(hex).expect("default palette hex values are valid"))
        .collect()
}

impl Settings {
    /// Returns a new snapshot with the single field named by `update`
    /// replaced, all others untouched.
    ///
    /// Numeric values are clamped to their documented ranges. Color-list
    /// operations outside the 1..=8 bound (or with an out-of-range index)
    /// leave the snapshot value-equal to `self`. The min/max pairs are
    /// deliberately not cross-validated; the generator swaps reversed
    /// bounds silently.
    pub fn apply(&self, update: SettingsUpdate) -> Settings {
        let mut next = self.clone();
        match update {
            SettingsUpdate::Width(w) => next.width = w.max(1.0),
            SettingsUpdate::Height(h) => next.height = h.max(1.0),
            SettingsUpdate::CircleCount(n) => {
                next.circle_count = n.clamp(MIN_CIRCLES, MAX_CIRCLES)
            }
            SettingsUpdate::MinRadius(v) => next.min_radius = v.max(0.0),
            SettingsUpdate::MaxRadius(v) => next.max_radius = v.max(0.0),
            SettingsUpdate::MinDuration(v) => next.min_duration = v.max(0.0),
            SettingsUpdate::MaxDuration(v) => next.max_duration = v.max(0.0),
            SettingsUpdate::AddColor => {
                if next.colors.len() < MAX_COLORS {
                    next.colors.push(NEW_COLOR);
                }
            }
            SettingsUpdate::RemoveColor(index) => {
                if next.colors.len() > 1 && index < next.colors.len() {
                    next.colors.remove(index);
                }
            }
            SettingsUpdate::SetColor(index, color) => {
                if let Some(slot) = next.colors.get_mut(index) {
                    *slot = color;
                }
            }
            SettingsUpdate::GooEnabled(on) => next.goo_enabled = on,
            SettingsUpdate::LayerBlurEnabled(on) => next.layer_blur_enabled = on,
            SettingsUpdate::LayerBlurAmount(v) => {
                next.layer_blur_amount = v.clamp(MIN_LAYER_BLUR, MAX_LAYER_BLUR)
            }
            SettingsUpdate::Scale(v) => next.scale = v.clamp(MIN_SCALE, MAX_SCALE),
            SettingsUpdate::ViewportScale(on) => next.viewport_scale = on,
            SettingsUpdate::XPosition(v) => next.x_position = v,
            SettingsUpdate::YPosition(v) => next.y_position = v,
        }
        next
    }

    /// Validates an externally supplied record (e.g. `--settings` JSON).
    ///
    /// Snapshots built through [`Settings::apply`] never fail this; only
    /// records deserialized from outside can carry non-positive dimensions
    /// or an out-of-bound color list.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(SceneError::InvalidDimensions);
        }
        if self.colors.is_empty() {
            return Err(SceneError::InvalidPalette("color list is empty".into()));
        }
        if self.colors.len() > MAX_COLORS {
            return Err(SceneError::InvalidPalette(format!(
                "{} colors exceeds the maximum of {MAX_COLORS}",
                self.colors.len()
            )));
        }
        Ok(())
    }
}

/// A single-field update to [`Settings`].
///
/// [`SettingsUpdate::regenerates`] partitions the variants into those that
/// invalidate the generated circles and those that only change how the
/// scene is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsUpdate {
    Width(f64),
    Height(f64),
    CircleCount(usize),
    MinRadius(f64),
    MaxRadius(f64),
    MinDuration(f64),
    MaxDuration(f64),
    /// Append a default (black) color; no-op at the 8-color cap.
    AddColor,
    /// Remove the color at an index; no-op if it would empty the list.
    RemoveColor(usize),
    /// Replace the color at an index; no-op out of range.
    SetColor(usize, Color),
    GooEnabled(bool),
    LayerBlurEnabled(bool),
    LayerBlurAmount(f64),
    Scale(f64),
    ViewportScale(bool),
    XPosition(f64),
    YPosition(f64),
}

impl SettingsUpdate {
    /// Whether this update invalidates the generated circle sequence.
    ///
    /// Shape-affecting fields and every color-list operation regenerate;
    /// filters, scale, viewport fit, and position only re-render.
    pub fn regenerates(&self) -> bool {
        matches!(
            self,
            SettingsUpdate::Width(_)
                | SettingsUpdate::Height(_)
                | SettingsUpdate::CircleCount(_)
                | SettingsUpdate::MinRadius(_)
                | SettingsUpdate::MaxRadius(_)
                | SettingsUpdate::MinDuration(_)
                | SettingsUpdate::MaxDuration(_)
                | SettingsUpdate::AddColor
                | SettingsUpdate::RemoveColor(_)
                | SettingsUpdate::SetColor(_, _)
        )
    }
}
