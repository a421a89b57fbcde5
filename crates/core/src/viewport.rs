//! Host display-surface tracking for viewport-fit mode.
//!
//! The renderer never reads the surface size ambiently: the host reports
//! measurements into a [`Viewport`] (on init and on every resize event),
//! and the renderer consumes whatever [`Viewport::sizing`] hands it. When no
//! measurement is available the scene falls back to its explicit dimensions
//! instead of erroring.

use crate::document::Sizing;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};

/// A reported host-surface measurement in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

/// Last-known surface measurement.
///
/// Starts empty; the host calls [`Viewport::observe`] once at startup and
/// again on each resize notification.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    current: Option<Surface>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fresh measurement from the host.
    ///
    /// Non-positive or non-finite dimensions are treated as "surface
    /// unavailable" and clear the measurement.
    pub fn observe(&mut self, surface: Surface) {
        let usable = surface.width.is_finite()
            && surface.height.is_finite()
            && surface.width > 0.0
            && surface.height > 0.0;
        self.current = usable.then_some(surface);
    }

    /// The most recent usable measurement, if any.
    pub fn current(&self) -> Option<Surface> {
        self.current
    }

    /// The displayed-size mode for a live render of `settings`.
    ///
    /// Viewport-fit mode uses the measured surface; with viewport fit off,
    /// or with no measurement to use, the scene's explicit width/height
    /// apply. No error propagates from this path.
    pub fn sizing(&self, settings: &Settings) -> Sizing {
        if settings.viewport_scale {
            match self.current {
                Some(surface) => Sizing::Surface(surface),
                None => Sizing::Fixed,
            }
        } else {
            Sizing::Fixed
        }
    }
}
