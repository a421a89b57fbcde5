//! A scene snapshot: the configuration plus the circles generated from it.
//!
//! Snapshots are replaced wholesale, never mutated. [`Scene::apply`] is the
//! single place that decides whether an update re-draws the circles, so the
//! regeneration dependency set lives in exactly one spot.

use crate::document::{self, Element, Sizing};
use crate::prng::Xorshift64;
use crate::settings::{Settings, SettingsUpdate};
use crate::shape::{self, Circle};
use serde::{Deserialize, Serialize};

/// Configuration and generated shapes at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub settings: Settings,
    pub circles: Vec<Circle>,
}

impl Scene {
    /// Generates a fresh scene from `settings`.
    pub fn generate(settings: Settings, rng: &mut Xorshift64) -> Scene {
        let circles = shape::generate(&settings, rng);
        Scene { settings, circles }
    }

    /// Applies a single-field update, returning the next snapshot.
    ///
    /// Circles are re-drawn only when the update is in the regeneration
    /// dependency set *and* actually changed the settings; an update that
    /// leaves the record value-equal (same value again, clamped no-op,
    /// color-op no-op) keeps the current sequence.
    pub fn apply(&self, update: SettingsUpdate, rng: &mut Xorshift64) -> Scene {
        let regenerates = update.regenerates();
        let settings = self.settings.apply(update);
        let circles = if regenerates && settings != self.settings {
            shape::generate(&settings, rng)
        } else {
            self.circles.clone()
        };
        Scene { settings, circles }
    }

    /// Builds the scene document for the given displayed-size mode.
    pub fn document(&self, sizing: Sizing) -> Element {
        document::build(&self.settings, &self.circles, sizing)
    }

    /// Serializes the scene as standalone SVG text.
    pub fn to_svg(&self, sizing: Sizing) -> String {
        document::to_svg(&self.document(sizing))
    }
}
