#![deny(unsafe_code)]
//! Core scene model for the blobfield animated-background generator.
//!
//! Provides the [`Settings`] configuration record and its typed update
//! surface, the circle generator with injected [`Xorshift64`] randomness,
//! the shared scene [`document`] tree with SVG serialization, the
//! [`export`] pipeline emitting a self-contained component, and the
//! [`Viewport`] adapter for viewport-fit mode.

pub mod color;
pub mod document;
pub mod error;
pub mod export;
pub mod prng;
pub mod scene;
pub mod settings;
pub mod shape;
pub mod viewport;

pub use color::Color;
pub use document::{to_svg, Element, Sizing};
pub use error::SceneError;
pub use export::react_component;
pub use prng::Xorshift64;
pub use scene::Scene;
pub use settings::{Settings, SettingsUpdate};
pub use shape::{generate, Circle};
pub use viewport::{Surface, Viewport};
