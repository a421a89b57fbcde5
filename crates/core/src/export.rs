//! Artifact export: a self-contained component module reproducing the scene.
//!
//! The emitted source embeds the settings and circle records as literal data
//! and prints its markup from the same document tree the live renderer uses,
//! so the artifact matches the preview at the moment of export — including
//! the random draw — and never re-randomizes at load time.

use crate::document::{write_markup, Sizing, Syntax};
use crate::scene::Scene;

/// Emits a dependency-free React component for `scene`.
///
/// With viewport fit on the component fills its container ("100%"); off, it
/// uses the literal configured dimensions. An empty circle sequence exports
/// cleanly to a component with an empty shape set.
pub fn react_component(scene: &Scene) -> String {
    let sizing = if scene.settings.viewport_scale {
        Sizing::Fill
    } else {
        Sizing::Fixed
    };

    let settings_json = serde_json::to_string_pretty(&scene.settings)
        .expect("settings record serializes")
        .replace('\n', "\n  ");
    let circles_json = serde_json::to_string_pretty(&scene.circles)
        .expect("circle records serialize")
        .replace('\n', "\n  ");

    let mut markup = String::new();
    write_markup(&mut markup, &scene.document(sizing), 2, Syntax::Jsx);

    format!(
        "import React from 'react';\n\
         \n\
         const AnimatedBackground = () => {{\n  \
             const settings = {settings_json};\n\
         \n  \
             const circles = {circles_json};\n\
         \n  \
             return (\n\
         {markup}  \
             );\n\
         }};\n\
         \n\
         export default AnimatedBackground;\n"
    )
}
