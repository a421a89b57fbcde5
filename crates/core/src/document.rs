//! The shared scene document: one tree, two printers.
//!
//! [`build`] turns settings + circles into an [`Element`] tree with the
//! fixed topology of the scene (filter definitions, conditionally filtered
//! group nesting, per-circle drift animations). Both the live SVG
//! serialization and the exported component source are printed from this
//! one description, so the preview and the artifact cannot drift apart.

use crate::settings::Settings;
use crate::shape::Circle;
use crate::viewport::Surface;

/// Color-matrix values that threshold the blurred alpha into a merged
/// "goo" silhouette.
const GOO_MATRIX: &str = "1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 18 -7";

/// Standard deviation of the goo pre-blur. Fixed; the effect is on/off only.
const GOO_BLUR: f64 = 10.0;

/// How the document's displayed size is chosen.
///
/// The viewBox always uses the logical scene dimensions; sizing only changes
/// the mapping from logical units to displayed pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Displayed size equals the configured width/height.
    Fixed,
    /// Viewport-fit with a live surface measurement.
    Surface(Surface),
    /// Viewport-fit in an exported artifact: "100%" of whatever container
    /// the component lands in.
    Fill,
}

/// One node of the scene document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// The value of an attribute, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// Builds the scene document.
///
/// Topology, outermost first: `svg` (viewBox offset by position, uniform
/// scale transform) > `defs` (goo + layer-blur filters, always defined) >
/// outer `g` (layer-blur reference iff enabled) > inner `g` (goo reference
/// iff enabled) > one `circle` per shape with a drift `animate` per axis.
/// Layer blur wraps the already-gooified composite, not the other way
/// around.
pub fn build(settings: &Settings, circles: &[Circle], sizing: Sizing) -> Element {
    let (width, height) = match sizing {
        Sizing::Fixed => (num(settings.width), num(settings.height)),
        Sizing::Surface(surface) => (num(surface.width), num(surface.height)),
        Sizing::Fill => ("100%".to_string(), "100%".to_string()),
    };

    let defs = Element::new("defs")
        .child(
            Element::new("filter")
                .attr("id", "goo")
                .child(
                    Element::new("feGaussianBlur")
                        .attr("in", "SourceGraphic")
                        .attr("stdDeviation", num(GOO_BLUR))
                        .attr("result", "blur"),
                )
                .child(
                    Element::new("feColorMatrix")
                        .attr("in", "blur")
                        .attr("mode", "matrix")
                        .attr("values", GOO_MATRIX)
                        .attr("result", "goo"),
                ),
        )
        .child(
            Element::new("filter").attr("id", "layerBlur").child(
                Element::new("feGaussianBlur")
                    .attr("in", "SourceGraphic")
                    .attr("stdDeviation", num(settings.layer_blur_amount)),
            ),
        );

    let mut inner = Element::new("g");
    if settings.goo_enabled {
        inner = inner.attr("filter", "url(#goo)");
    }
    for circle in circles {
        inner = inner.child(circle_element(circle, settings));
    }

    let mut outer = Element::new("g");
    if settings.layer_blur_enabled {
        outer = outer.attr("filter", "url(#layerBlur)");
    }

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", width)
        .attr("height", height)
        .attr(
            "viewBox",
            format!(
                "{} {} {} {}",
                num(settings.x_position),
                num(settings.y_position),
                num(settings.width),
                num(settings.height)
            ),
        )
        .attr("style", format!("transform: scale({})", num(settings.scale)))
        .child(defs)
        .child(outer.child(inner))
}

fn circle_element(circle: &Circle, settings: &Settings) -> Element {
    Element::new("circle")
        .attr("cx", num(circle.cx))
        .attr("cy", num(circle.cy))
        .attr("r", num(circle.r))
        .attr("fill", circle.fill.to_hex())
        .child(drift("cx", circle.cx, settings.width, circle.duration))
        .child(drift("cy", circle.cy, settings.height, circle.duration))
}

/// Drift directive for one axis: start, across half the dimension (wrapping
/// at the boundary), and back, repeating forever.
fn drift(axis: &'static str, start: f64, dimension: f64, duration: f64) -> Element {
    let mid = (start + dimension / 2.0) % dimension;
    Element::new("animate")
        .attr("attributeName", axis)
        .attr("values", format!("{};{};{}", num(start), num(mid), num(start)))
        .attr("dur", format!("{}s", num(duration)))
        .attr("repeatCount", "indefinite")
}

/// Shortest-round-trip decimal form of a value (no trailing `.0`).
fn num(value: f64) -> String {
    format!("{value}")
}

/// Serializes a document as standalone SVG text, 2-space indented.
pub fn to_svg(root: &Element) -> String {
    let mut out = String::new();
    write_markup(&mut out, root, 0, Syntax::Svg);
    out
}

/// Attribute syntax for the two printers.
#[derive(Clone, Copy)]
pub(crate) enum Syntax {
    Svg,
    /// JSX for the exported component: identical markup except `style`,
    /// which JSX requires as an object expression.
    Jsx,
}

pub(crate) fn write_markup(out: &mut String, el: &Element, depth: usize, syntax: Syntax) {
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(el.name);
    for (name, value) in &el.attrs {
        out.push(' ');
        match (syntax, *name) {
            (Syntax::Jsx, "style") => {
                // "transform: scale(1.5)" -> style={{ transform: "scale(1.5)" }}
                let (prop, val) = value.split_once(": ").unwrap_or(("transform", value));
                out.push_str(&format!("style={{{{ {prop}: \"{val}\" }}}}"));
            }
            _ => {
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
    }
    if el.children.is_empty() {
        out.push_str(" />\n");
        return;
    }
    out.push_str(">\n");
    for child in &el.children {
        write_markup(out, child, depth + 1, syntax);
    }
    out.push_str(&pad);
    out.push_str("</");
    out.push_str(el.name);
    out.push_str(">\n");
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
