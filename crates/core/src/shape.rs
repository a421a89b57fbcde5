//! Circle generation: settings in, an ordered sequence of shapes out.
//!
//! Shapes are immutable once generated; a qualifying settings change
//! replaces the whole sequence. Randomness comes solely from the injected
//! [`Xorshift64`], so a pinned seed reproduces a layout exactly.

use crate::color::Color;
use crate::prng::Xorshift64;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};

/// One generated circle: position, radius, fill, and drift-cycle duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Color,
    /// Animation cycle duration in seconds.
    pub duration: f64,
}

/// Generates exactly `settings.circle_count` circles.
///
/// Positions are uniform in [0, width) x [0, height), radius and duration
/// uniform in their configured ranges, fill drawn from the palette with
/// replacement. A reversed min/max pair is swapped silently rather than
/// rejected; a malformed preview beats a crash in an exploratory tool.
pub fn generate(settings: &Settings, rng: &mut Xorshift64) -> Vec<Circle> {
    let (r_lo, r_hi) = ordered(settings.min_radius, settings.max_radius);
    let (d_lo, d_hi) = ordered(settings.min_duration, settings.max_duration);
    (0..settings.circle_count)
        .map(|_| Circle {
            cx: rng.next_range(0.0, settings.width),
            cy: rng.next_range(0.0, settings.height),
            r: rng.next_range(r_lo, r_hi),
            fill: settings.colors[rng.next_index(settings.colors.len())],
            duration: rng.next_range(d_lo, d_hi),
        })
        .collect()
}

fn ordered(lo: f64, hi: f64) -> (f64, f64) {
    if lo <= hi {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsUpdate;

    fn seeded() -> Xorshift64 {
        Xorshift64::new(42)
    }

    // -- Count and bounds --

    #[test]
    fn generates_exactly_circle_count_shapes() {
        let settings = Settings::default();
        let circles = generate(&settings, &mut seeded());
        assert_eq!(circles.len(), settings.circle_count);
    }

    #[test]
    fn all_fields_within_the_configured_ranges() {
        let settings = Settings::default();
        for (i, c) in generate(&settings, &mut seeded()).iter().enumerate() {
            assert!((0.0..settings.width).contains(&c.cx), "circle {i}: cx = {}", c.cx);
            assert!((0.0..settings.height).contains(&c.cy), "circle {i}: cy = {}", c.cy);
            assert!(
                c.r >= settings.min_radius && c.r <= settings.max_radius,
                "circle {i}: r = {}",
                c.r
            );
            assert!(
                c.duration >= settings.min_duration && c.duration <= settings.max_duration,
                "circle {i}: duration = {}",
                c.duration
            );
            assert!(
                settings.colors.contains(&c.fill),
                "circle {i}: fill {} not in palette",
                c.fill.to_hex()
            );
        }
    }

    #[test]
    fn degenerate_ranges_pin_radius_duration_and_color() {
        // One circle, zero-width ranges, single color: everything but the
        // position is fully determined. circle_count 1 sits below the UI
        // slider minimum but is a legal direct construction.
        let mut settings: Settings = serde_json::from_str(
            r##"{
                "width": 1000, "height": 1000,
                "minRadius": 10, "maxRadius": 10,
                "minDuration": 5, "maxDuration": 5,
                "colors": ["#ff0000"]
            }"##,
        )
        .unwrap();
        settings.circle_count = 1;
        let circles = generate(&settings, &mut seeded());
        assert_eq!(circles.len(), 1);
        let c = &circles[0];
        assert_eq!(c.r, 10.0);
        assert_eq!(c.duration, 5.0);
        assert_eq!(c.fill.to_hex(), "#ff0000");
        assert!((0.0..1000.0).contains(&c.cx));
        assert!((0.0..1000.0).contains(&c.cy));
    }

    // -- Reversed bounds --

    #[test]
    fn reversed_radius_bounds_swap_instead_of_crashing() {
        let settings = Settings::default()
            .apply(SettingsUpdate::MinRadius(50.0))
            .apply(SettingsUpdate::MaxRadius(10.0));
        for c in generate(&settings, &mut seeded()) {
            assert!(c.r >= 10.0 && c.r <= 50.0, "r = {}", c.r);
        }
    }

    #[test]
    fn reversed_duration_bounds_swap_instead_of_crashing() {
        let settings = Settings::default()
            .apply(SettingsUpdate::MinDuration(40.0))
            .apply(SettingsUpdate::MaxDuration(20.0));
        for c in generate(&settings, &mut seeded()) {
            assert!(c.duration >= 20.0 && c.duration <= 40.0, "duration = {}", c.duration);
        }
    }

    // -- Determinism under injection --

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        let settings = Settings::default();
        let a = generate(&settings, &mut Xorshift64::new(7));
        let b = generate(&settings, &mut Xorshift64::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_produce_different_layouts() {
        let settings = Settings::default();
        let a = generate(&settings, &mut Xorshift64::new(1));
        let b = generate(&settings, &mut Xorshift64::new(2));
        assert_ne!(a, b);
    }

    // -- Serde (the exporter embeds circles literally) --

    #[test]
    fn circle_serializes_with_svg_attribute_names() {
        let c = Circle {
            cx: 12.5,
            cy: 80.0,
            r: 30.0,
            fill: Color::from_hex("#4ecdc4").unwrap(),
            duration: 25.0,
        };
        let v: serde_json::Value = serde_json::to_value(&c).unwrap();
        assert_eq!(v["cx"], 12.5);
        assert_eq!(v["cy"], 80.0);
        assert_eq!(v["r"], 30.0);
        assert_eq!(v["fill"], "#4ecdc4");
        assert_eq!(v["duration"], 25.0);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn count_and_bounds_hold_for_any_seed_and_ranges(
                seed: u64,
                count in 10_usize..=100,
                r_a in 0.0_f64..100.0,
                r_b in 0.0_f64..100.0,
                d_a in 0.1_f64..60.0,
                d_b in 0.1_f64..60.0,
            ) {
                let settings = Settings::default()
                    .apply(SettingsUpdate::CircleCount(count))
                    .apply(SettingsUpdate::MinRadius(r_a))
                    .apply(SettingsUpdate::MaxRadius(r_b))
                    .apply(SettingsUpdate::MinDuration(d_a))
                    .apply(SettingsUpdate::MaxDuration(d_b));
                let circles = generate(&settings, &mut Xorshift64::new(seed));
                prop_assert_eq!(circles.len(), count);
                let (r_lo, r_hi) = if r_a <= r_b { (r_a, r_b) } else { (r_b, r_a) };
                let (d_lo, d_hi) = if d_a <= d_b { (d_a, d_b) } else { (d_b, d_a) };
                for c in &circles {
                    prop_assert!(c.cx >= 0.0 && c.cx < settings.width);
                    prop_assert!(c.cy >= 0.0 && c.cy < settings.height);
                    prop_assert!(c.r >= r_lo && c.r <= r_hi);
                    prop_assert!(c.duration >= d_lo && c.duration <= d_hi);
                    prop_assert!(settings.colors.contains(&c.fill));
                }
            }
        }
    }
}
