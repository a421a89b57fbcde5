#![deny(unsafe_code)]
//! CLI binary for the blobfield animated-background generator.
//!
//! Subcommands:
//! - `render` — generate a scene, write the SVG document to a file
//! - `export` — generate a scene, emit the self-contained React component
//! - `defaults` — print the default settings record

mod error;

use blobfield_core::{
    react_component, Color, Scene, Settings, SettingsUpdate, Surface, Viewport, Xorshift64,
};
use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "blobfield", about = "Animated SVG background generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by the scene-producing subcommands.
///
/// `--settings` carries a partial record merged over the defaults; the
/// individual flags override it and go through the same clamping boundary
/// as interactive edits.
#[derive(Args)]
struct SceneArgs {
    /// Logical scene width.
    #[arg(short = 'W', long)]
    width: Option<f64>,

    /// Logical scene height.
    #[arg(short = 'H', long)]
    height: Option<f64>,

    /// Number of circles (clamped to 10..=100).
    #[arg(short = 'n', long)]
    circles: Option<usize>,

    /// Comma-separated hex palette, e.g. "#ff6b6b,#4ecdc4" (1-8 colors).
    #[arg(short, long)]
    colors: Option<String>,

    /// PRNG seed for a reproducible layout.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Partial settings record as a JSON string, merged over the defaults.
    #[arg(long, default_value = "{}")]
    settings: String,

    /// Host surface measurement as WIDTHxHEIGHT (e.g. 800x600) for
    /// viewport-fit mode; without it the configured dimensions apply.
    #[arg(long)]
    surface: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a scene and write the animated SVG document.
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output file path.
        #[arg(short, long, default_value = "animated_background.svg")]
        output: PathBuf,
    },
    /// Generate a scene and emit the self-contained component source.
    Export {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the default settings record.
    Defaults,
}

/// Parses a comma-separated hex color list.
fn parse_colors(list: &str) -> Result<Vec<Color>, CliError> {
    list.split(',')
        .map(|entry| Color::from_hex(entry.trim()).map_err(CliError::from))
        .collect()
}

/// Parses a WIDTHxHEIGHT surface spec like "800x600".
fn parse_surface(spec: &str) -> Result<Surface, CliError> {
    let invalid = || CliError::Input(format!("invalid --surface '{spec}': expected WIDTHxHEIGHT"));
    let (w, h) = spec.split_once('x').ok_or_else(invalid)?;
    let width: f64 = w.trim().parse().map_err(|_| invalid())?;
    let height: f64 = h.trim().parse().map_err(|_| invalid())?;
    if width <= 0.0 || height <= 0.0 {
        return Err(invalid());
    }
    Ok(Surface { width, height })
}

/// Builds the scene and viewport described by the shared flags.
fn build_scene(args: &SceneArgs) -> Result<(Scene, Viewport), CliError> {
    let mut settings: Settings = serde_json::from_str(&args.settings)
        .map_err(|e| CliError::Input(format!("invalid --settings JSON: {e}")))?;

    if let Some(w) = args.width {
        settings = settings.apply(SettingsUpdate::Width(w));
    }
    if let Some(h) = args.height {
        settings = settings.apply(SettingsUpdate::Height(h));
    }
    if let Some(n) = args.circles {
        settings = settings.apply(SettingsUpdate::CircleCount(n));
    }
    if let Some(list) = &args.colors {
        settings.colors = parse_colors(list)?;
    }
    settings.validate()?;

    let mut viewport = Viewport::new();
    if let Some(spec) = &args.surface {
        viewport.observe(parse_surface(spec)?);
    }

    let scene = Scene::generate(settings, &mut Xorshift64::new(args.seed));
    Ok((scene, viewport))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Defaults => {
            let defaults = Settings::default();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&defaults)?);
            } else {
                println!("Default settings:");
                let record = serde_json::to_value(&defaults)?;
                if let serde_json::Value::Object(fields) = record {
                    for (key, value) in fields {
                        println!("  {key}: {value}");
                    }
                }
            }
        }
        Command::Render { scene, output } => {
            let (scene_state, viewport) = build_scene(&scene)?;
            let svg = scene_state.to_svg(viewport.sizing(&scene_state.settings));
            std::fs::write(&output, &svg)
                .map_err(|e| CliError::Io(format!("writing {}: {e}", output.display())))?;

            if cli.json {
                let info = serde_json::json!({
                    "circles": scene_state.circles.len(),
                    "width": scene_state.settings.width,
                    "height": scene_state.settings.height,
                    "seed": scene.seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} circles ({}x{}, seed {}) -> {}",
                    scene_state.circles.len(),
                    scene_state.settings.width,
                    scene_state.settings.height,
                    scene.seed,
                    output.display()
                );
            }
        }
        Command::Export { scene, output } => {
            let (scene_state, _viewport) = build_scene(&scene)?;
            let source = react_component(&scene_state);
            match output {
                Some(path) => {
                    std::fs::write(&path, &source)
                        .map_err(|e| CliError::Io(format!("writing {}: {e}", path.display())))?;
                    if cli.json {
                        let info = serde_json::json!({
                            "circles": scene_state.circles.len(),
                            "seed": scene.seed,
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!(
                            "exported component with {} circles (seed {}) -> {}",
                            scene_state.circles.len(),
                            scene.seed,
                            path.display()
                        );
                    }
                }
                // Stdout mode: the source itself is the output.
                None => print!("{source}"),
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_colors --

    #[test]
    fn parse_colors_accepts_a_comma_list() {
        let colors = parse_colors("#ff6b6b,#4ecdc4, #45b7d1").unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[2].to_hex(), "#45b7d1");
    }

    #[test]
    fn parse_colors_rejects_invalid_entries() {
        let result = parse_colors("#ff6b6b,notacolor");
        assert!(matches!(result, Err(CliError::Scene(_))));
    }

    // -- parse_surface --

    #[test]
    fn parse_surface_accepts_width_x_height() {
        let surface = parse_surface("800x600").unwrap();
        assert_eq!(surface.width, 800.0);
        assert_eq!(surface.height, 600.0);
    }

    #[test]
    fn parse_surface_rejects_malformed_specs() {
        for spec in ["800", "800x", "x600", "800xsix", "0x600", "-800x600"] {
            assert!(parse_surface(spec).is_err(), "{spec} should be rejected");
        }
    }

    // -- build_scene --

    #[test]
    fn build_scene_merges_flags_over_settings_json() {
        let args = SceneArgs {
            width: Some(500.0),
            height: None,
            circles: Some(12),
            colors: Some("#123456".into()),
            seed: 42,
            settings: r#"{"height": 700, "gooEnabled": false}"#.into(),
            surface: None,
        };
        let (scene, _) = build_scene(&args).unwrap();
        assert_eq!(scene.settings.width, 500.0);
        assert_eq!(scene.settings.height, 700.0);
        assert_eq!(scene.settings.circle_count, 12);
        assert!(!scene.settings.goo_enabled);
        assert_eq!(scene.circles.len(), 12);
        assert_eq!(scene.settings.colors.len(), 1);
    }

    #[test]
    fn build_scene_is_reproducible_for_a_seed() {
        let args = SceneArgs {
            width: None,
            height: None,
            circles: None,
            colors: None,
            seed: 7,
            settings: "{}".into(),
            surface: None,
        };
        let (a, _) = build_scene(&args).unwrap();
        let (b, _) = build_scene(&args).unwrap();
        assert_eq!(a.circles, b.circles);
    }

    #[test]
    fn build_scene_rejects_bad_settings_json() {
        let args = SceneArgs {
            width: None,
            height: None,
            circles: None,
            colors: None,
            seed: 42,
            settings: "{not json".into(),
            surface: None,
        };
        assert!(matches!(build_scene(&args), Err(CliError::Input(_))));
    }

    #[test]
    fn build_scene_rejects_oversized_palette() {
        let args = SceneArgs {
            width: None,
            height: None,
            circles: None,
            colors: Some(
                "#000001,#000002,#000003,#000004,#000005,#000006,#000007,#000008,#000009".into(),
            ),
            seed: 42,
            settings: "{}".into(),
            surface: None,
        };
        assert!(matches!(build_scene(&args), Err(CliError::Scene(_))));
    }
}
