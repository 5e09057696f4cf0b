#![deny(unsafe_code)]
//! CLI binary for the color wheel widget.
//!
//! Subcommands:
//! - `render` — paint the hue/saturation wheel, write PNG
//! - `convert <value>` — convert a color to all representations
//! - `pick <x> <y>` — map a pointer coordinate on the wheel to a color

mod error;

use clap::{Parser, Subcommand};
use color_wheel_core::{ColorFormat, Rgb};
use color_wheel_widget::{draw_wheel, MemorySlots, Raster, Synchronizer, WheelPicker};
use error::CliError;
use glam::DVec2;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "color-wheel", about = "Color wheel renderer and converter CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paint the color wheel and write it as a PNG image.
    Render {
        /// Surface width and height in pixels.
        #[arg(short, long, default_value_t = 220)]
        size: usize,

        /// Output file path.
        #[arg(short, long, default_value = "wheel.png")]
        output: PathBuf,
    },
    /// Convert a color given in one format to every representation.
    Convert {
        /// The color text, e.g. "#FF8800" or "120, 100%, 50%".
        value: String,

        /// Input format (hex, rgb, hsl, hsv).
        #[arg(short, long, default_value = "hex")]
        from: String,
    },
    /// Map a pointer coordinate on a rendered wheel to its color.
    Pick {
        /// X coordinate in surface pixels.
        x: f64,

        /// Y coordinate in surface pixels.
        y: f64,

        /// Surface width and height in pixels.
        #[arg(short, long, default_value_t = 220)]
        size: usize,
    },
}

/// All display representations of one color, via the synchronizer.
fn representations(rgb: Rgb) -> MemorySlots {
    let mut sync = Synchronizer::new(MemorySlots::default());
    sync.set_color(rgb);
    sync.into_slots()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render { size, output } => {
            let mut raster = Raster::new(size, size)?;
            let geometry = draw_wheel(&mut raster)?;
            color_wheel_widget::snapshot::write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "size": size,
                    "radius": geometry.radius(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered wheel ({size}x{size}, radius {}) -> {}",
                    geometry.radius(),
                    output.display()
                );
            }
        }
        Command::Convert { value, from } => {
            let format: ColorFormat = from
                .parse()
                .map_err(|e: color_wheel_core::WheelError| CliError::Input(e.to_string()))?;

            let mut sync = Synchronizer::new(MemorySlots::default());
            let rgb = sync
                .set_from_text(format, &value)
                .ok_or_else(|| CliError::Input(format!("cannot parse {value:?} as {format}")))?;
            let slots = sync.into_slots();

            if cli.json {
                let info = serde_json::json!({
                    "rgb": { "r": rgb.r, "g": rgb.g, "b": rgb.b },
                    "hex": slots.hex,
                    "hsl": slots.hsl,
                    "hsv": slots.hsv,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("hex  {}", slots.hex.unwrap_or_default());
                println!("rgb  {}, {}, {}", rgb.r, rgb.g, rgb.b);
                println!("hsl  {}", slots.hsl.unwrap_or_default());
                println!("hsv  {}", slots.hsv.unwrap_or_default());
            }
        }
        Command::Pick { x, y, size } => {
            let mut raster = Raster::new(size, size)?;
            let geometry = draw_wheel(&mut raster)?;
            let mut picker = WheelPicker::new(geometry);

            match picker.pick(DVec2::new(x, y)) {
                Some(rgb) => {
                    let slots = representations(rgb);
                    if cli.json {
                        let info = serde_json::json!({
                            "hit": true,
                            "rgb": { "r": rgb.r, "g": rgb.g, "b": rgb.b },
                            "hex": slots.hex,
                            "hsl": slots.hsl,
                            "hsv": slots.hsv,
                            "marker": { "x": x, "y": y },
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        println!(
                            "picked {} ({}, {}, {}) at ({x}, {y})",
                            rgb.to_hex(),
                            rgb.r,
                            rgb.g,
                            rgb.b
                        );
                    }
                }
                None => {
                    // Off-wheel clicks are a no-op, not an error.
                    if cli.json {
                        let info = serde_json::json!({ "hit": false });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!("({x}, {y}) is outside the wheel");
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
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
