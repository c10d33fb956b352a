// main.rs
//
// coilgen command line entry point: parse a coil specification, trace the
// spiral, write the DXF and SVG artifacts, and report trace length and DC
// resistance.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dxf::enums::Units;

use coilgen::float_types::{COPPER_RESISTIVITY, Real};
use coilgen::{CoilSpecification, ShrinkPolicy, estimate_resistance, generate};

#[derive(Parser)]
#[command(name = "coilgen")]
#[command(about = "Planar polygonal spiral inductor generator")]
#[command(version)]
struct Cli {
    /// Outer flat-to-flat diameter of the coil in mm
    #[arg(long, default_value_t = 31.5)]
    outer_diameter: Real,

    /// Width of the copper trace in mm
    #[arg(long, default_value_t = 0.3)]
    trace_width: Real,

    /// Thickness of the copper trace in mm (0.035 ≈ 1 oz copper)
    #[arg(long, default_value_t = 0.035)]
    trace_thickness: Real,

    /// Spacing between coil turns in mm
    #[arg(long, default_value_t = 0.3)]
    spacing: Real,

    /// Number of turns in the coil
    #[arg(long, default_value_t = 7)]
    num_turns: usize,

    /// Number of polygon sides (6 = hexagon, 100 ≈ circle)
    #[arg(long, default_value_t = 6)]
    num_sides: usize,

    /// Turn layout style
    #[arg(long, value_enum, default_value_t = Style::PerTurn)]
    style: Style,

    /// Directory the DXF and SVG files are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    /// Shrink the radius a little before every corner
    PerSide,
    /// Step the radius inward once per completed turn
    PerTurn,
}

impl Style {
    fn policy(self) -> ShrinkPolicy {
        match self {
            Style::PerSide => ShrinkPolicy::PerSide,
            Style::PerTurn => ShrinkPolicy::PerTurn,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Style::PerSide => "per-side",
            Style::PerTurn => "per-turn",
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let spec = CoilSpecification {
        outer_diameter: cli.outer_diameter,
        trace_width: cli.trace_width,
        trace_thickness: cli.trace_thickness,
        spacing: cli.spacing,
        num_turns: cli.num_turns,
        num_sides: cli.num_sides,
        policy: cli.style.policy(),
    };

    let coil = generate(&spec)?;
    let resistance =
        estimate_resistance(&coil, spec.trace_width, spec.trace_thickness, COPPER_RESISTIVITY)?;

    let stem = format!(
        "coil_OD{}_TW{}_SP{}_NT{}_NS{}_{}",
        spec.outer_diameter,
        spec.trace_width,
        spec.spacing,
        spec.num_turns,
        spec.num_sides,
        cli.style.label(),
    );
    fs::create_dir_all(&cli.output)?;

    let dxf_path = cli.output.join(format!("{stem}.dxf"));
    fs::write(&dxf_path, coil.to_dxf(Units::Millimeters)?)?;
    println!("DXF saved as: {}", dxf_path.display());

    let svg_path = cli.output.join(format!("{stem}.svg"));
    svg::save(&svg_path, &coil.to_svg()?)?;
    println!("SVG saved as: {}", svg_path.display());

    println!("Total trace length: {:.3} mm", coil.total_length());
    println!("Total coil resistance: {:.6} Ohms", resistance);
    Ok(())
}
