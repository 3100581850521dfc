//! # Boltcalc CLI Application
//!
//! Terminal front end for the bolt resistance engine. Builds one
//! [`BoltConnectionInput`] from arguments (or a JSON file), runs the
//! calculation and prints the result table.
//!
//! Omitted geometry falls back to the rounded-up minimum distances for the
//! chosen bolt, the same defaults the form offers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bolt_core::calculations::{calculate, BoltConnectionInput, BoltResistanceResult};
use bolt_core::equations::bolt::EffectiveArea;
use bolt_core::equations::en_ref;
use bolt_core::geometry::SpacingLimits;
use bolt_core::materials::{bolt_catalog, BoltGrade, BoltSize, SteelGrade};
use bolt_core::settings::DesignSettings;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "bolt_cli")]
#[command(about = "Bolt resistance calculator EN 1993-1-8")]
struct Cli {
    /// JSON file with default design settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate shear, bearing and tension resistance of one bolt
    Calc(CalcArgs),
    /// Show minimum and recommended distances for a bolt size
    Limits(LimitsArgs),
    /// List supported bolt sizes, bolt grades and steel grades
    Catalog,
}

#[derive(Args, Default)]
struct CalcArgs {
    /// Full input document (JSON); other calc arguments are ignored
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    label: Option<String>,
    /// Bolt size, e.g. 16 or M16
    #[arg(long)]
    bolt: Option<BoltSize>,
    /// Bolt strength class, e.g. 8.8
    #[arg(long)]
    grade: Option<BoltGrade>,
    /// Plate steel grade, e.g. S235
    #[arg(long)]
    steel: Option<SteelGrade>,
    /// Partial factor γM2
    #[arg(long)]
    gamma: Option<f64>,
    /// End distance parallel to force (mm)
    #[arg(long)]
    e1: Option<f64>,
    /// Edge distance perpendicular to force (mm)
    #[arg(long)]
    e2: Option<f64>,
    /// Pitch parallel to force (mm)
    #[arg(long)]
    p1: Option<f64>,
    /// Spacing perpendicular to force (mm)
    #[arg(long)]
    p2: Option<f64>,
    /// Plate thickness (mm)
    #[arg(long)]
    thickness: Option<f64>,
    /// Number of shear planes
    #[arg(long)]
    planes: Option<u32>,
    /// Where the shear plane passes: thread or shank
    #[arg(long, value_parser = parse_shear_plane)]
    shear_plane: Option<EffectiveArea>,
    /// Also print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LimitsArgs {
    /// Bolt size, e.g. 16 or M16
    #[arg(long)]
    bolt: BoltSize,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Some(Command::Calc(args)) => run_calc(args, &settings),
        Some(Command::Limits(args)) => {
            print_limits(args.bolt);
            Ok(())
        }
        Some(Command::Catalog) => {
            print_catalog();
            Ok(())
        }
        None => run_calc(CalcArgs::default(), &settings),
    }
}

fn load_settings(path: Option<&Path>) -> Result<DesignSettings> {
    let Some(path) = path else {
        return Ok(DesignSettings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings '{}'", path.display()))?;
    let settings = DesignSettings::from_json(&json)
        .with_context(|| format!("invalid settings '{}'", path.display()))?;
    info!(path = %path.display(), "settings loaded");
    Ok(settings)
}

fn build_input(args: &CalcArgs, settings: &DesignSettings) -> Result<BoltConnectionInput> {
    if let Some(path) = &args.input {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read input '{}'", path.display()))?;
        let input = BoltConnectionInput::from_json(&json)
            .with_context(|| format!("invalid input '{}'", path.display()))?;
        info!(path = %path.display(), "input loaded");
        return Ok(input);
    }

    let mut settings = settings.clone();
    if let Some(bolt) = args.bolt {
        settings.bolt_size = bolt;
    }
    if let Some(grade) = args.grade {
        settings.bolt_grade = grade;
    }
    if let Some(steel) = args.steel {
        settings.steel_grade = steel;
    }
    if let Some(gamma) = args.gamma {
        settings.gamma_m2 = gamma;
    }
    if let Some(thickness) = args.thickness {
        settings.plate_thickness_mm = thickness;
    }
    if let Some(planes) = args.planes {
        settings.shear_planes = planes;
    }
    if let Some(area) = args.shear_plane {
        settings.shear_plane_in_thread = area == EffectiveArea::Stress;
    }

    let label = args.label.clone().unwrap_or_else(|| "CLI".to_string());
    let mut input = BoltConnectionInput::from_settings(label, &settings);
    input.e1_mm = args.e1.unwrap_or(input.e1_mm);
    input.e2_mm = args.e2.unwrap_or(input.e2_mm);
    input.p1_mm = args.p1.unwrap_or(input.p1_mm);
    input.p2_mm = args.p2.unwrap_or(input.p2_mm);
    Ok(input)
}

fn run_calc(args: CalcArgs, settings: &DesignSettings) -> Result<()> {
    let input = build_input(&args, settings)?;
    debug!(?input, "running calculation");

    let result = match calculate(&input) {
        Ok(result) => result,
        Err(e) => {
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return Err(e).context("calculation failed");
        }
    };

    print_result(&input, &result);

    if args.json {
        println!();
        println!("JSON Output:");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn print_result(input: &BoltConnectionInput, result: &BoltResistanceResult) {
    let props = &result.properties;
    println!("═══════════════════════════════════════════════════════════");
    println!("  BOLT RESISTANCES - {}", en_ref::RESISTANCES);
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Material:");
    println!(
        "  Bolt:      {} {}  (d0 = {:.0} mm)",
        props.size, props.grade, props.hole_diameter_mm
    );
    println!(
        "  Areas:     A = {} mm², As = {} mm²",
        props.gross_area_mm2, props.stress_area_mm2
    );
    println!(
        "  Strength:  fub = {:.0} MPa, fu = {:.0} MPa ({})",
        props.fub_mpa, result.fu_mpa, input.steel_grade
    );
    println!("  γM2:       {}  ({})", input.gamma_m2, en_ref::PARTIAL_FACTORS);
    println!();
    println!("Geometry:");
    println!("  e1 = {:.1} mm  (min {:.1})", input.e1_mm, result.spacing.min_e1_mm);
    println!("  e2 = {:.1} mm  (min {:.1})", input.e2_mm, result.spacing.min_e2_mm);
    println!("  p1 = {:.1} mm  (min {:.1})", input.p1_mm, result.spacing.min_p1_mm);
    println!("  p2 = {:.1} mm  (min {:.1})", input.p2_mm, result.spacing.min_p2_mm);
    println!(
        "  t  = {:.1} mm, n = {}, shear plane: {}",
        input.plate_thickness_mm,
        input.shear_planes,
        input.effective_area().display_name()
    );
    println!();
    println!("Bolt resistances [kN]:");
    for (label, kn) in result.rows() {
        println!("  {:<52} {:>9.2}", label.to_string(), kn);
    }
    println!();
    let (governing, kn) = result.governing_bearing();
    println!("  Governing bearing: {} = {:.2} kN", governing.code(), kn);
    println!("═══════════════════════════════════════════════════════════");
}

fn print_limits(size: BoltSize) {
    let limits = SpacingLimits::for_size(size);
    let minimums = limits.input_minimums();
    println!(
        "{} - hole diameter d0 = {:.0} mm ({})",
        size,
        limits.hole_diameter_mm,
        en_ref::HOLE_POSITIONING
    );
    println!();
    println!("  {:<4} {:>10} {:>12} {:>13}", "", "min", "input min", "recommended");
    let rows = [
        ("e1", limits.min_e1_mm, minimums.e1_mm, limits.recommended_e1_mm),
        ("e2", limits.min_e2_mm, minimums.e2_mm, limits.recommended_e2_mm),
        ("p1", limits.min_p1_mm, minimums.p1_mm, limits.recommended_p1_mm),
        ("p2", limits.min_p2_mm, minimums.p2_mm, limits.recommended_p2_mm),
    ];
    for (name, min, input_min, recommended) in rows {
        println!("  {:<4} {:>10.1} {:>12.0} {:>13.1}", name, min, input_min, recommended);
    }
}

fn print_catalog() {
    println!("Bolt sizes ({}):", en_ref::BOLT_GRADES);
    println!("  {:<5} {:>8} {:>10} {:>10}", "size", "d0 [mm]", "A [mm²]", "As [mm²]");
    for entry in bolt_catalog().values() {
        let d0 = bolt_core::hole_diameter_mm(entry.size.diameter_mm());
        println!(
            "  {:<5} {:>8.0} {:>10} {:>10}",
            entry.size.to_string(),
            d0,
            entry.gross_area_mm2,
            entry.stress_area_mm2
        );
    }
    println!();
    println!("Bolt grades:");
    for grade in BoltGrade::ALL {
        println!(
            "  {:<5} fub = {:>4.0} MPa, fyb = {:>4.0} MPa",
            grade.label(),
            grade.fub_mpa(),
            grade.fyb_mpa()
        );
    }
    println!();
    println!("Steel grades:");
    for steel in SteelGrade::ALL {
        println!(
            "  {:<5} fu = {:>4.0} MPa, fy = {:>4.0} MPa",
            steel.label(),
            steel.fu_mpa(),
            steel.fy_mpa()
        );
    }
}

fn parse_shear_plane(s: &str) -> Result<EffectiveArea, String> {
    match s.to_lowercase().as_str() {
        "thread" | "threaded" | "as" => Ok(EffectiveArea::Stress),
        "shank" | "unthreaded" | "a" => Ok(EffectiveArea::Gross),
        _ => Err(format!("expected 'thread' or 'shank', got '{}'", s)),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
