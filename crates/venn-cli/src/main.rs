mod sets;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use venn_core::LayoutConfig;
use venn_layout::{Layout, PositionMap, Region, VennCalculator};

#[derive(Parser)]
#[command(
    name = "venn",
    version,
    about = "Venn: layout inspection for two-set Venn diagrams"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the layout and label positions for two sets
    Layout {
        /// Set A, e.g. "1..20" or "1,2,3,10..12"
        #[arg(long = "a")]
        set_a: String,

        /// Set B, same syntax as --a
        #[arg(long = "b")]
        set_b: String,

        /// TOML calibration file (defaults to the built-in calibration)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print the active calibration constants and tier table
    Info {
        /// TOML calibration file (defaults to the built-in calibration)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the built-in calibration to a TOML file
    Config {
        /// Output file path
        #[arg(short, long, default_value = "venn.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Layout {
            set_a,
            set_b,
            config,
            json,
        } => cmd_layout(&set_a, &set_b, config.as_deref(), json),
        Commands::Info { config } => cmd_info(config.as_deref()),
        Commands::Config { output } => cmd_config(&output),
    }
}

fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::load_from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display())),
        None => Ok(LayoutConfig::default()),
    }
}

#[derive(Serialize)]
struct LayoutReport<'a> {
    layout: &'a Layout,
    positions: &'a PositionMap<i64>,
    content_hash: String,
}

fn cmd_layout(set_a: &str, set_b: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let a = sets::parse_set(set_a).context("failed to parse --a")?;
    let b = sets::parse_set(set_b).context("failed to parse --b")?;
    let calculator = VennCalculator::new(load_config(config)?);

    let layout = calculator.compute_layout(&a, &b);
    let elements: Vec<i64> = a.union(&b).cloned().collect();
    let positions = calculator.pack_elements(&elements, &a, &b, &layout);
    let hash = positions.content_hash();

    tracing::info!(
        "laid out {} element(s) in tier '{}' ({} warning(s))",
        positions.len(),
        layout.tier,
        layout.warnings.len() + positions.warnings.len()
    );

    if json {
        let report = LayoutReport {
            layout: &layout,
            positions: &positions,
            content_hash: hash.to_hex(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Venn layout");
    println!(
        "   Union: {}, Intersection: {}, A-only: {}, B-only: {}",
        layout.counts.union, layout.counts.intersection, layout.counts.a_only, layout.counts.b_only
    );
    println!("   Tier:              {}", layout.tier);
    println!("   Circle radius:     {:.3}", layout.circle_radius);
    println!("   Circle separation: {:.3}", layout.circle_separation);
    println!(
        "   Lens:              area {:.3} (required {:.3}), {:.3} x {:.3}, font {}pt",
        layout.lens.area,
        layout.lens.required_area,
        layout.lens.width,
        layout.lens.height,
        layout.lens.font_size
    );
    println!(
        "   Crescents:         r_a {:.3}, r_b {:.3}, font {}pt",
        layout.crescents.a_only_radius, layout.crescents.b_only_radius, layout.crescents.font_size
    );
    for warning in layout.warnings.iter().chain(&positions.warnings) {
        println!("   ! {}", warning);
    }
    println!();

    for region in Region::ALL {
        println!("   [{}] {}pt", region, layout.region_font_size(region));
        for (elem, placement) in positions.iter().filter(|(_, p)| p.region == region) {
            println!(
                "      {:>6}  ({:>7.3}, {:>7.3}){}",
                elem,
                placement.point.x,
                placement.point.y,
                if placement.fallback { "  (centre fallback)" } else { "" }
            );
        }
    }
    println!();
    println!("   Content hash: {}", hash);
    Ok(())
}

fn cmd_info(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    println!("Venn layout engine");
    println!("   Version:              {}", env!("CARGO_PKG_VERSION"));
    println!("   Packing efficiency:   {}", config.packing_efficiency);
    println!("   Font-to-unit:         {}", config.font_to_unit);
    println!("   Lens safety margin:   {}", config.lens_safety_margin);
    println!("   Lens floor area:      {}", config.lens_floor_area);
    println!(
        "   Crescent limit:       {} x radius (shrink headroom {})",
        config.crescent_max_fraction, config.crescent_shrink_headroom
    );
    println!(
        "   Solver:               tolerance {}, {} iterations, max overlap {}",
        config.solver.tolerance, config.solver.max_iterations, config.solver.max_overlap_fraction
    );
    println!();
    println!("   {:<12} {:>9} {:>7} {:>5} {:>8}", "tier", "max union", "radius", "font", "padding");
    for row in &config.tiers {
        let bound = row
            .max_union
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {:<12} {:>9} {:>7.2} {:>5} {:>8.2}",
            row.tier.as_str(),
            bound,
            row.params.radius,
            row.params.font_size,
            row.params.padding
        );
    }
    Ok(())
}

fn cmd_config(output: &Path) -> Result<()> {
    if output.exists() {
        anyhow::bail!("'{}' already exists", output.display());
    }
    LayoutConfig::default()
        .save_to_file(output)
        .with_context(|| format!("failed to write config: {}", output.display()))?;
    println!("Wrote default calibration to {}", output.display());
    Ok(())
}
