use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use vle_core::units::constants::R_J_PER_MOL_K;
use vle_core::units::{k, pa};
use vle_eos::{FluidParameters, Species, State, classify, residual_gibbs, volume_roots};
use vle_solver::{BisectConfig, compute_saturation_pressure_with, saturation_sweep};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "vle-cli")]
#[command(about = "Saturation pressures of pure fluids from the van der Waals EoS", long_about = None)]
struct Cli {
    /// YAML file with additional fluid definitions
    #[arg(long, global = true)]
    fluid_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known fluids and their critical constants
    Fluids,
    /// Compute the saturation pressure at one temperature
    Saturation {
        /// Fluid key (catalog species or a name from --fluid-file)
        fluid: String,
        /// Temperature in K
        temp_k: f64,
        /// Absolute interval tolerance in Pa
        #[arg(long, default_value_t = 1e-9)]
        abs_tol: f64,
        /// Maximum bisection iterations
        #[arg(long, default_value_t = 100)]
        max_iterations: usize,
    },
    /// Sweep a saturation curve over a temperature range
    Curve {
        /// Fluid key (catalog species or a name from --fluid-file)
        fluid: String,
        /// Start temperature in K
        t_start_k: f64,
        /// End temperature in K
        t_end_k: f64,
        /// Number of sweep points
        #[arg(long, default_value_t = 25)]
        points: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the molar-volume roots and residual Gibbs energies at (P, T)
    Roots {
        /// Fluid key (catalog species or a name from --fluid-file)
        fluid: String,
        /// Pressure in Pa
        pressure_pa: f64,
        /// Temperature in K
        temp_k: f64,
    },
}

/// Custom fluids supplied by the user as YAML:
///
/// ```yaml
/// fluids:
///   - name: myfluid
///     tc_k: 507.5
///     pc_pa: 30.1e6
/// ```
#[derive(Debug, Deserialize)]
struct FluidFile {
    fluids: Vec<FluidSpec>,
}

#[derive(Debug, Deserialize)]
struct FluidSpec {
    name: String,
    tc_k: f64,
    pc_pa: f64,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let fluid_file = cli.fluid_file.as_deref();

    match cli.command {
        Commands::Fluids => cmd_fluids(fluid_file),
        Commands::Saturation {
            fluid,
            temp_k,
            abs_tol,
            max_iterations,
        } => cmd_saturation(&fluid, fluid_file, temp_k, abs_tol, max_iterations),
        Commands::Curve {
            fluid,
            t_start_k,
            t_end_k,
            points,
            output,
        } => cmd_curve(
            &fluid,
            fluid_file,
            t_start_k,
            t_end_k,
            points,
            output.as_deref(),
        ),
        Commands::Roots {
            fluid,
            pressure_pa,
            temp_k,
        } => cmd_roots(&fluid, fluid_file, pressure_pa, temp_k),
    }
}

fn load_fluid_file(path: &Path) -> CliResult<FluidFile> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

fn resolve_fluid(key: &str, fluid_file: Option<&Path>) -> CliResult<(FluidParameters, String)> {
    if let Some(sp) = Species::from_key(key) {
        let params = FluidParameters::for_species(sp)?;
        return Ok((params, sp.display_name().to_string()));
    }

    if let Some(path) = fluid_file {
        let file = load_fluid_file(path)?;
        if let Some(entry) = file
            .fluids
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(key))
        {
            let params =
                FluidParameters::from_critical(R_J_PER_MOL_K, k(entry.tc_k), pa(entry.pc_pa))?;
            return Ok((params, entry.name.clone()));
        }
    }

    Err(format!("Unknown fluid '{key}' (see `vle-cli fluids`, or pass --fluid-file)").into())
}

fn cmd_fluids(fluid_file: Option<&Path>) -> CliResult<()> {
    println!("Catalog fluids:");
    for sp in Species::ALL {
        println!(
            "  {:10} {:16} Tc = {:8.3} K   Pc = {:12.0} Pa",
            sp.key(),
            sp.display_name(),
            sp.tc_k(),
            sp.pc_pa()
        );
    }

    if let Some(path) = fluid_file {
        let file = load_fluid_file(path)?;
        println!("\nFluids from {}:", path.display());
        for entry in &file.fluids {
            println!(
                "  {:26} Tc = {:8.3} K   Pc = {:12.0} Pa",
                entry.name, entry.tc_k, entry.pc_pa
            );
        }
    }
    Ok(())
}

fn cmd_saturation(
    fluid: &str,
    fluid_file: Option<&Path>,
    temp_k: f64,
    abs_tol: f64,
    max_iterations: usize,
) -> CliResult<()> {
    let (params, name) = resolve_fluid(fluid, fluid_file)?;
    let config = BisectConfig {
        abs_tol,
        rel_tol: 0.0,
        max_iterations,
    };

    let result = compute_saturation_pressure_with(&params, k(temp_k), &config)?;

    if result.converged {
        println!("✓ Saturation point for {} at {:.3} K", name, temp_k);
    } else {
        println!(
            "⚠ No convergence within {} iterations for {} at {:.3} K; best estimate:",
            max_iterations, name, temp_k
        );
    }
    println!("  P_sat:      {:.3} Pa", result.pressure.value);
    println!("  Iterations: {}", result.iterations);
    println!("  Residual:   {:.3e} J/mol", result.final_residual);
    Ok(())
}

fn cmd_curve(
    fluid: &str,
    fluid_file: Option<&Path>,
    t_start_k: f64,
    t_end_k: f64,
    points: usize,
    output: Option<&Path>,
) -> CliResult<()> {
    let (params, name) = resolve_fluid(fluid, fluid_file)?;
    let sweep = saturation_sweep(
        &params,
        t_start_k,
        t_end_k,
        points,
        &BisectConfig::default(),
    )?;

    // Build CSV
    let mut csv = String::from("temperature_k,saturation_pressure_pa\n");
    for (t_k, result) in sweep.temperatures_k.iter().zip(&sweep.results) {
        if let Some(r) = result {
            if r.converged {
                csv.push_str(&format!("{},{}\n", t_k, r.pressure.value));
            }
        }
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {}/{} converged points for {} to {}",
            sweep.num_successful,
            points,
            name,
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    if sweep.num_failed > 0 {
        println!(
            "  {} point(s) failed (supercritical or unconverged)",
            sweep.num_failed
        );
    }
    Ok(())
}

fn cmd_roots(
    fluid: &str,
    fluid_file: Option<&Path>,
    pressure_pa: f64,
    temp_k: f64,
) -> CliResult<()> {
    let (params, name) = resolve_fluid(fluid, fluid_file)?;
    let state = State::from_pt(pa(pressure_pa), k(temp_k))?;
    let roots = volume_roots(&params, &state)?;

    println!(
        "Molar-volume roots for {} at P = {:.3} Pa, T = {:.3} K",
        name, pressure_pa, temp_k
    );

    if roots.len() == 3 {
        let split = classify(&roots)?;
        for (label, v) in [
            ("liquid", split.liquid),
            ("intermediate", split.intermediate),
            ("vapor", split.vapor),
        ] {
            let g = residual_gibbs(&params, pressure_pa, temp_k, v)?;
            println!("  {:13} V = {:.6e} m³/mol   g_res = {:.4} J/mol", label, v, g);
        }
    } else {
        let v = roots.smallest();
        let g = residual_gibbs(&params, pressure_pa, temp_k, v)?;
        println!("  single phase  V = {:.6e} m³/mol   g_res = {:.4} J/mol", v, g);
    }
    Ok(())
}
