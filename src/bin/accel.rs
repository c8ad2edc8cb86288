use clap::Parser;
use solar_radiation_pressure::config::load_scenario;
use solar_radiation_pressure::export::report::{self, BodyRecord};
use solar_radiation_pressure::scenario::{BodyAcceleration, evaluate_body};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Radiation pressure acceleration report for a scenario manifest"
)]
struct Cli {
    /// Scenario manifest (YAML or TOML)
    #[arg(long, default_value = "configs/scenarios/benchmark.yaml")]
    scenario: PathBuf,

    /// Report only the named body (case-insensitive)
    #[arg(long)]
    body: Option<String>,

    /// Override the illumination factor for every reported body
    #[arg(long)]
    shadow: Option<f64>,

    /// Significant digits in the printed components
    #[arg(long, default_value_t = 15)]
    precision: usize,

    /// Optional JSON report sidecar path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let scenario = load_scenario(&cli.scenario)?;

    let mut bodies = scenario.bodies.clone();
    if let Some(filter) = &cli.body {
        let upper = filter.to_uppercase();
        bodies.retain(|b| b.name.to_uppercase() == upper);
        if bodies.is_empty() {
            return Err(anyhow::anyhow!(
                "Body '{}' not found in scenario '{}'",
                filter,
                scenario.name
            ));
        }
    }
    if let Some(shadow) = cli.shadow {
        for body in &mut bodies {
            body.shadow_factor = shadow;
        }
    }

    let mut results: Vec<BodyAcceleration> = Vec::with_capacity(bodies.len());
    for body in &bodies {
        results.push(evaluate_body(&scenario.emitter, body)?);
    }

    println!("=== Scenario: {} ===", scenario.name);
    println!(
        "Emitter: {} (P_ref = {:e} N/m^2 at {:e} m)",
        scenario.emitter.name,
        scenario.emitter.reference_pressure_n_m2,
        scenario.emitter.reference_distance_m
    );
    let digits = cli.precision;
    for result in &results {
        println!();
        println!(
            "{} (d = {:.3e} m, v = {})",
            result.name, result.distance_m, result.shadow_factor
        );
        println!(
            "  a = [{:.digits$e}, {:.digits$e}, {:.digits$e}] m/s^2",
            result.acceleration_m_s2[0], result.acceleration_m_s2[1], result.acceleration_m_s2[2],
        );
        println!("  |a| = {:.digits$e} m/s^2", result.magnitude_m_s2);
    }

    if let Some(json_path) = &cli.json {
        let records: Vec<BodyRecord> = results
            .iter()
            .map(|r| BodyRecord {
                name: r.name.clone(),
                distance_m: r.distance_m,
                shadow_factor: r.shadow_factor,
                acceleration_m_s2: r.acceleration_m_s2,
                magnitude_m_s2: r.magnitude_m_s2,
                force_n: r.force_n,
            })
            .collect();
        let meta = report::Metadata {
            scenario: &scenario.name,
            emitter: &scenario.emitter.name,
            reference_pressure_n_m2: scenario.emitter.reference_pressure_n_m2,
            reference_distance_m: scenario.emitter.reference_distance_m,
        };
        report::write_report(json_path, &meta, &records)?;
        println!();
        println!("Report written to {}", json_path.display());
    }

    Ok(())
}
