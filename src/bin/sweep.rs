use clap::Parser;
use solar_radiation_pressure::config::{BodyConfig, load_bodies};
use solar_radiation_pressure::export::sweep as sweep_export;
use srp_core::constants::{AU_M, SOLAR_PRESSURE_AU_N_M2};
use srp_core::units::m_to_au;
use srp_radiation::pressure::{BodyProperties, ReferencePressure};
use srp_radiation::sweep::{SweepInputs, magnitude_profile};
use std::io::Write;
use std::path::PathBuf;

/// Generate sweep data (CSV) for the radiation pressure magnitude over a
/// range of emitter distances.
#[derive(Parser, Debug)]
#[command(author, version, about = "Radiation pressure distance sweep CSV generator")]
struct Cli {
    /// Body catalog: YAML file or directory of TOML files
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Body name from the catalog (case-insensitive)
    #[arg(long)]
    body: String,

    /// Sweep start distance in AU
    #[arg(long, default_value_t = 0.5)]
    start_au: f64,

    /// Sweep end distance in AU
    #[arg(long, default_value_t = 20.0)]
    end_au: f64,

    /// Number of uniformly spaced samples
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Illumination factor applied to every sample
    #[arg(long, default_value_t = 1.0)]
    shadow: f64,

    /// Reference pressure in N/m^2 (defaults to the solar value at 1 AU)
    #[arg(long, default_value_t = SOLAR_PRESSURE_AU_N_M2)]
    reference_pressure: f64,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/sweep.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = load_bodies(&cli.catalog)?;
    let body = find_body(&catalog, &cli.body)?;

    let inputs = SweepInputs {
        reference: ReferencePressure {
            pressure_n_m2: cli.reference_pressure,
            distance_m: AU_M,
        },
        body: BodyProperties {
            area_m2: body.area_m2,
            mass_kg: body.mass_kg,
            emissivity: body.emissivity,
        },
        shadow_factor: cli.shadow,
        start_distance_m: cli.start_au * AU_M,
        end_distance_m: cli.end_au * AU_M,
        samples: cli.samples,
    };

    let summary = magnitude_profile(&inputs).ok_or_else(|| {
        anyhow::anyhow!(
            "Degenerate sweep: check the distance range, sample count, and body mass"
        )
    })?;

    let mut writer = sweep_export::writer_for_path(&cli.output)?;
    sweep_export::write_header(writer.as_mut())?;
    for sample in &summary.samples {
        sweep_export::Record {
            distance_m: sample.distance_m,
            distance_au: m_to_au(sample.distance_m),
            acceleration_m_s2: sample.acceleration_m_s2,
            force_n: sample.force_n,
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    eprintln!(
        "Swept {} samples for '{}': peak {:.6e} m/s^2, floor {:.6e} m/s^2",
        summary.samples.len(),
        body.name,
        summary.peak_acceleration_m_s2,
        summary.floor_acceleration_m_s2
    );

    Ok(())
}

fn find_body(catalog: &[BodyConfig], name: &str) -> anyhow::Result<BodyConfig> {
    let upper = name.to_uppercase();
    catalog
        .iter()
        .find(|b| b.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Body '{}' not found in catalog", name))
}
