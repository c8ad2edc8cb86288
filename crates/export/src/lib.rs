//! Export helpers for CSV and JSON artifacts.

pub mod sweep {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "distance_m,distance_au,acceleration_m_s2,force_n";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub distance_m: f64,
        pub distance_au: f64,
        pub acceleration_m_s2: f64,
        pub force_n: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6e},{:.6},{:.15e},{:.15e}",
                self.distance_m, self.distance_au, self.acceleration_m_s2, self.force_n,
            )
        }
    }
}

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Per-body record in an exported scenario report.
    #[derive(Debug, Clone, Serialize)]
    pub struct BodyRecord {
        pub name: String,
        pub distance_m: f64,
        pub shadow_factor: f64,
        pub acceleration_m_s2: [f64; 3],
        pub magnitude_m_s2: f64,
        pub force_n: [f64; 3],
    }

    /// Metadata describing the evaluated scenario.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub emitter: &'a str,
        pub reference_pressure_n_m2: f64,
        pub reference_distance_m: f64,
    }

    #[derive(Serialize)]
    struct ReportSidecar<'a> {
        scenario: &'a str,
        emitter: &'a str,
        reference_pressure_n_m2: f64,
        reference_distance_m: f64,
        bodies: &'a [BodyRecord],
    }

    /// Write a pretty JSON sidecar for an evaluated scenario.
    pub fn write_report(
        output: &Path,
        meta: &Metadata<'_>,
        bodies: &[BodyRecord],
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let sidecar = ReportSidecar {
            scenario: meta.scenario,
            emitter: meta.emitter,
            reference_pressure_n_m2: meta.reference_pressure_n_m2,
            reference_distance_m: meta.reference_distance_m,
            bodies,
        };

        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}
