use std::io::{self, Write};

use crate::sim::event::Rod;
use crate::sim::Run;

/// Summary statistics computed from a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub initial: [f64; 4], // x0, y0, x_dot0, y_dot0
    pub dt: f64,
    pub steps: usize,
    pub duration: f64,
    pub energy_initial: f64,
    pub energy_final: f64,
    pub drift_rate: Option<f64>,
    pub inner_flips: usize,
    pub outer_flips: usize,
    pub max_x_dot: f64,
    pub max_y_dot: f64,
}

impl RunSummary {
    pub fn from_run(run: &Run) -> Self {
        let sim = &run.simulation;
        let first = sim.samples()[0];
        let energy = sim.total_energy();

        let max_abs = |col: Vec<f64>| col.into_iter().map(f64::abs).fold(0.0_f64, f64::max);

        RunSummary {
            initial: [first.x(), first.y(), first.x_dot(), first.y_dot()],
            dt: sim.dt(),
            steps: sim.len() - 1,
            duration: sim.last().time,
            energy_initial: energy[0],
            energy_final: energy[energy.len() - 1],
            drift_rate: sim.energy_drift_rate(),
            inner_flips: run.flips(Rod::Inner),
            outer_flips: run.flips(Rod::Outer),
            max_x_dot: max_abs(sim.x_dot()),
            max_y_dot: max_abs(sim.y_dot()),
        }
    }
}

fn number(v: Option<f64>) -> String {
    match v {
        Some(v) if v.is_finite() => format!("{:e}", v),
        _ => "null".into(),
    }
}

/// Write a run summary as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> io::Result<()> {
    let [x0, y0, xd0, yd0] = summary.initial;
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"initial\": {{")?;
    writeln!(writer, "    \"x0\": {},", x0)?;
    writeln!(writer, "    \"y0\": {},", y0)?;
    writeln!(writer, "    \"x_dot0\": {},", xd0)?;
    writeln!(writer, "    \"y_dot0\": {}", yd0)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"integration\": {{")?;
    writeln!(writer, "    \"dt\": {},", summary.dt)?;
    writeln!(writer, "    \"steps\": {},", summary.steps)?;
    writeln!(writer, "    \"duration\": {:.6}", summary.duration)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"energy\": {{")?;
    writeln!(writer, "    \"initial\": {:.9},", summary.energy_initial)?;
    writeln!(writer, "    \"final\": {:.9},", summary.energy_final)?;
    writeln!(writer, "    \"drift_rate\": {}", number(summary.drift_rate))?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"motion\": {{")?;
    writeln!(writer, "    \"inner_flips\": {},", summary.inner_flips)?;
    writeln!(writer, "    \"outer_flips\": {},", summary.outer_flips)?;
    writeln!(writer, "    \"max_x_dot\": {:.6},", summary.max_x_dot)?;
    writeln!(writer, "    \"max_y_dot\": {:.6}", summary.max_y_dot)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write run summary JSON to a file.
pub fn write_summary_file<P: AsRef<std::path::Path>>(path: P, summary: &RunSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::simulate;

    fn short_run() -> Run {
        simulate(&SimConfig { steps: 200, ..SimConfig::default() }).unwrap()
    }

    #[test]
    fn summary_reads_the_history() {
        let run = short_run();
        let s = RunSummary::from_run(&run);
        assert_eq!(s.initial, [1.5, 2.25, 0.0, 0.0]);
        assert_eq!(s.steps, 200);
        assert!((s.duration - 1.0).abs() < 1e-9);
        assert!(s.drift_rate.is_some());
        assert!(s.max_x_dot > 0.0);
        assert!((s.energy_final - s.energy_initial).abs() < 1e-3);
    }

    #[test]
    fn json_output_is_valid() {
        let summary = RunSummary::from_run(&short_run());
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"initial\""));
        assert!(json.contains("\"drift_rate\""));
        assert!(json.contains("\"steps\": 200"));
        assert_eq!(json.matches('{').count(), json.matches('}').count());
    }

    #[test]
    fn missing_drift_is_null() {
        assert_eq!(number(None), "null");
        assert_eq!(number(Some(f64::NAN)), "null");
    }
}
