use std::io::{self, Write};

use crate::physics::energy;
use crate::sim::Simulation;

/// Write the simulation history to CSV format.
///
/// Columns: time, x, y, x_dot, y_dot, kinetic, potential, total
pub fn write_history<W: Write>(writer: &mut W, sim: &Simulation) -> io::Result<()> {
    writeln!(writer, "time,x,y,x_dot,y_dot,kinetic,potential,total")?;

    for s in sim.samples() {
        let ek = energy::kinetic(s);
        let u = energy::potential(s);
        writeln!(
            writer,
            "{:.6},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
            s.time,
            s.x(), s.y(),
            s.x_dot(), s.y_dot(),
            ek, u, ek + u,
        )?;
    }

    Ok(())
}

/// Write the history to a CSV file at the given path.
pub fn write_history_file<P: AsRef<std::path::Path>>(path: P, sim: &Simulation) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_history(&mut file, sim)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut sim = Simulation::new(1.5, 2.25, 0.0, 0.0, 0.005);
        sim.step();

        let mut buf = Vec::new();
        write_history(&mut buf, &sim).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.000000,1.500000000,2.250000000,"));
        assert!(lines[2].starts_with("0.005000,"));
        assert_eq!(lines[1].split(',').count(), 8);
    }
}
