// src/output.rs
use crate::sim::path_engine::Simulation;
use std::fs::File;
use std::io::{self, Write};

/// Write the time grid and path matrix as CSV: `time,path_1,...,path_P`,
/// one row per grid index. This is the time-indexed table any external
/// renderer or test harness consumes.
pub fn write_paths_to_csv(filename: &str, sim: &Simulation) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let n_paths = sim.paths.nrows();

    write!(file, "time")?;
    for p in 0..n_paths {
        write!(file, ",path_{}", p + 1)?;
    }
    writeln!(file)?;

    for (i, t) in sim.time_grid.iter().enumerate() {
        write!(file, "{}", t)?;
        for p in 0..n_paths {
            write!(file, ",{}", sim.paths[[p, i]])?;
        }
        writeln!(file)?;
    }
    Ok(())
}

/// Write key/value summary rows as CSV
pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
