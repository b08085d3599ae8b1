use std::path::PathBuf;
use indicatif::ProgressBar;
use lorenz_core::{Config, TrajectoryWriter};
use lorenz_solver::solver::{sample_times, Integrator};

/// Run one simulation: load and validate the configuration, integrate,
/// write the trajectory.
///
/// Configuration and I/O failures are fatal; nothing is written unless
/// the whole run succeeds up to that row.
pub fn simulate(in_file: &PathBuf, out_file: &PathBuf) {
    let config = Config::load_from_file(in_file).expect("Can't load configuration");
    let integration = config.integration;
    let q0 = config.initial_conditions.as_vector();
    let integrator = Integrator::from(integration.method);
    log::info!(
        "integrating to t = {} with {:?}",
        integration.t_final,
        integration.method
    );
    let solution = integrator.integrate(
        integration.t_final,
        &q0,
        &config.parameters,
        integration.dense_output,
    );
    log::info!(
        "{} steps accepted, {} rejected, {} derivative evaluations",
        solution.accepted,
        solution.rejected,
        solution.evaluations
    );

    let mut writer = TrajectoryWriter::create(out_file).expect("Can't create output file");
    if integration.dense_output {
        // presence of points was checked at load time
        let points = integration.points.expect("Can't sample without points");
        let pb = ProgressBar::new(points as u64);
        for t in sample_times(integration.t_final, points) {
            let state = solution.evaluate_at(t).expect("Can't evaluate interpolant");
            writer.write_row(t, &state).expect("Can't write to file");
            pb.inc(1);
        }
        pb.finish_with_message(format!(
            "Sampled {} points. Trajectory saved to {}",
            points,
            out_file.to_string_lossy()
        ));
    } else {
        let pb = ProgressBar::new(solution.times.len() as u64);
        for (t, state) in solution.times.iter().zip(&solution.states) {
            writer.write_row(*t, state).expect("Can't write to file");
            pb.inc(1);
        }
        pb.finish_with_message(format!(
            "Trajectory saved to {}",
            out_file.to_string_lossy()
        ));
    }
    writer.finish().expect("Can't write to file");
}
