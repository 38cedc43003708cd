use std::fs;

use anyhow::{bail, Context, Result};
use districtkit::{read_collection, SamplingEngine, SamplingEvent, SamplingWorker};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, SeedableRng};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SampleArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./points.json".into());

    let collection = read_collection(&args.input)?;
    let worker = match args.seed {
        Some(seed) => SamplingWorker::spawn_with(SamplingEngine::with_rng(StdRng::seed_from_u64(seed)))?,
        None => SamplingWorker::spawn()?,
    };
    worker.process(collection)?;

    let bar = ProgressBar::new(100);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos:>3}% {msg}")?);
    let terminal = worker.wait_terminal(|event| match event {
        SamplingEvent::Progress { message, percent } => {
            bar.set_position(percent.round() as u64);
            bar.set_message(message.clone());
        }
        SamplingEvent::Status { message } => bar.println(message),
        _ => {}
    })?;
    bar.finish_and_clear();
    worker.shutdown()?;

    let result = match terminal {
        SamplingEvent::Result(result) => result,
        SamplingEvent::Error { message } => bail!("Sampling failed: {message}"),
        other => bail!("Unexpected terminal event {other:?}"),
    };

    let value = if args.geojson { result.to_geojson() } else { serde_json::to_value(&result)? };
    fs::write(out_path, serde_json::to_vec_pretty(&value)?)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    println!(
        "Wrote {} points ({} centers) to {}",
        result.all_ordered_points.len(), result.center_points.len(), out_path.display(),
    );
    Ok(())
}
