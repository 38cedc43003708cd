use anyhow::{bail, Result};
use districtkit::{load_profiles, reduce_file, Profile};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ReduceArgs) -> Result<()> {
    let out_dir = &args.output.clone().unwrap_or(".".into());
    let profiles = match &args.profiles {
        Some(path) => load_profiles(path)?,
        None => Profile::defaults(),
    };

    tracing::info!("[reduce] {} -> {} ({} profiles)", args.input.display(), out_dir.display(), profiles.len());
    let report = reduce_file(&args.input, out_dir, &profiles)?;
    print!("{}", report.summary());

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{failed} of {} profiles failed to write", report.outcomes.len());
    }
    Ok(())
}
