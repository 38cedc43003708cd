use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    feature::FeatureCollection,
    io::{read_collection, write_collection},
};
use super::{reduce_collection, validate_profiles, PointStats, Profile};

/// Result of one profile's reduction and write.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    Written(PointStats),
    Failed(String),
}

/// Per-profile outcomes of a tier run, in profile order.
#[derive(Debug, Clone, Default)]
pub struct TierReport {
    pub outcomes: Vec<(Profile, ProfileOutcome)>,
}

impl TierReport {
    /// Check whether every profile was written.
    pub fn all_written(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| matches!(outcome, ProfileOutcome::Written(_)))
    }

    /// Profiles whose write failed, with their error messages.
    pub fn failures(&self) -> impl Iterator<Item = (&Profile, &str)> {
        self.outcomes.iter().filter_map(|(profile, outcome)| match outcome {
            ProfileOutcome::Failed(message) => Some((profile, message.as_str())),
            ProfileOutcome::Written(_) => None,
        })
    }

    /// One line per profile.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (profile, outcome) in &self.outcomes {
            let _ = match outcome {
                ProfileOutcome::Written(stats) => writeln!(
                    out,
                    "{} (stride {}): {} -> {} points ({:.1}% reduction)",
                    profile.name, profile.stride(), stats.original, stats.optimized, stats.reduction_percent(),
                ),
                ProfileOutcome::Failed(message) => writeln!(out, "{}: FAILED ({})", profile.name, message),
            };
        }
        out
    }
}

/// Reduce `source` once per profile and hand each result to `write`.
/// A failed write is recorded and the remaining profiles still run.
pub fn reduce_all<W>(source: &FeatureCollection, profiles: &[Profile], mut write: W) -> TierReport
where
    W: FnMut(&Profile, &FeatureCollection) -> Result<()>,
{
    let mut report = TierReport::default();
    for profile in profiles {
        info!("[reduce] profile {} (stride {})", profile.name, profile.stride());
        let reduction = reduce_collection(source, profile);
        let stats = reduction.stats;
        debug!(
            "[reduce] {}: {} -> {} points, {} removed",
            profile.name, stats.original, stats.optimized, stats.removed(),
        );

        let outcome = match write(profile, &reduction.collection) {
            Ok(()) => {
                info!(
                    "[reduce] {}: {} -> {} points ({:.1}% reduction)",
                    profile.name, stats.original, stats.optimized, stats.reduction_percent(),
                );
                ProfileOutcome::Written(stats)
            }
            Err(e) => {
                warn!("[reduce] {}: write failed: {e:#}", profile.name);
                ProfileOutcome::Failed(format!("{e:#}"))
            }
        };
        report.outcomes.push((profile.clone(), outcome));
    }
    report
}

/// Read `input`, then write `<stem>-<profile>.geojson` into `out_dir` for each profile.
/// Invalid profiles or an unreadable input abort before any file is written.
pub fn reduce_file(input: &Path, out_dir: &Path, profiles: &[Profile]) -> Result<TierReport> {
    validate_profiles(profiles)?;

    info!("[reduce] loading {}", input.display());
    let source = read_collection(input)?;
    info!("[reduce] {} features, {} points", source.len(), source.point_count());

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory {}", out_dir.display()))?;

    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("features");
    Ok(reduce_all(&source, profiles, |profile, reduced| {
        let path = out_dir.join(format!("{stem}-{}.geojson", profile.name));
        write_collection(&path, reduced)
    }))
}
