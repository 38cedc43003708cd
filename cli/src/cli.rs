use std::path::PathBuf;

/// District geometry tiering and point sampling CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "districtkit", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write one reduced copy of a GeoJSON FeatureCollection per profile
    Reduce(ReduceArgs),

    /// Compute center and interior sample points for every district
    Sample(SampleArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReduceArgs {
    /// Input GeoJSON FeatureCollection
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// JSON array of profiles, defaults to the built-in four tiers
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub profiles: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SampleArgs {
    /// Input GeoJSON FeatureCollection
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file, defaults to "./points.json"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write points as a GeoJSON FeatureCollection instead of the raw result
    #[arg(long)]
    pub geojson: bool,
}
