use std::sync::OnceLock;

use tracing::Level;

static INITIALIZED: OnceLock<Level> = OnceLock::new();

/// Install the global stderr subscriber at a level chosen by `-v` count.
/// Only the first call takes effect; later calls return the level already installed.
pub fn init(verbose: u8) -> Level {
    *INITIALIZED.get_or_init(|| {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        // Another subscriber may already be installed by an embedding process.
        let _ = tracing::subscriber::set_global_default(subscriber);
        level
    })
}
