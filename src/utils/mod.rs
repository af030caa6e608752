pub mod persistence;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("survey_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Resolves the application data root: an explicit override, the
/// platform data dir, or the working directory as a last resort.
pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
    root.or_else(|| dirs::data_dir().map(|dir| dir.join("survey_core")))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(crate) fn ensure_dir(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}
