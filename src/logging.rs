use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Route tracing output to `log_path` so the terminal UI is never drawn over.
///
/// `RUST_LOG` overrides the default `info,saturway=debug` filter. Fails if a
/// global subscriber is already installed.
pub fn init(log_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,saturway=debug"));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_installed_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("logs").join("saturway.log");

        init(&log_path).unwrap();
        assert!(log_path.exists());
        tracing::info!("logging ready");

        let err = init(&dir.path().join("other.log")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }
}
