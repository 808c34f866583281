//! Command-line arguments and config resolution for the binary.

use std::path::{Path, PathBuf};

use tray_core::{load_config, AppConfig};

/// Read `--config <path>` (or `-c <path>`) from the arguments after the program name.
pub fn parse_config_arg<I>(args: I) -> Result<Option<PathBuf>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("{} requires a path", arg))?;
                return Ok(Some(PathBuf::from(path)));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(None)
}

/// Pick the configuration to run with (graceful degradation on error).
///
/// An explicit path must load. A discovered file that fails to load only
/// logs and falls back to defaults, as does having no file at all.
pub fn resolve_config(
    explicit: Option<&Path>,
    discovered: Option<PathBuf>,
) -> Result<AppConfig, String> {
    if let Some(path) = explicit {
        return load_config(path).map_err(|e| format!("{}: {}", path.display(), e));
    }

    let Some(path) = discovered else {
        tracing::info!("No config.toml found - using default configuration");
        return Ok(AppConfig::default());
    };

    match load_config(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(
                "Failed to load {}: {} - continuing with defaults",
                path.display(),
                e
            );
            Ok(AppConfig::default())
        }
    }
}
