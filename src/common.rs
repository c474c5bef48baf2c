use std::{
    env, fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use log::{debug, info};

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("GIT_VERSION");
pub const PROJECT_VERSION_HASH: &str = env!("GIT_HASH");

/// Environment variable to override the config directory.
///
/// Opt-in escape hatch for tests and CI. Must be an absolute path without
/// `..` components.
///
/// Example usage in tests:
///   export `ENHANCED_SELECT_CONFIG_DIR`="/tmp/test-config/enhanced-select"
pub const ENV_CONFIG_DIR_OVERRIDE: &str = "ENHANCED_SELECT_CONFIG_DIR";

pub fn print_header() {
    println!(
        "{} {}",
        PROJECT_NAME.green().bold(),
        format!("{PROJECT_VERSION} ({PROJECT_VERSION_HASH})").dimmed()
    );
}

/// Returns the project data directory, creating it if needed.
///
/// Returns: Path to `~/.local/share/enhanced-select` (or equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"))?;

    let project_data_dir = data_dir.join(PROJECT_NAME);
    create_secure_directory(&project_data_dir)?;

    Ok(project_data_dir)
}

/// Returns the project config directory, creating it if needed.
///
/// If `ENHANCED_SELECT_CONFIG_DIR` is set, uses that path directly (validated
/// for safety). Otherwise falls back to `dirs::config_dir()/enhanced-select`.
pub fn project_config_dir() -> Result<PathBuf> {
    let project_config_dir = if let Ok(override_dir) = env::var(ENV_CONFIG_DIR_OVERRIDE) {
        let path = validate_override_dir(&override_dir)?;
        info!("Using config directory override from {ENV_CONFIG_DIR_OVERRIDE}: {}", path.display());
        path
    } else {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow!("Unable to determine config directory. Ensure XDG_CONFIG_HOME or HOME environment variable is set"))?;
        config_dir.join(PROJECT_NAME)
    };

    create_secure_directory(&project_config_dir)?;

    Ok(project_config_dir)
}

fn validate_override_dir(override_dir: &str) -> Result<PathBuf> {
    let path = PathBuf::from(override_dir);

    if !path.is_absolute() {
        bail!("{ENV_CONFIG_DIR_OVERRIDE} must be an absolute path: {override_dir}");
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!("{ENV_CONFIG_DIR_OVERRIDE} contains parent directory references: {override_dir}");
    }

    Ok(path)
}

/// Creates a directory with owner-only permissions (0700 on Unix).
///
/// Existing directories have their permissions corrected.
#[cfg(unix)]
fn create_secure_directory(dir: &Path) -> Result<()> {
    use std::fs::DirBuilder;
    use std::os::unix::fs::DirBuilderExt;
    use std::os::unix::fs::PermissionsExt;

    debug!("Creating directory: {} (exists={})", dir.display(), dir.exists());

    let mut builder = DirBuilder::new();
    builder.recursive(true).mode(0o700);
    builder
        .create(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
        .with_context(|| format!("Unable to set permissions on directory: {}", dir.display()))?;

    Ok(())
}

#[cfg(not(unix))]
fn create_secure_directory(dir: &Path) -> Result<()> {
    debug!("Creating directory: {}", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;
    Ok(())
}
