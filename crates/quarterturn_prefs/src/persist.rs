use std::path::{Path, PathBuf};

use eyre::{OptionExt, Result};
use serde::Serialize;

const PREFS_FILE_NAME: &str = "prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

/// Returns the path of the user preferences file in the platform config
/// directory.
pub fn user_prefs_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", crate::APP_NAME)
        .ok_or_eyre("no home directory")?;
    Ok(dirs
        .config_dir()
        .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")))
}

pub fn user_config_source(
    path: &Path,
    required: bool,
) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path.to_owned())
        .format(crate::PREFS_FILE_FORMAT)
        .required(required)
}

pub fn save(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    Ok(())
}
