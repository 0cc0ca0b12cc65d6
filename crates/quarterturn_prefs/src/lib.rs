//! User preferences.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

mod animation;
mod colors;
mod interaction;
mod persist;

pub use animation::*;
pub use colors::*;
pub use interaction::*;

pub const APP_NAME: &str = "Quarterturn";

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub colors: ColorScheme,
}

impl Preferences {
    /// Loads preferences, falling back to the defaults on error.
    ///
    /// If `user_file` is `None`, the preferences file in the platform config
    /// directory is used if it exists.
    pub fn load(user_file: Option<&Path>) -> Self {
        Self::try_load(user_file).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences, layering the user file on top of the defaults.
    ///
    /// An explicit `user_file` must exist. The file in the platform config
    /// directory is optional.
    pub fn try_load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        match user_file {
            Some(path) => config = config.add_source(persist::user_config_source(path, true)),
            None => match persist::user_prefs_file() {
                Ok(path) => config = config.add_source(persist::user_config_source(&path, false)),
                Err(e) => log::warn!("Error locating user preferences: {e}"),
            },
        }

        let prefs = config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .wrap_err("error reading preferences")?;
        log::debug!("loaded preferences: {prefs:?}");
        Ok(prefs)
    }

    /// Saves preferences to `path`, or to the file in the platform config
    /// directory if `path` is `None`. Returns the path written.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(p) => p.to_owned(),
            None => persist::user_prefs_file()?,
        };
        persist::save(&path, self)
            .wrap_err_with(|| format!("error saving preferences to {}", path.display()))?;
        Ok(path)
    }

    /// Serializes the preferences as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use quarterturn_core::Rgb;

    use super::*;

    #[test]
    fn test_default_prefs_match_default_impl() {
        assert_eq!(Preferences::default(), *DEFAULT_PREFS);
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "animation:\n  twist_steps: 8\ncolors:\n  red: \"#c00\"")
            .expect("write");

        let prefs = Preferences::try_load(Some(file.path())).expect("valid prefs");
        assert_eq!(8, prefs.animation.twist_steps);
        assert_eq!(
            Rgb {
                rgb: [0xcc, 0, 0],
            },
            prefs.colors.red,
        );
        // Untouched values come from the defaults.
        assert_eq!(DEFAULT_PREFS.interaction, prefs.interaction);
        assert_eq!(DEFAULT_PREFS.colors.blue, prefs.colors.blue);
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "colors:\n  red: not-a-color").expect("write");

        assert!(Preferences::try_load(Some(file.path())).is_err());
        assert_eq!(*DEFAULT_PREFS, Preferences::load(Some(file.path())));

        let missing = file.path().with_extension("missing.yaml");
        assert_eq!(*DEFAULT_PREFS, Preferences::load(Some(&missing)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("prefs.yaml");
        let mut prefs = Preferences::default();
        prefs.interaction.drag_threshold = 12.5;
        assert_eq!(path, prefs.save(Some(&path)).expect("saved"));
        assert_eq!(prefs, Preferences::try_load(Some(&path)).expect("loaded"));
    }
}
