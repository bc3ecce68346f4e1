// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.


//! Configuration for legacy descriptor handling.
//!
//! Default values are loaded on first use. Values can be replaced wholesale
//! or in part from a JSON or TOML document, or set individually by path.
//! There is a single configuration per thread.

use std::cell::RefCell;

use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

thread_local!(
    static SETTINGS: RefCell<Config> =
        RefCell::new(Config::try_from(&Settings::default()).unwrap_or_default());
);

const MAJOR_VERSION: usize = 1;
const MINOR_VERSION: usize = 0;

// returns error if settings are invalid
trait SettingsValidate {
    fn validate(&self) -> Result<(), SettingsError> {
        Ok(())
    }
}

/// Settings that tune how legacy descriptor strings are translated.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LegacySettings {
    /// Hash used by the SM2 grammar when the descriptor names none.
    pub sm2_default_hash: String,

    /// Whether RSA padding names outside the known schemes are passed
    /// through unchanged. When `false` they are rejected.
    pub allow_unknown_rsa_padding: bool,
}

impl Default for LegacySettings {
    fn default() -> Self {
        Self {
            sm2_default_hash: "SM3".to_owned(),
            allow_unknown_rsa_padding: true,
        }
    }
}

impl SettingsValidate for LegacySettings {
    fn validate(&self) -> Result<(), SettingsError> {
        if self.sm2_default_hash.is_empty() {
            return Err(SettingsError::BadParam(
                "legacy.sm2_default_hash cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Settings {
    version_major: usize,
    version_minor: usize,
    legacy: LegacySettings,
}

impl Settings {
    /// Return the legacy descriptor settings.
    pub fn legacy(&self) -> &LegacySettings {
        &self.legacy
    }

    /// Merge a (possibly partial) settings document over the current
    /// settings and make the result current.
    ///
    /// `format` is `"json"` or `"toml"`.
    pub fn from_string(settings_str: &str, format: &str) -> Result<Self, SettingsError> {
        let f = match format.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            _ => return Err(SettingsError::UnsupportedFormat(format.to_owned())),
        };

        let new_config = Config::builder()
            .add_source(config::File::from_str(settings_str, f))
            .build()
            .map_err(|_e| SettingsError::BadParam("could not parse configuration".into()))?;

        let update_config = SETTINGS.with_borrow(|current_settings| {
            Config::builder()
                .add_source(current_settings.clone())
                .add_source(new_config)
                .build() // merge overrides, allows for partial changes
        });

        match update_config {
            Ok(update_config) => {
                // sanity check the values before committing
                let settings = update_config
                    .clone()
                    .try_deserialize::<Settings>()
                    .map_err(|_e| {
                        SettingsError::BadParam("configuration contains unrecognized param".into())
                    })?;

                settings.validate()?;

                SETTINGS.set(update_config);

                Ok(settings)
            }
            Err(_) => Err(SettingsError::OtherError(
                "could not update configuration".into(),
            )),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version_major: MAJOR_VERSION,
            version_minor: MINOR_VERSION,
            legacy: Default::default(),
        }
    }
}

impl SettingsValidate for Settings {
    fn validate(&self) -> Result<(), SettingsError> {
        if self.version_major > MAJOR_VERSION {
            return Err(SettingsError::VersionCompatibility(
                "settings version too new".into(),
            ));
        }
        self.legacy.validate()
    }
}

/// Return a snapshot of the current settings, or `None` if they cannot be
/// deserialized.
pub fn get_settings() -> Option<Settings> {
    SETTINGS.with_borrow(|config| config.clone().try_deserialize::<Settings>().ok())
}

/// Load settings from a TOML document.
pub fn load_settings(toml: &str) -> Result<(), SettingsError> {
    Settings::from_string(toml, "toml").map(|_| ())
}

/// Set a single value by its dotted path, for example
/// `"legacy.sm2_default_hash"`.
pub fn set_settings_value<T: Into<config::Value>>(
    value_path: &str,
    value: T,
) -> Result<(), SettingsError> {
    let c = SETTINGS.take();

    let update_config = Config::builder()
        .add_source(c.clone())
        .set_override(value_path, value);

    if let Ok(updated) = update_config {
        let update_config = match updated.build() {
            Ok(update_config) => update_config,
            Err(_) => {
                SETTINGS.set(c);
                return Err(SettingsError::OtherError(
                    "could not update configuration".into(),
                ));
            }
        };

        let settings = match update_config.clone().try_deserialize::<Settings>() {
            Ok(settings) => settings,
            Err(_) => {
                SETTINGS.set(c);
                return Err(SettingsError::BadParam(
                    "configuration contains unrecognized param".into(),
                ));
            }
        };

        if let Err(err) = settings.validate() {
            SETTINGS.set(c);
            return Err(err);
        }

        SETTINGS.set(update_config);

        Ok(())
    } else {
        SETTINGS.set(c);
        Err(SettingsError::OtherError("could not save settings".into()))
    }
}

/// Get a single value by its dotted path.
pub fn get_settings_value<'de, T: Deserialize<'de>>(value_path: &str) -> Result<T, SettingsError> {
    SETTINGS.with_borrow(|current_settings| {
        current_settings
            .get::<T>(value_path)
            .map_err(|_| SettingsError::NotFound(value_path.to_owned()))
    })
}

/// Restore the default settings.
pub fn reset_default_settings() -> Result<(), SettingsError> {
    if let Ok(default_settings) = Config::try_from(&Settings::default()) {
        SETTINGS.set(default_settings);
        Ok(())
    } else {
        Err(SettingsError::OtherError("could not save settings".into()))
    }
}

/// Describes errors that can occur while loading or updating settings.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    /// The settings document format is not supported.
    #[error("unsupported settings format '{0}'")]
    UnsupportedFormat(String),

    /// A settings value is missing, malformed, or out of range.
    #[error("bad parameter ({0})")]
    BadParam(String),

    /// The settings were written for a newer version of this crate.
    #[error("incompatible settings version ({0})")]
    VersionCompatibility(String),

    /// No value exists at the requested path.
    #[error("settings value '{0}' not found")]
    NotFound(String),

    /// An unexpected internal error occurred.
    #[error("internal error ({0})")]
    OtherError(String),
}
