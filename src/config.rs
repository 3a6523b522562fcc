// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout of the settings file that supplies default formatting
//! options, i.e., the ellipsis marker used for truncation, and the decimal
//! precision used for file sizes. Every table and key is optional, so an
//! empty file, or no file at all, simply means built-in defaults.
//!
//! # General Layout
//!
//! ```toml
//! [truncate]
//! ellipsis = "..."
//!
//! [file_size]
//! decimals = 2
//! ```

use crate::{size::DEFAULT_DECIMALS, text::DEFAULT_ELLIPSIS};

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, instrument};

/// Formatting settings layout.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Settings for text truncation.
    pub truncate: TruncateSettings,

    /// Settings for file size formatting.
    pub file_size: FileSizeSettings,
}

impl FormatSettings {
    /// Load settings from file at `path`.
    ///
    /// A missing file is not an error, it just means default settings.
    ///
    /// # Errors
    ///
    /// - Return [`ConfigError::Read`] if file exists but cannot be read.
    /// - Return [`ConfigError::Deserialize`] if file is not valid settings.
    #[instrument(skip(path), fields(path = %path.as_ref().display()), level = "debug")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(data) => {
                debug!("parse settings file");
                data.parse()
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("no settings file, use defaults");
                Ok(Self::default())
            }
            Err(error) => Err(ConfigError::Read {
                source: error,
                path: path.to_path_buf(),
            }),
        }
    }
}

impl FromStr for FormatSettings {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        toml::de::from_str(data).map_err(ConfigError::Deserialize)
    }
}

impl Display for FormatSettings {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(ConfigError::Serialize)?
                .as_str(),
        )
    }
}

/// Truncation settings.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TruncateSettings {
    /// Marker appended to truncated text.
    pub ellipsis: String,
}

impl Default for TruncateSettings {
    fn default() -> Self {
        Self {
            ellipsis: DEFAULT_ELLIPSIS.into(),
        }
    }
}

/// File size formatting settings.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileSizeSettings {
    /// Decimal places to round file sizes to.
    pub decimals: usize,
}

impl Default for FileSizeSettings {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Settings file exists, but cannot be read from.
    #[error("failed to read settings file at {:?}", path.display())]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to perform shell expansion on settings path.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}

impl From<ConfigError> for FmtError {
    fn from(_: ConfigError) -> Self {
        FmtError
    }
}

/// Friendly result alias :3
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_format_settings() -> anyhow::Result<()> {
        let result: FormatSettings = r#"
            [truncate]
            ellipsis = "…"

            [file_size]
            decimals = 1
        "#
        .parse()?;

        let expect = FormatSettings {
            truncate: TruncateSettings {
                ellipsis: "…".into(),
            },
            file_size: FileSizeSettings { decimals: 1 },
        };

        assert_eq!(result, expect);

        Ok(())
    }

    #[test]
    fn deserialize_partial_format_settings() -> anyhow::Result<()> {
        let result: FormatSettings = "[file_size]\ndecimals = 0\n".parse()?;
        assert_eq!(result.truncate, TruncateSettings::default());
        assert_eq!(result.file_size.decimals, 0);

        let result: FormatSettings = "".parse()?;
        assert_eq!(result, FormatSettings::default());

        Ok(())
    }

    #[test]
    fn deserialize_rejects_bad_settings() {
        let result = "[file_size]\ndecimals = -1\n".parse::<FormatSettings>();
        assert!(matches!(result, Err(ConfigError::Deserialize(..))));

        let result = "[truncate]\nellipsis = 42\n".parse::<FormatSettings>();
        assert!(matches!(result, Err(ConfigError::Deserialize(..))));
    }

    #[test]
    fn serialize_format_settings() {
        let result = FormatSettings::default().to_string();
        let expect = indoc! {r#"
            [truncate]
            ellipsis = "..."

            [file_size]
            decimals = 2
        "#};

        assert_eq!(result, expect);
    }

    #[test]
    fn load_format_settings() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");

        assert_eq!(FormatSettings::load(&path)?, FormatSettings::default());

        fs::write(&path, "[truncate]\nellipsis = \"~\"\n")?;
        let result = FormatSettings::load(&path)?;
        assert_eq!(result.truncate.ellipsis, "~");
        assert_eq!(result.file_size, FileSizeSettings::default());

        Ok(())
    }

    #[test]
    fn load_directory_is_read_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let result = FormatSettings::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));

        Ok(())
    }
}
