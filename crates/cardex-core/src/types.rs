use serde::Deserialize;

use crate::error::CoreError;

/// Label used for the non-work email column.
///
/// Exported address books disagree on whether the default email category
/// is "Home" or "Personal"; both headers are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailLabel {
    Home,
    Personal,
}

impl EmailLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Personal => "personal",
        }
    }

    /// Header text for the email column this label selects.
    #[must_use]
    pub const fn column_header(self) -> &'static str {
        match self {
            Self::Home => "Home Email",
            Self::Personal => "Personal Email",
        }
    }
}

impl std::fmt::Display for EmailLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmailLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "personal" => Ok(Self::Personal),
            other => Err(CoreError::InvalidConfiguration(format!(
                "unknown email label: {other}"
            ))),
        }
    }
}
