use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{SharedStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn from_signal(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Kanban,
    Grid,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Kanban => write!(f, "kanban"),
            ViewMode::Grid => write!(f, "grid"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kanban" | "board" => Ok(ViewMode::Kanban),
            "grid" | "table" => Ok(ViewMode::Grid),
            _ => Err(format!("Invalid view mode: {}", s)),
        }
    }
}

/// Theme preference, stored as a bare string rather than JSON.
pub struct ThemePreference {
    theme: Theme,
    store: SharedStore,
}

impl ThemePreference {
    /// Read the stored theme. When absent or unreadable, derive it from the
    /// system color-scheme signal and store that.
    pub fn load(store: SharedStore, prefers_dark: bool) -> Result<Self> {
        let stored = match store.get_raw(THEME_KEY) {
            Ok(raw) => raw.and_then(|s| s.parse::<Theme>().ok()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme preference");
                None
            }
        };

        let pref = Self {
            theme: stored.unwrap_or_else(|| Theme::from_signal(prefers_dark)),
            store,
        };
        if stored.is_none() {
            pref.persist()?;
        }
        Ok(pref)
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.persist()
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        self.set(self.theme.toggled())?;
        Ok(self.theme)
    }

    fn persist(&self) -> Result<()> {
        self.store.set_raw(THEME_KEY, &self.theme.to_string())
    }
}

/// Read the terminal's `COLORFGBG` convention ("fg;bg"). Background indices
/// 0-6 and 8 are dark.
pub fn prefers_dark_from_colorfgbg(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}
