use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct DisplayFile {
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    #[serde(default)]
    pub ascii: bool,
}

fn default_bar_width() -> usize {
    20
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            ascii: false,
        }
    }
}

/// Missing HOME or a missing file both fall back to defaults; a present but
/// malformed file is an error the user should see.
pub fn load_display_settings() -> anyhow::Result<DisplaySettings> {
    let Ok(home) = std::env::var("HOME") else {
        return Ok(DisplaySettings::default());
    };
    let path = PathBuf::from(home).join(".config/kibble/display.toml");
    if !path.exists() {
        return Ok(DisplaySettings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let file: DisplayFile = toml::from_str(&raw)?;
    Ok(file.display)
}
