use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::logger::LogLevel;
use tictactoe_common::tictactoe::PlayerGlyphs;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub human_glyph: String,
    pub computer_glyph: String,
    #[serde(default = "default_show_cell_hints")]
    pub show_cell_hints: bool,
    #[serde(default)]
    pub verbose: bool,
}

fn default_show_cell_hints() -> bool {
    true
}

impl Config {
    pub fn glyphs(&self) -> PlayerGlyphs {
        PlayerGlyphs::new(self.human_glyph.as_str(), self.computer_glyph.as_str())
    }

    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.human_glyph.trim().is_empty() || self.computer_glyph.trim().is_empty() {
            return Err("Player glyphs must not be empty".to_string());
        }
        if self.human_glyph == self.computer_glyph {
            return Err(format!(
                "Player glyphs must differ, both are '{}'",
                self.human_glyph
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_glyph: "X".to_string(),
            computer_glyph: "O".to_string(),
            show_cell_hints: default_show_cell_hints(),
            verbose: false,
        }
    }
}
