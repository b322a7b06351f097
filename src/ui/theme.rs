use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_muted: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub option_key: String,
    pub correct: String,
    pub correct_fg: String,
    pub incorrect: String,
    pub incorrect_fg: String,
    pub toggle_on: String,
    pub toggle_off: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("quizr")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(e) => log::warn!("ignoring theme {}: {e}", user_theme_path.display()),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            text_muted: "#6c7086".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            border_focused: "#89b4fa".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            option_key: "#f9e2af".to_string(),
            correct: "#a6e3a1".to_string(),
            correct_fg: "#1e1e2e".to_string(),
            incorrect: "#f38ba8".to_string(),
            incorrect_fg: "#1e1e2e".to_string(),
            toggle_on: "#a6e3a1".to_string(),
            toggle_off: "#f38ba8".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_muted(&self) -> Color { Self::parse_color(&self.text_muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn option_key(&self) -> Color { Self::parse_color(&self.option_key) }
    pub fn correct(&self) -> Color { Self::parse_color(&self.correct) }
    pub fn correct_fg(&self) -> Color { Self::parse_color(&self.correct_fg) }
    pub fn incorrect(&self) -> Color { Self::parse_color(&self.incorrect) }
    pub fn incorrect_fg(&self) -> Color { Self::parse_color(&self.incorrect_fg) }
    pub fn toggle_on(&self) -> Color { Self::parse_color(&self.toggle_on) }
    pub fn toggle_off(&self) -> Color { Self::parse_color(&self.toggle_off) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(ThemeColors::parse_color("#28a745"), Color::Rgb(0x28, 0xa7, 0x45));
        assert_eq!(ThemeColors::parse_color("ff6347"), Color::Rgb(0xff, 0x63, 0x47));
    }

    #[test]
    fn test_parse_color_invalid_falls_back() {
        assert_eq!(ThemeColors::parse_color("#zzz"), Color::White);
        assert_eq!(ThemeColors::parse_color(""), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"catppuccin-mocha".to_string()));
        for name in names {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to parse");
        }
    }

    #[test]
    fn test_unknown_theme_is_none() {
        assert!(Theme::load("no-such-theme").is_none());
    }
}
