// src/theme.rs

use ratatui::style::Color;

/// Light/dark toggle, the only theme state in the app. The active palette is
/// passed down explicitly; nothing reads it from a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Concrete colors for one theme.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_dim: Color,
    pub primary: Color,
    pub user_bubble: Color,
    pub user_text: Color,
    pub ai_bubble: Color,
    pub ai_text: Color,
    pub code_bg: Color,
    pub border: Color,
    /// syntect theme used for code-block bodies.
    pub code_theme: &'static str,
}

pub static LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xfa, 0xfc),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x0f, 0x17, 0x2a),
    text_dim: Color::Rgb(0x94, 0xa3, 0xb8),
    primary: Color::Rgb(0x25, 0x63, 0xeb),
    user_bubble: Color::Rgb(0x25, 0x63, 0xeb),
    user_text: Color::Rgb(0xff, 0xff, 0xff),
    ai_bubble: Color::Rgb(0xf1, 0xf5, 0xf9),
    ai_text: Color::Rgb(0x1e, 0x29, 0x3b),
    code_bg: Color::Rgb(0xe2, 0xe8, 0xf0),
    border: Color::Rgb(0xcb, 0xd5, 0xe1),
    code_theme: "InspiredGitHub",
};

pub static DARK: Palette = Palette {
    background: Color::Rgb(0x0f, 0x17, 0x2a),
    surface: Color::Rgb(0x1a, 0x26, 0x32),
    text: Color::Rgb(0xf1, 0xf5, 0xf9),
    text_dim: Color::Rgb(0x64, 0x74, 0x8b),
    primary: Color::Rgb(0x60, 0xa5, 0xfa),
    user_bubble: Color::Rgb(0x25, 0x63, 0xeb),
    user_text: Color::Rgb(0xff, 0xff, 0xff),
    ai_bubble: Color::Rgb(0x23, 0x30, 0x3d),
    ai_text: Color::Rgb(0xf1, 0xf5, 0xf9),
    code_bg: Color::Rgb(0x1e, 0x1e, 0x1e),
    border: Color::Rgb(0x33, 0x41, 0x55),
    code_theme: "base16-ocean.dark",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_parses_config_values() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("solarized".parse::<Theme>().is_err());
    }
}
