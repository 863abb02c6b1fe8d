//! Display themes. The active theme is a CSS class on the app root
//! (`light-theme`, `dark-theme`, `ocean-theme`).

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Ocean];

    /// Identifier written to storage.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Ocean => "ocean",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
            Theme::Ocean => "ocean-theme",
        }
    }

    /// Chart surface colours (background, text, grid) for SVG rendering.
    pub fn chart_palette(self) -> ChartPalette {
        match self {
            Theme::Light => ChartPalette {
                background: "#ffffff",
                text: "#475569",
                grid: "#e2e8f0",
            },
            Theme::Dark => ChartPalette {
                background: "#1e293b",
                text: "#cbd5e1",
                grid: "#334155",
            },
            Theme::Ocean => ChartPalette {
                background: "#0c2d48",
                text: "#b1d4e0",
                grid: "#145da0",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id() == raw.trim())
            .ok_or_else(|| UnknownTheme(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.id().parse::<Theme>(), Ok(theme));
        }
        assert!("neon".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Light);
    }
}
