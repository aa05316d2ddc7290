//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Brand colors
    pub accent: Color,
    pub logo: Color,

    // Rating badge colors
    pub rating_high: Color,
    pub rating_mid: Color,
    pub rating_low: Color,

    // Feedback colors
    pub error: Color,
    pub success: Color,
    pub warning: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub genre_tag: Color,
    pub year: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb {
                r: 245,
                g: 66,
                b: 96,
            },
            logo: Color::Rgb {
                r: 245,
                g: 66,
                b: 96,
            },

            rating_high: Color::Green,
            rating_mid: Color::Yellow,
            rating_low: Color::Red,

            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            genre_tag: Color::Cyan,
            year: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
        }
    }
}

impl Theme {
    /// Get the color for a rating badge
    pub fn rating_color(&self, rating: f64) -> Color {
        if rating >= 7.0 {
            self.rating_high
        } else if rating >= 5.0 {
            self.rating_mid
        } else {
            self.rating_low
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
