use clap::ValueEnum;
use strum::Display;

/// Light or dark rendition of the same screen. The original queried the
/// ambient system setting; here it arrives as configuration and can be
/// flipped at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

pub const BELL_NAVY: [f32; 4] = [0.043, 0.043, 0.192, 1.0];
pub const BELL_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const CLAPPER_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn background(&self) -> [f32; 4] {
        match self {
            Theme::Light => [1.0, 1.0, 1.0, 1.0],
            Theme::Dark => [0.07, 0.07, 0.07, 1.0],
        }
    }

    /// Icon tint: light in dark mode, dark navy in light mode.
    pub fn icon_tint(&self) -> [f32; 4] {
        match self {
            Theme::Light => BELL_NAVY,
            Theme::Dark => BELL_WHITE,
        }
    }

    pub fn button_fill(&self) -> [f32; 4] {
        match self {
            Theme::Light => [0.384, 0.0, 0.933, 1.0],
            Theme::Dark => [0.733, 0.525, 0.988, 1.0],
        }
    }

    pub fn button_label(&self) -> [f32; 4] {
        match self {
            Theme::Light => [1.0, 1.0, 1.0, 1.0],
            Theme::Dark => [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn text(&self) -> [f32; 4] {
        match self {
            Theme::Light => BELL_NAVY,
            Theme::Dark => [0.8, 0.8, 0.8, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_follows_display_mode() {
        assert_eq!(Theme::Dark.icon_tint(), BELL_WHITE);
        assert_eq!(Theme::Light.icon_tint(), BELL_NAVY);
    }

    #[test]
    fn flipping_is_an_involution() {
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
        assert_ne!(Theme::Light.flipped(), Theme::Light);
    }
}
