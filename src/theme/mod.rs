/// Visual mode of the overlaid page chrome.
///
/// Dark mode pairs light text with a darkened backdrop and is the fallback
/// whenever the wallpaper brightness is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const fn from_light_flag(is_light: bool) -> Self {
        if is_light {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn color_tokens(self) -> ColorTokens {
        match self {
            Self::Light => ColorTokens {
                text_color: "#1d1d1f",
                panel_background: "rgba(255, 255, 255, 0.55)",
            },
            Self::Dark => ColorTokens {
                text_color: "#f5f5f7",
                panel_background: "rgba(0, 0, 0, 0.35)",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub text_color: &'static str,
    pub panel_background: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn light_flag_round_trips_through_mode() {
        assert!(ThemeMode::from_light_flag(true).is_light());
        assert!(!ThemeMode::from_light_flag(false).is_light());
        assert_eq!(ThemeMode::Light.as_str(), "light");
    }

    #[test]
    fn light_mode_uses_dark_text() {
        assert_eq!(ThemeMode::Light.color_tokens().text_color, "#1d1d1f");
        assert_eq!(ThemeMode::Dark.color_tokens().text_color, "#f5f5f7");
        assert_ne!(
            ThemeMode::Light.color_tokens().panel_background,
            ThemeMode::Dark.color_tokens().panel_background
        );
    }
}
