use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, cli_no_animation: bool) -> Self {
        Self::from_caps(cli_color, cli_no_animation, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        cli_no_animation: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        let animation = !cli_no_animation && caps.is_tty && !caps.is_ci;

        Self {
            caps,
            color,
            unicode: caps.supports_unicode,
            animation,
        }
    }

    /// Plain output: no color, ASCII icons, one line per update
    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self {
            caps: TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
                width: 80,
            },
            color: false,
            unicode: false,
            animation: false,
        }
    }
}
