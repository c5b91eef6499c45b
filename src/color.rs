use std::env;
use std::fmt;

use owo_colors::OwoColorize;
use supports_color::Stream;

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Automatically detect whether to use colors
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve color mode from CLI flag and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. CLI flag (`--color=always|auto|never`)
    /// 2. `NO_COLOR` environment variable
    /// 3. `TERM=dumb` environment variable
    /// 4. Default (Auto)
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        if env::var("NO_COLOR").is_ok() {
            return Self::Never;
        }

        if let Ok(term) = env::var("TERM") {
            if term == "dumb" {
                return Self::Never;
            }
        }

        Self::Auto
    }

    /// Check if colors should be enabled for `stream`
    ///
    /// Log lines go to stdout, one-shot status messages go to stderr.
    /// The log file never gets colors regardless of this setting.
    #[must_use]
    pub fn should_colorize(self, stream: Stream) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(stream).is_some(),
            Self::Never => false,
        }
    }
}

/// Message style for stderr status lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Warn,
    Error,
}

impl MessageStyle {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }

    #[allow(clippy::missing_const_for_fn)]
    pub fn format<D: fmt::Display>(self, mode: ColorMode, message: D) -> FormattedMessage<D> {
        FormattedMessage {
            style: self,
            mode,
            message,
        }
    }
}

/// A formatted message with color and symbol
pub struct FormattedMessage<D> {
    style: MessageStyle,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for FormattedMessage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.style.symbol();
        if self.mode.should_colorize(Stream::Stderr) {
            match self.style {
                MessageStyle::Success => {
                    write!(f, "{} {}", symbol.bright_green().bold(), self.message)
                }
                MessageStyle::Warn => write!(f, "{} {}", symbol.bright_yellow(), self.message),
                MessageStyle::Error => write!(f, "{} {}", symbol.bright_red().bold(), self.message),
            }
        } else {
            write!(f, "{symbol} {}", self.message)
        }
    }
}

/// Format a success message (green ✓)
pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Success.format(mode, message)
}

/// Format a warning message (yellow ⚠)
pub fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Warn.format(mode, message)
}

/// Format an error message (red ✗)
pub fn error<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Error.format(mode, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_resolve_from_cli_always() {
        let mode = ColorMode::resolve(Some(ColorMode::Always));
        assert_eq!(mode, ColorMode::Always);
    }

    #[test]
    fn test_resolve_from_cli_never() {
        let mode = ColorMode::resolve(Some(ColorMode::Never));
        assert_eq!(mode, ColorMode::Never);
    }

    #[test]
    #[serial]
    fn test_resolve_no_color_env() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            let mode = ColorMode::resolve(None);
            assert_eq!(mode, ColorMode::Never);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_term_dumb() {
        temp_env::with_vars([("TERM", Some("dumb")), ("NO_COLOR", None::<&str>)], || {
            let mode = ColorMode::resolve(None);
            assert_eq!(mode, ColorMode::Never);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_cli_overrides_no_color() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            let mode = ColorMode::resolve(Some(ColorMode::Always));
            assert_eq!(mode, ColorMode::Always);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_default_auto() {
        temp_env::with_vars([("NO_COLOR", None::<&str>), ("TERM", None::<&str>)], || {
            let mode = ColorMode::resolve(None);
            assert_eq!(mode, ColorMode::Auto);
        });
    }

    #[test]
    fn test_should_colorize_fixed_modes() {
        assert!(ColorMode::Always.should_colorize(Stream::Stdout));
        assert!(!ColorMode::Never.should_colorize(Stream::Stderr));
    }

    #[test]
    fn test_error_message_never_has_no_ansi() {
        let text = error(ColorMode::Never, "boom").to_string();
        assert_eq!(text, "✗ boom");
    }

    #[test]
    fn test_success_message_always_has_ansi() {
        let text = success(ColorMode::Always, "done").to_string();
        assert!(text.contains('\x1b'));
        assert!(text.contains("done"));
    }

    #[test]
    fn test_warn_message_never() {
        assert_eq!(warn(ColorMode::Never, "careful").to_string(), "⚠ careful");
    }
}
