//! ANSI color helpers for CLI output.
//!
//! Honors `NO_COLOR` (https://no-color.org): when set, every helper returns the
//! text unchanged.

/// ANSI color codes for CLI output
pub mod ansi {
    /// Gray (ANSI 37) - descriptions
    pub const GRAY: &str = "\x1b[37m";
    /// Light green (ANSI 92) - success
    pub const GREEN: &str = "\x1b[92m";
    /// Yellow (ANSI 33) - warnings and duplicates
    pub const YELLOW: &str = "\x1b[33m";
    /// Red (ANSI 31) - errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color scheme for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            warning: ansi::YELLOW,
            error: ansi::RED,
            success: ansi::GREEN,
            enabled: true,
        }
    }
}

impl Theme {
    /// Same palette, but every helper returns plain text.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Get the active theme, plain when `NO_COLOR` is set to a non-empty value.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(v) if !v.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
