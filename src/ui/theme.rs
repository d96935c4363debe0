//! Visual theme and styling.

use console::Style;

/// Terminal styles for status lines.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(use_colors: bool) -> Self {
        if use_colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
