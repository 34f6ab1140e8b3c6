//! Visual theme and styling.

use console::Style;

/// Bosun's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational messages (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick the styled or plain theme based on the environment.
    pub fn auto() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational message (icon + text in magenta).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("ℹ {}", msg)))
    }

    /// Format a command line about to run.
    pub fn format_command(&self, command: &str) -> String {
        format!("{}", self.command.apply_to(format!("$ {}", command)))
    }

    /// Format a command failure notice.
    pub fn format_command_failed(&self, command: &str, code: Option<i32>) -> String {
        let status = match code {
            Some(code) => format!("exit code {}", code),
            None => "signal".to_string(),
        };
        format!(
            "{}",
            self.dim.apply_to(format!("command failed ({}): {}", status, command))
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = Theme::plain();
        let msg = theme.format_success("Installed");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Installed"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = Theme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = Theme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_info() {
        let theme = Theme::plain();
        let msg = theme.format_info("Detected apt");
        assert!(msg.contains("Detected apt"));
    }

    #[test]
    fn theme_formats_command() {
        let theme = Theme::plain();
        let msg = theme.format_command("apt install -y nginx");
        assert!(msg.starts_with("$ "));
        assert!(msg.contains("apt install -y nginx"));
    }

    #[test]
    fn theme_formats_command_failure_with_code() {
        let theme = Theme::plain();
        let msg = theme.format_command_failed("mysql -e 'select 1'", Some(1));
        assert!(msg.contains("exit code 1"));
    }

    #[test]
    fn theme_formats_command_failure_without_code() {
        let theme = Theme::plain();
        let msg = theme.format_command_failed("sleep 100", None);
        assert!(msg.contains("signal"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }

    #[test]
    fn auto_theme_creates_without_panic() {
        let theme = Theme::auto();
        let _ = theme.format_success("test");
    }
}
