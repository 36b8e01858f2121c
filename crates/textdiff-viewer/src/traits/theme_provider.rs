//! Trait for providing theme configuration to the text diff widgets.

use ratatui::style::Color;

/// Provides theme colors for the text diff widgets.
///
/// Implement this trait to integrate the widget with your application's
/// theme system. The theme instance should be injected from the orchestrator.
///
/// # Example
///
/// ```ignore
/// use textdiff_viewer::ThemeProvider;
/// use ratatui::style::Color;
///
/// struct MyAppTheme;
///
/// impl ThemeProvider for MyAppTheme {
///     fn addition_background(&self) -> Color {
///         Color::Rgb(30, 60, 30)
///     }
///
///     fn deletion_background(&self) -> Color {
///         Color::Rgb(60, 30, 30)
///     }
/// }
/// ```
pub trait ThemeProvider: Send + Sync {
    /// Background color for added lines.
    fn addition_background(&self) -> Color;

    /// Background color for removed lines.
    fn deletion_background(&self) -> Color;

    /// Background color for unchanged lines.
    fn context_background(&self) -> Color {
        Color::Reset
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Background color for the cursor row in the result.
    fn cursor_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Foreground color for the cursor row in the result.
    fn cursor_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for collapsed/expanded section markers.
    fn section_marker_foreground(&self) -> Color {
        Color::Blue
    }

    /// Background color for section markers.
    fn section_marker_background(&self) -> Color {
        Color::Rgb(40, 40, 40)
    }

    /// Border color of the focused pane.
    fn focused_border(&self) -> Color {
        Color::White
    }

    /// Border color of unfocused panes.
    fn unfocused_border(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for input placeholders.
    fn placeholder_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Background color of the compare control.
    fn button_background(&self) -> Color {
        Color::Rgb(37, 99, 235)
    }

    /// Foreground color of the compare control.
    fn button_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for key hints (the key part like "F5").
    fn hint_key_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for hint descriptions.
    fn hint_text_foreground(&self) -> Color {
        Color::DarkGray
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn addition_background(&self) -> Color {
        Color::Rgb(30, 60, 30) // dark green
    }

    fn deletion_background(&self) -> Color {
        Color::Rgb(60, 30, 30) // dark red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.addition_background(), Color::Rgb(30, 60, 30));
        assert_eq!(theme.deletion_background(), Color::Rgb(60, 30, 30));
        assert_eq!(theme.context_background(), Color::Reset);
    }
}
