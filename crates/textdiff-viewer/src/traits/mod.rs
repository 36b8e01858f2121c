//! Extension traits for injecting collaborators into the widget.

mod theme_provider;
mod tool_state;

pub use theme_provider::{DefaultTheme, ThemeProvider};
pub use tool_state::ToolStateStore;
