use crate::state::AppState;
use ratatui::{layout::Rect, Frame};
use textdiff_viewer::{DefaultTheme, FooterHint, Pane, TextDiffView, ToolStateStore};

/// Footer hints for the focused pane
fn footer_hints(focus: Pane) -> Vec<FooterHint> {
    let mut hints = vec![
        FooterHint::new("F5", "Compare"),
        FooterHint::new("Tab", "Focus"),
    ];

    if focus == Pane::Result {
        hints.push(FooterHint::new("Enter", "Toggle"));
        hints.push(FooterHint::new("e/z", "Expand/Collapse all"));
        hints.push(FooterHint::new("q", "Quit"));
    } else {
        hints.push(FooterHint::new("^U", "Clear"));
        hints.push(FooterHint::new("Esc", "Quit"));
    }

    hints
}

/// Render the entire application UI
///
/// Returns the height of the result viewport so the caller can keep the
/// state's scroll calculations in sync with the terminal size.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) -> u16 {
    let theme = DefaultTheme;

    // render_with_state needs &mut; render from a copy
    let mut render_state = state.text_diff.clone();
    TextDiffView::new(state.tool_state.text_diff(), &theme)
        .with_footer_hints(footer_hints(render_state.focus))
        .show_line_numbers(state.config.show_line_numbers)
        .render_with_state(area, f.buffer_mut(), &mut render_state);

    render_state.viewport_height.min(u16::MAX as usize) as u16
}
