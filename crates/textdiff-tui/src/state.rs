use textdiff_config::{AppConfig, DiffAlgorithmName};
use textdiff_viewer::{DiffAlgorithm, DiffOptions, TextDiffState, TextPair, ToolStateStore};

/// Shared tool state holding the texts being compared.
///
/// Lives for the whole process so the texts survive widget state resets.
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    text_diff: TextPair,
}

impl ToolStateStore for ToolState {
    fn text_diff(&self) -> &TextPair {
        &self.text_diff
    }

    fn set_text_diff(&mut self, text1: String, text2: String) {
        self.text_diff = TextPair { text1, text2 };
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub tool_state: ToolState,
    pub text_diff: TextDiffState,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            tool_state: ToolState::default(),
            text_diff: TextDiffState::new(diff_options(&config)),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Diff options derived from the app config
pub fn diff_options(config: &AppConfig) -> DiffOptions {
    let algorithm = match config.algorithm {
        DiffAlgorithmName::Myers => DiffAlgorithm::Myers,
        DiffAlgorithmName::Patience => DiffAlgorithm::Patience,
        DiffAlgorithmName::Lcs => DiffAlgorithm::Lcs,
    };

    DiffOptions {
        algorithm,
        context_lines: config.context_lines,
    }
}
