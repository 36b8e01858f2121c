/// The two texts being compared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPair {
    /// The original text (left input).
    pub text1: String,
    /// The modified text (right input).
    pub text2: String,
}

impl TextPair {
    pub fn new(text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: text1.into(),
            text2: text2.into(),
        }
    }

    /// Whether both texts are empty.
    pub fn is_empty(&self) -> bool {
        self.text1.is_empty() && self.text2.is_empty()
    }
}
