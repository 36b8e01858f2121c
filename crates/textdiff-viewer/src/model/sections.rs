//! The set of expanded result sections.

use std::collections::HashSet;

/// Section ids the user has expanded in the current result.
///
/// Everything not in the set is rendered collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    ids: HashSet<String>,
}

impl ExpandedSections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the section is expanded.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedSections {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut sections = ExpandedSections::new();

        assert!(sections.toggle("section-1"));
        assert!(sections.contains("section-1"));

        assert!(!sections.toggle("section-1"));
        assert!(!sections.contains("section-1"));
        assert!(sections.is_empty());
    }

    #[test]
    fn test_toggle_leaves_other_ids_alone() {
        let mut sections: ExpandedSections = ["section-0", "section-4"].into_iter().collect();

        sections.toggle("section-2");
        assert_eq!(sections.len(), 3);

        sections.toggle("section-0");
        assert!(!sections.contains("section-0"));
        assert!(sections.contains("section-4"));
        assert!(sections.contains("section-2"));
    }
}
