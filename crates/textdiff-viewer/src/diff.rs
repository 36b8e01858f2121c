//! Line-based text comparison using `similar`.

use crate::model::{DiffResult, DiffSegment, SegmentKind};
use similar::{Algorithm, DiffTag, TextDiff};
use std::ops::Range;

/// Diff algorithm used for line matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    /// Produces cleaner results for structured text such as source code.
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// Options for [`compute_text_diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,
    /// Unchanged lines shown next to each change while a section is collapsed.
    pub context_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            context_lines: 3,
        }
    }
}

/// Compare two texts line by line.
///
/// Total for any input. Equal texts produce a single unchanged segment (or
/// nothing when both are empty); replaced lines become a removed segment
/// followed by an added one.
pub fn compute_text_diff(text1: &str, text2: &str, options: &DiffOptions) -> DiffResult {
    let diff = TextDiff::configure()
        .algorithm(options.algorithm.into())
        .diff_lines(text1, text2);

    let old = diff.old_slices();
    let new = diff.new_slices();
    let mut builder = SegmentBuilder::default();

    for op in diff.ops() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => builder.push(
                SegmentKind::Unchanged,
                &old[old_range.clone()],
                Some(&old_range),
                Some(&new_range),
            ),
            DiffTag::Delete => {
                builder.push(SegmentKind::Removed, &old[old_range.clone()], Some(&old_range), None)
            }
            DiffTag::Insert => {
                builder.push(SegmentKind::Added, &new[new_range.clone()], None, Some(&new_range))
            }
            DiffTag::Replace => {
                builder.push(SegmentKind::Removed, &old[old_range.clone()], Some(&old_range), None);
                builder.push(SegmentKind::Added, &new[new_range.clone()], None, Some(&new_range));
            }
        }
    }

    let result = builder.finish(options.context_lines);
    log::debug!(
        "Compared {} / {} bytes: {} segments, +{} -{}",
        text1.len(),
        text2.len(),
        result.segments.len(),
        result.additions(),
        result.deletions()
    );
    result
}

/// Collects segments, merging adjacent runs of the same kind.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<DiffSegment>,
}

impl SegmentBuilder {
    fn push(
        &mut self,
        kind: SegmentKind,
        slices: &[&str],
        old_range: Option<&Range<usize>>,
        new_range: Option<&Range<usize>>,
    ) {
        if slices.is_empty() {
            return;
        }
        let lines = slices.iter().map(|s| strip_terminator(s).to_string());

        if let Some(last) = self.segments.last_mut() {
            if last.kind == kind {
                last.lines.extend(lines);
                return;
            }
        }

        let index = self.segments.len();
        self.segments.push(DiffSegment::new(
            index,
            kind,
            lines.collect(),
            old_range.map(|r| r.start as u32 + 1),
            new_range.map(|r| r.start as u32 + 1),
        ));
    }

    fn finish(self, context_lines: usize) -> DiffResult {
        DiffResult::new(self.segments, context_lines)
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn diff(a: &str, b: &str) -> DiffResult {
        compute_text_diff(a, b, &DiffOptions::default())
    }

    fn kinds(result: &DiffResult) -> Vec<SegmentKind> {
        result.segments.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_equal_texts_have_no_changes() {
        let result = diff("a", "a");
        assert_eq!(result.change_count(), 0);
        assert_eq!(kinds(&result), vec![SegmentKind::Unchanged]);
        assert_eq!(result.segments[0].lines, vec!["a"]);
    }

    #[test]
    fn test_both_empty() {
        let result = diff("", "");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_original() {
        let result = diff("", "hello\nworld");
        assert_eq!(kinds(&result), vec![SegmentKind::Added]);
        assert_eq!(result.additions(), 2);
        assert_eq!(result.segments[0].old_start, None);
        assert_eq!(result.segments[0].new_start, Some(1));
    }

    #[test]
    fn test_replaced_line() {
        let result = diff("one\ntwo\nthree\n", "one\n2\nthree\n");
        assert_eq!(
            kinds(&result),
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Removed,
                SegmentKind::Added,
                SegmentKind::Unchanged,
            ]
        );

        let removed = &result.segments[1];
        assert_eq!(removed.lines, vec!["two"]);
        assert_eq!(removed.old_start, Some(2));

        let added = &result.segments[2];
        assert_eq!(added.lines, vec!["2"]);
        assert_eq!(added.new_start, Some(2));

        let tail = &result.segments[3];
        assert_eq!(tail.old_start, Some(3));
        assert_eq!(tail.new_start, Some(3));
    }

    #[test]
    fn test_segment_ids_follow_position() {
        let result = diff("a\nb\n", "a\nc\n");
        let ids: Vec<&str> = result.segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["section-0", "section-1", "section-2"]);
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let result = diff("x\r\ny\r\n", "x\r\ny\r\n");
        assert_eq!(result.segments[0].lines, vec!["x", "y"]);
    }

    #[test]
    fn test_context_lines_are_carried() {
        let options = DiffOptions {
            algorithm: DiffAlgorithm::Patience,
            context_lines: 1,
        };
        let result = compute_text_diff("a\n", "b\n", &options);
        assert_eq!(result.context_lines, 1);
        assert_eq!(result.deletions(), 1);
        assert_eq!(result.additions(), 1);
    }
}
