//! Diff data structures representing the comparison of two texts.

use super::ExpandedSections;
use ratatui::style::Color;

/// Minimum number of hidden lines for an unchanged segment to collapse.
const MIN_HIDDEN_LINES: usize = 2;

/// The result of comparing two texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Ordered segments covering both texts.
    pub segments: Vec<DiffSegment>,
    /// Unchanged lines kept visible next to a change when a section is collapsed.
    pub context_lines: usize,
}

impl DiffResult {
    /// Create a new diff result.
    pub fn new(segments: Vec<DiffSegment>, context_lines: usize) -> Self {
        Self {
            segments,
            context_lines,
        }
    }

    /// Whether there is nothing to show (both texts were empty).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total added lines.
    pub fn additions(&self) -> usize {
        self.count_lines(SegmentKind::Added)
    }

    /// Total removed lines.
    pub fn deletions(&self) -> usize {
        self.count_lines(SegmentKind::Removed)
    }

    fn count_lines(&self, kind: SegmentKind) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == kind)
            .map(DiffSegment::len)
            .sum()
    }

    /// Number of added or removed segments.
    pub fn change_count(&self) -> usize {
        self.segments.iter().filter(|s| s.kind.is_change()).count()
    }

    pub fn has_changes(&self) -> bool {
        self.change_count() > 0
    }

    /// Lines kept visible at the (top, bottom) of a collapsed segment.
    fn visible_context(&self, index: usize) -> (usize, usize) {
        let Some(segment) = self.segments.get(index) else {
            return (0, 0);
        };
        let len = segment.len();
        let head = if index > 0 {
            self.context_lines.min(len)
        } else {
            0
        };
        let tail = if index + 1 < self.segments.len() {
            self.context_lines.min(len - head)
        } else {
            0
        };
        (head, tail)
    }

    /// Number of lines a collapsed segment hides (0 for changes).
    pub fn hidden_lines(&self, index: usize) -> usize {
        match self.segments.get(index) {
            Some(segment) if segment.kind == SegmentKind::Unchanged => {
                let (head, tail) = self.visible_context(index);
                segment.len() - head - tail
            }
            _ => 0,
        }
    }

    /// Whether the segment at `index` is a collapsible section.
    pub fn is_collapsible(&self, index: usize) -> bool {
        self.hidden_lines(index) >= MIN_HIDDEN_LINES
    }

    /// Ids of all collapsible sections, in display order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_collapsible(*i))
            .map(|(_, s)| s.id.as_str())
    }

    /// Whether `id` names a collapsible section of this result.
    pub fn is_section(&self, id: &str) -> bool {
        self.section_ids().any(|s| s == id)
    }

    /// Flatten the result into display rows given the expanded sections.
    pub fn display_rows(&self, expanded: &ExpandedSections) -> Vec<DisplayRow> {
        let mut rows = Vec::new();

        for (index, segment) in self.segments.iter().enumerate() {
            let all_lines = (0..segment.len()).map(|line| DisplayRow::Line {
                segment: index,
                line,
            });

            if !self.is_collapsible(index) {
                rows.extend(all_lines);
            } else if expanded.contains(&segment.id) {
                rows.push(DisplayRow::SectionHeader {
                    segment: index,
                    lines: segment.len(),
                });
                rows.extend(all_lines);
            } else {
                let (head, tail) = self.visible_context(index);
                let hidden = segment.len() - head - tail;
                rows.extend((0..head).map(|line| DisplayRow::Line {
                    segment: index,
                    line,
                }));
                rows.push(DisplayRow::Collapsed {
                    segment: index,
                    hidden,
                });
                rows.extend(
                    (segment.len() - tail..segment.len()).map(|line| DisplayRow::Line {
                        segment: index,
                        line,
                    }),
                );
            }
        }

        rows
    }
}

/// A contiguous run of lines sharing one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    /// Stable id within one result, also used as the section id.
    pub id: String,
    /// Segment type.
    pub kind: SegmentKind,
    /// Line contents without terminators.
    pub lines: Vec<String>,
    /// 1-based line number of the first line in the original text.
    pub old_start: Option<u32>,
    /// 1-based line number of the first line in the modified text.
    pub new_start: Option<u32>,
}

impl DiffSegment {
    /// Create a segment; `index` is its position in the result.
    pub fn new(
        index: usize,
        kind: SegmentKind,
        lines: Vec<String>,
        old_start: Option<u32>,
        new_start: Option<u32>,
    ) -> Self {
        Self {
            id: format!("section-{}", index),
            kind,
            lines,
            old_start,
            new_start,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line number in the original text of the `i`-th line.
    pub fn old_line(&self, i: usize) -> Option<u32> {
        self.old_start.map(|start| start + i as u32)
    }

    /// Line number in the modified text of the `i`-th line.
    pub fn new_line(&self, i: usize) -> Option<u32> {
        self.new_start.map(|start| start + i as u32)
    }

    /// Largest line number this segment displays.
    pub fn max_line_no(&self) -> u32 {
        let last = self.len().saturating_sub(1);
        self.old_line(last)
            .into_iter()
            .chain(self.new_line(last))
            .max()
            .unwrap_or(1)
    }
}

/// Segment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Present in both texts.
    Unchanged,
    /// Only in the modified text.
    Added,
    /// Only in the original text.
    Removed,
}

impl SegmentKind {
    /// Get the prefix character for this segment type.
    pub fn prefix(&self) -> char {
        match self {
            SegmentKind::Unchanged => ' ',
            SegmentKind::Added => '+',
            SegmentKind::Removed => '-',
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, SegmentKind::Unchanged)
    }

    /// Get the prefix color for this segment type.
    pub fn color(&self) -> Option<Color> {
        match self {
            SegmentKind::Added => Some(Color::Green),
            SegmentKind::Removed => Some(Color::Red),
            SegmentKind::Unchanged => None,
        }
    }
}

/// One row of the rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    /// A text line of a segment.
    Line { segment: usize, line: usize },
    /// Marker standing in for the hidden middle of a collapsed section.
    Collapsed { segment: usize, hidden: usize },
    /// Header above an expanded section (toggle target to collapse it again).
    SectionHeader { segment: usize, lines: usize },
}

impl DisplayRow {
    /// Index of the segment this row belongs to.
    pub fn segment(&self) -> usize {
        match *self {
            DisplayRow::Line { segment, .. }
            | DisplayRow::Collapsed { segment, .. }
            | DisplayRow::SectionHeader { segment, .. } => segment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
    }

    /// 10 unchanged, 1 removed, 1 added, 10 unchanged.
    fn sample_result() -> DiffResult {
        DiffResult::new(
            vec![
                DiffSegment::new(0, SegmentKind::Unchanged, lines("top", 10), Some(1), Some(1)),
                DiffSegment::new(1, SegmentKind::Removed, lines("old", 1), Some(11), None),
                DiffSegment::new(2, SegmentKind::Added, lines("new", 1), None, Some(11)),
                DiffSegment::new(3, SegmentKind::Unchanged, lines("end", 10), Some(12), Some(12)),
            ],
            3,
        )
    }

    #[test]
    fn test_counts() {
        let result = sample_result();
        assert_eq!(result.additions(), 1);
        assert_eq!(result.deletions(), 1);
        assert_eq!(result.change_count(), 2);
        assert!(result.has_changes());
    }

    #[test]
    fn test_edge_sections_keep_context_toward_changes() {
        let result = sample_result();

        // Leading section shows only its tail, trailing only its head
        assert_eq!(result.hidden_lines(0), 7);
        assert_eq!(result.hidden_lines(3), 7);
        assert_eq!(result.hidden_lines(1), 0);

        let ids: Vec<&str> = result.section_ids().collect();
        assert_eq!(ids, vec!["section-0", "section-3"]);
    }

    #[test]
    fn test_collapsed_rows() {
        let result = sample_result();
        let rows = result.display_rows(&ExpandedSections::new());

        assert_eq!(
            rows[0],
            DisplayRow::Collapsed {
                segment: 0,
                hidden: 7
            }
        );
        assert_eq!(rows[1], DisplayRow::Line { segment: 0, line: 7 });
        // marker + 3 context + 2 changes + 3 context + marker
        assert_eq!(rows.len(), 10);
        assert_eq!(
            rows[9],
            DisplayRow::Collapsed {
                segment: 3,
                hidden: 7
            }
        );
    }

    #[test]
    fn test_expanded_rows() {
        let result = sample_result();
        let expanded: ExpandedSections = ["section-0"].into_iter().collect();
        let rows = result.display_rows(&expanded);

        assert_eq!(
            rows[0],
            DisplayRow::SectionHeader {
                segment: 0,
                lines: 10
            }
        );
        assert_eq!(rows[1], DisplayRow::Line { segment: 0, line: 0 });
        assert_eq!(rows.len(), 1 + 10 + 2 + 3 + 1);
    }

    #[test]
    fn test_short_unchanged_runs_do_not_collapse() {
        let result = DiffResult::new(
            vec![
                DiffSegment::new(0, SegmentKind::Added, lines("new", 1), None, Some(1)),
                DiffSegment::new(1, SegmentKind::Unchanged, lines("ctx", 4), Some(1), Some(2)),
            ],
            3,
        );

        // 4 lines, 3 visible at the head: only 1 would hide
        assert!(!result.is_collapsible(1));
        assert_eq!(result.display_rows(&ExpandedSections::new()).len(), 5);
    }

    #[test]
    fn test_segment_line_numbers() {
        let segment = DiffSegment::new(3, SegmentKind::Unchanged, lines("x", 3), Some(5), Some(8));
        assert_eq!(segment.id, "section-3");
        assert_eq!(segment.old_line(2), Some(7));
        assert_eq!(segment.new_line(0), Some(8));
        assert_eq!(segment.max_line_no(), 10);

        let added = DiffSegment::new(0, SegmentKind::Added, lines("x", 2), None, Some(1));
        assert_eq!(added.old_line(0), None);
        assert_eq!(added.max_line_no(), 2);
    }
}
