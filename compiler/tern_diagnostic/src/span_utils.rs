//! Line and column lookup for spans.
//!
//! Spans are byte offsets; diagnostics are rendered as `[line:column]`.
//! [`LineOffsetTable`] pre-computes line starts so each lookup is a binary
//! search instead of a scan from the start of the source.

use tern_ir::Span;

/// Pre-computed byte offsets of every line start.
///
/// ```
/// use tern_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "let a = 1\nlet b = 2";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (2, 5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(to_u32(i + 1));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        to_u32(line_idx) + 1
    }

    /// 1-based `(line, column)` for `offset`. Columns count characters, not
    /// bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(end.saturating_sub(line_start), |s| s.chars().count());
        (line, to_u32(col) + 1)
    }

    /// `(line, column)` of the start of `span`.
    pub fn span_start(&self, source: &str, span: Span) -> (u32, u32) {
        self.offset_to_line_col(source, span.start)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let source = "print 1";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.offset_to_line_col(source, 6), (1, 7));
    }

    #[test]
    fn offsets_on_newline_belong_to_previous_line() {
        let source = "ab\ncd";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
        assert_eq!(table.offset_to_line_col(source, 3), (2, 1));
    }

    #[test]
    fn columns_count_characters() {
        let source = "\"héllo\" + x";
        let table = LineOffsetTable::build(source);
        // `+` is byte 9 but character 8.
        assert_eq!(table.offset_to_line_col(source, 9), (1, 9));
    }

    #[test]
    fn offset_past_end_clamps() {
        let source = "x";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 50), (1, 2));
    }
}
