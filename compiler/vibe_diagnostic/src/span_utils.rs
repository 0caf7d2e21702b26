//! Line and column lookup for diagnostics.

/// Byte offset of every line start, for O(log L) line lookups.
///
/// ```
/// use vibe_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "def f\n  x\nend";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 8), (2, 3));
/// assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[0] == 0`; `offsets[n]` is the byte after the n-th newline.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "sources are limited to u32 offsets"
                )]
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)`; the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get((line - 1) as usize).copied().unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> &'s str {
        let Some(&start) = line.checked_sub(1).and_then(|i| self.offsets.get(i as usize)) else {
            return "";
        };
        let end = self
            .offsets
            .get(line as usize)
            .map_or(source.len(), |&next| next as usize - 1);
        let text = source.get(start as usize..end).unwrap_or("");
        text.strip_suffix('\r').unwrap_or(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_lookup() {
        let source = "a\nbb\n\nccc";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(2), 2);
        assert_eq!(table.line_from_offset(5), 3);
        assert_eq!(table.line_from_offset(6), 4);
    }

    #[test]
    fn test_columns_count_chars() {
        let source = "x = \"héllo\" + y";
        let table = LineOffsetTable::build(source);
        // `+` sits after a two-byte `é`.
        let plus = u32::try_from(source.find('+').unwrap_or(0)).unwrap_or(0);
        assert_eq!(table.offset_to_line_col(source, plus), (1, 13));
    }

    #[test]
    fn test_line_text() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), "first");
        assert_eq!(table.line_text(source, 2), "second");
        assert_eq!(table.line_text(source, 3), "third");
        assert_eq!(table.line_text(source, 9), "");
        assert_eq!(table.line_text(source, 0), "");
    }

    #[test]
    fn test_offset_at_end_of_input() {
        let source = "if x\n";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 5), (2, 1));
    }
}
