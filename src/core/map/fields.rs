use std::ops::Range;

/// Character columns holding the address of a symbol line
pub const ADDRESS_COLUMNS: Range<usize> = 0..13;
/// Character columns holding the name of a symbol line
pub const NAME_COLUMNS: Range<usize> = 15..48;

/// The two fixed-width fields of a map line, trimmed
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fields<'a> {
    pub address: &'a str,
    pub name: &'a str,
}

/// Cut a character range out of a line.
/// Ranges past the end of the line are truncated, possibly to an empty string.
pub fn column(line: &str, range: Range<usize>) -> &str {
    let byte_offset = |index: usize| {
        line.char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len())
    };
    let start = byte_offset(range.start);
    let end = byte_offset(range.end.max(range.start));
    &line[start..end]
}

pub fn extract_fields(line: &str) -> Fields<'_> {
    Fields {
        address: column(line, ADDRESS_COLUMNS).trim(),
        name: column(line, NAME_COLUMNS).trim(),
    }
}
