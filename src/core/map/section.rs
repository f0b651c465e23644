/// Areas whose symbols end up in the sym file
pub const DATA_AREAS: [&str; 3] = ["_DATA", "_HEADER", "_INITIALIZED"];

/// Where the scanner currently is in the map file
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SectionState {
    #[default]
    Outside,
    InsideDataBlock,
}

impl SectionState {
    pub fn is_inside(&self) -> bool {
        *self == Self::InsideDataBlock
    }

    /// Apply the opening rule of a line
    pub fn open(self, line: &str) -> Self {
        if opens_data_block(line) {
            Self::InsideDataBlock
        } else {
            self
        }
    }

    /// Apply the closing rule of a line
    pub fn close(self, line: &str) -> Self {
        if self.is_inside() && closes_data_block(line) {
            Self::Outside
        } else {
            self
        }
    }

    pub fn should_extract(&self, line: &str) -> bool {
        self.is_inside() && has_symbol_marker(line)
    }
}

pub fn opens_data_block(line: &str) -> bool {
    DATA_AREAS.iter().any(|area| line.starts_with(area))
}

/// Any other area header ends a data block
pub fn closes_data_block(line: &str) -> bool {
    line.starts_with('_') && !opens_data_block(line)
}

/// A symbol line has its first underscore somewhere after column 0.
/// Area headers start with the underscore and never qualify.
pub fn has_symbol_marker(line: &str) -> bool {
    matches!(line.find('_'), Some(index) if index > 0)
}
