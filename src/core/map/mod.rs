use std::io::BufRead;

use log::{debug, trace};

use self::{fields::extract_fields, lines::MapLines, section::SectionState};
use crate::core::{error::FdResult, symbols::SymbolRecord};

pub mod fields;
pub mod lines;
pub mod section;

/// Single pass scanner over the lines of a map file.
/// Each line is checked in a fixed order: open, extract, close.
#[derive(Default, Clone, Debug)]
pub struct MapScanner {
    state: SectionState,
    lines: usize,
}

impl MapScanner {
    pub fn new() -> Self {
        Default::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Amount of lines scanned so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn scan_line(&mut self, line: &str) -> Option<SymbolRecord> {
        self.lines += 1;

        let opened = self.state.open(line);
        if opened != self.state {
            debug!("Entering data area at line {}: {}", self.lines, line.trim_end());
        }

        let record = if opened.should_extract(line) {
            let fields = extract_fields(line);
            let record = SymbolRecord::new(fields.name, fields.address);
            trace!("Line {}: {}", self.lines, record);
            Some(record)
        } else {
            None
        };

        self.state = opened.close(line);
        if self.state != opened {
            debug!("Leaving data area at line {}: {}", self.lines, line.trim_end());
        }
        record
    }

    pub fn records<R: BufRead>(self, input: R) -> Records<R> {
        Records {
            scanner: self,
            input: MapLines::new(input),
        }
    }
}

/// Iterator over the symbol records of a map file, in input order
pub struct Records<R> {
    scanner: MapScanner,
    input: MapLines<R>,
}

impl<R> Records<R> {
    pub fn scanner(&self) -> &MapScanner {
        &self.scanner
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = FdResult<SymbolRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.input.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(record) = self.scanner.scan_line(&line) {
                        return Some(Ok(record));
                    }
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
        None
    }
}
