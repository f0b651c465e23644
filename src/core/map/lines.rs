use std::{collections::VecDeque, io::BufRead};

/// Lines of a map file.
/// `\n`, `\r\n` and a lone `\r` all end a line, the terminators are stripped.
pub struct MapLines<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> MapLines<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn fill(&mut self) -> std::io::Result<bool> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(false);
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }

        let text = String::from_utf8(buffer)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        self.pending.extend(text.split('\r').map(str::to_owned));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for MapLines<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
