use std::collections::VecDeque;

/// Splits the byte stream coming from the instrument into text lines.
///
/// Bytes after the last `\n` stay buffered until their terminator arrives.
#[derive(Debug, Default)]
pub struct LineFramer {
    buffer: VecDeque<u8>,
}

impl LineFramer {
    pub fn new() -> LineFramer {
        LineFramer {
            buffer: VecDeque::new(),
        }
    }

    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend(data);
    }

    /// Returns the oldest complete line without its `\r\n` or `\n`.
    /// Leaves the buffer untouched when no line is complete.
    pub fn next_line(&mut self) -> Option<String> {
        let end_index = find_terminator(&self.buffer)?;
        let mut line = self.buffer.drain(..=end_index).collect::<Vec<_>>();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    /// Yields every complete line currently buffered, oldest first.
    pub fn drain_lines(&mut self) -> impl Iterator<Item = String> + '_ {
        std::iter::from_fn(move || self.next_line())
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn pending_bytes(&self) -> Vec<u8> {
        self.buffer.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

fn find_terminator(buffer: &VecDeque<u8>) -> Option<usize> {
    buffer.iter().position(|e| *e == b'\n')
}
