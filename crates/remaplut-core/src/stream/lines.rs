// crates/remaplut-core/src/stream/lines.rs

use std::io::{self, BufRead};

/// Physical lines of a byte stream, each cut to at most `max_len` content bytes.
///
/// - Content past `max_len` is dropped; it never becomes a line of its own.
/// - A `\n` terminator is kept on the returned line; `\r\n` is returned as `\n`.
/// - The last line may come back without a terminator.
pub struct BoundedLines<R> {
    inner: R,
    max_len: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> BoundedLines<R> {
    pub fn new(inner: R, max_len: usize) -> Self {
        Self {
            inner,
            max_len,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let terminated = self.buf.last() == Some(&b'\n');
                if terminated {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                self.buf.truncate(self.max_len);

                let mut line = Vec::with_capacity(self.buf.len() + 1);
                line.extend_from_slice(&self.buf);
                if terminated {
                    line.push(b'\n');
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
