use std::{
    io::{self, BufRead},
    path::Path,
};

use gloc_ports::measurement::LineCounter;
use gloc_shared_kernel::{InfrastructureError, LineCount, Result};

use crate::persistence::FileReader;

/// Counts lines by scanning raw bytes; `\n`, `\r\n` and a lone `\r` each end a line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteLineCounter;

impl ByteLineCounter {
    pub fn new() -> Self {
        Self
    }
}

impl LineCounter for ByteLineCounter {
    fn count_lines(&self, path: &Path) -> Result<LineCount> {
        let read_err = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };
        let reader = FileReader::open_buffered(path).map_err(read_err)?;
        Ok(count_lines(reader).map_err(read_err)?)
    }
}

/// Number of lines in `reader`.
///
/// A trailing terminator does not open an extra empty line, while a final
/// unterminated segment still counts. Empty input has zero lines.
pub fn count_lines<R: BufRead>(mut reader: R) -> io::Result<LineCount> {
    let mut state = Terminators::default();
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if chunk.is_empty() {
            break;
        }
        state.feed(chunk);
        let len = chunk.len();
        reader.consume(len);
    }
    Ok(state.finish())
}

#[derive(Debug, Default)]
struct Terminators {
    lines: usize,
    // A `\r` ended the previous chunk; the next byte decides whether it was `\r\n`.
    pending_cr: bool,
    last: Option<u8>,
}

impl Terminators {
    fn feed(&mut self, chunk: &[u8]) {
        let Some(&last) = chunk.last() else {
            return;
        };

        let mut lone_cr = usize::from(self.pending_cr && chunk[0] != b'\n');
        for idx in memchr::memchr_iter(b'\r', chunk) {
            if chunk.get(idx + 1).is_some_and(|&next| next != b'\n') {
                lone_cr += 1;
            }
        }

        self.lines += bytecount::count(chunk, b'\n') + lone_cr;
        self.pending_cr = last == b'\r';
        self.last = Some(last);
    }

    fn finish(self) -> LineCount {
        let mut lines = self.lines + usize::from(self.pending_cr);
        if self.last.is_some_and(|b| b != b'\n' && b != b'\r') {
            lines += 1;
        }
        LineCount::new(lines)
    }
}
