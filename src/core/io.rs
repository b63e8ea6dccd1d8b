use crate::core::error::{Result, StatsError};
use memchr::memchr_iter;
use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::path::Path;

/// Read-only view of an input file. Zero-length files are not mapped.
pub struct MmapSource {
    mmap: Option<Mmap>,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let unreadable = |source: io::Error| StatsError::UnreadableInput {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unreadable)?;
        let len = file.metadata().map_err(unreadable)?.len();
        if len == 0 {
            return Ok(Self { mmap: None });
        }
        // SAFETY: read-only file mapping.
        let mmap = unsafe { Mmap::map(&file) }.map_err(unreadable)?;
        Ok(Self { mmap: Some(mmap) })
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

/// Splits a buffer on `\n`, yielding `(line_number, line)` with 1-based line
/// numbers. The terminator is not included; `\r` is left for the caller.
pub struct Lines<'a> {
    data: &'a [u8],
    ends: memchr::Memchr<'a>,
    pos: usize,
    line: usize,
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            ends: memchr_iter(b'\n', data),
            pos: 0,
            line: 0,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let start = self.pos;
        let end = match self.ends.next() {
            Some(nl) => {
                self.pos = nl + 1;
                nl
            }
            None => {
                self.pos = self.data.len();
                self.data.len()
            }
        };
        self.line += 1;
        Some((self.line, &self.data[start..end]))
    }
}
