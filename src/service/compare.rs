use crate::models::error::{BackupError, Result};
use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 8192;

/// Byte-for-byte equality of two files. Never looks at timestamps.
pub fn files_identical(left: &Path, right: &Path) -> Result<bool> {
    compare(left, right).map_err(|cause| BackupError::FileCompare {
        left: left.to_path_buf(),
        right: right.to_path_buf(),
        cause,
    })
}

fn compare(left: &Path, right: &Path) -> io::Result<bool> {
    let left_file = fs::File::open(left)?;
    let right_file = fs::File::open(right)?;

    // Differing lengths can never compare equal
    if left_file.metadata()?.len() != right_file.metadata()?.len() {
        return Ok(false);
    }

    readers_identical(BufReader::new(left_file), BufReader::new(right_file))
}

fn readers_identical<L: Read, R: Read>(mut left: L, mut right: R) -> io::Result<bool> {
    let mut left_buffer = [0; CHUNK_SIZE];
    let mut right_buffer = [0; CHUNK_SIZE];
    loop {
        let count = read_full(&mut left, &mut left_buffer)?;
        if read_full(&mut right, &mut right_buffer[..count])? != count {
            return Ok(false);
        }
        if left_buffer[..count] != right_buffer[..count] {
            return Ok(false);
        }
        if count == 0 {
            // Left is exhausted; equal only if right is too
            return Ok(read_full(&mut right, &mut right_buffer[..1])? == 0);
        }
    }
}

/// Fills `buffer` unless the reader hits EOF first; returns the bytes read.
fn read_full<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(count) => filled += count,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
