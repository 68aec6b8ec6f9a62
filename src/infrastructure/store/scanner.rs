use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::store::matcher::Matcher;
use crate::infrastructure::store::rewriter::rewrite;

fn open_for_read(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| AppError::StoreAccess(format!("{}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Lookup pass: true as soon as one line holds a bounded occurrence of
/// `value`. A missing or unreadable store propagates as an error, never as
/// "not found".
pub fn find(path: &Path, value: &str) -> Result<bool> {
    let matcher = Matcher::new(value)?;
    for line in open_for_read(path)?.lines() {
        let line = line.map_err(|e| AppError::StoreAccess(e.to_string()))?;
        if matcher.is_match(&line) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rename pass: two phases. The first reads the whole store, rewriting
/// flagged lines into an output buffer and normalizing every line ending to
/// CRLF. The second truncates and rewrites the file, and runs only when at
/// least one line was flagged; a read failure therefore never leaves a
/// partial write behind. Returns whether the store was rewritten.
pub fn rename(path: &Path, origin: &str, target: &str) -> Result<bool> {
    let matcher = Matcher::new(origin)?;
    let mut output = String::new();
    let mut updated = false;
    for line in open_for_read(path)?.lines() {
        let line = line.map_err(|e| AppError::StoreAccess(e.to_string()))?;
        if matcher.is_match(&line) {
            output.push_str(&rewrite(&line, origin, target));
            updated = true;
        } else {
            output.push_str(&line);
        }
        output.push_str("\r\n");
    }
    if updated {
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| AppError::StoreWrite(format!("{}: {}", path.display(), e)))?;
        file.write_all(output.as_bytes())
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;
        file.flush()
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;
    }
    Ok(updated)
}
