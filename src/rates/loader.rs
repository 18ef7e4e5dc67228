//! Load document text pages exported by an external PDF-to-text tool
//!
//! Accepts either a single text file with pages separated by form feeds
//! (the separator `pdftotext` emits) or a directory of `*.txt` page files.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{GrowthError, Result};

/// Page separator emitted by common PDF-to-text converters
pub const PAGE_SEPARATOR: char = '\x0c';

/// Split a text export into pages
///
/// Empty pages left by a trailing separator are dropped. Text without any
/// separator is a single page.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_SEPARATOR).map(str::to_string).collect();
    while pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

/// Load pages from a text file or a directory of page files
pub fn load_pages<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if path.is_dir() {
        load_page_dir(path)
    } else {
        let text = fs::read_to_string(path)?;
        let pages = split_pages(&text);
        debug!("Loaded {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }
}

/// Load pages from any reader (e.g., stdin, request body)
pub fn load_pages_from_reader<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(split_pages(&text))
}

/// Each `*.txt` file is one page, ordered by file name
fn load_page_dir(dir: &Path) -> Result<Vec<String>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(GrowthError::NoPages(dir.to_path_buf()));
    }

    files.sort();
    debug!("Loading {} page files from {}", files.len(), dir.display());

    files
        .iter()
        .map(|f| fs::read_to_string(f).map_err(GrowthError::from))
        .collect()
}
