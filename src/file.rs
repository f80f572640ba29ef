// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use zip::{CompressionMethod, ZipWriter, result::ZipError, write::SimpleFileOptions};

use crate::error::{Error, Result};

static DAY_PAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^day-[0-9]+\.html$").unwrap());

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

/// Create parent dirs as needed, then create/overwrite `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Create/overwrite a deflated archive holding `entries` as `(name, text)`,
/// stored in name order.
pub fn write_zip(path: &Path, entries: &[(String, String)]) -> Result<()> {
    ensure_parent(path)?;
    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let zip_err = |source: ZipError| Error::Zip { path: path.to_path_buf(), source };

    let mut sorted: Vec<&(String, String)> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(file);
    for (name, contents) in sorted {
        zip.start_file(name.as_str(), options).map_err(zip_err)?;
        zip.write_all(contents.as_bytes()).map_err(|e| Error::io(path, e))?;
    }
    zip.finish().map_err(zip_err)?;
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a generated page; invalid UTF-8 is replaced rather than rejected.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

pub fn is_day_page_name(name: &str) -> bool {
    DAY_PAGE.is_match(name)
}

/// `day-NN.html` files directly inside `dir`, sorted by name.
/// A missing directory yields an empty list.
pub fn list_day_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        let named = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(is_day_page_name);
        if named {
            pages.push(path);
        }
    }
    pages.sort();
    Ok(pages)
}
