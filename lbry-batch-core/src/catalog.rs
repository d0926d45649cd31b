//! File catalog: turns a flat directory listing into publishable items.
//!
//! Only media with an extension in [`MEDIA_EXTENSIONS`] is catalogued. Each
//! item may pick up one description and one thumbnail that share its base
//! name, chosen by the first hit in [`DESCRIPTION_EXTENSIONS`] and
//! [`THUMBNAIL_EXTENSIONS`] respectively. Anything else in the directory is
//! ignored.
//!
//! The catalog is ordered by original file name, which is also the upload
//! order. Two media files sharing a base name (`x.mkv` and `x.mp4`) collapse
//! into one entry: the later one in sort order replaces the earlier one.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

pub const MEDIA_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "mp3", "opus"];
pub const DESCRIPTION_EXTENSIONS: &[&str] = &["txt", "description"];
pub const THUMBNAIL_EXTENSIONS: &[&str] = &["gif", "jpg", "png"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// File name with its final extension removed.
    pub base_name: String,
    pub file_name: String,
    pub extension: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, base_name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.base_name == base_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Splits on the final `.`. Returns `None` for names without one.
pub fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    file_name.rsplit_once('.')
}

/// The name without its final extension; inner dots are kept.
pub fn file_name_no_ext(file_name: &str) -> &str {
    split_extension(file_name).map_or("", |(base, _)| base)
}

fn find_sidecar(names: &HashSet<&str>, base_name: &str, extensions: &[&str]) -> Option<String> {
    extensions
        .iter()
        .map(|ext| format!("{base_name}.{ext}"))
        .find(|candidate| names.contains(candidate.as_str()))
}

/// Builds the catalog from the entry names of one directory.
pub fn build_catalog<S: AsRef<str>>(listing: &[S]) -> Catalog {
    let names: HashSet<&str> = listing.iter().map(AsRef::as_ref).collect();

    let mut media: Vec<(&str, &str, &str)> = Vec::new();
    for name in listing.iter().map(AsRef::as_ref) {
        match split_extension(name) {
            Some((base, ext)) if MEDIA_EXTENSIONS.contains(&ext) => media.push((name, base, ext)),
            _ => debug!(file = %name, "[CATALOG] Ignoring non-media file"),
        }
    }
    media.sort_by(|a, b| a.0.cmp(b.0));

    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(media.len());
    for (file_name, base_name, extension) in media {
        let entry = CatalogEntry {
            base_name: base_name.to_string(),
            file_name: file_name.to_string(),
            extension: extension.to_string(),
            description: find_sidecar(&names, base_name, DESCRIPTION_EXTENSIONS),
            thumbnail: find_sidecar(&names, base_name, THUMBNAIL_EXTENSIONS),
        };

        match entries.iter_mut().find(|e| e.base_name == entry.base_name) {
            Some(existing) => {
                warn!(
                    base_name = %entry.base_name,
                    replaced = %existing.file_name,
                    kept = %entry.file_name,
                    "[CATALOG] Base name collision, later file wins"
                );
                *existing = entry;
            }
            None => entries.push(entry),
        }
    }

    Catalog { entries }
}

/// Names of the regular files directly inside `dir` (no recursion).
pub fn list_directory(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(file = ?raw, "[CATALOG] Skipping non UTF-8 file name"),
        }
    }
    Ok(names)
}
