//! Builds a raw corpus from a directory of text files.
//!
//! This sits outside the scoring path: the search engine only ever sees the
//! `(name, text)` pairs returned here.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::document::decode_content;
use crate::types::identifiers::DocumentName;

pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List every regular file in `dir` with the given extension, sorted by file
/// name, and read it as UTF-8.
///
/// A file that cannot be read, or is not valid UTF-8, is kept with empty
/// text so it still counts toward the corpus size.
pub fn load_directory(dir: &Path, extension: &str) -> Result<Vec<(String, String)>, LoaderError> {
    let entries = fs::read_dir(dir).map_err(|source| LoaderError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoaderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let name = match DocumentName::from_path(&path) {
            Ok(name) => name,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping file with unusable name");
                continue;
            }
        };
        let text = read_text(&path);
        documents.push((name.as_str().to_string(), text));
    }

    debug!(
        dir = %dir.display(),
        extension,
        documents = documents.len(),
        "Loaded corpus directory"
    );

    Ok(documents)
}

fn read_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match decode_content(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "File is not valid UTF-8, indexing as empty");
                String::new()
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read file, indexing as empty");
            String::new()
        }
    }
}
