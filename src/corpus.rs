use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use machine_learning::Corpus;

use crate::error::{AppErr, Result};

/// Loads a labeled corpus laid out as `<root>/<label>/<document>`.
///
/// Every immediate subdirectory of `root` names a language and every regular
/// file inside it is one document of that language, its lines joined by a
/// single space. Directories and files are visited in lexicographic order,
/// which fixes the order labels are first seen in.
///
/// # Errors
/// Returns `AppErr::Io` if a directory or document can't be read, and
/// `AppErr::EmptyCorpus` if no document is found.
pub fn load(root: &Path) -> Result<Corpus> {
    let mut corpus = Corpus::new();

    for label_dir in sorted_entries(root)? {
        if !label_dir.is_dir() {
            warn!("skipping '{}', not a language directory", label_dir.display());
            continue;
        }

        let Some(label) = label_dir.file_name().and_then(|name| name.to_str()) else {
            warn!("skipping '{}', its name is not valid UTF-8", label_dir.display());
            continue;
        };

        let mut documents = 0;
        for path in sorted_entries(&label_dir)? {
            if !path.is_file() {
                warn!("skipping '{}', not a document", path.display());
                continue;
            }

            let text = read_document(&path)?;
            corpus.push(machine_learning::extract_features(&text), label);
            documents += 1;
        }

        debug!("loaded {documents} document(s) of {label:?}");
    }

    if corpus.is_empty() {
        return Err(AppErr::EmptyCorpus {
            path: root.to_path_buf(),
        });
    }

    info!(
        "loaded {} document(s) in {} language(s) from '{}'",
        corpus.len(),
        corpus.labels().len(),
        root.display()
    );

    Ok(corpus)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .map_err(|e| AppErr::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| AppErr::io(dir, e))?;

    paths.sort();
    Ok(paths)
}

fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| AppErr::io(path, e))?;
    Ok(content.lines().collect::<Vec<_>>().join(" "))
}
