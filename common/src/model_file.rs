//! Discovery of GGUF model files.
//!
use crate::constants::MODEL_SUFFIX;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::os::unix::fs::MetadataExt;

#[derive(Clone, Debug, PartialEq)]
pub struct ModelFile {
    pub name: String,
    pub path: Utf8PathBuf,
    pub size: u64,
    pub mtime: i64,
}

pub type ModelList = Vec<ModelFile>;

/// Returns every GGUF file sitting directly inside the given directory,
/// sorted by name. A missing directory or one with no matches gives an empty
/// list: whether that's a problem is for the caller to decide.
///
pub fn model_files(dir: &Utf8Path) -> anyhow::Result<ModelList> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut models = ModelList::new();

    for entry in dir.read_dir_utf8()? {
        let path = entry?.into_path();

        if is_model_file(&path) {
            models.push(details_of(path)?);
        }
    }

    models.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(models)
}

fn is_model_file(path: &Utf8Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MODEL_SUFFIX))
}

fn details_of(path: Utf8PathBuf) -> anyhow::Result<ModelFile> {
    let metadata = fs::metadata(&path)?;

    Ok(ModelFile {
        name: path.file_name().unwrap_or_default().to_string(),
        path,
        size: metadata.size(),
        mtime: metadata.mtime(),
    })
}
