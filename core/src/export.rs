use crate::bundle::{MatrixKind, ResultBundle};
use crate::csv::frequencies_csv;
use crate::options::ProcessingOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: usize,
    pub num_terms: usize,
    pub created_at: String,
    pub version: u32,
    pub options: ProcessingOptions,
}

impl MetaFile {
    pub fn describe(bundle: &ResultBundle, options: &ProcessingOptions) -> Self {
        let created_at = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        Self {
            num_docs: bundle.num_docs(),
            num_terms: bundle.num_terms(),
            created_at,
            version: EXPORT_VERSION,
            options: options.clone(),
        }
    }
}

/// Layout of an export directory.
pub struct ExportPaths {
    pub root: PathBuf,
}

impl ExportPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn matrix(&self, kind: MatrixKind) -> PathBuf { self.root.join(kind.file_name()) }
    pub fn terms(&self) -> PathBuf { self.root.join("terms.csv") }
    pub fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    f.write_all(text.as_bytes())?;
    Ok(())
}

pub fn save_matrix(paths: &ExportPaths, bundle: &ResultBundle, kind: MatrixKind) -> Result<PathBuf> {
    create_dir_all(&paths.root)?;
    let path = paths.matrix(kind);
    write_text(&path, &bundle.to_csv(kind))?;
    Ok(path)
}

pub fn save_terms(paths: &ExportPaths, bundle: &ResultBundle) -> Result<()> {
    create_dir_all(&paths.root)?;
    write_text(&paths.terms(), &frequencies_csv(bundle.vocabulary(), bundle.term_frequencies()))
}

pub fn save_meta(paths: &ExportPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let json = serde_json::to_string_pretty(meta)?;
    write_text(&paths.meta(), &json)
}

pub fn load_meta(paths: &ExportPaths) -> Result<MetaFile> {
    let path = paths.meta();
    let mut f = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}

/// Write the requested matrices, the term listing and `meta.json`.
pub fn save_all(
    paths: &ExportPaths,
    bundle: &ResultBundle,
    kinds: &[MatrixKind],
    options: &ProcessingOptions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(kinds.len() + 2);
    for &kind in kinds {
        written.push(save_matrix(paths, bundle, kind)?);
    }
    save_terms(paths, bundle)?;
    written.push(paths.terms());
    save_meta(paths, &MetaFile::describe(bundle, options))?;
    written.push(paths.meta());
    tracing::debug!(root = %paths.root.display(), files = written.len(), "export written");
    Ok(written)
}
