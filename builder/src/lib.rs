//! Document collection for the `termdoc` command line tool.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use termdoc_core::{Document, ProcessingOptions};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct InputDoc {
    title: String,
    #[serde(alias = "body")]
    text: String,
}

impl From<InputDoc> for Document {
    fn from(doc: InputDoc) -> Self {
        Document::new(doc.title, doc.text)
    }
}

pub fn options_from_flags(keep_stopwords: bool, stem: bool, case_sensitive: bool, exclude: &str) -> ProcessingOptions {
    ProcessingOptions::new()
        .with_remove_stopwords(!keep_stopwords)
        .with_stemming(stem)
        .with_case_sensitive(case_sensitive)
        .with_exclude_list(exclude)
}

fn is_input_file(p: &Path) -> bool {
    matches!(p.extension().and_then(|s| s.to_str()), Some("txt" | "json" | "jsonl"))
}

/// Gather documents from a file or a directory tree.
///
/// `.txt` files become one document titled by the file name without the
/// extension; `.json` holds one object or an array of `{title, text}`;
/// `.jsonl` holds one object per line. Blank documents are skipped.
pub fn collect_documents<P: AsRef<Path>>(input: P) -> Result<Vec<Document>> {
    let input_path = input.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && is_input_file(p) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    } else {
        anyhow::bail!("input path {} does not exist", input_path.display());
    }

    let mut docs = Vec::new();
    for file in files {
        match file.extension().and_then(|s| s.to_str()) {
            Some("jsonl") => read_jsonl(&file, &mut docs)?,
            Some("json") => read_json(&file, &mut docs)?,
            _ => read_text(&file, &mut docs)?,
        }
    }
    let before = docs.len();
    docs.retain(|d| !d.is_blank());
    if docs.len() < before {
        tracing::debug!(skipped = before - docs.len(), "skipped blank documents");
    }
    Ok(docs)
}

fn read_text(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let title = file.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    docs.push(Document::new(title, text));
    Ok(())
}

fn read_jsonl(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", file.display(), n + 1))?;
        docs.push(doc.into());
    }
    Ok(())
}

fn read_json(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                docs.push(doc.into());
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            docs.push(doc.into());
        }
        _ => tracing::warn!(file = %file.display(), "ignoring JSON that is neither an object nor an array"),
    }
    Ok(())
}
