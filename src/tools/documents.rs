use super::run_checked;
use crate::config::DocumentConfig;
use crate::error::ToolError;
use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Converts Word documents to PDF and merges them, in input order, into `output`
///
/// Missing files and files that are not `.doc`/`.docx` are skipped with a
/// warning. Intermediate PDFs live in a temporary directory removed on return.
pub fn convert_and_merge(
    inputs: &[PathBuf],
    output: &Path,
    config: &DocumentConfig,
) -> Result<PathBuf, ToolError> {
    let scratch = tempfile::tempdir()?;
    let mut converted = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        if !input.exists() {
            ::log::warn!("File not found, skipping: {}", input.display());
            continue;
        }
        if !is_word_document(input) {
            ::log::warn!("Not a Word document, skipping: {}", input.display());
            continue;
        }

        // One directory per input so equal file names cannot collide
        let out_dir = scratch.path().join(index.to_string());
        std::fs::create_dir_all(&out_dir)?;
        converted.push(word_to_pdf(input, &out_dir, config)?);
    }

    if converted.is_empty() {
        return Err(ToolError::NothingToMerge);
    }

    let pages = merge_pdfs(&converted, output)?;
    ::log::info!(
        "Merged {} documents ({} pages) into {}",
        converted.len(),
        pages,
        output.display()
    );
    Ok(output.to_path_buf())
}

pub fn is_word_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("doc") || ext.eq_ignore_ascii_case("docx"))
}

/// Converts one document with a headless LibreOffice into `out_dir`
fn word_to_pdf(input: &Path, out_dir: &Path, config: &DocumentConfig) -> Result<PathBuf, ToolError> {
    run_checked(
        Command::new(&config.libreoffice_path)
            .args(["--headless", "--convert-to", "pdf", "--outdir"])
            .arg(out_dir)
            .arg(input),
    )?;

    Ok(converted_pdf_path(input, out_dir))
}

/// Where LibreOffice writes the PDF for `input`: the file stem plus `.pdf`
///
/// Dots inside the stem are kept, so `report.v2.docx` becomes `report.v2.pdf`.
fn converted_pdf_path(input: &Path, out_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".pdf");
    out_dir.join(name)
}

/// Merges existing PDFs into `output` and returns the merged page count
///
/// Missing inputs are skipped with a warning.
pub fn merge_pdfs(inputs: &[PathBuf], output: &Path) -> Result<usize, ToolError> {
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for input in inputs {
        if !input.exists() {
            ::log::warn!("File not found, skipping: {}", input.display());
            continue;
        }

        let mut doc = Document::load(input).map_err(pdf_error)?;
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        let mut pages = Vec::new();
        for page_id in doc.get_pages().into_values() {
            let mut page = doc
                .get_object(page_id)
                .and_then(Object::as_dict)
                .map_err(pdf_error)?
                .clone();
            for key in INHERITABLE {
                if !page.has(key) {
                    if let Some(value) = inherited(&doc, &page, key) {
                        page.set(key, value);
                    }
                }
            }
            pages.push((page_id, page));
        }

        objects.extend(doc.objects);
        for (page_id, page) in pages {
            objects.insert(page_id, Object::Dictionary(page));
            page_ids.push(page_id);
        }
    }

    if page_ids.is_empty() {
        return Err(ToolError::NothingToMerge);
    }

    let mut merged = Document::with_version("1.5");
    merged.max_id = max_id;
    let pages_id = merged.new_object_id();

    for (id, object) in objects {
        // The old page trees and catalogs are replaced below
        if is_type(&object, b"Catalog") || is_type(&object, b"Pages") {
            continue;
        }
        merged.objects.insert(id, object);
    }
    for page_id in &page_ids {
        if let Some(Object::Dictionary(page)) = merged.objects.get_mut(page_id) {
            page.set("Parent", pages_id);
        }
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        }),
    );
    let catalog_id = merged.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    merged.trailer.set("Root", catalog_id);

    merged.renumber_objects();
    merged.compress();
    merged.save(output).map_err(pdf_error)?;

    Ok(page_ids.len())
}

/// Looks `key` up in the ancestors of a page
fn inherited(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    while let Some(id) = parent {
        let node = doc.get_object(id).and_then(Object::as_dict).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}

fn is_type(object: &Object, expected: &[u8]) -> bool {
    object
        .as_dict()
        .and_then(|dict| dict.get(b"Type"))
        .and_then(Object::as_name)
        .is_ok_and(|name| name == expected)
}

fn pdf_error(error: impl std::fmt::Display) -> ToolError {
    ToolError::Pdf(error.to_string())
}
