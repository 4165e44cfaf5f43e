//! Convert operation - turn one SVG file into a component module.

use std::path::Path;

use eyre::{Context, Result};
use svgjsx_codegen::{Indent, TemplateOptions};
use svgjsx_convert::MarkupConverter;
use svgjsx_core::{Extension, FileStore, format_file_name, resolve_distinct_path};

use crate::reports::ConvertReport;

/// Options for the convert operation.
#[derive(Debug, Clone, Copy)]
pub struct ConvertRequest<'a> {
    /// The markup file to convert.
    pub source: &'a Path,
    pub extension: Extension,
    /// Directory for the component; defaults to the source's directory.
    pub out_dir: Option<&'a Path>,
    /// Build the component without writing or deleting anything.
    pub dry_run: bool,
    /// Remove the source once the component is written.
    pub delete_source: bool,
    pub import_react: bool,
    pub indent: Indent,
}

/// Execute the convert operation.
///
/// Nothing is written when the markup fails to convert, and the source is
/// only removed after the component has been written successfully.
pub fn convert(
    request: &ConvertRequest,
    store: &dyn FileStore,
    converter: &dyn MarkupConverter,
) -> Result<ConvertReport> {
    let source = request.source;
    let markup = store
        .read_to_string(source)
        .wrap_err("Failed to read source file")?;

    let fragment = converter
        .convert(&source.display().to_string(), &markup)
        .map_err(|e| eyre::Report::new(*e))?;

    let raw_name = source
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let name = format_file_name(&raw_name, request.extension);
    let warnings: Vec<String> = name.warning().map(ToString::to_string).into_iter().collect();

    let dir = match request.out_dir {
        Some(dir) => dir,
        None => source.parent().unwrap_or(Path::new("")),
    };
    let target = resolve_distinct_path(&dir.join(name.file_name()), store)
        .wrap_err("Failed to choose a target path")?;

    let content = TemplateOptions::new(request.extension.is_typed())
        .import_react(request.import_react)
        .indent(request.indent)
        .embed(name.component(), &fragment);

    let mut report = ConvertReport {
        source: source.to_path_buf(),
        target,
        component: name.component().to_string(),
        extension: request.extension,
        warnings,
        content,
        written: false,
        source_deleted: false,
    };

    if request.dry_run {
        tracing::debug!(path = %report.target.display(), "dry run, nothing written");
        return Ok(report);
    }

    store
        .write(&report.target, report.content.as_bytes())
        .wrap_err("Failed to write component")?;
    report.written = true;
    tracing::info!(source = %source.display(), path = %report.target.display(), "wrote component");

    if request.delete_source {
        store
            .remove(source)
            .wrap_err("Component written, but the source file could not be removed")?;
        report.source_deleted = true;
    }

    Ok(report)
}
