//! Multi-file declaration emit.
//!
//! Each [`SourceUnit`] owns the arena its tree lives in, so files can be
//! transformed independently: sequentially with a cancellation check between
//! files, or in parallel with rayon when the resolver can be shared across
//! threads. Bundles keep every file in one arena.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, bail};
use dtsz_ast::{NodeArena, NodeData, NodeIndex, print_node};
use dtsz_common::{DeclarationEmitOptions, Diagnostic, DiagnosticCategory};
use dtsz_emitter::{
    DeclarationDiagnostic, DeclarationTransformer, EmitResolver, ModuleSpecifierHost,
    declaration_file_name,
};
use rayon::prelude::*;
use tracing::{debug, info};

/// A parsed and bound source file.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub arena: NodeArena,
    pub file: NodeIndex,
}

impl SourceUnit {
    #[must_use]
    pub fn new(arena: NodeArena, file: NodeIndex) -> Self {
        Self { arena, file }
    }

    /// File name of the root, or `None` when the root is not a source file.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self.arena.data(self.file) {
            Some(NodeData::SourceFile(data)) => Some(&data.file_name),
            _ => None,
        }
    }
}

/// Printed declaration text for one file or bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationFile {
    /// Source file the declarations came from, or the bundle path.
    pub source_file: String,
    /// Where the declaration file is written.
    pub output_path: String,
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl DeclarationFile {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }
}

/// Read emit options from a tsconfig file.
pub fn load_options(path: &Path) -> Result<DeclarationEmitOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    DeclarationEmitOptions::from_tsconfig_json(&text)
        .with_context(|| format!("failed to parse compiler options in {}", path.display()))
}

fn presentation_diagnostics(arena: &NodeArena, diagnostics: &[DeclarationDiagnostic]) -> Vec<Diagnostic> {
    diagnostics.iter().map(|d| d.to_diagnostic(arena)).collect()
}

/// Transform and print one file.
pub fn emit_file(
    unit: &mut SourceUnit,
    resolver: &dyn EmitResolver,
    options: &DeclarationEmitOptions,
) -> Result<DeclarationFile> {
    let Some(source_file) = unit.file_name().map(str::to_owned) else {
        bail!("node {} is not a source file", unit.file.0);
    };
    let output = DeclarationTransformer::new(&mut unit.arena, resolver, options)
        .transform_source_file(unit.file)
        .with_context(|| format!("failed to emit declarations for {source_file}"))?;
    let text = print_node(&unit.arena, output.source_file);
    debug!(file = %source_file, diagnostics = output.diagnostics.len(), "declarations printed");
    Ok(DeclarationFile {
        output_path: declaration_file_name(&source_file),
        diagnostics: presentation_diagnostics(&unit.arena, &output.diagnostics),
        source_file,
        text,
    })
}

/// Emit every unit in order.
///
/// `cancelled` is checked before each file; once set, the run stops with an
/// error and the files already emitted are discarded.
#[tracing::instrument(level = "debug", skip_all, fields(files = units.len()))]
pub fn emit_declarations(
    units: &mut [SourceUnit],
    resolver: &dyn EmitResolver,
    options: &DeclarationEmitOptions,
    cancelled: &AtomicBool,
) -> Result<Vec<DeclarationFile>> {
    let total = units.len();
    let mut outputs = Vec::with_capacity(total);
    for unit in units.iter_mut() {
        if cancelled.load(Ordering::Relaxed) {
            bail!("declaration emit cancelled after {} of {total} files", outputs.len());
        }
        outputs.push(emit_file(unit, resolver, options)?);
    }
    info!(files = total, "declaration emit finished");
    Ok(outputs)
}

/// Emit every unit on the rayon pool. Output order matches `units`.
#[tracing::instrument(level = "debug", skip_all, fields(files = units.len()))]
pub fn emit_declarations_parallel<R>(
    units: &mut [SourceUnit],
    resolver: &R,
    options: &DeclarationEmitOptions,
) -> Result<Vec<DeclarationFile>>
where
    R: EmitResolver + Sync,
{
    let outputs = units
        .par_iter_mut()
        .map(|unit| emit_file(unit, resolver, options))
        .collect::<Result<Vec<_>>>()?;
    info!(files = outputs.len(), "parallel declaration emit finished");
    Ok(outputs)
}

/// Emit `files`, all held in `arena`, as one declaration bundle.
pub fn emit_bundle(
    arena: &mut NodeArena,
    files: &[NodeIndex],
    resolver: &dyn EmitResolver,
    options: &DeclarationEmitOptions,
    host: &dyn ModuleSpecifierHost,
) -> Result<DeclarationFile> {
    let bundle_path = host.bundle_output_path();
    let output = DeclarationTransformer::new(arena, resolver, options)
        .transform_bundle(files, host)
        .with_context(|| format!("failed to emit declaration bundle {bundle_path}"))?;
    let text = print_node(arena, output.bundle);
    debug!(bundle = %bundle_path, files = files.len(), "bundle printed");
    Ok(DeclarationFile {
        source_file: bundle_path.clone(),
        output_path: bundle_path,
        text,
        diagnostics: presentation_diagnostics(arena, &output.diagnostics),
    })
}

/// Write each declaration file below `root`. Returns the written paths.
///
/// Relative output paths are joined onto `root`; absolute ones are written
/// where they point.
pub fn write_declarations(files: &[DeclarationFile], root: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = files.iter().map(|file| root.join(&file.output_path)).collect();
    files
        .par_iter()
        .zip(paths.par_iter())
        .try_for_each(|(file, path)| -> Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            std::fs::write(path, &file.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(())
        })?;
    Ok(paths)
}

/// Every diagnostic of `files` as a pretty-printed JSON array.
pub fn diagnostics_report(files: &[DeclarationFile]) -> Result<String> {
    let diagnostics: Vec<&Diagnostic> = files.iter().flat_map(|file| &file.diagnostics).collect();
    serde_json::to_string_pretty(&diagnostics).context("failed to serialize diagnostics")
}
