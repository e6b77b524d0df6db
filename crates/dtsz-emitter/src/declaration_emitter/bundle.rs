//! Single-file declaration bundles.
//!
//! Every external module of the bundle becomes an ambient module named after
//! its path relative to the common source directory:
//!
//! ```text
//! declare module "lib/util" {
//!     export function helper(): void;
//! }
//! ```
//!
//! Scripts are appended as-is. Import specifiers that resolve into the bundle
//! are rewritten to those module names.

use dtsz_ast::{FileReference, ModifierFlags, NodeData, NodeFlags, NodeIndex, SourceFileData};
use dtsz_common::paths::{
    combine_paths, ensure_relative_specifier, get_directory_path, get_relative_path,
    is_relative_specifier, normalize_path, remove_file_extension,
};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use super::{BundleOutput, DeclarationTransformer};
use crate::diagnostics::DeclarationDiagnostic;
use crate::error::EmitError;

/// Paths the bundler needs from the compilation host.
pub trait ModuleSpecifierHost {
    /// Directory module names are made relative to.
    fn common_source_directory(&self) -> String;

    /// Declaration file written for a source file outside the bundle.
    fn declaration_output_path(&self, source_file: &str) -> String;

    /// Path of the bundle itself. References are made relative to its directory.
    fn bundle_output_path(&self) -> String;
}

/// Host for a bundle whose outside files emit declarations next to their
/// sources.
#[derive(Clone, Debug)]
pub struct DefaultModuleSpecifierHost {
    pub common_source_directory: String,
    pub out_file: String,
}

impl DefaultModuleSpecifierHost {
    pub fn new(common_source_directory: impl Into<String>, out_file: impl Into<String>) -> Self {
        Self {
            common_source_directory: common_source_directory.into(),
            out_file: out_file.into(),
        }
    }
}

impl ModuleSpecifierHost for DefaultModuleSpecifierHost {
    fn common_source_directory(&self) -> String {
        self.common_source_directory.clone()
    }

    fn declaration_output_path(&self, source_file: &str) -> String {
        declaration_file_name(source_file)
    }

    fn bundle_output_path(&self) -> String {
        self.out_file.clone()
    }
}

/// Declaration file written next to `source_file`: `a.ts` becomes `a.d.ts`,
/// `a.mts` becomes `a.d.mts`. Declaration files map to themselves.
#[must_use]
pub fn declaration_file_name(source_file: &str) -> String {
    if is_declaration_file_name(source_file) {
        return source_file.to_string();
    }
    let stem = remove_file_extension(source_file);
    let extension = if source_file.ends_with(".mts") {
        ".d.mts"
    } else if source_file.ends_with(".cts") {
        ".d.cts"
    } else {
        ".d.ts"
    };
    format!("{stem}{extension}")
}

fn is_declaration_file_name(file_name: &str) -> bool {
    file_name.ends_with(".d.ts") || file_name.ends_with(".d.mts") || file_name.ends_with(".d.cts")
}

/// Module names of the files in the bundle being built.
#[derive(Clone, Debug, Default)]
pub(super) struct BundleContext {
    /// Normalized, extensionless source path to module name.
    module_names: FxHashMap<String, String>,
    out_directory: String,
}

impl BundleContext {
    fn module_name(&self, file_name: &str) -> Option<&str> {
        let path = normalize_path(file_name);
        self.module_names
            .get(remove_file_extension(&path))
            .map(String::as_str)
    }

    /// Specifier to write for `specifier` when it resolves to `resolved`.
    /// `None` keeps the specifier as written.
    fn module_specifier(&self, specifier: &str, resolved: Option<&str>) -> Option<String> {
        let resolved = resolved?;
        if let Some(name) = self.module_name(resolved) {
            return Some(name.to_string());
        }
        if !is_relative_specifier(specifier) {
            return None;
        }
        let target = normalize_path(resolved);
        let relative = get_relative_path(&self.out_directory, remove_file_extension(&target));
        Some(ensure_relative_specifier(&relative))
    }
}

impl DeclarationTransformer<'_> {
    /// Specifier of an import, export or module augmentation in the output.
    ///
    /// Any import or export makes the output a module, except inside a
    /// module declaration.
    pub(super) fn rewrite_module_specifier(&mut self, parent: NodeIndex, specifier: NodeIndex) -> NodeIndex {
        if specifier.is_none() {
            return specifier;
        }
        if !matches!(self.arena.data(parent), Some(NodeData::ModuleDeclaration(_))) {
            self.result_has_external_module_indicator = true;
        }
        let Some(bundle) = self.bundle.as_ref() else {
            return specifier;
        };
        let Some(NodeData::StringLiteral { text }) = self.arena.data(specifier) else {
            return specifier;
        };
        let resolved = self
            .resolver
            .get_external_module_file_from_declaration(self.arena, parent);
        let Some(rewritten) = bundle.module_specifier(text, resolved.as_deref()) else {
            return specifier;
        };
        trace!(from = %text, to = %rewritten, "module specifier rewritten");
        self.arena.create_string_literal(&rewritten)
    }

    /// Transform `files` into one declaration file.
    ///
    /// Declaration files among `files` contribute nothing but are not an error.
    #[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
    pub fn transform_bundle(
        &mut self,
        files: &[NodeIndex],
        host: &dyn ModuleSpecifierHost,
    ) -> Result<BundleOutput, EmitError> {
        let mut sources = Vec::with_capacity(files.len());
        for &file in files {
            match self.arena.data(file) {
                Some(NodeData::SourceFile(data)) => sources.push((file, data.clone())),
                _ => return Err(EmitError::NotASourceFile { node: file }),
            }
        }

        let common_directory = normalize_path(&host.common_source_directory());
        let bundle_path = normalize_path(&host.bundle_output_path());
        let out_directory = get_directory_path(&bundle_path).to_string();
        let mut module_names = FxHashMap::default();
        for (_, data) in &sources {
            let path = normalize_path(&data.file_name);
            let name = self
                .resolver
                .get_module_specifier_override(&data.file_name)
                .unwrap_or_else(|| {
                    remove_file_extension(&get_relative_path(&common_directory, &path)).to_string()
                });
            module_names.insert(remove_file_extension(&path).to_string(), name);
        }
        self.bundle = Some(BundleContext {
            module_names,
            out_directory: out_directory.clone(),
        });
        self.is_bundled_emit = true;

        let result = self.transform_bundle_files(&sources, host, &out_directory);
        self.bundle = None;
        self.is_bundled_emit = false;
        let (statements, references, diagnostics) = result?;

        let mut bundle = SourceFileData::new(bundle_path, statements.into());
        bundle.is_declaration_file = true;
        bundle.referenced_files = references.referenced_files.into_iter().map(FileReference::new).collect();
        bundle.type_reference_directives = references.type_references.into_values().collect();
        bundle.lib_reference_directives = references.lib_references.into_values().collect();
        bundle.has_no_default_lib = references.has_no_default_lib;
        let bundle = self.arena.add(NodeData::SourceFile(bundle));
        debug!(diagnostics = diagnostics.len(), "bundle transformed");
        Ok(BundleOutput { bundle, diagnostics })
    }

    fn transform_bundle_files(
        &mut self,
        sources: &[(NodeIndex, SourceFileData)],
        host: &dyn ModuleSpecifierHost,
        out_directory: &str,
    ) -> Result<(Vec<NodeIndex>, BundleReferences, Vec<DeclarationDiagnostic>), EmitError> {
        let mut statements = Vec::new();
        let mut references = BundleReferences::default();
        let mut diagnostics = Vec::new();
        for (file, data) in sources {
            if data.is_declaration_file {
                trace!(file = %data.file_name, "declaration file skipped in bundle");
                continue;
            }
            self.tracker.set_file_name(data.file_name.clone());
            self.begin_file(*file, data);
            references.collect(data, host, out_directory, self.options.no_resolve, |name| {
                self.bundle
                    .as_ref()
                    .is_some_and(|bundle| bundle.module_name(name).is_some())
            });

            if data.is_external_module {
                self.needs_declare = false;
                let body = self.visit_statement_list(&data.statements)?;
                let module_name = self
                    .bundle
                    .as_ref()
                    .and_then(|bundle| bundle.module_name(&data.file_name))
                    .unwrap_or(&data.file_name)
                    .to_string();
                let name = self.arena.create_string_literal(&module_name);
                let block = self.arena.create_module_block(body);
                statements.push(self.arena.create_module_declaration(
                    ModifierFlags::AMBIENT,
                    name,
                    block,
                    NodeFlags::empty(),
                ));
                debug!(file = %data.file_name, module = %module_name, "module wrapped");
            } else {
                self.needs_declare = true;
                statements.extend(self.visit_statement_list(&data.statements)?);
            }
            diagnostics.extend(self.tracker.take_diagnostics());
        }
        Ok((statements, references, diagnostics))
    }
}

/// Reference directives merged across a bundle, in first-seen order.
#[derive(Default)]
struct BundleReferences {
    referenced_files: IndexSet<String>,
    type_references: IndexMap<String, FileReference>,
    lib_references: IndexMap<String, FileReference>,
    has_no_default_lib: bool,
}

impl BundleReferences {
    fn collect(
        &mut self,
        data: &SourceFileData,
        host: &dyn ModuleSpecifierHost,
        out_directory: &str,
        no_resolve: bool,
        in_bundle: impl Fn(&str) -> bool,
    ) {
        self.has_no_default_lib |= data.has_no_default_lib;
        for directive in &data.type_reference_directives {
            self.type_references
                .entry(directive.file_name.clone())
                .or_insert_with(|| directive.clone());
        }
        for directive in &data.lib_reference_directives {
            self.lib_references
                .entry(directive.file_name.clone())
                .or_insert_with(|| directive.clone());
        }
        if no_resolve {
            return;
        }
        let source_directory = get_directory_path(&data.file_name).to_string();
        for reference in &data.referenced_files {
            let target = combine_paths(&source_directory, &reference.file_name);
            if in_bundle(&target) {
                continue;
            }
            let declaration = host.declaration_output_path(&target);
            let relative = get_relative_path(out_directory, &declaration);
            if relative.starts_with("node_modules/") || relative.contains("/node_modules/") {
                continue;
            }
            self.referenced_files.insert(relative);
        }
    }
}
