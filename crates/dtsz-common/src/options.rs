//! Declaration emit options.
//!
//! Options deserialize from the `compilerOptions` object of a tsconfig-style
//! document. Unknown keys are ignored so a full tsconfig can be passed as-is.

use serde::Deserialize;

/// Options that change what the declaration transformer produces.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationEmitOptions {
    /// `null` and `undefined` are distinct types. When off, both widen to `any`.
    pub strict_null_checks: bool,
    /// Every fallback to inference becomes a blocking diagnostic.
    pub isolated_declarations: bool,
    /// Drop declarations marked `@internal` in their documentation comment.
    pub strip_internal: bool,
    /// Do not emit `/// <reference path>` directives for referenced files.
    pub no_resolve: bool,
    /// Keep the multi-line hint of reused type literals.
    pub preserve_type_literal_layout: bool,
    /// Bundle output path. Set when emitting a single declaration bundle.
    pub out_file: Option<String>,
}

impl Default for DeclarationEmitOptions {
    fn default() -> Self {
        Self {
            strict_null_checks: true,
            isolated_declarations: false,
            strip_internal: false,
            no_resolve: false,
            preserve_type_literal_layout: false,
            out_file: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfigDocument {
    #[serde(default)]
    compiler_options: Option<DeclarationEmitOptions>,
}

impl DeclarationEmitOptions {
    /// Read options from the `compilerOptions` of a tsconfig JSON document.
    ///
    /// A document without `compilerOptions` yields the defaults.
    pub fn from_tsconfig_json(text: &str) -> Result<Self, serde_json::Error> {
        let document: TsConfigDocument = serde_json::from_str(text)?;
        Ok(document.compiler_options.unwrap_or_default())
    }

    /// `outFile` is set, so every module is wrapped into one bundle.
    #[must_use]
    pub fn is_bundle(&self) -> bool {
        self.out_file.is_some()
    }
}
