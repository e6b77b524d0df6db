//! Tests for loading declaration emit options from tsconfig JSON.

use dtsz_common::DeclarationEmitOptions;

#[test]
fn defaults_enable_strict_null_checks() {
    let options = DeclarationEmitOptions::default();
    assert!(options.strict_null_checks);
    assert!(!options.isolated_declarations);
    assert!(!options.is_bundle());
}

#[test]
fn reads_compiler_options_and_ignores_unknown_keys() {
    let text = r#"{
        "compilerOptions": {
            "strictNullChecks": false,
            "isolatedDeclarations": true,
            "stripInternal": true,
            "outFile": "dist/bundle.d.ts",
            "target": "es2022"
        },
        "include": ["src"]
    }"#;
    let options = DeclarationEmitOptions::from_tsconfig_json(text).expect("valid tsconfig");
    assert!(!options.strict_null_checks);
    assert!(options.isolated_declarations);
    assert!(options.strip_internal);
    assert_eq!(options.out_file.as_deref(), Some("dist/bundle.d.ts"));
    assert!(options.is_bundle());
}

#[test]
fn missing_compiler_options_yields_defaults() {
    let options = DeclarationEmitOptions::from_tsconfig_json(r#"{ "files": [] }"#)
        .expect("valid tsconfig");
    assert_eq!(options, DeclarationEmitOptions::default());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(DeclarationEmitOptions::from_tsconfig_json("{ compilerOptions: ").is_err());
}
