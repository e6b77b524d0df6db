//! Slash-normalized path helpers.
//!
//! Paths handled here are always `/`-separated strings, the form module
//! specifiers and reference directives use.

/// Replace every backslash with a forward slash.
#[must_use]
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Directory part of a path, without the trailing slash.
///
/// `"src/a/b.ts"` becomes `"src/a"`; a bare file name yields `""`.
#[must_use]
pub fn get_directory_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Known source and declaration extensions, longest first.
const EXTENSIONS: &[&str] = &[
    ".d.ts", ".d.mts", ".d.cts", ".tsx", ".ts", ".mts", ".cts", ".jsx", ".js", ".mjs", ".cjs",
    ".json",
];

/// Strip a known TypeScript or JavaScript extension.
#[must_use]
pub fn remove_file_extension(path: &str) -> &str {
    for ext in EXTENSIONS {
        if let Some(stripped) = path.strip_suffix(ext) {
            return stripped;
        }
    }
    path
}

/// Whether a module specifier starts with `./` or `../` (or is `.`/`..`).
#[must_use]
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

fn components(path: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(out.last(), Some(last) if *last != "..") {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolve `.` and `..` segments and collapse repeated slashes.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let normalized = normalize_slashes(path);
    let rooted = normalized.starts_with('/');
    let joined = components(&normalized).join("/");
    if rooted { format!("/{joined}") } else { joined }
}

/// Join a directory and a relative path, then normalize.
#[must_use]
pub fn combine_paths(directory: &str, relative: &str) -> String {
    if relative.starts_with('/') || directory.is_empty() {
        return normalize_path(relative);
    }
    normalize_path(&format!("{directory}/{relative}"))
}

/// Path of `to` relative to directory `from`, always `/`-separated.
///
/// The result has no leading `./`; callers that need a module specifier add it.
#[must_use]
pub fn get_relative_path(from_directory: &str, to: &str) -> String {
    let from_norm = normalize_path(from_directory);
    let to_norm = normalize_path(to);
    let from_parts = components(&from_norm);
    let to_parts = components(&to_norm);

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    parts.extend(std::iter::repeat_n("..", from_parts.len() - common));
    parts.extend(to_parts[common..].iter().copied());
    parts.join("/")
}

/// Turn a relative path into a module specifier, adding `./` when needed.
#[must_use]
pub fn ensure_relative_specifier(path: &str) -> String {
    if is_relative_specifier(path) {
        path.to_string()
    } else {
        format!("./{path}")
    }
}
