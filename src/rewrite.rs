use crate::error::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::{Component, Path};

/// Matches `#include "@/<rest>"`. The marker must sit immediately after the
/// opening quote; `@/` anywhere else in a line is not an include target.
static INCLUDE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#include(\s+)"@/([^"]+)""#).expect("include pattern is valid"));

/// Compute the relative path from `from_dir` to `to_path` as an include
/// string: the longest common ancestor is found, then `..` once per level of
/// `from_dir` below it, then the remaining segments down to `to_path`.
///
/// The comparison is lexical (`.` dropped, `..` folded), so the target does
/// not have to exist. Segments are always joined with `/`.
pub fn relative_include(from_dir: &Path, to_path: &Path) -> String {
    let from = normal_components(from_dir);
    let to = normal_components(to_path);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::new();
    for _ in common..from.len() {
        segments.push("..");
    }
    for part in &to[common..] {
        segments.push(part);
    }
    segments.join("/")
}

fn normal_components(path: &Path) -> Vec<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    parts
}

/// Replace every marker occurrence in `text` with the relative path from
/// `file_dir` to the target under `root`. Whitespace between `#include` and
/// the quote is preserved as written. Returns the transformed text and
/// whether any replacement occurred.
pub fn rewrite_text(text: &str, file_dir: &Path, root: &Path) -> (String, bool) {
    let mut changed = false;
    let new_text = INCLUDE_PATTERN.replace_all(text, |caps: &Captures| {
        let target = root.join(&caps[2]);
        let relative = relative_include(file_dir, &target);
        changed = true;
        format!("#include{}\"{}\"", &caps[1], relative)
    });
    (new_text.into_owned(), changed)
}

/// Read `path` and rewrite its markers against `root`. The file is not
/// written back; callers decide what to do with the result.
pub fn rewrite_file(path: &Path, root: &Path) -> Result<(String, bool)> {
    let text = std::fs::read_to_string(path)?;
    let file_dir = path.parent().unwrap_or(root);
    Ok(rewrite_text(&text, file_dir, root))
}
