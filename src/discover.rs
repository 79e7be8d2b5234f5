use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions scanned when the user adds none of their own.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "h", "cpp", "hpp", "cc", "cxx"];

/// The default extension set as owned strings, ready to extend with `--ext`.
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// Walk `root` and yield every file with a recognized extension, in
/// traversal order. Directories matching an entry in `excludes` (relative to
/// `root`) are pruned whole. Entries the walker cannot read (dangling
/// symlinks, permission errors) are skipped.
pub fn discover<'a>(
    root: &'a Path,
    extensions: &'a [String],
    excludes: &'a [PathBuf],
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| !is_excluded(entry.path(), root, excludes))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| has_recognized_extension(entry.path(), extensions))
        .map(|entry| entry.into_path())
}

fn is_excluded(path: &Path, root: &Path, excludes: &[PathBuf]) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    excludes.iter().any(|excluded| relative.starts_with(excluded))
}

fn has_recognized_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|want| want.as_str() == ext.as_ref())
        }
        None => false,
    }
}
