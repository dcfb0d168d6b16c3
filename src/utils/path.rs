//! Output path naming

use std::path::{Path, PathBuf};

/// Whether `path` carries a `.gif` extension, case-insensitively
pub fn is_gif(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gif"))
        .unwrap_or(false)
}

/// Whether `a` and `b` name the same location once their directories are
/// resolved; either file may not exist yet
pub fn same_location(a: &Path, b: &Path) -> bool {
    fn resolved(path: &Path) -> PathBuf {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let dir = std::fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf());
        match path.file_name() {
            Some(name) => dir.join(name),
            None => dir,
        }
    }
    a == b || resolved(a) == resolved(b)
}

fn stem_and_ext(input: &Path) -> (String, String) {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_else(|| ".gif".to_string());
    (stem, ext)
}

/// `<dir>/<name>_optimized<ext>` next to the input
pub fn optimized_output(input: &Path) -> PathBuf {
    let (stem, ext) = stem_and_ext(input);
    input.with_file_name(format!("{}_optimized{}", stem, ext))
}

/// `<dir>/<name>_part<index><ext>`; `dir` defaults to the input's directory
pub fn segment_output(input: &Path, dir: Option<&Path>, index: usize) -> PathBuf {
    let (stem, ext) = stem_and_ext(input);
    let file_name = format!("{}_part{}{}", stem, index, ext);
    match dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
