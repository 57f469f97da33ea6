use std::fs;
use std::io;
use std::path::Path;

use mosaic_core::IconSource;

/// Read every `*.svg` file in `dir`, ordered by file name so that reruns
/// place the same icons in the same grid slots.
pub fn load_dir(dir: &Path) -> io::Result<Vec<IconSource>> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        })
        .collect();
    paths.sort();

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let markup = fs::read_to_string(&path)?;
        out.push(IconSource {
            locator: path.display().to_string(),
            markup,
        });
    }
    Ok(out)
}
