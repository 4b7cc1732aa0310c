use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::error::{CarouselError, CarouselResult};

/// One input image, keyed by the integer parsed from its filename stem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedImage {
    pub ordinal: u64,
    pub path: PathBuf,
}

/// Scan `dir` for `<integer>.png` files and return them sorted ascending by
/// the integer stem.
///
/// Non-PNG entries and subdirectories are skipped. A PNG whose stem does not
/// parse as an integer is an error. An empty directory yields an empty vec;
/// callers decide what that means.
pub fn collect_numbered_pngs(dir: &Path) -> CarouselResult<Vec<NumberedImage>> {
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read image directory '{}'", dir.display()))?;

    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if ext.to_ascii_lowercase() != "png" {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                CarouselError::collect(format!("unreadable file name '{}'", path.display()))
            })?;
        let ordinal = stem.parse::<u64>().map_err(|_| {
            CarouselError::collect(format!(
                "png stem '{}' is not an integer ('{}')",
                stem,
                path.display()
            ))
        })?;

        out.push(NumberedImage { ordinal, path });
    }

    out.sort_unstable_by_key(|img| img.ordinal);
    Ok(out)
}
