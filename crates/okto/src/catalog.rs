//! ROM directory listing for the selection UI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Where a bare ROM name is looked up.
pub const DEFAULT_ROM_DIR: &str = "roms";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomEntry {
    pub name: String,
    pub path: PathBuf,
}

/// List the `.ch8` files in `dir` (extension matched case-insensitively),
/// sorted by file name.
pub fn scan(dir: &Path) -> Result<Vec<RomEntry>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read ROM directory {}", dir.display()))?;
    let mut roms = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || !is_ch8(&path) {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        roms.push(RomEntry { name, path });
    }
    roms.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(roms)
}

fn is_ch8(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("ch8"))
        .unwrap_or(false)
}

/// Resolve a ROM argument: an existing path wins, anything else is tried
/// under the default ROM directory.
pub fn resolve(arg: &str) -> PathBuf {
    let direct = PathBuf::from(arg);
    if direct.exists() {
        return direct;
    }
    Path::new(DEFAULT_ROM_DIR).join(arg)
}
