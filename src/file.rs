// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{collect::GrantIds, config::options::ExportOptions, csv::write_grant_table};

/// Write the grant table to the path implied by `export`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    ids: &GrantIds,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    write_export_to(&path, export, ids)?;
    Ok(path)
}

/// Same as [`write_export`] with an explicit destination.
pub fn write_export_to(
    path: &Path,
    export: &ExportOptions,
    ids: &GrantIds,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
    write_grant_table(&mut out, ids.iter(), export.include_headers, export.delim())?;
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
