//! Copy of the register file, optionally zipped.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Write a copy of the open register to `dest` with `VACUUM INTO`.
/// Returns the final path (`.zip` when compressed).
pub fn backup(conn: &Connection, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
    let dest = Path::new(dest_file);

    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    if dest.exists() {
        warning(format!("Replacing existing file '{}'", dest.display()));
        fs::remove_file(dest)?;
    }

    conn.execute("VACUUM INTO ?1", [dest.to_string_lossy().as_ref()])?;
    success(format!("Backup created: {}", dest.display()));

    let final_path = if compress {
        let zipped = compress_backup(dest)?;
        fs::remove_file(dest)?;
        info(format!("Removed uncompressed copy: {}", dest.display()));
        zipped
    } else {
        dest.to_path_buf()
    };

    ttlog(
        conn,
        "backup",
        &final_path.to_string_lossy(),
        if compress {
            "Backup created and compressed"
        } else {
            "Backup created"
        },
    )?;

    Ok(final_path)
}

/// Compress a backup into a sibling `.zip`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
