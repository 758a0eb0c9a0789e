//! Whole-path filesystem operations used by `new` and `update`.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Remove a file or directory tree. Returns false if nothing existed.
pub fn remove_path(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(Error::internal_io(
                e.to_string(),
                Some(format!("stat {}", path.display())),
            ))
        }
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| Error::internal_io(e.to_string(), Some(format!("remove {}", path.display()))))?;
    Ok(true)
}

/// Replace `dst` with a copy of `src` (file or directory). Any existing
/// destination is removed first, so nothing of the old content survives.
pub fn replace_path(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        return Err(Error::internal_io(
            format!("Source not found: {}", src.display()),
            Some("replace path".to_string()),
        ));
    }

    remove_path(dst)?;

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    if src.is_dir() {
        copy_dir_recursive(src, dst)
    } else {
        fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| {
                Error::internal_io(
                    e.to_string(),
                    Some(format!("copy {} -> {}", src.display(), dst.display())),
                )
            })
    }
}

/// Recursively copy a directory tree.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .map_err(|e| Error::internal_io(e.to_string(), Some("create target dir".into())))?;

    for entry in fs::read_dir(src)
        .map_err(|e| Error::internal_io(e.to_string(), Some("read source dir".into())))?
    {
        let entry =
            entry.map_err(|e| Error::internal_io(e.to_string(), Some("read dir entry".into())))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| {
                Error::internal_io(
                    e.to_string(),
                    Some(format!("copy {}", src_path.display())),
                )
            })?;
        }
    }
    Ok(())
}
