//! Favicon file export
//!
//! Writes encoded documents to disk. The document is staged in a temporary
//! file inside the destination directory and renamed into place, so a failed
//! export never leaves a partial file behind: the temporary file is removed
//! when its guard drops, on every path.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::EmojiRecord;
use crate::logic::export::{encode_svg, favicon_file_name};

/// Save `document` as `dir/file_name`, replacing any existing file
pub fn save(document: &str, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let target = dir.join(file_name);

    let mut staged = tempfile::Builder::new()
        .prefix(".emojifav-")
        .suffix(".svg.tmp")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    staged
        .write_all(document.as_bytes())
        .and_then(|_| staged.flush())
        .with_context(|| format!("Failed to write {}", target.display()))?;

    staged
        .persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save {}", target.display()))?;

    log::debug!("Saved {} ({} bytes)", target.display(), document.len());
    Ok(target)
}

/// Encode `record` and save it into `dir` under its favicon file name
pub fn export_record(record: &EmojiRecord, dir: &Path) -> Result<PathBuf> {
    let document = encode_svg(&record.symbol);
    let file_name = favicon_file_name(&record.name);
    save(&document, dir, &file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = save("<svg/>", dir.path(), "x-favicon.svg").unwrap();
        assert_eq!(path, dir.path().join("x-favicon.svg"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        save("old", dir.path(), "a.svg").unwrap();
        save("new", dir.path(), "a.svg").unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.svg")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_export_record_uses_name_and_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let record = EmojiRecord::new("😀", "grinning face", &["smile"]);
        let path = export_record(&record, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "grinning-face-favicon.svg");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><text y=\"27\" font-size=\"27\">😀</text></svg>"
        );
    }

    #[test]
    fn test_failed_save_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        // Target is an existing directory, so the final rename fails
        std::fs::create_dir(dir.path().join("taken.svg")).unwrap();
        std::fs::write(dir.path().join("taken.svg").join("keep"), "x").unwrap();

        assert!(save("<svg/>", dir.path(), "taken.svg").is_err());

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name.to_string_lossy().starts_with(".emojifav-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = save("<svg/>", &missing, "a.svg").unwrap_err();
        assert!(err.to_string().contains("temporary file"));
    }
}
