use crate::core::errors::{Error, Result};
use log::info;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Write Output File
-------------------------------------------------------------------------------------------------*/

/// Write `text` to `path`, replacing any existing file.
///
/// The text is written to a temporary sibling file (`<path>.tmp`) which is renamed over `path`
/// only after every byte has been flushed to disk. On failure the temporary file is removed and
/// any previous `path` is left untouched.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path(path);

    write_and_sync(&temp_path, text)
        .and_then(|_| fs::rename(&temp_path, path))
        .map_err(|source| {
            let _ = fs::remove_file(&temp_path);
            Error::FileWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;

    info!("Wrote {} bytes to: {:?}", text.len(), path);
    Ok(())
}

fn write_and_sync(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use test_log::test;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf = [".", "scratch", name].iter().collect();
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_output() {
        let path = scratch_dir("test_write_output").join("output.tf");
        write_output(&path, "first\n").inspect_err(log_error).unwrap();
        write_output(&path, "second\n").inspect_err(log_error).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_output_missing_directory() {
        let path = scratch_dir("test_write_output_missing_directory")
            .join("missing")
            .join("output.tf");
        let result = write_output(&path, "text\n");

        assert!(matches!(result, Err(Error::FileWrite { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path(Path::new("out/output.tf")),
            PathBuf::from("out/output.tf.tmp")
        );
    }
}
