//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod syllables;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before anything is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_file(content: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("texto.txt")).unwrap();
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_file_within_limit() {
        let (_dir, path) = temp_file("Hola, mundo.");
        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "Hola, mundo.");
    }

    #[test]
    fn rejects_file_over_limit() {
        let (_dir, path) = temp_file("Hola, mundo.");
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn no_limit_reads_anything() {
        let (_dir, path) = temp_file(&"a".repeat(10_000));
        assert_eq!(read_input_file(&path, None).unwrap().len(), 10_000);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input_file(Utf8Path::new("/no/such/texto.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
