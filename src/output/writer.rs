use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::path::Path;

/// Output file used when none is given on the command line or in config.
pub const DEFAULT_FILENAME: &str = "inconsistencies.csv";

/// Write one count per line, in subject order.
///
/// Uses atomic-write-file so an interrupted run never leaves a partial file
/// behind; the previous output, if any, stays intact until commit.
pub fn write_counts(path: &Path, counts: &[usize]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open output file at {}", path.display()))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut file);
        for count in counts {
            writer
                .write_record([count.to_string()])
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    file.commit()
        .with_context(|| format!("Failed to save output file at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_rows;

    #[test]
    fn test_write_counts_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_counts(&path, &[0, 2, 2, 1]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "0\n2\n2\n1\n");
    }

    #[test]
    fn test_output_reads_back_as_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_counts(&path, &[3, 0, 5]).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows, vec![vec![3], vec![0], vec![5]]);
    }

    #[test]
    fn test_empty_counts_write_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_counts(&path, &[]).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale\ncontent\n").unwrap();

        write_counts(&path, &[1]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_counts(&path, &[1]).is_err());
    }
}
