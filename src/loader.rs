//! Tabular sample-file loading
//!
//! Reads delimited text files (CSV, TSV, whitespace columns) into a sample
//! vector. The first non-numeric row is treated as a header; blank lines
//! and `#` comments are skipped.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// File extensions the batch walker treats as sample data.
pub const SAMPLE_EXTENSIONS: &[&str] = &["csv", "tsv", "txt", "dat"];

/// Load one column of samples from a delimited text file.
pub fn load_samples(path: &Path, column: usize) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading sample file {}", path.display()))?;
    parse_samples(&content, column).with_context(|| format!("parsing {}", path.display()))
}

/// Parse delimited text into the selected sample column.
pub fn parse_samples(content: &str, column: usize) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for (line_no, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line);
        let Some(field) = fields.get(column) else {
            bail!(
                "line {}: column {} not present ({} column(s) found)",
                line_no + 1,
                column,
                fields.len()
            );
        };

        match field.trim().parse::<f64>() {
            Ok(value) => samples.push(value),
            Err(_) if samples.is_empty() => continue, // header row
            Err(_) => bail!(
                "line {}: cannot parse {:?} as a sample value",
                line_no + 1,
                field.trim()
            ),
        }
    }

    if samples.is_empty() {
        bail!("no numeric samples found");
    }
    Ok(samples)
}

fn split_fields(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').collect()
    } else if line.contains(';') {
        line.split(';').collect()
    } else if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column() {
        let samples = parse_samples("1.0\n2.5\n-3.75\n", 0).unwrap();
        assert_eq!(samples, vec![1.0, 2.5, -3.75]);
    }

    #[test]
    fn test_header_and_comments_skipped() {
        let content = "# accelerometer dump\nVibraX,VibraY\n0.1,0.9\n\n0.2,0.8\n";
        assert_eq!(parse_samples(content, 0).unwrap(), vec![0.1, 0.2]);
        assert_eq!(parse_samples(content, 1).unwrap(), vec![0.9, 0.8]);
    }

    #[test]
    fn test_whitespace_and_semicolon_delimiters() {
        assert_eq!(parse_samples("1 2\n3 4\n", 1).unwrap(), vec![2.0, 4.0]);
        assert_eq!(parse_samples("1;2\n3;4\n", 0).unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_missing_column_fails() {
        assert!(parse_samples("1.0,2.0\n", 5).is_err());
    }

    #[test]
    fn test_garbage_mid_file_fails() {
        assert!(parse_samples("1.0\nnot-a-number\n2.0\n", 0).is_err());
    }

    #[test]
    fn test_empty_file_fails() {
        assert!(parse_samples("", 0).is_err());
        assert!(parse_samples("# only comments\n", 0).is_err());
    }
}
