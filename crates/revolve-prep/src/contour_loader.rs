use crate::error::PrepError;
use std::fs;
use std::path::Path;

/// Read a contour file: one floating-point radius per line.
///
/// Surrounding whitespace is ignored and blank lines are skipped with a
/// warning. Range checks happen later, when the samples become a
/// `Silhouette`.
pub fn load_contour(path: &Path) -> Result<Vec<f64>, PrepError> {
    let text = fs::read_to_string(path)?;
    parse_contour(&text, path)
}

/// Parse contour text. `path` is used for error messages only.
pub fn parse_contour(text: &str, path: &Path) -> Result<Vec<f64>, PrepError> {
    let mut samples = Vec::new();
    let mut blank_lines = 0usize;

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blank_lines += 1;
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|e| PrepError::ContourParse {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("{:?}: {}", trimmed, e),
            })?;
        samples.push(value);
    }

    if blank_lines > 0 {
        log::warn!(
            "Skipped {} blank line(s) in contour {}",
            blank_lines,
            path.display()
        );
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("contours/vase.lst")
    }

    #[test]
    fn test_parse_simple() {
        let samples = parse_contour("0.1\n0.5\n1\n", &path()).unwrap();
        assert_eq!(samples, vec![0.1, 0.5, 1.0]);
    }

    #[test]
    fn test_parse_trims_and_skips_blank() {
        let samples = parse_contour("  0.25 \r\n\n0.75\n\n", &path()).unwrap();
        assert_eq!(samples, vec![0.25, 0.75]);
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        let samples = parse_contour("-0.1\n2.0\n", &path()).unwrap();
        assert_eq!(samples, vec![-0.1, 2.0]);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse_contour("0.1\n0.2\nabc\n", &path()).unwrap_err();
        match err {
            PrepError::ContourParse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_contour(&dir.path().join("missing.lst"));
        assert!(matches!(result, Err(PrepError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cyl.lst");
        fs::write(&file, "0.5\n0.5\n").unwrap();
        assert_eq!(load_contour(&file).unwrap(), vec![0.5, 0.5]);
    }
}
