//! Reading matrices from files
//!
//! Two formats are understood:
//!
//! - JSON, a list of rows: `[[1, 2], [3, 4]]`
//! - plain text, one row per line with whitespace-separated integers.
//!   Blank lines and lines starting with `#` are skipped.
//!
//! The format is picked from the file extension; unknown extensions fall
//! back to sniffing the content.

use super::Matrix;
use crate::error::{Error, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    Json,
    Text,
}

impl MatrixFormat {
    /// Choose a format from the path extension, then from the content
    pub fn detect(path: &Path, content: &str) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => MatrixFormat::Json,
            "txt" | "mat" => MatrixFormat::Text,
            _ => Self::detect_from_content(content),
        }
    }

    fn detect_from_content(content: &str) -> Self {
        if content.trim_start().starts_with('[') {
            MatrixFormat::Json
        } else {
            MatrixFormat::Text
        }
    }
}

impl Matrix {
    /// Read and parse a matrix file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;

        let format = MatrixFormat::detect(path, &content);
        tracing::debug!("Loading {} as {:?}", path.display(), format);
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: MatrixFormat) -> Result<Self> {
        match format {
            MatrixFormat::Json => Self::from_json_str(content),
            MatrixFormat::Text => Self::from_text(content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let rows: Vec<Vec<i64>> =
            serde_json::from_str(content).map_err(|e| Error::Parse(e.to_string()))?;
        Self::from_rows(rows)
    }

    pub fn from_text(content: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (line_number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| {
                        Error::Parse(format!(
                            "line {}: '{}' is not a 64-bit integer",
                            line_number + 1,
                            token
                        ))
                    })
                })
                .collect::<Result<Vec<i64>>>()?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }
}
