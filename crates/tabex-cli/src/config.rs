//! Resolved command-line configuration and the render pipeline it drives

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tabex::{Document, DocumentFormat};

/// Where the request JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` selects standard input
    pub fn from_arg(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }

    fn read_to_string(&self) -> Result<String> {
        let mut json = String::new();
        match self {
            Input::Stdin => {
                io::stdin()
                    .lock()
                    .read_to_string(&mut json)
                    .context("Failed to read request from stdin")?;
            }
            Input::File(path) => {
                json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read request {}", path.display()))?;
            }
        }
        Ok(json)
    }
}

/// Everything one invocation needs, independent of how it was parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: DocumentFormat,
    pub input: Input,
    /// `None` writes the document under its own filename
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub sheet_name: Option<String>,
    pub auto_size: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn new(format: DocumentFormat, input: Input, output: Option<PathBuf>) -> Self {
        Self {
            format,
            input,
            output,
            delimiter: None,
            sheet_name: None,
            auto_size: false,
            verbosity: 0,
        }
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    fn writes_stdout(&self) -> bool {
        self.output.as_deref() == Some(Path::new("-"))
    }

    /// Decode the request and render it, applying command-line overrides
    pub fn render(&self, json: &str) -> Result<Document> {
        let document = match self.format {
            DocumentFormat::Csv => {
                let mut request = tabex::decode::csv_request_from_json(json)
                    .context("Invalid CSV request")?;
                if let Some(delimiter) = &self.delimiter {
                    request.delimiter = Some(delimiter.clone());
                }
                tabex::render_csv(request)?
            }
            DocumentFormat::Xlsx => {
                let mut request = tabex::decode::xlsx_request_from_json(json)
                    .context("Invalid XLSX request")?;
                if let Some(name) = &self.sheet_name {
                    request.sheet_name = Some(name.clone());
                }
                if self.auto_size {
                    request.auto_size = true;
                }
                tabex::render_xlsx(request)?
            }
        };
        Ok(document)
    }
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct Written {
    /// File the document was written to; `None` for stdout
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

pub fn run(config: &Config) -> Result<Written> {
    let json = config.input.read_to_string()?;
    let document = config.render(&json)?;

    tracing::debug!(
        filename = %document.filename,
        bytes = document.len(),
        content_type = document.content_type,
        "document ready"
    );

    if config.writes_stdout() {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&document.bytes)
            .and_then(|()| stdout.flush())
            .context("Failed to write document to stdout")?;
        return Ok(Written {
            path: None,
            bytes: document.len(),
        });
    }

    let path = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&document.filename));
    fs::write(&path, &document.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Written {
        path: Some(path),
        bytes: document.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PEOPLE: &str = r#"{"headers": ["Name", "Age"], "data": [["Alice", 30], ["Bob", null]]}"#;

    #[test]
    fn test_input_from_arg() {
        assert_eq!(Input::from_arg("-".into()), Input::Stdin);
        assert_eq!(
            Input::from_arg("req.json".into()),
            Input::File("req.json".into())
        );
    }

    #[test]
    fn test_log_filter() {
        let mut config = Config::new(DocumentFormat::Csv, Input::Stdin, None);
        assert_eq!(config.log_filter(), "warn");
        config.verbosity = 1;
        assert_eq!(config.log_filter(), "debug");
        config.verbosity = 4;
        assert_eq!(config.log_filter(), "trace");
    }

    #[test]
    fn test_delimiter_override() {
        let mut config = Config::new(DocumentFormat::Csv, Input::Stdin, None);
        config.delimiter = Some(";".into());

        let document = config.render(PEOPLE).unwrap();
        assert_eq!(document.filename, "export.csv");
        assert_eq!(
            String::from_utf8(document.bytes).unwrap(),
            "Name;Age\nAlice;30\nBob;\n"
        );
    }

    #[test]
    fn test_xlsx_overrides() {
        let mut config = Config::new(DocumentFormat::Xlsx, Input::Stdin, None);
        config.sheet_name = Some("People".into());
        config.auto_size = true;

        let document = config.render(PEOPLE).unwrap();
        assert_eq!(document.filename, "export.xlsx");
        assert_eq!(&document.bytes[..2], b"PK");
    }

    #[test]
    fn test_invalid_request_is_an_error() {
        let config = Config::new(DocumentFormat::Csv, Input::Stdin, None);
        let err = config
            .render(r#"{"headers": [], "data": [[1]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("headers cannot be empty"));

        let err = config.render("not json").unwrap_err();
        assert!(err.to_string().contains("Invalid CSV request"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("request.json");
        fs::write(&request, PEOPLE).unwrap();
        let output = dir.path().join("people.csv");

        let config = Config::new(
            DocumentFormat::Csv,
            Input::File(request),
            Some(output.clone()),
        );
        let written = run(&config).unwrap();

        assert_eq!(written.path.as_deref(), Some(output.as_path()));
        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(written.bytes, contents.len());
        assert_eq!(contents, "Name,Age\nAlice,30\nBob,\n");
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(
            DocumentFormat::Xlsx,
            Input::File(dir.path().join("missing.json")),
            None,
        );
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read request"));
    }
}
