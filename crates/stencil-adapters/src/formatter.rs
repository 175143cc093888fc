//! Whitespace-normalizing artifact formatter.

use tracing::instrument;

use stencil_core::{
    application::{ApplicationError, ports::ArtifactFormatter},
    domain::Artifact,
    error::StencilResult,
};

/// Normalizes line endings, trailing whitespace, blank-line runs, and
/// leading tabs. Does not reflow code.
#[derive(Debug, Clone)]
pub struct BasicFormatter {
    indent: String,
}

impl BasicFormatter {
    pub fn new() -> Self {
        Self::with_indent_width(2)
    }

    /// Leading tabs become `width` spaces.
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }

    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut blank_run = 0;

        for line in text.replace("\r\n", "\n").lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 || out.is_empty() {
                    continue;
                }
                out.push('\n');
                continue;
            }
            blank_run = 0;

            let body = line.trim_start_matches('\t');
            let tabs = line.len() - body.len();
            out.push_str(&self.indent.repeat(tabs));
            out.push_str(body);
            out.push('\n');
        }

        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }
}

impl Default for BasicFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactFormatter for BasicFormatter {
    #[instrument(skip_all, fields(path = %artifact.path))]
    fn format(&self, artifact: &Artifact) -> StencilResult<String> {
        let formatted = self.normalize(&artifact.content);
        if formatted.trim().is_empty() {
            return Err(ApplicationError::FormattingFailed {
                path: artifact.path.to_string(),
                reason: "formatted output is empty".into(),
            }
            .into());
        }
        Ok(formatted)
    }
}
