use boose_canvas::CanvasError;
use thiserror::Error;

/// A script failure, tagged with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{name}`")]
    UnknownCommand { line: usize, name: String },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    Canvas {
        line: usize,
        #[source]
        source: CanvasError,
    },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownCommand { line, .. }
            | Self::Syntax { line, .. }
            | Self::Canvas { line, .. } => *line,
        }
    }
}
