use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icon generation
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(doto_icons::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Cannot read source image {path}: {message}")]
    #[diagnostic(code(doto_icons::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(doto_icons::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(doto_icons::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
