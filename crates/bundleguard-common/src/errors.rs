use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of a packaging step. Every variant is fatal to the invocation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("missing input file: {0}")]
    MissingInputFile(PathBuf),

    #[error("forbidden patterns remain in {path}: {}", .patterns.join(", "))]
    VerificationFailed { path: PathBuf, patterns: Vec<String> },

    #[error("inline styles differ at normalized offset {offset}: readable `{readable}` vs minified `{minified}`")]
    StyleMismatch {
        offset: usize,
        readable: String,
        minified: String,
    },

    #[error("staging directory {staging_dir} contains output directory {out_dir}")]
    StagingEnclosesOutput {
        staging_dir: PathBuf,
        out_dir: PathBuf,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BundleguardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("{0}")]
    Other(String),
}
