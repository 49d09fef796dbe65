#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("v3 identifier generation failed: {0}")]
    GeneratorV3(#[from] idgen_v3::IdError),
    #[error("v4 identifier generation failed: {0}")]
    GeneratorV4(#[from] idgen_v4::IdError),
    #[error("{0}")]
    Parse(#[from] idkit_numparse::ParseError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
