#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("argument {index} isn't valid UTF-8: {lossy:?}")]
    NotUnicode { index: usize, lossy: String },

    #[error("unrecognized flag {flag}; put arguments to inspect after `--`")]
    UnknownFlag { flag: String },

    #[error(transparent)]
    Token(#[from] argtok::Error),
}
