use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod session;
pub mod wav;

pub use session::{SessionInputs, load_session};
pub use wav::{DecodedAudio, decode_wav};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),

    #[error("session parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl InputError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
