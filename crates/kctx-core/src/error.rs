use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum KctxError {
    Load(anyhow::Error),
    NotFound(String),
    Write(anyhow::Error),
}

impl fmt::Display for KctxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(_) => write!(f, "error reading config"),
            Self::NotFound(context) => write!(f, "context '{context}' does not exist"),
            Self::Write(_) => write!(f, "error writing config"),
        }
    }
}

impl Error for KctxError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(cause) | Self::Write(cause) => {
                let cause: &(dyn Error + 'static) = cause.as_ref();
                Some(cause)
            }
            Self::NotFound(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KctxError>;
