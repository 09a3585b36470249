use std::path::PathBuf;
use thiserror::Error as ThisError;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors produced while fetching, decoding, rendering, and writing the Zscaler address feed.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The feed could not be retrieved: connection failure, timeout, or non-2xx status.
    #[error("fetch failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A local copy of the feed could not be read.
    #[error("fetch failed: unable to read `{}`: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The feed body is not valid JSON or does not match the expected schema.
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The feed holds more IPs than fit below the deny-all rule priority.
    #[error(
        "render failed: {count} allow rules starting at priority {first} would collide with \
         the deny-all rule priority {deny}"
    )]
    PriorityOverflow { count: usize, first: u32, deny: u32 },

    /// The generated Terraform could not be written.
    #[error("write failed: `{}`: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV export could not be written.
    #[error("write failed: {0}")]
    Csv(#[from] csv::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Error Stages
--------------------------------------------------------------------------------------*/

impl Error {
    /// The pipeline stage where the error occurred.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Network(_) | Error::Input { .. } => "fetch",
            Error::Decode(_) => "decode",
            Error::PriorityOverflow { .. } => "render",
            Error::FileWrite { .. } | Error::Csv(_) => "write",
        }
    }

    /// Process exit code for the stage that failed.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Network(_) | Error::Input { .. } => 2,
            Error::Decode(_) => 3,
            Error::PriorityOverflow { .. } => 4,
            Error::FileWrite { .. } | Error::Csv(_) => 5,
        }
    }
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
