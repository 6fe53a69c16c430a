use crate::time::Time;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading raw course text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No trailing `am`/`pm`.
    #[error("missing am/pm marker in '{0}'")]
    MissingMarker(String),

    /// Not shaped like `h:mm` or `hh:mm`.
    #[error("malformed time '{0}'")]
    Malformed(String),

    /// Hour outside 1 to 12.
    #[error("hour out of range in '{0}'")]
    HourOutOfRange(String),

    /// Minute above 59.
    #[error("minute out of range in '{0}'")]
    MinuteOutOfRange(String),

    /// Day token that names no weekday.
    #[error("unknown day '{0}'")]
    UnknownDay(String),
}

#[derive(Error, Debug)]
pub enum Error {
    /// A section or lab carried text that could not be parsed.
    #[error("{unit}: {source}")]
    Unit {
        unit: String,
        #[source]
        source: ParseError,
    },

    /// A section or lab ends before it starts.
    #[error("{unit}: ends at {end} before it starts at {start}")]
    InvertedInterval { unit: String, start: Time, end: Time },

    /// A section or lab runs past the end of the day.
    #[error("{unit}: {time} is not a time of day")]
    OutOfDay { unit: String, time: Time },

    /// The course file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The course file is not valid course JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
