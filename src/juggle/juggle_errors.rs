use std::fmt;

#[derive(Debug)]
pub enum TrackerError {
    InvalidName(String),
    InvalidObservation(String),
    InvalidParameter(String),
    DuplicateName(String),
    NoObject(NoObjectInTracker),
}

impl From<NoObjectInTracker> for TrackerError {
    fn from(e: NoObjectInTracker) -> Self {
        TrackerError::NoObject(e)
    }
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackerError::InvalidName(name) => {
                write!(f, "InvalidName: ball name '{}' must be a single token", name)
            }
            TrackerError::InvalidObservation(txt) => write!(f, "InvalidObservation: {}", txt),
            TrackerError::InvalidParameter(txt) => write!(f, "InvalidParameter: {}", txt),
            TrackerError::DuplicateName(name) => {
                write!(f, "DuplicateName: ball '{}' is already tracked", name)
            }
            TrackerError::NoObject(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TrackerError {}

#[derive(Debug)]
pub struct NoObjectInTracker {
    pub txt: String,
}
impl fmt::Display for NoObjectInTracker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NoObjectInTracker: {}", self.txt)
    }
}
