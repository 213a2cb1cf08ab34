use std::fmt::Formatter;
use std::io;

#[derive(Debug)]
pub enum ReportError {
    Io(io::Error),
}

impl ReportError {
    /**
     * The reader went away, e.g. `ctypes | head`.
     */
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            ReportError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Io(e)
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ReportError::Io(e) => write!(f, "cannot write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
        }
    }
}
