//! Error handling for the configuration listing.

use std::fmt;

/// A specialized [`Result`] type for the EGL driver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all the driver operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The raw code of the underlying error, as reported by `eglGetError`.
    raw_code: Option<i64>,

    /// The name of the raw error in case it could be obtained.
    raw_os_message: Option<String>,

    /// The simplified error kind to handle matching.
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(
        raw_code: Option<i64>,
        raw_os_message: Option<String>,
        kind: ErrorKind,
    ) -> Self {
        Self { raw_code, raw_os_message, kind }
    }

    /// The underlying error kind.
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// The underlying raw code in case it's present.
    #[inline]
    pub fn raw_code(&self) -> Option<i64> {
        self.raw_code
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw_code) = self.raw_code {
            write!(f, "[{raw_code:x}] ")?;
        }

        f.write_str(self.kind.as_str())?;

        if let Some(raw_os_message) = self.raw_os_message.as_ref() {
            write!(f, " ({raw_os_message})")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Build an error with just a kind.
impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { raw_code: None, raw_os_message: None, kind }
    }
}

/// The step of the listing that failed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// The EGL library or one of its required symbols wasn't found.
    NotFound,

    /// No display handle could be obtained.
    DisplayUnavailable,

    /// `eglInitialize` failed.
    InitializationFailed,

    /// Counting or enumerating the configurations failed, or a single
    /// attribute could not be read.
    QueryFailed,

    /// The configuration buffer could not be allocated.
    AllocationFailed,

    /// No configuration matches the required bits.
    ConfigSelectionFailed,

    /// The off-screen surface could not be created.
    SurfaceCreationFailed,

    /// The rendering context could not be created.
    ContextCreationFailed,

    /// The context could not be made current.
    BindFailed,
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        use ErrorKind::*;
        match *self {
            NotFound => "EGL library not found",
            DisplayUnavailable => "no EGL display available",
            InitializationFailed => "display initialization failed",
            QueryFailed => "configuration query failed",
            AllocationFailed => "could not allocate configs",
            ConfigSelectionFailed => "no config matches the required attributes",
            SurfaceCreationFailed => "pbuffer surface creation failed",
            ContextCreationFailed => "context creation failed",
            BindFailed => "could not make the context current",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
