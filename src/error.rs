//! Defines [`EwkbError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EwkbError {
    /// The data is not (E)WKB: bad byte order marker, trailing bytes, or an
    /// element of the wrong kind inside a multi geometry.
    #[error("ewkb: invalid data")]
    NotEwkb,

    /// The decoded geometry cannot be stored in the requested destination.
    ///
    /// For example, scanning line string data into a point.
    #[error("ewkb: incorrect geometry")]
    IncorrectGeometry,

    /// The type code does not name one of the seven supported 2D geometry kinds.
    #[error("ewkb: unsupported geometry type code {0:#010x}")]
    UnsupportedGeometry(u32),

    /// A scan was asked to read something other than NULL or bytes.
    ///
    /// This should never happen if the driver is acting appropriately.
    #[error("ewkb: scan value must be bytes, got {0}")]
    UnsupportedDataType(&'static str),

    /// The input ended before a declared element count was satisfied.
    #[error("ewkb: input ended before the geometry was complete")]
    Truncated,

    /// The value looked hex escaped (`\x` prefix) but did not decode as hex.
    #[error("thought the data was hex, but it is not: {0}")]
    InvalidHex(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl EwkbError {
    /// Convert an error from reading the underlying source.
    ///
    /// A short read is reported as [`EwkbError::Truncated`]; anything else is
    /// passed through as an I/O error.
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => EwkbError::Truncated,
            _ => EwkbError::IOError(err),
        }
    }

    /// Whether this error means the bytes were not laid out as an EWKB geometry,
    /// as opposed to a well-formed geometry that was simply the wrong kind.
    pub(crate) fn is_framing(&self) -> bool {
        matches!(
            self,
            EwkbError::NotEwkb | EwkbError::UnsupportedGeometry(_) | EwkbError::Truncated
        )
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, EwkbError>;
