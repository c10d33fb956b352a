#[cfg(feature = "dxf-io")]
mod dxf;

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "svg-io")]
pub use self::svg::plot;

/// Generic I/O and format‑conversion errors.
///
/// The format modules are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    MalformedPath(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}
