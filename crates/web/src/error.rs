use thiserror::Error;

/// Why a view could not be mounted.
///
/// Never surfaced to JS: the export returns `undefined` and the reason is
/// logged at debug level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas `{0}` has no 2d context")]
    NoContext(String),
    #[error("failed to register `{0}` listener")]
    Listener(&'static str),
}
