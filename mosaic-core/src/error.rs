use thiserror::Error;

/// Why a single icon was dropped from the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("markup has no usable <svg> root")]
    MalformedMarkup,
    #[error("icon bounds have zero area")]
    InvalidGeometry,
}

/// Terminal failures of the composite operation. Per-icon problems are not
/// errors; they are reported as [`IconWarning`]s on the result.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("no icons to composite")]
    EmptyInput,
    #[error("all {dropped} icons were dropped; nothing to assemble")]
    NoUsableIcons { dropped: usize },
    #[error("invalid layout spec: {0}")]
    InvalidSpec(String),
}

/// A non-fatal per-icon drop. The icon's grid slot stays blank so reruns
/// keep the surviving icons in the same positions.
#[derive(Debug, Clone)]
pub struct IconWarning {
    pub index: usize,
    pub source: String,
    pub reason: SkipReason,
}
