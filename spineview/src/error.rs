use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("runtime error: {0}")]
    Runtime(#[from] rusty_spine::SpineError),

    #[error("unsupported skeleton extension for {}; expected .json or .skel", path.display())]
    UnsupportedSkeletonFormat { path: PathBuf },

    #[error("no atlas found next to {}; pass an explicit atlas path", skeleton.display())]
    AtlasNotFound { skeleton: PathBuf },

    #[error("unknown animation: {name} (available: {})", available.join(", "))]
    UnknownAnimation {
        name: String,
        available: Vec<String>,
    },

    #[error("unknown skin: {name} (available: {})", available.join(", "))]
    UnknownSkin {
        name: String,
        available: Vec<String>,
    },

    #[error("skeleton has no animations")]
    NoAnimations,
}
