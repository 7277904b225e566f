use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse scene description")]
    Parse(#[from] serde_json::Error),
    #[error("material {0} not present in material library")]
    UnknownMaterial(String),
}
