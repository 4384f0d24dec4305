use std::{error::Error as StdError, path::PathBuf};

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("nothing to plot: every trace is empty")]
    EmptyChart,

    #[error("nothing to animate: the angle series is empty")]
    NoFrames,
}

impl Error {
    pub(crate) fn render(path: impl Into<PathBuf>, source: Box<dyn StdError + Send + Sync>) -> Self {
        Self::Render {
            path: path.into(),
            source,
        }
    }
}
