use crate::frame::ContentId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Recursion detected: content {content} is already being rendered with view `{view}`"
    )]
    RecursionDetected {
        content: ContentId,
        view: String,
        /// The active frames from the first occurrence of the repeated pair
        /// up to the top of the stack, innermost last.
        backtrace: Vec<String>,
    },
    #[error("{0}")]
    Render(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps a failure of the host's own rendering so it can travel through
    /// a guarded render chain unchanged.
    pub fn render<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Render(error.into())
    }

    /// Whether this is the guard's own re-entry signal rather than a
    /// pass-through render failure. Hosts typically surface the former in
    /// preview setups and swallow it in production delivery.
    pub fn is_recursion(&self) -> bool {
        matches!(self, Self::RecursionDetected { .. })
    }
}
