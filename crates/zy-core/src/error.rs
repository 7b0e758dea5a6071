/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when consulting the symbol catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No trigram matches the given line triple.
    ///
    /// The catalog covers all eight triples, so this indicates a corrupted
    /// catalog rather than bad user input.
    #[error("no trigram matches lines {0:?}")]
    UnknownTrigram([bool; 3]),

    /// No hexagram is cataloged for the given trigram pair.
    #[error("no hexagram cataloged for upper \"{upper}\" over lower \"{lower}\"")]
    HexagramNotFound {
        /// Id of the upper trigram that was looked up.
        upper: String,
        /// Id of the lower trigram that was looked up.
        lower: String,
    },

    /// A hexagram number outside the King Wen range.
    #[error("hexagram number {0} is out of range (1-64)")]
    NumberOutOfRange(u32),
}
