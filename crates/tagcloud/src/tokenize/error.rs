/// Error type for tokenizer precondition violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TokenizeError {
    /// The starting offset is not inside the line.
    #[error("offset {offset} is outside a line of {len} bytes")]
    #[diagnostic(code(tagcloud::tokenize::out_of_bounds))]
    OffsetOutOfBounds {
        /// The rejected offset.
        offset: usize,
        /// Byte length of the line.
        len: usize,
    },

    /// The starting offset points into the middle of a multi-byte character.
    #[error("offset {offset} is not on a character boundary")]
    #[diagnostic(code(tagcloud::tokenize::char_boundary))]
    NotCharBoundary {
        /// The rejected offset.
        offset: usize,
    },
}
