/// Edits applied to the username buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    /// Append a character.
    Insert(char),

    /// Delete the last character (Backspace).
    Backspace,

    /// Clear the whole buffer (Ctrl+U).
    Clear,
}
