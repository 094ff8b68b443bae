//! Username buffer editing.

use crate::message::InputMessage;
use crate::model::INPUT_CHAR_LIMIT;

/// Apply one edit to the input buffer.
pub fn update(buffer: &mut String, msg: InputMessage) {
    match msg {
        InputMessage::Insert(ch) => {
            if buffer.chars().count() < INPUT_CHAR_LIMIT {
                buffer.push(ch);
            }
        }
        InputMessage::Backspace => {
            buffer.pop();
        }
        InputMessage::Clear => buffer.clear(),
    }
}
