//! Notification decoding — raw frame bytes into a command token.

use wavekey_domain::command::CommandToken;

/// Decode one notification payload.
///
/// Each notification is a complete, self-contained command word — there is
/// no fragmentation and no buffering across frames. The payload is read as
/// UTF-8 and matched case-sensitively against the fixed vocabulary; invalid
/// UTF-8 and unrecognised words both decode to [`CommandToken::Unknown`].
/// This function never fails.
#[must_use]
pub fn decode(payload: &[u8]) -> CommandToken {
    match std::str::from_utf8(payload) {
        Ok(text) => {
            let token = CommandToken::from_wire(text);
            if token == CommandToken::Unknown {
                tracing::warn!(payload = %text, "unrecognised command payload");
            }
            token
        }
        Err(_) => {
            tracing::warn!(len = payload.len(), "notification payload is not valid UTF-8");
            CommandToken::Unknown
        }
    }
}
