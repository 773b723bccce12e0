//! Command token — the decoded form of one peripheral instruction.
//!
//! The peripheral firmware sends each command as a short UTF-8 word over the
//! notification characteristic. The vocabulary is fixed and matched
//! case-sensitively; anything else decodes to [`CommandToken::Unknown`].

use serde::{Deserialize, Serialize};

/// One recognised instruction from the fixed command vocabulary.
///
/// The wire words are the ones the device firmware actually emits
/// (`ses_ac`, `ses_kapat`, …); the variant names describe the host action
/// they trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandToken {
    /// `ses_ac` — raise master volume to its maximum level.
    VolumeOn,
    /// `ses_kapat` — drop master volume to its minimum level.
    VolumeOff,
    /// `ekran_goruntusu` — capture a screenshot.
    Screenshot,
    /// `parlaklik_ac` — set screen brightness to 100%.
    BrightnessOn,
    /// `parlaklik_kapat` — set screen brightness to 0%.
    BrightnessOff,
    /// Any payload outside the vocabulary. Never an error — unknown commands
    /// are dispatched and resolve to a no-op outcome.
    Unknown,
}

impl CommandToken {
    /// Every token with a wire word, in protocol order.
    pub const KNOWN: [Self; 5] = [
        Self::VolumeOn,
        Self::VolumeOff,
        Self::Screenshot,
        Self::BrightnessOn,
        Self::BrightnessOff,
    ];

    /// Parse a wire word. Total — non-vocabulary input yields
    /// [`Self::Unknown`], matching is case-sensitive.
    #[must_use]
    pub fn from_wire(word: &str) -> Self {
        match word {
            "ses_ac" => Self::VolumeOn,
            "ses_kapat" => Self::VolumeOff,
            "ekran_goruntusu" => Self::Screenshot,
            "parlaklik_ac" => Self::BrightnessOn,
            "parlaklik_kapat" => Self::BrightnessOff,
            _ => Self::Unknown,
        }
    }

    /// The word this token is spelled as on the wire, or `"unknown"`.
    #[must_use]
    pub fn wire_word(&self) -> &'static str {
        match self {
            Self::VolumeOn => "ses_ac",
            Self::VolumeOff => "ses_kapat",
            Self::Screenshot => "ekran_goruntusu",
            Self::BrightnessOn => "parlaklik_ac",
            Self::BrightnessOff => "parlaklik_kapat",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CommandToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_word())
    }
}

/// Where a command submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOrigin {
    /// Decoded from a notification on the wireless link.
    Wireless,
    /// Submitted through the HTTP façade.
    Http,
}

impl std::fmt::Display for CommandOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wireless => f.write_str("wireless"),
            Self::Http => f.write_str("http"),
        }
    }
}
