//! Value formatting: raw field values to `(text, tone)` pairs.
//!
//! Tones are semantic only. Mapping a tone to terminal colours is left to
//! the caller so formatting can be tested without a terminal.

use crate::value::FieldValue;

/// Semantic colour of a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Placeholder for a missing value.
    Neutral,
    Favorable,
    Unfavorable,
    /// Free-form value shown as-is.
    Highlight,
}

/// Display-only text with its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub tone: Tone,
}

impl Formatted {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Format a field value for display.
///
/// Absent or `null` values give a neutral `None`. Booleans and `0`/`1`
/// integers give `Yes`/`No`; in chargeability mode `Yes` is unfavorable
/// (a charge applies) instead of favorable. Anything else is shown as its
/// plain text in the highlight tone.
pub fn format_value(value: Option<&FieldValue>, chargeability: bool) -> Formatted {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Formatted::new("None", Tone::Neutral);
    };

    match value.as_flag() {
        Some(flag) => {
            let text = if flag { "Yes" } else { "No" };
            let tone = if flag != chargeability {
                Tone::Favorable
            } else {
                Tone::Unfavorable
            };
            Formatted::new(text, tone)
        }
        None => Formatted::new(value.to_string(), Tone::Highlight),
    }
}
