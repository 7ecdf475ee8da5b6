//! Page timing and naming constants, overridable from JSON when the `serde`
//! feature is on.

/// Knobs for the page orchestrator. Defaults reproduce the shipped game page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    /// Delay between consecutive chat message reveals.
    pub reveal_interval_ms: u32,
    /// Delay after init before the typing indicator is hidden again.
    pub typing_hide_delay_ms: u32,
    pub typing_indicator_id: String,
    pub typing_indicator_text: String,
    /// Class added to each chat item when it is revealed.
    pub reveal_class: String,
    /// Substring a form action must contain to count as the send form.
    pub send_path: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 200,
            typing_hide_delay_ms: 2500,
            typing_indicator_id: "typing-indicator".to_string(),
            typing_indicator_text: "Zaz is thinking...".to_string(),
            reveal_class: "chat-msg".to_string(),
            send_path: "/send".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Delay for the reveal of the chat item at `index`, saturating instead of wrapping.
    pub fn reveal_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.reveal_interval_ms.saturating_mul(index)
    }
}
