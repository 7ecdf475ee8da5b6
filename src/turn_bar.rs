//! Turn progress bar: `#turn-counter` holds a `.bar` whose width tracks
//! current/max and a `.txt` label.

use crate::dom::{PageDocument, PageNode};
use crate::error::TurnCounterError;

pub const TURN_COUNTER_ID: &str = "turn-counter";
pub const CURRENT_ATTR: &str = "data-current";
pub const MAX_ATTR: &str = "data-max";

/// Computed bar state for one (current, max) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnBar {
    pub current: u32,
    pub max: u32,
    /// Fill percentage, always within 0..=100.
    pub pct: f64,
}

impl TurnBar {
    /// A `max` of 0 renders as a full bar rather than dividing by zero.
    pub fn new(current: u32, max: u32) -> Self {
        let ratio = if max == 0 { 1.0 } else { (f64::from(current) / f64::from(max)).min(1.0) };
        Self { current, max, pct: ratio * 100.0 }
    }

    /// CSS width, e.g. `30%`. `f64` Display gives the same shortest form the
    /// browser would print (`100`, not `100.0`).
    pub fn width(&self) -> String {
        format!("{}%", self.pct)
    }

    pub fn label(&self) -> String {
        format!("Turns: {}/{}", self.current, self.max)
    }
}

/// Apply the bar to the document. Returns `None` when there is no turn counter.
pub fn render_turn_bar<D: PageDocument>(doc: &D, current: u32, max: u32) -> Option<TurnBar> {
    let chip = doc.by_id(TURN_COUNTER_ID)?;
    let bar = TurnBar::new(current, max);
    if let Some(fill) = chip.query(".bar") {
        fill.set_style("width", &bar.width());
    }
    if let Some(txt) = chip.query(".txt") {
        txt.set_text(&bar.label());
    }
    Some(bar)
}

/// Read both counts off the turn counter element.
pub fn read_turn_counter<N: PageNode>(chip: &N) -> Result<(u32, u32), TurnCounterError> {
    let current = parse_turn_value(CURRENT_ATTR, chip.attr(CURRENT_ATTR).as_deref())?;
    let max = parse_turn_value(MAX_ATTR, chip.attr(MAX_ATTR).as_deref())?;
    Ok((current, max))
}

/// Base-10 integer parse with the browser's `parseInt` leniency: leading
/// whitespace and a sign are accepted, trailing garbage is ignored.
pub fn parse_turn_value(attr: &'static str, raw: Option<&str>) -> Result<u32, TurnCounterError> {
    let raw = raw.ok_or(TurnCounterError::Missing(attr))?;
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &unsigned[..digits_len];
    if digits.is_empty() {
        return Err(TurnCounterError::NotANumber { attr, value: raw.to_string() });
    }
    // "-0" parses to zero, which is still a valid count.
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(TurnCounterError::Negative { attr, value: raw.to_string() });
    }
    digits
        .parse::<u32>()
        .map_err(|_| TurnCounterError::OutOfRange { attr, value: raw.to_string() })
}
