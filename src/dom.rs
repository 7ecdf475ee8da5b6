//! Capabilities the page orchestrator runs against.
//!
//! The orchestrator never touches `web_sys` directly. The browser implementations
//! live in `page::web`; tests use the in-memory fixture in `page::fake`.

/// A handle to one element. Handles are cheap to clone and may be captured by
/// callbacks that outlive initialization.
pub trait PageNode: Clone + 'static {
    /// First descendant matching `selector`.
    fn query(&self, selector: &str) -> Option<Self>;
    fn attr(&self, name: &str) -> Option<String>;
    /// The form submission target; `None` for non-form elements.
    fn form_action(&self) -> Option<String>;
    fn set_id(&self, id: &str);
    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
    fn add_class(&self, class: &str);
    /// Insert `node` as the next sibling of `self`. A no-op if `self` is detached.
    fn insert_after(&self, node: &Self);
    /// Run `handler` on every submit event. Default submission is left alone.
    fn on_submit(&self, handler: Box<dyn FnMut()>);
}

pub trait PageDocument {
    type Node: PageNode;

    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn query(&self, selector: &str) -> Option<Self::Node>;
    /// All matches, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// Create a detached element.
    fn create_element(&self, tag: &str) -> Option<Self::Node>;
}

/// One-shot deferred callbacks. Nothing scheduled is ever cancelled.
pub trait Clock {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// The audio cues the page knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Send,
    Win,
    Lose,
}

impl Cue {
    /// Id of the `<audio>` element carrying this cue.
    pub fn element_id(self) -> &'static str {
        match self {
            Cue::Send => "sound-send",
            Cue::Win => "sound-win",
            Cue::Lose => "sound-lose",
        }
    }
}

/// Looks up cue handles and plays them if they exist.
pub trait CuePlayer: Clone + 'static {
    type Handle: Clone + 'static;

    fn find(&self, cue: Cue) -> Option<Self::Handle>;
    /// Play `handle` if present. Playback failures are swallowed.
    fn play(&self, handle: Option<&Self::Handle>);
}
