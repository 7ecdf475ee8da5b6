//! Browser implementations of the page capabilities on top of `web_sys`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement, HtmlFormElement, window};

use crate::dom::{Clock, Cue, CuePlayer, PageDocument, PageNode};
use crate::error::PageError;

/// The live document.
#[derive(Clone)]
pub struct WebDocument {
    doc: Document,
}

impl WebDocument {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    /// The document of the current window.
    pub fn current() -> Result<Self, PageError> {
        let win = window().ok_or(PageError::NoWindow)?;
        let doc = win.document().ok_or(PageError::NoDocument)?;
        Ok(Self::new(doc))
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// `true` once the parser is done, i.e. `DOMContentLoaded` has already fired.
    pub fn is_parsed(&self) -> bool {
        self.doc.ready_state() != "loading"
    }

    /// Run `f` once on `DOMContentLoaded`, or right away if that already happened.
    pub fn on_ready(&self, f: impl FnOnce() + 'static) -> Result<(), PageError> {
        if self.is_parsed() {
            f();
            return Ok(());
        }
        let closure = Closure::once(f);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        self.doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        closure.forget();
        Ok(())
    }
}

impl PageNode for Element {
    fn query(&self, selector: &str) -> Option<Self> {
        self.query_selector(selector).ok().flatten()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn form_action(&self) -> Option<String> {
        // `action` resolves to an absolute URL, like the DOM property does.
        self.dyn_ref::<HtmlFormElement>().map(HtmlFormElement::action)
    }

    fn set_id(&self, id: &str) {
        Element::set_id(self, id);
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            el.style().set_property(property, value).ok();
        }
    }

    fn add_class(&self, class: &str) {
        self.class_list().add_1(class).ok();
    }

    fn insert_after(&self, node: &Self) {
        if self.parent_node().is_some() {
            self.after_with_node_1(node).ok();
        }
    }

    fn on_submit(&self, mut handler: Box<dyn FnMut()>) {
        let closure =
            Closure::wrap(Box::new(move |_evt: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
        let listener = closure.as_ref().unchecked_ref();
        if self.add_event_listener_with_callback("submit", listener).is_ok() {
            closure.forget();
        }
    }
}

impl PageDocument for WebDocument {
    type Node = Element;

    fn by_id(&self, id: &str) -> Option<Element> {
        self.doc.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.doc.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.doc.query_selector_all(selector) else { return Vec::new() };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.doc.create_element(tag).ok()
    }
}

/// `setTimeout` through gloo; timers are detached and never cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebClock;

impl Clock for WebClock {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, callback).forget();
    }
}

/// `<audio>` elements looked up by id.
#[derive(Clone)]
pub struct WebCues {
    doc: Document,
}

impl WebCues {
    pub fn new(doc: &WebDocument) -> Self {
        Self { doc: doc.document().clone() }
    }
}

impl CuePlayer for WebCues {
    type Handle = HtmlAudioElement;

    fn find(&self, cue: Cue) -> Option<HtmlAudioElement> {
        self.doc.get_element_by_id(cue.element_id())?.dyn_into::<HtmlAudioElement>().ok()
    }

    fn play(&self, handle: Option<&HtmlAudioElement>) {
        // Autoplay policy rejections surface as a rejected promise; ignore them.
        if let Some(audio) = handle {
            let _ = audio.play();
        }
    }
}
