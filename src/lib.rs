//! Zaz page enhancer.
//!
//! Cosmetic client-side behavior for the server-rendered game chat page: the
//! turn progress bar, win/lose/send audio cues, staggered message reveals and
//! the "thinking" indicator shown while a guess is being sent. Everything is
//! wired once, when the document is ready, by `start_page()`.

use std::cell::RefCell;

use log::warn;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod dom;
mod error;
pub mod page;
pub mod turn_bar;

pub use config::PageConfig;
pub use error::{PageError, TurnCounterError};
pub use page::{Orchestrator, PageReport, PageState, TurnBarOutcome};
pub use turn_bar::{TurnBar, parse_turn_value};

use page::web::{WebClock, WebCues, WebDocument};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. module re-instantiated) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

// One orchestrator per page; it refuses to run twice.
thread_local! {
    static ORCHESTRATOR: RefCell<Option<Orchestrator>> = const { RefCell::new(None) };
}

/// Wire the page with default settings once the document is ready.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    start_with(PageConfig::default()).map_err(JsValue::from)
}

/// Like `start_page`, with a JSON override of any `PageConfig` fields.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_page_with_config(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json)?;
    start_with(config).map_err(JsValue::from)
}

/// Re-render the turn bar, e.g. after the chat list is refreshed in place.
#[wasm_bindgen]
pub fn render_turns(current: u32, max: u32) -> Result<(), JsValue> {
    let doc = WebDocument::current()?;
    turn_bar::render_turn_bar(&doc, current, max);
    Ok(())
}

fn start_with(config: PageConfig) -> Result<(), PageError> {
    let doc = WebDocument::current()?;
    ORCHESTRATOR.with(|cell| install(&mut cell.borrow_mut(), config));
    let ready_doc = doc.clone();
    doc.on_ready(move || {
        let cues = WebCues::new(&ready_doc);
        ORCHESTRATOR.with(|cell| {
            if let Some(orch) = cell.borrow_mut().as_mut() {
                orch.run(&ready_doc, &WebClock, &cues);
            }
        });
    })
}

/// Put an orchestrator in `slot` unless one is already there. Returns whether
/// `config` took effect; a differing config arriving late is reported and dropped.
fn install(slot: &mut Option<Orchestrator>, config: PageConfig) -> bool {
    match slot {
        Some(existing) => {
            if existing.config() != &config {
                warn!("page already started with another config; ignoring the new one");
            }
            false
        }
        None => {
            *slot = Some(Orchestrator::new(config));
            true
        }
    }
}
