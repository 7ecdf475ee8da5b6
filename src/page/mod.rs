//! One-shot page orchestration for the game chat page.
//!
//! Runs once the document is parsed and wires everything the server-rendered
//! markup needs on top: staggered message reveals, the send form's "thinking"
//! indicator, outcome cues and the turn bar. Every step tolerates its elements
//! being absent; a missing element only means that feature is skipped.
//!
//! The orchestrator is generic over the `dom` capabilities so it runs the same
//! against the real document (`web`) and the native test fixture (`fake`).

pub mod web;

use std::fmt;

use log::{debug, info, warn};

use crate::config::PageConfig;
use crate::dom::{Clock, Cue, CuePlayer, PageDocument, PageNode};
use crate::turn_bar::{self, TurnBar};

const CHAT_SELECTOR: &str = "#chat";
const CHAT_ITEM_SELECTOR: &str = "#chat li";
const WIN_SELECTOR: &str = ".status-win";
const LOSE_SELECTOR: &str = ".status-lose";

/// Lifecycle: the page is wired exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Uninitialized,
    Initialized,
}

/// What happened to the turn counter during initialization.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnBarOutcome {
    /// No `#turn-counter` on the page.
    Absent,
    Rendered(TurnBar),
    /// Attributes were malformed; the bar was left as rendered by the server.
    Skipped(crate::TurnCounterError),
}

/// Summary of one initialization pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PageReport {
    pub reveals_scheduled: usize,
    pub indicator_attached: bool,
    pub send_form_wired: bool,
    pub outcome_cues: Vec<Cue>,
    pub turn_bar: TurnBarOutcome,
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turns = match &self.turn_bar {
            TurnBarOutcome::Absent => "absent".to_string(),
            TurnBarOutcome::Rendered(bar) => bar.label(),
            TurnBarOutcome::Skipped(_) => "skipped".to_string(),
        };
        write!(
            f,
            "reveals={} indicator={} send_form={} cues={:?} turns={}",
            self.reveals_scheduled,
            self.indicator_attached,
            self.send_form_wired,
            self.outcome_cues,
            turns
        )
    }
}

#[derive(Debug, Default)]
pub struct Orchestrator {
    config: PageConfig,
    state: PageState,
}

impl Orchestrator {
    pub fn new(config: PageConfig) -> Self {
        Self { config, state: PageState::Uninitialized }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Wire the page. Returns `None` if this orchestrator already ran.
    pub fn run<D, C, P>(&mut self, doc: &D, clock: &C, cues: &P) -> Option<PageReport>
    where
        D: PageDocument,
        C: Clock,
        P: CuePlayer,
    {
        if self.state == PageState::Initialized {
            debug!("page already initialized; ignoring ready signal");
            return None;
        }
        self.state = PageState::Initialized;
        let cfg = &self.config;

        let send = cues.find(Cue::Send);
        let win = cues.find(Cue::Win);
        let lose = cues.find(Cue::Lose);

        let indicator = doc.create_element("div");
        let mut indicator_attached = false;
        if let Some(indicator) = &indicator {
            indicator.set_id(&cfg.typing_indicator_id);
            indicator.set_text(&cfg.typing_indicator_text);
            match doc.query(CHAT_SELECTOR) {
                Some(chat) => {
                    chat.insert_after(indicator);
                    indicator_attached = true;
                }
                None => debug!("no chat container; typing indicator left detached"),
            }
        }

        let items = doc.query_all(CHAT_ITEM_SELECTOR);
        let reveals_scheduled = items.len();
        for (i, item) in items.into_iter().enumerate() {
            let class = cfg.reveal_class.clone();
            clock.schedule(cfg.reveal_delay_ms(i), Box::new(move || item.add_class(&class)));
        }

        let send_form_wired = wire_send_form(doc, clock, cues, send, indicator, cfg);

        let mut outcome_cues = Vec::new();
        let won = doc.query(WIN_SELECTOR).is_some();
        let lost = doc.query(LOSE_SELECTOR).is_some();
        if won && lost {
            warn!("page shows both win and lose status; playing both cues");
        }
        if won {
            cues.play(win.as_ref());
            outcome_cues.push(Cue::Win);
        }
        if lost {
            cues.play(lose.as_ref());
            outcome_cues.push(Cue::Lose);
        }

        let turn_outcome = match doc.by_id(turn_bar::TURN_COUNTER_ID) {
            None => TurnBarOutcome::Absent,
            Some(chip) => match turn_bar::read_turn_counter(&chip) {
                Ok((current, max)) => turn_bar::render_turn_bar(doc, current, max)
                    .map_or(TurnBarOutcome::Absent, TurnBarOutcome::Rendered),
                Err(err) => {
                    warn!("turn bar not rendered: {err}");
                    TurnBarOutcome::Skipped(err)
                }
            },
        };

        let report = PageReport {
            reveals_scheduled,
            indicator_attached,
            send_form_wired,
            outcome_cues,
            turn_bar: turn_outcome,
        };
        info!("page initialized: {report}");
        Some(report)
    }
}

/// Attach the submit handler and arm the hide timer. Returns whether the
/// first form on the page qualified as the send form.
fn wire_send_form<D, C, P>(
    doc: &D,
    clock: &C,
    cues: &P,
    send: Option<P::Handle>,
    indicator: Option<D::Node>,
    cfg: &PageConfig,
) -> bool
where
    D: PageDocument,
    C: Clock,
    P: CuePlayer,
{
    let Some(form) = doc.query("form") else { return false };
    let is_send_form =
        form.form_action().is_some_and(|action| action.contains(cfg.send_path.as_str()));
    if !is_send_form {
        return false;
    }

    let player = cues.clone();
    let shown = indicator.clone();
    form.on_submit(Box::new(move || {
        player.play(send.as_ref());
        if let Some(indicator) = &shown {
            indicator.set_style("display", "block");
        }
    }));

    // Simulated response latency, armed once from init rather than per submit.
    clock.schedule(
        cfg.typing_hide_delay_ms,
        Box::new(move || {
            if let Some(indicator) = &indicator {
                indicator.set_style("display", "none");
            }
        }),
    );
    true
}
