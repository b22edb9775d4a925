//! Page-session controller: owns the UI state and the search debouncer.

use contracts::menu::state::UiState;
use contracts::shared::debounce::Debouncer;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

enum Flush {
    Due(String),
    Wait(u64),
    Idle,
}

#[derive(Clone, Copy)]
pub struct MenuController {
    pub state: RwSignal<UiState>,
    pub input: NodeRef<html::Input>,
    debouncer: StoredValue<Debouncer<String>>,
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

impl MenuController {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            state: RwSignal::new(UiState::default()),
            input: NodeRef::new(),
            debouncer: StoredValue::new(Debouncer::new(u64::from(debounce_ms))),
        }
    }

    /// Raw keystroke value. Only the last value of a burst reaches the filter.
    /// Ignored until the menu has loaded.
    pub fn on_input(&self, raw: String) {
        if !self.state.with_untracked(|s| s.is_loaded()) {
            return;
        }
        let now = now_ms();
        let armed = self
            .debouncer
            .try_update_value(|d| {
                let armed = d.is_pending();
                d.push(raw, now);
                armed
            })
            .unwrap_or(true);

        if !armed {
            let delay = self.debouncer.with_value(|d| d.delay_ms());
            self.schedule_flush(delay);
        }
    }

    /// One timer per burst; it re-arms itself until the quiet period is over.
    fn schedule_flush(self, first_wait_ms: u64) {
        spawn_local(async move {
            let mut wait = first_wait_ms;
            loop {
                TimeoutFuture::new(wait.min(u64::from(u32::MAX)) as u32).await;
                let now = now_ms();
                let step = self
                    .debouncer
                    .try_update_value(|d| match d.take_due(now) {
                        Some(query) => Flush::Due(query),
                        None => d.remaining(now).map(Flush::Wait).unwrap_or(Flush::Idle),
                    })
                    .unwrap_or(Flush::Idle);

                match step {
                    Flush::Due(query) => {
                        self.apply_query(&query);
                        break;
                    }
                    Flush::Wait(remaining) => wait = remaining.max(1),
                    Flush::Idle => break,
                }
            }
        });
    }

    fn apply_query(&self, raw: &str) {
        self.state.maybe_update(|s| s.set_query(raw));
    }

    /// Empty the box and the query right away, dropping any pending keystrokes.
    pub fn clear(&self) {
        self.debouncer.update_value(|d| d.cancel());
        if let Some(input) = self.input.get_untracked() {
            input.set_value("");
        }
        self.state.maybe_update(|s| s.clear_query());
    }

    pub fn clear_and_focus(&self) {
        self.clear();
        self.focus_search();
    }

    pub fn clear_and_blur(&self) {
        self.clear();
        if let Some(input) = self.input.get_untracked() {
            let _ = input.blur();
        }
    }

    pub fn focus_search(&self) {
        if let Some(input) = self.input.get_untracked() {
            let _ = input.focus();
        }
    }

    pub fn select_category(&self, value: &str) {
        self.state.update(|s| s.select_category(value));
    }

    /// Whether the search box currently has keyboard focus.
    pub fn search_has_focus(&self) -> bool {
        let Some(input) = self.input.get_untracked() else {
            return false;
        };
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .map(|active| {
                let node: &web_sys::Node = &input;
                active.is_same_node(Some(node))
            })
            .unwrap_or(false)
    }
}
