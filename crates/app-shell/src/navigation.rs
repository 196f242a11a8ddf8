//! Client-side navigation context.
//!
//! A [`Navigation`] owns the reactive current [`Location`] and the history it
//! comes from: the browser History API (`popstate` for back/forward,
//! `pushState`/`replaceState` for [`Navigation::go_to`] and
//! [`Navigation::replace`]) or an in-memory entry stack for tests and hosts
//! without a window.
//!
//! One context per thread can be installed with [`Navigation::install`];
//! descendants read it with [`current`].

use std::cell::RefCell;
use std::rc::Rc;

use zoon::{history, window, Closure, JsCast, JsValue, Mutable, Signal};

use crate::console;
use crate::error::NavigationError;
use crate::location::Location;

thread_local! {
    static CURRENT_NAVIGATION: RefCell<Option<Navigation>> = const { RefCell::new(None) };
}

/// The installed navigation context, if any.
pub fn current() -> Option<Navigation> {
    CURRENT_NAVIGATION.with(|cell| cell.borrow().clone())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryAction {
    Push,
    Replace,
}

enum History {
    Browser {
        popstate_listener: Closure<dyn Fn()>,
    },
    Memory(RefCell<MemoryHistory>),
}

struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    fn new(location: Location) -> Self {
        Self {
            entries: vec![location],
            index: 0,
        }
    }

    fn apply(&mut self, action: HistoryAction, location: Location) {
        match action {
            HistoryAction::Push => {
                self.entries.truncate(self.index + 1);
                self.entries.push(location);
                self.index = self.entries.len() - 1;
            }
            HistoryAction::Replace => self.entries[self.index] = location,
        }
    }

    fn step(&mut self, delta: isize) -> Option<Location> {
        let index = self.index.checked_add_signed(delta)?;
        let location = self.entries.get(index)?.clone();
        self.index = index;
        Some(location)
    }
}

struct Inner {
    location: Mutable<Location>,
    history: History,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let History::Browser { popstate_listener } = &self.history {
            if let Err(error) = window().remove_event_listener_with_callback(
                "popstate",
                popstate_listener.as_ref().unchecked_ref(),
            ) {
                console::error(format_args!("Failed to remove popstate listener: {error:?}"));
            }
        }
    }
}

#[derive(Clone)]
pub struct Navigation {
    inner: Rc<Inner>,
}

impl Navigation {
    /// Navigation backed by the browser history of the current window.
    ///
    /// The `popstate` listener stays registered until the last clone is dropped.
    pub fn browser() -> Self {
        let location = Mutable::new(browser_location());
        let popstate_listener: Closure<dyn Fn()> = Closure::new({
            let location = location.clone();
            move || {
                let next = browser_location();
                trace_location_change("popstate", &next);
                location.set_neq(next);
            }
        });
        if let Err(error) = window().add_event_listener_with_callback(
            "popstate",
            popstate_listener.as_ref().unchecked_ref(),
        ) {
            console::error(format_args!("Failed to listen to popstate: {error:?}"));
        }
        Self {
            inner: Rc::new(Inner {
                location,
                history: History::Browser { popstate_listener },
            }),
        }
    }

    /// Navigation with an in-memory history starting at `path`.
    pub fn memory(path: &str) -> Self {
        let location = Location::new(path);
        Self {
            inner: Rc::new(Inner {
                location: Mutable::new(location.clone()),
                history: History::Memory(RefCell::new(MemoryHistory::new(location))),
            }),
        }
    }

    /// Makes this the thread's navigation context, replacing the previous one.
    pub fn install(self) -> Self {
        CURRENT_NAVIGATION.with(|cell| *cell.borrow_mut() = Some(self.clone()));
        self
    }

    pub fn is_browser(&self) -> bool {
        matches!(self.inner.history, History::Browser { .. })
    }

    pub fn location(&self) -> Location {
        self.inner.location.get_cloned()
    }

    pub fn location_signal(&self) -> impl Signal<Item = Location> + use<> {
        self.inner.location.signal_cloned()
    }

    /// Pushes a new history entry for `path`.
    pub fn go_to(&self, path: &str) -> Result<(), NavigationError> {
        self.navigate(path, HistoryAction::Push)
    }

    /// Replaces the current history entry with `path`.
    pub fn replace(&self, path: &str) -> Result<(), NavigationError> {
        self.navigate(path, HistoryAction::Replace)
    }

    /// Moves one entry back. In the browser the location follows with the
    /// `popstate` event; a memory history updates immediately.
    pub fn back(&self) -> Result<(), NavigationError> {
        self.step(-1)
    }

    pub fn forward(&self) -> Result<(), NavigationError> {
        self.step(1)
    }

    fn navigate(&self, path: &str, action: HistoryAction) -> Result<(), NavigationError> {
        if !path.starts_with('/') {
            return Err(NavigationError::RelativePath(path.to_string()));
        }
        if path.starts_with("//") {
            return Err(NavigationError::ProtocolRelative(path.to_string()));
        }
        let location = Location::new(path);
        match &self.inner.history {
            History::Browser { .. } => {
                let result = match action {
                    HistoryAction::Push => {
                        history().push_state_with_url(&JsValue::NULL, "", Some(path))
                    }
                    HistoryAction::Replace => {
                        history().replace_state_with_url(&JsValue::NULL, "", Some(path))
                    }
                };
                result.map_err(|error| NavigationError::History(format!("{error:?}")))?;
            }
            History::Memory(memory) => memory.borrow_mut().apply(action, location.clone()),
        }
        trace_location_change(
            match action {
                HistoryAction::Push => "go_to",
                HistoryAction::Replace => "replace",
            },
            &location,
        );
        self.inner.location.set_neq(location);
        Ok(())
    }

    fn step(&self, delta: isize) -> Result<(), NavigationError> {
        match &self.inner.history {
            History::Browser { .. } => {
                let result = if delta < 0 {
                    history().back()
                } else {
                    history().forward()
                };
                result.map_err(|error| NavigationError::History(format!("{error:?}")))
            }
            History::Memory(memory) => {
                let next = memory.borrow_mut().step(delta);
                if let Some(location) = next {
                    trace_location_change(if delta < 0 { "back" } else { "forward" }, &location);
                    self.inner.location.set_neq(location);
                }
                Ok(())
            }
        }
    }
}

fn browser_location() -> Location {
    Location::new(&window().location().pathname().unwrap_or_else(|_| "/".to_string()))
}

#[cfg(feature = "debug-navigation")]
fn trace_location_change(source: &str, location: &Location) {
    console::debug(format_args!("navigation ({source}): {location}"));
}

#[cfg(not(feature = "debug-navigation"))]
fn trace_location_change(_source: &str, _location: &Location) {}
