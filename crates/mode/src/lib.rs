//! Enable/disable lifecycle for sibling cycling.
//!
//! The editor integration owns a `CycleMode`, feeds it key events and lets
//! unhandled keys fall through to the editor:
//!
//! ```text
//! KeyEvent → CycleMode::handle_key → Some(outcome)  (consumed)
//!                                  → None           (pass to editor)
//! ```

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use namesake_config::Config;
use namesake_core::{CycleOutcome, DocumentHost};
use namesake_keymap::{CycleAction, CycleKeymap};
use namesake_logger as logger;

/// Sibling cycling mode: an on/off switch plus its key bindings.
#[derive(Debug, Clone)]
pub struct CycleMode {
    enabled: bool,
    keymap: CycleKeymap,
}

impl Default for CycleMode {
    fn default() -> Self {
        Self::new(CycleKeymap::default(), true)
    }
}

impl CycleMode {
    /// Create a mode with the given bindings.
    pub fn new(keymap: CycleKeymap, enabled: bool) -> Self {
        Self { enabled, keymap }
    }

    /// Create a mode from configured bindings and start state.
    pub fn from_config(config: &Config) -> Result<Self> {
        let keymap = CycleKeymap::from_settings(&config.keys)?;
        Ok(Self::new(keymap, config.general.enabled_on_start))
    }

    /// Turn cycling on.
    pub fn enable(&mut self) {
        if !self.enabled {
            logger::info("Sibling cycling enabled");
        }
        self.enabled = true;
    }

    /// Turn cycling off. Bound keys pass through to the editor.
    pub fn disable(&mut self) {
        if self.enabled {
            logger::info("Sibling cycling disabled");
        }
        self.enabled = false;
    }

    /// Flip the on/off state and return the new state.
    pub fn toggle(&mut self) -> bool {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
        self.enabled
    }

    /// Whether bound keys currently cycle.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handle a key event.
    ///
    /// Returns `Ok(None)` when the mode is disabled, the key is not bound or
    /// the event is not a press, meaning the key should be passed on to the
    /// editor. Release and repeat events never cycle.
    pub fn handle_key<H: DocumentHost>(
        &self,
        key: &KeyEvent,
        host: &mut H,
    ) -> Result<Option<CycleOutcome>> {
        if !self.enabled || key.kind != KeyEventKind::Press {
            return Ok(None);
        }
        let Some(action) = self.keymap.action_for(key) else {
            return Ok(None);
        };
        self.run(action, host).map(Some)
    }

    /// Run an action directly, regardless of key bindings.
    ///
    /// Disabled mode still refuses to act and reports the current document
    /// as unchanged.
    pub fn run<H: DocumentHost>(&self, action: CycleAction, host: &mut H) -> Result<CycleOutcome> {
        if !self.enabled {
            return Ok(match host.current_document() {
                Some(doc) => CycleOutcome::Unchanged {
                    current: host.identity(&doc),
                },
                None => CycleOutcome::NoCurrentDocument,
            });
        }
        match action {
            CycleAction::Advance => namesake_cycle::advance(host),
            CycleAction::Retreat => namesake_cycle::retreat(host),
        }
    }
}
