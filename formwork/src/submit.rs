//! Submission state for forms.
//!
//! A form that submits asynchronously needs exactly one piece of shared
//! state: whether a submission is currently in flight. [`Submission`] is
//! that flag, modeled as a small state machine so the view can also tell
//! "never submitted" apart from "submitted successfully".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

/// The lifecycle of a form submission.
///
/// There is no error state: the submission handler in this design cannot
/// fail, it only takes time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// No submission has been attempted.
    #[default]
    Idle,
    /// A submission is in flight; the form is busy.
    Pending,
    /// The last submission completed.
    Done,
}

/// Handle for the submission state, cheap to clone and safe to observe
/// from async tasks.
#[derive(Debug, Default)]
pub struct Submission {
    state: Arc<RwLock<SubmitState>>,
    dirty: Arc<AtomicBool>,
}

impl Submission {
    /// Create a new idle submission handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    pub fn state(&self) -> SubmitState {
        self.state
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    /// Check if no submission has been attempted yet.
    pub fn is_idle(&self) -> bool {
        self.state() == SubmitState::Idle
    }

    /// Check if a submission is in flight.
    pub fn is_pending(&self) -> bool {
        self.state() == SubmitState::Pending
    }

    /// Check if the last submission completed.
    pub fn is_done(&self) -> bool {
        self.state() == SubmitState::Done
    }

    /// Try to start a submission.
    ///
    /// Returns `false` while a submission is already pending, so a second
    /// submit action is refused instead of queued.
    pub fn begin(&self) -> bool {
        if let Ok(mut guard) = self.state.write() {
            if *guard == SubmitState::Pending {
                debug!("submission refused: already pending");
                return false;
            }
            *guard = SubmitState::Pending;
            self.dirty.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Mark the in-flight submission as completed.
    pub fn complete(&self) {
        if let Ok(mut guard) = self.state.write() {
            if *guard != SubmitState::Pending {
                debug!("completion without pending submission ignored");
                return;
            }
            *guard = SubmitState::Done;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Return to the idle state (form reset).
    pub fn reset(&self) {
        if let Ok(mut guard) = self.state.write() {
            *guard = SubmitState::Idle;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Submission {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
