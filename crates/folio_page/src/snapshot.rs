//! Serializable view of a page's interaction state

use std::time::Duration;

use folio_animation::AnimationReport;
use folio_core::Document;
use serde::Serialize;

use crate::components::{KeyboardMode, ModalState, NavState, SubmissionPhase};
use crate::page::{Listener, Page};

/// Everything observable about a mounted page, minus the document itself
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormSnapshot>,
    pub keyboard_mode: &'static str,
    pub listeners: Vec<Listener>,
    pub pending_timers: usize,
    pub elapsed_ms: u64,
    pub animations: AnimationReport,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModalSnapshot {
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&ModalState> for ModalSnapshot {
    fn from(state: &ModalState) -> Self {
        match state {
            ModalState::Closed => Self {
                open: false,
                title: None,
                body: None,
            },
            ModalState::Open { title, body, .. } => Self {
                open: true,
                title: Some(title.clone()),
                body: Some(body.clone()),
            },
        }
    }
}

impl From<&SubmissionPhase> for FormSnapshot {
    fn from(phase: &SubmissionPhase) -> Self {
        Self {
            phase: phase.name(),
            message: phase.message().map(str::to_string),
        }
    }
}

fn nav_name(state: NavState) -> &'static str {
    match state {
        NavState::Collapsed => "collapsed",
        NavState::Expanded => "expanded",
    }
}

fn keyboard_name(mode: KeyboardMode) -> &'static str {
    match mode {
        KeyboardMode::Pointer => "pointer",
        KeyboardMode::Tabbing => "tabbing",
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl<D: Document> Page<D> {
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            nav: self.nav_state().map(nav_name),
            modal: self.modal_state().map(ModalSnapshot::from),
            form: self.submission_phase().map(FormSnapshot::from),
            keyboard_mode: keyboard_name(self.keyboard_mode()),
            listeners: self.listeners().to_vec(),
            pending_timers: self.pending_timers(),
            elapsed_ms: millis(self.elapsed()),
            animations: self.animations(),
        }
    }
}
