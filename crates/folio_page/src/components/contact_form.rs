//! Contact form controller
//!
//! Submission lifecycle:
//!
//! ```text
//! Idle ──submit──▶ Validating ──missing field──▶ Rejected
//!                      │
//!                      └──all present──▶ Sending ──delay──▶ Done
//! ```
//!
//! Delivery is simulated: `Sending` always resolves to `Done` once the
//! configured delay elapses, unless the pending timer is cancelled by
//! [`ContactFormController::teardown`]. `Done` and `Rejected` accept a new
//! submit.

use std::time::Duration;

use folio_core::{transition, Document, ElementId, StateTransitions, TimerQueue, TimerToken};
use tracing::{debug, trace};

use super::is_within;
use crate::config::{PageConfig, Selectors};
use crate::task::PageTask;

/// Where the current submission is
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Sending,
    Done(String),
    Rejected(String),
}

impl SubmissionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Validating => "validating",
            SubmissionPhase::Sending => "sending",
            SubmissionPhase::Done(_) => "done",
            SubmissionPhase::Rejected(_) => "rejected",
        }
    }

    /// Status message of a finished submission
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Done(msg) | SubmissionPhase::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    Reject(String),
    Accept,
    Deliver(String),
    /// Pending delivery abandoned
    Cancel,
}

impl StateTransitions for SubmissionPhase {
    type Event = SubmissionEvent;

    fn on_event(&self, event: SubmissionEvent) -> Option<Self> {
        use SubmissionPhase::*;

        match (self, event) {
            (Idle | Done(_) | Rejected(_), SubmissionEvent::Submit) => Some(Validating),
            (Validating, SubmissionEvent::Reject(msg)) => Some(Rejected(msg)),
            (Validating, SubmissionEvent::Accept) => Some(Sending),
            (Sending, SubmissionEvent::Deliver(msg)) => Some(Done(msg)),
            (Sending, SubmissionEvent::Cancel) => Some(Idle),
            _ => None,
        }
    }
}

/// Texts and timing the controller uses
#[derive(Clone, Debug, PartialEq)]
pub struct FormSettings {
    pub required_fields: Vec<String>,
    pub incomplete_message: String,
    pub sent_message: String,
    pub send_label: String,
    pub sending_label: String,
    pub hidden_class: String,
    pub announce_rejection: bool,
    pub delay: Duration,
}

impl From<&PageConfig> for FormSettings {
    fn from(config: &PageConfig) -> Self {
        Self {
            required_fields: config.required_fields.clone(),
            incomplete_message: config.messages.incomplete.clone(),
            sent_message: config.messages.sent.clone(),
            send_label: config.labels.send.clone(),
            sending_label: config.labels.sending.clone(),
            hidden_class: config.status_hidden_class.clone(),
            announce_rejection: config.announce_rejection,
            delay: config.submit_delay(),
        }
    }
}

/// Result of a submit event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A delivery is already pending
    Ignored,
    Rejected {
        /// Required fields that were empty or absent
        missing: Vec<String>,
    },
    Sending {
        token: TimerToken,
    },
}

#[derive(Debug)]
pub struct ContactFormController {
    form: ElementId,
    submit: Option<ElementId>,
    clear: Option<ElementId>,
    status: Option<ElementId>,
    settings: FormSettings,
    phase: SubmissionPhase,
    pending: Option<TimerToken>,
}

impl ContactFormController {
    /// Bind to the contact form; `None` if there is no form
    ///
    /// Submit control, clear control and status region are each optional.
    pub fn mount<D: Document + ?Sized>(
        doc: &D,
        selectors: &Selectors,
        settings: FormSettings,
    ) -> Option<Self> {
        let Some(form) = doc.query(&selectors.contact_form) else {
            debug!("contact form missing, form controller disabled");
            return None;
        };

        Some(Self {
            form,
            submit: doc.query_within(form, &selectors.submit).into_iter().next(),
            clear: doc.query(&selectors.clear),
            status: doc.query(&selectors.status),
            settings,
            phase: SubmissionPhase::Idle,
            pending: None,
        })
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Token of the pending delivery, if any
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn owns_clear_click<D: Document + ?Sized>(&self, doc: &D, target: ElementId) -> bool {
        self.clear.is_some_and(|clear| is_within(doc, target, clear))
    }

    /// Required fields that are empty or absent from the form
    pub fn missing_fields<D: Document + ?Sized>(&self, doc: &D) -> Vec<String> {
        let fields = doc.descendants(self.form);
        self.settings
            .required_fields
            .iter()
            .filter(|name| {
                let value = fields
                    .iter()
                    .find(|el| doc.attribute(**el, "name").as_deref() == Some(name.as_str()))
                    .and_then(|el| doc.value(*el));
                value.map_or(true, |v| v.is_empty())
            })
            .cloned()
            .collect()
    }

    /// Handle a submit of the form; the caller cancels the default action
    pub fn submit<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        timers: &mut TimerQueue<PageTask>,
    ) -> SubmitOutcome {
        if !transition(&mut self.phase, SubmissionEvent::Submit) {
            debug!("submit ignored while delivery is pending");
            return SubmitOutcome::Ignored;
        }

        let missing = self.missing_fields(doc);
        if !missing.is_empty() {
            let message = self.settings.incomplete_message.clone();
            transition(&mut self.phase, SubmissionEvent::Reject(message));
            self.show_rejection(doc);
            debug!(?missing, "submission rejected");
            return SubmitOutcome::Rejected { missing };
        }

        transition(&mut self.phase, SubmissionEvent::Accept);
        if let Some(submit) = self.submit {
            doc.set_disabled(submit, true);
            doc.set_text(submit, &self.settings.sending_label);
        }
        let token = timers.schedule(self.settings.delay, PageTask::CompleteSubmission);
        self.pending = Some(token);
        debug!(delay_ms = self.settings.delay.as_millis() as u64, "submission sending");
        SubmitOutcome::Sending { token }
    }

    fn show_rejection<D: Document + ?Sized>(&self, doc: &mut D) {
        let Some(status) = self.status else {
            return;
        };
        doc.remove_attribute(status, "class");
        doc.set_text(status, &self.settings.incomplete_message);
        if !self.settings.announce_rejection {
            doc.add_class(status, &self.settings.hidden_class);
        }
    }

    /// Finish the delivery scheduled under `token`
    ///
    /// Returns `false` for a token that is not the pending one. Elements
    /// that disappeared meanwhile are left alone; the rest still update.
    pub fn complete<D: Document + ?Sized>(&mut self, doc: &mut D, token: TimerToken) -> bool {
        if self.pending != Some(token) {
            trace!("stale submission timer");
            return false;
        }
        self.pending = None;
        let message = self.settings.sent_message.clone();
        transition(&mut self.phase, SubmissionEvent::Deliver(message));

        if !doc.contains(self.form) {
            debug!("contact form removed before delivery completed");
        }
        if let Some(submit) = self.submit {
            doc.set_disabled(submit, false);
            doc.set_text(submit, &self.settings.send_label);
        }
        if let Some(status) = self.status {
            doc.set_text(status, &self.settings.sent_message);
            doc.remove_class(status, &self.settings.hidden_class);
        }
        self.reset_fields(doc);
        debug!("submission done");
        true
    }

    /// Empty every field, whatever the phase
    pub fn clear<D: Document + ?Sized>(&mut self, doc: &mut D) {
        self.reset_fields(doc);
        trace!(phase = self.phase.name(), "form cleared");
    }

    fn reset_fields<D: Document + ?Sized>(&self, doc: &mut D) {
        for el in doc.descendants(self.form) {
            if doc.value(el).is_some() {
                doc.set_value(el, "");
            }
        }
    }

    /// Cancel a pending delivery so it never completes
    pub fn teardown(&mut self, timers: &mut TimerQueue<PageTask>) {
        if let Some(token) = self.pending.take() {
            timers.cancel(token);
            transition(&mut self.phase, SubmissionEvent::Cancel);
            debug!("pending submission cancelled");
        }
    }
}
