//! Script replay

use std::time::Duration;

use folio_core::{Document, DomEvent, ElementId, Key, MemoryDocument, Selector};
use folio_page::Page;
use serde::Serialize;
use tracing::debug;

use crate::fixture::{FixtureError, Script, Step};

/// What one step did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: &'static str,
    /// Listeners that acted, for input events
    pub handled: u32,
    pub default_prevented: bool,
    /// Timers that ran, for `advance`
    pub timers_fired: usize,
}

fn resolve(
    doc: &MemoryDocument,
    step: usize,
    selector: &str,
) -> Result<ElementId, FixtureError> {
    let parsed = Selector::parse(selector).map_err(|source| FixtureError::Selector {
        step,
        selector: selector.to_string(),
        source,
    })?;
    doc.query(&parsed).ok_or_else(|| FixtureError::NoMatch {
        step,
        selector: selector.to_string(),
    })
}

/// Run every step of `script` against `page`, in order
///
/// Stops at the first step whose selector does not resolve.
pub fn replay(
    page: &mut Page<MemoryDocument>,
    script: &Script,
) -> Result<Vec<StepReport>, FixtureError> {
    let mut reports = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        let number = index + 1;
        let mut report = StepReport {
            step: number,
            action: step.action(),
            handled: 0,
            default_prevented: false,
            timers_fired: 0,
        };

        let event = match step {
            Step::Click { target } => {
                Some(DomEvent::click(resolve(page.document(), number, target)?))
            }
            Step::Key { key, target } => {
                let target = match target {
                    Some(selector) => Some(resolve(page.document(), number, selector)?),
                    None => None,
                };
                Some(DomEvent::KeyDown {
                    key: Key::from_dom(key),
                    target,
                })
            }
            Step::Submit { form } => Some(DomEvent::submit(resolve(page.document(), number, form)?)),
            Step::Input { target, value } => {
                let el = resolve(page.document(), number, target)?;
                page.document_mut().set_value(el, value);
                None
            }
            Step::Advance { ms } => {
                report.timers_fired = page.advance(Duration::from_millis(*ms));
                None
            }
            Step::Resize { width } => {
                page.document_mut().set_viewport_width(*width);
                None
            }
        };

        if let Some(event) = event {
            let outcome = page.dispatch(&event);
            report.handled = outcome.handled;
            report.default_prevented = outcome.default_prevented;
        }
        debug!(step = number, action = report.action, handled = report.handled, "step replayed");
        reports.push(report);
    }

    Ok(reports)
}
