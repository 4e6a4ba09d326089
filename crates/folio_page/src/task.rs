//! Deferred page work

/// Payload of a page timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTask {
    /// The contact form's simulated delivery finished
    CompleteSubmission,
}
