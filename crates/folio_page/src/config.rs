//! Page configuration
//!
//! Every field has a default matching the stock portfolio markup, so an
//! empty TOML document is a valid config:
//!
//! ```toml
//! nav_breakpoint = 980.0
//! submit_delay_ms = 900
//! announce_rejection = false
//! restore_focus = true
//!
//! [messages]
//! incomplete = "Please complete all fields."
//!
//! [selectors]
//! nav_list = "#nav-list"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use folio_animation::AnimationTargets;
use folio_core::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Interaction settings for a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Viewport width below which in-page navigation collapses the menu
    pub nav_breakpoint: f32,
    /// Simulated delivery time of the contact form
    pub submit_delay_ms: u64,
    /// Names of the contact form fields that must be non-empty
    pub required_fields: Vec<String>,
    pub messages: Messages,
    pub labels: Labels,
    /// Appended to a project's description in the modal body
    pub modal_body_suffix: String,
    /// Class added to the root element once the user tabs
    pub keyboard_mode_class: String,
    /// Class that hides the status region visually but keeps it in the tree
    pub status_hidden_class: String,
    /// Make rejection messages visible and announced instead of `sr-only`
    pub announce_rejection: bool,
    /// Return focus to the opening control when the modal closes
    pub restore_focus: bool,
    pub selectors: SelectorConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_breakpoint: 980.0,
            submit_delay_ms: 900,
            required_fields: vec!["name".into(), "email".into(), "message".into()],
            messages: Messages::default(),
            labels: Labels::default(),
            modal_body_suffix:
                " — replace this summary with a detailed description, screenshots and links."
                    .into(),
            keyboard_mode_class: "user-is-tabbing".into(),
            status_hidden_class: "sr-only".into(),
            announce_rejection: false,
            restore_focus: true,
            selectors: SelectorConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PageError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Status texts written by the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub incomplete: String,
    pub sent: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            incomplete: "Please complete all fields.".into(),
            sent: "Message sent — thank you!".into(),
        }
    }
}

/// Submit control labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub send: String,
    pub sending: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            send: "Send message".into(),
            sending: "Sending...".into(),
        }
    }
}

/// Selectors locating each part of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub year: String,
    pub nav_toggle: String,
    pub nav_list: String,
    pub link: String,
    pub contact_form: String,
    pub submit: String,
    pub clear: String,
    pub status: String,
    pub modal: String,
    pub modal_close: String,
    pub modal_title: String,
    pub modal_body: String,
    pub modal_panel: String,
    pub project_card: String,
    pub project_title: String,
    pub project_desc: String,
    pub project_cta: String,
    pub headline: String,
    pub lead: String,
    pub device_mock: String,
    pub section: String,
    pub section_children: String,
    pub hero_background: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            year: "#year".into(),
            nav_toggle: ".nav-toggle".into(),
            nav_list: "#nav-list".into(),
            link: "a".into(),
            contact_form: "#contact-form".into(),
            submit: "[type=\"submit\"]".into(),
            clear: "#clear-btn".into(),
            status: "#form-status".into(),
            modal: "#project-modal".into(),
            modal_close: ".modal-close".into(),
            modal_title: "#modal-title".into(),
            modal_body: "#modal-body".into(),
            modal_panel: ".modal-panel".into(),
            project_card: ".project-card".into(),
            project_title: ".project-title".into(),
            project_desc: ".project-desc".into(),
            project_cta: ".project-cta".into(),
            headline: ".headline".into(),
            lead: ".lead".into(),
            device_mock: ".device-mock".into(),
            section: ".section".into(),
            section_children: "h2, p, .project-card, .about-card, .skill".into(),
            hero_background: ".hero-bg-grad".into(),
        }
    }
}

/// Parsed form of [`SelectorConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Selectors {
    pub year: Selector,
    pub nav_toggle: Selector,
    pub nav_list: Selector,
    pub link: Selector,
    pub contact_form: Selector,
    pub submit: Selector,
    pub clear: Selector,
    pub status: Selector,
    pub modal: Selector,
    pub modal_close: Selector,
    pub modal_title: Selector,
    pub modal_body: Selector,
    pub modal_panel: Selector,
    pub project_card: Selector,
    pub project_title: Selector,
    pub project_desc: Selector,
    pub project_cta: Selector,
    pub animation: AnimationTargets,
}

fn parse(field: &'static str, source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|source| PageError::Selector { field, source })
}

impl SelectorConfig {
    /// Parse every selector, naming the first one that fails
    pub fn resolve(&self) -> Result<Selectors> {
        Ok(Selectors {
            year: parse("year", &self.year)?,
            nav_toggle: parse("nav_toggle", &self.nav_toggle)?,
            nav_list: parse("nav_list", &self.nav_list)?,
            link: parse("link", &self.link)?,
            contact_form: parse("contact_form", &self.contact_form)?,
            submit: parse("submit", &self.submit)?,
            clear: parse("clear", &self.clear)?,
            status: parse("status", &self.status)?,
            modal: parse("modal", &self.modal)?,
            modal_close: parse("modal_close", &self.modal_close)?,
            modal_title: parse("modal_title", &self.modal_title)?,
            modal_body: parse("modal_body", &self.modal_body)?,
            modal_panel: parse("modal_panel", &self.modal_panel)?,
            project_card: parse("project_card", &self.project_card)?,
            project_title: parse("project_title", &self.project_title)?,
            project_desc: parse("project_desc", &self.project_desc)?,
            project_cta: parse("project_cta", &self.project_cta)?,
            animation: AnimationTargets {
                headline: parse("headline", &self.headline)?,
                lead: parse("lead", &self.lead)?,
                device_mock: parse("device_mock", &self.device_mock)?,
                project_card: parse("project_card", &self.project_card)?,
                section: parse("section", &self.section)?,
                section_children: parse("section_children", &self.section_children)?,
                hero_background: parse("hero_background", &self.hero_background)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PageConfig::from_toml_str("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.submit_delay(), Duration::from_millis(900));
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_toml_str(
            r#"
            submit_delay_ms = 250
            announce_rejection = true

            [labels]
            sending = "Posting"

            [selectors]
            nav_list = ".menu"
            "#,
        )
        .unwrap();

        assert_eq!(config.submit_delay_ms, 250);
        assert!(config.announce_rejection);
        assert_eq!(config.labels.sending, "Posting");
        assert_eq!(config.labels.send, "Send message");
        assert_eq!(config.selectors.nav_list, ".menu");
        assert_eq!(config.selectors.nav_toggle, ".nav-toggle");
    }

    #[test]
    fn test_default_selectors_resolve() {
        let selectors = SelectorConfig::default().resolve().unwrap();
        assert_eq!(selectors.animation, AnimationTargets::default());
        assert_eq!(selectors.nav_list, Selector::id("nav-list"));
    }

    #[test]
    fn test_bad_selector_names_field() {
        let config = PageConfig::from_toml_str("[selectors]\nmodal = \"#modal > .x\"").unwrap();
        match config.selectors.resolve() {
            Err(PageError::Selector { field, .. }) => assert_eq!(field, "modal"),
            other => panic!("expected selector error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            PageConfig::from_toml_str("submit_delay_ms = \"soon\""),
            Err(PageError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            PageConfig::load(&path),
            Err(PageError::ConfigRead { .. })
        ));

        let present = dir.path().join("page.toml");
        std::fs::write(&present, "nav_breakpoint = 720.0").unwrap();
        assert_eq!(PageConfig::load(&present).unwrap().nav_breakpoint, 720.0);
    }
}
