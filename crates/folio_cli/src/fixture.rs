//! Replay fixtures
//!
//! A page fixture describes the markup as a tree of [`ElementSpec`]s:
//!
//! ```toml
//! viewport_width = 480.0
//!
//! [[elements]]
//! tag = "button"
//! classes = ["nav-toggle"]
//! ```
//!
//! A script is an ordered list of steps. Elements are addressed by selector;
//! the first match wins.
//!
//! ```toml
//! [[steps]]
//! action = "click"
//! target = ".nav-toggle"
//!
//! [[steps]]
//! action = "advance"
//! ms = 900
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::{ElementSpec, MemoryDocument, SelectorError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("step {step}: invalid selector `{selector}`: {source}")]
    Selector {
        step: usize,
        selector: String,
        #[source]
        source: SelectorError,
    },

    #[error("step {step}: no element matches `{selector}`")]
    NoMatch { step: usize, selector: String },
}

fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let text = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Markup to mount a page on
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageFixture {
    #[serde(default)]
    pub viewport_width: Option<f32>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl PageFixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        load_toml(path)
    }

    pub fn build(&self) -> MemoryDocument {
        let mut doc = MemoryDocument::from_specs(&self.elements);
        if let Some(width) = self.viewport_width {
            doc.set_viewport_width(width);
        }
        doc
    }
}

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Click {
        target: String,
    },
    Key {
        key: String,
        #[serde(default)]
        target: Option<String>,
    },
    Submit {
        form: String,
    },
    /// Type into a field, replacing its value
    Input {
        target: String,
        value: String,
    },
    Advance {
        ms: u64,
    },
    Resize {
        width: f32,
    },
}

impl Step {
    pub fn action(&self) -> &'static str {
        match self {
            Step::Click { .. } => "click",
            Step::Key { .. } => "key",
            Step::Submit { .. } => "submit",
            Step::Input { .. } => "input",
            Step::Advance { .. } => "advance",
            Step::Resize { .. } => "resize",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        load_toml(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Document;

    #[test]
    fn test_parse_page_fixture() {
        let fixture: PageFixture = toml::from_str(
            r##"
            viewport_width = 480.0

            [[elements]]
            tag = "ul"
            id = "nav-list"

            [[elements.children]]
            tag = "a"
            attrs = { href = "#contact" }
            text = "Contact"
            "##,
        )
        .unwrap();

        let doc = fixture.build();
        assert_eq!(doc.viewport_width(), 480.0);
        let list = doc.element_by_id("nav-list").unwrap();
        let link = doc.children(list)[0];
        assert_eq!(doc.attribute(link, "href").as_deref(), Some("#contact"));
    }

    #[test]
    fn test_parse_script_steps() {
        let script: Script = toml::from_str(
            r#"
            [[steps]]
            action = "input"
            target = "[name=email]"
            value = "ada@example.com"

            [[steps]]
            action = "key"
            key = "Tab"

            [[steps]]
            action = "advance"
            ms = 900
            "#,
        )
        .unwrap();

        assert_eq!(script.steps.len(), 3);
        assert_eq!(
            script.steps[1],
            Step::Key {
                key: "Tab".into(),
                target: None
            }
        );
        assert_eq!(script.steps[2].action(), "advance");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: Result<Script, _> = toml::from_str(
            r#"
            [[steps]]
            action = "hover"
            target = "a"
            "#,
        );
        assert!(result.is_err());
    }
}
