//! Folio Core
//!
//! Foundational primitives for the Folio page interaction layer:
//!
//! - **Document capability**: the [`Document`] trait abstracts the element
//!   tree the interaction components read and mutate
//! - **Selectors**: CSS-like selector parsing and matching (`#id`, `.class`,
//!   `tag`, `[attr="value"]`, comma groups)
//! - **Events**: host input events delivered to the page
//! - **State Machines**: the [`StateTransitions`] trait every component state
//!   enum implements
//! - **Timers**: a virtual-clock [`TimerQueue`] with cancellable tokens
//! - **Memory document**: a headless [`MemoryDocument`] for tests and replay
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Document, ElementSpec, MemoryDocument, Selector};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! doc.append(body, ElementSpec::new("button").class("nav-toggle"));
//!
//! let toggle = Selector::parse(".nav-toggle").unwrap();
//! assert!(doc.query(&toggle).is_some());
//! ```

pub mod dom;
pub mod error;
pub mod events;
pub mod fsm;
pub mod memory;
pub mod selector;
pub mod timer;

pub use dom::{Document, ElementId, ScrollBehavior, ScrollBlock, ScrollOptions};
pub use error::{Result, SelectorError};
pub use events::{DispatchOutcome, DomEvent, Key};
pub use fsm::{transition, StateTransitions};
pub use memory::{ElementSpec, MemoryDocument, ScrollRecord};
pub use selector::{Selector, SimpleSelector};
pub use timer::{TimerQueue, TimerToken};
