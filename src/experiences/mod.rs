//! Internship experiences, the write-ups students browse and publish.
//!
//! - [`Experience`]: a published write-up, JSON-compatible with the web client
//! - [`ExperienceFilter`]: text search plus an optional tag
//! - [`WizardState`]: the four-step publishing form as a pure reducer
//!
//! # Example Usage
//!
//! ```
//! use stage_core::experiences::{ExperienceFilter, WizardEvent, WizardState, WizardStep};
//!
//! let filter = ExperienceFilter::default()
//!     .with_search("toulouse")
//!     .with_tag(Some("Agile".to_string()));
//! assert_eq!(filter.tag.as_deref(), Some("Agile"));
//!
//! let wizard = WizardState::default()
//!     .reduce(WizardEvent::Next)
//!     .reduce(WizardEvent::Next);
//! assert_eq!(wizard.step, WizardStep::Media);
//! ```

mod filter;
pub mod types;
mod wizard;

pub use filter::ExperienceFilter;
pub use types::{Author, Experience, POPULAR_TAGS};
pub use wizard::{DraftField, ExperienceDraft, PlanSection, WizardEvent, WizardState, WizardStep};
