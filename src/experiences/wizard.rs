//! The four-step "share your internship" form.
//!
//! Form state lives in a [`WizardState`] value owned by the view. Every user
//! action is a [`WizardEvent`] and [`WizardState::reduce`] returns the next
//! state; navigation is clamped to the first and last step.

use log::debug;
use serde::{Deserialize, Serialize};

/// Steps of the publishing form, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    /// Title, company, place, duration, description and tags.
    #[default]
    GeneralInfo,
    /// The presentation plan.
    Plan,
    /// Photos, videos and documents.
    Media,
    /// Preview before publishing.
    Review,
}

impl WizardStep {
    /// Every step, in order.
    pub const ALL: [Self; 4] = [Self::GeneralInfo, Self::Plan, Self::Media, Self::Review];

    /// Total number of steps.
    pub const COUNT: u8 = 4;

    /// One-based position of the step.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::GeneralInfo => 1,
            Self::Plan => 2,
            Self::Media => 3,
            Self::Review => 4,
        }
    }

    /// Heading shown above the step.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::GeneralInfo => "Informations générales",
            Self::Plan => "Plan de présentation",
            Self::Media => "Supports multimédias",
            Self::Review => "Aperçu et publication",
        }
    }

    /// The following step; the last step stays put.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::GeneralInfo => Self::Plan,
            Self::Plan => Self::Media,
            Self::Media | Self::Review => Self::Review,
        }
    }

    /// The preceding step; the first step stays put.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::GeneralInfo | Self::Plan => Self::GeneralInfo,
            Self::Media => Self::Plan,
            Self::Review => Self::Media,
        }
    }
}

/// One section of the presentation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSection {
    /// Section number.
    pub id: u8,
    /// Section heading.
    pub title: String,
    /// What the student wrote.
    pub content: String,
    /// Marked done by the student.
    pub completed: bool,
}

const DEFAULT_PLAN: [&str; 5] = [
    "Présentation de l'entreprise",
    "Missions et responsabilités",
    "Compétences acquises",
    "Environnement de travail",
    "Conseils pour futurs stagiaires",
];

/// Free-text fields of the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Headline.
    Title,
    /// Host company.
    Company,
    /// City.
    Location,
    /// Duration.
    Duration,
    /// Body text.
    Description,
}

/// Content entered so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDraft {
    /// Headline.
    pub title: String,
    /// Host company.
    pub company: String,
    /// City.
    pub location: String,
    /// Duration.
    pub duration: String,
    /// Body text.
    pub description: String,
    /// Topic tags, trimmed and unique.
    pub tags: Vec<String>,
    /// Presentation plan.
    pub plan: Vec<PlanSection>,
}

impl Default for ExperienceDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            duration: String::new(),
            description: String::new(),
            tags: Vec::new(),
            plan: (1u8..)
                .zip(DEFAULT_PLAN)
                .map(|(id, title)| PlanSection {
                    id,
                    title: title.to_string(),
                    content: String::new(),
                    completed: false,
                })
                .collect(),
        }
    }
}

impl ExperienceDraft {
    /// Number of plan sections marked done.
    #[must_use]
    pub fn completed_sections(&self) -> usize {
        self.plan.iter().filter(|s| s.completed).count()
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Company => &mut self.company,
            DraftField::Location => &mut self.location,
            DraftField::Duration => &mut self.duration,
            DraftField::Description => &mut self.description,
        }
    }
}

/// User actions on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// "Suivant".
    Next,
    /// "Précédent".
    Back,
    /// Typing in a first-step field.
    Edit(DraftField, String),
    /// Adds a tag; blank and duplicate tags are ignored.
    AddTag(String),
    /// Removes a tag.
    RemoveTag(String),
    /// Replaces the text of a plan section.
    EditSection {
        /// Section number.
        id: u8,
        /// New text.
        content: String,
    },
    /// Marks a plan section done or not done.
    SetSectionCompleted {
        /// Section number.
        id: u8,
        /// New flag.
        completed: bool,
    },
    /// Discards everything and returns to the first step.
    Reset,
}

/// Current step plus the draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    /// Step on screen.
    pub step: WizardStep,
    /// Content entered so far.
    pub draft: ExperienceDraft,
}

impl WizardState {
    /// Applies an event and returns the next state.
    ///
    /// ```
    /// use stage_core::experiences::{WizardEvent, WizardState, WizardStep};
    ///
    /// let state = WizardState::default().reduce(WizardEvent::Back);
    /// assert_eq!(state.step, WizardStep::GeneralInfo);
    ///
    /// let state = state.reduce(WizardEvent::AddTag("  React ".to_string()));
    /// assert_eq!(state.draft.tags, ["React"]);
    /// ```
    #[must_use]
    pub fn reduce(mut self, event: WizardEvent) -> Self {
        match event {
            WizardEvent::Next => self.step = self.step.next(),
            WizardEvent::Back => self.step = self.step.previous(),
            WizardEvent::Edit(field, value) => *self.draft.field_mut(field) = value,
            WizardEvent::AddTag(tag) => {
                let tag = tag.trim();
                if !tag.is_empty() && !self.draft.tags.iter().any(|t| t == tag) {
                    self.draft.tags.push(tag.to_string());
                }
            }
            WizardEvent::RemoveTag(tag) => self.draft.tags.retain(|t| *t != tag),
            WizardEvent::EditSection { id, content } => {
                if let Some(section) = self.draft.plan.iter_mut().find(|s| s.id == id) {
                    section.content = content;
                }
            }
            WizardEvent::SetSectionCompleted { id, completed } => {
                if let Some(section) = self.draft.plan.iter_mut().find(|s| s.id == id) {
                    section.completed = completed;
                }
            }
            WizardEvent::Reset => return Self::default(),
        }
        debug!("Wizard at step {}", self.step.number());
        self
    }

    /// Completion in percent: current step over total steps.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(WizardStep::COUNT) * 100.0
    }

    /// Whether "Précédent" is available.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.step != WizardStep::GeneralInfo
    }

    /// Whether the form is on its last step ("Publier").
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::Review
    }
}
