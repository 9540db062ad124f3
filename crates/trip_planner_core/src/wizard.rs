//! crates/trip_planner_core/src/wizard.rs
//!
//! The trip-creation wizard.
//!
//! DESIGN
//! ======
//! One tag per step and a single transition function. Every event that is
//! not legal in the current step is rejected with a `WizardError` and leaves
//! the wizard exactly as it was. The form is kept across backward moves so
//! earlier input can be corrected without retyping it.
//!
//! ```text
//! Info --Submit--> Method --Choose(Ai)--> Ai
//!   ^                |  \---Choose(Map)--> Map
//!   +------Back------+        Ai/Map --Back--> Method
//! ```

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::domain::{Pace, TripDraft};
use crate::validation::ValidationError;
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Info,
    Method,
    Ai,
    Map,
}

/// The two terminal creation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMethod {
    Ai,
    Map,
}

impl std::str::FromStr for CreationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" => Ok(CreationMethod::Ai),
            "map" => Ok(CreationMethod::Map),
            other => Err(format!("unknown creation method '{other}' (expected ai or map)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Submit,
    Choose(CreationMethod),
    Back,
}

/// The three-stage progress indicator shown above the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    Info,
    Method,
    Create,
}

impl WizardStage {
    pub fn label(self) -> &'static str {
        match self {
            WizardStage::Info => "정보입력",
            WizardStage::Method => "방식선택",
            WizardStage::Create => "일정생성",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{event:?} is not allowed at the {step:?} step")]
    NotAllowed { step: WizardStep, event: WizardEvent },
    #[error("trip details can only be edited at the info step")]
    DraftLocked,
}

/// The editable contents of the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub region: String,
    pub style: String,
    pub pace: Pace,
}

impl TripForm {
    /// Checks required fields and date order, producing the read-only draft.
    pub fn validate(&self) -> Result<TripDraft, ValidationError> {
        let title = required_text(&self.title, "여행 제목")?;
        let start_date = self.start_date.ok_or(ValidationError::MissingField("출발일"))?;
        let end_date = self.end_date.ok_or(ValidationError::MissingField("귀가일"))?;
        let region = required_text(&self.region, "지역")?;

        if start_date > end_date {
            return Err(ValidationError::DateOrder);
        }

        let style = Some(self.style.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(TripDraft::new(
            title, start_date, end_date, region, style, self.pace,
        ))
    }
}

fn required_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripWizard {
    step: WizardStep,
    form: TripForm,
    draft: Option<TripDraft>,
}

impl Default for TripWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TripWizard {
    /// A fresh wizard at the info step with an empty form.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Info,
            form: TripForm::default(),
            draft: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn stage(&self) -> WizardStage {
        match self.step {
            WizardStep::Info => WizardStage::Info,
            WizardStep::Method => WizardStage::Method,
            WizardStep::Ai | WizardStep::Map => WizardStage::Create,
        }
    }

    pub fn form(&self) -> &TripForm {
        &self.form
    }

    /// The validated draft, available once the info step has been submitted.
    pub fn draft(&self) -> Option<&TripDraft> {
        self.draft.as_ref()
    }

    /// Applies a change to the form. Only allowed at the info step.
    pub fn edit(&mut self, change: impl FnOnce(&mut TripForm)) -> Result<(), WizardError> {
        if self.step != WizardStep::Info {
            return Err(WizardError::DraftLocked);
        }
        change(&mut self.form);
        Ok(())
    }

    /// Runs one transition. A rejected event changes nothing.
    pub fn apply(&mut self, event: WizardEvent) -> Result<WizardStep, WizardError> {
        let next = match (self.step, event) {
            (WizardStep::Info, WizardEvent::Submit) => {
                self.draft = Some(self.form.validate()?);
                WizardStep::Method
            }
            (WizardStep::Method, WizardEvent::Choose(CreationMethod::Ai)) => WizardStep::Ai,
            (WizardStep::Method, WizardEvent::Choose(CreationMethod::Map)) => WizardStep::Map,
            (WizardStep::Method, WizardEvent::Back) => {
                self.draft = None;
                WizardStep::Info
            }
            (WizardStep::Ai | WizardStep::Map, WizardEvent::Back) => WizardStep::Method,
            (step, event) => return Err(WizardError::NotAllowed { step, event }),
        };

        debug!(from = ?self.step, to = ?next, ?event, "Wizard transition");
        self.step = next;
        Ok(next)
    }

    pub fn submit(&mut self) -> Result<WizardStep, WizardError> {
        self.apply(WizardEvent::Submit)
    }

    pub fn choose(&mut self, method: CreationMethod) -> Result<WizardStep, WizardError> {
        self.apply(WizardEvent::Choose(method))
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.apply(WizardEvent::Back)
    }

    /// What the downstream collaborator receives once a terminal step is reached.
    pub fn handoff(&self) -> Option<(CreationMethod, &TripDraft)> {
        let method = match self.step {
            WizardStep::Ai => CreationMethod::Ai,
            WizardStep::Map => CreationMethod::Map,
            WizardStep::Info | WizardStep::Method => return None,
        };
        self.draft.as_ref().map(|draft| (method, draft))
    }
}
