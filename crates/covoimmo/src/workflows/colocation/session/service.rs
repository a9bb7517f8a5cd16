use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use super::super::catalog::ListingCatalog;
use super::super::contract;
use super::super::domain::{Listing, ListingId, ProfileUpdate};
use super::super::matching::{self, CompatibilityReport, ScoredListing};
use super::state::{Session, SessionSnapshot};
use super::step::{self, Step, Trigger};

/// Drives one session against an injected listing catalog.
///
/// Every operation runs to completion and never fails: actions that do not apply to the
/// current state are reported as [`Transition::Ignored`] or `false` and leave the session as
/// it was.
pub struct SessionService<C> {
    catalog: Arc<C>,
    session: Session,
}

impl<C> SessionService<C>
where
    C: ListingCatalog + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolves the selected id against the catalog.
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.session
            .selected_listing()
            .and_then(|id| self.catalog.find(id))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, self.selected_listing().cloned())
    }

    pub fn set_profile_field(&mut self, update: ProfileUpdate) {
        debug!(field = update.field_name(), "profile field updated");
        self.session.apply_profile(update);
    }

    pub fn navigate(&mut self, trigger: Trigger) -> Transition {
        let from = self.session.step();
        let Some(to) = step::target(from, &trigger) else {
            return self.ignore(&trigger, IgnoreReason::UndefinedTrigger);
        };

        match &trigger {
            Trigger::SelectListing { listing_id } => {
                if !self.catalog.contains(listing_id) {
                    return self.ignore(&trigger, IgnoreReason::UnknownListing);
                }
                self.session.select(listing_id.clone());
            }
            Trigger::GenerateContract => {
                if self.session.selected_listing().is_none() {
                    return self.ignore(&trigger, IgnoreReason::NoSelection);
                }
                self.store_contract();
            }
            _ => {}
        }

        self.session.move_to(to);
        debug!(
            trigger = trigger.label(),
            from = from.label(),
            to = to.label(),
            "session transition"
        );
        Transition::Moved { from, to }
    }

    /// Scores every catalog listing against the current profile, in catalog order.
    pub fn search_results(&self) -> Vec<ScoredListing> {
        matching::score_listings(self.session.profile(), self.catalog.listings())
    }

    pub fn compatibility(&self, listing_id: &ListingId) -> Option<CompatibilityReport> {
        self.catalog
            .find(listing_id)
            .map(|listing| CompatibilityReport::evaluate(self.session.profile(), listing))
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.session.set_draft(draft.into());
    }

    /// Appends the text as an own message unless it is blank. Blank input changes nothing.
    pub fn send_message(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.trim().is_empty() {
            trace!("blank message dropped");
            return false;
        }

        self.session.push_own_message(text);
        true
    }

    pub fn send_draft(&mut self) -> bool {
        let draft = self.session.draft().to_string();
        self.send_message(draft)
    }

    /// Generates and stores the contract. Placeholders stand in for a missing selection, and
    /// the session only moves to the contract screen from the details screen.
    pub fn generate_contract(&mut self) -> String {
        let text = self.store_contract();
        if self.session.step() == Step::Details {
            self.session.move_to(Step::Contract);
        }
        text
    }

    fn store_contract(&mut self) -> String {
        let text = contract::generate(self.session.profile(), self.selected_listing());
        self.session.store_contract(text.clone());
        text
    }

    fn ignore(&self, trigger: &Trigger, reason: IgnoreReason) -> Transition {
        let step = self.session.step();
        debug!(
            trigger = trigger.label(),
            step = step.label(),
            reason = reason.label(),
            "trigger ignored"
        );
        Transition::Ignored { step, reason }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Transition {
    Moved { from: Step, to: Step },
    Ignored { step: Step, reason: IgnoreReason },
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }

    pub fn step(&self) -> Step {
        match self {
            Transition::Moved { to, .. } => *to,
            Transition::Ignored { step, .. } => *step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    UndefinedTrigger,
    UnknownListing,
    NoSelection,
}

impl IgnoreReason {
    pub const fn label(self) -> &'static str {
        match self {
            IgnoreReason::UndefinedTrigger => "undefined_trigger",
            IgnoreReason::UnknownListing => "unknown_listing",
            IgnoreReason::NoSelection => "no_selection",
        }
    }
}
