use serde::{Deserialize, Serialize};

use super::super::domain::ListingId;

/// Screens of the browsing flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Home,
    Profile,
    Results,
    Details,
    Chat,
    Contract,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Home,
        Step::Profile,
        Step::Results,
        Step::Details,
        Step::Chat,
        Step::Contract,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Step::Home => "home",
            Step::Profile => "profile",
            Step::Results => "results",
            Step::Details => "details",
            Step::Chat => "chat",
            Step::Contract => "contract",
        }
    }

    /// Screens that only make sense with a listing selected.
    pub const fn requires_listing(self) -> bool {
        matches!(self, Step::Details | Step::Chat | Step::Contract)
    }
}

/// User action dispatched by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", rename_all = "snake_case")]
pub enum Trigger {
    Continue,
    Search,
    SelectListing { listing_id: ListingId },
    Back,
    Contact,
    GenerateContract,
}

impl Trigger {
    pub fn label(&self) -> &'static str {
        match self {
            Trigger::Continue => "continue",
            Trigger::Search => "search",
            Trigger::SelectListing { .. } => "select_listing",
            Trigger::Back => "back",
            Trigger::Contact => "contact",
            Trigger::GenerateContract => "generate_contract",
        }
    }
}

/// Transition table. `None` means the trigger is undefined for the step.
///
/// Preconditions that depend on data (listing membership, a current selection) are checked by
/// the session service.
pub(crate) fn target(step: Step, trigger: &Trigger) -> Option<Step> {
    match (step, trigger) {
        (Step::Home, Trigger::Continue) => Some(Step::Profile),
        (Step::Profile, Trigger::Search) => Some(Step::Results),
        (Step::Results, Trigger::SelectListing { .. }) => Some(Step::Details),
        (Step::Results, Trigger::Back) => Some(Step::Home),
        (Step::Details, Trigger::Back) => Some(Step::Results),
        (Step::Details, Trigger::Contact) => Some(Step::Chat),
        (Step::Details, Trigger::GenerateContract) => Some(Step::Contract),
        (Step::Chat, Trigger::Back) => Some(Step::Details),
        (Step::Contract, Trigger::Back) => Some(Step::Details),
        _ => None,
    }
}
