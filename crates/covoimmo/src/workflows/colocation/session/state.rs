use serde::{Deserialize, Serialize};

use super::super::domain::{Listing, ListingId, Message, Profile, ProfileUpdate, Sender};
use super::step::Step;

/// Mutable root of one user's flow. Only the session service changes it, so a listing-bound
/// step is never entered without a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    revision: u64,
    step: Step,
    profile: Profile,
    selected_listing: Option<ListingId>,
    messages: Vec<Message>,
    draft: String,
    contract_text: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every effective change; ignored actions leave it untouched.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn selected_listing(&self) -> Option<&ListingId> {
        self.selected_listing.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn contract_text(&self) -> &str {
        &self.contract_text
    }

    pub(crate) fn move_to(&mut self, step: Step) {
        self.step = step;
        self.touch();
    }

    /// A different listing invalidates any contract generated for the previous one.
    pub(crate) fn select(&mut self, listing_id: ListingId) {
        if self.selected_listing.as_ref() != Some(&listing_id) {
            self.contract_text.clear();
            self.selected_listing = Some(listing_id);
        }
        self.touch();
    }

    pub(crate) fn apply_profile(&mut self, update: ProfileUpdate) {
        self.profile = self.profile.with_update(update);
        self.touch();
    }

    pub(crate) fn set_draft(&mut self, draft: String) {
        self.draft = draft;
        self.touch();
    }

    pub(crate) fn push_own_message(&mut self, text: String) {
        self.messages.push(Message {
            from: Sender::Me,
            text,
        });
        self.draft.clear();
        self.touch();
    }

    pub(crate) fn store_contract(&mut self, text: String) {
        self.contract_text = text;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Read model handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub step: Step,
    pub profile: Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_listing: Option<Listing>,
    pub messages: Vec<Message>,
    pub new_message_draft: String,
    pub contract_text: String,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &Session, selected_listing: Option<Listing>) -> Self {
        Self {
            revision: session.revision,
            step: session.step,
            profile: session.profile.clone(),
            selected_listing,
            messages: session.messages.clone(),
            new_message_draft: session.draft.clone(),
            contract_text: session.contract_text.clone(),
        }
    }
}
