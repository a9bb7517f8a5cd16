//! Screen sequencing for the browsing flow: profile edits, listing selection, local messaging
//! and contract generation.

pub mod service;
pub mod state;
pub mod step;

#[cfg(test)]
mod tests;

pub use service::{IgnoreReason, SessionService, Transition};
pub use state::{Session, SessionSnapshot};
pub use step::{Step, Trigger};
