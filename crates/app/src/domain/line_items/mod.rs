//! Cart line item form actions.

pub mod messages;
pub mod service;
pub mod state;
pub mod submission;

pub use messages::ErrorMessages;
pub use service::*;
pub use state::{LineItemView, LineItemsState, SubmissionResult};
pub use submission::{Intent, Submission, SubmissionError, SubmittedFields};
