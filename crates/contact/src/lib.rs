//! Contact form workflow: field state, validation, a single relay call per
//! valid attempt, and one notification describing the outcome.

mod controller;
mod notification;
mod relay;
mod submission;

pub use controller::*;
pub use notification::*;
pub use relay::*;
pub use submission::*;
