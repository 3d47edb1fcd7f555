mod core;
mod errors;
mod state;

pub use core::PracticeSession;
pub use errors::SessionError;
pub use state::{AnswerOutcome, SessionState};
