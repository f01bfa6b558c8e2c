pub mod session;

pub use session::{LoginOutcome, SessionTokens};
