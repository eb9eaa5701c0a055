//! Call-turn orchestration
//!
//! The decision core of the call agent:
//! - Utterance normalization (absent / blank input handling)
//! - Termination classification (does the caller want to hang up?)
//! - The turn director state machine that sequences reply generation,
//!   speech rendering and the continue-or-hangup decision into one
//!   [`call_agent_core::TurnOutcome`]

pub mod director;
pub mod normalizer;
pub mod termination;

pub use director::{TurnDirector, TurnInput, TurnState};
pub use normalizer::normalize;
pub use termination::wants_to_end;
