pub mod error;
pub mod switch;

pub use error::{KctxError, Result};
pub use switch::{apply, apply_context, apply_namespace, current_state, load, persist, CurrentState, Outcome, Switch};
