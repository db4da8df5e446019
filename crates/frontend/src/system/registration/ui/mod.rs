//! Registration form UI
//!
//! Same MVVM split as the other forms:
//! - state.rs: plain form state and the submission flow
//! - view_model.rs: signals and commands
//! - view.rs: Leptos component (pure UI)

mod state;
mod view;
mod view_model;

pub use state::{RegistrationField, RegistrationForm, RegistrationState, SubmitOutcome};
pub use view::RegisterPage;
pub use view_model::RegisterViewModel;
