use super::state::{submit, RegistrationField, RegistrationState, SubmitOutcome};
use crate::shared::config::FrontendConfig;
use crate::system::registration::api;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the registration form
#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub state: RwSignal<RegistrationState>,
    config: StoredValue<FrontendConfig>,
}

impl RegisterViewModel {
    pub fn new(config: FrontendConfig) -> Self {
        Self {
            state: RwSignal::new(RegistrationState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Current value of one input
    pub fn field_value(&self, field: RegistrationField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.form.field(field).to_string()))
    }

    pub fn field_setter(&self, field: RegistrationField) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value: String| {
            state.update(|s| s.form.set_field(field, value));
        })
    }

    pub fn error(&self) -> String {
        self.state.with(|s| s.error.clone())
    }

    pub fn has_error(&self) -> bool {
        self.state.with(|s| s.has_error())
    }

    /// Submit the current form.
    ///
    /// Every call issues its own request; nothing stops a second submission
    /// while the first is still in flight.
    pub fn submit_command(&self) {
        let form = self.state.with_untracked(|s| s.form.clone());
        let config = self.config.get_value();
        let state = self.state;

        spawn_local(async move {
            let outcome = submit(&form, move |request| async move {
                api::register(&config, &request).await
            })
            .await;

            match &outcome {
                SubmitOutcome::Blocked(field) => {
                    log::debug!("Registration not sent: \"{}\" is empty", field.label());
                }
                SubmitOutcome::Registered(body) => {
                    log::info!("Usuário registrado: {}", body);
                }
                SubmitOutcome::Failed(e) => {
                    log::warn!("{}", e);
                }
            }

            // The page may have been unmounted while the request was in flight.
            state.try_update(|s| s.apply(&outcome));
        });
    }
}
