use std::future::Future;

use contracts::system::registration::RegisterRequest;

use crate::system::registration::api::RegistrationError;

/// Shown for every failed submission, whatever the cause.
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "Erro ao registrar. Verifique os dados e tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Password,
    CompanyName,
}

impl RegistrationField {
    /// Fields in form order
    pub const ALL: [RegistrationField; 4] = [
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Password,
        RegistrationField::CompanyName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Name => "Nome",
            RegistrationField::Email => "Email",
            RegistrationField::Password => "Senha",
            RegistrationField::CompanyName => "Nome da Empresa",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            RegistrationField::Name => "name",
            RegistrationField::Email => "email",
            RegistrationField::Password => "password",
            RegistrationField::CompanyName => "company_name",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RegistrationField::Email => "email",
            RegistrationField::Password => "password",
            RegistrationField::Name | RegistrationField::CompanyName => "text",
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            RegistrationField::Name => "name",
            RegistrationField::Email => "email",
            RegistrationField::Password => "new-password",
            RegistrationField::CompanyName => "organization",
        }
    }
}

/// Values typed into the four inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
}

impl RegistrationForm {
    pub fn field(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::CompanyName => &self.company_name,
        }
    }

    pub fn set_field(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::Name => self.name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::CompanyName => self.company_name = value,
        }
    }

    /// First empty field in form order.
    ///
    /// Same rule as the HTML `required` attribute: whitespace counts as a value.
    pub fn first_missing(&self) -> Option<RegistrationField> {
        RegistrationField::ALL
            .into_iter()
            .find(|field| self.field(*field).is_empty())
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            company_name: self.company_name.clone(),
        }
    }

    /// Request body to send, or the field that blocks submission
    pub fn begin_submit(&self) -> Result<RegisterRequest, RegistrationField> {
        match self.first_missing() {
            Some(field) => Err(field),
            None => Ok(self.to_request()),
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent because a required field is empty
    Blocked(RegistrationField),
    /// 2xx; carries the raw response body
    Registered(String),
    Failed(RegistrationError),
}

/// Everything the register page holds while mounted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    /// Empty until a submission fails
    pub error: String,
}

impl RegistrationState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Replace (never append to) the error text
    pub fn record_failure(&mut self) {
        self.error = REGISTRATION_FAILED_MESSAGE.to_string();
    }

    /// Only a failure touches the state; success keeps whatever is shown.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Failed(_) = outcome {
            self.record_failure();
        }
    }
}

/// Run one submission of `form` through `send`.
///
/// `send` is called at most once, and only when every field is filled.
pub async fn submit<F, Fut>(form: &RegistrationForm, send: F) -> SubmitOutcome
where
    F: FnOnce(RegisterRequest) -> Fut,
    Fut: Future<Output = Result<String, RegistrationError>>,
{
    let request = match form.begin_submit() {
        Ok(request) => request,
        Err(field) => return SubmitOutcome::Blocked(field),
    };

    match send(request).await {
        Ok(body) => SubmitOutcome::Registered(body),
        Err(e) => SubmitOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            password: "s3nha".to_string(),
            company_name: "Padaria Central".to_string(),
        }
    }

    #[test]
    fn test_complete_form_sends_one_request_with_entered_values() {
        let sent = RefCell::new(Vec::new());

        let outcome = block_on(submit(&filled_form(), |request| {
            sent.borrow_mut().push(request);
            async { Ok(r#"{"id": 1}"#.to_string()) }
        }));

        let sent = sent.into_inner();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ana Souza");
        assert_eq!(sent[0].email, "ana@example.com");
        assert_eq!(sent[0].password, "s3nha");
        assert_eq!(sent[0].company_name, "Padaria Central");
        assert!(matches!(outcome, SubmitOutcome::Registered(ref body) if body == r#"{"id": 1}"#));
    }

    #[test]
    fn test_empty_field_blocks_submission() {
        for field in RegistrationField::ALL {
            let mut form = filled_form();
            form.set_field(field, String::new());
            let mut calls = 0;

            let outcome = block_on(submit(&form, |_| {
                calls += 1;
                async { Ok(String::new()) }
            }));

            assert_eq!(calls, 0);
            assert!(matches!(outcome, SubmitOutcome::Blocked(f) if f == field));
        }
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let mut form = filled_form();
        form.set_field(RegistrationField::CompanyName, " ".to_string());
        assert_eq!(form.first_missing(), None);
    }

    #[test]
    fn test_first_missing_follows_form_order() {
        let form = RegistrationForm {
            email: "ana@example.com".to_string(),
            ..RegistrationForm::default()
        };
        assert_eq!(form.first_missing(), Some(RegistrationField::Name));
    }

    #[test]
    fn test_failure_sets_fixed_message_only() {
        let mut state = RegistrationState {
            form: filled_form(),
            error: String::new(),
        };

        let outcome = block_on(submit(&state.form, |_| async {
            Err(RegistrationError::Status(400))
        }));
        state.apply(&outcome);

        assert_eq!(state.error, REGISTRATION_FAILED_MESSAGE);
        assert_eq!(state.form, filled_form());
    }

    #[test]
    fn test_network_and_status_failures_look_the_same() {
        let mut network = RegistrationState::default();
        network.apply(&SubmitOutcome::Failed(RegistrationError::Network(
            "unreachable".to_string(),
        )));
        let mut status = RegistrationState::default();
        status.apply(&SubmitOutcome::Failed(RegistrationError::Status(500)));

        assert_eq!(network.error, status.error);
    }

    #[test]
    fn test_success_does_not_set_error() {
        let mut state = RegistrationState {
            form: filled_form(),
            error: String::new(),
        };

        state.apply(&SubmitOutcome::Registered("{}".to_string()));

        assert!(!state.has_error());
    }

    #[test]
    fn test_blocked_submission_changes_nothing() {
        let mut state = RegistrationState::default();
        let before = state.clone();

        state.apply(&SubmitOutcome::Blocked(RegistrationField::Email));

        assert_eq!(state, before);
    }

    #[test]
    fn test_repeated_failure_overwrites_message() {
        let mut state = RegistrationState {
            form: filled_form(),
            error: String::new(),
        };

        state.apply(&SubmitOutcome::Failed(RegistrationError::Status(400)));
        state.apply(&SubmitOutcome::Failed(RegistrationError::Status(503)));

        assert_eq!(state.error, REGISTRATION_FAILED_MESSAGE);
    }

    #[test]
    fn test_set_field_is_independent() {
        let mut form = filled_form();
        form.set_field(RegistrationField::Email, "outro@example.com".to_string());

        assert_eq!(form.email, "outro@example.com");
        assert_eq!(form.name, "Ana Souza");
        assert_eq!(form.company_name, "Padaria Central");
    }

    #[test]
    fn test_request_body_uses_snake_case_company_key() {
        let body = serde_json::to_value(filled_form().to_request()).unwrap();
        assert_eq!(body["company_name"], "Padaria Central");
        assert!(body.get("companyName").is_none());
    }
}
