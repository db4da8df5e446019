use serde::{Deserialize, Serialize};

/// Path of the account registration endpoint, relative to the API base.
pub const REGISTER_PATH: &str = "/register/";

/// Body of `POST /register/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
}
