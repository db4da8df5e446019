use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, FrontendConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("{}; falling back to built-in defaults", e);
        FrontendConfig::default()
    });
    log::debug!("Registration endpoint: {}", config.register_url());

    // Pages read the API settings from context.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
