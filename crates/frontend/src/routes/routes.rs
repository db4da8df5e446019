use crate::system::registration::ui::RegisterPage;
use leptos::prelude::*;

// Only the registration page is mounted; navigation after a successful
// registration is not wired up yet.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RegisterPage />
    }
}
