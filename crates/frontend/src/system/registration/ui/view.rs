use super::state::RegistrationField;
use super::view_model::RegisterViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::config::FrontendConfig;
use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let vm = RegisterViewModel::new(config);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="register-container">
            <div class="register-box">
                <h2>"Cadastro"</h2>
                <form on:submit=on_submit>
                    {RegistrationField::ALL
                        .into_iter()
                        .map(|field| view! {
                            <Input
                                id=field.input_id().to_string()
                                label=field.label().to_string()
                                input_type=field.input_type().to_string()
                                autocomplete=field.autocomplete().to_string()
                                value=vm.field_value(field)
                                on_input=vm.field_setter(field)
                                required=true
                            />
                        })
                        .collect_view()}

                    <Show when=move || vm.has_error()>
                        <p class="error-message" style="color: red;">
                            {move || vm.error()}
                        </p>
                    </Show>

                    <Button button_type="submit".to_string()>"Cadastrar"</Button>
                </form>
            </div>
        </div>
    }
}
