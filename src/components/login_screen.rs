use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::{validar_email, validar_password};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    pub loading: bool,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let email_error = use_state(|| None::<String>);
    let password_error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();

            // Validación en cliente: los errores se muestran en línea y
            // nada viaja a la red hasta que ambos campos pasen
            let email_check = validar_email(&email);
            let password_check = validar_password(&password, 6);
            email_error.set(email_check.as_ref().err().map(|e| e.to_string()));
            password_error.set(password_check.as_ref().err().map(|e| e.to_string()));
            if email_check.is_err() || password_check.is_err() {
                return;
            }

            on_login.emit((email.trim().to_string(), password));
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"⚖️"}</div>
                    </div>
                    <h1>{"Lexi IA"}</h1>
                    <p>{"Bienvenido a Lexi IA, tu asistente legal"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Email"
                            ref={email_ref}
                        />
                        if let Some(error) = (*email_error).clone() {
                            <span class="field-error">{error}</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Contraseña"
                            ref={password_ref}
                        />
                        if let Some(error) = (*password_error).clone() {
                            <span class="field-error">{error}</span>
                        }
                    </div>

                    <button type="submit" class="btn-login" disabled={props.loading}>
                        <span class="btn-text">
                            {if props.loading { "Iniciando..." } else { "Iniciar sesión" }}
                        </span>
                    </button>

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_register.reform(|_| ())}
                        >
                            {"Crear cuenta"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
