use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::UseAuthHandle;
use crate::models::{RegisterPayload, Role};
use crate::utils::{validar_email, validar_nombre, validar_password};

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub auth: UseAuthHandle,
    pub on_back_to_login: Callback<()>,
}

/// Alta de cuenta. El registro no inicia sesión: al terminar se vuelve al
/// login con la cuenta recién creada.
#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let email_ref = use_node_ref();
    let nombre_ref = use_node_ref();
    let password_ref = use_node_ref();
    let email_error = use_state(|| None::<String>);
    let nombre_error = use_state(|| None::<String>);
    let password_error = use_state(|| None::<String>);
    let enviando = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let nombre_ref = nombre_ref.clone();
        let password_ref = password_ref.clone();
        let email_error = email_error.clone();
        let nombre_error = nombre_error.clone();
        let password_error = password_error.clone();
        let enviando = enviando.clone();
        let auth = props.auth.clone();
        let on_back = props.on_back_to_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }

            let (Some(email_input), Some(nombre_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                nombre_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let nombre = nombre_input.value();
            let password = password_input.value();

            let email_check = validar_email(&email);
            let nombre_check = validar_nombre(&nombre);
            let password_check = validar_password(&password, 6);
            email_error.set(email_check.as_ref().err().map(|e| e.to_string()));
            nombre_error.set(nombre_check.as_ref().err().map(|e| e.to_string()));
            password_error.set(password_check.as_ref().err().map(|e| e.to_string()));
            if email_check.is_err() || nombre_check.is_err() || password_check.is_err() {
                return;
            }

            let payload = RegisterPayload {
                email: email.trim().to_string(),
                full_name: nombre.trim().to_string(),
                password,
                role: Some(Role::User),
            };

            let auth = auth.clone();
            let on_back = on_back.clone();
            let enviando = enviando.clone();
            enviando.set(true);
            spawn_local(async move {
                match auth.register(payload).await {
                    Ok(creado) => {
                        log::info!("📝 Cuenta creada: {}", creado.email);
                        alert("Registro exitoso. Ahora puedes iniciar sesión.");
                        on_back.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Registro fallido: {}", e);
                        alert(&format!("No se pudo crear la cuenta: {}", e));
                    }
                }
                enviando.set(false);
            });
        })
    };

    html! {
        <div class="register-screen">
            <div class="login-container">
                <h1 class="screen-title">{"Registro"}</h1>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reg-email">{"Email"}</label>
                        <input type="email" id="reg-email" placeholder="Email" ref={email_ref} />
                        if let Some(error) = (*email_error).clone() {
                            <span class="field-error">{error}</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="reg-nombre">{"Nombre completo"}</label>
                        <input type="text" id="reg-nombre" placeholder="Nombre completo" ref={nombre_ref} />
                        if let Some(error) = (*nombre_error).clone() {
                            <span class="field-error">{error}</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="reg-password">{"Contraseña"}</label>
                        <input type="password" id="reg-password" placeholder="Contraseña" ref={password_ref} />
                        if let Some(error) = (*password_error).clone() {
                            <span class="field-error">{error}</span>
                        }
                    </div>

                    <button type="submit" class="btn-login" disabled={*enviando}>
                        {if *enviando { "Enviando..." } else { "Registrarme" }}
                    </button>

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_back_to_login.reform(|_| ())}
                        >
                            {"Volver al inicio de sesión"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn alert(mensaje: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(mensaje);
    }
}
