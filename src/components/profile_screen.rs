use yew::prelude::*;

use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct ProfileScreenProps {
    pub user: Option<User>,
    pub on_logout: Callback<()>,
    /// Reintento de fetch_me cuando la identidad quedó sin confirmar
    pub on_refresh: Callback<()>,
}

#[function_component(ProfileScreen)]
pub fn profile_screen(props: &ProfileScreenProps) -> Html {
    let logout_click = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let cuerpo = match &props.user {
        Some(user) => html! {
            <div class="profile-fields">
                <p>{format!("ID: {}", user.id)}</p>
                <p>{format!("Email: {}", user.email)}</p>
                <p>{format!("Nombre: {}", user.full_name)}</p>
                <p>{format!("Rol: {}", user.role.as_str())}</p>
            </div>
        },
        None => {
            let retry_click = {
                let cb = props.on_refresh.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            html! {
                <div class="profile-unconfirmed">
                    <p>{"No se pudo confirmar tu sesión."}</p>
                    <button class="btn-retry" onclick={retry_click}>{"Reintentar"}</button>
                </div>
            }
        }
    };

    html! {
        <div class="profile-screen">
            <h2 class="screen-title">{"Perfil"}</h2>
            {cuerpo}
            <button class="btn-logout" onclick={logout_click}>{"Cerrar sesión"}</button>
        </div>
    }
}
