// ============================================================================
// APP - Raíz de composición y montaje de stacks
// ============================================================================
// App crea el juego único de servicios y lo comparte por contexto.
// AppShell evalúa el gate de navegación en cada cambio de sesión y monta
// el stack que corresponde; las rutas internas de cada stack son estado
// local del propio stack.
// ============================================================================

use yew::prelude::*;

use crate::components::{
    AdminHistorialScreen, AdminUsersScreen, LoadingIndicator, LoginScreen, ProfileScreen,
    RegisterScreen, UserScreen,
};
use crate::hooks::{use_auth, ServicesProvider, UseAuthHandle};
use crate::navigation::{active_stack, Stack};
use crate::services::AppServices;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| AppServices::bootstrap());

    html! {
        <ServicesProvider services={(*services).clone()}>
            <AppShell />
        </ServicesProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth = use_auth();

    match active_stack(&auth.session) {
        Stack::Loading => html! {
            <LoadingIndicator mensaje="Restaurando sesión..." />
        },
        Stack::Unauthenticated => html! { <UnauthenticatedStack auth={auth} /> },
        Stack::Admin => html! { <AdminStack auth={auth} /> },
        Stack::User => html! { <UserStack auth={auth} /> },
    }
}

#[derive(Properties, PartialEq)]
struct StackProps {
    auth: UseAuthHandle,
}

/// Login + registro (ruta inicial: login)
#[function_component(UnauthenticatedStack)]
fn unauthenticated_stack(props: &StackProps) -> Html {
    let show_register = use_state(|| false);

    let on_show_register = {
        let show_register = show_register.clone();
        Callback::from(move |_| show_register.set(true))
    };
    let on_back_to_login = {
        let show_register = show_register.clone();
        Callback::from(move |_| show_register.set(false))
    };

    if *show_register {
        html! {
            <RegisterScreen auth={props.auth.clone()} on_back_to_login={on_back_to_login} />
        }
    } else {
        html! {
            <LoginScreen
                on_login={props.auth.login.clone()}
                loading={props.auth.session.loading}
                on_show_register={on_show_register}
            />
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AdminRoute {
    Usuarios,
    Historial,
    Perfil,
}

/// Consola de administración (ruta inicial: gestión de usuarios)
#[function_component(AdminStack)]
fn admin_stack(props: &StackProps) -> Html {
    let route = use_state(|| AdminRoute::Usuarios);

    let ir_a_usuarios = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| route.set(AdminRoute::Usuarios))
    };
    let ir_a_historial = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| route.set(AdminRoute::Historial))
    };
    let ir_a_perfil = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| route.set(AdminRoute::Perfil))
    };

    html! {
        <div class="stack admin-stack">
            <header class="app-header">
                <h1>{"Lexi IA · Administración"}</h1>
                <nav class="header-actions">
                    <button
                        class={if *route == AdminRoute::Usuarios { "btn-nav active" } else { "btn-nav" }}
                        onclick={ir_a_usuarios}
                    >{"Usuarios"}</button>
                    <button
                        class={if *route == AdminRoute::Historial { "btn-nav active" } else { "btn-nav" }}
                        onclick={ir_a_historial}
                    >{"Consultas"}</button>
                    <button
                        class={if *route == AdminRoute::Perfil { "btn-nav active" } else { "btn-nav" }}
                        onclick={ir_a_perfil}
                    >{"Perfil"}</button>
                </nav>
            </header>
            {
                match *route {
                    AdminRoute::Usuarios => html! { <AdminUsersScreen auth={props.auth.clone()} /> },
                    AdminRoute::Historial => html! { <AdminHistorialScreen /> },
                    AdminRoute::Perfil => html! {
                        <ProfileScreen
                            user={props.auth.session.user.clone()}
                            on_logout={props.auth.logout.clone()}
                            on_refresh={props.auth.refresh_me.clone()}
                        />
                    },
                }
            }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum UserRoute {
    Inicio,
    Perfil,
}

/// Stack de usuario regular (ruta inicial: inicio)
#[function_component(UserStack)]
fn user_stack(props: &StackProps) -> Html {
    let route = use_state(|| UserRoute::Inicio);

    let ir_a_inicio = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| route.set(UserRoute::Inicio))
    };
    let ir_a_perfil = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| route.set(UserRoute::Perfil))
    };

    html! {
        <div class="stack user-stack">
            <header class="app-header">
                <h1>{"Lexi IA"}</h1>
                <nav class="header-actions">
                    <button
                        class={if *route == UserRoute::Inicio { "btn-nav active" } else { "btn-nav" }}
                        onclick={ir_a_inicio}
                    >{"Inicio"}</button>
                    <button
                        class={if *route == UserRoute::Perfil { "btn-nav active" } else { "btn-nav" }}
                        onclick={ir_a_perfil}
                    >{"Perfil"}</button>
                </nav>
            </header>
            {
                match *route {
                    UserRoute::Inicio => html! { <UserScreen auth={props.auth.clone()} /> },
                    UserRoute::Perfil => html! {
                        <ProfileScreen
                            user={props.auth.session.user.clone()}
                            on_logout={props.auth.logout.clone()}
                            on_refresh={props.auth.refresh_me.clone()}
                        />
                    },
                }
            }
        </div>
    }
}
