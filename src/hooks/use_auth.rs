// ============================================================================
// USE AUTH - Ciclo de vida de la sesión, cableado al mundo
// ============================================================================
// Las transiciones puras viven en state::Session; aquí se despachan como
// acciones de un reducer para que las continuaciones async siempre
// apliquen sobre el estado vigente (última escritura gana entre
// operaciones concurrentes, nunca sobre un snapshot rancio).
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::ApiError;
use crate::hooks::use_services;
use crate::models::{RegisterPayload, User};
use crate::services::ApiClient;
use crate::state::Session;

pub enum SessionAction {
    Anonymous,
    Restoring(String),
    Busy,
    Idle,
    TokenIssued(String),
    UserFetched(Option<User>),
    Cleared,
}

#[derive(PartialEq)]
struct SessionState(Session);

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let next = match action {
            SessionAction::Anonymous => Session::anonymous(),
            SessionAction::Restoring(token) => Session::restoring(token),
            SessionAction::Busy => self.0.busy(),
            SessionAction::Idle => self.0.idle(),
            SessionAction::TokenIssued(token) => self.0.with_token(token),
            SessionAction::UserFetched(user) => self.0.with_user(user).idle(),
            SessionAction::Cleared => self.0.cleared(),
        };
        Rc::new(SessionState(next))
    }
}

#[derive(Clone)]
pub struct UseAuthHandle {
    pub session: Session,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    /// Reintenta fetch_me cuando la identidad quedó sin confirmar
    pub refresh_me: Callback<()>,
    api: ApiClient,
}

// Para el diffing de props: los callbacks comparan por identidad
impl PartialEq for UseAuthHandle {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
            && self.login == other.login
            && self.logout == other.logout
            && self.refresh_me == other.refresh_me
    }
}

impl UseAuthHandle {
    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Alta de cuenta: devuelve el usuario creado al llamador y no toca
    /// la sesión (no hay auto-login tras registrarse)
    pub async fn register(&self, payload: RegisterPayload) -> Result<User, ApiError> {
        self.api.register(&payload).await
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let services = use_services();
    let session = use_reducer(|| SessionState(Session::starting()));

    // Restauración al arrancar: token persistido → confirmar identidad
    {
        let session = session.clone();
        let services = services.clone();
        use_effect_with((), move |_| {
            match services.tokens.get() {
                None => session.dispatch(SessionAction::Anonymous),
                Some(stored) => {
                    log::info!("🔑 Token persistido encontrado, confirmando identidad...");
                    session.dispatch(SessionAction::Restoring(stored));
                    let api = services.api.clone();
                    let session = session.clone();
                    spawn_local(async move {
                        let me = api.fetch_me().await;
                        if me.is_none() {
                            log::warn!("👤 Identidad sin confirmar; se ofrece reintentar");
                        }
                        session.dispatch(SessionAction::UserFetched(me));
                    });
                }
            }
            || ()
        });
    }

    // Evento de "no autorizado" → mismo camino que logout()
    {
        let session = session.clone();
        let services = services.clone();
        use_effect_with((), move |_| {
            let tokens = services.tokens.clone();
            let session = session.clone();
            let sub = services.events.subscribe(move || {
                log::warn!("🚪 Sesión derribada por respuesta 401");
                tokens.delete();
                session.dispatch(SessionAction::Cleared);
            });
            move || drop(sub)
        });
    }

    let login = {
        let session = session.clone();
        let services = services.clone();
        Callback::from(move |(email, password): (String, String)| {
            let session = session.clone();
            let api = services.api.clone();
            let tokens = services.tokens.clone();
            spawn_local(async move {
                session.dispatch(SessionAction::Busy);
                match api.login(&email, &password).await {
                    Ok(respuesta) if !respuesta.access_token.is_empty() => {
                        let token = respuesta.access_token;
                        // persistir primero, luego el estado en memoria
                        tokens.set(&token);
                        session.dispatch(SessionAction::TokenIssued(token));
                        let me = api.fetch_me().await;
                        session.dispatch(SessionAction::UserFetched(me));
                        log::info!("✅ Sesión iniciada: {}", email);
                    }
                    Ok(_) => {
                        log::warn!("⚠️ Login sin access_token en la respuesta");
                        session.dispatch(SessionAction::Idle);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        session.dispatch(SessionAction::Idle);
                        alert("Credenciales inválidas");
                    }
                }
            });
        })
    };

    let logout = {
        let session = session.clone();
        let services = services.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            services.tokens.delete();
            session.dispatch(SessionAction::Cleared);
        })
    };

    let refresh_me = {
        let session = session.clone();
        let api = services.api.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let api = api.clone();
            spawn_local(async move {
                session.dispatch(SessionAction::Busy);
                let me = api.fetch_me().await;
                session.dispatch(SessionAction::UserFetched(me));
            });
        })
    };

    UseAuthHandle {
        session: session.0.clone(),
        login,
        logout,
        refresh_me,
        api: services.api.clone(),
    }
}

fn alert(mensaje: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(mensaje);
    }
}
