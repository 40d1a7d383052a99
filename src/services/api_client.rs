// ============================================================================
// API CLIENT - Backend de auth/usuarios, con interceptores
// ============================================================================
// Salida: a toda petición se le adjunta el bearer token si el Token Store
// tiene uno (si no, viaja sin modificar y el backend decide).
// Entrada: toda respuesta pasa por observe_unauthorized; un 401 borra el
// token persistido PRIMERO, publica un único evento después, y el error
// sigue propagándose al llamador. Sin reintentos, sin colas: cada
// petición concurrente resuelve su propio paso de interceptor.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{RegisterPayload, TokenResponse, User, UserCreate, UserQuery, UserUpdate, UsersPaged};
use crate::services::auth_events::AuthEvents;
use crate::services::token_store::TokenStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: TokenStore,
    events: AuthEvents,
}

impl ApiClient {
    pub fn new(tokens: TokenStore, events: AuthEvents) -> Self {
        Self::with_base_url(&CONFIG.api_url, tokens, events)
    }

    pub fn with_base_url(base_url: &str, tokens: TokenStore, events: AuthEvents) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            events,
        }
    }

    /// Password grant (`POST /auth/login`). No pasa por el adjuntado de
    /// bearer: es la petición que lo obtiene.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = format!(
            "username={}&password={}&grant_type=password&scope=",
            form_encode(email),
            form_encode(password)
        );
        let request = Request::post(&self.url("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.finish(request.send().await).await?;
        parse_json(&response).await
    }

    /// Alta de cuenta; devuelve el usuario creado sin iniciar sesión
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError> {
        self.post_json("/auth/register", payload).await
    }

    /// Identidad del token actual. Cualquier fallo (red, 401, parseo) se
    /// normaliza a None: el llamador decide qué hacer con una identidad
    /// sin confirmar.
    pub async fn fetch_me(&self) -> Option<User> {
        match self.get_json::<User>("/users/me").await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("👤 No se pudo confirmar la identidad: {}", e);
                None
            }
        }
    }

    // ---- Consola de administración -------------------------------------

    pub async fn list_users(&self, query: &UserQuery) -> Result<UsersPaged, ApiError> {
        let pairs = query.to_pairs();
        let builder = Request::get(&self.url("/admin/users/paged"))
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        let response = self.finish(self.attach_bearer(builder).send().await).await?;
        parse_json(&response).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/admin/users/{}", id)).await
    }

    pub async fn create_user(&self, payload: &UserCreate) -> Result<User, ApiError> {
        self.post_json("/admin/users", payload).await
    }

    pub async fn update_user(&self, id: i64, payload: &UserUpdate) -> Result<User, ApiError> {
        let request = self
            .attach_bearer(Request::put(&self.url(&format!("/admin/users/{}", id))))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.finish(request.send().await).await?;
        parse_json(&response).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.attach_bearer(Request::delete(&self.url(&format!("/admin/users/{}", id))));
        self.finish(builder.send().await).await?;
        Ok(())
    }

    // ---- Plomería ------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Interceptor de salida: lee el Token Store en cada petición
    fn attach_bearer(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Interceptor de entrada: observa el status y normaliza errores
    async fn finish(
        &self,
        sent: Result<Response, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        observe_unauthorized(response.status(), &self.tokens, &self.events);
        if response.ok() {
            Ok(response)
        } else {
            Err(error_from_response(&response).await)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.attach_bearer(Request::get(&self.url(path)));
        let response = self.finish(builder.send().await).await?;
        parse_json(&response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let request = self
            .attach_bearer(Request::post(&self.url(path)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.finish(request.send().await).await?;
        parse_json(&response).await
    }
}

/// Un 401 derriba la sesión: token borrado primero, un solo evento
/// publicado después. El error original sigue su curso al llamador.
pub(crate) fn observe_unauthorized(status: u16, tokens: &TokenStore, events: &AuthEvents) {
    if status == 401 {
        log::warn!("🔒 Respuesta 401: se borra el token y se fuerza el logout");
        tokens.delete();
        events.publish();
    }
}

pub(crate) async fn parse_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub(crate) async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();
    let fallback = response.status_text();
    let detail = match response.text().await {
        Ok(body) if !body.trim().is_empty() => extract_detail(&body).unwrap_or(body),
        _ => fallback,
    };
    ApiError::Http { status, detail }
}

/// FastAPI reporta `{"detail": "..."}` o, en errores de validación,
/// `{"detail": [{"msg": ...}, ...]}`
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string)
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        other => Some(other.to_string()),
    }
}

fn form_encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn un_401_borra_el_token_antes_de_publicar() {
        let tokens = TokenStore::in_memory();
        let events = AuthEvents::new();
        tokens.set("tok-vivo");

        let visto_al_publicar = Rc::new(Cell::new(None::<bool>));
        let _sub = {
            let tokens = tokens.clone();
            let visto = visto_al_publicar.clone();
            events.subscribe(move || visto.set(Some(tokens.get().is_none())))
        };

        observe_unauthorized(401, &tokens, &events);

        // el suscriptor observó el token ya borrado
        assert_eq!(visto_al_publicar.get(), Some(true));
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn un_401_publica_exactamente_un_evento() {
        let tokens = TokenStore::in_memory();
        let events = AuthEvents::new();
        let conteo = Rc::new(Cell::new(0));
        let _sub = {
            let conteo = conteo.clone();
            events.subscribe(move || conteo.set(conteo.get() + 1))
        };

        observe_unauthorized(401, &tokens, &events);
        assert_eq!(conteo.get(), 1);
    }

    #[test]
    fn otros_status_no_tocan_la_sesion() {
        let tokens = TokenStore::in_memory();
        let events = AuthEvents::new();
        tokens.set("tok");
        let conteo = Rc::new(Cell::new(0));
        let _sub = {
            let conteo = conteo.clone();
            events.subscribe(move || conteo.set(conteo.get() + 1))
        };

        for status in [200, 201, 204, 400, 403, 404, 422, 500] {
            observe_unauthorized(status, &tokens, &events);
        }

        assert_eq!(conteo.get(), 0);
        assert_eq!(tokens.get().as_deref(), Some("tok"));
    }

    #[test]
    fn extrae_detail_de_fastapi() {
        assert_eq!(
            extract_detail(r#"{"detail": "El correo ya está registrado"}"#),
            Some("El correo ya está registrado".to_string())
        );
        assert_eq!(
            extract_detail(
                r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}]}"#
            ),
            Some("value is not a valid email address".to_string())
        );
        assert_eq!(extract_detail("no es json"), None);
        assert_eq!(extract_detail(r#"{"otro": 1}"#), None);
    }
}
