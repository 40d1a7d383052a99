pub mod api_client;
pub mod auth_events;
pub mod legal_service;
pub mod token_store;

pub use api_client::ApiClient;
pub use auth_events::{AuthEvents, Subscription};
pub use legal_service::LegalClient;
pub use token_store::TokenStore;

/// Raíz de composición: un solo juego de servicios por proceso, creado en
/// el componente App y compartido vía contexto. El bus de eventos y el
/// Token Store se inyectan en el cliente HTTP aquí, no por globals.
#[derive(Clone)]
pub struct AppServices {
    pub tokens: TokenStore,
    pub events: AuthEvents,
    pub api: ApiClient,
    pub legal: LegalClient,
}

impl AppServices {
    pub fn bootstrap() -> Self {
        let tokens = TokenStore::new();
        let events = AuthEvents::new();
        let api = ApiClient::new(tokens.clone(), events.clone());
        let legal = LegalClient::new();
        Self {
            tokens,
            events,
            api,
            legal,
        }
    }
}

// Identidad por registro de eventos: dos AppServices son "iguales" si
// comparten el mismo bus (suficiente para el diffing del contexto de Yew)
impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.events.same_registry(&other.events)
    }
}
