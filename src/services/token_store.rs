// ============================================================================
// TOKEN STORE - Persistencia del bearer token bajo una sola clave
// ============================================================================
// Orden de preferencia del backend: localStorage (persistente) →
// sessionStorage (sobrevive recargas de la pestaña) → celda en memoria
// (se pierde con el proceso). Ninguna operación devuelve error al
// llamador: un fallo de almacenamiento degrada a "sin token".
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Storage;

const TOKEN_KEY: &str = "access_token";

#[derive(Clone)]
enum Backend {
    Web(Storage),
    Memory(Rc<RefCell<Option<String>>>),
}

#[derive(Clone)]
pub struct TokenStore {
    backend: Backend,
}

impl TokenStore {
    /// Sondea los backends disponibles una sola vez, al componer la app
    pub fn new() -> Self {
        if let Some(storage) = local_storage() {
            return Self {
                backend: Backend::Web(storage),
            };
        }
        if let Some(storage) = session_storage() {
            log::warn!("🔐 localStorage no disponible, el token vive en sessionStorage");
            return Self {
                backend: Backend::Web(storage),
            };
        }
        log::warn!("🔐 Sin almacenamiento del navegador, el token vive solo en memoria");
        Self::in_memory()
    }

    /// Último escalón de la degradación; también el backend de los tests
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(None))),
        }
    }

    pub fn get(&self) -> Option<String> {
        match &self.backend {
            Backend::Web(storage) => storage.get_item(TOKEN_KEY).ok().flatten(),
            Backend::Memory(cell) => cell.borrow().clone(),
        }
    }

    pub fn set(&self, token: &str) {
        match &self.backend {
            Backend::Web(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("🔐 No se pudo persistir el token, se descarta");
                }
            }
            Backend::Memory(cell) => *cell.borrow_mut() = Some(token.to_string()),
        }
    }

    pub fn delete(&self) {
        match &self.backend {
            Backend::Web(storage) => {
                let _ = storage.remove_item(TOKEN_KEY);
            }
            Backend::Memory(cell) => *cell.borrow_mut() = None,
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_fallback_en_memoria_hace_round_trip() {
        // backend preferido denegado → el escalón de memoria sigue
        // cumpliendo el contrato get/set/delete
        let store = TokenStore::in_memory();
        assert_eq!(store.get(), None);

        store.set("tok-abc");
        assert_eq!(store.get().as_deref(), Some("tok-abc"));

        store.set("tok-def");
        assert_eq!(store.get().as_deref(), Some("tok-def"));
    }

    #[test]
    fn delete_es_idempotente() {
        let store = TokenStore::in_memory();
        store.delete();
        assert_eq!(store.get(), None);

        store.set("tok");
        store.delete();
        store.delete();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn los_clones_comparten_la_misma_celda() {
        // el interceptor y el hook de sesión ven el mismo token
        let store = TokenStore::in_memory();
        let clon = store.clone();
        store.set("compartido");
        assert_eq!(clon.get().as_deref(), Some("compartido"));
        clon.delete();
        assert_eq!(store.get(), None);
    }
}
