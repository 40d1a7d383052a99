// ============================================================================
// AUTH EVENTS - Canal de "no autorizado" entre HTTP y la sesión
// ============================================================================
// Registro de observadores explícito, creado en la raíz de composición e
// inyectado en ApiClient y en use_auth. Un solo tipo de evento, sin
// payload. La lista se copia antes del fan-out y cada handler se aísla:
// uno que falle no bloquea a los siguientes.
// ============================================================================

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Handler)>,
}

#[derive(Clone, Default)]
pub struct AuthEvents {
    inner: Rc<RefCell<Registry>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un handler y devuelve su guard; soltar el guard lo da de
    /// baja. Suscribirse dos veces entrega el evento dos veces.
    pub fn subscribe(&self, handler: impl Fn() + 'static) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(handler)));
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Sin suscriptores es un no-op. Los handlers registrados durante el
    /// fan-out no reciben esta publicación (se itera sobre una copia).
    pub fn publish(&self) {
        let snapshot: Vec<Handler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in snapshot {
            if catch_unwind(AssertUnwindSafe(|| handler())).is_err() {
                log::error!("🚨 Un suscriptor de 'no autorizado' falló; se continúa con el resto");
            }
        }
    }

    pub(crate) fn same_registry(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

pub struct Subscription {
    registry: std::rc::Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn publicar_sin_suscriptores_no_falla() {
        let events = AuthEvents::new();
        events.publish();
    }

    #[test]
    fn un_suscriptor_que_falla_no_bloquea_al_siguiente() {
        let events = AuthEvents::new();
        let llegado = Rc::new(Cell::new(false));

        let _a = events.subscribe(|| panic!("handler roto"));
        let _b = {
            let llegado = llegado.clone();
            events.subscribe(move || llegado.set(true))
        };

        events.publish();
        assert!(llegado.get());
    }

    #[test]
    fn suscripcion_duplicada_entrega_dos_veces() {
        let events = AuthEvents::new();
        let conteo = Rc::new(Cell::new(0));

        let suma = {
            let conteo = conteo.clone();
            move || conteo.set(conteo.get() + 1)
        };
        let _a = events.subscribe(suma.clone());
        let _b = events.subscribe(suma);

        events.publish();
        assert_eq!(conteo.get(), 2);
    }

    #[test]
    fn soltar_el_guard_da_de_baja() {
        let events = AuthEvents::new();
        let conteo = Rc::new(Cell::new(0));

        let sub = {
            let conteo = conteo.clone();
            events.subscribe(move || conteo.set(conteo.get() + 1))
        };
        events.publish();
        drop(sub);
        events.publish();

        assert_eq!(conteo.get(), 1);
    }

    #[test]
    fn los_clones_publican_al_mismo_registro() {
        let events = AuthEvents::new();
        let clon = events.clone();
        let conteo = Rc::new(Cell::new(0));

        let _sub = {
            let conteo = conteo.clone();
            events.subscribe(move || conteo.set(conteo.get() + 1))
        };
        clon.publish();
        assert_eq!(conteo.get(), 1);
        assert!(events.same_registry(&clon));
    }
}
