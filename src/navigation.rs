//! Selección de stack de navegación: función pura del estado de sesión.
//!
//! Con token presente y la identidad aún cargando se muestra el loader,
//! para no montar el stack equivocado mientras se confirma el rol.

use crate::state::Session;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stack {
    /// Login + registro
    Unauthenticated,
    /// Token presente, identidad en vuelo
    Loading,
    /// Consola de administración (ruta inicial: usuarios)
    Admin,
    /// Inicio de usuario regular
    User,
}

pub fn active_stack(session: &Session) -> Stack {
    if session.token.is_some() && session.loading {
        return Stack::Loading;
    }
    if session.token.is_none() {
        return Stack::Unauthenticated;
    }
    if session.is_admin() {
        Stack::Admin
    } else {
        // Incluye identidad sin confirmar (user = None con token):
        // el stack de usuario ofrece reintentar, nunca el de admin.
        Stack::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    fn usuario(role: Role) -> User {
        User {
            id: 1,
            email: "a@b.com".to_string(),
            full_name: "Ana".to_string(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn sin_token_va_al_stack_de_login() {
        assert_eq!(active_stack(&Session::anonymous()), Stack::Unauthenticated);
        // al arrancar todavía no hay token en memoria
        assert_eq!(active_stack(&Session::starting()), Stack::Unauthenticated);
    }

    #[test]
    fn token_cargando_muestra_loader() {
        let session = Session::restoring("tok".to_string());
        assert_eq!(active_stack(&session), Stack::Loading);
    }

    #[test]
    fn usuario_regular_va_a_inicio() {
        let session = Session::restoring("tok".to_string())
            .with_user(Some(usuario(Role::User)))
            .idle();
        assert_eq!(active_stack(&session), Stack::User);
    }

    #[test]
    fn admin_va_a_la_consola() {
        let session = Session::restoring("tok".to_string())
            .with_user(Some(usuario(Role::Admin)))
            .idle();
        assert_eq!(active_stack(&session), Stack::Admin);
    }

    #[test]
    fn identidad_sin_confirmar_nunca_monta_admin() {
        let session = Session::restoring("tok".to_string()).with_user(None).idle();
        assert_eq!(active_stack(&session), Stack::User);
    }

    #[test]
    fn tras_401_se_vuelve_al_login_desde_cualquier_pantalla() {
        let admin = Session::restoring("tok".to_string())
            .with_user(Some(usuario(Role::Admin)))
            .idle();
        assert_eq!(active_stack(&admin.cleared()), Stack::Unauthenticated);
    }
}
