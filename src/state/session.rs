// ============================================================================
// SESSION - Estado de autenticación en memoria
// ============================================================================
// Snapshot inmutable: cada transición produce un Session nuevo que se
// publica entero al use_state del hook. Invariante: `user` solo puede
// estar presente mientras `token` lo esté; limpiar ambos es una sola
// transición (nunca se observa un desmontaje parcial).
// ============================================================================

use crate::models::{Role, User};

#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    /// Estado inicial del proceso: aún no se leyó el token persistido
    pub fn starting() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    /// Sin token persistido, o después de logout
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }

    /// Token restaurado del almacenamiento, identidad aún sin confirmar
    pub fn restoring(token: String) -> Self {
        Self {
            token: Some(token),
            user: None,
            loading: true,
        }
    }

    /// Login/registro en curso: conserva lo que hubiera y marca loading
    pub fn busy(&self) -> Self {
        Self {
            loading: true,
            ..self.clone()
        }
    }

    pub fn idle(&self) -> Self {
        Self {
            loading: false,
            ..self.clone()
        }
    }

    /// Token recién emitido; el usuario llega después vía fetch_me
    pub fn with_token(&self, token: String) -> Self {
        Self {
            token: Some(token),
            ..self.clone()
        }
    }

    /// Adopta el resultado de fetch_me. Un None deja el token en pie y el
    /// usuario sin confirmar; la pantalla de inicio ofrece reintentar.
    pub fn with_user(&self, user: Option<User>) -> Self {
        if self.token.is_none() {
            // sin token no hay identidad que adoptar
            return self.clone();
        }
        Self {
            user,
            ..self.clone()
        }
    }

    /// Desmontaje atómico de token y usuario (logout o evento 401)
    pub fn cleared(&self) -> Self {
        Self::anonymous()
    }

    pub fn is_admin(&self) -> bool {
        matches!(&self.user, Some(user) if user.role == Role::Admin)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

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
    fn login_y_logout_vuelven_al_estado_anonimo() {
        let inicial = Session::anonymous();
        let logueada = inicial
            .busy()
            .with_token("tok-123".to_string())
            .with_user(Some(usuario(Role::User)))
            .idle();
        assert_eq!(logueada.token.as_deref(), Some("tok-123"));
        assert!(logueada.user.is_some());

        let despues = logueada.cleared();
        assert_eq!(despues, inicial);
    }

    #[test]
    fn no_adopta_usuario_sin_token() {
        let session = Session::anonymous().with_user(Some(usuario(Role::User)));
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[test]
    fn restaurar_mantiene_loading_hasta_confirmar() {
        let session = Session::restoring("tok".to_string());
        assert!(session.loading);
        assert!(session.user.is_none());

        // fetch_me falló: token en pie, identidad sin confirmar
        let sin_confirmar = session.with_user(None).idle();
        assert_eq!(sin_confirmar.token.as_deref(), Some("tok"));
        assert!(sin_confirmar.user.is_none());
        assert!(!sin_confirmar.loading);
    }

    #[test]
    fn is_admin_solo_con_rol_admin() {
        let base = Session::restoring("tok".to_string());
        assert!(!base.is_admin());
        assert!(!base.with_user(Some(usuario(Role::User))).is_admin());
        assert!(base.with_user(Some(usuario(Role::Admin))).is_admin());
    }

    #[test]
    fn una_operacion_en_vuelo_no_toca_la_identidad() {
        // registro/login en curso: solo cambia loading
        let anonima = Session::anonymous();
        assert_eq!(anonima.busy().idle(), anonima);

        let logueada = Session::restoring("tok".to_string())
            .with_user(Some(usuario(Role::User)))
            .idle();
        let tras_operacion = logueada.busy().idle();
        assert_eq!(tras_operacion.token, logueada.token);
        assert_eq!(tras_operacion.user, logueada.user);
    }

    #[test]
    fn limpiar_es_atomico_desde_cualquier_estado() {
        let estados = [
            Session::starting(),
            Session::anonymous(),
            Session::restoring("t".to_string()),
            Session::restoring("t".to_string()).with_user(Some(usuario(Role::Admin))),
        ];
        for estado in estados {
            let limpio = estado.cleared();
            assert!(limpio.token.is_none());
            assert!(limpio.user.is_none());
            assert!(!limpio.loading);
        }
    }
}
