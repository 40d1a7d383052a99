use thiserror::Error;

/// Error tipado de la capa HTTP y de validación de formularios.
///
/// El backend de auth (FastAPI) reporta errores de dominio como
/// `{"detail": ...}`; ese detalle se conserva tal cual en `Http.detail`
/// para mostrarlo al usuario sin inspeccionar JSON anidado en la UI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Parse(String),

    #[error("Tiempo de espera agotado")]
    Timeout,

    #[error("{message}")]
    Validation { field: String, message: String },
}

impl ApiError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401: la sesión ya fue derribada por el interceptor cuando esto
    /// llega a la UI
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// 403: se maneja a nivel de pantalla (la consola admin cierra sesión)
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distingue_401_de_403() {
        let unauthorized = ApiError::Http {
            status: 401,
            detail: "Not authenticated".to_string(),
        };
        let forbidden = ApiError::Http {
            status: 403,
            detail: "Not enough permissions".to_string(),
        };

        assert!(unauthorized.is_unauthorized());
        assert!(!unauthorized.is_forbidden());
        assert!(forbidden.is_forbidden());
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Timeout.is_unauthorized());
    }

    #[test]
    fn el_detalle_del_servidor_se_muestra_tal_cual() {
        let err = ApiError::Http {
            status: 409,
            detail: "El correo ya está registrado".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 409: El correo ya está registrado");
    }

    #[test]
    fn validacion_conserva_el_campo() {
        let err = ApiError::validation("email", "Email inválido");
        assert_eq!(
            err,
            ApiError::Validation {
                field: "email".to_string(),
                message: "Email inválido".to_string()
            }
        );
        assert_eq!(err.to_string(), "Email inválido");
    }
}
