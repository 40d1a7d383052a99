//! Validación de formularios, antes de tocar la red.
//!
//! Mínimos de contraseña: 6 en login/registro, 8 en la consola admin
//! (el backend de admin es más estricto).

use crate::error::ApiError;

pub fn validar_email(value: &str) -> Result<(), ApiError> {
    let value = value.trim();
    let valido = match value.split_once('@') {
        Some((local, dominio)) => {
            !local.is_empty()
                && dominio.contains('.')
                && !dominio.starts_with('.')
                && !dominio.ends_with('.')
        }
        None => false,
    };
    if valido {
        Ok(())
    } else {
        Err(ApiError::validation("email", "Email inválido"))
    }
}

pub fn validar_password(value: &str, minimo: usize) -> Result<(), ApiError> {
    if value.chars().count() >= minimo {
        Ok(())
    } else {
        Err(ApiError::Validation {
            field: "password".to_string(),
            message: format!("La contraseña debe tener al menos {} caracteres", minimo),
        })
    }
}

pub fn validar_nombre(value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation("full_name", "Nombre obligatorio"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acepta_emails_razonables() {
        assert!(validar_email("ana@ejemplo.com").is_ok());
        assert!(validar_email("  ana.lopez@sub.dominio.mx ").is_ok());
    }

    #[test]
    fn rechaza_emails_malformados() {
        for caso in ["", "sin-arroba", "@dominio.com", "ana@", "ana@dominio", "ana@.com"] {
            let err = validar_email(caso).unwrap_err();
            assert_eq!(
                err,
                ApiError::validation("email", "Email inválido"),
                "caso: {:?}",
                caso
            );
        }
    }

    #[test]
    fn password_respeta_el_minimo_pedido() {
        assert!(validar_password("123456", 6).is_ok());
        assert!(validar_password("12345", 6).is_err());
        // la consola admin exige 8
        assert!(validar_password("1234567", 8).is_err());
        assert!(validar_password("12345678", 8).is_ok());
    }

    #[test]
    fn nombre_en_blanco_no_pasa() {
        assert!(validar_nombre("Ana").is_ok());
        assert!(validar_nombre("   ").is_err());
    }
}
