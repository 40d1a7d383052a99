use lazy_static::lazy_static;

/// Configuración de la app, resuelta en tiempo de compilación.
///
/// Las dos URLs base son sobreescribibles vía variables de entorno
/// (`API_URL`, `LEGAL_API_URL`), cargadas desde un `.env` por build.rs.
/// En pruebas con dispositivo físico, usar la IP local de la máquina
/// (ej.: http://192.168.1.xx:8000 y :8001).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend genérico de auth/usuarios
    pub api_url: String,
    /// Backend de consulta legal
    pub legal_api_url: String,
    pub environment: String,
    /// Tope único y generoso para una consulta legal (el backend puede
    /// tardar en generar la respuesta)
    pub legal_timeout_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("API_URL")
                .unwrap_or("http://192.168.1.108:8000")
                .to_string(),
            legal_api_url: option_env!("LEGAL_API_URL")
                .unwrap_or("http://192.168.1.108:8001")
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            legal_timeout_ms: option_env!("LEGAL_TIMEOUT_MS")
                .unwrap_or("100000")
                .parse()
                .unwrap_or(100_000),
        }
    }
}

lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apuntan_a_ambos_backends() {
        let config = AppConfig::from_env();
        assert!(!config.api_url.is_empty());
        assert!(!config.legal_api_url.is_empty());
        assert_ne!(config.api_url, config.legal_api_url);
        assert_eq!(config.legal_timeout_ms, 100_000);
    }
}
