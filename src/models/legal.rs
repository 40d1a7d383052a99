//! Modelos del backend de consulta legal.
//!
//! Los nombres de campo en español son el contrato de la API
//! (`POST /legal/consulta`), no se renombran.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TipoLenguaje {
    Tecnico,
    Coloquial,
    Mixto,
}

impl TipoLenguaje {
    pub fn label(&self) -> &'static str {
        match self {
            TipoLenguaje::Tecnico => "Técnico",
            TipoLenguaje::Coloquial => "Coloquial",
            TipoLenguaje::Mixto => "Mixto",
        }
    }

    pub fn descripcion(&self) -> &'static str {
        match self {
            TipoLenguaje::Tecnico => "Lenguaje jurídico formal",
            TipoLenguaje::Coloquial => "Lenguaje simple y claro",
            TipoLenguaje::Mixto => "Combinación equilibrada",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ConsultaLegal {
    pub pregunta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contexto_adicional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_lenguaje: Option<TipoLenguaje>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incluir_fundamentos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_documentos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umbral_relevancia: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incluir_metadatos: Option<bool>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DocumentoLegal {
    pub id: String,
    pub titulo: String,
    pub tipo: String,
    pub fuente: String,
    #[serde(default)]
    pub url: Option<String>,
    pub relevancia: f64,
    pub fragmento: String,
    #[serde(default)]
    pub articulo: Option<String>,
    #[serde(default)]
    pub fecha_publicacion: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RespuestaLegal {
    pub respuesta: String,
    pub tipo_lenguaje_usado: TipoLenguaje,
    #[serde(default)]
    pub fundamentos_legales: Vec<DocumentoLegal>,
    pub confianza: f64,
    #[serde(default)]
    pub advertencias: Vec<String>,
    #[serde(default)]
    pub sugerencias: Vec<String>,
    pub tiempo_procesamiento: f64,
    pub timestamp: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct EstadisticasApi {
    pub total_consultas: u64,
    pub consultas_hoy: u64,
    pub tiempo_promedio_respuesta: f64,
    #[serde(default)]
    pub tipos_consulta_frecuentes: Vec<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct SaludApi {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consulta_omite_opciones_ausentes() {
        let consulta = ConsultaLegal {
            pregunta: "¿Qué es un contrato de arrendamiento?".to_string(),
            contexto_adicional: None,
            tipo_lenguaje: None,
            incluir_fundamentos: None,
            max_documentos: None,
            umbral_relevancia: None,
            incluir_metadatos: None,
        };
        let json = serde_json::to_string(&consulta).unwrap();
        assert_eq!(
            json,
            "{\"pregunta\":\"¿Qué es un contrato de arrendamiento?\"}"
        );
    }

    #[test]
    fn respuesta_tolera_listas_ausentes() {
        let json = r#"{
            "respuesta": "...",
            "tipo_lenguaje_usado": "mixto",
            "confianza": 0.82,
            "tiempo_procesamiento": 3.4,
            "timestamp": "2025-11-02T10:00:00Z"
        }"#;
        let parsed: RespuestaLegal = serde_json::from_str(json).unwrap();
        assert!(parsed.fundamentos_legales.is_empty());
        assert!(parsed.advertencias.is_empty());
        assert_eq!(parsed.tipo_lenguaje_usado, TipoLenguaje::Mixto);
    }
}
