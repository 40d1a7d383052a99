// ============================================================================
// CONSULTA CONFIG - Panel de configuración de la consulta legal
// ============================================================================

use yew::prelude::*;

use crate::models::{ConsultaLegal, TipoLenguaje};

/// Opciones del panel; la pregunta se agrega al enviar
#[derive(Clone, PartialEq, Debug)]
pub struct OpcionesConsulta {
    pub tipo_lenguaje: TipoLenguaje,
    pub incluir_fundamentos: bool,
    pub max_documentos: u32,
    pub umbral_relevancia: f64,
    pub incluir_metadatos: bool,
}

impl Default for OpcionesConsulta {
    fn default() -> Self {
        Self {
            tipo_lenguaje: TipoLenguaje::Mixto,
            incluir_fundamentos: true,
            max_documentos: 5,
            umbral_relevancia: 0.7,
            incluir_metadatos: false,
        }
    }
}

impl OpcionesConsulta {
    pub fn aplicar(&self, pregunta: &str) -> ConsultaLegal {
        ConsultaLegal {
            pregunta: pregunta.to_string(),
            contexto_adicional: None,
            tipo_lenguaje: Some(self.tipo_lenguaje),
            incluir_fundamentos: Some(self.incluir_fundamentos),
            max_documentos: Some(self.max_documentos),
            umbral_relevancia: Some(self.umbral_relevancia),
            incluir_metadatos: Some(self.incluir_metadatos),
        }
    }
}

const NIVELES_DOCUMENTOS: [(u32, &str, &str); 4] = [
    (3, "3 documentos", "Respuesta concisa"),
    (5, "5 documentos", "Respuesta balanceada"),
    (8, "8 documentos", "Respuesta detallada"),
    (10, "10 documentos", "Análisis exhaustivo"),
];

const NIVELES_RELEVANCIA: [(f64, &str, &str); 4] = [
    (0.5, "Baja (50%)", "Incluye más documentos"),
    (0.7, "Media (70%)", "Balance recomendado"),
    (0.8, "Alta (80%)", "Solo muy relevantes"),
    (0.9, "Muy Alta (90%)", "Extremadamente selectivo"),
];

#[derive(Properties, PartialEq)]
pub struct ConsultaConfigProps {
    pub opciones: OpcionesConsulta,
    pub on_change: Callback<OpcionesConsulta>,
    pub on_close: Callback<()>,
}

#[function_component(ConsultaConfig)]
pub fn consulta_config(props: &ConsultaConfigProps) -> Html {
    let opciones = props.opciones.clone();

    let tarjeta_lenguaje = |tipo: TipoLenguaje| {
        let seleccionado = opciones.tipo_lenguaje == tipo;
        let onclick = {
            let opciones = opciones.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(OpcionesConsulta {
                    tipo_lenguaje: tipo,
                    ..opciones.clone()
                });
            })
        };
        html! {
            <button
                type="button"
                class={if seleccionado { "option-card selected" } else { "option-card" }}
                {onclick}
            >
                <span class="option-title">{tipo.label()}</span>
                <span class="option-description">{tipo.descripcion()}</span>
            </button>
        }
    };

    let tarjeta_documentos = |(valor, label, descripcion): (u32, &'static str, &'static str)| {
        let seleccionado = opciones.max_documentos == valor;
        let onclick = {
            let opciones = opciones.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(OpcionesConsulta {
                    max_documentos: valor,
                    ..opciones.clone()
                });
            })
        };
        html! {
            <button
                type="button"
                class={if seleccionado { "option-card selected" } else { "option-card" }}
                {onclick}
            >
                <span class="option-title">{label}</span>
                <span class="option-description">{descripcion}</span>
            </button>
        }
    };

    let tarjeta_relevancia = |(valor, label, descripcion): (f64, &'static str, &'static str)| {
        let seleccionado = (opciones.umbral_relevancia - valor).abs() < f64::EPSILON;
        let onclick = {
            let opciones = opciones.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(OpcionesConsulta {
                    umbral_relevancia: valor,
                    ..opciones.clone()
                });
            })
        };
        html! {
            <button
                type="button"
                class={if seleccionado { "option-card selected" } else { "option-card" }}
                {onclick}
            >
                <span class="option-title">{label}</span>
                <span class="option-description">{descripcion}</span>
            </button>
        }
    };

    let toggle_fundamentos = {
        let opciones = opciones.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit(OpcionesConsulta {
                    incluir_fundamentos: input.checked(),
                    ..opciones.clone()
                });
            }
        })
    };

    let toggle_metadatos = {
        let opciones = opciones.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit(OpcionesConsulta {
                    incluir_metadatos: input.checked(),
                    ..opciones.clone()
                });
            }
        })
    };

    html! {
        <div class="consulta-config">
            <div class="config-header">
                <h3>{"Configuración de Consulta"}</h3>
                <button class="btn-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"✕"}</button>
            </div>

            <div class="config-section">
                <h4>{"Tipo de Lenguaje"}</h4>
                <p class="section-description">{"Selecciona el estilo de respuesta que prefieres"}</p>
                { tarjeta_lenguaje(TipoLenguaje::Tecnico) }
                { tarjeta_lenguaje(TipoLenguaje::Coloquial) }
                { tarjeta_lenguaje(TipoLenguaje::Mixto) }
            </div>

            <div class="config-section">
                <h4>{"Número de Documentos"}</h4>
                <p class="section-description">{"Cantidad máxima de documentos legales a consultar"}</p>
                { for NIVELES_DOCUMENTOS.iter().map(|nivel| tarjeta_documentos(*nivel)) }
            </div>

            <div class="config-section">
                <h4>{"Umbral de Relevancia"}</h4>
                <p class="section-description">{"Qué tan selectivo es el filtrado de documentos"}</p>
                { for NIVELES_RELEVANCIA.iter().map(|nivel| tarjeta_relevancia(*nivel)) }
            </div>

            <div class="config-section">
                <label class="toggle-row">
                    <span>{"Incluir fundamentos legales"}</span>
                    <input
                        type="checkbox"
                        checked={opciones.incluir_fundamentos}
                        onchange={toggle_fundamentos}
                    />
                </label>
                <label class="toggle-row">
                    <span>{"Incluir metadatos"}</span>
                    <input
                        type="checkbox"
                        checked={opciones.incluir_metadatos}
                        onchange={toggle_metadatos}
                    />
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TipoLenguaje;

    #[test]
    fn los_defaults_del_panel_son_los_de_la_consulta_balanceada() {
        let opciones = OpcionesConsulta::default();
        assert_eq!(opciones.tipo_lenguaje, TipoLenguaje::Mixto);
        assert!(opciones.incluir_fundamentos);
        assert_eq!(opciones.max_documentos, 5);
        assert_eq!(opciones.umbral_relevancia, 0.7);
        assert!(!opciones.incluir_metadatos);
    }

    #[test]
    fn aplicar_conserva_la_pregunta_y_las_opciones() {
        let consulta = OpcionesConsulta::default().aplicar("¿despido injustificado?");
        assert_eq!(consulta.pregunta, "¿despido injustificado?");
        assert_eq!(consulta.tipo_lenguaje, Some(TipoLenguaje::Mixto));
        assert_eq!(consulta.max_documentos, Some(5));
        assert_eq!(consulta.umbral_relevancia, Some(0.7));
        assert_eq!(consulta.incluir_metadatos, Some(false));
        assert!(consulta.contexto_adicional.is_none());
    }
}
