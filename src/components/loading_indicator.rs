use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    #[prop_or(AttrValue::from("Generando respuesta..."))]
    pub mensaje: AttrValue,
}

/// Indicador de espera con el disclaimer del asistente
#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    html! {
        <div class="loading-indicator">
            <div class="spinner" aria-label="cargando"></div>
            <p class="loading-message">{props.mensaje.clone()}</p>
            <p class="loading-hint">{"La información proporcionada es orientativa y no sustituye asesoría legal profesional."}</p>
        </div>
    }
}
