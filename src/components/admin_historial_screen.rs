use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_services;
use crate::models::RespuestaLegal;

/// Historial de consultas del backend legal (solo admin, si el servicio
/// lo expone)
#[function_component(AdminHistorialScreen)]
pub fn admin_historial_screen() -> Html {
    let services = use_services();
    let consultas = use_state(Vec::<RespuestaLegal>::new);
    let cargando = use_state(|| true);
    let error_msg = use_state(|| None::<String>);

    {
        let consultas = consultas.clone();
        let cargando = cargando.clone();
        let error_msg = error_msg.clone();
        let legal = services.legal.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match legal.historial().await {
                    Ok(lista) => {
                        log::info!("📚 Historial cargado: {} consultas", lista.len());
                        consultas.set(lista);
                    }
                    Err(e) => error_msg.set(Some(format!("No se pudo cargar el historial: {}", e))),
                }
                cargando.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="historial-screen">
            <h2 class="screen-title">{"Historial de consultas"}</h2>
            if *cargando {
                <p class="table-loading">{"Cargando..."}</p>
            } else if let Some(error) = (*error_msg).clone() {
                <p class="table-error">{error}</p>
            } else if consultas.is_empty() {
                <p class="table-empty">{"Aún no hay consultas registradas"}</p>
            } else {
                <ul class="historial-list">
                    { for consultas.iter().map(|consulta| {
                        let resumen: String = consulta.respuesta.chars().take(160).collect();
                        html! {
                            <li class="historial-item">
                                <span class="historial-fecha">{&consulta.timestamp}</span>
                                <p class="historial-resumen">{resumen}</p>
                                <span class="historial-meta">
                                    {format!(
                                        "confianza {:.0}% · {} fundamentos · {:.1}s",
                                        consulta.confianza * 100.0,
                                        consulta.fundamentos_legales.len(),
                                        consulta.tiempo_procesamiento
                                    )}
                                </span>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
