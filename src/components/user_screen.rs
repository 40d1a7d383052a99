// ============================================================================
// USER SCREEN - Inicio del usuario regular
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::LegalChat;
use crate::hooks::{use_services, UseAuthHandle};
use crate::models::EstadisticasApi;

struct TemaRapido {
    titulo: &'static str,
    descripcion: &'static str,
    icono: &'static str,
}

const TEMAS_RAPIDOS: [TemaRapido; 4] = [
    TemaRapido {
        titulo: "Derecho Civil",
        descripcion: "Contratos, propiedad, familia",
        icono: "🏠",
    },
    TemaRapido {
        titulo: "Derecho Penal",
        descripcion: "Delitos, procedimientos penales",
        icono: "🛡️",
    },
    TemaRapido {
        titulo: "Derecho Laboral",
        descripcion: "Trabajo, seguridad social",
        icono: "💼",
    },
    TemaRapido {
        titulo: "Derecho Mercantil",
        descripcion: "Empresas, comercio, sociedades",
        icono: "🏢",
    },
];

const TEMAS_RECIENTES: [&str; 5] = [
    "Contratos de arrendamiento",
    "Despido injustificado",
    "Divorcio y pensión alimenticia",
    "Constitución de sociedades",
    "Delitos contra la salud",
];

#[derive(Properties, PartialEq)]
pub struct UserScreenProps {
    pub auth: UseAuthHandle,
}

#[function_component(UserScreen)]
pub fn user_screen(props: &UserScreenProps) -> Html {
    let services = use_services();
    let show_chat = use_state(|| false);
    let api_sana = use_state(|| false);
    let stats = use_state(|| None::<EstadisticasApi>);

    // Salud y estadísticas del backend legal, una vez al montar
    {
        let api_sana = api_sana.clone();
        let stats = stats.clone();
        let legal = services.legal.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match legal.salud().await {
                    Ok(salud) => {
                        log::info!("🩺 API legal: {} ({})", salud.status, salud.timestamp);
                        api_sana.set(true);
                    }
                    Err(e) => {
                        log::warn!("🩺 API legal sin responder: {}", e);
                        api_sana.set(false);
                    }
                }
                if let Ok(estadisticas) = legal.estadisticas().await {
                    stats.set(Some(estadisticas));
                }
            });
            || ()
        });
    }

    let abrir_chat = {
        let show_chat = show_chat.clone();
        let api_sana = api_sana.clone();
        Callback::from(move |_: MouseEvent| {
            if !*api_sana {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(
                        "El servicio de consultas legales no está disponible en este momento. Por favor, intenta más tarde.",
                    );
                }
                return;
            }
            show_chat.set(true);
        })
    };

    if *show_chat {
        let cerrar = {
            let show_chat = show_chat.clone();
            Callback::from(move |_| show_chat.set(false))
        };
        return html! { <LegalChat on_close={cerrar} /> };
    }

    let saludo = match &props.auth.session.user {
        Some(user) => format!("Hola, {}", user.full_name),
        None => "Hola".to_string(),
    };

    html! {
        <div class="user-screen">
            <section class="hero">
                <h2>{saludo}</h2>
                <p>{"Haz tu pregunta y obtén una respuesta basada en la legislación mexicana"}</p>
                if props.auth.session.user.is_none() {
                    <div class="session-banner">
                        <span>{"No se pudo confirmar tu sesión."}</span>
                        <button class="btn-retry" onclick={props.auth.refresh_me.reform(|_: MouseEvent| ())}>
                            {"Reintentar"}
                        </button>
                    </div>
                }
                <button class="btn-primary" onclick={abrir_chat} disabled={!*api_sana}>
                    {"Iniciar consulta"}
                </button>
                if !*api_sana {
                    <p class="service-hint">{"Servicio de consultas no disponible"}</p>
                }
            </section>

            <section class="quick-actions">
                <h3>{"Áreas de consulta"}</h3>
                <div class="quick-actions-grid">
                    { for TEMAS_RAPIDOS.iter().map(|tema| html! {
                        <div class="quick-action-card">
                            <span class="quick-action-icon">{tema.icono}</span>
                            <h4>{tema.titulo}</h4>
                            <p>{tema.descripcion}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="recent-topics">
                <h3>{"Temas frecuentes"}</h3>
                <ul>
                    { for TEMAS_RECIENTES.iter().map(|tema| html! { <li>{*tema}</li> }) }
                </ul>
            </section>

            if let Some(estadisticas) = (*stats).clone() {
                <section class="api-stats">
                    <h3>{"El asistente en números"}</h3>
                    <p>{format!("{} consultas respondidas, {} hoy", estadisticas.total_consultas, estadisticas.consultas_hoy)}</p>
                    <p>{format!("Tiempo promedio de respuesta: {:.1}s", estadisticas.tiempo_promedio_respuesta)}</p>
                    if !estadisticas.tipos_consulta_frecuentes.is_empty() {
                        <div class="stats-chips">
                            { for estadisticas.tipos_consulta_frecuentes.iter().map(|tipo| html! {
                                <span class="chip">{tipo}</span>
                            }) }
                        </div>
                    }
                </section>
            }
        </div>
    }
}
