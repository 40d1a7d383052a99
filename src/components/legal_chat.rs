// ============================================================================
// LEGAL CHAT - Conversación con el asistente legal
// ============================================================================

use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::{ConsultaConfig, DocumentoCard, LoadingIndicator, OpcionesConsulta};
use crate::hooks::use_services;
use crate::models::DocumentoLegal;

#[derive(Clone, Copy, PartialEq)]
enum Remitente {
    Usuario,
    Asistente,
}

#[derive(Clone, PartialEq)]
struct ChatMessage {
    id: String,
    texto: String,
    remitente: Remitente,
    fundamentos: Vec<DocumentoLegal>,
    advertencias: Vec<String>,
    sugerencias: Vec<String>,
    hora: String,
}

impl ChatMessage {
    fn de_usuario(texto: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            texto,
            remitente: Remitente::Usuario,
            fundamentos: Vec::new(),
            advertencias: Vec::new(),
            sugerencias: Vec::new(),
            hora: ahora(),
        }
    }

    fn de_asistente(texto: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            texto,
            remitente: Remitente::Asistente,
            fundamentos: Vec::new(),
            advertencias: Vec::new(),
            sugerencias: Vec::new(),
            hora: ahora(),
        }
    }
}

fn ahora() -> String {
    chrono::Utc::now().format("%H:%M").to_string()
}

#[derive(Properties, PartialEq)]
pub struct LegalChatProps {
    pub on_close: Callback<()>,
}

#[function_component(LegalChat)]
pub fn legal_chat(props: &LegalChatProps) -> Html {
    let services = use_services();
    let mensajes = use_state(Vec::<ChatMessage>::new);
    let input = use_state(String::new);
    let cargando = use_state(|| false);
    let show_config = use_state(|| false);
    let opciones = use_state(OpcionesConsulta::default);
    let mensajes_ref = use_node_ref();

    // Mantener la conversación pegada al final al llegar mensajes
    {
        let mensajes_ref = mensajes_ref.clone();
        use_effect_with(mensajes.len(), move |_| {
            if let Some(element) = mensajes_ref.cast::<web_sys::Element>() {
                element.set_scroll_top(element.scroll_height());
            }
            || ()
        });
    }

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                input.set(area.value());
            }
        })
    };

    let enviar = {
        let mensajes = mensajes.clone();
        let input = input.clone();
        let cargando = cargando.clone();
        let opciones = opciones.clone();
        let legal = services.legal.clone();

        Callback::from(move |_: MouseEvent| {
            let pregunta = input.trim().to_string();
            if pregunta.is_empty() || *cargando {
                return;
            }

            let mut conversacion = (*mensajes).clone();
            conversacion.push(ChatMessage::de_usuario(pregunta.clone()));
            mensajes.set(conversacion.clone());
            input.set(String::new());
            cargando.set(true);

            let mensajes = mensajes.clone();
            let cargando = cargando.clone();
            let legal = legal.clone();
            let consulta = opciones.aplicar(&pregunta);
            spawn_local(async move {
                let respuesta = legal.consultar(&consulta).await;
                let mensaje = match respuesta {
                    Ok(data) => ChatMessage {
                        fundamentos: data.fundamentos_legales.clone(),
                        advertencias: data.advertencias.clone(),
                        sugerencias: data.sugerencias.clone(),
                        ..ChatMessage::de_asistente(data.respuesta)
                    },
                    Err(e) => ChatMessage::de_asistente(format!(
                        "Ocurrió un error al procesar la consulta legal: {}",
                        e
                    )),
                };
                conversacion.push(mensaje);
                mensajes.set(conversacion);
                cargando.set(false);
            });
        })
    };

    let toggle_config = {
        let show_config = show_config.clone();
        Callback::from(move |_: MouseEvent| show_config.set(!*show_config))
    };

    let on_opciones = {
        let opciones = opciones.clone();
        Callback::from(move |nuevas: OpcionesConsulta| opciones.set(nuevas))
    };

    let cerrar_config = {
        let show_config = show_config.clone();
        Callback::from(move |_| show_config.set(false))
    };

    let puede_enviar = !input.trim().is_empty() && !*cargando;

    html! {
        <div class="legal-chat">
            <header class="chat-header">
                <div class="chat-header-row">
                    <h2>{"Consulta Legal"}</h2>
                    <div class="chat-header-actions">
                        <button class="btn-config" onclick={toggle_config}>{"⚙️"}</button>
                        <button class="btn-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"✕"}</button>
                    </div>
                </div>
                <p class="chat-subtitle">{"Haz tu pregunta y obtén una respuesta basada en la legislación mexicana"}</p>
            </header>

            if *show_config {
                <ConsultaConfig
                    opciones={(*opciones).clone()}
                    on_change={on_opciones}
                    on_close={cerrar_config}
                />
            }

            <div class="chat-messages" ref={mensajes_ref}>
                { for mensajes.iter().map(|mensaje| {
                    let burbuja = match mensaje.remitente {
                        Remitente::Usuario => "message-bubble user",
                        Remitente::Asistente => "message-bubble assistant",
                    };
                    html! {
                        <div key={mensaje.id.clone()} class={burbuja}>
                            <p class="message-text">{&mensaje.texto}</p>
                            if !mensaje.fundamentos.is_empty() {
                                <div class="fundamentos-box">
                                    <span class="fundamentos-title">{"Fundamentos legales"}</span>
                                    { for mensaje.fundamentos.iter().map(|doc| html! {
                                        <DocumentoCard documento={doc.clone()} />
                                    }) }
                                </div>
                            }
                            if !mensaje.advertencias.is_empty() {
                                <ul class="advertencias">
                                    { for mensaje.advertencias.iter().map(|a| html! { <li>{a}</li> }) }
                                </ul>
                            }
                            if !mensaje.sugerencias.is_empty() {
                                <ul class="sugerencias">
                                    { for mensaje.sugerencias.iter().map(|s| html! { <li>{s}</li> }) }
                                </ul>
                            }
                            <span class="message-time">{&mensaje.hora}</span>
                        </div>
                    }
                }) }
            </div>

            <div class="composer">
                <textarea
                    value={(*input).clone()}
                    oninput={on_input}
                    placeholder="Escribe tu pregunta legal..."
                />
                <button class="btn-send" onclick={enviar} disabled={!puede_enviar}>
                    {"Enviar"}
                </button>
            </div>

            if *cargando {
                <LoadingIndicator mensaje="Generando respuesta..." />
            }
        </div>
    }
}
