use yew::prelude::*;

use crate::models::DocumentoLegal;

#[derive(Properties, PartialEq)]
pub struct DocumentoCardProps {
    pub documento: DocumentoLegal,
}

/// Tarjeta de un fundamento legal dentro de la respuesta del asistente
#[function_component(DocumentoCard)]
pub fn documento_card(props: &DocumentoCardProps) -> Html {
    let doc = &props.documento;

    // Sin URL propia, el artículo se busca por fuente + título + artículo
    let url_articulo = doc.url.clone().unwrap_or_else(|| {
        let consulta = format!(
            "{} {} {}",
            doc.fuente,
            doc.titulo,
            doc.articulo.as_deref().unwrap_or("")
        );
        format!(
            "https://www.google.com/search?q={}",
            String::from(js_sys::encode_uri_component(consulta.trim()))
        )
    });

    html! {
        <div class="documento-card">
            <div class="documento-header">
                <span class="documento-icon">{"📄"}</span>
                <div class="documento-titulos">
                    <span class="documento-titulo">{&doc.titulo}</span>
                    <span class="documento-meta">
                        {format!("{} · {} · relevancia {:.0}%", doc.tipo, doc.fuente, doc.relevancia * 100.0)}
                    </span>
                </div>
            </div>
            <p class="documento-fragmento">{&doc.fragmento}</p>
            if let Some(articulo) = &doc.articulo {
                <p class="documento-articulo">{articulo}</p>
            }
            if let Some(fecha) = &doc.fecha_publicacion {
                <p class="documento-fecha">{format!("Publicado: {}", fecha)}</p>
            }
            <div class="documento-links">
                if let Some(url) = &doc.url {
                    <a class="link-row" href={url.clone()} target="_blank" rel="noopener">
                        {"Ver documento"}
                    </a>
                }
                if doc.articulo.is_some() {
                    <a class="link-row secondary" href={url_articulo} target="_blank" rel="noopener">
                        {"Ver artículo"}
                    </a>
                }
            </div>
        </div>
    }
}
