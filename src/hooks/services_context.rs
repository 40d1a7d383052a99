// ============================================================================
// SERVICES CONTEXT - Compartir los servicios de la app entre componentes
// ============================================================================
// El provider envuelve la app una sola vez; debajo de él cualquier
// componente obtiene el mismo juego de servicios con use_services().
// ============================================================================

use yew::prelude::*;

use crate::services::AppServices;

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: AppServices,
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<AppServices> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<AppServices>>
    }
}

#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("use_services fuera de ServicesProvider")
}
