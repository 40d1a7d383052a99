// ============================================================================
// ADMIN USERS SCREEN - Gestión de usuarios (solo admin)
// ============================================================================
// Tabla paginada sobre /admin/users: búsqueda con debounce de 300 ms,
// filtros por nombre y rol, orden por columna, y modales de alta,
// edición, detalle y borrado. Un 401 lo resuelve el interceptor; un 403
// se maneja aquí (aviso + cierre de sesión).
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_services, UseAuthHandle};
use crate::models::{Role, SortBy, SortOrder, User, UserCreate, UserQuery, UserUpdate};
use crate::utils::{validar_email, validar_nombre, validar_password};

const DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq, Eq)]
enum RolFiltro {
    Todos,
    Admin,
    User,
}

impl RolFiltro {
    fn as_role(&self) -> Option<Role> {
        match self {
            RolFiltro::Todos => None,
            RolFiltro::Admin => Some(Role::Admin),
            RolFiltro::User => Some(Role::User),
        }
    }

    fn from_value(value: &str) -> Self {
        match value {
            "admin" => RolFiltro::Admin,
            "user" => RolFiltro::User,
            _ => RolFiltro::Todos,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminUsersScreenProps {
    pub auth: UseAuthHandle,
}

#[function_component(AdminUsersScreen)]
pub fn admin_users_screen(props: &AdminUsersScreenProps) -> Html {
    let services = use_services();

    // Filtros y orden
    let q = use_state(String::new);
    let filtro_nombre = use_state(String::new);
    let filtro_rol = use_state(|| RolFiltro::Todos);
    let sort_by = use_state(|| SortBy::Id);
    let sort_order = use_state(|| SortOrder::Asc);
    let limit = use_state(|| 10u32);
    let page_index = use_state(|| 0u32);

    // Datos
    let items = use_state(Vec::<User>::new);
    let total = use_state(|| 0u64);
    let cargando = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let refresh_key = use_state(|| 0u32);

    // Modales
    let show_create = use_state(|| false);
    let editando = use_state(|| None::<User>);
    let detalle = use_state(|| None::<User>);
    let detalle_abierto = use_state(|| false);
    let detalle_cargando = use_state(|| false);
    let borrar_id = use_state(|| None::<i64>);

    let query = UserQuery {
        q: Some((*q).clone()),
        full_name: Some((*filtro_nombre).clone()),
        role: filtro_rol.as_role(),
        sort_by: *sort_by,
        sort_order: *sort_order,
        limit: *limit,
        offset: *page_index * *limit,
    };

    // Carga con debounce: cambios de filtro rápidos disparan una sola
    // petición; el timeout pendiente se cancela al soltar el guard
    {
        let items = items.clone();
        let total = total.clone();
        let cargando = cargando.clone();
        let error_msg = error_msg.clone();
        let api = services.api.clone();
        let auth = props.auth.clone();
        let es_admin = props.auth.is_admin();
        use_effect_with((query.clone(), *refresh_key), move |(query, _)| {
            let timeout = es_admin.then(|| {
                cargando.set(true);
                error_msg.set(None);
                let query = query.clone();
                Timeout::new(DEBOUNCE_MS, move || {
                    spawn_local(async move {
                        match api.list_users(&query).await {
                            Ok(pagina) => {
                                items.set(pagina.items);
                                total.set(pagina.total);
                            }
                            Err(e) => {
                                error_msg.set(Some(e.to_string()));
                                if e.is_forbidden() {
                                    alert("No autorizado. Redirigiendo a inicio de sesión");
                                    auth.logout.emit(());
                                } else if !e.is_unauthorized() {
                                    // el 401 ya derribó la sesión en el interceptor
                                    alert(&format!("Error al cargar usuarios: {}", e));
                                }
                            }
                        }
                        cargando.set(false);
                    });
                })
            });
            move || drop(timeout)
        });
    }

    // Guard defensivo: la navegación ya deja fuera a los no-admin
    if !props.auth.is_admin() {
        return html! { <p class="table-error">{"No autorizado"}</p> };
    }

    let refrescar = {
        let refresh_key = refresh_key.clone();
        Callback::from(move |_| refresh_key.set(*refresh_key + 1))
    };

    let toggle_sort = {
        let sort_by = sort_by.clone();
        let sort_order = sort_order.clone();
        let page_index = page_index.clone();
        Callback::from(move |columna: SortBy| {
            page_index.set(0);
            if *sort_by == columna {
                sort_order.set(sort_order.toggled());
            } else {
                sort_by.set(columna);
                sort_order.set(SortOrder::Asc);
            }
        })
    };

    // Paginación
    let total_paginas = ((*total as f64 / *limit as f64).ceil() as u32).max(1);
    let puede_anterior = *page_index > 0;
    let puede_siguiente = *page_index + 1 < total_paginas;

    let pagina_anterior = {
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| {
            if *page_index > 0 {
                page_index.set(*page_index - 1);
            }
        })
    };
    let pagina_siguiente = {
        let page_index = page_index.clone();
        let puede = puede_siguiente;
        Callback::from(move |_: MouseEvent| {
            if puede {
                page_index.set(*page_index + 1);
            }
        })
    };

    // Acción: ver detalle (consulta fresca de /admin/users/{id})
    let abrir_detalle = {
        let detalle = detalle.clone();
        let detalle_abierto = detalle_abierto.clone();
        let detalle_cargando = detalle_cargando.clone();
        let api = services.api.clone();
        Callback::from(move |id: i64| {
            detalle_abierto.set(true);
            detalle_cargando.set(true);
            detalle.set(None);
            let detalle = detalle.clone();
            let detalle_cargando = detalle_cargando.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.get_user(id).await {
                    Ok(user) => detalle.set(Some(user)),
                    Err(e) => alert(&format!("Error al cargar detalle: {}", e)),
                }
                detalle_cargando.set(false);
            });
        })
    };

    // Entradas de filtros
    let on_q = {
        let q = q.clone();
        let page_index = page_index.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                page_index.set(0);
                q.set(input.value());
            }
        })
    };
    let on_nombre = {
        let filtro_nombre = filtro_nombre.clone();
        let page_index = page_index.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                page_index.set(0);
                filtro_nombre.set(input.value());
            }
        })
    };
    let on_rol = {
        let filtro_rol = filtro_rol.clone();
        let page_index = page_index.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                page_index.set(0);
                filtro_rol.set(RolFiltro::from_value(&select.value()));
            }
        })
    };
    let on_limit = {
        let limit = limit.clone();
        let page_index = page_index.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(valor) = select.value().parse::<u32>() {
                    page_index.set(0);
                    limit.set(valor);
                }
            }
        })
    };

    let encabezado = |columna: SortBy, titulo: &'static str| {
        let marca = if *sort_by == columna {
            match *sort_order {
                SortOrder::Asc => " ▲",
                SortOrder::Desc => " ▼",
            }
        } else {
            ""
        };
        let onclick = {
            let toggle_sort = toggle_sort.clone();
            Callback::from(move |_: MouseEvent| toggle_sort.emit(columna))
        };
        html! {
            <th class="sortable" {onclick}>{format!("{}{}", titulo, marca)}</th>
        }
    };

    let filas = items.iter().map(|user| {
        let ver = {
            let abrir_detalle = abrir_detalle.clone();
            let id = user.id;
            Callback::from(move |_: MouseEvent| abrir_detalle.emit(id))
        };
        let editar = {
            let editando = editando.clone();
            let user = user.clone();
            Callback::from(move |_: MouseEvent| editando.set(Some(user.clone())))
        };
        let eliminar = {
            let borrar_id = borrar_id.clone();
            let id = user.id;
            Callback::from(move |_: MouseEvent| borrar_id.set(Some(id)))
        };
        html! {
            <tr key={user.id}>
                <td>{user.id}</td>
                <td>{&user.email}</td>
                <td>{&user.full_name}</td>
                <td>{user.role.as_str()}</td>
                <td>{user.created_at.clone().unwrap_or_default()}</td>
                <td class="row-actions">
                    <button class="btn-small" onclick={ver}>{"Ver"}</button>
                    <button class="btn-small" onclick={editar}>{"Editar"}</button>
                    <button class="btn-small danger" onclick={eliminar}>{"Eliminar"}</button>
                </td>
            </tr>
        }
    });

    let abrir_crear = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };

    html! {
        <div class="admin-users-screen">
            <div class="filters-bar">
                <input
                    type="search"
                    placeholder="Buscar (email o nombre)"
                    value={(*q).clone()}
                    oninput={on_q}
                />
                <input
                    type="text"
                    placeholder="Filtrar por nombre"
                    value={(*filtro_nombre).clone()}
                    oninput={on_nombre}
                />
                <select onchange={on_rol}>
                    <option value="all" selected={*filtro_rol == RolFiltro::Todos}>{"Todos los roles"}</option>
                    <option value="admin" selected={*filtro_rol == RolFiltro::Admin}>{"admin"}</option>
                    <option value="user" selected={*filtro_rol == RolFiltro::User}>{"user"}</option>
                </select>
                <select onchange={on_limit}>
                    { for [10u32, 25, 50].iter().map(|n| html! {
                        <option value={n.to_string()} selected={*limit == *n}>{format!("{} por página", n)}</option>
                    }) }
                </select>
                <button class="btn-primary" onclick={abrir_crear}>{"Crear usuario"}</button>
            </div>

            if let Some(error) = (*error_msg).clone() {
                <p class="table-error">{error}</p>
            }

            <table class="users-table">
                <thead>
                    <tr>
                        { encabezado(SortBy::Id, "ID") }
                        { encabezado(SortBy::Email, "Email") }
                        { encabezado(SortBy::FullName, "Nombre") }
                        { encabezado(SortBy::Role, "Rol") }
                        <th>{"Creado"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    if *cargando {
                        <tr><td colspan="6" class="table-loading">{"Cargando..."}</td></tr>
                    } else if items.is_empty() {
                        <tr><td colspan="6" class="table-empty">{"Sin resultados"}</td></tr>
                    } else {
                        { for filas }
                    }
                </tbody>
            </table>

            <div class="pagination">
                <button disabled={!puede_anterior} onclick={pagina_anterior}>{"Anterior"}</button>
                <span>{format!("Página {} de {} · {} usuarios", *page_index + 1, total_paginas, *total)}</span>
                <button disabled={!puede_siguiente} onclick={pagina_siguiente}>{"Siguiente"}</button>
            </div>

            <CreateUserModal
                visible={*show_create}
                on_close={{
                    let show_create = show_create.clone();
                    Callback::from(move |_| show_create.set(false))
                }}
                on_created={refrescar.clone()}
            />

            <EditUserModal
                user={(*editando).clone()}
                on_close={{
                    let editando = editando.clone();
                    Callback::from(move |_| editando.set(None))
                }}
                on_updated={refrescar.clone()}
            />

            <DetailModal
                visible={*detalle_abierto}
                cargando={*detalle_cargando}
                user={(*detalle).clone()}
                on_close={{
                    let detalle_abierto = detalle_abierto.clone();
                    Callback::from(move |_| detalle_abierto.set(false))
                }}
            />

            <ConfirmDeleteModal
                id={*borrar_id}
                on_cancel={{
                    let borrar_id = borrar_id.clone();
                    Callback::from(move |_| borrar_id.set(None))
                }}
                on_deleted={refrescar}
            />
        </div>
    }
}

// ---- Modales ----------------------------------------------------------

#[derive(Properties, PartialEq)]
struct CreateUserModalProps {
    visible: bool,
    on_close: Callback<()>,
    on_created: Callback<()>,
}

#[function_component(CreateUserModal)]
fn create_user_modal(props: &CreateUserModalProps) -> Html {
    let services = use_services();
    let email_ref = use_node_ref();
    let nombre_ref = use_node_ref();
    let password_ref = use_node_ref();
    let rol = use_state(|| Role::User);
    let errores = use_state(Vec::<String>::new);
    let enviando = use_state(|| false);

    if !props.visible {
        return html! {};
    }

    let on_rol = {
        let rol = rol.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                rol.set(if select.value() == "admin" {
                    Role::Admin
                } else {
                    Role::User
                });
            }
        })
    };

    let on_submit = {
        let email_ref = email_ref.clone();
        let nombre_ref = nombre_ref.clone();
        let password_ref = password_ref.clone();
        let rol = rol.clone();
        let errores = errores.clone();
        let enviando = enviando.clone();
        let api = services.api.clone();
        let on_close = props.on_close.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }
            let (Some(email_input), Some(nombre_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                nombre_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let nombre = nombre_input.value();
            let password = password_input.value();

            // el backend de admin exige contraseñas de 8+
            let encontrados: Vec<String> = [
                validar_email(&email),
                validar_nombre(&nombre),
                validar_password(&password, 8),
            ]
            .into_iter()
            .filter_map(|r| r.err().map(|e| e.to_string()))
            .collect();
            if !encontrados.is_empty() {
                errores.set(encontrados);
                return;
            }
            errores.set(Vec::new());

            let payload = UserCreate {
                email: email.trim().to_string(),
                full_name: nombre.trim().to_string(),
                password,
                role: *rol,
            };
            let api = api.clone();
            let on_close = on_close.clone();
            let on_created = on_created.clone();
            let enviando = enviando.clone();
            enviando.set(true);
            spawn_local(async move {
                match api.create_user(&payload).await {
                    Ok(creado) => {
                        log::info!("👥 Usuario creado: {}", creado.email);
                        on_close.emit(());
                        on_created.emit(());
                    }
                    Err(e) => alert(&format!("Error al crear usuario: {}", e)),
                }
                enviando.set(false);
            });
        })
    };

    html! {
        <div class="modal-backdrop">
            <form class="modal-card" onsubmit={on_submit}>
                <h3 class="modal-title">{"Crear usuario"}</h3>
                <div class="form-group">
                    <label>{"Email"}</label>
                    <input type="email" ref={email_ref} />
                </div>
                <div class="form-group">
                    <label>{"Nombre completo"}</label>
                    <input type="text" ref={nombre_ref} />
                </div>
                <div class="form-group">
                    <label>{"Contraseña"}</label>
                    <input type="password" ref={password_ref} />
                </div>
                <div class="form-group">
                    <label>{"Rol"}</label>
                    <select onchange={on_rol}>
                        <option value="user" selected={*rol == Role::User}>{"user"}</option>
                        <option value="admin" selected={*rol == Role::Admin}>{"admin"}</option>
                    </select>
                </div>
                { for errores.iter().map(|error| html! { <span class="field-error">{error}</span> }) }
                <div class="modal-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled={*enviando}
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >{"Cancelar"}</button>
                    <button type="submit" class="btn-primary" disabled={*enviando}>
                        {if *enviando { "Creando..." } else { "Crear" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EditUserModalProps {
    user: Option<User>,
    on_close: Callback<()>,
    on_updated: Callback<()>,
}

#[function_component(EditUserModal)]
fn edit_user_modal(props: &EditUserModalProps) -> Html {
    let services = use_services();
    let email = use_state(String::new);
    let nombre = use_state(String::new);
    let password = use_state(String::new);
    let rol = use_state(|| Role::User);
    let errores = use_state(Vec::<String>::new);
    let enviando = use_state(|| false);

    // Precargar el formulario cada vez que cambia el usuario a editar
    {
        let email = email.clone();
        let nombre = nombre.clone();
        let password = password.clone();
        let rol = rol.clone();
        let errores = errores.clone();
        use_effect_with(props.user.clone(), move |user| {
            if let Some(user) = user {
                email.set(user.email.clone());
                nombre.set(user.full_name.clone());
                password.set(String::new());
                rol.set(user.role);
                errores.set(Vec::new());
            }
            || ()
        });
    }

    let Some(user) = props.user.clone() else {
        return html! {};
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_nombre = {
        let nombre = nombre.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                nombre.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_rol = {
        let rol = rol.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                rol.set(if select.value() == "admin" {
                    Role::Admin
                } else {
                    Role::User
                });
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let nombre = nombre.clone();
        let password = password.clone();
        let rol = rol.clone();
        let errores = errores.clone();
        let enviando = enviando.clone();
        let api = services.api.clone();
        let on_close = props.on_close.clone();
        let on_updated = props.on_updated.clone();
        let id = user.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }

            let mut checks = vec![validar_email(&email), validar_nombre(&nombre)];
            // la contraseña solo viaja si se escribió una nueva
            if !password.is_empty() {
                checks.push(validar_password(&password, 8));
            }
            let encontrados: Vec<String> = checks
                .into_iter()
                .filter_map(|r| r.err().map(|e| e.to_string()))
                .collect();
            if !encontrados.is_empty() {
                errores.set(encontrados);
                return;
            }
            errores.set(Vec::new());

            let payload = UserUpdate {
                email: Some(email.trim().to_string()),
                full_name: Some(nombre.trim().to_string()),
                password: (!password.is_empty()).then(|| (*password).clone()),
                role: Some(*rol),
            };
            let api = api.clone();
            let on_close = on_close.clone();
            let on_updated = on_updated.clone();
            let enviando = enviando.clone();
            enviando.set(true);
            spawn_local(async move {
                match api.update_user(id, &payload).await {
                    Ok(_) => {
                        on_close.emit(());
                        on_updated.emit(());
                    }
                    Err(e) => alert(&format!("Error al actualizar usuario: {}", e)),
                }
                enviando.set(false);
            });
        })
    };

    html! {
        <div class="modal-backdrop">
            <form class="modal-card" onsubmit={on_submit}>
                <h3 class="modal-title">{format!("Editar usuario #{}", user.id)}</h3>
                <div class="form-group">
                    <label>{"Email"}</label>
                    <input type="email" value={(*email).clone()} oninput={on_email} />
                </div>
                <div class="form-group">
                    <label>{"Nombre completo"}</label>
                    <input type="text" value={(*nombre).clone()} oninput={on_nombre} />
                </div>
                <div class="form-group">
                    <label>{"Nueva contraseña (opcional)"}</label>
                    <input type="password" value={(*password).clone()} oninput={on_password} />
                </div>
                <div class="form-group">
                    <label>{"Rol"}</label>
                    <select onchange={on_rol}>
                        <option value="user" selected={*rol == Role::User}>{"user"}</option>
                        <option value="admin" selected={*rol == Role::Admin}>{"admin"}</option>
                    </select>
                </div>
                { for errores.iter().map(|error| html! { <span class="field-error">{error}</span> }) }
                <div class="modal-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled={*enviando}
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                    >{"Cancelar"}</button>
                    <button type="submit" class="btn-primary" disabled={*enviando}>
                        {if *enviando { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailModalProps {
    visible: bool,
    cargando: bool,
    user: Option<User>,
    on_close: Callback<()>,
}

#[function_component(DetailModal)]
fn detail_modal(props: &DetailModalProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let cuerpo = if props.cargando {
        html! { <p class="table-loading">{"Cargando..."}</p> }
    } else if let Some(user) = &props.user {
        html! {
            <div class="detail-fields">
                <p>{format!("ID: {}", user.id)}</p>
                <p>{format!("Email: {}", user.email)}</p>
                <p>{format!("Nombre: {}", user.full_name)}</p>
                <p>{format!("Rol: {}", user.role.as_str())}</p>
                if let Some(creado) = &user.created_at {
                    <p>{format!("Creado: {}", creado)}</p>
                }
            </div>
        }
    } else {
        html! { <p class="table-empty">{"Sin datos"}</p> }
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <h3 class="modal-title">{"Detalle de usuario"}</h3>
                {cuerpo}
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                        {"Cerrar"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ConfirmDeleteModalProps {
    id: Option<i64>,
    on_cancel: Callback<()>,
    on_deleted: Callback<()>,
}

#[function_component(ConfirmDeleteModal)]
fn confirm_delete_modal(props: &ConfirmDeleteModalProps) -> Html {
    let services = use_services();
    let borrando = use_state(|| false);

    let Some(id) = props.id else {
        return html! {};
    };

    let on_confirm = {
        let api = services.api.clone();
        let on_cancel = props.on_cancel.clone();
        let on_deleted = props.on_deleted.clone();
        let borrando = borrando.clone();
        Callback::from(move |_: MouseEvent| {
            if *borrando {
                return;
            }
            let api = api.clone();
            let on_cancel = on_cancel.clone();
            let on_deleted = on_deleted.clone();
            let borrando = borrando.clone();
            borrando.set(true);
            spawn_local(async move {
                match api.delete_user(id).await {
                    Ok(()) => {
                        log::info!("🗑️ Usuario {} eliminado", id);
                        on_cancel.emit(());
                        on_deleted.emit(());
                    }
                    Err(e) => alert(&format!("Error al eliminar usuario: {}", e)),
                }
                borrando.set(false);
            });
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <h3 class="modal-title">{"Confirmar eliminación"}</h3>
                <p>{format!("¿Seguro que deseas eliminar al usuario {}?", id)}</p>
                <div class="modal-actions">
                    <button
                        class="btn-secondary"
                        disabled={*borrando}
                        onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                    >{"Cancelar"}</button>
                    <button class="btn-danger" disabled={*borrando} onclick={on_confirm}>
                        {if *borrando { "Eliminando..." } else { "Eliminar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn alert(mensaje: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(mensaje);
    }
}
