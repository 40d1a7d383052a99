use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Respuesta del password grant (`POST /auth/login`)
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterPayload {
    pub email: String,
    pub full_name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct UserCreate {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

/// Actualización parcial: solo viajan los campos presentes
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UsersPaged {
    #[serde(default)]
    pub items: Vec<User>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortBy {
    Id,
    Email,
    FullName,
    Role,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Id => "id",
            SortBy::Email => "email",
            SortBy::FullName => "full_name",
            SortBy::Role => "role",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Parámetros de `GET /admin/users/paged`. Los filtros vacíos no viajan
/// (en particular, el rol "todos" se expresa omitiendo `role`).
#[derive(Clone, PartialEq, Debug)]
pub struct UserQuery {
    pub q: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub limit: u32,
    pub offset: u32,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            q: None,
            full_name: None,
            role: None,
            sort_by: SortBy::Id,
            sort_order: SortOrder::Asc,
            limit: 10,
            offset: 0,
        }
    }
}

impl UserQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ];
        if let Some(q) = self.q.as_deref() {
            let q = q.trim();
            if !q.is_empty() {
                pairs.push(("q", q.to_string()));
            }
        }
        if let Some(full_name) = self.full_name.as_deref() {
            let full_name = full_name.trim();
            if !full_name.is_empty() {
                pairs.push(("full_name", full_name.to_string()));
            }
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omite_filtros_vacios() {
        let query = UserQuery::default();
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit", "10".to_string()),
                ("offset", "0".to_string()),
                ("sortBy", "id".to_string()),
                ("sortOrder", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn query_incluye_filtros_activos_y_recorta_espacios() {
        let query = UserQuery {
            q: Some("  ana  ".to_string()),
            full_name: Some("   ".to_string()),
            role: Some(Role::Admin),
            sort_by: SortBy::Email,
            sort_order: SortOrder::Desc,
            limit: 25,
            offset: 50,
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("q", "ana".to_string())));
        assert!(pairs.contains(&("role", "admin".to_string())));
        assert!(pairs.contains(&("sortBy", "email".to_string())));
        assert!(pairs.contains(&("sortOrder", "desc".to_string())));
        // full_name en blanco no viaja
        assert!(!pairs.iter().any(|(k, _)| *k == "full_name"));
    }

    #[test]
    fn rol_serializa_en_minusculas() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let parsed: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Role::User);
    }

    #[test]
    fn update_parcial_solo_envia_campos_presentes() {
        let update = UserUpdate {
            full_name: Some("Ana López".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, "{\"full_name\":\"Ana López\"}");
    }
}
