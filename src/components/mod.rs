pub mod admin_historial_screen;
pub mod admin_users_screen;
pub mod app;
pub mod consulta_config;
pub mod documento_card;
pub mod legal_chat;
pub mod loading_indicator;
pub mod login_screen;
pub mod profile_screen;
pub mod register_screen;
pub mod user_screen;

pub use admin_historial_screen::AdminHistorialScreen;
pub use admin_users_screen::AdminUsersScreen;
pub use app::App;
pub use consulta_config::{ConsultaConfig, OpcionesConsulta};
pub use documento_card::DocumentoCard;
pub use legal_chat::LegalChat;
pub use loading_indicator::LoadingIndicator;
pub use login_screen::LoginScreen;
pub use profile_screen::ProfileScreen;
pub use register_screen::RegisterScreen;
pub use user_screen::UserScreen;
