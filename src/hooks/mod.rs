pub mod services_context;
pub mod use_auth;

pub use services_context::{use_services, ServicesProvider};
pub use use_auth::{use_auth, UseAuthHandle};
