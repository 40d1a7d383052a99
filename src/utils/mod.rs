pub mod validation;

pub use validation::{validar_email, validar_nombre, validar_password};
