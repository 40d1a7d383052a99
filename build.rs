use std::env;
use std::fs;

// Expone las variables de un .env local como variables de entorno de
// compilación (API_URL, LEGAL_API_URL, etc.), sin pisar las ya definidas.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=No hay .env; se usan las URLs por defecto (ver src/config.rs)");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
