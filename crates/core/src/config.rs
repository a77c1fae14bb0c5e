use std::path::PathBuf;

/// The shared secret the original deployment shipped with. Overridable via
/// `DIRECTORY_VERIFICATION_CODE`.
const DEFAULT_VERIFICATION_CODE: &str = "TELEGRAM_VERIFY_2024";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub verification_code: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let bind = bind_addr(
            std::env::var("DIRECTORY_BIND").ok(),
            std::env::var("PORT").ok(),
        );
        let data_file = std::env::var("DIRECTORY_DATA_FILE")
            .unwrap_or_else(|_| "channels.json".to_string())
            .into();
        let static_dir = std::env::var("DIRECTORY_STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string())
            .into();
        let verification_code = std::env::var("DIRECTORY_VERIFICATION_CODE")
            .unwrap_or_else(|_| DEFAULT_VERIFICATION_CODE.to_string());

        Self {
            bind,
            data_file,
            static_dir,
            verification_code,
        }
    }
}

// DIRECTORY_BIND wins over the bare PORT variable the original honoured.
fn bind_addr(bind: Option<String>, port: Option<String>) -> String {
    if let Some(bind) = bind {
        return bind;
    }
    match port {
        Some(port) => format!("0.0.0.0:{}", port),
        None => "0.0.0.0:3000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_default() {
        assert_eq!(bind_addr(None, None), "0.0.0.0:3000");
    }

    #[test]
    fn test_bind_addr_from_port() {
        assert_eq!(bind_addr(None, Some("8080".to_string())), "0.0.0.0:8080");
    }

    #[test]
    fn test_bind_addr_explicit_wins() {
        assert_eq!(
            bind_addr(Some("127.0.0.1:4000".to_string()), Some("8080".to_string())),
            "127.0.0.1:4000"
        );
    }
}
