//! Адрес backend-сервера

/// Порт backend-сервера
pub const API_PORT: u16 = 3000;

/// Базовый адрес API, построенный по `window.location`:
/// тот же протокол и хост, порт `API_PORT`.
///
/// Вне браузера возвращает пустую строку.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_parts(&protocol, &hostname)
}

fn base_from_parts(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Полный URL по пути вида `/api/...`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
