//! Контракт постраничного поиска
//!
//! Используется всеми endpoint'ами вида `/api/<aggregate>/search`:
//! клиент передает строку поиска и номер страницы (с 1), сервер отвечает
//! срезом записей и номером последней страницы.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Размер страницы по умолчанию
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Максимальный размер страницы, который принимает сервер
pub const MAX_PER_PAGE: u32 = 100;

/// Параметры запроса страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Дополнительные статические параметры (фильтры конкретного селекта)
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: default_page(),
            per_page: default_per_page(),
            extra: BTreeMap::new(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    /// Пустая строка поиска не передается на сервер
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_extra(mut self, extra: &BTreeMap<String, String>) -> Self {
        for (key, value) in extra {
            // Зарезервированные ключи не перетираются
            if matches!(key.as_str(), "search" | "page" | "per_page") {
                continue;
            }
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.page >= 1, "Номер страницы начинается с 1");
        anyhow::ensure!(
            (1..=MAX_PER_PAGE).contains(&self.per_page),
            "Размер страницы должен быть от 1 до {}",
            MAX_PER_PAGE
        );
        Ok(())
    }
}

/// Метаданные страницы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Ответ со страницей записей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> PageResponse<T> {
    pub fn new(data: Vec<T>, last_page: u32) -> Self {
        Self {
            data,
            meta: Some(PageMeta {
                last_page: Some(last_page),
                ..PageMeta::default()
            }),
        }
    }

    /// Номер последней страницы, если сервер его сообщил
    pub fn last_page(&self) -> Option<u32> {
        self.meta.as_ref().and_then(|m| m.last_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_defaults() {
        let q = PageQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, DEFAULT_PER_PAGE);
        assert!(q.search.is_none());
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_query_serializes_extra_flat() {
        let mut extra = BTreeMap::new();
        extra.insert("zone_id".to_string(), "z-1".to_string());
        extra.insert("page".to_string(), "99".to_string());

        let q = PageQuery::new(2, 10).with_search("  склад ").with_extra(&extra);
        let value = serde_json::to_value(&q).unwrap();

        assert_eq!(
            value,
            json!({ "search": "склад", "page": 2, "per_page": 10, "zone_id": "z-1" })
        );
    }

    #[test]
    fn test_query_skips_empty_search() {
        let q = PageQuery::new(1, 10).with_search("   ");
        let value = serde_json::to_value(&q).unwrap();
        assert!(value.get("search").is_none());
    }

    #[test]
    fn test_query_validation() {
        assert!(PageQuery::new(0, 10).validate().is_err());
        assert!(PageQuery::new(1, 0).validate().is_err());
        assert!(PageQuery::new(1, MAX_PER_PAGE + 1).validate().is_err());
        assert!(PageQuery::new(3, MAX_PER_PAGE).validate().is_ok());
    }

    #[test]
    fn test_response_without_meta() {
        let resp: PageResponse<String> = serde_json::from_value(json!({ "data": ["a", "b"] })).unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.last_page(), None);

        let resp: PageResponse<String> =
            serde_json::from_value(json!({ "data": [], "meta": { "last_page": 4 } })).unwrap();
        assert_eq!(resp.last_page(), Some(4));
    }
}
