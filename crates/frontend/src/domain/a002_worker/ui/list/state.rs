use contracts::domain::a002_worker::aggregate::Worker;
use contracts::shared::paged::{PageQuery, PageResponse};
use leptos::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct WorkerListState {
    pub items: Vec<Worker>,
    pub search_query: String,
    /// Фильтр по зоне, пустая строка - все зоны
    pub zone_id: String,
    pub page: u32,
    pub per_page: u32,
    pub last_page: Option<u32>,
    pub total: Option<u64>,
    /// Номер последней начатой загрузки; ответы прошлых загрузок отбрасываются
    pub generation: u64,
}

impl Default for WorkerListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            zone_id: String::new(),
            page: 1,
            per_page: 25,
            last_page: None,
            total: None,
            generation: 0,
        }
    }
}

impl WorkerListState {
    pub fn query(&self) -> PageQuery {
        let mut extra = BTreeMap::new();
        if !self.zone_id.is_empty() {
            extra.insert("zone_id".to_string(), self.zone_id.clone());
        }
        PageQuery::new(self.page, self.per_page)
            .with_search(&self.search_query)
            .with_extra(&extra)
    }

    /// Начать новую загрузку: номер загрузки и запрос по текущим фильтрам
    pub fn begin_load(&mut self) -> (u64, PageQuery) {
        self.generation += 1;
        (self.generation, self.query())
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Применить ответ загрузки `generation`. false, если ответ устарел
    pub fn apply(&mut self, generation: u64, response: PageResponse<Worker>) -> bool {
        if !self.is_current(generation) {
            log::debug!(
                "worker list: drop stale response (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        let meta = response.meta.clone().unwrap_or_default();
        self.last_page = response.last_page();
        self.total = meta.total;
        if let Some(current) = meta.current_page {
            self.page = current;
        }
        self.items = response.data;
        true
    }
}

pub fn create_state() -> RwSignal<WorkerListState> {
    RwSignal::new(WorkerListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_zone::aggregate::ZoneId;
    use contracts::domain::a002_worker::aggregate::WorkerId;
    use contracts::shared::paged::PageMeta;
    use uuid::Uuid;

    fn worker(zone_name: &str) -> Worker {
        Worker {
            id: WorkerId::new_v4(),
            code: "0001".to_string(),
            full_name: "Петров Петр".to_string(),
            position: None,
            zone_id: Some(ZoneId::new(Uuid::nil())),
            zone_name: Some(zone_name.to_string()),
        }
    }

    #[test]
    fn test_query_with_filters() {
        let state = WorkerListState {
            search_query: " Петров ".to_string(),
            zone_id: "z1".to_string(),
            page: 3,
            ..Default::default()
        };
        let q = state.query();
        assert_eq!(q.page, 3);
        assert_eq!(q.per_page, 25);
        assert_eq!(q.search.as_deref(), Some("Петров"));
        assert_eq!(q.extra.get("zone_id").map(String::as_str), Some("z1"));
    }

    #[test]
    fn test_query_without_filters() {
        let q = WorkerListState::default().query();
        assert!(q.search.is_none());
        assert!(q.extra.is_empty());
    }

    #[test]
    fn test_apply_response() {
        let mut state = WorkerListState::default();
        let (generation, _) = state.begin_load();
        assert!(state.apply(generation, PageResponse {
            data: Vec::new(),
            meta: Some(PageMeta {
                current_page: Some(2),
                last_page: Some(4),
                total: Some(95),
            }),
        }));
        assert_eq!(state.page, 2);
        assert_eq!(state.last_page, Some(4));
        assert_eq!(state.total, Some(95));
    }

    #[test]
    fn test_out_of_order_response_is_dropped() {
        let mut state = WorkerListState::default();
        state.zone_id = "zone-a".to_string();
        let (first, query_a) = state.begin_load();
        assert_eq!(query_a.extra.get("zone_id").map(String::as_str), Some("zone-a"));

        state.zone_id = "zone-b".to_string();
        let (second, _) = state.begin_load();

        assert!(state.apply(second, PageResponse::new(vec![worker("zone-b")], 1)));
        // Ответ по старому фильтру пришел позже
        assert!(!state.apply(first, PageResponse::new(vec![worker("zone-a")], 1)));

        let zones: Vec<_> = state.items.iter().map(|w| w.zone_name.clone()).collect();
        assert_eq!(zones, vec![Some("zone-b".to_string())]);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
    }

    #[test]
    fn test_stale_response_does_not_change_paging() {
        let mut state = WorkerListState::default();
        state.page = 2;
        let (old, _) = state.begin_load();
        state.page = 3;
        let (_, query) = state.begin_load();
        assert_eq!(query.page, 3);

        assert!(!state.apply(old, PageResponse {
            data: vec![worker("zone-a")],
            meta: Some(PageMeta {
                current_page: Some(2),
                last_page: Some(5),
                total: Some(120),
            }),
        }));
        assert_eq!(state.page, 3);
        assert!(state.items.is_empty());
        assert_eq!(state.total, None);
    }
}
