//! Состояние одного экземпляра селекта с постраничным поиском.
//!
//! Все операции синхронные. Если операции нужен запрос страницы, она
//! возвращает `FetchRequest`, а драйвер (`component.rs`) выполняет его и
//! передает результат обратно в `complete`.

use super::accumulator::OptionAccumulator;
use super::debounce::{DebounceTicket, Debouncer, DEFAULT_DEBOUNCE_MS};
use super::option::{OptionMapper, SelectOption};
use super::pager::{should_load_more, ScrollMetrics};
use super::preload::PreloadResolver;
use contracts::shared::api_error::ApiError;
use contracts::shared::paged::{PageQuery, PageResponse, DEFAULT_PER_PAGE};
use std::collections::BTreeMap;

/// Настройки селекта
#[derive(Debug, Clone)]
pub struct PagedSelectConfig {
    pub per_page: u32,
    pub debounce_ms: u32,
    /// Вариант для отображения выбранного значения до его загрузки (формы редактирования)
    pub default_option: Option<SelectOption>,
    /// id, который нужно найти, листая страницы
    pub preload_item_id: Option<String>,
    /// Статические параметры, добавляемые в каждый запрос
    pub extra_params: BTreeMap<String, String>,
}

impl Default for PagedSelectConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_option: None,
            preload_item_id: None,
            extra_params: BTreeMap::new(),
        }
    }
}

/// Фаза селекта (для отображения)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectPhase {
    Closed,
    /// Только что открыт, поиск не вводился
    OpenEmpty,
    /// Идет ввод, debounce еще не истек
    OpenSearching,
    OpenSettled,
    /// Загружается первая страница
    Loading,
    /// Загружается страница N > 1
    LoadingMore,
}

/// Идентификатор запроса страницы.
///
/// `generation` растет при каждой смене строки поиска; ответы прошлых
/// поколений отбрасываются.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub query: PageQuery,
}

/// Результат переключения выбора
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange<T> {
    pub value: String,
    pub raw: Option<T>,
}

pub struct PagedSelectState<T> {
    config: PagedSelectConfig,
    mapper: OptionMapper<T>,

    is_open: bool,
    search: String,
    debouncer: Debouncer,

    page: u32,
    last_page: Option<u32>,
    generation: u64,
    in_flight: Option<RequestTicket>,

    accumulator: OptionAccumulator<T>,
    /// Строка поиска, по которой построен текущий список
    accumulated_for: Option<String>,

    value: String,
    selected_option: Option<SelectOption>,

    preload: PreloadResolver,
    error: Option<String>,
}

impl<T: Clone> PagedSelectState<T> {
    /// Если задан `default_option`, он сразу считается выбранным: триггер
    /// показывает подпись еще до первой синхронизации значения.
    pub fn new(config: PagedSelectConfig, mapper: OptionMapper<T>) -> Self {
        let preload = PreloadResolver::new(config.preload_item_id.clone());
        let selected_option = config.default_option.clone();
        let value = selected_option
            .as_ref()
            .map(|o| o.value.clone())
            .unwrap_or_default();
        Self {
            config,
            mapper,
            is_open: false,
            search: String::new(),
            debouncer: Debouncer::new(),
            page: 1,
            last_page: None,
            generation: 0,
            in_flight: None,
            accumulator: OptionAccumulator::new(),
            accumulated_for: None,
            value,
            selected_option,
            preload,
            error: None,
        }
    }

    // ------------------------------------------------------------------
    // Чтение
    // ------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn committed_search(&self) -> &str {
        self.debouncer.committed()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn last_page(&self) -> Option<u32> {
        self.last_page
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected_option.as_ref()
    }

    pub fn options(&self) -> &[SelectOption] {
        self.accumulator.options()
    }

    /// Список для отображения.
    ///
    /// Выбранный вариант, которого еще нет среди загруженных, показывается
    /// первым, пока не введен поиск.
    pub fn visible_options(&self) -> Vec<SelectOption> {
        let mut options = Vec::with_capacity(self.accumulator.len() + 1);
        if let Some(selected) = &self.selected_option {
            if self.committed_search().is_empty() && !self.accumulator.contains(&selected.value) {
                options.push(selected.clone());
            }
        }
        options.extend(self.accumulator.options().iter().cloned());
        options
    }

    pub fn phase(&self) -> SelectPhase {
        if !self.is_open {
            return SelectPhase::Closed;
        }
        if let Some(ticket) = self.in_flight {
            return if ticket.page <= 1 {
                SelectPhase::Loading
            } else {
                SelectPhase::LoadingMore
            };
        }
        if self.debouncer.is_pending() {
            return SelectPhase::OpenSearching;
        }
        if self.search.is_empty() && self.committed_search().is_empty() {
            SelectPhase::OpenEmpty
        } else {
            SelectPhase::OpenSettled
        }
    }

    // ------------------------------------------------------------------
    // Переходы
    // ------------------------------------------------------------------

    /// Первичная загрузка при монтировании: нужна только для поиска preload id
    pub fn start(&mut self) -> Option<FetchRequest> {
        if self.preload.is_active() && self.accumulator.is_empty() {
            self.request_current_page()
        } else {
            None
        }
    }

    pub fn open(&mut self) -> Option<FetchRequest> {
        self.is_open = true;
        let stale_list = self.accumulated_for.as_deref() != Some(self.committed_search());
        if self.accumulator.is_empty() || self.error.is_some() || stale_list {
            self.error = None;
            if stale_list && !self.accumulator.is_empty() {
                // Список остался от другой строки поиска: перечитываем с начала
                self.generation += 1;
                self.in_flight = None;
                self.page = 1;
            }
            self.request_current_page()
        } else {
            None
        }
    }

    /// Закрытие: сбрасываются только поиск и счетчик страниц.
    /// Запрос в полете не отменяется, кроме запроса по строке поиска:
    /// после сброса поиска его ответ уже не нужен.
    pub fn close(&mut self) {
        self.is_open = false;
        if !self.committed_search().is_empty() {
            self.generation += 1;
            self.in_flight = None;
        }
        self.search.clear();
        self.debouncer.reset();
        self.page = 1;
    }

    pub fn input(&mut self, text: String) -> DebounceTicket {
        self.search = text.clone();
        self.debouncer.schedule(text)
    }

    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<FetchRequest> {
        self.debouncer.settle(ticket)?;
        self.generation += 1;
        self.accumulator.clear();
        self.accumulated_for = None;
        self.page = 1;
        self.last_page = None;
        self.in_flight = None;
        self.error = None;
        self.request_current_page()
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<PageResponse<T>, ApiError>,
    ) -> Option<FetchRequest> {
        if ticket.generation != self.generation {
            log::debug!(
                "paged_select: drop stale page {} (generation {} != {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return None;
        }
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }

        match result {
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
            Ok(response) => {
                self.error = None;
                self.last_page = response.last_page();
                let mapper = self.mapper.clone();
                self.accumulator
                    .apply_page(ticket.page, response.data, |item| mapper(item));
                self.accumulated_for = Some(self.committed_search().to_string());
                self.refresh_selected_option();
                self.advance_preload()
            }
        }
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<FetchRequest> {
        if self.error.is_some() && metrics.near_end() && !self.is_fetching() {
            // Повтор неудавшейся страницы вместо перехода к следующей
            self.error = None;
            return self.request_current_page();
        }
        if should_load_more(&metrics, self.is_fetching(), self.page, self.last_page) {
            self.page += 1;
            return self.request_current_page();
        }
        None
    }

    /// Выбор варианта. Повторный выбор того же значения снимает выбор.
    pub fn toggle(&mut self, value: &str) -> SelectionChange<T> {
        let new_value = if self.value == value {
            String::new()
        } else {
            value.to_string()
        };
        let raw = self.accumulator.raw(&new_value).cloned();
        self.value = new_value.clone();
        self.selected_option = self.accumulator.get(&new_value).cloned();
        self.close();
        SelectionChange {
            value: new_value,
            raw,
        }
    }

    /// Значение изменилось снаружи (контролируемый компонент, сброс формы)
    pub fn sync_value(&mut self, value: &str) {
        if self.value == value {
            return;
        }
        self.value = value.to_string();
        self.refresh_selected_option();
    }

    // ------------------------------------------------------------------
    // Внутреннее
    // ------------------------------------------------------------------

    fn request_current_page(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        let ticket = RequestTicket {
            generation: self.generation,
            page: self.page,
        };
        self.in_flight = Some(ticket);
        Some(FetchRequest {
            ticket,
            query: self.query_for(self.page),
        })
    }

    fn query_for(&self, page: u32) -> PageQuery {
        PageQuery::new(page, self.config.per_page)
            .with_search(self.committed_search())
            .with_extra(&self.config.extra_params)
    }

    fn advance_preload(&mut self) -> Option<FetchRequest> {
        let found = self
            .preload
            .target()
            .is_some_and(|target| self.accumulator.contains(target));
        let next = self
            .preload
            .next_page(found, self.is_fetching(), self.page, self.last_page)?;
        self.page = next;
        self.request_current_page()
    }

    fn refresh_selected_option(&mut self) {
        if self.value.is_empty() {
            self.selected_option = None;
            return;
        }
        if let Some(loaded) = self.accumulator.get(&self.value) {
            self.selected_option = Some(loaded.clone());
            return;
        }
        let cached_matches = self
            .selected_option
            .as_ref()
            .is_some_and(|o| o.value == self.value);
        if cached_matches {
            return;
        }
        self.selected_option = self
            .config
            .default_option
            .as_ref()
            .filter(|o| o.value == self.value)
            .cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
    }

    fn mapper() -> OptionMapper<Row> {
        Arc::new(|r: &Row| SelectOption::new(r.id.to_string(), format!("Запись {}", r.id)))
    }

    fn rows(ids: std::ops::RangeInclusive<u32>) -> Vec<Row> {
        ids.map(|id| Row { id }).collect()
    }

    fn state(config: PagedSelectConfig) -> PagedSelectState<Row> {
        PagedSelectState::new(config, mapper())
    }

    fn values(st: &PagedSelectState<Row>) -> Vec<String> {
        st.options().iter().map(|o| o.value.clone()).collect()
    }

    fn assert_selection_invariant(st: &PagedSelectState<Row>) {
        if let Some(opt) = st.selected_option() {
            assert_eq!(opt.value, st.value());
        }
    }

    #[test]
    fn test_open_fetches_first_page() {
        let mut st = state(PagedSelectConfig::default());
        assert_eq!(st.phase(), SelectPhase::Closed);

        let req = st.open().expect("first open must fetch");
        assert_eq!(req.query.page, 1);
        assert_eq!(req.query.per_page, 10);
        assert_eq!(req.query.search, None);
        assert_eq!(st.phase(), SelectPhase::Loading);

        assert!(st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 2))).is_none());
        assert_eq!(st.phase(), SelectPhase::OpenEmpty);
        assert_eq!(st.options().len(), 10);
        assert_eq!(st.last_page(), Some(2));
    }

    #[test]
    fn test_page_one_replaces_accumulated() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 3)));

        let t = st.input("5".to_string());
        let req = st.settle(t).unwrap();
        assert_eq!(req.query.page, 1);
        assert_eq!(req.query.search.as_deref(), Some("5"));
        assert!(st.options().is_empty());

        st.complete(req.ticket, Ok(PageResponse::new(vec![Row { id: 5 }, Row { id: 15 }], 1)));
        assert_eq!(values(&st), vec!["5", "15"]);
        assert_eq!(st.phase(), SelectPhase::OpenSettled);
    }

    #[test]
    fn test_debounce_commits_last_keystroke_only() {
        let mut st = state(PagedSelectConfig::default());
        st.open();
        let tickets: Vec<_> = ["з", "зо", "зон"]
            .iter()
            .map(|s| st.input(s.to_string()))
            .collect();
        assert_eq!(st.phase(), SelectPhase::Loading);

        let requests: Vec<_> = tickets.into_iter().filter_map(|t| st.settle(t)).collect();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.search.as_deref(), Some("зон"));
        assert_eq!(st.committed_search(), "зон");
    }

    #[test]
    fn test_scroll_advances_once_while_fetching() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 2)));

        let m = ScrollMetrics {
            scroll_height: 1000.0,
            scroll_top: 900.0,
            client_height: 100.0,
        };
        let req = st.on_scroll(m).expect("near end must load page 2");
        assert_eq!(req.query.page, 2);
        assert_eq!(st.page(), 2);
        assert_eq!(st.phase(), SelectPhase::LoadingMore);

        assert!(st.on_scroll(m).is_none());
        assert_eq!(st.page(), 2);

        st.complete(req.ticket, Ok(PageResponse::new(rows(8..=15), 2)));
        assert_eq!(st.options().len(), 15);
        // Последняя страница: больше не грузим
        assert!(st.on_scroll(m).is_none());
    }

    #[test]
    fn test_scroll_far_from_end_does_nothing() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 5)));
        let m = ScrollMetrics {
            scroll_height: 1000.0,
            scroll_top: 100.0,
            client_height: 100.0,
        };
        assert!(st.on_scroll(m).is_none());
        assert_eq!(st.page(), 1);
    }

    #[test]
    fn test_preload_walks_to_target_page() {
        let config = PagedSelectConfig {
            preload_item_id: Some("25".to_string()),
            default_option: Some(SelectOption::new("25", "ООО Поставщик")),
            ..PagedSelectConfig::default()
        };
        let mut st = state(config);
        st.sync_value("25");
        assert_eq!(st.selected_option().unwrap().label_text(), "ООО Поставщик");

        let req = st.start().expect("preload starts on mount");
        assert_eq!(req.query.page, 1);

        let req = st
            .complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 3)))
            .expect("page 2");
        assert_eq!(req.query.page, 2);
        let req = st
            .complete(req.ticket, Ok(PageResponse::new(rows(11..=20), 3)))
            .expect("page 3");
        assert_eq!(req.query.page, 3);
        assert!(st
            .complete(req.ticket, Ok(PageResponse::new(rows(21..=30), 3)))
            .is_none());

        assert_eq!(st.page(), 3);
        assert_eq!(st.selected_option().unwrap().label_text(), "Запись 25");
        assert!(st.start().is_none());
        assert_selection_invariant(&st);
    }

    #[test]
    fn test_new_shows_default_option_before_sync() {
        let config = PagedSelectConfig {
            default_option: Some(SelectOption::new("25", "ООО Поставщик")),
            ..PagedSelectConfig::default()
        };
        let mut st = state(config);
        assert_eq!(st.value(), "25");
        assert_eq!(st.selected_option().unwrap().label_text(), "ООО Поставщик");
        assert_selection_invariant(&st);

        // Внешнее значение другое: подпись по умолчанию не подходит
        st.sync_value("");
        assert!(st.selected_option().is_none());
        assert_selection_invariant(&st);
    }

    #[test]
    fn test_new_without_default_is_empty() {
        let st = state(PagedSelectConfig::default());
        assert_eq!(st.value(), "");
        assert!(st.selected_option().is_none());
    }

    #[test]
    fn test_preload_missing_target_keeps_default() {
        let config = PagedSelectConfig {
            preload_item_id: Some("999".to_string()),
            default_option: Some(SelectOption::new("999", "Архивный")),
            ..PagedSelectConfig::default()
        };
        let mut st = state(config);
        st.sync_value("999");

        let req = st.start().unwrap();
        let req = st
            .complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 2)))
            .unwrap();
        assert!(st
            .complete(req.ticket, Ok(PageResponse::new(rows(11..=20), 2)))
            .is_none());

        assert_eq!(st.page(), 2);
        assert_eq!(st.selected_option().unwrap().label_text(), "Архивный");
        // Невыгруженный выбранный вариант показывается первым
        assert_eq!(st.visible_options()[0].value, "999");
        assert_eq!(st.visible_options().len(), 21);
    }

    #[test]
    fn test_close_and_reopen_keeps_list_without_fetch() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 2)));
        let m = ScrollMetrics {
            scroll_height: 400.0,
            scroll_top: 300.0,
            client_height: 100.0,
        };
        let req = st.on_scroll(m).unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(11..=15), 2)));
        let change = st.toggle("12");
        assert_eq!(change.value, "12");
        assert_eq!(change.raw, Some(Row { id: 12 }));
        assert_eq!(st.phase(), SelectPhase::Closed);

        assert!(st.open().is_none());
        assert_eq!(st.options().len(), 15);
        assert_eq!(st.value(), "12");
        assert_eq!(st.search(), "");
        assert_eq!(st.page(), 1);
        assert_eq!(st.phase(), SelectPhase::OpenEmpty);
        assert_selection_invariant(&st);
    }

    #[test]
    fn test_reopen_after_search_refetches() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 2)));
        let t = st.input("7".to_string());
        let req = st.settle(t).unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(vec![Row { id: 7 }], 1)));
        st.close();

        let req = st.open().expect("list was built for another search");
        assert_eq!(req.query.search, None);
        assert_eq!(req.query.page, 1);
        // Пока не пришел ответ, старый список на месте
        assert_eq!(values(&st), vec!["7"]);
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut st = state(PagedSelectConfig::default());
        let first = st.open().unwrap();

        let t = st.input("abc".to_string());
        let second = st.settle(t).unwrap();
        assert_ne!(first.ticket.generation, second.ticket.generation);

        // Ответ по новой строке пришел раньше старого
        st.complete(second.ticket, Ok(PageResponse::new(vec![Row { id: 42 }], 1)));
        assert!(st
            .complete(first.ticket, Ok(PageResponse::new(rows(1..=10), 5)))
            .is_none());

        assert_eq!(values(&st), vec!["42"]);
        assert_eq!(st.last_page(), Some(1));
        assert!(!st.is_fetching());
    }

    #[test]
    fn test_late_response_after_close_is_applied() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.close();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=3), 1)));
        assert_eq!(st.options().len(), 3);
        assert!(st.open().is_none());
    }

    #[test]
    fn test_search_response_after_close_is_dropped() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 1)));
        let t = st.input("5".to_string());
        let search_req = st.settle(t).unwrap();
        st.close();

        assert!(st
            .complete(search_req.ticket, Ok(PageResponse::new(vec![Row { id: 5 }], 1)))
            .is_none());
        let req = st.open().expect("search list was discarded");
        assert_eq!(req.query.search, None);
    }

    #[test]
    fn test_error_then_scroll_retries_same_page() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=10), 3)));
        let m = ScrollMetrics {
            scroll_height: 400.0,
            scroll_top: 300.0,
            client_height: 100.0,
        };
        let req = st.on_scroll(m).unwrap();
        assert!(st.complete(req.ticket, Err(ApiError::http(500))).is_none());
        assert_eq!(st.error(), Some("[HTTP_ERROR] HTTP 500"));
        assert!(!st.is_fetching());

        let retry = st.on_scroll(m).unwrap();
        assert_eq!(retry.query.page, 2);
        assert!(st.error().is_none());
    }

    #[test]
    fn test_error_then_reopen_retries() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Err(ApiError::transport("offline")));
        st.close();
        let retry = st.open().expect("reopen after error must refetch");
        assert_eq!(retry.query.page, 1);
    }

    #[test]
    fn test_toggle_same_value_clears() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=5), 1)));

        st.toggle("3");
        assert_eq!(st.value(), "3");
        st.open();
        let change = st.toggle("3");
        assert_eq!(change.value, "");
        assert_eq!(change.raw, None);
        assert!(st.selected_option().is_none());
    }

    #[test]
    fn test_sync_value_tracks_external_changes() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=5), 1)));

        st.sync_value("4");
        assert_eq!(st.selected_option().unwrap().value, "4");
        st.sync_value("77");
        assert!(st.selected_option().is_none());
        st.sync_value("");
        assert!(st.selected_option().is_none());
        assert_selection_invariant(&st);
    }

    #[test]
    fn test_selected_kept_visible_after_search_reset() {
        let mut st = state(PagedSelectConfig::default());
        let req = st.open().unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=5), 1)));
        st.toggle("2");

        st.open();
        let t = st.input("9".to_string());
        let req = st.settle(t).unwrap();
        st.complete(req.ticket, Ok(PageResponse::new(vec![Row { id: 9 }], 1)));

        // Во время поиска выбранный вариант не подмешивается
        assert_eq!(st.visible_options().len(), 1);
        // Но он сохранен для кнопки-триггера
        assert_eq!(st.selected_option().unwrap().value, "2");
        assert_selection_invariant(&st);
    }

    #[test]
    fn test_extra_params_in_every_query() {
        let mut extra = BTreeMap::new();
        extra.insert("is_active".to_string(), "true".to_string());
        let mut st = state(PagedSelectConfig {
            extra_params: extra,
            per_page: 25,
            ..PagedSelectConfig::default()
        });
        let req = st.open().unwrap();
        assert_eq!(req.query.per_page, 25);
        assert_eq!(req.query.extra.get("is_active").map(String::as_str), Some("true"));

        st.complete(req.ticket, Ok(PageResponse::new(rows(1..=25), 2)));
        let m = ScrollMetrics {
            scroll_height: 900.0,
            scroll_top: 800.0,
            client_height: 100.0,
        };
        let req = st.on_scroll(m).unwrap();
        assert_eq!(req.query.extra.len(), 1);
    }
}
