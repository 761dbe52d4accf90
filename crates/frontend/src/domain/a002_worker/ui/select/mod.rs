use crate::shared::form::FormField;
use crate::shared::paged_select::{PagedSelectConfig, PagedSelectField, RestOptionSource, SelectOption};
use contracts::domain::a002_worker::aggregate::Worker;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const SEARCH_PATH: &str = "/api/a002/worker/search";

pub fn worker_source() -> RestOptionSource<Worker> {
    RestOptionSource::new(SEARCH_PATH)
}

pub fn worker_option(worker: &Worker) -> SelectOption {
    let label = format!("{} ({})", worker.full_name, worker.code);
    let description = [worker.position.as_deref(), worker.zone_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    SelectOption::new(worker.id.as_string(), label).with_description(description)
}

/// Ограничить поиск сотрудниками зоны
pub fn in_zone(mut config: PagedSelectConfig, zone_id: &str) -> PagedSelectConfig {
    if zone_id.is_empty() {
        config.extra_params.remove("zone_id");
    } else {
        config
            .extra_params
            .insert("zone_id".to_string(), zone_id.to_string());
    }
    config
}

/// Выбор сотрудника в форме.
///
/// Параметры запроса фиксируются при создании, поэтому при смене зоны
/// компонент создается заново.
#[component]
pub fn WorkerSelectField(
    field: FormField,
    #[prop(optional, into)] zone_id: String,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <PagedSelectField
            field=field
            source=worker_source()
            mapper=worker_option
            config=in_zone(config, &zone_id)
            placeholder="Выберите сотрудника..."
            search_placeholder="ФИО или табельный номер"
            title="Сотрудник"
            disabled=disabled
        />
    }
}
