use crate::shared::form::FormField;
use crate::shared::paged_select::{
    PagedSelect, PagedSelectConfig, PagedSelectField, RestOptionSource, SelectOption,
};
use contracts::domain::a001_zone::aggregate::Zone;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const SEARCH_PATH: &str = "/api/a001/zone/search";

pub fn zone_source() -> RestOptionSource<Zone> {
    RestOptionSource::new(SEARCH_PATH)
}

/// "Код — Наименование", склад в описании
pub fn zone_option(zone: &Zone) -> SelectOption {
    let label = if zone.code.is_empty() {
        zone.description.clone()
    } else {
        format!("{} - {}", zone.code, zone.description)
    };
    let option = SelectOption::new(zone.id.as_string(), label);
    match &zone.warehouse {
        Some(warehouse) => option.with_description(format!("Склад: {}", warehouse)),
        None => option,
    }
}

/// Выбор зоны в форме
#[component]
pub fn ZoneSelectField(
    field: FormField,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<(String, Option<Zone>)>>,
) -> impl IntoView {
    view! {
        <PagedSelectField
            field=field
            source=zone_source()
            mapper=zone_option
            config=config
            placeholder="Выберите зону..."
            search_placeholder="Код или наименование зоны"
            title="Зона"
            disabled=disabled
            on_change=on_change
        />
    }
}

/// Выбор зоны вне формы (фильтры списков)
#[component]
pub fn ZoneFilter(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<(String, Option<Zone>)>,
) -> impl IntoView {
    view! {
        <PagedSelect
            source=zone_source()
            mapper=zone_option
            value=value
            on_change=on_change
            placeholder="Все зоны"
            search_placeholder="Поиск зоны"
            title="Зона"
        />
    }
}
