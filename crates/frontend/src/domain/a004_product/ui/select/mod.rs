use crate::shared::form::FormField;
use crate::shared::paged_select::{PagedSelectConfig, PagedSelectField, RestOptionSource, SelectOption};
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const SEARCH_PATH: &str = "/api/a004/product/search";

pub fn product_source() -> RestOptionSource<Product> {
    RestOptionSource::new(SEARCH_PATH)
}

pub fn product_option(product: &Product) -> SelectOption {
    let description = match (product.article.is_empty(), product.unit.is_empty()) {
        (false, false) => format!("Арт. {}, {}", product.article, product.unit),
        (false, true) => format!("Арт. {}", product.article),
        (true, false) => product.unit.clone(),
        (true, true) => String::new(),
    };
    SelectOption::new(product.id.as_string(), product.description.clone())
        .with_description(description)
}

/// Конфигурация по умолчанию: в документах выбираются только активные позиции
pub fn active_only(mut config: PagedSelectConfig) -> PagedSelectConfig {
    config
        .extra_params
        .insert("is_active".to_string(), "true".to_string());
    config
}

#[component]
pub fn ProductSelectField(
    field: FormField,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<(String, Option<Product>)>>,
) -> impl IntoView {
    view! {
        <PagedSelectField
            field=field
            source=product_source()
            mapper=product_option
            config=active_only(config)
            placeholder="Выберите номенклатуру..."
            search_placeholder="Наименование или артикул"
            title="Номенклатура"
            disabled=disabled
            on_change=on_change
        />
    }
}
