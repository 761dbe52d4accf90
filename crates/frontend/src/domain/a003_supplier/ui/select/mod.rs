use crate::shared::form::FormField;
use crate::shared::format::format_money;
use crate::shared::paged_select::{PagedSelectConfig, PagedSelectField, RestOptionSource, SelectOption};
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const SEARCH_PATH: &str = "/api/a003/supplier/search";

pub fn supplier_source() -> RestOptionSource<Supplier> {
    RestOptionSource::new(SEARCH_PATH)
}

fn supplier_description(supplier: &Supplier) -> String {
    let mut parts = Vec::new();
    if !supplier.inn.is_empty() {
        parts.push(format!("ИНН {}", supplier.inn));
    }
    if supplier.has_debt() {
        parts.push(format!("долг {}", format_money(supplier.balance_due)));
    }
    parts.join(", ")
}

/// Поставщик с задолженностью подсвечивается в списке
pub fn supplier_option(supplier: &Supplier) -> SelectOption {
    let value = supplier.id.as_string();
    let text = supplier.description.clone();
    let option = if supplier.has_debt() {
        let label = text.clone();
        SelectOption::with_view(value, text, move || {
            view! {
                <span class="supplier-option supplier-option_debt">{label.clone()}</span>
            }
            .into_any()
        })
    } else {
        SelectOption::new(value, text)
    };
    option.with_description(supplier_description(supplier))
}

/// Выбор поставщика в форме
#[component]
pub fn SupplierSelectField(
    field: FormField,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<(String, Option<Supplier>)>>,
) -> impl IntoView {
    view! {
        <PagedSelectField
            field=field
            source=supplier_source()
            mapper=supplier_option
            config=config
            placeholder="Выберите поставщика..."
            search_placeholder="Наименование или ИНН"
            title="Поставщик"
            disabled=disabled
            on_change=on_change
        />
    }
}
