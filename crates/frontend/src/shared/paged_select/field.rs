use super::component::PagedSelectCore;
use super::option::SelectOption;
use super::source::OptionSource;
use super::state::PagedSelectConfig;
use crate::shared::form::FormField;
use leptos::prelude::*;
use std::sync::Arc;

/// Селект, привязанный к полю формы.
///
/// Значение хранится в `field`; выбор помечает поле как затронутое и
/// запускает валидацию, ошибка выводится под селектом.
#[component]
pub fn PagedSelectField<S, M>(
    field: FormField,
    source: S,
    mapper: M,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] search_placeholder: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Вызывается после записи значения в поле
    #[prop(optional_no_strip)]
    on_change: Option<Callback<(String, Option<S::Item>)>>,
) -> impl IntoView
where
    S: OptionSource,
    M: Fn(&S::Item) -> SelectOption + Send + Sync + 'static,
{
    let on_select = Callback::new(move |(value, raw): (String, Option<S::Item>)| {
        field.set(value.clone());
        field.touch();
        if let Some(cb) = on_change {
            cb.run((value, raw));
        }
    });

    let invalid = Signal::derive(move || field.show_error());

    view! {
        <div class="paged-select-field">
            <PagedSelectCore
                source=source
                mapper=Arc::new(mapper)
                value=field.value
                on_select=on_select
                config=config
                placeholder=placeholder
                search_placeholder=search_placeholder
                title=title
                disabled=disabled
                invalid=invalid
            />
            {move || {
                field
                    .show_error()
                    .then(|| field.error.get())
                    .flatten()
                    .map(|e| view! { <div class="field-error">{e}</div> })
            }}
        </div>
    }
}
