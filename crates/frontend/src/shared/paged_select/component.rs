use super::option::{OptionMapper, SelectOption};
use super::pager::{visible_window, ScrollMetrics, OVERSCAN, ROW_HEIGHT};
use super::shell::SelectShell;
use super::source::OptionSource;
use super::state::{FetchRequest, PagedSelectConfig, PagedSelectState, SelectPhase};
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Высота области списка, px
const LIST_HEIGHT: f64 = 288.0;

/// Выполнить запрос страницы и применить результат.
///
/// Если после применения понадобилась следующая страница (preload),
/// она запрашивается тем же способом.
fn dispatch<S: OptionSource>(
    state: RwSignal<PagedSelectState<S::Item>>,
    source: S,
    request: Option<FetchRequest>,
) {
    let Some(FetchRequest { ticket, query }) = request else {
        return;
    };
    log::debug!(
        "paged_select: fetch page {} (search={:?}, generation={})",
        query.page,
        query.search,
        ticket.generation
    );
    wasm_bindgen_futures::spawn_local(async move {
        let result = source.fetch_page(query).await;
        if let Err(e) = &result {
            log::warn!("paged_select: page {} failed: {}", ticket.page, e);
        }
        let next = state.try_update(|s| s.complete(ticket, result)).flatten();
        dispatch(state, source, next);
    });
}

/// Headless-ядро с разметкой: кнопка-триггер + контейнер со строкой поиска
/// и виртуализированным списком. Значением не владеет: текущее значение
/// приходит через `value`, выбор уходит в `on_select`.
#[component]
pub fn PagedSelectCore<S>(
    source: S,
    mapper: OptionMapper<S::Item>,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<(String, Option<S::Item>)>,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] search_placeholder: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView
where
    S: OptionSource,
{
    let placeholder = if placeholder.is_empty() {
        "Выберите значение...".to_string()
    } else {
        placeholder
    };
    let search_placeholder = if search_placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        search_placeholder
    };

    let debounce_ms = config.debounce_ms;
    let mut initial = PagedSelectState::new(config, mapper);
    initial.sync_value(&value.get_untracked());
    let state = RwSignal::new(initial);
    let source = StoredValue::new(source);
    let scroll_top = RwSignal::new(0.0_f64);
    let list_ref = NodeRef::<Div>::new();

    let run = move |request: Option<FetchRequest>| {
        if let Some(src) = source.try_get_value() {
            dispatch(state, src, request);
        }
    };

    let reset_scroll = move || {
        scroll_top.set(0.0);
        if let Some(el) = list_ref.get_untracked() {
            el.set_scroll_top(0);
        }
    };

    // Значение управляется снаружи
    Effect::new(move |_| {
        let current = value.get();
        state.update(|s| s.sync_value(&current));
    });

    run(state.try_update(|s| s.start()).flatten());

    let handle_open = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if state.with_untracked(|s| s.is_open()) {
            state.update(|s| s.close());
            return;
        }
        reset_scroll();
        run(state.try_update(|s| s.open()).flatten());
    };

    let handle_close = Callback::new(move |_: ()| {
        state.update(|s| s.close());
    });

    let handle_input = move |ev| {
        let text = event_target_value(&ev);
        let Some(ticket) = state.try_update(|s| s.input(text)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            let request = state.try_update(|s| s.settle(ticket)).flatten();
            if request.is_some() {
                reset_scroll();
            }
            run(request);
        });
    };

    let handle_scroll = move |_| {
        let Some(el) = list_ref.get_untracked() else {
            return;
        };
        let metrics = ScrollMetrics::from_element(&el);
        scroll_top.set(metrics.scroll_top);
        run(state.try_update(|s| s.on_scroll(metrics)).flatten());
    };

    let handle_select = move |value: String| {
        if let Some(change) = state.try_update(|s| s.toggle(&value)) {
            on_select.run((change.value, change.raw));
        }
    };

    let is_open = Signal::derive(move || state.with(|s| s.is_open()));
    let options = Memo::new(move |_| state.with(|s| s.visible_options()));
    let phase = Memo::new(move |_| state.with(|s| s.phase()));
    let selected_value = Memo::new(move |_| state.with(|s| s.value().to_string()));

    let trigger_label = move || {
        let selected = state.with(|s| s.selected_option().cloned());
        match selected {
            Some(opt) => view! {
                <span class="paged-select__value" title=opt.label_text().to_string()>
                    {opt.label.render()}
                </span>
            }
            .into_any(),
            None => view! {
                <span class="paged-select__placeholder">{placeholder.clone()}</span>
            }
            .into_any(),
        }
    };

    let body = move || {
        let search_placeholder = search_placeholder.clone();
        view! {
            <div class="paged-select__search">
                {icon("search")}
                <input
                    type="text"
                    placeholder=search_placeholder
                    autofocus=true
                    prop:value=move || state.with(|s| s.search().to_string())
                    on:input=handle_input
                />
                {move || matches!(phase.get(), SelectPhase::OpenSearching | SelectPhase::Loading)
                    .then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
            </div>
            <div
                class="paged-select__list"
                node_ref=list_ref
                style=format!("max-height: {}px; overflow-y: auto; position: relative;", LIST_HEIGHT)
                on:scroll=handle_scroll
            >
                {move || {
                    let items = options.get();
                    if items.is_empty() {
                        let text = match phase.get() {
                            SelectPhase::Loading | SelectPhase::OpenSearching => "Загрузка...",
                            _ => "Ничего не найдено",
                        };
                        return view! { <div class="paged-select__empty">{text}</div> }.into_any();
                    }
                    let total = items.len();
                    let window = visible_window(scroll_top.get(), LIST_HEIGHT, ROW_HEIGHT, total, OVERSCAN);
                    let offset = window.start as f64 * ROW_HEIGHT;
                    let rows = items[window].to_vec();
                    view! {
                        <div style=format!("height: {}px; position: relative;", total as f64 * ROW_HEIGHT)>
                            <div style=format!("position: absolute; top: {}px; left: 0; right: 0;", offset)>
                                {rows.into_iter().map(|opt| view! {
                                    <OptionRow option=opt selected_value=selected_value on_pick=handle_select />
                                }).collect_view()}
                            </div>
                        </div>
                    }
                    .into_any()
                }}
                {move || (phase.get() == SelectPhase::LoadingMore).then(|| view! {
                    <div class="paged-select__more"><Spinner size=SpinnerSize::Tiny />" Загрузка..."</div>
                })}
                {move || state.with(|s| s.error().map(|e| e.to_string())).map(|e| view! {
                    <div class="paged-select__error">"Ошибка загрузки: " {e}</div>
                })}
            </div>
        }
    };

    view! {
        <style>
            "
            .paged-select { position: relative; width: 100%; }
            .paged-select__trigger {
                width: 100%; display: flex; align-items: center; justify-content: space-between; gap: 8px;
                padding: 6px 10px; border: 1px solid var(--colorNeutralStroke1, #ddd); border-radius: 4px;
                background: var(--colorNeutralBackground1, #fff); cursor: pointer; font-size: 14px; text-align: left;
            }
            .paged-select__trigger_invalid { border-color: var(--color-error, #d13438); }
            .paged-select__trigger:disabled { cursor: not-allowed; opacity: 0.6; }
            .paged-select__placeholder { color: var(--colorNeutralForeground4, #888); }
            .paged-select__value { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
            .paged-select__overlay { position: fixed; inset: 0; z-index: 999; }
            .paged-select__overlay_dim { background: rgba(0, 0, 0, 0.35); }
            .paged-select__popover {
                position: absolute; top: calc(100% + 4px); left: 0; right: 0; z-index: 1000;
                background: var(--colorNeutralBackground1, #fff); border-radius: 6px;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
            }
            .paged-select__sheet {
                position: fixed; left: 0; right: 0; bottom: 0; max-height: 80vh;
                background: var(--colorNeutralBackground1, #fff); border-radius: 12px 12px 0 0;
            }
            .paged-select__sheet-handle { width: 40px; height: 4px; margin: 8px auto; border-radius: 2px; background: #ccc; }
            .paged-select__sheet-header { display: flex; justify-content: space-between; align-items: center; padding: 0 12px 8px; }
            .paged-select__search { display: flex; align-items: center; gap: 6px; padding: 8px 10px; border-bottom: 1px solid #eee; }
            .paged-select__search input { flex: 1; border: none; outline: none; font-size: 14px; background: transparent; }
            .paged-select__option { height: 36px; box-sizing: border-box; padding: 0 10px; display: flex; flex-direction: column; justify-content: center; cursor: pointer; }
            .paged-select__option:hover { background: var(--colorNeutralBackground1Hover, #f5f5f5); }
            .paged-select__option_selected { background: #e3f2fd; font-weight: 500; }
            .paged-select__option-description { font-size: 11px; color: #777; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
            .paged-select__empty, .paged-select__more, .paged-select__error { padding: 10px; text-align: center; color: #666; font-size: 13px; }
            .paged-select__error { color: var(--color-error, #d13438); }
            "
        </style>
        <div class="paged-select">
            <button
                type="button"
                class=move || {
                    if invalid.get() {
                        "paged-select__trigger paged-select__trigger_invalid"
                    } else {
                        "paged-select__trigger"
                    }
                }
                disabled=move || disabled.get()
                on:click=handle_open
            >
                {trigger_label}
                {icon("chevron-down")}
            </button>
            <SelectShell open=is_open on_close=handle_close title=title>
                {body.clone()}
            </SelectShell>
        </div>
    }
}

#[component]
fn OptionRow(
    option: SelectOption,
    selected_value: Memo<String>,
    on_pick: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    let value = option.value.clone();
    let value_for_class = option.value.clone();
    let title = option.label_text().to_string();

    view! {
        <div
            class=move || {
                if selected_value.get() == value_for_class {
                    "paged-select__option paged-select__option_selected"
                } else {
                    "paged-select__option"
                }
            }
            title=title
            on:click=move |_| on_pick(value.clone())
        >
            <div>{option.label.render()}</div>
            {option.description.map(|d| view! {
                <div class="paged-select__option-description">{d}</div>
            })}
        </div>
    }
}

/// Селект с постраничным поиском для неуправляемого использования:
/// значение хранит вызывающий код, изменения приходят в `on_change`.
#[component]
pub fn PagedSelect<S, M>(
    /// Источник вариантов
    source: S,
    /// Преобразование записи в вариант
    mapper: M,
    /// Текущее значение (пустая строка — ничего не выбрано)
    #[prop(into)]
    value: Signal<String>,
    /// Новое значение и исходная запись выбранного варианта
    on_change: Callback<(String, Option<S::Item>)>,
    #[prop(optional)] config: PagedSelectConfig,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] search_placeholder: String,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView
where
    S: OptionSource,
    M: Fn(&S::Item) -> SelectOption + Send + Sync + 'static,
{
    view! {
        <PagedSelectCore
            source=source
            mapper=Arc::new(mapper)
            value=value
            on_select=on_change
            config=config
            placeholder=placeholder
            search_placeholder=search_placeholder
            title=title
            disabled=disabled
        />
    }
}
