use crate::shared::icons::icon;
use contracts::shared::paged::MAX_PER_PAGE;
use leptos::prelude::*;

/// Подпись вида "2 / 5 (47)"
fn page_label(page: u32, last_page: Option<u32>, total: Option<u64>) -> String {
    let last = last_page.unwrap_or(page).max(1);
    match total {
        Some(total) => format!("{} / {} ({})", page, last, total),
        None => format!("{} / {}", page, last),
    }
}

fn has_next(page: u32, last_page: Option<u32>) -> bool {
    last_page.is_some_and(|last| page < last)
}

/// Переключатель страниц для серверной пагинации (страницы с 1)
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] last_page: Signal<Option<u32>>,
    #[prop(into)] total: Signal<Option<u64>>,
    #[prop(into)] per_page: Signal<u32>,
    on_page_change: Callback<u32>,
    on_per_page_change: Callback<u32>,
    /// По умолчанию [10, 25, 50, 100]
    #[prop(optional)]
    per_page_options: Option<Vec<u32>>,
) -> impl IntoView {
    let options: Vec<u32> = per_page_options
        .unwrap_or_else(|| vec![10, 25, 50, 100])
        .into_iter()
        .filter(|size| *size >= 1 && *size <= MAX_PER_PAGE)
        .collect();

    let is_first = move || page.get() <= 1;
    let is_last = move || !has_next(page.get(), last_page.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get_untracked();
                    if current > 1 {
                        on_page_change.run(current - 1);
                    }
                }
                disabled=is_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_label(page.get(), last_page.get(), total.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get_untracked();
                    if has_next(current, last_page.get_untracked()) {
                        on_page_change.run(current + 1);
                    }
                }
                disabled=is_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(last) = last_page.get_untracked() {
                        on_page_change.run(last.max(1));
                    }
                }
                disabled=is_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_per_page_change.run(size);
                    }
                }
                prop:value=move || per_page.get().to_string()
            >
                {options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || per_page.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(2, Some(5), Some(47)), "2 / 5 (47)");
        assert_eq!(page_label(1, None, None), "1 / 1");
        assert_eq!(page_label(1, Some(0), Some(0)), "1 / 1 (0)");
    }

    #[test]
    fn test_has_next() {
        assert!(has_next(1, Some(2)));
        assert!(!has_next(2, Some(2)));
        assert!(!has_next(1, None));
    }
}
