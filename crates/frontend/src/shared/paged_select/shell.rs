use crate::shared::icons::icon;
use crate::shared::media::use_is_mobile;
use leptos::ev;
use leptos::prelude::*;

/// Контейнер выпадающей части селекта.
///
/// На desktop — popover под кнопкой-триггером, на мобильных — bottom sheet.
/// Содержимое (`children`) в обоих случаях одно и то же.
/// Клик мимо контейнера, Escape или кнопка закрытия вызывают `on_close`.
#[component]
pub fn SelectShell(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    /// Заголовок bottom sheet
    #[prop(optional, into)]
    title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let is_mobile = use_is_mobile();
    let children = StoredValue::new(children);

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.stop_propagation();
            on_close.run(());
        }
    };

    // Клики внутри контейнера не должны доходить до подложки
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || open.get()>
            {
                let title = title.clone();
                move || {
                    if is_mobile.get() {
                        view! {
                            <div class="paged-select__overlay paged-select__overlay_dim" on:click=move |_| on_close.run(())>
                                <div
                                    class="paged-select__sheet"
                                    role="dialog"
                                    on:click=stop_propagation
                                    on:keydown=handle_keydown
                                >
                                    <div class="paged-select__sheet-handle"></div>
                                    <div class="paged-select__sheet-header">
                                        <span class="paged-select__sheet-title">{title.clone()}</span>
                                        <button
                                            class="button button--icon"
                                            title="Закрыть"
                                            on:click=move |_| on_close.run(())
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                    {children.with_value(|c| c())}
                                </div>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="paged-select__overlay" on:click=move |_| on_close.run(())></div>
                            <div
                                class="paged-select__popover"
                                on:click=stop_propagation
                                on:keydown=handle_keydown
                            >
                                {children.with_value(|c| c())}
                            </div>
                        }
                        .into_any()
                    }
                }
            }
        </Show>
    }
}
