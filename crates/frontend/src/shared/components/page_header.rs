use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заголовок экрана: иконка, название, счетчик и кнопки действий справа
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Имя иконки из `shared::icons`
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Например, общее количество записей
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(icon)}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
