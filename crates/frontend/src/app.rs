use crate::domain::a002_worker::ui::list::WorkerList;
use crate::domain::a005_purchase::ui::details::PurchaseDetails;
use crate::shared::icons::icon;
use crate::shared::media::provide_viewport_context;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppTab {
    Purchase,
    Workers,
}

impl AppTab {
    fn title(self) -> &'static str {
        match self {
            AppTab::Purchase => "Закупка",
            AppTab::Workers => "Сотрудники",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            AppTab::Purchase => "purchases",
            AppTab::Workers => "users",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_viewport_context();

    let active = RwSignal::new(AppTab::Purchase);
    // После сохранения форма переходит в режим редактирования
    let purchase_id = RwSignal::new(None::<String>);

    let on_saved = Callback::new(move |id: String| purchase_id.set(Some(id)));
    let on_cancel = Callback::new(move |_: ()| purchase_id.set(None));

    let tab_button = move |tab: AppTab| {
        view! {
            <button
                class=move || if active.get() == tab { "app-tab app-tab_active" } else { "app-tab" }
                on:click=move |_| active.set(tab)
            >
                {icon(tab.icon())}
                {tab.title()}
            </button>
        }
    };

    view! {
        <ConfigProvider>
            <div class="app">
                <nav class="app-tabs">
                    {tab_button(AppTab::Purchase)}
                    {tab_button(AppTab::Workers)}
                </nav>
                <main class="app-content">
                    {move || match active.get() {
                        AppTab::Purchase => {
                            let id = purchase_id.get();
                            view! {
                                <PurchaseDetails id=id on_saved=on_saved on_cancel=on_cancel />
                            }
                            .into_any()
                        }
                        AppTab::Workers => view! { <WorkerList /> }.into_any(),
                    }}
                </main>
            </div>
        </ConfigProvider>
    }
}
