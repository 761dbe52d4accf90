pub mod state;

use self::state::create_state;
use crate::domain::a001_zone::ui::select::ZoneFilter;
use crate::shared::api_utils::api_url;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::paged_select::source::page_url;
use contracts::domain::a001_zone::aggregate::Zone;
use contracts::domain::a002_worker::aggregate::Worker;
use contracts::domain::common::AggregateId;
use contracts::shared::paged::{PageQuery, PageResponse};
use gloo_net::http::Request;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub const LIST_PATH: &str = "/api/a002/worker/list";

async fn fetch_workers(query: PageQuery) -> Result<PageResponse<Worker>, String> {
    let url = page_url(&api_url(LIST_PATH), &query).map_err(|e| e.to_string())?;

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;

    if !response.ok() {
        return Err(format!("Ошибка сервера: {}", response.status()));
    }

    response
        .json::<PageResponse<Worker>>()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}

#[component]
pub fn WorkerList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_query = RwSignal::new(String::new());

    let load_items = move || {
        let Some((generation, query)) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = fetch_workers(query).await;
            // Пока шел запрос, фильтры или страница могли смениться
            if state.try_with_untracked(|s| s.is_current(generation)) != Some(true) {
                return;
            }
            match result {
                Ok(response) => {
                    state.update(|s| {
                        s.apply(generation, response);
                    });
                }
                Err(e) => {
                    log::warn!("worker list: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load_items();

    let go_to_page = move |page: u32| {
        state.update(|s| s.page = page);
        load_items();
    };

    let change_per_page = move |per_page: u32| {
        state.update(|s| {
            s.per_page = per_page;
            s.page = 1;
        });
        load_items();
    };

    let apply_search = move || {
        let text = search_query.get_untracked();
        state.update(|s| {
            s.search_query = text;
            s.page = 1;
        });
        load_items();
    };

    let on_zone_change = Callback::new(move |(zone_id, _): (String, Option<Zone>)| {
        state.update(|s| {
            s.zone_id = zone_id;
            s.page = 1;
        });
        load_items();
    });

    view! {
        <div class="page">
            <PageHeader
                title="Сотрудники склада"
                icon_name="users"
                subtitle=Signal::derive(move || {
                    state.with(|s| s.total.map(|t| format!("Всего: {}", t)))
                })
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load_items()
                    disabled=Signal::derive(move || loading.get())
                >
                    {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="min-width: 260px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Зона:"</Label>
                            <ZoneFilter
                                value=Signal::derive(move || state.with(|s| s.zone_id.clone()))
                                on_change=on_zone_change
                            />
                        </Flex>
                    </div>
                    <div style="flex: 1; max-width: 320px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Поиск:"</Label>
                            <Input value=search_query placeholder="ФИО, табельный номер..." />
                        </Flex>
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_search()>
                        "Найти"
                    </Button>
                </Flex>
                <PaginationControls
                    page=Signal::derive(move || state.with(|s| s.page))
                    last_page=Signal::derive(move || state.with(|s| s.last_page))
                    total=Signal::derive(move || state.with(|s| s.total))
                    per_page=Signal::derive(move || state.with(|s| s.per_page))
                    on_page_change=Callback::new(go_to_page)
                    on_per_page_change=Callback::new(change_per_page)
                />
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Таб. №"</TableHeaderCell>
                            <TableHeaderCell>"ФИО"</TableHeaderCell>
                            <TableHeaderCell>"Должность"</TableHeaderCell>
                            <TableHeaderCell>"Зона"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|worker| worker.id.as_string()
                            children=move |worker| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{worker.code}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{worker.full_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{worker.position.unwrap_or_default()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {worker.zone_name.unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
