use super::view_model::{
    product_config, supplier_config, worker_config, zone_config, PurchaseDetailsViewModel,
};
use crate::domain::a001_zone::ui::select::ZoneSelectField;
use crate::domain::a002_worker::ui::select::WorkerSelectField;
use crate::domain::a003_supplier::ui::select::SupplierSelectField;
use crate::domain::a004_product::ui::select::ProductSelectField;
use crate::shared::form::FormField;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use contracts::domain::a001_zone::aggregate::Zone;
use leptos::prelude::*;
use thaw::*;

/// Поле ввода, связанное с `FormField`; ошибка появляется после потери фокуса
#[component]
fn FieldInput(
    field: FormField,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <Label>{label}</Label>
            <input
                type=input_type
                class=move || if field.show_error() { "input input_invalid" } else { "input" }
                placeholder=placeholder
                prop:value=move || field.value.get()
                on:input=move |ev| field.set(event_target_value(&ev))
                on:blur=move |_| field.touch()
            />
            {move || field
                .show_error()
                .then(|| field.error.get())
                .flatten()
                .map(|e| view! { <div class="field-error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn PurchaseDetails(
    /// id документа; `None` — новый документ
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PurchaseDetailsViewModel::new();
    vm.load_if_needed(id);

    let on_zone_change = Callback::new(move |_: (String, Option<Zone>)| vm.on_zone_changed());

    view! {
        <div class="details-container purchase-details">
            <div class="details-header">
                {icon("purchases")}
                <h3>
                    {move || if vm.is_edit_mode() { "Редактирование закупки" } else { "Новая закупка" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || vm.is_ready.get()
                fallback=|| view! { <Spinner label="Загрузка документа..." /> }
            >
                {move || {
                    // Настройки селектов берутся из загруженного документа один раз
                    let loaded = vm.loaded.get_untracked();
                    let loaded = loaded.as_ref();
                    let supplier = supplier_config(loaded);
                    let zone = zone_config(loaded);
                    let product = product_config(loaded);
                    view! {
                        <div class="details-form">
                            <Flex gap=FlexGap::Medium>
                                <FieldInput field=vm.number label="Номер" placeholder="ЗК-0001" />
                                <FieldInput field=vm.date label="Дата" input_type="date" />
                            </Flex>

                            <div class="form-group">
                                <Label>"Поставщик"</Label>
                                <SupplierSelectField field=vm.supplier config=supplier />
                            </div>

                            <Flex gap=FlexGap::Medium>
                                <div class="form-group" style="flex: 1;">
                                    <Label>"Зона"</Label>
                                    <ZoneSelectField field=vm.zone config=zone on_change=on_zone_change />
                                </div>
                                <div class="form-group" style="flex: 1;">
                                    <Label>"Принял"</Label>
                                    {move || {
                                        let zone_id = vm.zone.value.get();
                                        let config = vm
                                            .loaded
                                            .with_untracked(|p| worker_config(p.as_ref(), &zone_id));
                                        let no_zone = zone_id.is_empty();
                                        view! {
                                            <WorkerSelectField
                                                field=vm.worker
                                                zone_id=zone_id
                                                config=config
                                                disabled=no_zone
                                            />
                                        }
                                    }}
                                </div>
                            </Flex>

                            <div class="form-group">
                                <Label>"Номенклатура"</Label>
                                <ProductSelectField field=vm.product config=product />
                            </div>

                            <Flex gap=FlexGap::Medium align=FlexAlign::End>
                                <FieldInput field=vm.quantity label="Количество" input_type="number" />
                                <FieldInput field=vm.price label="Цена" input_type="number" />
                                <div class="form-group">
                                    <Label>"Сумма"</Label>
                                    <div class="purchase-details__amount">
                                        {move || format_money(vm.amount())}
                                    </div>
                                </div>
                            </Flex>

                            <div class="form-group">
                                <Label>"Комментарий"</Label>
                                <textarea
                                    rows="3"
                                    prop:value=move || vm.comment.get()
                                    on:input=move |ev| vm.comment.set(event_target_value(&ev))
                                    placeholder="Необязательно"
                                />
                            </div>
                        </div>
                    }
                }}
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.is_saving.get() || !vm.is_ready.get())
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Сохранить" } else { "Создать" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    "Отмена"
                </Button>
            </div>
        </div>
    }
}
