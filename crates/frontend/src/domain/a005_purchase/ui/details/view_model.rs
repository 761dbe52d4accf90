use super::model;
use crate::domain::a002_worker::ui::select::in_zone;
use crate::shared::form::{required, validate_all, FormField, Validator};
use crate::shared::format::format_quantity;
use crate::shared::paged_select::{PagedSelectConfig, SelectOption};
use contracts::domain::a005_purchase::aggregate::{Purchase, PurchaseDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

/// Число из поля ввода; допускается запятая
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse::<f64>().ok()
}

fn positive(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: &str| match parse_decimal(value) {
        Some(v) if v > 0.0 => None,
        _ => Some(message.clone()),
    })
}

fn non_negative(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: &str| match parse_decimal(value) {
        Some(v) if v >= 0.0 => None,
        _ => Some(message.clone()),
    })
}

/// Поставщик уже выбран в документе: показываем его сразу
/// и ищем постранично, пока он не попадет в список
pub fn supplier_config(loaded: Option<&Purchase>) -> PagedSelectConfig {
    match loaded {
        Some(p) => {
            let id = p.supplier_id.as_string();
            PagedSelectConfig {
                preload_item_id: Some(id.clone()),
                default_option: Some(SelectOption::new(id, p.supplier_name.clone())),
                ..Default::default()
            }
        }
        None => PagedSelectConfig::default(),
    }
}

pub fn zone_config(loaded: Option<&Purchase>) -> PagedSelectConfig {
    let default_option = loaded.and_then(|p| {
        let id = p.zone_id?.as_string();
        Some(SelectOption::new(id, p.zone_name.clone().unwrap_or_default()))
    });
    PagedSelectConfig {
        default_option,
        ..Default::default()
    }
}

pub fn product_config(loaded: Option<&Purchase>) -> PagedSelectConfig {
    PagedSelectConfig {
        default_option: loaded
            .map(|p| SelectOption::new(p.product_id.as_string(), p.product_name.clone())),
        ..Default::default()
    }
}

/// Подпись сотрудника известна только для зоны из загруженного документа
pub fn worker_config(loaded: Option<&Purchase>, zone_id: &str) -> PagedSelectConfig {
    let default_option = loaded.and_then(|p| {
        let same_zone = p.zone_id.map(|z| z.as_string()).as_deref() == Some(zone_id);
        let worker_id = p.worker_id?.as_string();
        same_zone.then(|| SelectOption::new(worker_id, p.worker_name.clone().unwrap_or_default()))
    });
    in_zone(
        PagedSelectConfig {
            default_option,
            ..Default::default()
        },
        zone_id,
    )
}

#[derive(Clone, Copy)]
pub struct PurchaseDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub number: FormField,
    pub date: FormField,
    pub supplier: FormField,
    pub zone: FormField,
    pub worker: FormField,
    pub product: FormField,
    pub quantity: FormField,
    pub price: FormField,
    pub comment: RwSignal<String>,
    /// Документ, загруженный с сервера (режим редактирования)
    pub loaded: RwSignal<Option<Purchase>>,
    /// Форма готова к показу: новый документ или загрузка завершена
    pub is_ready: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PurchaseDetailsViewModel {
    pub fn new() -> Self {
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
        Self {
            id: RwSignal::new(None),
            number: FormField::new("").with_validator(required("Укажите номер документа")),
            date: FormField::new(today).with_validator(required("Укажите дату")),
            supplier: FormField::new("").with_validator(required("Выберите поставщика")),
            zone: FormField::new(""),
            worker: FormField::new(""),
            product: FormField::new("").with_validator(required("Выберите номенклатуру")),
            quantity: FormField::new("1")
                .with_validator(positive("Количество должно быть больше нуля")),
            price: FormField::new("0")
                .with_validator(non_negative("Цена не может быть отрицательной")),
            comment: RwSignal::new(String::new()),
            loaded: RwSignal::new(None),
            is_ready: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.get().is_some()
    }

    /// Итоговая сумма по введенным количеству и цене
    pub fn amount(&self) -> f64 {
        let quantity = parse_decimal(&self.quantity.value.get()).unwrap_or(0.0);
        let price = parse_decimal(&self.price.value.get()).unwrap_or(0.0);
        quantity * price
    }

    fn fill(&self, p: &Purchase) {
        let dto = p.to_dto();
        self.id.set(dto.id);
        self.number.reset(dto.number);
        self.date.reset(dto.date);
        self.supplier.reset(dto.supplier_ref);
        self.zone.reset(dto.zone_ref);
        self.worker.reset(dto.worker_ref);
        self.product.reset(dto.product_ref);
        self.quantity.reset(format_quantity(dto.quantity));
        self.price.reset(dto.price.to_string());
        self.comment.set(dto.comment.unwrap_or_default());
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            self.is_ready.set(true);
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(purchase) => {
                    vm.fill(&purchase);
                    vm.loaded.set(Some(purchase));
                    vm.is_ready.set(true);
                }
                Err(e) => {
                    log::warn!("purchase load failed: {}", e);
                    vm.error.set(Some(format!("Ошибка загрузки: {}", e)));
                }
            }
        });
    }

    /// Смена зоны сбрасывает сотрудника
    pub fn on_zone_changed(&self) {
        self.worker.reset("");
    }

    pub fn to_dto(&self) -> PurchaseDto {
        let comment = self.comment.get_untracked();
        PurchaseDto {
            id: self.id.get_untracked(),
            number: self.number.value.get_untracked().trim().to_string(),
            date: self.date.value.get_untracked(),
            supplier_ref: self.supplier.value.get_untracked(),
            zone_ref: self.zone.value.get_untracked(),
            worker_ref: self.worker.value.get_untracked(),
            product_ref: self.product.value.get_untracked(),
            quantity: parse_decimal(&self.quantity.value.get_untracked()).unwrap_or(0.0),
            price: parse_decimal(&self.price.value.get_untracked()).unwrap_or(0.0),
            comment: if comment.trim().is_empty() {
                None
            } else {
                Some(comment)
            },
        }
    }

    pub fn save_command(&self, on_saved: Callback<String>) {
        let fields = [
            self.number,
            self.date,
            self.supplier,
            self.product,
            self.quantity,
            self.price,
        ];
        if !validate_all(&fields) {
            self.error
                .set(Some("Заполните обязательные поля".to_string()));
            return;
        }

        let dto = self.to_dto();
        if let Err(e) = dto.validate() {
            self.error.set(Some(e));
            return;
        }

        self.error.set(None);
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&dto).await {
                Ok(id) => {
                    log::info!("purchase {} saved", id);
                    vm.id.set(Some(id.clone()));
                    on_saved.run(id);
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.is_saving.set(false);
        });
    }
}

impl Default for PurchaseDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_zone::aggregate::ZoneId;
    use contracts::domain::a002_worker::aggregate::WorkerId;
    use contracts::domain::a003_supplier::aggregate::SupplierId;
    use contracts::domain::a004_product::aggregate::ProductId;
    use contracts::domain::a005_purchase::aggregate::PurchaseId;

    fn purchase() -> Purchase {
        Purchase {
            id: PurchaseId::new_v4(),
            number: "ЗК-0007".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            supplier_id: SupplierId::new_v4(),
            supplier_name: "ООО Ромашка".to_string(),
            zone_id: Some(ZoneId::new_v4()),
            zone_name: Some("Приемка".to_string()),
            worker_id: Some(WorkerId::new_v4()),
            worker_name: Some("Иванов Иван".to_string()),
            product_id: ProductId::new_v4(),
            product_name: "Паллета".to_string(),
            quantity: 2.0,
            price: 100.0,
            comment: None,
        }
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal(" 3 "), Some(3.0));
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_number_validators() {
        let v = positive("err");
        assert!(v("0").is_some());
        assert!(v("").is_some());
        assert!(v("0,5").is_none());

        let v = non_negative("err");
        assert!(v("0").is_none());
        assert!(v("-1").is_some());
    }

    #[test]
    fn test_supplier_config_for_edit() {
        let p = purchase();
        let config = supplier_config(Some(&p));
        assert_eq!(config.preload_item_id, Some(p.supplier_id.as_string()));
        let option = config.default_option.unwrap();
        assert_eq!(option.value, p.supplier_id.as_string());
        assert_eq!(option.label_text(), "ООО Ромашка");

        let config = supplier_config(None);
        assert!(config.preload_item_id.is_none());
        assert!(config.default_option.is_none());
    }

    #[test]
    fn test_zone_and_product_config() {
        let mut p = purchase();
        assert_eq!(
            zone_config(Some(&p)).default_option.map(|o| o.label_text().to_string()),
            Some("Приемка".to_string())
        );
        assert_eq!(
            product_config(Some(&p)).default_option.map(|o| o.value),
            Some(p.product_id.as_string())
        );
        p.zone_id = None;
        assert!(zone_config(Some(&p)).default_option.is_none());
    }

    #[test]
    fn test_worker_config_depends_on_zone() {
        let p = purchase();
        let zone = p.zone_id.unwrap().as_string();

        let config = worker_config(Some(&p), &zone);
        assert_eq!(config.extra_params.get("zone_id"), Some(&zone));
        assert_eq!(
            config.default_option.map(|o| o.label_text().to_string()),
            Some("Иванов Иван".to_string())
        );

        let config = worker_config(Some(&p), "other-zone");
        assert!(config.default_option.is_none());
        assert_eq!(
            config.extra_params.get("zone_id").map(String::as_str),
            Some("other-zone")
        );
    }

    #[test]
    fn test_to_dto_after_fill() {
        let owner = Owner::new();
        owner.with(|| {
            let p = purchase();
            let vm = PurchaseDetailsViewModel::new();
            vm.fill(&p);
            let dto = vm.to_dto();
            assert_eq!(dto, p.to_dto());
            assert!(dto.validate().is_ok());

            vm.on_zone_changed();
            assert_eq!(vm.to_dto().worker_ref, "");
        });
    }

    #[test]
    fn test_new_form_is_not_valid() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = PurchaseDetailsViewModel::new();
            vm.number.set("ЗК-1".to_string());
            let dto = vm.to_dto();
            assert_eq!(dto.quantity, 1.0);
            assert!(dto.id.is_none());
            assert_eq!(dto.validate().unwrap_err(), "Поставщик обязателен для заполнения");
        });
    }
}
