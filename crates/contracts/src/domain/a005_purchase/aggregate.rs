use crate::domain::a001_zone::aggregate::ZoneId;
use crate::domain::a002_worker::aggregate::WorkerId;
use crate::domain::a003_supplier::aggregate::SupplierId;
use crate::domain::a004_product::aggregate::ProductId;
use crate::domain::common::aggregate_id::parse_optional_ref;
use crate::domain::common::AggregateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор документа закупки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseId(pub Uuid);

impl PurchaseId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PurchaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Документ закупки товара у поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub number: String,
    pub date: NaiveDate,

    #[serde(rename = "supplierId")]
    pub supplier_id: SupplierId,
    /// Наименование поставщика (JOIN), нужно для отображения до загрузки справочника
    #[serde(rename = "supplierName", default)]
    pub supplier_name: String,

    #[serde(rename = "zoneId", default)]
    pub zone_id: Option<ZoneId>,
    #[serde(rename = "zoneName", default)]
    pub zone_name: Option<String>,

    /// Кладовщик, принявший товар
    #[serde(rename = "workerId", default)]
    pub worker_id: Option<WorkerId>,
    #[serde(rename = "workerName", default)]
    pub worker_name: Option<String>,

    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "productName", default)]
    pub product_name: String,

    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Purchase {
    pub fn aggregate_index() -> &'static str {
        "a005"
    }

    pub fn collection_name() -> &'static str {
        "purchase"
    }

    pub fn to_dto(&self) -> PurchaseDto {
        PurchaseDto {
            id: Some(self.id.as_string()),
            number: self.number.clone(),
            date: self.date.format("%Y-%m-%d").to_string(),
            supplier_ref: self.supplier_id.as_string(),
            zone_ref: self.zone_id.map(|z| z.as_string()).unwrap_or_default(),
            worker_ref: self.worker_id.map(|w| w.as_string()).unwrap_or_default(),
            product_ref: self.product_id.as_string(),
            quantity: self.quantity,
            price: self.price,
            comment: self.comment.clone(),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO формы закупки (создание и редактирование)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub id: Option<String>,
    pub number: String,
    /// Дата в формате yyyy-mm-dd
    pub date: String,
    pub supplier_ref: String,
    /// Пустая строка означает "без зоны"
    #[serde(default)]
    pub zone_ref: String,
    #[serde(default)]
    pub worker_ref: String,
    pub product_ref: String,
    pub quantity: f64,
    pub price: f64,
    pub comment: Option<String>,
}

impl PurchaseDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Номер документа не может быть пустым".into());
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| format!("Некорректная дата: {}", self.date))?;

        if parse_optional_ref::<SupplierId>(&self.supplier_ref)?.is_none() {
            return Err("Поставщик обязателен для заполнения".into());
        }
        if parse_optional_ref::<ProductId>(&self.product_ref)?.is_none() {
            return Err("Товар обязателен для заполнения".into());
        }
        let zone = parse_optional_ref::<ZoneId>(&self.zone_ref)?;
        if parse_optional_ref::<WorkerId>(&self.worker_ref)?.is_some() && zone.is_none() {
            return Err("Кладовщик выбирается после зоны".into());
        }

        if self.quantity <= 0.0 {
            return Err("Количество должно быть больше нуля".into());
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной".into());
        }
        Ok(())
    }
}
