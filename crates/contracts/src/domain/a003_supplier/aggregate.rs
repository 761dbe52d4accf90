use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
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

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик (контрагент по кредиторской задолженности)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub inn: String,
    /// Текущая кредиторская задолженность перед поставщиком
    #[serde(rename = "balanceDue", default)]
    pub balance_due: f64,
}

impl Supplier {
    pub fn aggregate_index() -> &'static str {
        "a003"
    }

    pub fn collection_name() -> &'static str {
        "supplier"
    }

    pub fn has_debt(&self) -> bool {
        self.balance_due > 0.0
    }
}
