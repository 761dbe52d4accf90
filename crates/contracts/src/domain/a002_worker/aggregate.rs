use crate::domain::a001_zone::aggregate::ZoneId;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сотрудника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub Uuid);

impl WorkerId {
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

impl AggregateId for WorkerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WorkerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сотрудник склада
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub code: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub position: Option<String>,
    /// Зона, за которой закреплен сотрудник
    #[serde(rename = "zoneId", default)]
    pub zone_id: Option<ZoneId>,
    #[serde(rename = "zoneName", default)]
    pub zone_name: Option<String>,
}

impl Worker {
    pub fn aggregate_index() -> &'static str {
        "a002"
    }

    pub fn collection_name() -> &'static str {
        "worker"
    }
}
