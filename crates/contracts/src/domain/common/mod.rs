//! Общее для всех справочников и документов

pub mod aggregate_id;

pub use aggregate_id::{parse_optional_ref, AggregateId};
