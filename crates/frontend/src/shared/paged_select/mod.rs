//! Селект с асинхронным постраничным поиском
//!
//! - state.rs: headless-состояние и переходы (без DOM)
//! - debounce.rs, accumulator.rs, preload.rs, pager.rs: части состояния
//! - source.rs: источник вариантов (REST)
//! - component.rs, field.rs: Leptos-компоненты (неуправляемый и для форм)
//! - shell.rs: popover / bottom sheet

pub mod accumulator;
pub mod component;
pub mod debounce;
pub mod field;
pub mod option;
pub mod pager;
pub mod preload;
pub mod shell;
pub mod source;
pub mod state;

pub use component::{PagedSelect, PagedSelectCore};
pub use field::PagedSelectField;
pub use option::{OptionLabel, OptionMapper, SelectOption};
pub use source::{OptionSource, RestOptionSource};
pub use state::{PagedSelectConfig, PagedSelectState, SelectPhase};
