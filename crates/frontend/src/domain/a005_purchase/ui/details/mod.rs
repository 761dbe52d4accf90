//! Форма документа закупки
//!
//! - model.rs: запросы к API (загрузка, сохранение)
//! - view_model.rs: поля формы, настройки селектов, команды
//! - view.rs: Leptos-компонент

mod model;
mod view;
mod view_model;

pub use view::PurchaseDetails;
pub use view_model::PurchaseDetailsViewModel;
