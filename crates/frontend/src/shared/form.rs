//! Реактивное поле формы

use leptos::prelude::*;
use std::sync::Arc;

/// Проверка значения: `None` — корректно, `Some(msg)` — текст ошибки
pub type Validator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Обязательное поле
pub fn required(message: &str) -> Validator {
    let message = message.to_string();
    Arc::new(move |value: &str| {
        if value.trim().is_empty() {
            Some(message.clone())
        } else {
            None
        }
    })
}

#[derive(Clone, Copy)]
pub struct FormField {
    pub value: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    /// Пользователь уже взаимодействовал с полем
    pub touched: RwSignal<bool>,
    validator: StoredValue<Option<Validator>>,
}

impl FormField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: RwSignal::new(initial.into()),
            error: RwSignal::new(None),
            touched: RwSignal::new(false),
            validator: StoredValue::new(None),
        }
    }

    pub fn with_validator(self, validator: Validator) -> Self {
        self.validator.set_value(Some(validator));
        self
    }

    /// Записать значение; у затронутого поля ошибка пересчитывается сразу
    pub fn set(&self, value: String) {
        self.value.set(value);
        if self.touched.get_untracked() {
            self.validate();
        }
    }

    pub fn touch(&self) {
        self.touched.set(true);
        self.validate();
    }

    /// Проверить текущее значение. true, если ошибок нет
    pub fn validate(&self) -> bool {
        let value = self.value.get_untracked();
        let error = self
            .validator
            .with_value(|v| v.as_ref().and_then(|validate| validate(&value)));
        let ok = error.is_none();
        self.error.set(error);
        ok
    }

    /// Ошибку показываем только после взаимодействия с полем
    pub fn show_error(&self) -> bool {
        self.touched.get() && self.error.with(|e| e.is_some())
    }

    /// Вернуть поле в исходное состояние с новым значением
    pub fn reset(&self, value: impl Into<String>) {
        self.value.set(value.into());
        self.error.set(None);
        self.touched.set(false);
    }
}

/// Проверить все поля, пометив их затронутыми. true, если все корректны
pub fn validate_all(fields: &[FormField]) -> bool {
    fields.iter().fold(true, |ok, field| {
        field.touched.set(true);
        field.validate() && ok
    })
}
