use leptos::prelude::*;
use std::sync::Arc;

/// Подпись варианта: текст или функция отрисовки
#[derive(Clone)]
pub enum OptionLabel {
    Text(String),
    /// Произвольная разметка; `text` используется для title и сравнения
    View { text: String, render: ViewFn },
}

impl OptionLabel {
    pub fn text(&self) -> &str {
        match self {
            OptionLabel::Text(text) => text,
            OptionLabel::View { text, .. } => text,
        }
    }

    pub fn render(&self) -> AnyView {
        match self {
            OptionLabel::Text(text) => text.clone().into_any(),
            OptionLabel::View { render, .. } => render.run(),
        }
    }
}

impl std::fmt::Debug for OptionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionLabel::Text(text) => f.debug_tuple("Text").field(text).finish(),
            OptionLabel::View { text, .. } => f.debug_struct("View").field("text", text).finish(),
        }
    }
}

impl PartialEq for OptionLabel {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

/// Вариант выбора в селекте.
///
/// `value` — уникальный ключ (обычно строковый id записи).
/// После построения из записи источника не меняется.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: OptionLabel,
    pub description: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: OptionLabel::Text(label.into()),
            description: None,
        }
    }

    pub fn with_view(
        value: impl Into<String>,
        text: impl Into<String>,
        render: impl Fn() -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            value: value.into(),
            label: OptionLabel::View {
                text: text.into(),
                render: ViewFn::from(render),
            },
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn label_text(&self) -> &str {
        self.label.text()
    }
}

/// Преобразование записи источника в вариант выбора
pub type OptionMapper<T> = Arc<dyn Fn(&T) -> SelectOption + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_is_dropped() {
        let opt = SelectOption::new("1", "Зона А").with_description("  ");
        assert_eq!(opt.description, None);

        let opt = SelectOption::new("1", "Зона А").with_description("Склад №1");
        assert_eq!(opt.description.as_deref(), Some("Склад №1"));
    }

    #[test]
    fn test_view_label_compares_by_text() {
        let a = SelectOption::with_view("1", "Иванов", || "Иванов".into_any());
        let b = SelectOption::new("1", "Иванов");
        assert_eq!(a, b);
        assert_eq!(a.label_text(), "Иванов");
    }
}
