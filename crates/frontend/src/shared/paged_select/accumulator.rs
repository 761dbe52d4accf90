use super::option::SelectOption;
use std::collections::{HashMap, HashSet};

/// Накопитель вариантов, загруженных постранично.
///
/// - страница 1 полностью заменяет список и кеш исходных записей;
/// - страница N > 1 дописывает только новые `value`;
/// - каждая пришедшая запись попадает в кеш под своим `value`
///   (нужна, чтобы отдать исходную запись в callback выбора).
#[derive(Debug, Clone)]
pub struct OptionAccumulator<T> {
    options: Vec<SelectOption>,
    seen: HashSet<String>,
    raw: HashMap<String, T>,
}

impl<T> Default for OptionAccumulator<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            seen: HashSet::new(),
            raw: HashMap::new(),
        }
    }
}

impl<T> OptionAccumulator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_page<F>(&mut self, page: u32, items: Vec<T>, mapper: F)
    where
        F: Fn(&T) -> SelectOption,
    {
        if page <= 1 {
            self.clear();
        }
        for item in items {
            let option = mapper(&item);
            if self.seen.insert(option.value.clone()) {
                self.options.push(option.clone());
            }
            self.raw.insert(option.value, item);
        }
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.seen.clear();
        self.raw.clear();
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        if !self.contains(value) {
            return None;
        }
        self.options.iter().find(|o| o.value == value)
    }

    pub fn raw(&self, value: &str) -> Option<&T> {
        self.raw.get(value)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    fn row(id: u32, name: &'static str) -> Row {
        Row { id, name }
    }

    fn map(r: &Row) -> SelectOption {
        SelectOption::new(r.id.to_string(), r.name)
    }

    fn values(acc: &OptionAccumulator<Row>) -> Vec<String> {
        acc.options().iter().map(|o| o.value.clone()).collect()
    }

    #[test]
    fn test_page_one_replaces() {
        let mut acc = OptionAccumulator::new();
        acc.apply_page(1, vec![row(1, "a"), row(2, "b")], map);
        acc.apply_page(2, vec![row(3, "c")], map);
        acc.apply_page(1, vec![row(7, "x"), row(8, "y")], map);

        assert_eq!(values(&acc), vec!["7", "8"]);
        assert!(acc.raw("1").is_none());
        assert!(acc.raw("3").is_none());
        assert_eq!(acc.raw("8"), Some(&row(8, "y")));
    }

    #[test]
    fn test_next_pages_append_only_new_values() {
        let mut acc = OptionAccumulator::new();
        acc.apply_page(1, vec![row(1, "a"), row(2, "b")], map);
        acc.apply_page(2, vec![row(2, "b2"), row(3, "c"), row(1, "a2"), row(4, "d")], map);

        assert_eq!(values(&acc), vec!["1", "2", "3", "4"]);
        // Подпись берется из первого появления
        assert_eq!(acc.get("2").unwrap().label_text(), "b");
        // Кеш исходных записей обновляется каждой пришедшей записью
        assert_eq!(acc.raw("2"), Some(&row(2, "b2")));
    }

    #[test]
    fn test_duplicates_inside_first_page() {
        let mut acc = OptionAccumulator::new();
        acc.apply_page(1, vec![row(1, "a"), row(1, "a"), row(2, "b")], map);
        assert_eq!(values(&acc), vec!["1", "2"]);
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut acc = OptionAccumulator::new();
        acc.apply_page(1, vec![row(1, "a")], map);
        acc.clear();
        assert!(acc.is_empty());
        assert!(!acc.contains("1"));
        assert!(acc.raw("1").is_none());
    }
}
