//! Debounce строки поиска
//!
//! Таймер здесь не хранится: каждое нажатие выдает новый тикет, а таймер
//! (см. `component.rs`) по истечении паузы пытается "погасить" свой тикет.
//! Погасить можно только последний выданный тикет, поэтому новое нажатие
//! фактически отменяет предыдущий отложенный вызов.

/// Интервал тишины по умолчанию, мс
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<String>,
    committed: String,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запомнить новое значение и перезапустить ожидание
    pub fn schedule(&mut self, value: String) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Истек интервал для `ticket`.
    ///
    /// Возвращает новое зафиксированное значение, если тикет актуален и
    /// значение отличается от уже зафиксированного.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 != self.generation {
            return None;
        }
        let value = self.pending.take()?;
        if value == self.committed {
            return None;
        }
        self.committed = value.clone();
        Some(value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Сбросить ожидание и зафиксированное значение (закрытие селекта)
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.committed.clear();
    }
}
