use std::ops::Range;

/// Остаток прокрутки, при котором запрашивается следующая страница
pub const LOAD_MORE_THRESHOLD: f64 = 50.0;

/// Высота строки списка вариантов, px
pub const ROW_HEIGHT: f64 = 36.0;

/// Сколько строк дорисовывается за пределами видимой области
pub const OVERSCAN: usize = 4;

/// Снимок геометрии прокручиваемого списка
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn from_element(el: &web_sys::Element) -> Self {
        Self {
            scroll_height: el.scroll_height() as f64,
            scroll_top: el.scroll_top() as f64,
            client_height: el.client_height() as f64,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }

    pub fn near_end(&self) -> bool {
        self.remaining() <= LOAD_MORE_THRESHOLD
    }
}

/// Нужно ли подгружать следующую страницу при прокрутке
pub fn should_load_more(
    metrics: &ScrollMetrics,
    fetching: bool,
    page: u32,
    last_page: Option<u32>,
) -> bool {
    metrics.near_end() && !fetching && last_page.is_some_and(|last| page < last)
}

/// Диапазон строк, которые нужно отрисовать (виртуализация с фиксированной высотой строки)
pub fn visible_window(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    total: usize,
    overscan: usize,
) -> Range<usize> {
    if total == 0 || row_height <= 0.0 {
        return 0..0;
    }
    let first = (scroll_top.max(0.0) / row_height).floor() as usize;
    let visible = (viewport_height.max(0.0) / row_height).ceil() as usize;
    let start = first.saturating_sub(overscan).min(total);
    let end = first
        .saturating_add(visible)
        .saturating_add(overscan)
        .min(total);
    start..end.max(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_bottom() -> ScrollMetrics {
        ScrollMetrics {
            scroll_height: 1000.0,
            scroll_top: 900.0,
            client_height: 100.0,
        }
    }

    #[test]
    fn test_remaining() {
        assert_eq!(at_bottom().remaining(), 0.0);
        let m = ScrollMetrics {
            scroll_height: 1000.0,
            scroll_top: 850.0,
            client_height: 100.0,
        };
        assert!(m.near_end());
        let m = ScrollMetrics {
            scroll_height: 1000.0,
            scroll_top: 849.0,
            client_height: 100.0,
        };
        assert!(!m.near_end());
    }

    #[test]
    fn test_should_load_more() {
        assert!(should_load_more(&at_bottom(), false, 1, Some(2)));
        assert!(!should_load_more(&at_bottom(), true, 1, Some(2)));
        assert!(!should_load_more(&at_bottom(), false, 2, Some(2)));
        assert!(!should_load_more(&at_bottom(), false, 1, None));
    }

    #[test]
    fn test_visible_window() {
        assert_eq!(visible_window(0.0, 288.0, 36.0, 100, 4), 0..12);
        assert_eq!(visible_window(360.0, 288.0, 36.0, 100, 4), 6..22);
        assert_eq!(visible_window(3400.0, 288.0, 36.0, 100, 4), 90..100);
        assert_eq!(visible_window(0.0, 288.0, 36.0, 0, 4), 0..0);
        // Список короче области просмотра
        assert_eq!(visible_window(0.0, 288.0, 36.0, 3, 4), 0..3);
    }
}
