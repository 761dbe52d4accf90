/// Поиск заранее известного id по страницам.
///
/// Пока целевой id не найден, запроса в полете нет и текущая страница
/// меньше последней, резолвер просит следующую страницу. Найдя id или
/// дойдя до последней страницы, останавливается навсегда.
#[derive(Debug, Clone, Default)]
pub struct PreloadResolver {
    target: Option<String>,
    finished: bool,
}

impl PreloadResolver {
    pub fn new(target: Option<String>) -> Self {
        let target = target.filter(|t| !t.trim().is_empty());
        Self {
            target,
            finished: false,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some() && !self.finished
    }

    /// Следующая страница для загрузки или `None`.
    ///
    /// Ответ без `last_page` считается единственной страницей.
    pub fn next_page(
        &mut self,
        found: bool,
        fetching: bool,
        page: u32,
        last_page: Option<u32>,
    ) -> Option<u32> {
        if !self.is_active() {
            return None;
        }
        if found {
            self.finished = true;
            return None;
        }
        if fetching {
            return None;
        }
        let last = last_page.unwrap_or(page);
        if page < last {
            Some(page + 1)
        } else {
            self.finished = true;
            None
        }
    }
}
