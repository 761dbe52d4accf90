//! Классификация вьюпорта (mobile / desktop)
//!
//! Один `MediaQueryList` на приложение: `provide_viewport_context()`
//! вызывается в `App`, компоненты читают сигнал через `use_is_mobile()`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Граница мобильной раскладки
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

#[derive(Clone, Copy)]
pub struct ViewportContext {
    pub is_mobile: ReadSignal<bool>,
}

pub fn provide_viewport_context() {
    let (is_mobile, set_is_mobile) = signal(false);

    let mql = web_sys::window().and_then(|w| w.match_media(MOBILE_MEDIA_QUERY).ok().flatten());
    match mql {
        Some(mql) => {
            set_is_mobile.set(mql.matches());

            let closure = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| {
                    set_is_mobile.set(ev.matches());
                },
            );
            if let Err(e) =
                mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            {
                log::warn!("media query listener not attached: {:?}", e);
            }
            // Слушатель живет все время работы приложения
            closure.forget();
        }
        None => log::warn!("matchMedia is not available, assuming desktop layout"),
    }

    provide_context(ViewportContext { is_mobile });
}

/// true, если текущая ширина соответствует мобильной раскладке
pub fn use_is_mobile() -> Signal<bool> {
    match use_context::<ViewportContext>() {
        Some(ctx) => ctx.is_mobile.into(),
        None => Signal::stored(false),
    }
}
