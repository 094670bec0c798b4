use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

/// Watches one element's content width and disconnects when dropped.
///
/// Owns its callback, so nothing outlives the watch.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl ResizeWatch {
    pub fn new(target: &Element, mut on_width: impl FnMut(f64) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let widths = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<ResizeObserverEntry>().ok())
                .map(|entry| entry.content_rect().width());
            if let Some(width) = last_width(widths) {
                on_width(width);
            }
        }) as Box<dyn FnMut(Array)>);

        let observer = match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("ResizeObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The newest width in a batch of entries.
pub fn last_width(widths: impl Iterator<Item = f64>) -> Option<f64> {
    widths.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_reports_newest_width() {
        assert_eq!(last_width([320.0, 480.0, 600.0].into_iter()), Some(600.0));
        assert_eq!(last_width(std::iter::empty()), None);
    }
}
