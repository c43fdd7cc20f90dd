//! Browser tick and resize sources. Both unregister themselves on drop, so
//! tearing down the owning handle stops the animation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub fn window() -> Result<Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::new("no global window"))
}

/// Current `innerWidth` / `innerHeight` of the window.
pub fn window_size(win: &Window) -> Result<(f64, f64), JsError> {
    let dim = |v: Result<JsValue, JsValue>, name: &str| {
        v.ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| JsError::new(&format!("window.{name} unavailable")))
    };
    Ok((
        dim(win.inner_width(), "innerWidth")?,
        dim(win.inner_height(), "innerHeight")?,
    ))
}

/// A `setInterval` registration.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(win: &Window, period_ms: f64, callback: Closure<dyn FnMut()>) -> Result<Self, JsError> {
        let id = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms.round().max(1.0) as i32,
            )
            .map_err(|e| JsError::new(&format!("setInterval failed: {e:?}")))?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// An event listener registered on the window.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(win: &Window, event: &'static str, callback: Closure<dyn FnMut()>) -> Result<Self, JsError> {
        win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| JsError::new(&format!("addEventListener({event}) failed: {e:?}")))?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}
