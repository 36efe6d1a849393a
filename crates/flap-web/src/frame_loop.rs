use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(cb: &FrameCallback) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(cb.as_ref().unchecked_ref())
}

/// Call `on_frame(dt_ms)` once per display refresh, forever.
///
/// The callback re-schedules itself before returning, whatever the game is
/// doing. The closure holds a reference to itself, so it lives
/// for the rest of the page.
pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<(), JsValue> {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_cb = Rc::clone(&holder);
    let mut last_ts: Option<f64> = None;

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let dt_ms = last_ts.map_or(0.0, |last| ts - last);
        last_ts = Some(ts);

        on_frame(dt_ms);

        if let Some(cb) = holder_cb.borrow().as_ref() {
            if let Err(err) = request_frame(cb) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(f64)>);

    request_frame(&cb)?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
