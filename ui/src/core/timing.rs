//! Frame pacing for animation loops.

/// Nominal frame length on platforms without a repaint callback (60 Hz).
pub const FRAME_MS: u64 = 16;

/// Resolves at the next repaint (`requestAnimationFrame`). Without a usable
/// repaint callback it falls back to a one-frame `setTimeout`, so the caller's
/// loop keeps running either way.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let requested = match web_sys::window() {
            Some(window) => window
                .request_animation_frame(&resolve)
                .map(drop)
                .map_err(|err| format!("requestAnimationFrame failed: {err:?}")),
            None => Err("no window".to_string()),
        };
        if let Err(reason) = requested {
            tracing::warn!("[frame] {reason}; falling back to a {FRAME_MS} ms timeout");
            if let Err(err) = set_timeout(&resolve) {
                tracing::warn!("[frame] setTimeout unavailable ({err:?}); resolving now");
                let _ = resolve.call0(&wasm_bindgen::JsValue::UNDEFINED);
            }
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Global `setTimeout(callback, FRAME_MS)`, looked up on `globalThis` so it
/// also works where there is no `window`.
#[cfg(target_arch = "wasm32")]
fn set_timeout(callback: &js_sys::Function) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let global = js_sys::global();
    let set_timeout: js_sys::Function =
        js_sys::Reflect::get(&global, &"setTimeout".into())?.dyn_into()?;
    set_timeout.call2(&global, callback, &(FRAME_MS as f64).into())?;
    Ok(())
}

/// Sleeps for one nominal frame.
#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    tokio::time::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn consecutive_frames_keep_resolving() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let started = Instant::now();
        runtime.block_on(async {
            for _ in 0..3 {
                next_frame().await;
            }
        });
        assert!(started.elapsed() >= Duration::from_millis(3 * FRAME_MS));
    }
}
