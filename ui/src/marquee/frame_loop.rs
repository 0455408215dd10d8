//! Repeating per-frame task tied to a component's lifetime.

use dioxus::prelude::*;

use crate::core::timing;

/// Handle to a running frame loop. The loop is cancelled when the component
/// that started it unmounts; [`FrameLoop::cancel`] stops it earlier.
#[derive(Clone, Copy)]
pub struct FrameLoop {
    task: Task,
}

impl FrameLoop {
    pub fn cancel(&self) {
        self.task.cancel();
    }
}

/// Calls `on_frame` once per display frame for as long as the calling
/// component stays mounted. Only the first render's closure is used.
pub fn use_frame_loop(mut on_frame: impl FnMut() + 'static) -> FrameLoop {
    let frame_loop = use_hook(move || {
        let task = spawn(async move {
            loop {
                timing::next_frame().await;
                on_frame();
            }
        });
        FrameLoop { task }
    });
    use_drop(move || {
        tracing::debug!("[frame] owner unmounted; cancelling loop");
        frame_loop.cancel();
    });
    frame_loop
}
