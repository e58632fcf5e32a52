//! Delayed load indicator

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::traits::{UiDispatcher, ViewHost};

#[derive(Default)]
struct IndicatorState {
    stopped: bool,
    shown: bool,
}

/// Shows the load indicator once `delay` has passed without the load finishing.
///
/// The timer is aborted and the indicator hidden on [`stop`](Self::stop) or
/// drop, whichever comes first, so every exit path of a navigation clears it.
pub(crate) struct LoadIndicatorTimer {
    timer: Option<JoinHandle<()>>,
    state: Arc<Mutex<IndicatorState>>,
    view_host: Arc<dyn ViewHost>,
    ui: Arc<dyn UiDispatcher>,
}

impl LoadIndicatorTimer {
    pub(crate) fn start(
        view_host: Arc<dyn ViewHost>,
        ui: Arc<dyn UiDispatcher>,
        delay: Duration,
        title: Option<String>,
    ) -> Self {
        let state = Arc::new(Mutex::new(IndicatorState::default()));

        let timer = match Handle::try_current() {
            Ok(handle) => {
                let state = Arc::clone(&state);
                let view_host = Arc::clone(&view_host);
                let ui = Arc::clone(&ui);
                Some(handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
                    if state.stopped {
                        return;
                    }
                    state.shown = true;
                    ui.dispatch(Box::new(move || {
                        view_host.show_load_indicator(title.as_deref());
                    }));
                }))
            }
            Err(_) => {
                log::debug!("No async runtime, load indicator disabled");
                None
            }
        };

        Self {
            timer,
            state,
            view_host,
            ui,
        }
    }

    pub(crate) fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.stopped {
            return;
        }
        state.stopped = true;
        if state.shown {
            let view_host = Arc::clone(&self.view_host);
            self.ui
                .dispatch(Box::new(move || view_host.hide_load_indicator()));
        }
    }
}

impl Drop for LoadIndicatorTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
