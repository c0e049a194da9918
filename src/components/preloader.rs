use std::cell::Cell;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use yew::prelude::*;

const TICK_MS: u32 = 100;
const MAX_STEP: f64 = 30.0;
const HIDE_DELAY_MS: u32 = 500;
const FALLBACK_MS: u32 = 5_000;

/// Single-fire completion latch. The completion path and the fallback timer
/// can both call `fire`; only the first call wins.
#[derive(Default)]
pub struct CompleteOnce {
    fired: Cell<bool>,
}

impl CompleteOnce {
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn fired(&self) -> bool {
        self.fired.get()
    }
}

pub fn advance_progress(current: f64, step: f64) -> f64 {
    (current + step).min(100.0)
}

pub fn progress_width(progress: f64) -> String {
    format!("{}%", progress.min(100.0))
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let progress = use_state(|| 0.0f64);
    let hidden = use_state(|| false);
    let latch = use_mut_ref(CompleteOnce::default);

    let finish = {
        let hidden = hidden.clone();
        let latch = latch.clone();
        let on_complete = props.on_complete.clone();
        Callback::from(move |_: ()| {
            if latch.borrow().fire() {
                hidden.set(true);
                log!("Preloader hidden");
                on_complete.emit(());
            }
        })
    };

    // Each render schedules the next tick, advancing the bar by a random
    // step until it reaches 100. Once full, hide after a short beat.
    {
        let progress = progress.clone();
        let latch = latch.clone();
        let finish = finish.clone();
        use_effect(move || {
            if !latch.borrow().fired() {
                if *progress < 100.0 {
                    let next = advance_progress(*progress, Math::random() * MAX_STEP);
                    Timeout::new(TICK_MS, move || progress.set(next)).forget();
                } else {
                    Timeout::new(HIDE_DELAY_MS, move || finish.emit(())).forget();
                }
            }
            || ()
        });
    }

    // Fallback: hide after 5 seconds no matter where the bar is.
    {
        let finish = finish.clone();
        use_effect_with_deps(
            move |_| {
                let fallback = Timeout::new(FALLBACK_MS, move || finish.emit(()));
                move || drop(fallback)
            },
            (),
        );
    }

    html! {
        <div id="preloader" class={classes!("preloader", (*hidden).then(|| "hidden"))}>
            <div class="preloader-logo">{"Gracepoint Fellowship"}</div>
            <div class="progress-bar">
                <div
                    id="progress-fill"
                    class="progress-fill"
                    style={format!("width: {}", progress_width(*progress))}
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_only_once() {
        let latch = CompleteOnce::default();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.fired());
    }

    #[test]
    fn fresh_latch_has_not_fired() {
        assert!(!CompleteOnce::default().fired());
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        assert_eq!(advance_progress(90.0, 25.0), 100.0);
        assert_eq!(advance_progress(100.0, 30.0), 100.0);
        assert_eq!(advance_progress(10.0, 15.5), 25.5);
    }

    #[test]
    fn width_string_always_ends_in_percent() {
        for value in [0.0, 12.5, 99.9, 100.0, 250.0] {
            assert!(progress_width(value).ends_with('%'));
        }
    }

    #[test]
    fn width_is_clamped_before_hiding() {
        assert_eq!(progress_width(250.0), "100%");
        assert_eq!(progress_width(100.0), "100%");
        assert_eq!(progress_width(37.5), "37.5%");
    }
}
