//! Room expiry countdown badge.
//!
//! DESIGN
//! ======
//! The badge owns the 1-second tick; `ExpiryState` only holds the deadline
//! and the terminal `expired` latch. Adopting a new deadline (which happens
//! on every poll, since the server recomputes expiry from room activity)
//! replaces the running interval, so only one countdown is ever active.

use leptos::prelude::*;

use crate::state::expiry::ExpiryState;
#[cfg(feature = "hydrate")]
use crate::state::expiry::format_remaining;

#[cfg(feature = "hydrate")]
const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Countdown badge in the room header. Hidden until a deadline is known.
#[component]
pub fn ExpiryBadge() -> impl IntoView {
    let expiry = expect_context::<RwSignal<ExpiryState>>();
    let label = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        // Memoized so the expired latch flipping does not restart the timer.
        let deadline = Memo::new(move |_| expiry.get().expires_at_ms);
        // Held by the effect below; the interval clears when the badge unmounts.
        let timer: Rc<RefCell<Option<gloo_timers::callback::Interval>>> = Rc::new(RefCell::new(None));

        Effect::new(move || {
            let Some(deadline_ms) = deadline.get() else {
                return;
            };
            // Replace any previously running countdown.
            timer.borrow_mut().take();

            let timer_for_tick = timer.clone();
            let tick = move || {
                #[allow(clippy::cast_possible_truncation)]
                let remaining = (deadline_ms - js_sys::Date::now()) as i64;
                if remaining <= 0 {
                    label.set("Expired".to_owned());
                    if !expiry.get_untracked().expired {
                        expiry.update(|e| e.mark_expired());
                    }
                    timer_for_tick.borrow_mut().take();
                } else {
                    label.set(format!("Closes in {}", format_remaining(remaining)));
                }
            };

            // One immediate tick, then the 1 s period while time remains.
            tick();
            if deadline_ms > js_sys::Date::now() {
                *timer.borrow_mut() = Some(gloo_timers::callback::Interval::new(COUNTDOWN_TICK_MS, tick));
            }
        });
    }

    view! {
        <Show when=move || expiry.get().expires_at_ms.is_some()>
            <span class="expiry-badge">{move || label.get()}</span>
        </Show>
    }
}
