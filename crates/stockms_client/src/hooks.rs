//! Reactive hooks.

use std::time::Duration;

use leptos::prelude::*;
use stockms_nav::PresencePhase;

/// Drive a [`PresencePhase`] from a visibility signal.
///
/// On show, the element mounts in `Entering` and moves to `Shown` after the
/// first painted frame so its CSS transition has a starting pose. On hide,
/// it stays mounted in `Exiting` for `exit_after` before returning to
/// `Hidden`. Each change bumps a generation counter so a frame or timer
/// scheduled for an older change is ignored.
pub fn use_presence(when: Signal<bool>, exit_after: Duration) -> ReadSignal<PresencePhase> {
    let (phase, set_phase) = signal(PresencePhase::Hidden);
    let generation = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let current = phase.get_untracked();
        let next = current.on_visibility(when.get());
        if next == current {
            return;
        }
        set_phase.set(next);

        let scheduled = generation.get_value() + 1;
        generation.set_value(scheduled);
        let settle = move || {
            if generation.get_value() == scheduled {
                set_phase.update(|p| *p = p.advance());
            }
        };

        match next {
            // Two frames: the first paints the initial pose
            PresencePhase::Entering => {
                request_animation_frame(move || request_animation_frame(settle))
            }
            PresencePhase::Exiting => set_timeout(settle, exit_after),
            PresencePhase::Hidden | PresencePhase::Shown => {}
        }
    });

    phase
}

/// Presence for elements that only ever animate in.
pub fn use_entrance() -> ReadSignal<PresencePhase> {
    use_presence(Signal::derive(|| true), Duration::ZERO)
}
