use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_revealed;

/// Value shown after `tick` ticks of a count-up towards `target`.
pub fn count_at(tick: u32, target: u32, duration_ms: u32, tick_ms: u32) -> u32 {
    let ticks = (duration_ms / tick_ms.max(1)).max(1);
    if tick >= ticks {
        return target;
    }
    let value = (f64::from(target) * f64::from(tick) / f64::from(ticks)).round() as u32;
    value.min(target)
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub label: AttrValue,
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Circular stat that counts up once it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_revealed(node.clone());
    let tick = use_state(|| 0u32);

    {
        let tick = tick.clone();
        use_effect_with_deps(
            move |visible| {
                let interval = visible.then(|| {
                    let last = config::COUNTER_DURATION_MS / config::COUNTER_TICK_MS;
                    let mut current = 0u32;
                    Interval::new(config::COUNTER_TICK_MS, move || {
                        if current < last {
                            current += 1;
                            tick.set(current);
                        }
                    })
                });
                move || drop(interval)
            },
            visible,
        );
    }

    let shown = count_at(*tick, props.value, config::COUNTER_DURATION_MS, config::COUNTER_TICK_MS);
    let percent = props.value.min(100);

    html! {
        <div ref={node} class={classes!("counter", visible.then_some("revealed"))}>
            <div class="counter-ring" style={format!("--percent: {};", percent)}>
                <span class="counter-value">{shown}{&props.suffix}</span>
            </div>
            <p class="counter-label">{&props.label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_stops_at_target() {
        let mut previous = 0;
        for tick in 0..200 {
            let value = count_at(tick, 98, 2_000, 30);
            assert!(value >= previous);
            assert!(value <= 98);
            previous = value;
        }
        assert_eq!(count_at(66, 98, 2_000, 30), 98);
        assert_eq!(count_at(0, 98, 2_000, 30), 0);
    }

    #[test]
    fn tiny_durations_jump_to_target() {
        assert_eq!(count_at(1, 53, 10, 30), 53);
    }
}
