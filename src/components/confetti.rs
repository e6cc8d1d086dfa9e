use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    pub left_percent: f64,
    pub fall_secs: f64,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: 10px; height: 10px; background-color: {}; left: {}%; top: -10px; border-radius: 50%; animation: fall {}s linear forwards;",
            self.color, self.left_percent, self.fall_secs
        )
    }
}

/// Lays out one burst. `random` must yield values in `[0, 1)`.
pub fn plan_confetti(count: usize, mut random: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    let palette = &config::CONFETTI_COLORS;
    (0..count)
        .map(|_| {
            let index = ((random() * palette.len() as f64) as usize).min(palette.len() - 1);
            ConfettiPiece {
                color: palette[index],
                left_percent: random() * 100.0,
                fall_secs: random() * config::CONFETTI_FALL_SPREAD_SECS + config::CONFETTI_MIN_FALL_SECS,
            }
        })
        .collect()
}

/// Bursts currently on screen, each tagged with the celebration that spawned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bursts {
    live: Vec<(u32, Rc<Vec<ConfettiPiece>>)>,
}

pub enum BurstAction {
    Spawn(u32, Vec<ConfettiPiece>),
    Expire(u32),
}

impl Reducible for Bursts {
    type Action = BurstAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut live = self.live.clone();
        match action {
            BurstAction::Spawn(id, pieces) => live.push((id, Rc::new(pieces))),
            BurstAction::Expire(id) => live.retain(|(burst, _)| *burst != id),
        }
        Rc::new(Bursts { live })
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Bumping this value fires a new burst.
    pub celebrations: u32,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let bursts = use_reducer(Bursts::default);

    {
        let dispatcher = bursts.dispatcher();
        use_effect_with_deps(
            move |celebrations| {
                let id = *celebrations;
                if id > 0 {
                    debug!("Launching confetti burst {}", id);
                    dispatcher.dispatch(BurstAction::Spawn(
                        id,
                        plan_confetti(config::CONFETTI_COUNT, Math::random),
                    ));
                    // Outlasts the slowest piece.
                    Timeout::new(config::CONFETTI_LIFETIME_MS, move || {
                        dispatcher.dispatch(BurstAction::Expire(id));
                    })
                    .forget();
                }
                || ()
            },
            props.celebrations,
        );
    }

    html! {
        <>
            <style>
                {r#"
                    @keyframes fall {
                        to {
                            transform: translateY(100vh) rotate(360deg);
                            opacity: 0;
                        }
                    }
                "#}
            </style>
            { for bursts.live.iter().map(|(id, pieces)| html! {
                <div
                    key={*id}
                    class="confetti-container"
                    style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 9999;"
                >
                    { for pieces.iter().map(|piece| html! { <div style={piece.style()}></div> }) }
                </div>
            }) }
        </>
    }
}
