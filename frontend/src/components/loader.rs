use gloo_timers::callback::{Interval, Timeout};
use log::info;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

const PROGRESS_CAP: f64 = 98.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStage {
    Counting,
    /// Progress sits at the cap for a beat before snapping to 100 %.
    Complete,
    Full,
    Fading,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageWork {
    /// Advance progress on an interval of this many ms.
    Tick(u32),
    /// Wait this many ms, then move to the next stage.
    Hold(u32),
    Finish,
}

impl LoaderStage {
    /// How long this stage lasts before `next`. `None` for stages that end on
    /// their own (counting) or never end (done).
    pub fn hold_ms(self) -> Option<u32> {
        match self {
            LoaderStage::Complete => Some(200),
            LoaderStage::Full => Some(280),
            LoaderStage::Fading => Some(600),
            LoaderStage::Counting | LoaderStage::Done => None,
        }
    }

    /// What the loader has to arm while sitting in this stage.
    pub fn work(self) -> StageWork {
        match self {
            LoaderStage::Counting => StageWork::Tick(config::LOADER_TICK_MS),
            LoaderStage::Done => StageWork::Finish,
            held => held.hold_ms().map_or(StageWork::Finish, StageWork::Hold),
        }
    }

    pub fn next(self) -> Self {
        match self {
            LoaderStage::Counting => LoaderStage::Complete,
            LoaderStage::Complete => LoaderStage::Full,
            LoaderStage::Full => LoaderStage::Fading,
            LoaderStage::Fading | LoaderStage::Done => LoaderStage::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Progress(f64);

impl Progress {
    /// Maps a uniform sample in [0, 1) to a step in [3, 12).
    pub fn step_from_sample(sample: f64) -> f64 {
        sample * 9.0 + 3.0
    }

    pub fn advance(&mut self, step: f64) {
        self.0 = (self.0 + step).min(PROGRESS_CAP);
    }

    pub fn is_capped(&self) -> bool {
        self.0 >= PROGRESS_CAP
    }

    pub fn percent(&self) -> u32 {
        self.0.floor() as u32
    }
}

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub on_done: Callback<()>,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let stage = use_state(|| LoaderStage::Counting);
    let percent = use_state(|| 0u32);
    let progress = use_mut_ref(Progress::default);

    {
        let current_stage = *stage;
        let stage = stage.clone();
        let percent = percent.clone();
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |current| {
                let current = *current;
                let mut ticker = None;
                let mut hold = None;

                match current.work() {
                    StageWork::Tick(ms) => {
                        ticker = Some(Interval::new(ms, move || {
                            let mut progress = progress.borrow_mut();
                            progress.advance(Progress::step_from_sample(Math::random()));
                            percent.set(progress.percent());
                            if progress.is_capped() {
                                stage.set(current.next());
                            }
                        }));
                    }
                    StageWork::Hold(ms) => {
                        hold = Some(Timeout::new(ms, move || {
                            if current == LoaderStage::Complete {
                                percent.set(100);
                            }
                            stage.set(current.next());
                        }));
                    }
                    StageWork::Finish => {
                        info!("Loader finished");
                        on_done.emit(());
                    }
                }

                move || {
                    drop(ticker);
                    drop(hold);
                }
            },
            current_stage,
        );
    }

    if *stage == LoaderStage::Done {
        return html! {};
    }

    let fading = *stage == LoaderStage::Fading;
    let bar_style = format!("width: {}%;", *percent);

    html! {
        <div class={classes!("loader", fading.then(|| "loader--fading"))}>
            <div class="loader__logo">
                <img src="/stories-logo-white-resized.png" alt={config::SITE_NAME} width="200" height="80" />
            </div>
            <div class="loader__progress-wrap">
                <div class="loader__bar-track">
                    <div class="loader__bar-fill" style={bar_style}></div>
                </div>
                <span class="loader__pct">{format!("{}%", *percent)}</span>
            </div>
            <style>
                {r#"
                .loader {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    background: #080809;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 32px;
                    opacity: 1;
                    transition: opacity 0.6s ease-in;
                }
                .loader--fading {
                    opacity: 0;
                }
                .loader__logo {
                    animation: fadeUp 0.7s ease-out both;
                }
                .loader__logo img {
                    object-fit: contain;
                    filter: drop-shadow(0 0 20px rgba(41, 171, 226, 0.3));
                }
                .loader__progress-wrap {
                    display: flex;
                    align-items: center;
                    gap: 14px;
                    animation: fadeIn 0.5s ease 0.4s both;
                }
                .loader__bar-track {
                    width: 200px;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.08);
                    border-radius: 2px;
                    overflow: hidden;
                }
                .loader__bar-fill {
                    height: 100%;
                    background: linear-gradient(90deg, #00BFFF, #FF4D6D);
                    transition: width 0.1s linear;
                }
                .loader__pct {
                    font-family: 'Space Mono', monospace;
                    font-size: 11px;
                    color: #5A5A6E;
                    min-width: 36px;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stay_in_range() {
        assert_eq!(Progress::step_from_sample(0.0), 3.0);
        assert!(Progress::step_from_sample(0.999_999) < 12.0);
    }

    #[test]
    fn progress_caps_below_hundred() {
        let mut progress = Progress::default();
        for _ in 0..40 {
            progress.advance(11.9);
        }
        assert!(progress.is_capped());
        assert_eq!(progress.percent(), 98);
    }

    #[test]
    fn progress_floors_percent() {
        let mut progress = Progress::default();
        progress.advance(7.8);
        assert_eq!(progress.percent(), 7);
        assert!(!progress.is_capped());
    }

    #[test]
    fn stages_run_to_done() {
        let mut stage = LoaderStage::Counting;
        let mut total_hold = 0;
        while stage != LoaderStage::Done {
            total_hold += stage.hold_ms().unwrap_or(0);
            stage = stage.next();
        }
        assert_eq!(total_hold, 200 + 280 + 600);
        assert_eq!(LoaderStage::Done.next(), LoaderStage::Done);
    }

    #[test]
    fn each_stage_arms_one_kind_of_work() {
        assert_eq!(LoaderStage::Counting.work(), StageWork::Tick(config::LOADER_TICK_MS));
        assert_eq!(LoaderStage::Complete.work(), StageWork::Hold(200));
        assert_eq!(LoaderStage::Full.work(), StageWork::Hold(280));
        assert_eq!(LoaderStage::Fading.work(), StageWork::Hold(600));
        assert_eq!(LoaderStage::Done.work(), StageWork::Finish);
    }
}
