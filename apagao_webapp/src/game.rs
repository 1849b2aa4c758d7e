use apagao_core as game;
use chrono::prelude::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use serde::{Deserialize, Serialize};
use yew::html::Scope;
use yew::prelude::*;

use crate::intro::IntroTimeline;
use crate::settings::{Settings, SettingsView};
use crate::utils::*;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap()
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    Ready,
    Active,
    Solved,
    SolvedOnFirstMove,
}

/// One play-through: the engine plus the wall-clock bookkeeping around it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    fn new(engine: game::PlayEngine) -> Self {
        Self {
            engine,
            started_at: None,
            ended_at: None,
        }
    }

    fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    fn view_state(&self) -> ViewGameState {
        use game::EngineState::*;
        match self.engine.state() {
            Ready => ViewGameState::Ready,
            Active => ViewGameState::Active,
            Solved if self.engine.moves() <= 1 => ViewGameState::SolvedOnFirstMove,
            Solved => ViewGameState::Solved,
        }
    }

    fn press(&mut self, coords: game::Coord2, now: DateTime<Utc>) -> bool {
        let updated = self.engine.press(coords).has_update();
        if updated {
            self.on_successful_move(now);
        }
        updated
    }

    fn on_successful_move(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if self.engine.is_solved() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    #[allow(dead_code)]
    fn hint(&self) -> Option<game::Coord2> {
        let solution = game::solve(self.engine.grid()).ok()??;
        solution.presses.first().copied()
    }
}

impl StorageKey for GameSession {
    const KEY: &'static str = "apagao:game:v1";
}

pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::PressOutcome, E> {
    // every accepted press flips at least three cells
    fn has_update(self) -> bool {
        self.is_ok()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellPress(game::Coord2),
    IntroStep(usize),
    IntroFinished,
    UpdateTime,
    NewGame,
    ToggleSettings,
    UpdateSettings(Settings),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    lit: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        lit,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("cell", if lit { "on" } else { "off" });
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        callback.emit((x, y));
        log::trace!("({}, {}) pressed", x, y);
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Runs the opening animation on a display-only board. The timers cancel on
/// drop, so abandoning the playback also stops the choreography.
#[derive(Debug)]
struct IntroPlayback {
    timeline: IntroTimeline,
    board: game::LightGrid,
    _timers: Vec<Timeout>,
}

impl IntroPlayback {
    fn start(config: game::GridConfig, link: &Scope<GameView>) -> Self {
        let timeline = IntroTimeline::for_config(config);

        let mut timers: Vec<Timeout> = timeline
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let link = link.clone();
                Timeout::new(step.at_ms, move || link.send_message(Msg::IntroStep(i)))
            })
            .collect();
        {
            let link = link.clone();
            timers.push(Timeout::new(timeline.finished_at_ms, move || {
                link.send_message(Msg::IntroFinished)
            }));
        }

        Self {
            timeline,
            board: game::LightGrid::dark(config),
            _timers: timers,
        }
    }

    fn apply_step(&mut self, index: usize) -> bool {
        let Some(step) = self.timeline.steps.get(index) else {
            return false;
        };
        for &coords in &step.cells {
            let state = &mut self.board[coords];
            *state = state.toggled();
        }
        true
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    settings: Settings,
    game: Option<GameSession>,
    intro: Option<IntroPlayback>,
    seed: u64,
    prev_time: u32,
    settings_open: bool,
    _timer_interval: Interval,
}

impl GameView {
    fn scrambled_session(&self) -> GameSession {
        use game::GridScrambler;

        let grid = game::RandomScrambler::new(self.seed, self.settings.intensity)
            .scramble(self.settings.config);
        GameSession::new(game::PlayEngine::new(grid))
    }

    fn get_size(&self) -> game::Coord2 {
        if let Some(playback) = &self.intro {
            return playback.board.size();
        }
        self.game
            .as_ref()
            .map(|game| game.engine.size())
            .unwrap_or(self.settings.config.size)
    }

    fn get_time(&self) -> u32 {
        self.game
            .as_ref()
            .map(|game| game.elapsed_secs(utc_now()))
            .unwrap_or(0)
    }

    fn get_lit_count(&self) -> game::CellCount {
        if let Some(playback) = &self.intro {
            return playback.board.lit_count();
        }
        self.game
            .as_ref()
            .map(|game| game.engine.lit_count())
            .unwrap_or(0)
    }

    fn get_game_state(&self) -> ViewGameState {
        self.game
            .as_ref()
            .map_or(ViewGameState::Ready, |game| game.view_state())
    }

    fn get_game_state_class(&self) -> Classes {
        if self.intro.is_some() {
            return classes!("intro");
        }
        classes!(match self.get_game_state() {
            ViewGameState::Ready => "not-started",
            ViewGameState::Active => "in-progress",
            ViewGameState::Solved => "win",
            ViewGameState::SolvedOnFirstMove => "instant-win",
        })
    }

    fn is_playable(&self) -> bool {
        self.intro.is_none()
            && matches!(
                self.get_game_state(),
                ViewGameState::Ready | ViewGameState::Active
            )
    }

    fn cell_lit(&self, coords: game::Coord2) -> bool {
        if let Some(playback) = &self.intro {
            return playback.board[coords].is_on();
        }
        self.game
            .as_ref()
            .map_or(false, |game| game.engine.cell_at(coords).is_on())
    }

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(500, move || link.send_message(Msg::UpdateTime))
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings: Settings = LocalStored::local_or_default();
        let game = GameSession::local_load();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);

        let intro = match &game {
            Some(_) => None,
            None if settings.show_intro => Some(IntroPlayback::start(settings.config, ctx.link())),
            None => None,
        };

        let mut view = Self {
            settings,
            game,
            intro,
            seed,
            prev_time: 0,
            settings_open: false,
            _timer_interval: Self::create_timer(ctx),
        };
        if view.game.is_none() && view.intro.is_none() {
            view.game = Some(view.scrambled_session());
        }
        view
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CellPress(coords) => {
                if self.intro.is_some() {
                    false
                } else if let Some(game) = &mut self.game {
                    let updated = game.press(coords, utc_now());
                    if updated {
                        log::debug!("pressed cell: {:?}", coords);
                    }
                    updated
                } else {
                    false
                }
            }
            IntroStep(step) => match &mut self.intro {
                Some(playback) => playback.apply_step(step),
                None => false,
            },
            IntroFinished => match self.intro.take() {
                Some(playback) => {
                    log::debug!("intro finished, star board becomes the first game");
                    self.game = Some(GameSession::new(game::PlayEngine::new(playback.board)));
                    true
                }
                None => false,
            },
            UpdateTime => {
                let time = self.get_time();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            NewGame => {
                self.seed = js_random_seed();
                self.intro = None;
                self.game = Some(self.scrambled_session());
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                if self.settings != settings {
                    self.settings = settings;
                    self.settings.local_save();
                    true
                } else {
                    false
                }
            }
        };

        local_save_opt(&self.game);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let (cols, rows) = self.get_size();
        let game_state_class = self.get_game_state_class();
        let is_playable = self.is_playable();
        let lit_counter = format_for_counter(self.get_lit_count() as i32);
        let elapsed_time = format_for_counter(self.get_time() as i32);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);

        html! {
            <div class="apagao">
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{lit_counter}</aside>
                    <span><button class={game_state_class} onclick={cb_new_game}/></span>
                    <aside>{elapsed_time}</aside>
                </nav>
                <table class={is_playable.then_some("playable")}>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for (0..cols).map(|x| {
                                        let pos = (x, y);
                                        let lit = self.cell_lit(pos);
                                        let locked = !is_playable;
                                        let callback = ctx.link().callback(Msg::CellPress);
                                        html! {
                                            <CellView {x} {y} {lit} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings}
                    on_update={ctx.link().callback(UpdateSettings)}
                    on_close={ctx.link().callback(|_| ToggleSettings)}
                />
            </div>
        }
    }
}
