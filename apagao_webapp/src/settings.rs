use apagao_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::theme::Theme;
use crate::utils::StorageKey;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub config: game::GridConfig,
    pub intensity: game::ScrambleIntensity,
    pub show_intro: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: game::GridConfig::CLASSIC,
            intensity: Default::default(),
            show_intro: true,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "apagao:settings";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_update: Callback<Settings>,
    pub on_close: Callback<()>,
}

fn board_preset(
    label: &'static str,
    size: game::Coord2,
    settings: Settings,
    on_update: &Callback<Settings>,
) -> Html {
    let on_update = on_update.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        on_update.emit(Settings {
            config: game::GridConfig::new(size),
            ..settings
        })
    });
    let current = settings.config.size == size;
    html! {
        <button class={classes!(current.then_some("current"))} {onclick}>{label}</button>
    }
}

fn intensity_preset(
    label: &'static str,
    intensity: game::ScrambleIntensity,
    settings: Settings,
    on_update: &Callback<Settings>,
) -> Html {
    let on_update = on_update.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        on_update.emit(Settings {
            intensity,
            ..settings
        })
    });
    let current = settings.intensity == intensity;
    html! {
        <button class={classes!(current.then_some("current"))} {onclick}>{label}</button>
    }
}

fn theme_link(label: &'static str, theme: Theme) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        theme.apply();
    });
    html! {
        <li><a href="#" {onclick}>{label}</a></li>
    }
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    use game::ScrambleIntensity::*;

    let SettingsProps {
        open,
        settings,
        on_update,
        on_close,
    } = props;
    let settings = *settings;

    let toggle_intro = {
        let on_update = on_update.clone();
        Callback::from(move |_: MouseEvent| {
            on_update.emit(Settings {
                show_intro: !settings.show_intro,
                ..settings
            })
        })
    };

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog id="settings" open={*open}>
            <article>
                <h2>{"Settings"}</h2>
                <section>
                    <h3>{"Board"}</h3>
                    {board_preset("5×5", (5, 5), settings, on_update)}
                    {board_preset("7×7", (7, 7), settings, on_update)}
                    {board_preset("9×9", (9, 9), settings, on_update)}
                </section>
                <section>
                    <h3>{"Scramble"}</h3>
                    {intensity_preset("Gentle", Gentle, settings, on_update)}
                    {intensity_preset("Classic", Classic, settings, on_update)}
                    {intensity_preset("Chaotic", Chaotic, settings, on_update)}
                </section>
                <section>
                    <h3>{"Theme"}</h3>
                    <ul>
                        {theme_link("Auto", Theme::Auto)}
                        {theme_link("Light", Theme::Light)}
                        {theme_link("Dark", Theme::Dark)}
                    </ul>
                </section>
                <label>
                    <input type="checkbox" checked={settings.show_intro} onclick={toggle_intro}/>
                    {"Opening animation"}
                </label>
                <footer>
                    <button onclick={close}>{"Close"}</button>
                </footer>
            </article>
        </dialog>
    }
}
