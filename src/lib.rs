pub mod deck;
pub mod encoding;
pub mod gestures;
pub mod parties;
pub mod roster;
pub mod share;
pub mod shuffle;
pub mod stats;
pub mod storage;
pub mod streak;

use deck::{build_deck, draw_seed, Card};
use encoding::{Guess, GuessKind};
use gloo_timers::callback::Timeout;
use parties::{parties_of_bloc, Bloc, Party};
use roster::{fetch_rosters, Rosters};
use share::{build_share_query, parse_share_query, ShareParams};
use stats::{per_party, Summary};
use storage::{Round, StoredSession};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

const REVEAL_MILLIS: u32 = 2_000;
const OPTION_RADIUS: f64 = 150.0;

const BLOC_RIGHT_COLOR: &str = "#10B981";
const BLOC_LEFT_COLOR: &str = "#F43F5E";

#[derive(PartialEq, Clone)]
enum FetchStatus {
    Loading,
    Error(String),
    Idle,
}

#[derive(Clone, PartialEq)]
struct DragState {
    pointer_id: i32,
    start_x: f64,
    start_y: f64,
    current_x: f64,
    current_y: f64,
}

impl DragState {
    fn offset(&self) -> (f64, f64) {
        (self.current_x - self.start_x, self.current_y - self.start_y)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Choice {
    Bloc(Bloc),
    Party(Party),
}

#[derive(Clone, PartialEq)]
struct SwipeOption {
    choice: Choice,
    label: &'static str,
    color: &'static str,
}

fn swipe_options(round: Round, bloc_guess: Option<Bloc>) -> Vec<SwipeOption> {
    match round {
        Round::Bloc => vec![
            SwipeOption {
                choice: Choice::Bloc(Bloc::Right),
                label: "DIR",
                color: BLOC_RIGHT_COLOR,
            },
            SwipeOption {
                choice: Choice::Bloc(Bloc::Left),
                label: "ESQ",
                color: BLOC_LEFT_COLOR,
            },
        ],
        Round::Party => bloc_guess
            .map(|bloc| {
                parties_of_bloc(bloc)
                    .iter()
                    .map(|&party| SwipeOption {
                        choice: Choice::Party(party),
                        label: party.label(),
                        color: party.color(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        Round::Reveal => Vec::new(),
    }
}

fn new_session() -> StoredSession {
    StoredSession {
        seed: draw_seed(),
        current_index: 0,
        round: Round::Bloc,
        last_result: None,
    }
}

fn today() -> u32 {
    (js_sys::Date::now() / 86_400_000.0) as u32
}

#[function_component(App)]
fn app() -> Html {
    let fetch_status = use_state(|| FetchStatus::Loading);
    let rosters = use_state(|| None::<Rosters>);

    let session = use_state(|| {
        let mut restored = storage::load_session().unwrap_or_else(new_session);
        // A mid-card bloc choice is not persisted; restart the card at
        // the bloc round rather than resuming a party round blind.
        if restored.round == Round::Party {
            restored.round = Round::Bloc;
        }
        restored
    });
    let bloc_guess = use_state(|| None::<Bloc>);

    let deputy_guesses = use_state(storage::load_deputy_guesses);
    let project_guesses = use_state(storage::load_project_guesses);
    let streak = use_state(storage::load_streak);
    let drag_state = use_state(|| None::<DragState>);

    let location_query = use_state(|| {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    });

    {
        let fetch_status = fetch_status.clone();
        let rosters = rosters.clone();
        let session = session.clone();

        use_effect_with_deps(
            move |_| {
                fetch_status.set(FetchStatus::Loading);
                spawn_local(async move {
                    match fetch_rosters().await {
                        Ok(loaded) => {
                            storage::save_session(&session);
                            rosters.set(Some(loaded));
                            fetch_status.set(FetchStatus::Idle);
                        }
                        Err(err) => {
                            fetch_status.set(FetchStatus::Error(err.to_string()));
                            rosters.set(None);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let advance = {
        let session = session.clone();
        let bloc_guess = bloc_guess.clone();

        Callback::from(move |_: ()| {
            let mut next = (*session).clone();
            next.current_index += 1;
            next.round = Round::Bloc;
            next.last_result = None;
            storage::save_session(&next);
            session.set(next);
            bloc_guess.set(None);
        })
    };

    // Auto-advance from the reveal. The timeout is dropped (and thereby
    // cancelled) whenever the round or card changes first, so a stale
    // timer can never skip a later card.
    {
        let advance = advance.clone();
        use_effect_with_deps(
            move |(round, _index): &(Round, usize)| {
                let timer = if *round == Round::Reveal {
                    Some(Timeout::new(REVEAL_MILLIS, move || advance.emit(())))
                } else {
                    None
                };
                move || drop(timer)
            },
            (session.round, session.current_index),
        );
    }

    let on_bloc_select = {
        let session = session.clone();
        let bloc_guess = bloc_guess.clone();

        Callback::from(move |bloc: Bloc| {
            if session.round != Round::Bloc {
                return;
            }
            bloc_guess.set(Some(bloc));
            let mut next = (*session).clone();
            next.round = Round::Party;
            storage::save_session(&next);
            session.set(next);
        })
    };

    let on_party_select = {
        let session = session.clone();
        let bloc_guess = bloc_guess.clone();
        let rosters = rosters.clone();
        let deputy_guesses = deputy_guesses.clone();
        let project_guesses = project_guesses.clone();
        let streak = streak.clone();

        Callback::from(move |party: Party| {
            if session.round != Round::Party {
                return;
            }
            let Some(bloc) = *bloc_guess else {
                return;
            };
            let Some(rosters_ref) = (&*rosters).as_ref() else {
                return;
            };

            let deck = build_deck(rosters_ref, session.seed);
            let Some(card) = deck.get(session.current_index) else {
                return;
            };

            let guess = Guess::new(
                card.id().to_owned(),
                card.name().to_owned(),
                card.kind(),
                card.party(),
                bloc,
                party,
            );

            match guess.kind {
                GuessKind::Deputy => {
                    let mut list = (*deputy_guesses).clone();
                    list.push(guess.clone());
                    storage::save_deputy_guesses(&list);
                    deputy_guesses.set(list);
                }
                GuessKind::Project => {
                    let mut list = (*project_guesses).clone();
                    list.push(guess.clone());
                    storage::save_project_guesses(&list);
                    project_guesses.set(list);
                }
            }

            let mut updated_streak = (*streak).clone();
            updated_streak.record_play(today());
            storage::save_streak(&updated_streak);
            streak.set(updated_streak);

            let mut next = (*session).clone();
            next.round = Round::Reveal;
            next.last_result = Some(guess);
            storage::save_session(&next);
            session.set(next);
        })
    };

    let on_choice = {
        let on_bloc_select = on_bloc_select.clone();
        let on_party_select = on_party_select.clone();
        Callback::from(move |choice: Choice| match choice {
            Choice::Bloc(bloc) => on_bloc_select.emit(bloc),
            Choice::Party(party) => on_party_select.emit(party),
        })
    };

    let on_play_again = {
        let session = session.clone();
        let bloc_guess = bloc_guess.clone();
        let deputy_guesses = deputy_guesses.clone();
        let project_guesses = project_guesses.clone();
        let drag_state = drag_state.clone();

        Callback::from(move |_: MouseEvent| {
            storage::clear_game_data();
            let fresh = new_session();
            storage::save_session(&fresh);
            session.set(fresh);
            bloc_guess.set(None);
            deputy_guesses.set(Vec::new());
            project_guesses.set(Vec::new());
            drag_state.set(None);
        })
    };

    let pointer_down = {
        let drag_state = drag_state.clone();
        let session = session.clone();

        Callback::from(move |event: web_sys::PointerEvent| {
            if session.round == Round::Reveal {
                return;
            }
            event.prevent_default();
            if drag_state.is_some() {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            drag_state.set(Some(DragState {
                pointer_id: event.pointer_id(),
                start_x: event.client_x() as f64,
                start_y: event.client_y() as f64,
                current_x: event.client_x() as f64,
                current_y: event.client_y() as f64,
            }));
        })
    };

    let pointer_move = {
        let drag_state = drag_state.clone();

        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(mut state) = (*drag_state).clone() {
                if state.pointer_id == event.pointer_id() {
                    event.prevent_default();
                    state.current_x = event.client_x() as f64;
                    state.current_y = event.client_y() as f64;
                    drag_state.set(Some(state));
                }
            }
        })
    };

    let pointer_end = {
        let drag_state = drag_state.clone();
        let session = session.clone();
        let bloc_guess = bloc_guess.clone();
        let on_choice = on_choice.clone();

        Callback::from(move |event: web_sys::PointerEvent| {
            let Some(state) = (*drag_state).clone() else {
                return;
            };
            if state.pointer_id != event.pointer_id() {
                return;
            }
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.release_pointer_capture(event.pointer_id());
            }

            let (dx, dy) = state.offset();
            let options = swipe_options(session.round, *bloc_guess);
            if gestures::release_commits(dx, dy, OPTION_RADIUS) {
                if let Some(index) = gestures::active_option(dx, dy, options.len(), OPTION_RADIUS) {
                    on_choice.emit(options[index].choice);
                }
            }
            drag_state.set(None);
        })
    };

    let pointer_cancel = {
        let drag_state = drag_state.clone();

        Callback::from(move |event: web_sys::PointerEvent| {
            if let Some(state) = (*drag_state).clone() {
                if state.pointer_id == event.pointer_id() {
                    if let Some(target) = event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    {
                        let _ = target.release_pointer_capture(event.pointer_id());
                    }
                    drag_state.set(None);
                }
            }
        })
    };

    match &*fetch_status {
        FetchStatus::Loading => html! { <p class="status">{ "A carregar o parlamento…" }</p> },
        FetchStatus::Error(message) => html! { <p class="status error">{ message }</p> },
        FetchStatus::Idle => {
            let Some(rosters_ref) = (&*rosters).as_ref() else {
                return html! { <p class="status error">{ "Sem dados." }</p> };
            };

            let shared = parse_share_query(&location_query, rosters_ref);
            if shared.has_results() {
                return render_shared_results(&shared, &deputy_guesses, &project_guesses);
            }

            let deck = build_deck(rosters_ref, session.seed);
            let all_guesses: Vec<Guess> = deputy_guesses
                .iter()
                .chain(project_guesses.iter())
                .cloned()
                .collect();
            let summary = Summary::from_guesses(&all_guesses);

            if session.current_index >= deck.len() {
                let share_query = build_share_query(&deputy_guesses, &project_guesses, rosters_ref);
                return render_results(
                    &summary,
                    &all_guesses,
                    &streak,
                    &share_query,
                    &on_play_again,
                );
            }

            let card = &deck[session.current_index];
            let options = swipe_options(session.round, *bloc_guess);

            html! {
                <div class="app-container">
                    <header class="game-header">
                        <h1>{ "Deputavas" }</h1>
                        <div class="score-line">
                            <span>
                                { format!("Score: {}/{}", summary.party_correct, summary.total) }
                            </span>
                            <span>{ format!("Precisão: {}%", summary.accuracy_percent()) }</span>
                            <span>{ format!("Carta {}/{}", session.current_index + 1, deck.len()) }</span>
                        </div>
                    </header>
                    <main class="card-area">
                        { render_card(
                            card,
                            &session,
                            &options,
                            &drag_state,
                            &pointer_down,
                            &pointer_move,
                            &pointer_end,
                            &pointer_cancel,
                        ) }
                        { render_round_hint(session.round) }
                    </main>
                </div>
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    card: &Card,
    session: &StoredSession,
    options: &[SwipeOption],
    drag_state: &UseStateHandle<Option<DragState>>,
    pointer_down: &Callback<web_sys::PointerEvent>,
    pointer_move: &Callback<web_sys::PointerEvent>,
    pointer_end: &Callback<web_sys::PointerEvent>,
    pointer_cancel: &Callback<web_sys::PointerEvent>,
) -> Html {
    let (dx, dy) = drag_state
        .as_ref()
        .map(DragState::offset)
        .unwrap_or((0.0, 0.0));
    let is_dragging = drag_state.is_some();
    let active = if is_dragging {
        gestures::active_option(dx, dy, options.len(), OPTION_RADIUS)
    } else {
        None
    };

    let transform_style = format!(
        "transform: translate({dx:.1}px, {dy:.1}px) rotate({:.2}deg); transition: {};",
        dx * 0.1,
        if is_dragging {
            "transform 0s"
        } else {
            "transform 0.25s ease"
        }
    );

    let bubbles = options.iter().enumerate().map(|(index, option)| {
        let step = (index as f64) * 360.0 / (options.len() as f64);
        let radians = step.to_radians();
        let x = radians.cos() * OPTION_RADIUS;
        let y = radians.sin() * OPTION_RADIUS;
        let is_active = active == Some(index);
        let style = format!(
            "background-color: {}; transform: translate(calc(-50% + {x:.0}px), calc(-50% + {y:.0}px)) scale({});",
            option.color,
            if is_active { 1.4 } else { 1.0 },
        );
        html! {
            <div
                key={option.label}
                class={classes!("option-bubble", is_active.then_some("active"))}
                {style}
            >
                { option.label }
            </div>
        }
    });

    let reveal = (session.round == Round::Reveal)
        .then(|| session.last_result.as_ref())
        .flatten()
        .map(|result| render_reveal(card, result));

    html! {
        <div class="card-stage">
            <div class="option-ring">
                { for bubbles }
            </div>
            <article
                class="swipe-card"
                style={transform_style}
                onpointerdown={pointer_down.clone()}
                onpointermove={pointer_move.clone()}
                onpointerup={pointer_end.clone()}
                onpointercancel={pointer_cancel.clone()}
            >
                { render_card_face(card) }
                { reveal.unwrap_or_default() }
            </article>
        </div>
    }
}

fn render_card_face(card: &Card) -> Html {
    match card {
        Card::Deputy(deputy) => html! {
            <div class="card-face deputy">
                <img
                    src={deputy.photo_url.clone()}
                    alt={format!("Foto de {}", deputy.name)}
                    loading="lazy"
                />
                <p class="card-title">{ &deputy.name }</p>
            </div>
        },
        Card::Proposal(proposal) => html! {
            <div class="card-face proposal">
                <p class="proposal-kind">{ format!("{} {}", proposal.kind, proposal.number) }</p>
                <p class="card-title">{ &proposal.title }</p>
                <p class="proposal-session">
                    { format!("Legislatura {} · Sessão {}", proposal.legislature, proposal.session) }
                </p>
            </div>
        },
    }
}

fn render_reveal(card: &Card, result: &Guess) -> Html {
    let verdict = if result.is_party_correct {
        "Correto"
    } else {
        "Errado"
    };
    let style = format!("background-color: {}f2;", card.party().color());
    html! {
        <div class="reveal-overlay" {style}>
            <span class="verdict">{ verdict }</span>
            <h2>{ card.name() }</h2>
            <p class="party-label">{ card.party().label() }</p>
            <p class="party-name">{ card.party().full_name() }</p>
        </div>
    }
}

fn render_round_hint(round: Round) -> Html {
    let hint = match round {
        Round::Bloc => "Desliza para adivinhar o bloco",
        Round::Party => "Desliza para adivinhar o partido",
        Round::Reveal => "",
    };
    if hint.is_empty() {
        html! {}
    } else {
        html! { <p class="round-hint">{ hint }</p> }
    }
}

fn render_results(
    summary: &Summary,
    all_guesses: &[Guess],
    streak: &streak::StreakState,
    share_query: &str,
    on_play_again: &Callback<MouseEvent>,
) -> Html {
    let share_href = format!("?{share_query}");
    let breakdown = per_party(all_guesses);

    html! {
        <div class="results">
            <h1>{ "Fim de Jogo" }</h1>
            <div class="results-summary">
                <span>{ format!("Score: {}/{}", summary.party_correct, summary.total) }</span>
                <span>{ format!("Bloco certo: {}/{}", summary.bloc_correct, summary.total) }</span>
                <span>{ format!("Precisão: {}%", summary.accuracy_percent()) }</span>
            </div>
            <div class="results-streak">
                <span>{ format!("Streak atual: {} dias", streak.current_streak) }</span>
                <span>{ format!("Melhor streak: {} dias", streak.best_streak) }</span>
                { for streak.badges.iter().map(|badge| html! {
                    <span key={badge.clone()} class="badge">{ badge }</span>
                }) }
            </div>
            <ul class="party-breakdown">
                { for breakdown.iter().map(|entry| html! {
                    <li key={entry.party.label()}>
                        <span
                            class="swatch"
                            style={format!("background-color: {};", entry.party.color())}
                        />
                        <span>{ entry.party.label() }</span>
                        <span>{ format!("{}% ({})", entry.accuracy_percent(), entry.guessed) }</span>
                    </li>
                }) }
            </ul>
            <div class="results-actions">
                <button onclick={on_play_again.clone()}>{ "Jogar outra vez" }</button>
                <a class="share-link" href={share_href}>{ "Partilhar resultados" }</a>
            </div>
        </div>
    }
}

fn render_shared_results(
    shared: &ShareParams,
    deputy_guesses: &[Guess],
    project_guesses: &[Guess],
) -> Html {
    // Prefer the guesses carried in the link; fall back to whatever this
    // browser has stored locally.
    let mut guesses = shared.all_guesses();
    if guesses.is_empty() {
        guesses = deputy_guesses
            .iter()
            .chain(project_guesses.iter())
            .cloned()
            .collect();
    }

    let summary = Summary::from_guesses(&guesses);
    let score = shared.score.unwrap_or(summary.party_correct as u32);
    let total = shared.total.unwrap_or(summary.total as u32);
    let accuracy = shared.accuracy.unwrap_or_else(|| summary.accuracy_percent());

    html! {
        <div class="results shared">
            <h1>{ "O teu amigo Deputou" }</h1>
            <div class="results-summary">
                <span>{ format!("Score: {score}/{total}") }</span>
                <span>{ format!("Precisão: {accuracy}%") }</span>
            </div>
            <ul class="guess-list">
                { for guesses.iter().map(|guess| html! {
                    <li key={format!("{}-{}", guess.id, guess.party_guess.label())}
                        class={classes!(if guess.is_party_correct { "correct" } else { "wrong" })}>
                        <span class="guess-name">{ &guess.name }</span>
                        <span
                            class="guess-party"
                            style={format!("background-color: {};", guess.party_guess.color())}
                        >
                            { guess.party_guess.label() }
                        </span>
                        { (!guess.is_party_correct).then(|| html! {
                            <span class="actual-party">{ guess.party.label() }</span>
                        }).unwrap_or_default() }
                    </li>
                }) }
            </ul>
            <a class="challenge-link" href="./">{ "Consegues Deputar melhor?" }</a>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
