use crate::api::{DEFAULT_API_URL, HttpQuizApi};
use crate::utils::*;
use clap::Args;
use quizboard_core as quiz;
use quiz::PresentationAdapter;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of categories (columns) on the board
    #[arg(long, default_value_t = quiz::GameConfig::default().categories)]
    pub categories: u8,

    /// Number of clues (rows) per category
    #[arg(long, default_value_t = quiz::GameConfig::default().clues_per_category)]
    pub clues: u8,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the jService-compatible quiz API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Categories requested per listing page
    #[arg(long, default_value_t = quiz::ListingConfig::default().page_size)]
    pub page_size: u32,

    /// Listing pages scanned for eligible categories
    #[arg(long, default_value_t = quiz::ListingConfig::default().max_pages)]
    pub pages: u32,
}

impl GameProps {
    fn game_config(&self) -> quiz::GameConfig {
        quiz::GameConfig::new(self.categories, self.clues)
    }

    fn client(&self) -> quiz::QuizClient<HttpQuizApi> {
        quiz::QuizClient::new(
            HttpQuizApi::new(&self.api_url),
            quiz::ListingConfig::new(self.page_size, self.pages),
        )
    }
}

/// Outcome of the latest game setup, as far as the view cares.
#[derive(Clone, Debug, PartialEq)]
enum BoardStatus {
    Empty,
    Ready,
    Failed(String),
}

impl PresentationAdapter for BoardStatus {
    fn on_board_ready(&mut self, board: &quiz::Board) {
        log::info!("board ready: {:?}", board.size());
        *self = Self::Ready;
    }

    fn on_setup_failed(&mut self, error: &quiz::SetupError) {
        *self = Self::Failed(error.to_string());
    }
}

/// The clue currently shown in the overlay.
#[derive(Clone, Debug, PartialEq)]
struct Overlay {
    coords: quiz::Coord2,
    reveal: quiz::Reveal,
}

pub(crate) enum Msg {
    Restart,
    SetupFinished(quiz::SetupTicket, quiz::SetupResult<quiz::Board>),
    SpaceClicked(quiz::Coord2),
    OverlayDismissed,
}

/// What a board space shows for a clue in its current reveal state.
fn space_text(clue: &quiz::Clue) -> String {
    match clue.current() {
        None => "?".to_string(),
        Some(reveal) => display_text(&reveal),
    }
}

fn display_text(reveal: &quiz::Reveal) -> String {
    match reveal.kind {
        quiz::RevealKind::Question => reveal.text.clone(),
        quiz::RevealKind::Answer => strip_markup(&reveal.text),
    }
}

/// Coordinate bookkeeping errors are bugs in this view, not player mistakes.
fn report_board_error(err: quiz::BoardError) {
    log::error!("board bookkeeping error: {}", err);
    if cfg!(debug_assertions) {
        panic!("board bookkeeping error: {err}");
    }
}

/// True when the click landed on the element carrying the handler itself, not on
/// something nested inside it.
fn is_direct_hit<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    target.is_some() && target == current_target
}

#[derive(Properties, Clone, PartialEq)]
struct SpaceProps {
    coords: quiz::Coord2,
    text: String,
    reveal_state: quiz::RevealState,
    space_state: quiz::SpaceState,
    callback: Callback<quiz::Coord2>,
}

#[function_component(SpaceView)]
fn space_component(props: &SpaceProps) -> Html {
    use quiz::{RevealState, SpaceState};

    let SpaceProps {
        coords,
        text,
        reveal_state,
        space_state,
        callback,
    } = props.clone();

    let class = classes!(
        "clue",
        match reveal_state {
            RevealState::Hidden => classes!(),
            RevealState::Question => classes!("question"),
            RevealState::Answer => classes!("answer"),
        },
        match space_state {
            SpaceState::Unstarted => classes!(),
            SpaceState::Started => classes!("started"),
            SpaceState::Complete => classes!("complete"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", coords.0, coords.1);
        callback.emit(coords);
    });

    html! {
        <td><div {class} {onclick}>{text}</div></td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    client: quiz::QuizClient<HttpQuizApi>,
    config: quiz::GameConfig,
    forced_seed: Option<u64>,
    controller: quiz::GameController,
    status: BoardStatus,
    overlay: Option<Overlay>,
}

impl GameView {
    fn restart(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.controller.request_restart(self.config) else {
            return false;
        };

        let client = self.client.clone();
        let seed = self.forced_seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        ctx.link().send_future(async move {
            let result = quiz::start_game(&client, ticket.config(), seed).await;
            Msg::SetupFinished(ticket, result)
        });
        true
    }

    fn click_space(&mut self, coords: quiz::Coord2) -> bool {
        if self.overlay.is_some() {
            return false;
        }

        let (category, clue) = coords;
        let already_answered = self
            .controller
            .board()
            .and_then(|board| board.clue(category, clue))
            .is_some_and(|clue| clue.reveal_state().is_terminal());

        match self.controller.space_clicked(category, clue) {
            Ok(_) if already_answered => false,
            Ok(reveal) => {
                self.overlay = Some(Overlay { coords, reveal });
                true
            }
            Err(err) => {
                report_board_error(err);
                false
            }
        }
    }

    fn dismiss_overlay(&mut self) -> bool {
        let Some(Overlay { coords, .. }) = self.overlay.take() else {
            return false;
        };

        match self.controller.overlay_dismissed(coords.0, coords.1) {
            Ok(state) => log::trace!("({}, {}) now {:?}", coords.0, coords.1, state),
            Err(err) => report_board_error(err),
        }
        true
    }

    fn status_text(&self) -> Option<String> {
        if self.controller.is_setting_up() {
            return Some("Loading categories…".to_string());
        }

        match &self.status {
            BoardStatus::Failed(reason) => {
                Some(format!("Could not load game, try again. ({reason})"))
            }
            BoardStatus::Ready if self.controller.board().is_some_and(|b| b.is_complete()) => {
                Some("Board cleared!".to_string())
            }
            BoardStatus::Ready | BoardStatus::Empty => None,
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.controller.board() else {
            return html! {};
        };
        let (categories, clues) = board.size();

        html! {
            <table class="board">
                <thead>
                    <tr>
                    {
                        for board.categories().iter().map(|category| html! {
                            <td><div class="category-head">{category.title()}</div></td>
                        })
                    }
                    </tr>
                </thead>
                <tbody>
                {
                    for (0..clues).map(|i| html! {
                        <tr>
                        {
                            for (0..categories).filter_map(|c| {
                                let clue = board.clue(c, i)?;
                                let space_state = board.space_state(c, i)?;
                                let callback = ctx.link().callback(Msg::SpaceClicked);
                                Some(html! {
                                    <SpaceView
                                        coords={(c, i)}
                                        text={space_text(clue)}
                                        reveal_state={clue.reveal_state()}
                                        {space_state}
                                        {callback}
                                    />
                                })
                            })
                        }
                        </tr>
                    })
                }
                </tbody>
            </table>
        }
    }

    fn view_overlay(&self, ctx: &Context<Self>) -> Html {
        let Some(Overlay { reveal, .. }) = &self.overlay else {
            return html! {};
        };
        // Backdrop, header and body close the overlay; the title, the text and the
        // content frame do not.
        let dismiss = || {
            ctx.link().batch_callback(|e: MouseEvent| {
                is_direct_hit(e.target(), e.current_target()).then_some(Msg::OverlayDismissed)
            })
        };

        html! {
            <Modal>
                <div class="modal" onclick={dismiss()}>
                    <div class="modal-content">
                        <div class="modal-header" onclick={dismiss()}>
                            <h2>{reveal.label()}</h2>
                        </div>
                        <div class="modal-body" onclick={dismiss()}>
                            <p>{display_text(reveal)}</p>
                        </div>
                    </div>
                </div>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ctx.link().send_message(Msg::Restart);
        Self {
            client: props.client(),
            config: props.game_config(),
            forced_seed: props.seed,
            controller: quiz::GameController::new(),
            status: BoardStatus::Empty,
            overlay: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => self.restart(ctx),
            SetupFinished(ticket, result) => {
                let installed = self
                    .controller
                    .finish_setup(ticket, result, &mut self.status)
                    .is_ok();
                if installed {
                    self.overlay = None;
                }
                true
            }
            SpaceClicked(coords) => self.click_space(coords),
            OverlayDismissed => self.dismiss_overlay(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.controller.is_setting_up();
        let label = if self.controller.board().is_some() {
            "Restart"
        } else {
            "Start"
        };
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <div class="quizboard">
                <nav>
                    <button class="restart" disabled={loading} onclick={cb_restart}>{label}</button>
                    if let Some(status) = self.status_text() {
                        <span class="status">{status}</span>
                    }
                </nav>
                {self.view_board(ctx)}
                {self.view_overlay(ctx)}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue() -> quiz::Clue {
        quiz::Clue::new("It's paired with conviction...", "<i>impeachment</i>", 400)
    }

    fn single_clue_board() -> quiz::Board {
        quiz::Board::new(vec![quiz::Category::new("the constitution today", vec![clue()])]).unwrap()
    }

    #[test]
    fn space_text_follows_reveal_state() {
        let mut board = single_clue_board();
        assert_eq!(space_text(board.clue(0, 0).unwrap()), "?");

        board.reveal(0, 0).unwrap();
        assert_eq!(space_text(board.clue(0, 0).unwrap()), "It's paired with conviction...");

        board.reveal(0, 0).unwrap();
        assert_eq!(space_text(board.clue(0, 0).unwrap()), "impeachment");
    }

    #[test]
    fn board_status_tracks_setup_outcome() {
        let mut status = BoardStatus::Empty;

        status.on_setup_failed(&quiz::SetupError::Data(quiz::DataError::NotFound(3)));
        assert!(matches!(
            &status,
            BoardStatus::Failed(reason) if reason.contains("Category 3 not found")
        ));

        status.on_board_ready(&single_clue_board());
        assert_eq!(status, BoardStatus::Ready);
    }

    #[test]
    fn overlay_closes_only_on_direct_hits() {
        assert!(is_direct_hit(Some("modal-body"), Some("modal-body")));
        assert!(!is_direct_hit(Some("modal-body text"), Some("modal-body")));
        assert!(!is_direct_hit(Some("modal-content"), Some("modal")));
        assert!(!is_direct_hit::<&str>(None, None));
    }

    #[test]
    fn props_default_to_standard_board() {
        use clap::Parser;

        #[derive(Parser)]
        struct Cli {
            #[command(flatten)]
            game: GameProps,
        }

        let props = Cli::try_parse_from(["", "--categories=3", "--seed=9"])
            .unwrap()
            .game;

        assert_eq!(props.game_config(), quiz::GameConfig::new(3, 5));
        assert_eq!(props.seed, Some(9));
        assert_eq!(props.api_url, DEFAULT_API_URL);
        assert_eq!(props.client().listing(), quiz::ListingConfig::default());
    }
}
