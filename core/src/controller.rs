use alloc::vec::Vec;
use futures_util::future::try_join_all;

use crate::*;

/// Receives the outcome of every finished game setup.
pub trait PresentationAdapter {
    fn on_board_ready(&mut self, board: &Board);
    fn on_setup_failed(&mut self, error: &SetupError);
}

/// Builds a new board: picks categories, fetches them all at once, samples their clues.
///
/// Nothing outside the returned board is touched, so a failed attempt can simply be
/// retried. The same `seed` over the same API data gives the same board.
pub async fn start_game<A: QuizApi>(
    client: &QuizClient<A>,
    config: GameConfig,
    seed: u64,
) -> SetupResult<Board> {
    let mut rng = board_rng(seed);
    let required = usize::from(config.clues_per_category);

    let ids = client
        .sample_category_ids(
            usize::from(config.categories),
            u32::from(config.clues_per_category),
            &mut rng,
        )
        .await?;
    log::debug!("selected categories: {:?}", ids);

    let fetched = try_join_all(ids.iter().map(|&id| client.fetch_category(id)))
        .await
        .inspect_err(|err| log::error!("category fetch failed: {}", err))?;

    let categories = fetched
        .into_iter()
        .map(|data| -> SetupResult<Category> {
            let available = data.clues.len();
            let clues = sample_without_replacement(data.clues, required, &mut rng).ok_or(
                SetupError::ShortCategory {
                    id: data.id,
                    available,
                    required,
                },
            )?;
            Ok(Category::new(data.title, clues))
        })
        .collect::<SetupResult<Vec<_>>>()?;

    let board = Board::new(categories)?;
    log::debug!("board ready: {:?}", board.size());
    Ok(board)
}

/// Identifies the single outstanding game setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SetupTicket {
    generation: u64,
    config: GameConfig,
}

impl SetupTicket {
    pub fn config(&self) -> GameConfig {
        self.config
    }
}

/// Owns the live board and serializes restarts.
///
/// At most one setup is outstanding at a time; restart requests made while one is
/// in flight are ignored.
#[derive(Clone, Debug, Default)]
pub struct GameController {
    board: Option<Board>,
    generation: u64,
    pending: Option<u64>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_setting_up(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts tracking a new setup, `None` while another is still outstanding.
    pub fn request_restart(&mut self, config: GameConfig) -> Option<SetupTicket> {
        if self.pending.is_some() {
            log::warn!("restart ignored, a game setup is already in progress");
            return None;
        }

        self.generation += 1;
        self.pending = Some(self.generation);
        log::debug!("game setup #{} requested: {:?}", self.generation, config);
        Some(SetupTicket {
            generation: self.generation,
            config,
        })
    }

    /// Installs the result of the outstanding setup.
    ///
    /// A successful board replaces the previous one; a failure keeps whatever board
    /// was there before.
    pub fn finish_setup(
        &mut self,
        ticket: SetupTicket,
        result: SetupResult<Board>,
        adapter: &mut impl PresentationAdapter,
    ) -> SetupResult<&Board> {
        if self.pending != Some(ticket.generation) {
            log::warn!("discarding result of stale game setup #{}", ticket.generation);
            return Err(SetupError::StaleTicket);
        }
        self.pending = None;

        match result {
            Ok(board) => {
                let board = self.board.insert(board);
                adapter.on_board_ready(board);
                Ok(&*board)
            }
            Err(err) => {
                log::error!("game setup #{} failed: {}", ticket.generation, err);
                adapter.on_setup_failed(&err);
                Err(err)
            }
        }
    }

    /// Runs a whole restart in place: guard, fetch, install.
    pub async fn restart<A: QuizApi>(
        &mut self,
        client: &QuizClient<A>,
        config: GameConfig,
        seed: u64,
        adapter: &mut impl PresentationAdapter,
    ) -> SetupResult<&Board> {
        let ticket = self
            .request_restart(config)
            .ok_or(SetupError::AlreadyInProgress)?;
        let result = start_game(client, ticket.config(), seed).await;
        self.finish_setup(ticket, result, adapter)
    }

    pub fn space_clicked(&mut self, category: usize, clue: usize) -> Result<Reveal> {
        self.board
            .as_mut()
            .ok_or(BoardError::NoActiveBoard)?
            .reveal(category, clue)
    }

    pub fn overlay_dismissed(&mut self, category: usize, clue: usize) -> Result<SpaceState> {
        self.board
            .as_mut()
            .ok_or(BoardError::NoActiveBoard)?
            .dismiss_modal(category, clue)
    }
}
