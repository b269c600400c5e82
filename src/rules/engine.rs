//! The round engine.
//!
//! `RoundEngine` owns all game state (roles, board, turn counter, RNG) and
//! enforces the round protocol:
//!
//! 1. `begin_round`: advance the turn counter, scatter visitors, then antagonists
//! 2. `submit_area`: place the protagonist, resolve at most one kill
//! 3. `open_accusations`: list who may be accused
//! 4. `submit_accusation`: apply the optional accusation, check win/loss
//!
//! `play_round` runs all four steps against a `ProtagonistPolicy`.
//!
//! The placement, targeting and elimination primitives are public as well;
//! they do not check the round phase.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::core::{AreaId, ConfigError, GameConfig, GameRng, InvalidChoice, PieceId, Role, Roles};

use super::policy::ProtagonistPolicy;
use super::round::{GameResult, GameSummary, KillOutcome, RoundError, RoundPhase, RoundReport};
use super::targeting::{kill_candidates, select_kill_target, KillCandidate};

/// Owns and advances one game.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: GameConfig,
    roles: Roles,
    board: Board,
    /// Starts at 1, incremented as each round begins.
    turn: u32,
    phase: RoundPhase,
    rng: GameRng,
    initial_visitors: usize,
    /// Area chosen this round, set by `submit_area`.
    protected_area: Option<AreaId>,
    last_kill: KillOutcome,
}

impl RoundEngine {
    /// Start a game with a random role draw.
    ///
    /// Refuses configurations whose roles do not fit in the piece pool.
    pub fn new(config: GameConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        let roles = Roles::draw(&config, &mut rng)?;
        Self::with_roles(config, roles, rng)
    }

    /// Start a game with a predetermined role assignment.
    ///
    /// The roles must come from the configured pool and hold exactly the
    /// configured number of antagonists.
    pub fn with_roles(config: GameConfig, roles: Roles, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some(piece) = roles.roster().into_iter().find(|p| p.raw() as usize >= config.piece_count) {
            return Err(ConfigError::InvalidRoles(format!(
                "piece {piece} is outside the pool of {}",
                config.piece_count
            )));
        }
        if roles.antagonists().len() != config.antagonist_count {
            return Err(ConfigError::InvalidRoles(format!(
                "{} antagonists assigned but {} configured",
                roles.antagonists().len(),
                config.antagonist_count
            )));
        }

        info!(
            seed = rng.seed(),
            pieces = config.piece_count,
            antagonists = config.antagonist_count,
            areas = config.area_count,
            "game started"
        );
        debug!(
            protagonist = %roles.protagonist(),
            antagonists = ?roles.antagonists(),
            visitors = ?roles.visitors(),
            "roles assigned"
        );

        let mut engine = Self {
            config,
            initial_visitors: roles.visitors().len(),
            roles,
            board: Board::new(config.area_count),
            turn: 1,
            phase: RoundPhase::RoundComplete,
            rng,
            protected_area: None,
            last_kill: KillOutcome::NoKill,
        };
        if let Some(result) = engine.result() {
            engine.phase = result.into();
        }
        Ok(engine)
    }

    // === Queries ===

    /// The configuration the game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current role assignment.
    #[must_use]
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn counter. Starts at 1 and is incremented as each round begins.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of rounds begun so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.turn - 1
    }

    /// Current phase of the round protocol.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Seed of the engine's RNG, for replaying the game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The antagonists' action in the current (or last) round.
    #[must_use]
    pub fn last_kill(&self) -> &KillOutcome {
        &self.last_kill
    }

    /// True once every antagonist is gone.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.roles.antagonists().is_empty()
    }

    /// True once every visitor is gone.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.roles.visitors().is_empty()
    }

    /// The game result, if the game is over. A win takes precedence.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.is_won() {
            Some(GameResult::Won)
        } else if self.is_lost() {
            Some(GameResult::Lost)
        } else {
            None
        }
    }

    /// Final tally, once the game has ended.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        if !self.phase.is_terminal() {
            return None;
        }
        self.result().map(|result| GameSummary {
            result,
            turns: self.rounds_played(),
            surviving_visitors: self.roles.visitors().len(),
            initial_visitors: self.initial_visitors,
        })
    }

    /// Pieces the protagonist may accuse: surviving visitors and
    /// antagonists, ascending.
    #[must_use]
    pub fn accusation_options(&self) -> Vec<PieceId> {
        self.roles.accusable()
    }

    // === Primitives ===

    /// Clear the board and drop every visitor into a random area.
    pub fn place_visitors(&mut self) {
        self.board.clear();
        for &visitor in self.roles.visitors() {
            let area = scatter(&mut self.board, &mut self.rng, visitor);
            trace!(piece = %visitor, area = area.number(), "visitor placed");
        }
    }

    /// Drop every antagonist into a random area, on top of the visitors.
    ///
    /// # Panics
    ///
    /// If an antagonist is already on the board, i.e. when called twice
    /// without `place_visitors` clearing the board in between.
    pub fn place_antagonists(&mut self) {
        for &antagonist in self.roles.antagonists() {
            let area = scatter(&mut self.board, &mut self.rng, antagonist);
            trace!(piece = %antagonist, area = area.number(), "antagonist placed");
        }
    }

    /// Put the protagonist in the chosen area.
    ///
    /// # Panics
    ///
    /// If the protagonist is already on the board this round. `submit_area`
    /// places the protagonist itself, so do not combine the two.
    pub fn place_protagonist(&mut self, area: AreaId) -> Result<(), InvalidChoice> {
        self.board.place(area, self.roles.protagonist())
    }

    /// Score everyone the antagonists can reach on the current board.
    #[must_use]
    pub fn compute_kill_candidates(&self) -> Vec<KillCandidate> {
        kill_candidates(&self.board, &self.roles)
    }

    /// Pick this round's victim, or `None` if nobody can be reached.
    pub fn select_kill_target(&mut self) -> Option<PieceId> {
        let candidates = self.compute_kill_candidates();
        debug!(candidates = candidates.len(), "kill candidates scored");
        select_kill_target(&candidates, &mut self.rng).map(|c| c.piece)
    }

    /// Everyone sharing an area with `piece` right now.
    #[must_use]
    pub fn suspects_for(&self, piece: PieceId) -> Vec<PieceId> {
        self.board.suspects_for(piece)
    }

    /// Remove a piece from the game: from its role and from the board.
    ///
    /// Returns the role it held. Never call this on the protagonist.
    pub fn eliminate(&mut self, piece: PieceId) -> Option<Role> {
        let role = self.roles.eliminate(piece);
        self.board.remove(piece);
        debug!(piece = %piece, role = ?role, "piece eliminated");
        role
    }

    // === Round protocol ===

    /// Start the next round: bump the turn counter and place everyone but
    /// the protagonist.
    pub fn begin_round(&mut self) -> Result<&Board, RoundError> {
        self.expect_phase(RoundPhase::RoundComplete)?;

        self.turn += 1;
        self.protected_area = None;
        self.last_kill = KillOutcome::NoKill;
        self.place_visitors();
        self.place_antagonists();
        self.phase = RoundPhase::AwaitingAreaChoice;

        info!(round = self.rounds_played(), "round started");
        Ok(&self.board)
    }

    /// Accept the protagonist's area and resolve the antagonists' kill.
    ///
    /// An out-of-range area is rejected and nothing changes.
    pub fn submit_area(&mut self, area: AreaId) -> Result<&KillOutcome, RoundError> {
        self.expect_phase(RoundPhase::AwaitingAreaChoice)?;
        self.place_protagonist(area)?;
        self.protected_area = Some(area);

        self.last_kill = match self.select_kill_target() {
            None => KillOutcome::NoKill,
            Some(victim) => {
                // Suspects must be read while the victim is still on the board.
                let suspects = self.suspects_for(victim);
                let area = self.board.area_of(victim).unwrap_or(area);
                self.eliminate(victim);
                KillOutcome::Killed { victim, area, suspects }
            }
        };
        self.phase = RoundPhase::KillResolved;

        Ok(&self.last_kill)
    }

    /// Open the accusation step and list the valid targets.
    pub fn open_accusations(&mut self) -> Result<Vec<PieceId>, RoundError> {
        self.expect_phase(RoundPhase::KillResolved)?;
        self.phase = RoundPhase::AwaitingAccusation;
        Ok(self.accusation_options())
    }

    /// Apply the protagonist's accusation (or pass) and close the round.
    ///
    /// A target outside `accusation_options` is rejected and nothing changes.
    pub fn submit_accusation(&mut self, target: Option<PieceId>) -> Result<RoundReport, RoundError> {
        self.expect_phase(RoundPhase::AwaitingAccusation)?;

        if let Some(piece) = target {
            if piece == self.roles.protagonist() || !self.roles.is_alive(piece) {
                return Err(InvalidChoice::NotAccusable(piece).into());
            }
            self.eliminate(piece);
        }

        let result = self.result();
        self.phase = result.map_or(RoundPhase::RoundComplete, RoundPhase::from);
        if let Some(result) = result {
            info!(result = ?result, turns = self.rounds_played(), "game over");
        }

        Ok(RoundReport {
            round: self.rounds_played(),
            protected_area: self.protected_area.unwrap_or_default(),
            kill: self.last_kill.clone(),
            accused: target,
            result,
        })
    }

    /// Play one full round, asking `policy` for the protagonist's inputs.
    pub fn play_round<P: ProtagonistPolicy>(&mut self, policy: &mut P) -> Result<RoundReport, P::Error> {
        self.begin_round()?;
        let area = policy.choose_area(self.rounds_played(), &self.board)?;
        self.submit_area(area)?;

        let options = self.open_accusations()?;
        let accused = policy.choose_accusation(&self.last_kill, &options)?;
        let report = self.submit_accusation(accused)?;

        policy.round_finished(&report)?;
        Ok(report)
    }

    /// Play rounds until the game ends.
    pub fn play_to_end<P: ProtagonistPolicy>(&mut self, policy: &mut P) -> Result<GameSummary, P::Error> {
        loop {
            if let Some(summary) = self.summary() {
                return Ok(summary);
            }
            self.play_round(policy)?;
        }
    }

    // === Internals ===

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase.is_terminal() {
            if let Some(result) = self.result() {
                return Err(RoundError::GameOver(result));
            }
        }
        if self.phase != expected {
            return Err(RoundError::OutOfPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }
}

/// Drop a piece into a uniformly random area.
fn scatter(board: &mut Board, rng: &mut GameRng, piece: PieceId) -> AreaId {
    let area = AreaId::new(rng.gen_range_usize(0..board.area_count()));
    // Drawn from 0..area_count, so the area always exists.
    if let Err(err) = board.place(area, piece) {
        unreachable!("random placement out of range: {err}");
    }
    area
}
