use std::fmt::{self, Debug};

use owo_colors::OwoColorize;

use super::{Cell, Grid};
use crate::env::{Direction, Vec2D};
use crate::search::{Adversary, Features, State};

/// Score lost by every move of the player, including `Stop`.
pub const TIME_PENALTY: i64 = 1;
pub const FOOD_SCORE: i64 = 10;
/// Bonus for eating the last food.
pub const WIN_SCORE: i64 = 500;
/// Bonus for catching a vulnerable ghost.
pub const CATCH_SCORE: i64 = 200;
pub const LOSE_PENALTY: i64 = 500;
/// Number of ghost moves a ghost stays vulnerable after a capsule was eaten.
pub const SCARED_TIME: u16 = 40;

/// The outcome of a simulated game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Win,
    Lose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    /// Respawn position
    pub start: Vec2D,
    pub pos: Vec2D,
    /// Remaining moves this ghost can be caught
    pub scared: u16,
}

impl Ghost {
    pub fn new(start: Vec2D) -> Ghost {
        Ghost {
            start,
            pos: start,
            scared: 0,
        }
    }
}

/// Maze game with a food collecting player (agent 0) chased by ghosts
/// (agents 1..).
///
/// The player wins when all food is eaten and loses when caught by a ghost
/// that is not vulnerable.
#[derive(Clone)]
pub struct Game {
    pub grid: Grid,
    pub player: Vec2D,
    pub ghosts: Vec<Ghost>,
    pub score: i64,
    food: usize,
    outcome: Outcome,
}

impl Game {
    pub fn new(grid: Grid, player: Vec2D, ghosts: Vec<Ghost>) -> Game {
        let food = grid.count(Cell::Food);
        Game {
            grid,
            player,
            ghosts,
            score: 0,
            food,
            outcome: Outcome::None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns all moves the agent can execute in enumeration order.
    /// The player may always stop, ghosts only if they are boxed in.
    pub fn valid_moves(&self, agent: usize) -> Vec<Direction> {
        if self.outcome != Outcome::None || agent > self.ghosts.len() {
            return Vec::new();
        }

        let pos = self.position(agent);
        let mut moves: Vec<Direction> = Direction::iter()
            .filter(|&d| self.grid.walkable(pos.apply(d)))
            .collect();
        if agent == 0 || moves.is_empty() {
            moves.push(Direction::Stop);
        }
        moves
    }

    pub fn position(&self, agent: usize) -> Vec2D {
        if agent == 0 {
            self.player
        } else {
            self.ghosts[agent - 1].pos
        }
    }

    /// Executes the move of a single agent.
    /// Moves into walls are ignored and finished games are not changed.
    pub fn step(&mut self, agent: usize, dir: Direction) {
        if self.outcome != Outcome::None {
            return;
        }

        if agent == 0 {
            self.step_player(dir);
            for ghost in 0..self.ghosts.len() {
                self.check_collision(ghost);
            }
        } else {
            let ghost = &mut self.ghosts[agent - 1];
            let p = ghost.pos.apply(dir);
            if self.grid.walkable(p) {
                ghost.pos = p;
            }
            ghost.scared = ghost.scared.saturating_sub(1);
            self.check_collision(agent - 1);
        }
    }

    fn step_player(&mut self, dir: Direction) {
        let p = self.player.apply(dir);
        if self.grid.walkable(p) {
            self.player = p;
        }
        self.score -= TIME_PENALTY;

        let cell = self.grid[self.player];
        match cell {
            Cell::Food => {
                self.grid[self.player] = Cell::Free;
                self.score += FOOD_SCORE;
                self.food -= 1;
                if self.food == 0 {
                    self.score += WIN_SCORE;
                    self.outcome = Outcome::Win;
                }
            }
            Cell::Capsule => {
                self.grid[self.player] = Cell::Free;
                for ghost in &mut self.ghosts {
                    ghost.scared = SCARED_TIME;
                }
            }
            _ => {}
        }
    }

    fn check_collision(&mut self, ghost: usize) {
        let ghost = &mut self.ghosts[ghost];
        if ghost.pos != self.player {
            return;
        }

        if ghost.scared > 0 {
            self.score += CATCH_SCORE;
            ghost.pos = ghost.start;
            ghost.scared = 0;
        } else if self.outcome != Outcome::Win {
            self.score -= LOSE_PENALTY;
            self.outcome = Outcome::Lose;
        }
    }
}

impl State for Game {
    type Action = Direction;

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        self.valid_moves(agent)
    }

    fn successor(&self, agent: usize, action: Direction) -> Game {
        let mut game = self.clone();
        game.step(agent, action);
        game
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lose
    }

    fn num_agents(&self) -> usize {
        self.ghosts.len() + 1
    }

    fn score(&self) -> f64 {
        self.score as f64
    }
}

impl Features for Game {
    fn agent_position(&self) -> Vec2D {
        self.player
    }

    fn food(&self) -> Vec<Vec2D> {
        self.grid.positions(Cell::Food).collect()
    }

    fn num_food(&self) -> usize {
        self.food
    }

    fn capsules(&self) -> Vec<Vec2D> {
        self.grid.positions(Cell::Capsule).collect()
    }

    fn adversaries(&self) -> Vec<Adversary> {
        self.ghosts
            .iter()
            .map(|g| Adversary {
                position: g.pos,
                scared: g.scared,
            })
            .collect()
    }
}

impl Game {
    /// Parses the textual layout format.
    ///
    /// `%` wall, `.` food, `o` capsule, `P` player, `G` ghost.
    /// Ghosts are numbered in reading order.
    pub fn parse(txt: &str) -> Option<Game> {
        let lines: Vec<&str> = txt
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let height = lines.len();
        let width = lines.first()?.chars().count();
        if lines.iter().any(|l| l.chars().count() != width) {
            return None;
        }

        let mut grid = Grid::new(width, height);
        let mut player = None;
        let mut ghosts = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let y = (height - 1 - row) as i16;
            for (x, c) in line.chars().enumerate() {
                let p = Vec2D::new(x as _, y);
                grid[p] = match c {
                    '%' => Cell::Wall,
                    '.' => Cell::Food,
                    'o' => Cell::Capsule,
                    'P' => {
                        if player.replace(p).is_some() {
                            return None;
                        }
                        Cell::Free
                    }
                    'G' => {
                        ghosts.push(Ghost::new(p));
                        Cell::Free
                    }
                    ' ' => Cell::Free,
                    _ => return None,
                };
            }
        }

        Some(Game::new(grid, player?, ghosts))
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game {{")?;

        for y in (0..self.grid.height).rev() {
            write!(f, "  ")?;
            for x in 0..self.grid.width {
                let p = Vec2D::new(x as _, y as _);
                if p == self.player {
                    write!(f, "{}", "P".yellow())?;
                } else if let Some(ghost) = self.ghosts.iter().find(|g| g.pos == p) {
                    if ghost.scared > 0 {
                        write!(f, "{}", "G".bright_blue())?;
                    } else {
                        write!(f, "{}", "G".red())?;
                    }
                } else {
                    write!(f, "{:?}", self.grid[p])?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "  Ghosts: [")?;
        for (i, ghost) in self.ghosts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}: {})", i + 1, ghost.scared)?;
        }
        writeln!(f, "]")?;
        writeln!(
            f,
            "  Score: {} Food: {} {:?}",
            self.score, self.food, self.outcome
        )?;

        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::v2;
    use Direction::*;

    #[test]
    fn game_parse() {
        let game = Game::parse(
            r#"
            %%%%%%%
            %.P G %
            % %o%.%
            %G    %
            %%%%%%%"#,
        )
        .unwrap();

        assert_eq!(game.grid.width, 7);
        assert_eq!(game.grid.height, 5);
        assert_eq!(game.player, v2(2, 3));
        assert_eq!(
            game.ghosts.iter().map(|g| g.pos).collect::<Vec<_>>(),
            vec![v2(4, 3), v2(1, 1)]
        );
        assert_eq!(game.num_agents(), 3);
        assert_eq!(game.num_food(), 2);
        assert_eq!(game.food(), vec![v2(5, 2), v2(1, 3)]);
        assert_eq!(game.capsules(), vec![v2(3, 2)]);
        assert_eq!(game.grid[v2(2, 2)], Cell::Wall);
        assert_eq!(game.outcome(), Outcome::None);
        println!("{:?}", game);

        assert!(Game::parse("%%%\n%.%").is_none());
        assert!(Game::parse("%%%%\n%PP%\n%%%%").is_none());
        assert!(Game::parse("%%%\n%P\n%%%").is_none());
    }

    #[test]
    fn valid_moves() {
        let game = Game::parse(
            r#"
            %%%%%
            %P G%
            %%% %
            %%%%%"#,
        )
        .unwrap();

        assert_eq!(game.valid_moves(0), vec![Right, Stop]);
        assert_eq!(game.valid_moves(1), vec![Down, Left]);
        assert!(game.valid_moves(2).is_empty());

        let boxed = Game::parse(
            r#"
            %%%%%
            %P%G%
            %%%%%"#,
        )
        .unwrap();
        assert_eq!(boxed.valid_moves(0), vec![Stop]);
        assert_eq!(boxed.valid_moves(1), vec![Stop]);
    }

    #[test]
    fn eat_food() {
        let game = Game::parse(
            r#"
            %%%%%%
            %P.. %
            %%%%%%"#,
        )
        .unwrap();

        let game = game.successor(0, Right);
        assert_eq!(game.player, v2(2, 1));
        assert_eq!(game.score, FOOD_SCORE - TIME_PENALTY);
        assert_eq!(game.num_food(), 1);
        assert!(!game.is_terminal());

        let game = game.successor(0, Stop);
        assert_eq!(game.score, FOOD_SCORE - 2 * TIME_PENALTY);

        let game = game.successor(0, Right);
        assert!(game.is_win());
        assert_eq!(game.score, 2 * FOOD_SCORE + WIN_SCORE - 3 * TIME_PENALTY);
        assert!(game.valid_moves(0).is_empty());
    }

    #[test]
    fn caught_by_ghost() {
        let game = Game::parse(
            r#"
            %%%%%%
            %P G.%
            %%%%%%"#,
        )
        .unwrap();

        // The player runs into the ghost
        let next = game.successor(0, Right).successor(1, Left);
        assert!(next.is_lose());
        assert_eq!(next.score, -TIME_PENALTY - LOSE_PENALTY);
        assert!(next.valid_moves(1).is_empty());

        // Successors of finished games are unchanged
        let after = next.successor(0, Right);
        assert_eq!(after.player, next.player);
        assert_eq!(after.score, next.score);

        let next = game.successor(0, Stop).successor(1, Right);
        assert!(!next.is_terminal());
        assert_eq!(next.ghosts[0].pos, v2(4, 1));
    }

    #[test]
    fn catch_scared_ghost() {
        let game = Game::parse(
            r#"
            %%%%%%%
            %Po G.%
            %%%%%%%"#,
        )
        .unwrap();

        let game = game.successor(0, Right);
        assert!(game.capsules().is_empty());
        assert_eq!(game.ghosts[0].scared, SCARED_TIME);
        assert_eq!(game.adversaries()[0].scared, SCARED_TIME);

        let game = game.successor(1, Left);
        assert_eq!(game.ghosts[0].scared, SCARED_TIME - 1);
        assert_eq!(game.ghosts[0].pos, v2(3, 1));

        let game = game.successor(0, Right);
        assert!(!game.is_terminal());
        assert_eq!(game.score, CATCH_SCORE - 2 * TIME_PENALTY);
        assert_eq!(game.ghosts[0].pos, v2(4, 1));
        assert_eq!(game.ghosts[0].scared, 0);
    }
}
