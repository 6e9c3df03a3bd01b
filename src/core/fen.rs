use crate::core::convert::{FromIndex, ToIndex};
use crate::core::game::{Difficulty, GameState, Outcome, WinCause};
use crate::core::loc::{Loc, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::core::player::Player;
use crate::core::{Board, Cell, Side, SideArray};
use anyhow::{anyhow, bail, ensure, Context, Result};

impl GameState {
    /// Convert state to FEN notation
    /// <rows> <to_move> <beads> <captured> <moves> <locked> <idle> <difficulty> <statue_locks> <budgets> <outcome>
    /// - Each field is separated by a single space.
    /// - Per-side pairs are separated by '|', red first.
    /// - '-' marks an absent cell, lock or budget.
    pub fn to_fen(&self) -> Result<String> {
        let mut fields = Vec::with_capacity(11);

        fields.push(self.board.to_fen());

        fields.push(match self.side_to_move() {
            Some(side) => side.to_char().to_string(),
            None => "-".to_string(),
        });

        fields.push(pair_to_fen(&self.players, |p| p.beads.to_string()));
        fields.push(pair_to_fen(&self.players, |p| p.captured.to_string()));
        fields.push(pair_to_fen(&self.players, |p| p.moves.to_string()));

        fields.push(loc_to_fen(self.locked_cell));
        fields.push(self.idle_moves.to_string());
        fields.push(self.difficulty.to_index()?.to_string());

        fields.push(pair_to_fen(&self.players, |p| loc_to_fen(p.locked_statue)));
        fields.push(pair_to_fen(&self.players, |p| {
            p.budget.map_or_else(|| "-".to_string(), |budget| budget.to_string())
        }));

        fields.push(match self.outcome {
            None => "-".to_string(),
            Some(Outcome::Draw) => "draw".to_string(),
            Some(Outcome::Win { winner, cause }) => format!("{}:{}", winner.to_char(), cause.tag()),
        });

        Ok(fields.join(" "))
    }

    /// Parse state from FEN notation, see [`GameState::to_fen`]
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();

        let board = Board::from_fen(parts.next().context("Missing board rows")?)?;

        let to_move = match parts.next().context("Missing side to move")? {
            "-" => None,
            s => Some(s.parse::<Side>().context("Invalid side to move")?),
        };

        let beads = parse_pair::<u32>(parts.next().context("Missing bead reserves")?)
            .context("Invalid bead reserves")?;
        let captured = parse_pair::<u32>(parts.next().context("Missing capture counts")?)
            .context("Invalid capture counts")?;
        let moves = parse_pair::<u32>(parts.next().context("Missing move counts")?)
            .context("Invalid move counts")?;

        let locked_cell = parse_loc(parts.next().context("Missing locked cell")?)
            .context("Invalid locked cell")?;

        if let Some(loc) = locked_cell {
            ensure!(loc.in_bounds(board.size()), "Locked cell {} is off the board", loc);
        }

        let idle_moves = parts
            .next()
            .context("Missing idle counter")?
            .parse::<u32>()
            .context("Invalid idle counter")?;

        let difficulty_idx = parts
            .next()
            .context("Missing difficulty")?
            .parse::<usize>()
            .context("Invalid difficulty")?;
        let difficulty = Difficulty::from_index(difficulty_idx)?;

        let statue_locks: Vec<_> = parts
            .next()
            .context("Missing statue locks")?
            .split('|')
            .map(parse_loc)
            .collect::<Result<_>>()
            .context("Invalid statue locks")?;
        ensure!(statue_locks.len() == 2, "Invalid statue locks format");

        let budgets = parse_pair::<Budget>(parts.next().context("Missing move budgets")?)
            .context("Invalid move budgets")?;

        let outcome = parse_outcome(parts.next().context("Missing outcome")?)?;

        ensure!(parts.next().is_none(), "Trailing fields after outcome");
        ensure!(
            to_move.is_none() == outcome.is_some(),
            "Side to move must be '-' exactly when the game is over"
        );
        if let Some(side) = to_move {
            ensure!(budgets[side.to_index()?].0 != Some(0), "{} is to move with no moves left", side);
        }

        let mut players = SideArray::splat(Player::default());
        for (i, side) in Side::all().into_iter().enumerate() {
            players[side] = Player {
                beads: beads[i],
                captured: captured[i],
                active: to_move == Some(side),
                moves: moves[i],
                locked_statue: statue_locks[i],
                budget: budgets[i].0,
            };
        }

        Ok(Self {
            board,
            players,
            locked_cell,
            idle_moves,
            outcome,
            difficulty,
        })
    }
}

impl Board {
    /// Rows top to bottom separated by '/', digit runs for empty cells
    pub fn to_fen(&self) -> String {
        let size = self.size() as i32;
        let mut rows = Vec::with_capacity(self.size());

        for row in 0..size {
            let mut fen = String::new();
            let mut empty = 0;

            for col in 0..size {
                match self.get(Loc::new(row, col)).and_then(|cell| cell.to_fen_char()) {
                    Some(c) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(c);
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            rows.push(fen);
        }

        rows.join("/")
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let rows: Vec<_> = fen.split('/').collect();
        let size = rows.len();

        ensure!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "Invalid board size {}",
            size
        );

        let mut board = Board::new(size);

        for (row, row_fen) in rows.iter().enumerate() {
            let mut col = 0;
            let mut chars = row_fen.chars().peekable();

            while let Some(c) = chars.next() {
                if let Some(digit) = c.to_digit(10) {
                    let mut run = digit as usize;
                    while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                        run = run
                            .checked_mul(10)
                            .and_then(|run| run.checked_add(next as usize))
                            .filter(|run| *run <= size)
                            .with_context(|| format!("Run of empty cells in row {} is longer than {}", row, size))?;
                        chars.next();
                    }
                    ensure!(run > 0, "Empty run of zero cells in row {}", row);
                    ensure!(col + run <= size, "Row {} is longer than {}", row, size);
                    col += run;
                    continue;
                }

                let cell = Cell::from_fen_char(c)
                    .ok_or_else(|| anyhow!("Invalid cell '{}' in row {}", c, row))?;
                ensure!(col < size, "Row {} is longer than {}", row, size);

                board.set(Loc::new(row as i32, col as i32), cell);
                col += 1;
            }

            ensure!(col == size, "Row {} has {} cells, expected {}", row, col, size);
        }

        Ok(board)
    }
}

fn pair_to_fen<F>(players: &SideArray<Player>, field: F) -> String
where
    F: Fn(&Player) -> String,
{
    format!("{}|{}", field(&players[Side::Red]), field(&players[Side::Blue]))
}

fn loc_to_fen(loc: Option<Loc>) -> String {
    loc.map_or_else(|| "-".to_string(), |loc| loc.to_string())
}

fn parse_pair<T>(s: &str) -> Result<[T; 2]>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let (red, blue) = s.split_once('|').context("Expected a red|blue pair")?;
    Ok([red.parse()?, blue.parse()?])
}

/// Remaining moves, '-' when unlimited
struct Budget(Option<u32>);

impl std::str::FromStr for Budget {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Budget(None)),
            s => s.parse().map(|budget| Budget(Some(budget))),
        }
    }
}

fn parse_loc(s: &str) -> Result<Option<Loc>> {
    match s {
        "-" => Ok(None),
        s => Ok(Some(s.parse()?)),
    }
}

fn parse_outcome(s: &str) -> Result<Option<Outcome>> {
    Ok(match s {
        "-" => None,
        "draw" => Some(Outcome::Draw),
        s => {
            let (side, cause) = s.split_once(':').context("Invalid outcome")?;
            let mut side_chars = side.chars();
            let winner = match (side_chars.next().and_then(Side::from_char), side_chars.next()) {
                (Some(winner), None) => winner,
                _ => bail!("Invalid winner '{}'", side),
            };
            Some(Outcome::Win { winner, cause: WinCause::from_tag(cause)? })
        }
    })
}
