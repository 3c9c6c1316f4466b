//! Command line chess game with move validation, undo and reset.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chessgame_engine::coretypes::Move;
use chessgame_engine::fen::START_FEN;
use chessgame_engine::{Error, ErrorKind, GameId, GameService, MemoryGameStore, MoveRequest};

#[derive(Parser)]
#[command(name = "chessgame", version, about = "Play a game of chess from the command line")]
struct Cli {
    /// Position to start from, in FEN.
    #[arg(long, default_value = START_FEN)]
    fen: String,

    /// Log filter used when RUST_LOG is not set, e.g. `debug` or `chessgame_engine=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Owner of the game.
    #[arg(long, default_value = "local")]
    owner: String,
}

enum InputKind {
    Exit,
    Newgame,
    Help,
    Undo,
    Fen,
    Moves,
    Empty,
    Error(String),
    GameMove(MoveRequest),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [] => Self::Empty,
            ["exit" | "quit"] => Self::Exit,
            ["reset" | "newgame" | "ng"] => Self::Newgame,
            ["help"] => Self::Help,
            ["undo"] => Self::Undo,
            ["fen"] => Self::Fen,
            ["moves"] => Self::Moves,
            ["move", from, to] => Self::GameMove(MoveRequest::new(*from, *to, None)),
            ["move", from, to, promotion] => {
                Self::GameMove(MoveRequest::new(*from, *to, Some(*promotion)))
            }
            [word] => match word.parse::<Move>() {
                Ok(move_) => Self::GameMove(MoveRequest::from(move_)),
                Err(err) => Self::Error(format!("Invalid command {word:?}: {err}")),
            },
            _ => Self::Error(format!("Invalid command: {s}")),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("e2e4 | e7e8q => Move a piece, with an optional promotion piece of q, r, b, n.");
    println!("move <from> <to> [promotion] => Same, with squares given separately.");
    println!("undo => Take back the last move.");
    println!("reset | newgame | ng => Begin a new game from the start position.");
    println!("fen => Print the FEN of the current position.");
    println!("moves => List every legal move.");
    println!("help => Print this help text.");
    println!("exit => End CLI.");
}

/// User-facing description of a failed command.
fn describe(err: &Error) -> String {
    match err.kind() {
        ErrorKind::IllegalMove | ErrorKind::ExposesKing => format!("That move is illegal, {err}."),
        ErrorKind::MissingPromotion => format!("{err}. Add a piece, e.g. e7e8q."),
        ErrorKind::NoHistory => "There are no moves to undo.".to_string(),
        _ => format!("Error: {err}"),
    }
}

/// Prints the board and reports checkmate, stalemate or check.
fn print_game(service: &GameService<MemoryGameStore>, id: GameId, owner: &str) {
    let game = match service.game(id, owner) {
        Ok(game) => game,
        Err(err) => {
            println!("{}", describe(&err));
            return;
        }
    };
    let position = game.position();
    println!("{position}");
    if position.is_checkmate() {
        println!("CHECKMATE. {:?} wins. Enter reset to start a new game.", !position.side_to_move());
    } else if position.is_stalemate() {
        println!("The game is DRAWN via STALEMATE. Enter reset to start a new game.");
    } else if position.is_active_in_check() {
        println!("{:?} is in check.", position.side_to_move());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?,
        )
        .with_writer(io::stderr)
        .init();

    let service = GameService::new(MemoryGameStore::new());
    let owner = cli.owner.as_str();
    let id = service.create_game_from_fen(owner, &cli.fen)?;
    tracing::info!(game = %id, owner, "started game");

    println!("Chessgame CLI {}\n", env!("CARGO_PKG_VERSION"));
    print_game(&service, id, owner);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let result = match InputKind::from(input.trim()) {
            InputKind::Exit => break,
            InputKind::Empty => continue,
            InputKind::Help => {
                print_help();
                continue;
            }
            InputKind::Error(message) => {
                println!("{message}");
                continue;
            }
            InputKind::Fen => service.game_fen(id, owner).map(Some),
            InputKind::Moves => service.game(id, owner).map(|game| {
                let moves = game.position().get_legal_moves();
                let moves: Vec<String> = moves.iter().map(Move::to_string).collect();
                Some(format!("{} legal moves: {}", moves.len(), moves.join(" ")))
            }),
            InputKind::Undo => service.undo_move(id, owner).map(|_| None),
            InputKind::Newgame => service.reset_game(id, owner).map(|_| {
                println!("Starting new game...");
                None
            }),
            InputKind::GameMove(request) => service.make_move(id, owner, &request).map(|_| None),
        };

        // Moves print the board, queries print their answer.
        match result {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => print_game(&service, id, owner),
            Err(err) => println!("{}", describe(&err)),
        }
    }
    Ok(())
}
