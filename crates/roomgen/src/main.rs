//! Room generator
//!
//! Builds a single room, either the starting room or one attached to a
//! corridor end, and prints it as a digit grid or JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rg_core::dungeon::{CorridorEndpoint, Direction, IntRange, Room};
use rg_core::{GenOptions, RoomError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Grid,
    Json,
}

/// Generate a dungeon room
#[derive(Parser, Debug)]
#[command(name = "roomgen")]
#[command(author, version, about = "Place a room and fill it with obstacles", long_about = None)]
struct Args {
    /// JSON options file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Board width in tiles
    #[arg(long = "columns")]
    columns: Option<i32>,

    /// Board height in tiles
    #[arg(long = "rows")]
    rows: Option<i32>,

    #[arg(long = "width-min")]
    width_min: Option<i32>,

    #[arg(long = "width-max")]
    width_max: Option<i32>,

    #[arg(long = "height-min")]
    height_min: Option<i32>,

    #[arg(long = "height-max")]
    height_max: Option<i32>,

    /// Corridor end as DIRECTION,X,Y (e.g. north,10,4); omit for the starting room
    #[arg(long = "corridor", value_parser = parse_corridor)]
    corridor: Option<CorridorEndpoint>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,
}

fn parse_corridor(s: &str) -> Result<CorridorEndpoint, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [direction, x, y] = parts.as_slice() else {
        return Err(format!("expected DIRECTION,X,Y, got '{s}'"));
    };
    let direction =
        Direction::from_str(direction).map_err(|_| format!("unknown direction '{direction}'"))?;
    let end_x = x.parse().map_err(|_| format!("invalid x '{x}'"))?;
    let end_y = y.parse().map_err(|_| format!("invalid y '{y}'"))?;
    Ok(CorridorEndpoint::new(direction, end_x, end_y))
}

/// Options file (or defaults) with command-line overrides applied
fn resolve_options(args: &Args) -> Result<GenOptions, RoomError> {
    let mut options = match &args.config {
        Some(path) => GenOptions::load_from_file(path)?,
        None => GenOptions::default(),
    };

    if args.seed.is_some() {
        options.seed = args.seed;
    }
    options.columns = args.columns.unwrap_or(options.columns);
    options.rows = args.rows.unwrap_or(options.rows);
    options.room_width = IntRange::new(
        args.width_min.unwrap_or(options.room_width.min),
        args.width_max.unwrap_or(options.room_width.max),
    );
    options.room_height = IntRange::new(
        args.height_min.unwrap_or(options.room_height.min),
        args.height_max.unwrap_or(options.room_height.max),
    );

    options.validate()?;
    Ok(options)
}

/// Header line followed by content rows, top row first
fn render_grid(room: &Room) -> String {
    let entering = room
        .entering_direction()
        .map_or_else(|| "none".to_string(), |d| d.to_string());
    let mut out = format!(
        "room {}x{} at ({}, {}) entering {}\n",
        room.width(),
        room.height(),
        room.x(),
        room.y(),
        entering
    );
    for y in (0..room.height()).rev() {
        out.extend(room.content().row(y).map(|code| char::from(b'0' + code)));
        out.push('\n');
    }
    out
}

fn run(args: &Args) -> Result<String, RoomError> {
    let options = resolve_options(args)?;
    let board = options.board();
    let mut rng = options.rng();
    tracing::info!(
        seed = rng.seed(),
        columns = board.columns,
        rows = board.rows,
        "generating room"
    );

    let room = match &args.corridor {
        Some(corridor) => {
            if !board.contains(corridor.end_x, corridor.end_y) {
                return Err(RoomError::CorridorOffBoard {
                    x: corridor.end_x,
                    y: corridor.end_y,
                });
            }
            Room::anchored(options.room_width, options.room_height, board, corridor, &mut rng)
        }
        None => Room::bootstrap(board),
    };

    match args.format {
        OutputFormat::Grid => Ok(render_grid(&room)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&room).map_err(|e| RoomError::Output(e.to_string()))
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("roomgen: {e}");
            ExitCode::FAILURE
        }
    }
}
