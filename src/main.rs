use std::{
    env::args,
    fs,
    io::{stdout, Write},
    process::exit,
    thread,
    time::Duration,
};

pub use utils::Pos;
mod utils;

pub use universe::{rules, Universe, UniverseError};
mod universe;

pub use view::{render, RenderError};
mod view;

const FRAME_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_WIDTH: i32 = 20;
const DEFAULT_HEIGHT: i32 = 20;

fn deserialize(text: &str) -> Vec<Pos> {
    text.lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, c)| *c == '#')
                .map(move |(x, _)| pos!(x as i32, y as i32))
        })
        .collect()
}

#[test]
fn test_deserialize() {
    let parsed = deserialize(".#.\n..#\n###\n");
    let expected = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    assert_eq!(parsed.len(), expected.len());
    for (x, y) in expected {
        assert!(parsed.contains(&pos!(x, y)));
    }
}

pub fn main() {
    let mut universe = match args().nth(1) {
        Some(path) => {
            let content = fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!("[error] could not read pattern {path}: {err}");
                exit(1);
            });
            Universe::from_cells(deserialize(&content))
        }
        None => Universe::randomized(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap_or_else(|err| {
            eprintln!("[error] {err}");
            exit(1);
        }),
    };

    display(&universe);
    while universe.step() {
        thread::sleep(FRAME_INTERVAL);
        display(&universe);
    }
}

fn display(universe: &Universe) {
    let clear = termion::clear::All;
    let goto = termion::cursor::Goto(1, 1);
    match render(universe) {
        Ok(frame) => print!("{clear}{goto}{frame}"),
        Err(RenderError::EmptyUniverse) => println!("{clear}{goto}every cell died"),
    }
    stdout().flush().unwrap();
}
