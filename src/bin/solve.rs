use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_solver::CLIArgs;

fn main() -> Result<()> {
    if std::env::var("MAZE_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let args = CLIArgs::parse();
    let puzzle = maze_solver::read_puzzle(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;
    info!(
        "Solving {}x{} maze from {} to {}.",
        puzzle.grid().width(),
        puzzle.grid().height(),
        puzzle.start(),
        puzzle.end()
    );

    let path = puzzle.solve().with_context(|| {
        format!(
            "Failed to search path from {} to {} in given maze.",
            puzzle.start(),
            puzzle.end()
        )
    })?;
    if let Some(path) = path {
        print!("{}", maze_solver::render(puzzle.grid(), &path));
        println!(
            "It takes {} step(s) moving from {} to {}.",
            path.steps_n(),
            path.start(),
            path.end()
        );
    } else {
        eprintln!(
            "There's no path from {} to {} in given maze.",
            puzzle.start(),
            puzzle.end()
        );
    }

    Ok(())
}
