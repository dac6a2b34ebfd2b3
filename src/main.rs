//! Battle Center - Interactive Entry Point
//!
//! Usage: `battle-center <num-types> <capacity-per-type> <roster-file>`
//!
//! Loads the roster into a matching engine, then runs a numbered menu on
//! stdin. Set `RUST_LOG` (default `warn`) to see engine events on stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use battle_center::creature::{Creature, CreatureRules};
use battle_center::engine::MatchingEngine;
use battle_center::loader::{load_roster_file, LoadError};
use battle_center::types::{BattleError, FightOutcome};

const MENU: &str = "Please choose one of the following numbers:\n\
    1 : Print all Pokemons by types\n\
    2 : Print all Pokemons types\n\
    3 : Insert Pokemon to battles training camp\n\
    4 : Remove strongest Pokemon by type\n\
    5 : Fight\n\
    6 : Exit";

type Engine = MatchingEngine<CreatureRules>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (hint, capacity, path) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            let program = args.first().map_or("battle-center", String::as_str);
            eprintln!("usage: {program} <num-types> <capacity-per-type> <roster-file>");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match load_roster_file(path, capacity, hint) {
        Ok(engine) => engine,
        Err(LoadError::Engine(BattleError::Allocation(_)))
        | Err(LoadError::Rejected { source: BattleError::Allocation(_), .. }) => {
            println!("No memory available.");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            error!(error = %err, "failed to load roster");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        println!("{MENU}");
        let Some(choice) = prompt(&mut input, None) else {
            break;
        };
        match choice.as_str() {
            "1" => match engine.try_render() {
                Ok(text) => print!("{text}"),
                Err(BattleError::Allocation(_)) => {
                    println!("No memory available.");
                    return ExitCode::FAILURE;
                }
                Err(err) => error!(error = %err, "failed to print categories"),
            },
            "2" => print_types(&engine),
            "3" => insert_creature(&mut engine, &mut input),
            "4" => remove_strongest(&mut engine, &mut input),
            "5" => fight(&engine, &mut input),
            "6" => break,
            _ => println!("Please choose a valid number."),
        }
    }

    println!("All the memory cleaned and the program is safely closed.");
    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Option<(usize, usize, &str)> {
    match args {
        [_, hint, capacity, path] => Some((hint.parse().ok()?, capacity.parse().ok()?, path.as_str())),
        _ => None,
    }
}

/// Print `question` (if any) and read one trimmed line; `None` on EOF
fn prompt(input: &mut impl BufRead, question: Option<&str>) -> Option<String> {
    if let Some(question) = question {
        println!("{question}");
    }
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
    }
}

/// Ask for a type name and check it exists
fn prompt_type(engine: &Engine, input: &mut impl BufRead, question: &str) -> Option<String> {
    let name = prompt(input, Some(question))?;
    if engine.ops().chart().contains(&name) {
        Some(name)
    } else {
        println!("Type name doesn't exist.");
        None
    }
}

fn prompt_creature(input: &mut impl BufRead, kind: &str) -> Option<Creature> {
    let name = prompt(input, Some("Please enter Pokemon name:"))?;
    let species = prompt(input, Some("Please enter Pokemon species:"))?;
    let height = prompt(input, Some("Please enter Pokemon height:"))?;
    let weight = prompt(input, Some("Please enter Pokemon weight:"))?;
    let attack = prompt(input, Some("Please enter Pokemon attack:"))?;

    Some(Creature::new(
        name,
        species,
        height.trim().parse().unwrap_or(0.0),
        weight.trim().parse().unwrap_or(0.0),
        attack.trim().parse().unwrap_or(0),
        kind,
    ))
}

fn print_types(engine: &Engine) {
    for entry in engine.ops().chart().iter() {
        print!("{}", entry.summary(engine.count_in(&entry.name)));
    }
}

fn insert_creature(engine: &mut Engine, input: &mut impl BufRead) {
    let Some(kind) = prompt_type(engine, input, "Please enter Pokemon type name:") else {
        return;
    };
    if engine.count_in(&kind) >= engine.capacity() {
        println!("Type at full capacity.");
        return;
    }
    let Some(creature) = prompt_creature(input, &kind) else {
        return;
    };

    match engine.insert(&creature) {
        Ok(()) => {
            println!("The Pokemon was successfully added.");
            print!("{creature}");
        }
        Err(err) => error!(error = %err, "insert failed"),
    }
}

fn remove_strongest(engine: &mut Engine, input: &mut impl BufRead) {
    let Some(kind) = prompt_type(engine, input, "Please enter type name:") else {
        return;
    };
    match engine.remove_strongest(&kind) {
        Some(strongest) => {
            println!("The strongest Pokemon was removed:");
            print!("{strongest}");
        }
        None => println!("There is no Pokemon to remove."),
    }
}

fn fight(engine: &Engine, input: &mut impl BufRead) {
    let Some(kind) = prompt_type(engine, input, "Please enter Pokemon type name:") else {
        return;
    };
    let Some(challenger) = prompt_creature(input, &kind) else {
        return;
    };
    println!("You choose to fight with:");
    print!("{challenger}");

    match engine.fight(&challenger) {
        Ok(FightOutcome::NoOpponent) => println!("There are no Pokemons to fight against you."),
        Ok(FightOutcome::Decided(result)) => print!("{}", result.transcript(engine.ops(), &challenger)),
        Err(err) => error!(error = %err, "fight failed"),
    }
}
