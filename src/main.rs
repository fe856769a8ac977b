use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use colored::Colorize;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tiny_typeck::{typecheck, Context, LocalName, Term, Type, TypeError};
use tracing::Level;

fn main() -> ExitCode {
    let matches = command!()
        .subcommand_required(true)
        .arg(arg!(-v --verbose ... "Log more, repeat for even more").action(ArgAction::Count))
        .subcommand(
            Command::new("check")
                .about("Type check a term given as JSON")
                .arg(
                    arg!(<term> "The JSON file with the term")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--env <file> "A JSON object mapping variable names to types")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("equal")
                .about("Decide whether two types are equal")
                .arg(arg!(<left> "The first type").value_parser(value_parser!(PathBuf)))
                .arg(arg!(<right> "The second type").value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("subtype")
                .about("Decide whether the first type is a subtype of the second")
                .arg(arg!(<left> "The candidate subtype").value_parser(value_parser!(PathBuf)))
                .arg(arg!(<right> "The expected supertype").value_parser(value_parser!(PathBuf))),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("check", args)) => run_check(args),
        Some(("equal", args)) => run_compare(args, Type::is_equal_to),
        Some(("subtype", args)) => run_compare(args, Type::is_subtype_of),
        _ => unreachable!(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message.bright_red());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: DeserializeOwned>(file: &Path) -> Result<T, String> {
    let code = fs::read_to_string(file)
        .map_err(|err| format!("Could not read {}: {}", file.display(), err))?;
    serde_json::from_str(&code)
        .map_err(|err| format!("Invalid JSON in {}: {}", file.display(), err))
}

fn read_type(file: &Path) -> Result<Type, String> {
    let typ: Type = read_json(file)?;
    typ.validate().map_err(|err| report(&err))?;
    Ok(typ)
}

fn report(error: &TypeError) -> String {
    format!("{:?}", error.to_report())
}

fn run_check(args: &ArgMatches) -> Result<(), String> {
    let Some(file) = args.get_one::<PathBuf>("term") else {
        return Err("No term given".to_owned());
    };
    let term: Term = read_json(file)?;

    let mut context = Context::new();
    if let Some(env_file) = args.get_one::<PathBuf>("env") {
        let env: IndexMap<LocalName, Type> = read_json(env_file)?;
        for (name, typ) in &env {
            typ.validate()
                .map_err(|err| format!("In the type of `{}`: {}", name, report(&err)))?;
        }
        context = env.into_iter().collect();
    }

    for (name, typ) in context.variables() {
        tracing::debug!("{}: {}", name, typ);
    }
    tracing::debug!("Checking {}", file.display());
    let result = stacker::grow(32 * 1024 * 1024, || typecheck(&term, &context));
    tracing::debug!("Checked {}", file.display());

    match result {
        Ok(typ) => {
            println!("{}", typ.to_string().bright_green());
            Ok(())
        }
        Err(error) => Err(report(&error)),
    }
}

fn run_compare(
    args: &ArgMatches,
    compare: fn(&Type, &Type) -> Result<bool, TypeError>,
) -> Result<(), String> {
    let (Some(left), Some(right)) = (
        args.get_one::<PathBuf>("left"),
        args.get_one::<PathBuf>("right"),
    ) else {
        return Err("Two types are required".to_owned());
    };
    let left = read_type(left)?;
    let right = read_type(right)?;

    let holds = stacker::grow(32 * 1024 * 1024, || compare(&left, &right))
        .map_err(|err| report(&err))?;
    tracing::debug!("{} against {}: {}", left, right, holds);
    if holds {
        println!("{}", "true".bright_green());
    } else {
        println!("{}", "false".yellow());
    }
    Ok(())
}
