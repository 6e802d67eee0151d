use std::io::{self, BufRead, Write};

use clap::{CommandFactory, Parser};
use colored::*;
use tracing::{info, info_span};

use babel_chat::cli::Args;
use babel_chat::config::ChatConfig;
use babel_chat::render::{banner, language_listing, render_log};
use babel_chat::{AlphabetTable, ConversationLog, RngSource, TurnController};

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("babel_chat={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn print_log(log: &ConversationLog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(log)?);
    } else {
        println!("{}", render_log(log));
    }
    Ok(())
}

fn run_session(
    ctl: &TurnController<'_>,
    rng: &mut RngSource,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", banner(ctl.table()));
    let stdin = io::stdin();
    let mut log = ConversationLog::new();
    let mut input = String::new();

    loop {
        print!("{} ", ">".bright_green());
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);
        if line.trim() == "/quit" {
            break;
        }

        let outcome = ctl.handle_submit(Some(line), log, rng);
        log = outcome.log;
        if outcome.processed {
            print_log(&log, json)?;
        }
    }

    info!(turns = log.turns(), "session ended");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "babel-chat", &mut io::stdout());
        return Ok(());
    }

    let table = AlphabetTable::builtin();
    if args.list_languages {
        println!("{}", language_listing(table));
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => ChatConfig::load(path)?,
        None => ChatConfig::default(),
    };
    let config = args.apply_to(config);
    let ctl = config.build_controller(table)?;
    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let session_id = uuid::Uuid::new_v4();
    let _span = info_span!("session", id = %session_id, mode = %ctl.mode()).entered();

    if let Some(text) = &args.once {
        let outcome = ctl.handle_submit(Some(text), ConversationLog::new(), &mut rng);
        return print_log(&outcome.log, args.json);
    }

    run_session(&ctl, &mut rng, args.json)
}
