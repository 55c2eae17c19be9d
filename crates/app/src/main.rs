use std::fmt;
use std::io::{self, BufRead, Write};

use services::{QuestionBank, QuizView, SessionController};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLimit { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLimit { raw } => write!(f, "invalid --limit value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    limit: Option<usize>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--limit <n>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --limit <n>   cap the number of questions per quiz session");
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut limit = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--limit" => {
                    let value = args
                        .next()
                        .ok_or(ArgsError::MissingValue { flag: "--limit" })?;
                    let parsed: usize = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLimit { raw: value.clone() })?;
                    limit = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { limit })
    }
}

/// Print a prompt and read one trimmed line. `None` means stdin closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Drive one quiz session to completion, rendering controller view models.
fn run_quiz(controller: &mut SessionController) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = controller.request_quiz()?;
    loop {
        match view {
            QuizView::Question(ref question) => {
                println!();
                println!("{}", question.progress_label);
                println!("{}", question.question_text);
                for (index, option) in question.options.iter().enumerate() {
                    println!("  {}) {option}", index + 1);
                }

                let Some(input) = prompt("Answer (number, empty to skip): ")? else {
                    return Ok(());
                };
                // Anything that isn't a valid 1-based option number counts
                // as "no selection" and scores nothing.
                let selected = input.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
                view = controller.submit_answer(selected);
            }
            QuizView::Finished { final_score } => {
                println!();
                println!("Finished! Score: {final_score}");
                return Ok(());
            }
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut bank = QuestionBank::builtin();
    if let Some(limit) = args.limit {
        bank = bank.with_session_limit(limit);
    }
    let mut controller = SessionController::new(bank);

    println!("QUIZ TIME!");
    loop {
        let Some(identifier) = prompt("Email: ")? else {
            return Ok(());
        };
        let Some(password) = prompt("Password: ")? else {
            return Ok(());
        };
        match controller.submit_login(&identifier, &password) {
            Ok(_) => break,
            Err(err) => println!("{err}"),
        }
    }

    loop {
        let dashboard = controller.dashboard()?;
        println!();
        println!("Welcome, {}!", dashboard.role.role_name);
        println!("{}", dashboard.role.welcome_message);
        if let Some(score) = dashboard.last_score {
            println!("Last quiz score: {score}");
        }

        let Some(choice) = prompt("\n[1] Take quiz  [q] Quit > ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => run_quiz(&mut controller)?,
            "q" | "Q" => return Ok(()),
            other => println!("unknown choice: {other}"),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
