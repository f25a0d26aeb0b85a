use std::io::{self, BufRead};

use srec_lib::Automaton;

use super::pattern_loader::strip_line_ending;
use super::run_common::{PatternSource, compile_or_exit};

pub struct MatchArgs {
    pub source: PatternSource,
    pub texts: Vec<String>,
    pub full: bool,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    if args.texts.is_empty() && args.source.reads_stdin() {
        eprintln!("error: stdin cannot supply both the pattern and the texts");
        std::process::exit(1);
    }

    let pattern = args.source.load_or_exit();
    let automaton = compile_or_exit(&args.source, &pattern, args.color);

    if !args.texts.is_empty() {
        for text in &args.texts {
            println!("{}", is_match(&automaton, text, args.full));
        }
        return;
    }

    let stdin = io::stdin();
    let mut line = String::new();
    let mut lock = stdin.lock();
    loop {
        line.clear();
        match lock.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let text = strip_line_ending(&line);
                println!("{}", is_match(&automaton, text, args.full));
            }
            Err(e) => {
                eprintln!("error: failed to read stdin: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn is_match(automaton: &Automaton, text: &str, full: bool) -> bool {
    if full {
        automaton.is_full_match(text)
    } else {
        automaton.is_match(text)
    }
}
