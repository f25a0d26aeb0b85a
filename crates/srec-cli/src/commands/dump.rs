use super::run_common::{PatternSource, compile_or_exit};

pub struct DumpArgs {
    pub source: PatternSource,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern = args.source.load_or_exit();
    let automaton = compile_or_exit(&args.source, &pattern, args.color);

    if args.json {
        match serde_json::to_string_pretty(&automaton) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize graph: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", automaton.dump_colored(args.color));
}
