use srec_lib::{Colors, MatchMode, PrintCompileTracer, PrintTracer, Verbosity};

use super::run_common::{PatternSource, compile_traced_or_exit};

pub struct TraceArgs {
    pub source: PatternSource,
    pub text: Option<String>,
    pub full: bool,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let Some(text) = args.text.as_deref() else {
        eprintln!("error: text to match is required");
        std::process::exit(1);
    };

    let pattern = args.source.load_or_exit();
    let colors = Colors::new(args.color);

    let mut compile_tracer = PrintCompileTracer::new(args.verbosity, colors);
    let automaton =
        compile_traced_or_exit(&args.source, &pattern, &mut compile_tracer, args.color);

    println!("{}compile{} {}", colors.dim, colors.reset, pattern);
    compile_tracer.print();
    println!();

    let mode = if args.full {
        MatchMode::Full
    } else {
        MatchMode::Prefix
    };
    let mut tracer = PrintTracer::new(args.verbosity, colors);
    let result = automaton.run_traced(text, mode, &mut tracer);

    println!("{}match{} {:?}", colors.dim, colors.reset, text);
    tracer.print();
    println!();

    match result {
        Some(m) => println!(
            "{}true{} (consumed {} of {} bytes)",
            colors.green,
            colors.reset,
            m.end(),
            text.len()
        ),
        None => println!("{}false{}", colors.red, colors.reset),
    }
}
