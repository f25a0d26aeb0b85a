use super::run_common::{PatternSource, compile_or_exit};

pub struct CheckArgs {
    pub source: PatternSource,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let pattern = args.source.load_or_exit();
    compile_or_exit(&args.source, &pattern, args.color);

    // Silent on success (like cargo check)
}
