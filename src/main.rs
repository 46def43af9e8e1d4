use {
    advent::{day_registry, Args},
    clap::Parser,
    log::LevelFilter,
};

fn main() {
    let args: Args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.question_args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    day_registry().run(&args);
}
