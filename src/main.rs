use filesh::flags::Flags;
use filesh::highlight::SyntaxHighlighter;
use filesh::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", e);
        flags.print_help();
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("filesh {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let default_level = if flags.is_set("debug") { "debug" } else { "warn" };
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if flags.is_set("debug") {
        logger.filter_module("filesh", log::LevelFilter::Debug);
    }
    logger.init();

    let result = Shell::new(flags).and_then(|mut shell| shell.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", SyntaxHighlighter::new(true).highlight_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
