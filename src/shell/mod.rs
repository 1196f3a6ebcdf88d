use std::env;
use std::io::{self, IsTerminal};
use std::path::Path;

use crate::{
    core::{config::Config, session::Session},
    error::ShellError,
    flags::Flags,
    fs::LocalFs,
    highlight::SyntaxHighlighter,
    input::{EditorInput, History, ScriptedInput, ShellCompleter},
};

/// The program as the user sees it: config, terminal input and a session
/// rooted at the directory the process started in.
pub struct Shell {
    session: Session,
    config: Config,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let config = Config::load(flags.get_value("config").map(Path::new))?;
        log::debug!("config: {:?}", config);

        let current_dir = env::current_dir()?;
        let session = Session::new(&current_dir, Box::new(LocalFs::new()));

        // Set up ctrl-c handler
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        Ok(Shell {
            session,
            config,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut stdout = io::stdout();

        if !io::stdin().is_terminal() {
            log::debug!("stdin is not a terminal, reading commands without line editing");
            let mut input = ScriptedInput::new(io::stdin().lock());
            return self.session.run(&mut input, &mut stdout);
        }

        if !self.flags.is_set("quiet") {
            let highlighter = SyntaxHighlighter::new(self.config.color);
            println!(
                "{}",
                highlighter.highlight_success(&format!(
                    "filesh {} - type 'help' for a list of commands",
                    env!("CARGO_PKG_VERSION")
                ))
            );
        }

        let completer = ShellCompleter::new(self.session.executor().command_names(), self.config.color);
        let history = History::new(self.config.history_file.clone(), self.config.history_size)?;
        let mut input = EditorInput::new(
            completer,
            history,
            self.config.history_size,
            self.flags.is_set("quiet"),
        )?;
        self.session.run(&mut input, &mut stdout)
    }
}
