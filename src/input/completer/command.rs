use rustyline::completion::Pair;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(commands: Vec<&'static str>) -> Self {
        let mut commands = commands;
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.commands.binary_search(&name).is_ok()
    }

    pub fn complete_command(&self, line: &str) -> Vec<Pair> {
        let input = line.trim();
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
