use crate::error::ShellError;
use std::collections::BTreeMap;

/// Process-level options. Running with none of them gives the plain REPL.
#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }

    fn with_value(mut self) -> Self {
        self.takes_value = true;
        self
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();
        flags.insert("help", Flag::new("-h", "--help", "Print this help message"));
        flags.insert("version", Flag::new("-v", "--version", "Show version information"));
        flags.insert(
            "config",
            Flag::new("-c", "--config", "Read settings from this file instead of ~/.fileshrc")
                .with_value(),
        );
        flags.insert(
            "quiet",
            Flag::new("-q", "--quiet", "Suppress the banner and history warnings"),
        );
        flags.insert("debug", Flag::new("-d", "--debug", "Enable debug logging"));

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag: {}", arg)))?;

            flag.value = if flag.takes_value {
                let value = args.next().ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                Some(value.clone())
            } else {
                Some("true".to_string())
            };
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: filesh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            println!("  {}, {:<17} {}", flag.short, long, flag.description);
        }
    }
}
