use crate::error::{AppError, AppResult};
use crate::search::SearchEngine;

const USAGE: &str = "tabhome [-y] [refresh | add <name> <url> [icon] | delete <index> | \
                     engine <google|bing|baidu> | search <query...>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Refresh,
    Add {
        name: String,
        url: String,
        icon: String,
    },
    Delete {
        index: usize,
    },
    Engine(SearchEngine),
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub command: Command,
    pub assume_yes: bool,
}

impl StartupConfig {
    pub fn from_args() -> AppResult<Self> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> AppResult<Self> {
        let mut assume_yes = false;
        let mut rest = Vec::new();
        for arg in args {
            match arg.as_str() {
                "-y" | "--yes" => assume_yes = true,
                _ => rest.push(arg),
            }
        }

        let command = match rest.split_first() {
            None => Command::Show,
            Some((name, tail)) => parse_command(name, tail)?,
        };
        Ok(Self {
            command,
            assume_yes,
        })
    }
}

fn parse_command(name: &str, tail: &[String]) -> AppResult<Command> {
    match (name, tail) {
        ("show", []) => Ok(Command::Show),
        ("refresh", []) => Ok(Command::Refresh),
        ("add", [name, url]) => Ok(Command::Add {
            name: name.clone(),
            url: url.clone(),
            icon: String::new(),
        }),
        ("add", [name, url, icon]) => Ok(Command::Add {
            name: name.clone(),
            url: url.clone(),
            icon: icon.clone(),
        }),
        ("delete", [index]) => index
            .parse()
            .map(|index| Command::Delete { index })
            .map_err(|_| usage_error(format!("invalid index `{index}`"))),
        ("engine", [id]) => SearchEngine::from_id(id)
            .map(Command::Engine)
            .ok_or_else(|| usage_error(format!("unknown engine `{id}`"))),
        ("search", words) if !words.is_empty() => Ok(Command::Search(words.join(" "))),
        _ => Err(usage_error(format!("unrecognised arguments for `{name}`"))),
    }
}

fn usage_error(detail: String) -> AppError {
    AppError::Usage(format!("{detail}\n{USAGE}"))
}
