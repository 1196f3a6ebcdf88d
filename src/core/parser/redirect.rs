#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    None,
    Overwrite,
    Append,
}

impl RedirectMode {
    pub fn operator(&self) -> &'static str {
        match self {
            RedirectMode::None => "",
            RedirectMode::Overwrite => ">",
            RedirectMode::Append => ">>",
        }
    }
}

/// Where `cat` sends its output and what it reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSpec {
    pub mode: RedirectMode,
    pub target: Option<String>,
    pub sources: Vec<String>,
}

/// Scans `args` for the first `>` or `>>`.
///
/// Everything before the operator is a source, the token right after it is
/// the target. An operator in last position is returned as `Err` carrying
/// the operator text.
pub fn parse_redirect(args: &[String]) -> Result<RedirectSpec, &'static str> {
    let found = args.iter().enumerate().find_map(|(i, arg)| match arg.as_str() {
        ">" => Some((i, RedirectMode::Overwrite)),
        ">>" => Some((i, RedirectMode::Append)),
        _ => None,
    });

    let Some((index, mode)) = found else {
        return Ok(RedirectSpec {
            mode: RedirectMode::None,
            target: None,
            sources: args.to_vec(),
        });
    };

    let target = args.get(index + 1).ok_or(mode.operator())?;
    if args.len() > index + 2 {
        log::debug!("ignoring tokens after redirect target: {:?}", &args[index + 2..]);
    }

    Ok(RedirectSpec {
        mode,
        target: Some(target.clone()),
        sources: args[..index].to_vec(),
    })
}
