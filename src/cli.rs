use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    ConfigPath,
    ConfigInit,
}

pub fn parse_args(args: &[String]) -> Result<Option<CliCommand>> {
    if args.len() <= 1 {
        return Ok(None);
    }

    let command = args.get(1).map(String::as_str);
    let subcommand = args.get(2).map(String::as_str);

    if command == Some("config") && subcommand == Some("path") {
        return Ok(Some(CliCommand::ConfigPath));
    }

    if command == Some("config") && subcommand == Some("init") {
        return Ok(Some(CliCommand::ConfigInit));
    }

    Ok(None)
}
