//! Command line front-end for rendering money amounts.
//!
//! ```text
//! money_render_cli BRL 1234 560000000
//! money_render_cli --json '{"currencyCode":"BRL","units":1234,"nanos":560000000}'
//! money_render_cli --logo EUR
//! MONEY_RENDER_CLI_SCRIPT=1 money_render_cli < amounts.txt
//! ```

use std::{
    env,
    io::{self, BufRead, Write},
};

use colored::Colorize;

use crate::{
    config::ConfigManager,
    currency::{currency_logo, Money, MoneyFormatter},
    errors::FormatError,
};

/// When set to `1`, amounts are read line by line from stdin.
pub const SCRIPT_ENV_VAR: &str = "MONEY_RENDER_CLI_SCRIPT";

const USAGE: &str = "usage: money_render_cli <CODE> <UNITS> <NANOS> | --json <MONEY> | --logo <CODE>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Render(Money),
    Logo(String),
    Help,
}

/// Parses argv (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliCommand, FormatError> {
    match args {
        [flag] if flag == "--help" || flag == "-h" => Ok(CliCommand::Help),
        [flag, json] if flag == "--json" => {
            let money: Money = serde_json::from_str(json)?;
            Ok(CliCommand::Render(money))
        }
        [flag, code] if flag == "--logo" => Ok(CliCommand::Logo(code.clone())),
        [code, units, nanos] => Ok(CliCommand::Render(parse_money(code, units, nanos)?)),
        _ => Err(FormatError::InvalidInput(USAGE.into())),
    }
}

/// Usage text followed by the currency codes that have a dedicated rule.
pub fn usage(formatter: &MoneyFormatter) -> String {
    let codes: Vec<&str> = formatter.rules().codes().map(|code| code.as_str()).collect();
    format!("{USAGE}\ncurrencies with dedicated rules: {}", codes.join(", "))
}

fn parse_money(code: &str, units: &str, nanos: &str) -> Result<Money, FormatError> {
    let units = units
        .parse::<i64>()
        .map_err(|err| FormatError::InvalidInput(format!("units `{units}`: {err}")))?;
    let nanos = nanos
        .parse::<i32>()
        .map_err(|err| FormatError::InvalidInput(format!("nanos `{nanos}`: {err}")))?;
    Ok(Money::new(code, units, nanos))
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_script_line(line: &str) -> Result<Option<Money>, FormatError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let words = shell_words::split(trimmed)
        .map_err(|err| FormatError::InvalidInput(format!("`{trimmed}`: {err}")))?;
    match words.as_slice() {
        [code, units, nanos] => parse_money(code, units, nanos).map(Some),
        _ => Err(FormatError::InvalidInput(format!(
            "`{trimmed}`: expected <CODE> <UNITS> <NANOS>"
        ))),
    }
}

/// Renders every line of `input`, returning how many lines failed.
///
/// Processing stops at EOF or at a line reading `exit`.
pub fn run_script<R, W, E>(
    formatter: &MoneyFormatter,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<usize, FormatError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut failures = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim() == "exit" {
            break;
        }
        let rendered =
            parse_script_line(&line).and_then(|money| match money {
                Some(money) => formatter.try_render(&money).map(Some),
                None => Ok(None),
            });
        match rendered {
            Ok(Some(text)) => writeln!(out, "{text}")?,
            Ok(None) => {}
            Err(error) => {
                failures += 1;
                writeln!(err, "{} line {}: {error}", "Error:".red(), idx + 1)?;
            }
        }
    }
    out.flush()?;
    Ok(failures)
}

/// Entry point used by the `money_render_cli` binary.
pub fn run_cli() -> Result<(), FormatError> {
    let formatter = ConfigManager::new().load()?.formatter();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if env::var(SCRIPT_ENV_VAR).map(|v| v == "1").unwrap_or(false) {
        let stdin = io::stdin();
        let stderr = io::stderr();
        let failures = run_script(&formatter, stdin.lock(), &mut out, &mut stderr.lock())?;
        if failures > 0 {
            return Err(FormatError::InvalidInput(format!(
                "{failures} script line(s) failed"
            )));
        }
        return Ok(());
    }

    let args: Vec<String> = env::args().skip(1).collect();
    match parse_args(&args)? {
        CliCommand::Render(money) => writeln!(out, "{}", formatter.try_render(&money)?)?,
        CliCommand::Logo(code) => writeln!(out, "{}", currency_logo(&code))?,
        CliCommand::Help => writeln!(out, "{}", usage(&formatter))?,
    }
    Ok(())
}
