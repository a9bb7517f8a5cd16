use crate::render::render_screen;
use covoimmo::workflows::colocation::{
    ListingCatalog, ListingId, ProfileFieldError, ProfileUpdate, SessionService, Step,
    Transition, Trigger,
};
use std::fmt;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  continue | search | select <id> | back | contact | generate
  set <name|age|lifestyle|pets|smoker> <value>
  draft <text> | send [text]
  contract   generate the contract from any screen
  show | json | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Navigate(Trigger),
    Set(ProfileUpdate),
    Draft(String),
    Send(Option<String>),
    Contract,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellParseError {
    Unknown(String),
    MissingArgument(&'static str),
    Profile(ProfileFieldError),
}

impl fmt::Display for ShellParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellParseError::Unknown(word) => {
                write!(f, "unknown command '{}', try 'help'", word)
            }
            ShellParseError::MissingArgument(usage) => write!(f, "usage: {}", usage),
            ShellParseError::Profile(err) => write!(f, "{}", err),
        }
    }
}

/// Parses one input line. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> Result<Option<ShellCommand>, ShellParseError> {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };

    let command = match word.to_lowercase().as_str() {
        "continue" | "continuer" => ShellCommand::Navigate(Trigger::Continue),
        "search" | "rechercher" => ShellCommand::Navigate(Trigger::Search),
        "back" | "retour" => ShellCommand::Navigate(Trigger::Back),
        "contact" => ShellCommand::Navigate(Trigger::Contact),
        "generate" => ShellCommand::Navigate(Trigger::GenerateContract),
        "select" => {
            let id = rest
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or(ShellParseError::MissingArgument("select <id>"))?;
            ShellCommand::Navigate(Trigger::SelectListing {
                listing_id: ListingId::from(id),
            })
        }
        "set" => {
            let (field, value) = rest
                .map(str::trim_start)
                .and_then(|args| args.split_once(' ').or(Some((args, ""))))
                .filter(|(field, _)| !field.is_empty())
                .ok_or(ShellParseError::MissingArgument("set <field> <value>"))?;
            let update = ProfileUpdate::parse(field, value).map_err(ShellParseError::Profile)?;
            ShellCommand::Set(update)
        }
        "draft" => ShellCommand::Draft(rest.unwrap_or_default().to_string()),
        "send" => ShellCommand::Send(rest.map(str::to_string)),
        "contract" => ShellCommand::Contract,
        "show" => ShellCommand::Show,
        "json" => ShellCommand::Json,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ShellParseError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Line-driven renderer: reads commands, dispatches them, redraws on change.
pub(crate) fn run_shell<R, W, C>(
    input: R,
    out: &mut W,
    service: &mut SessionService<C>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: ListingCatalog + 'static,
{
    writeln!(out, "CovoImmo shell, type 'help' for commands")?;
    render_screen(out, service)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Navigate(trigger) => {
                let label = trigger.label();
                match service.navigate(trigger) {
                    Transition::Moved { .. } => render_screen(out, service)?,
                    Transition::Ignored { step, reason } => writeln!(
                        out,
                        "{label} ignored on {} ({})",
                        step.label(),
                        reason.label()
                    )?,
                }
            }
            ShellCommand::Set(update) => {
                service.set_profile_field(update);
                render_screen(out, service)?;
            }
            ShellCommand::Draft(text) => {
                service.set_draft(text);
                render_screen(out, service)?;
            }
            ShellCommand::Send(text) => {
                let sent = match text {
                    Some(text) => service.send_message(text),
                    None => service.send_draft(),
                };
                if sent {
                    render_screen(out, service)?;
                }
            }
            ShellCommand::Contract => {
                let text = service.generate_contract();
                if service.session().step() == Step::Contract {
                    render_screen(out, service)?;
                } else {
                    writeln!(out, "{text}")?;
                }
            }
            ShellCommand::Show => render_screen(out, service)?,
            ShellCommand::Json => {
                let payload = serde_json::to_string_pretty(&service.snapshot())
                    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
                writeln!(out, "{payload}")?;
            }
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}
