//! Interactive shell.
//!
//! Comments and reactions only live in memory, so they are reachable from
//! here and nowhere else.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use treasury_application::TreasuryApp;
use treasury_core::error::TreasuryError;
use treasury_core::event::{EventId, ReactionKind};
use treasury_core::format::format_address;

use super::forms::{self, ApplyArgs, ReportArgs};
use super::{events, session, withdraw};

const COMMANDS: &[&str] = &[
    "help",
    "status",
    "dashboard",
    "connect",
    "disconnect",
    "withdraw",
    "apply",
    "report",
    "events",
    "stats",
    "comment",
    "whisper",
    "like",
    "dislike",
    "attest",
    "comments",
    "reactions",
    "quit",
];

const HELP: &str = "\
  status | dashboard | events | stats
  connect | disconnect
  withdraw <amount>
  apply <flags>             same flags as `treasury apply`
  report <flags>            same flags as `treasury report`
  comment <event> <text>    public comment
  whisper <event> <text>    private message to the organizer
  like | dislike | attest <event>
  comments | reactions <event>
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    Status,
    Dashboard,
    Connect,
    Disconnect,
    Withdraw(f64),
    Apply(ApplyArgs),
    Report(ReportArgs),
    Events,
    Stats,
    Comment {
        event_id: EventId,
        text: String,
        is_private: bool,
    },
    React(EventId, ReactionKind),
    Comments(EventId),
    Reactions(EventId),
    Quit,
}

impl ShellCommand {
    /// Parses one input line. Errors are usage messages.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match name {
            "help" | "?" => ShellCommand::Help,
            "status" => ShellCommand::Status,
            "dashboard" => ShellCommand::Dashboard,
            "connect" => ShellCommand::Connect,
            "disconnect" => ShellCommand::Disconnect,
            "events" => ShellCommand::Events,
            "stats" => ShellCommand::Stats,
            "quit" | "exit" => ShellCommand::Quit,
            "withdraw" => {
                let amount = rest
                    .trim_start_matches('$')
                    .parse::<f64>()
                    .map_err(|_| "usage: withdraw <amount>".to_string())?;
                ShellCommand::Withdraw(amount)
            }
            "apply" => ShellCommand::Apply(parse_words::<ApplyLine>(rest)?.args),
            "report" => ShellCommand::Report(parse_words::<ReportLine>(rest)?.args),
            "comment" | "whisper" => {
                let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                ShellCommand::Comment {
                    event_id: parse_event_id(id, name)?,
                    // Blank text is left for the store to reject
                    text: text.trim().to_string(),
                    is_private: name == "whisper",
                }
            }
            "like" => ShellCommand::React(parse_event_id(rest, name)?, ReactionKind::Like),
            "dislike" => ShellCommand::React(parse_event_id(rest, name)?, ReactionKind::Dislike),
            "attest" => {
                ShellCommand::React(parse_event_id(rest, name)?, ReactionKind::Attestation)
            }
            "comments" => ShellCommand::Comments(parse_event_id(rest, name)?),
            "reactions" => ShellCommand::Reactions(parse_event_id(rest, name)?),
            other => return Err(format!("Unknown command: {}", other)),
        };
        Ok(command)
    }
}

/// Flags of `apply` typed after the shell command name.
#[derive(Parser)]
#[command(name = "apply", no_binary_name = true)]
struct ApplyLine {
    #[command(flatten)]
    args: ApplyArgs,
}

/// Flags of `report` typed after the shell command name.
#[derive(Parser)]
#[command(name = "report", no_binary_name = true)]
struct ReportLine {
    #[command(flatten)]
    args: ReportArgs,
}

fn parse_words<P: Parser>(rest: &str) -> std::result::Result<P, String> {
    P::try_parse_from(split_words(rest)?).map_err(|e| e.to_string())
}

/// Splits on whitespace, keeping single- or double-quoted text together.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn parse_event_id(raw: &str, command: &str) -> std::result::Result<EventId, String> {
    raw.trim()
        .parse::<EventId>()
        .map_err(|_| format!("usage: {} <event> ...", command))
}

/// Completion and hints for command names.
#[derive(Clone)]
struct ShellHelper;

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_whitespace().next() {
            Some(first) if line.starts_with(first) && COMMANDS.contains(&first) => {
                Owned(format!("{}{}", first.bright_cyan(), &line[first.len()..]))
            }
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ShellHelper {}

pub async fn run(app: &TreasuryApp) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ShellHelper));

    println!("{}", "=== Treasury shell ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands, 'quit' to exit.".bright_black());

    loop {
        let prompt = match app.session.address().await {
            Some(address) => format!("{}> ", format_address(&address)),
            None => "treasury> ".to_string(),
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match ShellCommand::parse(&line) {
                    Ok(ShellCommand::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = execute(app, command).await {
                            report_failure(&e);
                        }
                    }
                    Err(usage) => println!("{}", usage.yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

/// Runs one command. Use-case failures are already reported as
/// notifications, so the error is only returned for logging.
async fn execute(app: &TreasuryApp, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Status => session::status(app, false).await?,
        ShellCommand::Dashboard => {
            if let Err(e) = events::dashboard(app, false).await {
                println!("{}", e.to_string().yellow());
            }
        }
        ShellCommand::Connect => {
            if let Err(e) = session::connect(app).await {
                println!("{}", e.to_string().yellow());
            }
        }
        ShellCommand::Disconnect => session::disconnect(app).await?,
        ShellCommand::Withdraw(amount) => withdraw::run(app, amount).await?,
        ShellCommand::Apply(args) => forms::apply(app, args).await?,
        ShellCommand::Report(args) => forms::report(app, args).await?,
        ShellCommand::Events => events::events(app, None, false)?,
        ShellCommand::Stats => events::stats(app, false)?,
        ShellCommand::Comment {
            event_id,
            text,
            is_private,
        } => {
            warn_unknown_event(app, event_id);
            app.interactions
                .add_comment(event_id, &text, is_private)
                .await?;
        }
        ShellCommand::React(event_id, kind) => {
            warn_unknown_event(app, event_id);
            app.interactions.react(event_id, kind).await?;
        }
        ShellCommand::Comments(event_id) => {
            let comments = app.interactions.visible_comments(event_id).await;
            if comments.is_empty() {
                println!("{}", "No comments yet.".bright_black());
            }
            for comment in comments {
                let marker = if comment.is_private { " (private)" } else { "" };
                println!(
                    "{}{} {}",
                    format_address(&comment.author).bright_magenta(),
                    marker.bright_black(),
                    comment.text
                );
            }
        }
        ShellCommand::Reactions(event_id) => {
            let counts = app.interactions.reaction_summary(event_id).await;
            let mut own = Vec::new();
            for (kind, label) in [
                (ReactionKind::Like, "liked"),
                (ReactionKind::Dislike, "disliked"),
                (ReactionKind::Attestation, "attested"),
            ] {
                if app.interactions.has_reacted(event_id, kind).await {
                    own.push(label);
                }
            }
            println!(
                "{} likes, {} dislikes, {} attestations",
                counts.likes, counts.dislikes, counts.attestations
            );
            if !own.is_empty() {
                println!("{} {}", "You:".bold(), own.join(", "));
            }
        }
        ShellCommand::Quit => {}
    }
    Ok(())
}

/// Use-case errors were already shown as notifications and are only logged.
fn report_failure(e: &anyhow::Error) {
    match e.downcast_ref::<TreasuryError>() {
        Some(err) if err.is_collaborator() => tracing::warn!("[Shell] Command failed: {}", err),
        Some(err) if err.is_precondition() => tracing::debug!("[Shell] Command rejected: {}", err),
        Some(err) => tracing::info!("[Shell] Command failed: {}", err),
        None => eprintln!("{}", format!("Error: {:#}", e).red()),
    }
}

fn warn_unknown_event(app: &TreasuryApp, event_id: EventId) {
    if app.dashboard.event(event_id).is_none() {
        println!(
            "{}",
            format!("Note: event #{} is not in the catalog.", event_id).bright_black()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ShellCommand::parse("status"), Ok(ShellCommand::Status));
        assert_eq!(ShellCommand::parse("  exit "), Ok(ShellCommand::Quit));
        assert_eq!(
            ShellCommand::parse("withdraw $12.50"),
            Ok(ShellCommand::Withdraw(12.5))
        );
    }

    #[test]
    fn test_parse_comment_keeps_text() {
        assert_eq!(
            ShellCommand::parse("whisper 3 see you at the venue"),
            Ok(ShellCommand::Comment {
                event_id: 3,
                text: "see you at the venue".to_string(),
                is_private: true,
            })
        );
        assert_eq!(
            ShellCommand::parse("comment 3"),
            Ok(ShellCommand::Comment {
                event_id: 3,
                text: String::new(),
                is_private: false,
            })
        );
    }

    #[test]
    fn test_parse_reactions() {
        assert_eq!(
            ShellCommand::parse("attest 2"),
            Ok(ShellCommand::React(2, ReactionKind::Attestation))
        );
        assert_eq!(
            ShellCommand::parse("reactions 2"),
            Ok(ShellCommand::Reactions(2))
        );
    }

    #[test]
    fn test_parse_apply_with_quoted_values() {
        let command = ShellCommand::parse(
            r#"apply --name "Ada Lovelace" --email ada@example.com --accept-terms"#,
        )
        .unwrap();

        assert_eq!(
            command,
            ShellCommand::Apply(ApplyArgs {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                accept_terms: true,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_parse_report_with_attachments() {
        let command = ShellCommand::parse(
            "report --name Meetup --date-place 'Lisbon, May 3' --receipt r.pdf --receipt s.png",
        )
        .unwrap();

        match command {
            ShellCommand::Report(args) => {
                assert_eq!(args.name, "Meetup");
                assert_eq!(args.date_place, "Lisbon, May 3");
                assert_eq!(args.receipts.len(), 2);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_form_errors() {
        assert!(ShellCommand::parse("apply --unknown-flag").is_err());
        assert!(ShellCommand::parse("report --name 'Meetup").is_err());
        // Missing fields are left for the form validation
        assert_eq!(
            ShellCommand::parse("apply"),
            Ok(ShellCommand::Apply(ApplyArgs::default()))
        );
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words("  a \"b c\"  'd' ").unwrap(),
            vec!["a", "b c", "d"]
        );
        assert_eq!(split_words("--name ''").unwrap(), vec!["--name", ""]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(ShellCommand::parse("like").is_err());
        assert!(ShellCommand::parse("withdraw lots").is_err());
        assert!(ShellCommand::parse("dance").is_err());
    }
}
