use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use pediassess::{read_intake_text, FormSession, FormStatus};
use pediassess_intake::{load_intake, Symptom, UnansweredPolicy, CONTACT_HISTORY_QUESTION};
use pediassess_report::{render_json, render_text, submit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "pediassess",
    version,
    about = "Pediatric patient susceptibility assessment",
    long_about = "pediassess scores a pediatric intake form: patient details, a checklist of\n\
        12 symptoms and a contact-history question. The share of 'yes' answers is\n\
        mapped to Low (< 0.33), Medium (< 0.66) or High risk.\n\n\
        This is a triage aid, not a medical diagnosis.\n\n\
        EXAMPLES:\n\
        \n  pediassess form                       Fill in the form interactively\n\
        \n  pediassess assess intake.txt          Score a completed intake sheet\n\
        \n  pediassess json intake.json           Score and print the result as JSON\n\
        \n  cat intake.txt | pediassess assess    Read the intake from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a completed intake sheet or JSON form
    #[command(
        about = "Score a completed intake sheet or JSON form",
        long_about = "Reads a completed intake from FILE, or stdin if no file is given,\n\
            and prints the assessment results.\n\n\
            The intake is either JSON or a sheet of 'field: value' lines such as\n\
            'age: 7' or 'chest pain: yes'. Run 'pediassess symptoms' for field names."
    )]
    Assess(AssessArgs),

    /// Score an intake and print the result as JSON
    #[command(about = "Score an intake and print the result as JSON")]
    Json(AssessArgs),

    /// Fill in the form interactively
    #[command(
        about = "Fill in the assessment form interactively",
        long_about = "Asks each question of the form in turn and prints the result once\n\
            the last one is answered.\n\n\
            Commands:\n\
            \n  :help   Show available commands\
            \n  :back   Return to the previous question\
            \n  :skip   Leave the current question unanswered\
            \n  :quit   Cancel the assessment (also :q, :exit)"
    )]
    Form,

    /// List the symptom checklist and intake field names
    Symptoms,
}

#[derive(Debug, Args, Clone)]
struct ScoringArgs {
    /// How unanswered symptoms are scored: 'omit' drops them, 'no' counts them as no
    #[arg(
        long,
        value_name = "POLICY",
        env = "PEDIASSESS_UNANSWERED",
        default_value = "omit",
        global = true
    )]
    unanswered: UnansweredPolicy,

    /// Disable colored output (NO_COLOR is honoured as well)
    #[arg(long = "no-color", global = true)]
    no_color: bool,
}

#[derive(Debug, Args, Clone)]
struct AssessArgs {
    /// Intake sheet or JSON form (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn color_enabled(args: &ScoringArgs) -> bool {
    !args.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn run_assess(args: &AssessArgs, scoring: &ScoringArgs, mode: OutputMode) -> i32 {
    let text = match read_intake_text(args.input.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let form = match load_intake(&text) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let report = match submit(&form, scoring.unanswered) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    match mode {
        OutputMode::Text => {
            println!("{}", render_text(&report, color_enabled(scoring)));
            0
        }
        OutputMode::Json => match render_json(&report) {
            Ok(json) => {
                println!("{json}");
                0
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                2
            }
        },
    }
}

fn run_form(scoring: &ScoringArgs) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize line editor: {e}");
            return 2;
        }
    };

    let mut session = FormSession::new(scoring.unanswered, color_enabled(scoring));
    for line in session.intro() {
        println!("{line}");
    }
    loop {
        let prompt = session.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let (out, status) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                match status {
                    FormStatus::InProgress => {}
                    FormStatus::Submitted => return 0,
                    FormStatus::Cancelled => return 1,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                eprintln!("assessment cancelled");
                return 1;
            }
            Err(e) => {
                eprintln!("error: form input failed: {e}");
                return 2;
            }
        }
    }
}

fn run_symptoms() -> i32 {
    println!("{:<34} {}", "FIELD", "QUESTION");
    for s in Symptom::ALL {
        println!("{:<34} {}", s.key(), s.question());
    }
    println!(
        "{:<34} {CONTACT_HISTORY_QUESTION} (yes/no):",
        "contact_history"
    );
    0
}

fn is_known_subcommand(arg: &str) -> bool {
    matches!(
        arg,
        "assess"
            | "json"
            | "form"
            | "symptoms"
            | "help"
            | "--help"
            | "-h"
            | "--version"
            | "-V"
    )
}

/// A bare file argument means `assess`; `--json`/`-j` selects `json`.
/// Without either, the arguments are left alone so a plain run opens the form.
fn normalize_cli_args(args: Vec<OsString>) -> Vec<OsString> {
    if args.len() <= 1 {
        return args;
    }

    if is_known_subcommand(&args[1].to_string_lossy()) {
        return args;
    }

    let mut subcmd: Option<OsString> = None;
    let mut has_input = false;
    let mut rest: Vec<OsString> = Vec::with_capacity(args.len().saturating_sub(1));
    let mut takes_value = false;
    for a in args.iter().skip(1) {
        let s = a.to_string_lossy();
        if takes_value {
            takes_value = false;
        } else if s == "--json" || s == "-j" {
            subcmd = Some(OsString::from("json"));
            continue;
        } else if s == "--unanswered" {
            takes_value = true;
        } else if !s.starts_with('-') {
            if !has_input && is_known_subcommand(&s) {
                return args;
            }
            has_input = true;
        }
        rest.push(a.clone());
    }

    let subcmd = match subcmd {
        Some(s) => s,
        None if has_input => OsString::from("assess"),
        None => return args,
    };

    let mut out: Vec<OsString> = Vec::with_capacity(args.len() + 1);
    out.push(args[0].clone());
    out.push(subcmd);
    out.extend(rest);
    out
}

fn run_cli() -> i32 {
    let cli = Cli::parse_from(normalize_cli_args(std::env::args_os().collect()));
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Assess(args)) => run_assess(&args, &cli.scoring, OutputMode::Text),
        Some(Command::Json(args)) => run_assess(&args, &cli.scoring, OutputMode::Json),
        Some(Command::Form) | None => run_form(&cli.scoring),
        Some(Command::Symptoms) => run_symptoms(),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn plain_scoring() -> ScoringArgs {
        ScoringArgs {
            unanswered: UnansweredPolicy::Omit,
            no_color: true,
        }
    }

    fn assess_args(input: PathBuf) -> AssessArgs {
        AssessArgs { input: Some(input) }
    }

    #[test]
    fn bare_path_maps_to_assess() {
        let out = normalize_cli_args(os_args(&["pediassess", "intake.txt"]));
        assert_eq!(out, os_args(&["pediassess", "assess", "intake.txt"]));
    }

    #[test]
    fn flags_before_bare_path_are_kept() {
        let out = normalize_cli_args(os_args(&[
            "pediassess",
            "-v",
            "--unanswered",
            "no",
            "intake.txt",
        ]));
        assert_eq!(
            out,
            os_args(&["pediassess", "assess", "-v", "--unanswered", "no", "intake.txt"])
        );
    }

    #[test]
    fn json_flag_maps_to_json_subcommand() {
        let out = normalize_cli_args(os_args(&["pediassess", "--json", "intake.txt"]));
        assert_eq!(out, os_args(&["pediassess", "json", "intake.txt"]));
    }

    #[test]
    fn known_subcommands_are_not_normalized() {
        for subcmd in ["assess", "json", "form", "symptoms", "help", "--help", "-V"] {
            let args = os_args(&["pediassess", subcmd]);
            assert_eq!(normalize_cli_args(args.clone()), args);
        }
        let args = os_args(&["pediassess", "-v", "form"]);
        assert_eq!(normalize_cli_args(args.clone()), args);
    }

    #[test]
    fn flags_without_input_open_the_form() {
        for args in [
            vec!["pediassess"],
            vec!["pediassess", "-v"],
            vec!["pediassess", "--no-color"],
            vec!["pediassess", "--unanswered", "no"],
        ] {
            let args = os_args(&args);
            let out = normalize_cli_args(args.clone());
            assert_eq!(out, args);
            let cli = Cli::try_parse_from(out).unwrap();
            assert!(cli.command.is_none(), "{args:?} should open the form");
        }
    }

    #[test]
    fn global_flags_apply_without_subcommand() {
        let cli = Cli::try_parse_from(["pediassess", "-v", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(cli.scoring.no_color);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["pediassess", "form", "--unanswered", "no"]).unwrap();
        assert_eq!(cli.scoring.unanswered, UnansweredPolicy::CountAsNo);
    }

    #[test]
    fn unanswered_policy_is_read_from_environment() {
        std::env::set_var("PEDIASSESS_UNANSWERED", "no");
        let bare = Cli::try_parse_from(["pediassess"]);
        let form = Cli::try_parse_from(["pediassess", "form"]);
        std::env::remove_var("PEDIASSESS_UNANSWERED");

        let bare = bare.unwrap();
        assert!(bare.command.is_none());
        assert_eq!(bare.scoring.unanswered, UnansweredPolicy::CountAsNo);
        assert_eq!(form.unwrap().scoring.unanswered, UnansweredPolicy::CountAsNo);
    }

    #[test]
    fn cli_parses_unanswered_policy() {
        let cli = Cli::try_parse_from(["pediassess", "assess", "--unanswered", "no", "x.txt"])
            .unwrap();
        assert_eq!(cli.scoring.unanswered, UnansweredPolicy::CountAsNo);
        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("x.txt")));
            }
            _ => panic!("expected Assess command"),
        }
        assert!(Cli::try_parse_from(["pediassess", "assess", "--unanswered", "perhaps"]).is_err());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["pediassess", "-vv", "symptoms"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_help_mentions_thresholds_and_examples() {
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        cmd.write_long_help(&mut buf).unwrap();
        let help = String::from_utf8(buf).unwrap();
        assert!(help.contains("0.33") && help.contains("0.66"));
        assert!(help.contains("EXAMPLES"));
        assert!(help.contains("form") && help.contains("assess"));
    }

    #[test]
    fn symptoms_about_comes_from_doc_comment() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let symptoms = cmd.find_subcommand("symptoms").unwrap();
        assert_eq!(
            symptoms.get_about().map(|s| s.to_string()).as_deref(),
            Some("List the symptom checklist and intake field names")
        );
    }

    #[test]
    fn assess_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let scoring = plain_scoring();

        let good = dir.path().join("good.txt");
        fs::write(&good, "name: Ana\nage: 7\ncoughing: yes\ncontact history: no\n").unwrap();
        assert_eq!(run_assess(&assess_args(good.clone()), &scoring, OutputMode::Text), 0);
        assert_eq!(run_assess(&assess_args(good), &scoring, OutputMode::Json), 0);

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "age: 42\n").unwrap();
        assert_eq!(run_assess(&assess_args(bad), &scoring, OutputMode::Text), 1);

        let missing = dir.path().join("missing.txt");
        assert_eq!(run_assess(&assess_args(missing), &scoring, OutputMode::Text), 2);
    }

    #[test]
    fn symptoms_listing_succeeds() {
        assert_eq!(run_symptoms(), 0);
    }
}
