use crate::assess::{run_assess, run_questions, AssessArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use risk_aware::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HIV Risk Awareness",
    about = "Educational HIV exposure risk self-assessment (not a diagnostic test)",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one set of answers and print the result
    Assess(AssessArgs),
    /// Print the questionnaire with every accepted answer
    Questions(QuestionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Questions(args) => run_questions(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn assess_flags_parse() {
        let cli = Cli::try_parse_from([
            "risk-aware-api",
            "assess",
            "--age",
            "30",
            "--sexual-activity",
            "onePartner",
            "--condom-use",
            "always",
            "--partner-status",
            "negative",
            "--symptom",
            "fever",
            "--symptom",
            "rash",
            "--previous-test",
            "never",
            "--time-since-exposure",
            "none",
            "--shared-needles",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.age, Some(30));
                assert_eq!(args.symptoms, vec!["fever", "rash"]);
                assert!(args.shared_needles);
                assert!(!args.blood_contact);
                assert_eq!(args.gender, "unspecified");
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn answers_file_rejects_answer_flags() {
        let error = Cli::try_parse_from([
            "risk-aware-api",
            "assess",
            "--answers",
            "answers.json",
            "--age",
            "30",
        ])
        .expect_err("answers file and flags conflict");
        assert_eq!(error.kind(), clap::error::ErrorKind::ArgumentConflict);

        let error = Cli::try_parse_from([
            "risk-aware-api",
            "assess",
            "--answers",
            "answers.json",
            "--shared-needles",
        ])
        .expect_err("answers file and toggles conflict");
        assert_eq!(error.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn answers_file_alone_parses() {
        let cli = Cli::try_parse_from([
            "risk-aware-api",
            "assess",
            "--answers",
            "answers.json",
            "--json",
        ])
        .expect("answers file parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.answers, Some(std::path::PathBuf::from("answers.json")));
                assert!(args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["risk-aware-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
