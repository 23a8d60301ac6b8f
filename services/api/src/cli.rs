use crate::demo::{run_demo, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use label_lens::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Label Lens",
    about = "Score food ingredient labels from the command line or over HTTP",
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
    /// Score an ingredient list under one lens
    Score(ScoreArgs),
    /// Score the three reference labels and print the results
    Demo,
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
        Command::Score(args) => run_score(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_lens::Lens;

    #[test]
    fn defaults_to_serve_without_a_subcommand() {
        let cli = Cli::try_parse_from(["label-lens-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_lens_aliases_and_inline_text() {
        let cli = Cli::try_parse_from([
            "label-lens-api",
            "score",
            "--lens",
            "real-food",
            "--text",
            "oats, salt",
        ])
        .expect("parses");

        let Some(Command::Score(args)) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.lens, Lens::RealFood);
        assert_eq!(args.text.as_deref(), Some("oats, salt"));
        assert!(!args.json);
    }

    #[test]
    fn score_requires_exactly_one_input() {
        let missing = Cli::try_parse_from(["label-lens-api", "score", "--lens", "focus"]);
        assert!(missing.is_err());

        let both = Cli::try_parse_from([
            "label-lens-api",
            "score",
            "--lens",
            "focus",
            "--text",
            "oats",
            "--file",
            "label.txt",
        ]);
        assert!(both.is_err());
    }

    #[test]
    fn unknown_lens_is_rejected_at_parse_time() {
        let parsed = Cli::try_parse_from([
            "label-lens-api",
            "score",
            "--lens",
            "keto",
            "--text",
            "oats",
        ]);
        assert!(parsed.is_err());
    }
}
