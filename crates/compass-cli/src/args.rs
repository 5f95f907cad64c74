//! Command-line arguments using clap's derive API.
//!
//! Each command's arguments convert into the matching core parameter type, so
//! clap attributes never leak into `compass_core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Flow / Archive
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use compass_core::{
    params::{AnswerInput, Assess, ListResults},
    Language,
};

/// Knee Load Compass: an advisory questionnaire for Patellofemoral Pain
/// Syndrome
///
/// Walks through screening questions, two pain scores and two functional
/// questions, then gives load advice. The advice is not medical advice.
#[derive(Parser)]
#[command(version, about, name = "compass")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/compass/results.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Language of questions and advice (defaults to Dutch). Give it before
    /// the command; `history --language` filters instead.
    #[arg(long, value_enum)]
    pub language: Option<LanguageArg>,

    /// JSON file with a step catalog replacing the built-in questions
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// JSON file with texts overriding the built-in content
    #[arg(long, global = true)]
    pub content_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command an interactive session starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Answer the questionnaire interactively
    #[command(alias = "r")]
    Run(RunArgs),
    /// Get advice for a complete set of answers in one go
    #[command(alias = "a")]
    Assess(AssessArgs),
    /// List saved results, newest first
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Print the questionnaire steps
    Steps,
}

/// Interactive session options
#[derive(ClapArgs, Default)]
pub struct RunArgs {
    /// Save the result when the questionnaire ends
    #[arg(long)]
    pub save: bool,
}

/// One-shot assessment
///
/// Every question the flow reaches needs an answer, for example
/// `--answer s1=nee --answer vas_now=4`. Screening answers of `ja` end the
/// questionnaire with urgent advice.
#[derive(ClapArgs)]
pub struct AssessArgs {
    #[arg(
        short,
        long = "answer",
        value_name = "ID=VALUE",
        help = "Answer as QUESTION_ID=VALUE (ja/nee or a number); repeatable"
    )]
    pub answers: Vec<AnswerInput>,
    #[arg(long, help = "Print the result record as JSON")]
    pub json: bool,
    #[arg(long, help = "Save the result to the archive")]
    pub save: bool,
}

impl AssessArgs {
    pub fn into_params(self, language: Language) -> Assess {
        Assess {
            answers: self.answers,
            language,
        }
    }
}

/// List saved results
#[derive(ClapArgs)]
pub struct HistoryArgs {
    #[arg(short, long, help = "Maximum number of results to show")]
    pub limit: Option<u32>,
    #[arg(long, value_enum, help = "Only results recorded in this language")]
    pub language: Option<LanguageArg>,
}

impl From<HistoryArgs> for ListResults {
    fn from(val: HistoryArgs) -> Self {
        ListResults {
            limit: val.limit,
            language: val.language.map(Into::into),
        }
    }
}

/// Command-line representation of the supported languages.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LanguageArg {
    /// Dutch
    Nl,
    /// English
    En,
}

impl From<LanguageArg> for Language {
    fn from(val: LanguageArg) -> Self {
        match val {
            LanguageArg::Nl => Language::Nl,
            LanguageArg::En => Language::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use compass_core::{Answer, YesNo};

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_assess_answers() {
        let args = Args::try_parse_from([
            "compass",
            "--language",
            "en",
            "assess",
            "--answer",
            "s1=nee",
            "-a",
            "vas_now=4",
        ])
        .unwrap();

        let Some(Commands::Assess(assess)) = args.command else {
            panic!("Expected assess command");
        };
        let params = assess.into_params(Language::En);
        assert_eq!(params.answers.len(), 2);
        assert_eq!(params.answers[0].value, Answer::Boolean(YesNo::No));
        assert_eq!(params.answers[1].value, Answer::Scale(4));
    }

    #[test]
    fn test_malformed_answer_is_a_parse_error() {
        assert!(Args::try_parse_from(["compass", "assess", "--answer", "s1"]).is_err());
    }

    #[test]
    fn test_history_args_into_params() {
        let args = Args::try_parse_from(["compass", "history", "--limit", "3", "--language", "nl"])
            .unwrap();
        let Some(Commands::History(history)) = args.command else {
            panic!("Expected history command");
        };
        let params: ListResults = history.into();
        assert_eq!(params.limit, Some(3));
        assert_eq!(params.language, Some(Language::Nl));
    }
}
