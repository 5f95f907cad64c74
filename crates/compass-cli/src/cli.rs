//! Command handlers and the interactive session loop.

use std::{io::BufRead, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use compass_core::{
    display::{CatalogView, ShareText, StepView, StoredResults},
    params::{Assess, ListResults},
    Answer, ArchiveBuilder, CompassConfig, ContentKey, FlowController, ResultArchive,
};
use jiff::Timestamp;
use log::{debug, info};

use crate::renderer::TerminalRenderer;

const INPUT_HELP: &str = "Answer with ja/nee or a number. Enter = next, b = back, r = restart, \
l = language, s = share, q = quit.";

/// One line of user input in an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Answer(Answer),
    Advance,
    Back,
    Restart,
    ToggleLanguage,
    Share,
    Quit,
    Unknown,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let command = line.trim().to_lowercase();
        match command.as_str() {
            "" => Input::Advance,
            "b" | "back" => Input::Back,
            "r" | "restart" => Input::Restart,
            "l" | "lang" => Input::ToggleLanguage,
            "s" | "share" => Input::Share,
            "q" | "quit" => Input::Quit,
            _ => command.parse().map_or(Input::Unknown, Input::Answer),
        }
    }
}

pub struct Cli {
    config: CompassConfig,
    renderer: TerminalRenderer,
    database_file: Option<PathBuf>,
}

impl Cli {
    pub fn new(
        config: CompassConfig,
        renderer: TerminalRenderer,
        database_file: Option<PathBuf>,
    ) -> Self {
        Self {
            config,
            renderer,
            database_file,
        }
    }

    async fn archive(&self) -> Result<ResultArchive> {
        ArchiveBuilder::new()
            .with_database_path(self.database_file.as_ref())
            .build()
            .await
            .context("Failed to open result archive")
    }

    /// Runs an interactive session reading one command per line from `input`.
    pub async fn run_session<R: BufRead>(&self, input: R, save: bool) -> Result<()> {
        let content = &self.config.content;
        let archive = if save { Some(self.archive().await?) } else { None };
        let mut flow = self.config.new_session();
        let mut saved = false;

        self.renderer.render(&StepView::new(&flow, content).to_string())?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let event = Input::parse(&line);
            debug!("Input {event:?} in phase {}", flow.phase());

            match event {
                Input::Quit => break,
                Input::Advance => {
                    if let Err(e) = flow.advance() {
                        self.notice(&flow, &e.to_string())?;
                        continue;
                    }
                }
                Input::Answer(answer) => match flow.answer_current(answer) {
                    Ok(phase) if !phase.is_terminal() => {
                        flow.advance()?;
                    }
                    Ok(_) => {}
                    Err(e) if e.is_validation() => {
                        self.notice(&flow, &e.to_string())?;
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                },
                Input::Back => {
                    flow.retreat();
                    saved = false;
                }
                Input::Restart => {
                    flow.restart();
                    saved = false;
                }
                Input::ToggleLanguage => {
                    flow.toggle_language();
                }
                Input::Share => {
                    if flow.is_finished() {
                        let advice = flow.advice(content);
                        let share = ShareText::new(&advice, flow.state(), flow.catalog(), content);
                        print!("{share}");
                    } else {
                        self.notice(&flow, "Share is available once the advice is shown.")?;
                    }
                    continue;
                }
                Input::Unknown => {
                    self.notice(&flow, INPUT_HELP)?;
                    continue;
                }
            }

            if flow.is_finished() && !saved {
                if let Some(archive) = &archive {
                    let stored = archive
                        .save(&flow.result_record(content, Timestamp::now()))
                        .await
                        .context("Failed to save result")?;
                    println!("Saved result {}.", stored.id);
                    saved = true;
                }
            }

            self.renderer.render(&StepView::new(&flow, content).to_string())?;
        }

        info!("Session ended in phase {}", flow.phase());
        Ok(())
    }

    fn notice(&self, flow: &FlowController, message: &str) -> Result<()> {
        debug!("Notice in phase {}: {message}", flow.phase());
        self.renderer.render(&format!("> {message}\n"))
    }

    /// Replays a full answer set and prints the advice or the JSON record.
    pub async fn assess(&self, params: Assess, json: bool, save: bool) -> Result<()> {
        let content = &self.config.content;
        let flow = FlowController::replay(Arc::clone(&self.config.catalog), &params).with_context(
            || content.text(params.language, ContentKey::FillAllFields).into_owned(),
        )?;

        let record = flow.result_record(content, Timestamp::now());
        let stored = if save {
            Some(
                self.archive()
                    .await?
                    .save(&record)
                    .await
                    .context("Failed to save result")?,
            )
        } else {
            None
        };

        if json {
            let output = match &stored {
                Some(stored) => serde_json::to_string_pretty(stored)?,
                None => serde_json::to_string_pretty(&record)?,
            };
            println!("{output}");
        } else {
            self.renderer.render(&StepView::new(&flow, content).to_string())?;
            if let Some(stored) = stored {
                println!("Saved result {}.", stored.id);
            }
        }
        Ok(())
    }

    /// Lists archived results.
    pub async fn history(&self, params: ListResults) -> Result<()> {
        let results = self
            .archive()
            .await?
            .list(&params)
            .await
            .context("Failed to list results")?;
        self.renderer.render(&StoredResults(results).to_string())
    }

    /// Prints the step catalog in the session language.
    pub fn steps(&self) -> Result<()> {
        let view = CatalogView {
            catalog: &self.config.catalog,
            language: self.config.language,
        };
        self.renderer.render(&view.to_string())
    }
}

#[cfg(test)]
mod tests {
    use compass_core::YesNo;

    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(Input::parse(""), Input::Advance);
        assert_eq!(Input::parse("  \n"), Input::Advance);
        assert_eq!(Input::parse("B"), Input::Back);
        assert_eq!(Input::parse("restart"), Input::Restart);
        assert_eq!(Input::parse("lang"), Input::ToggleLanguage);
        assert_eq!(Input::parse("s"), Input::Share);
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse("what"), Input::Unknown);
    }

    #[test]
    fn test_parse_answers() {
        assert_eq!(Input::parse("ja"), Input::Answer(Answer::Boolean(YesNo::Yes)));
        assert_eq!(Input::parse("No"), Input::Answer(Answer::Boolean(YesNo::No)));
        assert_eq!(Input::parse(" 7 "), Input::Answer(Answer::Scale(7)));
    }
}
