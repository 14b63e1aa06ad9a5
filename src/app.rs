//! Wires config, dataset source and screen store together for the CLI.

use crate::cli::{Cli, Commands};
use crate::output::{self, OutputOptions};
use anyhow::{bail, Context};
use housing_core::{config::Config, HousingInfo, Language, SectionTarget};
use housing_screen::{Action, HousingState, LinkOpener, ScreenCommand, Store, TracingAnalytics};
use housing_source::{spawn_load, ConfiguredSource, DatasetSource};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;

/// Link opener for the terminal: prints the URL for the user to follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutLinkOpener;

impl LinkOpener for StdoutLinkOpener {
    fn open(&self, url: &str) {
        tracing::info!(url, "open link");
        println!("open: {url}");
    }
}

pub type GuideStore = Store<Language, StdoutLinkOpener, TracingAnalytics>;

/// Settings resolved from config file and command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub language: Language,
    pub max_selected: usize,
    pub output: OutputOptions,
    pub source: ConfiguredSource,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let dataset = cli.dataset.clone().or_else(|| config.housing.dataset_path());
        Self {
            language: cli.lang.unwrap_or(config.general.language),
            max_selected: config.compare.max_selected,
            output: OutputOptions { show_descriptions: config.output.show_descriptions },
            source: ConfiguredSource::from_path(dataset),
        }
    }

    pub fn store(&self) -> GuideStore {
        Store::new(
            HousingState::new(self.max_selected),
            self.language,
            StdoutLinkOpener,
            TracingAnalytics,
        )
    }
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    })
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli);
    let settings = Settings::resolve(&cli, &config);
    tracing::debug!(settings = ?settings, "resolved settings");

    match cli.command.clone().unwrap_or(Commands::Shell) {
        Commands::Shell => shell(&settings).await,
        command => {
            let info = settings
                .source
                .load()
                .await
                .with_context(|| format!("loading {}", settings.source.describe()))?;
            println!("{}", one_shot(&settings, info, command)?);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// One-shot subcommands
// ---------------------------------------------------------------------------

/// Drive a fresh store through the actions behind `command` and return the
/// text of the view it ends on.
pub fn one_shot(settings: &Settings, info: HousingInfo, command: Commands) -> anyhow::Result<String> {
    let mut store = settings.store();
    store.dispatch(Action::DatasetLoaded(info))?;

    match command {
        Commands::Residences => open_section(&mut store, SectionTarget::Residences)?,
        Commands::Resources => open_section(&mut store, SectionTarget::Resources)?,
        Commands::Show { residence, query } => {
            open_section(&mut store, SectionTarget::Residences)?;
            store.dispatch(Action::OpenResidence(residence))?;
            if let Some(query) = query {
                store.dispatch(Action::SetQuery(query))?;
            }
        }
        Commands::Compare { residences } => {
            let Some((first, rest)) = residences.split_first() else {
                bail!("select at least two residences to compare");
            };
            open_section(&mut store, SectionTarget::Residences)?;
            store.dispatch(Action::OpenResidence(first.clone()))?;
            store.dispatch(Action::BeginComparison)?;
            for name in rest {
                if !store.state().selection.is_picked(name) {
                    store.dispatch(Action::ToggleSelection(name.clone()))?;
                }
                if let Some(notice) = &store.state().notice {
                    bail!("{notice}");
                }
            }
            store.dispatch(Action::SubmitComparison)?;
            if let Some(notice) = &store.state().notice {
                bail!("{notice}");
            }
        }
        Commands::Shell => {}
    }

    Ok(output::view(store.state(), store.localizer(), settings.output))
}

fn open_section(store: &mut GuideStore, target: SectionTarget) -> anyhow::Result<()> {
    let index = store
        .state()
        .info
        .as_ref()
        .and_then(|info| info.sections.iter().position(|s| s.target == target))
        .with_context(|| format!("dataset has no {target:?} section"))?;
    store.dispatch(Action::SelectSection(index))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive shell
// ---------------------------------------------------------------------------

async fn shell(settings: &Settings) -> anyhow::Result<()> {
    let mut store = settings.store();
    // Loading runs in the background so the prompt is usable right away.
    let mut pending = Some(spawn_load(settings.source.clone()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", output::view(store.state(), store.localizer(), settings.output));
    loop {
        prompt(&store)?;
        tokio::select! {
            Some(loaded) = next_load(&mut pending), if pending.is_some() => {
                pending = None;
                match loaded {
                    Ok(info) => {
                        store.dispatch(Action::DatasetLoaded(info))?;
                        println!("\n{}", output::view(store.state(), store.localizer(), settings.output));
                    }
                    // Already logged by the loader; stay in the no-data state.
                    Err(_) => println!("\nhousing information could not be loaded"),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match ScreenCommand::parse(&line) {
                    Ok(ScreenCommand::Quit) => break,
                    Ok(ScreenCommand::Help) => println!("{}", housing_screen::command::HELP),
                    Ok(ScreenCommand::Show) => {
                        println!("{}", output::view(store.state(), store.localizer(), settings.output));
                    }
                    Ok(ScreenCommand::Dispatch(action)) => match store.dispatch(action) {
                        Ok(()) => println!("{}", output::view(store.state(), store.localizer(), settings.output)),
                        Err(err) => println!("error: {err}"),
                    },
                    Err(msg) if msg.is_empty() => {}
                    Err(msg) => println!("{msg}"),
                }
            }
        }
    }
    Ok(())
}

async fn next_load(
    pending: &mut Option<oneshot::Receiver<HousingInfo>>,
) -> Option<Result<HousingInfo, oneshot::error::RecvError>> {
    match pending {
        Some(rx) => Some(rx.await),
        None => None,
    }
}

fn prompt(store: &GuideStore) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}> ", store.state().route())?;
    stdout.flush()?;
    Ok(())
}
