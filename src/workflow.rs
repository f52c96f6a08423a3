use crate::error::Result;
use crate::lists::{choose_or_create, fetch_lists};
use crate::models::{AddOutcome, MediaCandidate};
use crate::prompt::Prompter;
use crate::resolver::resolve;
use crate::sync::add_item;
use crate::tmdb::TmdbClient;
use crate::titles::read_titles;
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    Added(MediaCandidate),
    AlreadyPresent(MediaCandidate),
    NotFound,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(String, TitleOutcome)>,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&TitleOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn added(&self) -> usize {
        self.count(|o| matches!(o, TitleOutcome::Added(_)))
    }

    pub fn already_present(&self) -> usize {
        self.count(|o| matches!(o, TitleOutcome::AlreadyPresent(_)))
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, TitleOutcome::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TitleOutcome::Failed(_)))
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} titles: {} added, {} already present, {} not found, {} failed",
            self.outcomes.len(),
            self.added(),
            self.already_present(),
            self.not_found(),
            self.failed()
        )
    }
}

/// Picks the target list, reads the title file and processes every title.
///
/// Setup errors are returned; per-title errors end up in the summary.
pub fn sync_titles(
    client: &TmdbClient,
    prompter: &mut dyn Prompter,
    titles_path: &Path,
    delay: Duration,
) -> Result<RunSummary> {
    println!("\nFetching your TMDB lists...");
    let lists = fetch_lists(client)?;
    let list_id = choose_or_create(client, &lists, prompter)?;
    println!("\nSelected List ID: {}", list_id);

    let titles = read_titles(titles_path)?;
    println!(
        "\nFound {} titles in '{}'. Starting process...\n",
        titles.len(),
        titles_path.display()
    );

    Ok(process_titles(client, list_id, &titles, delay))
}

/// Runs every title in order. One failing title never stops the rest.
pub fn process_titles(
    client: &TmdbClient,
    list_id: u64,
    titles: &[String],
    delay: Duration,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for (i, title) in titles.iter().enumerate() {
        if i > 0 {
            thread::sleep(delay);
        }

        println!("-> Searching for '{}'...", title);
        let outcome = match process_title(client, list_id, title) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(title = %title, error = %e, "title failed");
                TitleOutcome::Failed(e.to_string())
            }
        };
        report(title, &outcome);
        summary.outcomes.push((title.clone(), outcome));
    }

    info!(%summary, "run complete");
    summary
}

pub fn process_title(client: &TmdbClient, list_id: u64, title: &str) -> Result<TitleOutcome> {
    let Some(media) = resolve(client, title)? else {
        return Ok(TitleOutcome::NotFound);
    };
    println!("   Found: {}", media);

    Ok(match add_item(client, list_id, media.id)? {
        AddOutcome::Added => TitleOutcome::Added(media),
        AddOutcome::AlreadyPresent => TitleOutcome::AlreadyPresent(media),
    })
}

fn report(title: &str, outcome: &TitleOutcome) {
    match outcome {
        TitleOutcome::Added(media) => {
            println!("   [SUCCESS] Added '{}' to your list.\n", media.display_name)
        }
        TitleOutcome::AlreadyPresent(media) => {
            println!("   [INFO] '{}' is already in this list.\n", media.display_name)
        }
        TitleOutcome::NotFound => {
            println!("   [NOT FOUND] Could not find a match for '{}'.\n", title)
        }
        TitleOutcome::Failed(e) => {
            println!("   [ERROR] An error occurred for '{}': {}\n", title, e)
        }
    }
}
