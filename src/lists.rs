use crate::error::Result;
use crate::models::MediaList;
use crate::prompt::Prompter;
use crate::tmdb::TmdbClient;
use tracing::info;

pub fn fetch_lists(client: &TmdbClient) -> Result<Vec<MediaList>> {
    let lists = client.account_lists()?;
    info!(count = lists.len(), "fetched account lists");
    Ok(lists)
}

/// Returns the id of the list titles should go to.
///
/// With no existing lists this goes straight to creating one. Otherwise it
/// shows a numbered menu where `0` creates a new list, and asks again until
/// the answer is a number in range.
pub fn choose_or_create(
    client: &TmdbClient,
    lists: &[MediaList],
    prompter: &mut dyn Prompter,
) -> Result<u64> {
    if lists.is_empty() {
        println!("You have no existing lists. Let's create one.");
        return create_list(client, prompter);
    }

    println!("Please choose a list to add titles to:");
    for line in menu_lines(lists) {
        println!("{}", line);
    }

    let choice = loop {
        let answer = prompter.text("Enter your choice (number):")?;
        match parse_choice(&answer, lists.len()) {
            Some(choice) => break choice,
            None => prompter.warn(&format!(
                "Invalid input. Please enter a number between 0 and {}.",
                lists.len()
            )),
        }
    };

    match choice {
        0 => create_list(client, prompter),
        n => Ok(lists[n - 1].id),
    }
}

pub fn create_list(client: &TmdbClient, prompter: &mut dyn Prompter) -> Result<u64> {
    let name = prompter.text("Enter a name for your new list:")?;
    let description = prompter.text("Enter a description for the list:")?;

    let list_id = client.create_list(&name, &description)?;
    info!(list_id, name = %name, "created list");
    println!("Successfully created list '{}'.", name);
    Ok(list_id)
}

fn menu_lines(lists: &[MediaList]) -> Vec<String> {
    lists
        .iter()
        .enumerate()
        .map(|(i, list)| format!("  {}: {}", i + 1, list))
        .chain(std::iter::once("  0: Create a new list".to_string()))
        .collect()
}

fn parse_choice(answer: &str, list_count: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= list_count)
}
