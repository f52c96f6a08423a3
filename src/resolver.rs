use crate::error::Result;
use crate::models::{MediaCandidate, MediaType};
use crate::tmdb::{SearchHit, TmdbClient};

/// Searches TMDB for `title` and keeps the first movie or TV result, trusting
/// the service's own ranking. `None` means nothing usable came back.
pub fn resolve(client: &TmdbClient, title: &str) -> Result<Option<MediaCandidate>> {
    let hits = client.search_multi(title)?;
    Ok(pick_candidate(hits))
}

pub fn pick_candidate(hits: Vec<SearchHit>) -> Option<MediaCandidate> {
    hits.into_iter().find_map(|hit| {
        let media_type = MediaType::from_api(hit.media_type.as_deref()?)?;
        let display_name = match media_type {
            MediaType::Movie => hit.title.or(hit.name),
            MediaType::Tv => hit.name.or(hit.title),
        }
        .unwrap_or_default();

        Some(MediaCandidate {
            id: hit.id,
            display_name,
            media_type,
        })
    })
}
