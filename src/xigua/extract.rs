use std::collections::HashMap;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{info, instrument};

use crate::request::{self, RequestError};
use crate::types::{MediaData, MediaType, Options, Part, Stream};
use crate::xigua::error::ExtractError;
use crate::xigua::state::{NormalLadder, PageState, WorkPage};
use crate::xigua::utils::{decode_stream_url, locate_hydrated_state, sanitize_state_json};
use crate::xigua::{BROWSER_USER_AGENT, REFERER, SITE, resolve_cookie};

/// Extracts every stream variant advertised by the watch page at `url`.
/// All-or-nothing: a failed rendition aborts the call rather than returning
/// a partial stream set.
///
/// # Errors
/// Errors when the page cannot be fetched, carries no hydrated state,
/// decodes as neither page shape, or any rendition's size probe fails.
#[instrument(skip(client, options))]
pub async fn extract(
    client: &reqwest::Client,
    url: &str,
    options: &Options,
) -> Result<Vec<MediaData>, ExtractError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        COOKIE,
        HeaderValue::from_str(resolve_cookie(&options.cookie))
            .map_err(|err| ExtractError::Fetch(RequestError::Header(err)))?,
    );

    let html = request::get(client, url, REFERER, headers)
        .await
        .map_err(ExtractError::Fetch)?;

    let state = sanitize_state_json(locate_hydrated_state(&html)?);

    let (title, streams) = match PageState::decode(&state)? {
        PageState::Episode(page) => {
            let title = format!("{} {}", page.episode_info.title, page.episode_info.name);
            let streams =
                resolve_normal_ladder(client, &page.video_resource.normal.video_list, None).await?;
            (title, streams)
        }
        PageState::Work(page) => {
            let streams = resolve_work_streams(client, &page).await?;
            (page.title, streams)
        }
    };

    info!("Resolved {} stream variant(s) for {title}", streams.len());

    Ok(vec![MediaData {
        site: SITE,
        title,
        media_type: MediaType::Video,
        streams,
        url: url.to_owned(),
    }])
}

/// Resolves a standalone work, preferring the split-track dynamic ladder and
/// falling back to the normal ladder when no audio track is offered.
async fn resolve_work_streams(
    client: &reqwest::Client,
    page: &WorkPage,
) -> Result<HashMap<String, Stream>, ExtractError> {
    let dynamic = &page.video_resource.dash_120fps.dynamic_video;

    // Audio selection is positional: the list is assumed ordered worst to
    // best, so the last entry backs every variant.
    let Some(best_audio) = dynamic.dynamic_audio_list.last() else {
        return resolve_normal_ladder(client, &page.video_resource.normal.video_list, Some("mp4"))
            .await;
    };

    let audio_url = decode_stream_url(&best_audio.main_url);
    let audio_part = Part {
        size: probe_size(client, &audio_url).await?,
        url: audio_url,
        ext: "mp3".to_owned(),
    };

    let mut streams = HashMap::new();
    for rendition in &dynamic.dynamic_video_list {
        let video_url = decode_stream_url(&rendition.main_url);
        if video_url.is_empty() {
            continue;
        }

        let video_part = Part {
            size: probe_size(client, &video_url).await?,
            url: video_url,
            ext: "mp4".to_owned(),
        };

        streams.insert(
            rendition.definition.clone(),
            Stream {
                id: rendition.definition.clone(),
                quality: rendition.definition.clone(),
                size: video_part.size + audio_part.size,
                parts: vec![video_part, audio_part.clone()],
                ext: Some("mp4".to_owned()),
                need_mux: true,
            },
        );
    }

    Ok(streams)
}

/// Resolves the fixed four-slot ladder into single-part streams. Slots whose
/// URL decodes to nothing are skipped.
async fn resolve_normal_ladder(
    client: &reqwest::Client,
    ladder: &NormalLadder,
    ext: Option<&str>,
) -> Result<HashMap<String, Stream>, ExtractError> {
    let mut streams = HashMap::new();
    for rendition in ladder.slots() {
        let video_url = decode_stream_url(&rendition.main_url);
        if video_url.is_empty() {
            continue;
        }

        let video_part = Part {
            size: probe_size(client, &video_url).await?,
            url: video_url,
            ext: "mp4".to_owned(),
        };

        streams.insert(
            rendition.definition.clone(),
            Stream {
                id: rendition.definition.clone(),
                quality: rendition.definition.clone(),
                size: video_part.size,
                parts: vec![video_part],
                ext: ext.map(str::to_owned),
                need_mux: false,
            },
        );
    }

    Ok(streams)
}

async fn probe_size(client: &reqwest::Client, url: &str) -> Result<u64, ExtractError> {
    request::size(client, url, REFERER)
        .await
        .map_err(ExtractError::Probe)
}
