use serde::Deserialize;
use tracing::debug;

use crate::xigua::error::ExtractError;

/// One advertised rendition. `main_url` is base64 on the wire and may be
/// empty for qualities the work was never transcoded to.
#[derive(Debug, Default, Deserialize)]
pub struct Rendition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub main_url: String,
}

/// Fixed four-slot quality ladder of the `normal` resource, lowest first.
#[derive(Debug, Default, Deserialize)]
pub struct NormalLadder {
    #[serde(default)]
    pub video_1: Rendition,
    #[serde(default)]
    pub video_2: Rendition,
    #[serde(default)]
    pub video_3: Rendition,
    #[serde(default)]
    pub video_4: Rendition,
}

impl NormalLadder {
    pub fn slots(&self) -> [&Rendition; 4] {
        [&self.video_1, &self.video_2, &self.video_3, &self.video_4]
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NormalVariant {
    #[serde(default)]
    pub video_list: NormalLadder,
}

#[derive(Debug, Default, Deserialize)]
pub struct DynamicVideo {
    #[serde(default)]
    pub dynamic_video_list: Vec<Rendition>,
    #[serde(default)]
    pub dynamic_audio_list: Vec<Rendition>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashVariant {
    #[serde(default)]
    pub dynamic_video: DynamicVideo,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoResource {
    #[serde(default)]
    pub normal: NormalVariant,
    #[serde(default)]
    pub dash_120fps: DashVariant,
}

/// Packer payload of a standalone work. The required `video` key doubles as
/// the shape discriminant.
#[derive(Debug, Deserialize)]
struct WorkPacker {
    video: WorkPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_resource: VideoResource,
}

/// Packer payload of an album episode. The required `episode_info` key
/// doubles as the shape discriminant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodePage {
    pub episode_info: EpisodeInfo,
    #[serde(default)]
    pub video_resource: VideoResource,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Hydrated<P> {
    any_video: AnyVideo<P>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnyVideo<P> {
    gid_information: GidInformation<P>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GidInformation<P> {
    packer_data: P,
}

impl<P> Hydrated<P> {
    fn into_packer(self) -> P {
        self.any_video.gid_information.packer_data
    }
}

/// The hydrated state of a watch page, resolved to one of the two shapes
/// found under the `anyVideo.gidInformation.packerData` envelope.
#[derive(Debug)]
pub enum PageState {
    Episode(EpisodePage),
    Work(WorkPage),
}

impl PageState {
    /// Tries the episode shape first and falls back to the single-work
    /// shape, so a page carrying both blocks resolves as an episode.
    pub fn decode(json: &str) -> Result<Self, ExtractError> {
        match serde_json::from_str::<Hydrated<EpisodePage>>(json) {
            Ok(hydrated) => Ok(Self::Episode(hydrated.into_packer())),
            Err(episode_err) => {
                debug!("not an episode page ({episode_err}), trying the single-work shape");

                serde_json::from_str::<Hydrated<WorkPacker>>(json)
                    .map(|hydrated| Self::Work(hydrated.into_packer().video))
                    .map_err(ExtractError::Shape)
            }
        }
    }
}
