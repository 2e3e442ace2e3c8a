pub mod error;
pub mod extract;
pub mod state;
pub mod utils;

pub use error::ExtractError;
pub use extract::extract;

pub const SITE: &str = "西瓜视频 ixigua.com";

/// Referer sent with the page fetch and with every size probe.
pub const REFERER: &str = "https://www.ixigua.com";

/// The page tailors its hydrated state to a desktop browser; anything else
/// gets a stripped-down shell without the stream lists.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/79.0.3945.88 Safari/537.36";

/// Anonymous session cookie for cookie-less invocations. Opaque bytes, much
/// like a public client ID; replace via `--cookie` / `XIGUA_COOKIE` once it
/// goes stale.
pub(crate) const DEFAULT_COOKIE: &str = "MONITOR_WEB_ID=7892c49b-296e-4499-8704-e47c1b150c18; ixigua-a-s=1; ttcid=af99669b6304453480454f150701d5c226; BD_REF=1; __ac_nonce=060d88ff000a75e8d17eb; __ac_signature=_02B4Z6wo00f01kX9ZpgAAIDAKIBBQUIPYT5F2WIAAPG2ad; ttwid=1%7CcIsVF_3vqSIk4XErhPB0H2VaTxT0tdsTMRbMjrJOPN8%7C1624806049%7C08ce7dd6f7d20506a41ba0a331ef96a6505d96731e6ad9f6c8c709f53f227ab1";

/// An explicit cookie wins; an empty one falls back to the built-in default.
pub(crate) fn resolve_cookie(cookie: &str) -> &str {
    if cookie.is_empty() { DEFAULT_COOKIE } else { cookie }
}
