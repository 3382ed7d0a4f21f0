use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Stylesheet, currency icon and recipe are compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static MESETA_ICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

/// Data URI for the N-Meseta coin; also used as the window favicon.
pub fn meseta_icon_data_uri() -> &'static str {
    MESETA_ICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/n-meseta.svg"))
        .as_str()
}

/// Raw bytes of `assets/recipe.json`, if it was embedded.
pub fn recipe_json() -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&canonical_asset_path("/assets/recipe.json")).map(|file| file.data)
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_data_uri(path: &str) -> String {
    let asset = load_asset(path);
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    format!("data:{mime};base64,{encoded}")
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed
        .strip_prefix("assets/")
        .unwrap_or(trimmed)
        .to_string()
}

fn guess_mime(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);
        output.push(if chunk.len() > 1 {
            TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char
        } else {
            '='
        });
        output.push(if chunk.len() > 2 {
            TABLE[(b2 & 0b0011_1111) as usize] as char
        } else {
            '='
        });
    }

    output
}
