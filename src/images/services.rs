use async_trait::async_trait;
use serde_json::Value;

use crate::utils::{is_truthy, js_string, to_number, unix_millis};

pub const MAX_IMAGES: usize = 4;
pub const DEFAULT_IMAGES: usize = 4;

/// Turns a prompt into image URLs. The only implementation today hands out
/// placeholder photos; a real model backend would slot in here.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, count: usize) -> anyhow::Result<Vec<String>>;
}

/// Seeds picsum.photos with `<prompt>-<index>-<unix ms>`, so identical prompts
/// get different pictures on every call.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderImages;

#[async_trait]
impl ImageGenerator for PlaceholderImages {
    async fn generate(&self, prompt: &str, count: usize) -> anyhow::Result<Vec<String>> {
        Ok(placeholder_urls(prompt, count, unix_millis()))
    }
}

pub fn placeholder_urls(prompt: &str, count: usize, now_ms: i128) -> Vec<String> {
    (0..count)
        .map(|i| {
            let seed = urlencoding::encode(&format!("{}-{}-{}", prompt, i, now_ms)).into_owned();
            format!("https://picsum.photos/seed/{}/800/1200", seed)
        })
        .collect()
}

/// How many images to produce for the requested `count`.
///
/// Absent, zero and non-numeric values fall back to the default; the result
/// is capped, fractions are truncated and negatives yield nothing.
pub fn image_count(count: Option<&Value>) -> usize {
    let requested = count.map(to_number).unwrap_or(0.0);
    let requested = if requested == 0.0 || requested.is_nan() {
        DEFAULT_IMAGES as f64
    } else {
        requested
    };
    let capped = requested.min(MAX_IMAGES as f64);
    if capped <= 0.0 {
        0
    } else {
        capped.trunc() as usize
    }
}

/// Text of a truthy prompt, `None` when the prompt is missing or falsy.
pub fn prompt_text(prompt: Option<&Value>) -> Option<String> {
    let prompt = prompt?;
    is_truthy(prompt).then(|| js_string(prompt))
}
