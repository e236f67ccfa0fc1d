use super::structs::ImageInfoParams;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Expands `{name}` placeholders in an image info template.
///
/// A known parameter without a value expands to nothing. An unknown name is left
/// in place, braces included.
pub fn expand_imageinfo(template: &str, params: &ImageInfoParams) -> String {
    RE_PLACEHOLDER
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.unwrap_or_default().to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
