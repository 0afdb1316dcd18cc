use std::borrow::Cow;

use url::Url;

/// Reduces a match target to the path the rules are matched against.
///
/// `http` and `https` URLs become their path plus `?query`, sliced from the
/// argument as written so that no percent-encoding or dot-segment removal
/// happens. Anything else is used as given.
pub fn path_of(target: &str) -> Cow<'_, str> {
    let is_web_url = Url::parse(target)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);
    if !is_web_url {
        return Cow::Borrowed(target);
    }

    let Some((scheme, rest)) = target.split_once("://") else {
        return Cow::Borrowed(target);
    };
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Cow::Borrowed(target);
    }

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let after_authority = &rest[authority_end..];
    let path_and_query = after_authority
        .split_once('#')
        .map_or(after_authority, |(before, _)| before);

    if path_and_query.starts_with('/') {
        Cow::Borrowed(path_and_query)
    } else {
        Cow::Owned(format!("/{path_and_query}"))
    }
}
