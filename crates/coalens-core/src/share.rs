//! Share-link construction and parsing.
//!
//! A share link is `{base}/share-page?resultId={token}`. The token is the
//! server-minted analysis id; no other state travels in the link.

/// Join two path segments, collapsing duplicate `/` at the seam.
///
/// The base keeps its scheme and host untouched; only trailing slashes on
/// `base` and leading slashes on `rest` are trimmed.
pub fn join_paths(base: &str, rest: &str) -> String {
  let base = base.trim_end_matches('/');
  let rest = rest.trim_start_matches('/');
  if rest.is_empty() {
    base.to_string()
  } else if base.is_empty() {
    rest.to_string()
  } else {
    format!("{base}/{rest}")
  }
}

/// Build the shareable URL for an analysis result token.
pub fn share_url(base: &str, result_id: &str) -> String {
  join_paths(base, &format!("share-page?resultId={result_id}"))
}

/// Extract the `resultId` token from a share URL or a bare query string.
///
/// Returns `None` when no `resultId` parameter is present or its value is
/// empty.
pub fn parse_result_id(url: &str) -> Option<&str> {
  let query = match url.split_once('?') {
    Some((_, q)) => q,
    None => url,
  };
  query
    .split('&')
    .filter_map(|pair| pair.split_once('='))
    .find(|(key, _)| *key == "resultId")
    .map(|(_, value)| value)
    .filter(|value| !value.is_empty())
}
