use crate::curl::quote::{encode_component, shell_quoted, single_quoted};
use crate::har::record::{ExchangeRecord, PostData};

/// Separator between command parts: a line continuation.
pub const LINE_CONTINUATION: &str = " \\\n";

const INDENT: &str = "  ";

/// Render `record` as a `curl` command that replays the request.
///
/// Never fails: missing pieces simply drop the matching flag.
pub fn synthesize(record: &ExchangeRecord) -> String {
    let request = &record.request;
    let mut parts = vec![format!("curl {}", single_quoted(&request.url))];

    for header in &request.headers {
        if is_skipped_header(&header.name) {
            continue;
        }
        parts.push(format!(
            "{INDENT}-H {}",
            single_quoted(&format!("{}: {}", header.name, header.value))
        ));
    }

    if let Some(cookie) = request.header("cookie") {
        parts.push(format!("{INDENT}-b {}", single_quoted(&cookie.value)));
    }

    if let Some(body) = request.post_data.as_ref().and_then(body_argument) {
        parts.push(format!("{INDENT}--data-raw {}", body));
    }

    parts.join(LINE_CONTINUATION)
}

/// Pseudo-headers, `Cookie` (sent with `-b`) and `Content-Length` (curl
/// computes it).
fn is_skipped_header(name: &str) -> bool {
    name.starts_with(':')
        || name.eq_ignore_ascii_case("cookie")
        || name.eq_ignore_ascii_case("content-length")
}

/// Quoted `--data-raw` argument. Raw text wins over form parameters.
fn body_argument(post_data: &PostData) -> Option<String> {
    if let Some(text) = post_data.text.as_deref().filter(|t| !t.is_empty()) {
        return Some(shell_quoted(text));
    }

    let params = post_data.params.as_deref().filter(|p| !p.is_empty())?;
    let form = params
        .iter()
        .map(|p| {
            format!(
                "{}={}",
                encode_component(&p.name),
                encode_component(p.value.as_deref().unwrap_or_default())
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    Some(single_quoted(&form))
}
