//! Inline markdown splitting.
//!
//! Inline text is split into a flat sequence of [`InlineSpan`]s by a fixed
//! series of passes. Each pass only touches spans that are still plain, so a
//! span that has become bold, code, italic, an image or a link is inert to
//! every later pass. Nested styles are not supported.
//!
//! Delimiter balance is checked by counting raw occurrences, so `**` must be
//! split before any single-character delimiter that is a substring of it.

use log::trace;
use pagesmith_core::{InlineKind, InlineSpan, PagesmithError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `![alt](url)`
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// `[text](url)`. Also matches the tail of an image, so images go first.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Delimiter passes, longest delimiter first.
const DELIMITER_PASSES: &[(&str, InlineKind)] = &[
    ("**", InlineKind::Bold),
    ("`", InlineKind::Code),
    ("_", InlineKind::Italic),
];

/// Find every `![alt](url)` in `text`, left to right.
pub fn extract_images(text: &str) -> Result<Vec<(String, String)>> {
    extract_pairs(&IMAGE_RE, text)
}

/// Find every `[text](url)` in `text`, left to right.
pub fn extract_links(text: &str) -> Result<Vec<(String, String)>> {
    extract_pairs(&LINK_RE, text)
}

fn extract_pairs(re: &Regex, text: &str) -> Result<Vec<(String, String)>> {
    if text.is_empty() {
        return Err(PagesmithError::EmptyInput);
    }
    Ok(re
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect())
}

/// Split plain spans on `delimiter`, giving the enclosed pieces `kind`.
///
/// Pieces at even positions stay plain, odd positions take `kind`, and
/// empty pieces are dropped. Non-plain spans pass through unchanged.
pub fn split_by_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: InlineKind,
) -> Result<Vec<InlineSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        if span.text.matches(delimiter).count() % 2 != 0 {
            return Err(PagesmithError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (idx, piece) in span.text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if idx % 2 == 0 { InlineKind::Plain } else { kind };
            out.push(InlineSpan::new(piece, piece_kind));
        }
    }

    Ok(out)
}

/// Cut `![alt](url)` out of plain spans as image spans.
pub fn split_images(spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>> {
    split_matches(spans, extract_images, |alt, url| {
        (format!("![{}]({})", alt, url), InlineSpan::image(alt, url))
    })
}

/// Cut `[text](url)` out of plain spans as link spans.
pub fn split_links(spans: Vec<InlineSpan>) -> Result<Vec<InlineSpan>> {
    split_matches(spans, extract_links, |text, url| {
        (format!("[{}]({})", text, url), InlineSpan::link(text, url))
    })
}

/// Shared cutter for images and links.
///
/// `extract` finds the matches; `build` returns the exact source text of a
/// match together with the span that replaces it.
fn split_matches<E, B>(spans: Vec<InlineSpan>, extract: E, build: B) -> Result<Vec<InlineSpan>>
where
    E: Fn(&str) -> Result<Vec<(String, String)>>,
    B: Fn(&str, &str) -> (String, InlineSpan),
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = extract(&span.text)?;
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        for (text, url) in &matches {
            let (source, replacement) = build(text, url);
            let Some((before, after)) = rest.split_once(source.as_str()) else {
                continue;
            };
            if !before.trim().is_empty() {
                out.push(InlineSpan::plain(before));
            }
            out.push(replacement);
            rest = after;
        }

        if !rest.trim().is_empty() {
            out.push(InlineSpan::plain(rest));
        }
    }

    Ok(out)
}

/// Run the full inline pipeline over `text`.
///
/// Order: bold, code, italic, images, links.
pub fn text_to_spans(text: &str) -> Result<Vec<InlineSpan>> {
    let mut spans = vec![InlineSpan::plain(text)];
    for (delimiter, kind) in DELIMITER_PASSES {
        spans = split_by_delimiter(spans, delimiter, *kind)?;
    }
    spans = split_images(spans)?;
    spans = split_links(spans)?;
    trace!("split {:?} into {} spans", text, spans.len());
    Ok(spans)
}
