// src/core/formatter.rs — Plain-text reply to HTML fragment
//
// Only the `**bold**` syntax is recognised. A line wrapped entirely in
// markers becomes a heading; other marker pairs become inline spans.
// Text is not HTML-escaped.

const MARKER: &str = "**";

/// Convert a provider reply into the HTML fragment rendered by the chat page.
///
/// Each `\n`-separated line becomes exactly one element: an `<h2>` when the
/// trimmed line is `**...**` (at least four characters), otherwise a `<p>`
/// with every closed marker pair replaced by a `<span>`.
pub fn format_response(text: &str) -> String {
    text.split('\n')
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_line(line: &str) -> String {
    if let Some(heading) = heading_text(line) {
        return format!(r#"<h2 class="bold-heading">{heading}</h2>"#);
    }
    format!(
        r#"<p class="response-paragraph">{}</p>"#,
        replace_inline_bold(line)
    )
}

/// Inner text of a heading line, or `None` if the line is not one.
/// The length check keeps the two markers from overlapping, so `****`
/// is an empty heading while `**` and `***` are not headings at all.
fn heading_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.len() >= 2 * MARKER.len()
        && trimmed.starts_with(MARKER)
        && trimmed.ends_with(MARKER)
    {
        Some(&trimmed[MARKER.len()..trimmed.len() - MARKER.len()])
    } else {
        None
    }
}

fn replace_inline_bold(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find(MARKER) {
        let after_open = &rest[open + MARKER.len()..];
        // Dangling marker: leave the remainder untouched
        let Some(close) = after_open.find(MARKER) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(r#"<span class="inline-bold">"#);
        out.push_str(&after_open[..close]);
        out.push_str("</span>");
        rest = &after_open[close + MARKER.len()..];
    }

    out.push_str(rest);
    out
}
