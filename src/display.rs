use std::collections::BTreeMap;
use std::fmt::{self, Write};

use layered_anaphora_document::{Document, Span};
use unicode_width::UnicodeWidthStr;

use crate::resolver::Resolution;

/// Zero-based index to a base-26 label: A, B, ..., Z, AA, AB, ...
fn base26_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        let remainder = n % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// Renders a document with its resolution underneath.
///
/// ```text
/// The  manager  arrived  .  She  sat  .
/// ╰──────────╯[A] The manager
///                           ╰─╯ She
///                             └─antecedent─>[A]
/// ```
pub struct ResolutionDisplay<'a> {
    document: &'a Document,
    resolution: &'a Resolution,
}

impl<'a> ResolutionDisplay<'a> {
    pub fn new(document: &'a Document, resolution: &'a Resolution) -> Self {
        Self {
            document,
            resolution,
        }
    }

    /// Antecedent spans in document order, labelled [A], [B], ...
    fn span_labels(&self) -> BTreeMap<(usize, usize), (Span, String)> {
        let mut spans: Vec<Span> = self.resolution.iter().filter_map(|entry| entry.antecedent).collect();
        spans.sort_by_key(|span| (span.start, span.end));
        spans.dedup_by_key(|span| (span.start, span.end));
        spans
            .into_iter()
            .enumerate()
            .map(|(i, span)| ((span.start, span.end), (span, format!("[{}]", base26_label(i)))))
            .collect()
    }
}

fn marker(f: &mut fmt::Formatter<'_>, start: usize, end: usize) -> fmt::Result {
    for _ in 0..start {
        f.write_char(' ')?;
    }
    f.write_char('╰')?;
    for _ in (start + 1)..end.saturating_sub(1) {
        f.write_char('─')?;
    }
    if end - start > 1 {
        f.write_char('╯')?;
    }
    Ok(())
}

impl fmt::Display for ResolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut starts = Vec::with_capacity(self.document.len());
        let mut ends = Vec::with_capacity(self.document.len());

        let mut opening_line = String::new();
        for (index, token) in self.document.tokens().iter().enumerate() {
            if index > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            ends.push(UnicodeWidthStr::width(&*opening_line));
        }
        f.write_str(&opening_line)?;

        let labels = self.span_labels();
        for (span, label) in labels.values() {
            f.write_char('\n')?;
            marker(f, starts[span.start], ends[span.end - 1])?;
            write!(f, "{} {}", label, self.document.span_text(span))?;
        }

        for entry in self.resolution {
            let token = entry.anaphor.token;
            f.write_char('\n')?;
            marker(f, starts[token], ends[token])?;
            write!(f, " {}", entry.pronoun)?;

            f.write_char('\n')?;
            for _ in 0..starts[token] + 2 {
                f.write_char(' ')?;
            }
            match entry
                .antecedent
                .and_then(|span| labels.get(&(span.start, span.end)))
            {
                Some((_, label)) => write!(f, "└─antecedent─>{}", label)?,
                None => f.write_str("└─antecedent─>∅")?,
            }
        }
        Ok(())
    }
}
