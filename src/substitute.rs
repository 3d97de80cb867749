use layered_anaphora_document::Document;

use crate::lexicon::CLOSING_PUNCTUATION;
use crate::resolver::Resolution;

/// Rewrite the document with each resolved pronoun replaced by the surface
/// text of its antecedent.
///
/// Tokens are joined by single spaces, except that no space precedes closing
/// punctuation. Unresolved pronouns are kept as they are.
pub fn substitute(document: &Document, resolution: &Resolution) -> String {
    let mut output = String::new();
    for token in document.tokens() {
        let replacement = resolution
            .get(token.index)
            .and_then(|entry| entry.antecedent_text.as_deref());
        let text = replacement.unwrap_or(&token.text);
        if !output.is_empty() && !CLOSING_PUNCTUATION.contains(text) {
            output.push(' ');
        }
        output.push_str(text);
    }
    output.trim().to_string()
}
