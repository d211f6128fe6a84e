//! Editor queries over a single line: completion candidates and hover text.
//!
//! Columns are byte offsets into the line. A cursor sits between characters,
//! so column `n` is just after the `n`th byte.

use log::trace;

use crate::{
    catalog::{Catalog, OpcodeEntry},
    lexer::{Tokenizer, is_word_char},
    token::{Token, TokenKind},
};

/// The word-like token (mnemonic, directive, identifier) covering byte `offset`.
pub fn word_at<'a>(catalog: &Catalog, line: &'a str, offset: usize) -> Option<Token<'a>> {
    let tokens = Tokenizer::new(catalog).tokenize_line(line, 0);
    let token = tokens.token_at(offset)?;
    let covers = token.start <= offset && offset < token.end();
    let wordy = match token.kind {
        TokenKind::Keyword | TokenKind::Identifier | TokenKind::Label => true,
        // a lone `.` while a directive is being typed
        TokenKind::Error => token.text.starts_with('.'),
        _ => false,
    };
    (covers && wordy).then(|| token.clone())
}

/// Text of the word ending at `column`, or the empty string when the cursor
/// does not follow a word.
fn prefix_at<'a>(catalog: &Catalog, line: &'a str, column: usize) -> &'a str {
    let column = column.min(line.len());
    if column == 0 || !line.is_char_boundary(column) {
        return "";
    }
    let Some(token) = word_at(catalog, line, column - 1) else {
        return "";
    };
    let prefix = &line[token.start..column];
    let body = prefix.strip_prefix('.').unwrap_or(prefix);
    if body.chars().all(is_word_char) {
        prefix
    } else {
        ""
    }
}

/// Catalog entries completing the word typed up to `column`.
///
/// # Examples
///
/// ```
///  use smali_syntax::{Catalog, query};
///
///  let found = query::completions(Catalog::builtin(), "    invoke-st", 13);
///  assert!(found.iter().any(|e| e.mnemonic == "invoke-static"));
///  assert!(found.iter().all(|e| e.mnemonic.starts_with("invoke-st")));
/// ```
pub fn completions<'c>(catalog: &'c Catalog, line: &str, column: usize) -> Vec<&'c OpcodeEntry> {
    let prefix = prefix_at(catalog, line, column);
    trace!("completing `{prefix}`");
    catalog.completions(prefix).collect()
}

/// The entry for the mnemonic or directive under the cursor, for hover text.
pub fn quick_info<'c>(catalog: &'c Catalog, line: &str, column: usize) -> Option<&'c OpcodeEntry> {
    let token = word_at(catalog, line, column)?;
    catalog.lookup(token.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[test]
    fn empty_prefix_lists_everything() {
        assert_eq!(completions(catalog(), "", 0).len(), catalog().len());
        assert_eq!(completions(catalog(), "    ", 4).len(), catalog().len());
    }

    #[test]
    fn mnemonic_prefix() {
        let found = completions(catalog(), "  const-wi", 10);
        let names: Vec<_> = found.iter().map(|e| e.mnemonic).collect();
        assert!(names.contains(&"const-wide"));
        assert!(names.contains(&"const-wide/16"));
        assert!(!names.contains(&"const"));
    }

    #[test]
    fn directive_prefix() {
        let found = completions(catalog(), ".", 1);
        assert!(!found.is_empty());
        assert!(found.iter().all(|e| e.is_directive()));

        let found = completions(catalog(), ".me", 3);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].mnemonic, ".method");
    }

    #[test]
    fn prefix_stops_at_cursor() {
        // cursor after `mo` in `move-result`
        let found = completions(catalog(), "move-result v0", 2);
        assert!(found.iter().any(|e| e.mnemonic == "move"));
        assert!(found.iter().any(|e| e.mnemonic == "monitor-enter"));
    }

    #[test]
    fn hover_on_mnemonic() {
        let line = "    invoke-virtual {v0}, Ljava/lang/Object;->hashCode()I";
        let entry = quick_info(catalog(), line, 8).unwrap();
        assert_eq!(entry.mnemonic, "invoke-virtual");
        assert!(!entry.description.is_empty());

        assert!(quick_info(catalog(), line, 2).is_none());
        assert!(quick_info(catalog(), line, 21).is_none());
    }

    #[test]
    fn hover_on_directive() {
        let entry = quick_info(catalog(), ".locals 3", 3).unwrap();
        assert_eq!(entry.mnemonic, ".locals");
    }
}
