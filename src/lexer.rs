//! Line tokenizer.
//!
//! Smali statements never span lines, so the tokenizer works one line at a
//! time. Block nesting is the parser's business.

use std::str::FromStr;

use rangemap::RangeMap;
use winnow::{
    ModalParser, ModalResult, Parser,
    ascii::{digit1, hex_digit1},
    combinator::{alt, delimited, opt, preceded, repeat, terminated},
    error::{ErrMode, InputError},
    token::{any, literal, none_of, one_of, rest, take_while},
};

use crate::{
    catalog::Catalog,
    directive::{BlockKind, Directive},
    modifier::{AccessFlags, AnnotationVisibility},
    token::{LiteralWidth, Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Whitespace,
    Comment,
    Str,
    Number,
    HexNumber,
    Punct,
    Directive,
    Word,
}

/// Anything but whitespace, control characters and smali punctuation.
/// Dex simple names allow most of Unicode, so words are not limited to ASCII.
pub(crate) fn is_word_char(c: char) -> bool {
    !c.is_whitespace()
        && !c.is_control()
        && !matches!(
            c,
            ';' | '<' | '>' | '(' | ')' | ',' | '{' | '}' | '[' | ']' | ':' | '.' | '=' | '"' | '\'' | '#' | '@'
        )
}

/// Succeeds where a number may end: before a non-word character or `->`.
fn number_end<'a>(input: &mut &'a str) -> ModalResult<(), InputError<&'a str>> {
    match input.chars().next() {
        Some(c) if is_word_char(c) && !input.starts_with("->") => {
            Err(ErrMode::Backtrack(InputError::at(*input)))
        }
        _ => Ok(()),
    }
}

/// A run of word characters, stopping before `->`.
fn word<'a>(input: &mut &'a str) -> ModalResult<&'a str, InputError<&'a str>> {
    let s = *input;
    let mut end = 0;
    for (i, c) in s.char_indices() {
        if !is_word_char(c) || (c == '-' && s[i + 1..].starts_with('>')) {
            break;
        }
        end = i + c.len_utf8();
    }
    if end == 0 {
        return Err(ErrMode::Backtrack(InputError::at(s)));
    }
    *input = &s[end..];
    Ok(&s[..end])
}

fn string_literal<'a>() -> impl ModalParser<&'a str, &'a str, InputError<&'a str>> {
    (
        one_of('"'),
        repeat(
            0..,
            alt((preceded(one_of('\\'), any).void(), none_of(['"', '\\']).void())),
        )
        .map(|()| ()),
        one_of('"'),
    )
        .take()
}

fn char_literal<'a>() -> impl ModalParser<&'a str, &'a str, InputError<&'a str>> {
    delimited(
        one_of('\''),
        alt((
            preceded(
                one_of('\\'),
                alt((
                    preceded(one_of('u'), take_while(4, |c: char| c.is_ascii_hexdigit())).void(),
                    any.void(),
                )),
            ),
            none_of(['\'', '\\']).void(),
        )),
        one_of('\''),
    )
    .take()
}

fn hex_number<'a>() -> impl ModalParser<&'a str, &'a str, InputError<&'a str>> {
    terminated(
        (
            opt(one_of('-')),
            alt((literal("0x"), literal("0X"))),
            hex_digit1,
            opt(one_of(['L', 'l', 't', 'T', 's', 'S'])),
        )
            .take(),
        number_end,
    )
}

fn decimal_number<'a>() -> impl ModalParser<&'a str, &'a str, InputError<&'a str>> {
    terminated(
        alt((
            (
                opt(one_of('-')),
                digit1,
                opt((one_of('.'), digit1)),
                opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
                opt(one_of(['L', 'l', 't', 'T', 's', 'S', 'f', 'F', 'd', 'D'])),
            )
                .take(),
            (
                opt(one_of('-')),
                alt((literal("Infinity"), literal("NaN"))),
                opt(one_of(['f', 'F', 'd', 'D'])),
            )
                .take(),
        )),
        number_end,
    )
}

fn directive_word<'a>() -> impl ModalParser<&'a str, &'a str, InputError<&'a str>> {
    (
        one_of('.'),
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
    )
        .take()
}

fn lexeme<'a>() -> impl ModalParser<&'a str, Lexeme, InputError<&'a str>> {
    alt((
        take_while(1.., char::is_whitespace).value(Lexeme::Whitespace),
        (one_of('#'), rest).value(Lexeme::Comment),
        string_literal().value(Lexeme::Str),
        char_literal().value(Lexeme::Str),
        hex_number().value(Lexeme::HexNumber),
        decimal_number().value(Lexeme::Number),
        alt((literal("->"), literal(".."))).value(Lexeme::Punct),
        directive_word().value(Lexeme::Directive),
        alt((literal("<init>"), literal("<clinit>"))).value(Lexeme::Word),
        word.value(Lexeme::Word),
        one_of([',', '{', '}', '[', ']', ':', '(', ')', ';', '=', '/', '$', '@']).value(Lexeme::Punct),
    ))
}

fn is_register(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some('v' | 'p'))
        && word.len() > 1
        && chars.all(|c| c.is_ascii_digit())
}

fn is_transient(punct: &str) -> bool {
    matches!(punct, "{" | "}" | "[" | "]" | ":" | ",")
}

fn literal_width(text: &str, hex: bool) -> Option<LiteralWidth> {
    let last = text.chars().last()?;
    if hex && !matches!(last, 'l' | 'L' | 't' | 'T' | 's' | 'S') {
        return None;
    }
    LiteralWidth::from_suffix(last)
}

/// Where the lexer stands within a line. Taken from [`Lexer::state`] and
/// handed back to [`Tokenizer::resume`] to continue lexing from a token
/// boundary without starting over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexState {
    offset: usize,
    line: usize,
    significant: usize,
    directive: Option<Directive>,
    after_end: bool,
    label_next: bool,
}

impl LexState {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

/// Splits smali source lines into [`Token`]s.
///
/// The catalog decides which head words are instruction mnemonics.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'c> {
    catalog: &'c Catalog,
    keep_whitespace: bool,
}

impl<'c> Tokenizer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            keep_whitespace: false,
        }
    }

    /// Also emit `Whitespace` tokens, so that the tokens cover the line without gaps.
    pub fn with_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn lexer<'a>(&self, line: &'a str, line_no: usize) -> Lexer<'a, 'c> {
        self.resume(line, LexState::new(line_no))
    }

    /// Continues lexing `line` from a previously saved state.
    pub fn resume<'a>(&self, line: &'a str, mut state: LexState) -> Lexer<'a, 'c> {
        state.offset = state.offset.min(line.len());
        while !line.is_char_boundary(state.offset) {
            state.offset += 1;
        }
        Lexer {
            catalog: self.catalog,
            keep_whitespace: self.keep_whitespace,
            line,
            state,
        }
    }

    /// Tokenizes a single line.
    ///
    /// # Examples
    ///
    /// ```
    ///  use smali_syntax::{Catalog, TokenKind, Tokenizer};
    ///
    ///  let tokenizer = Tokenizer::new(Catalog::builtin());
    ///  let tokens = tokenizer.tokenize("move v0, v1");
    ///  let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    ///  assert_eq!(
    ///      kinds,
    ///      [TokenKind::Keyword, TokenKind::Register, TokenKind::Delimiter, TokenKind::Register]
    ///  );
    /// ```
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<Token<'a>> {
        self.lexer(line, 0).collect()
    }

    pub fn tokenize_line<'a>(&self, line: &'a str, line_no: usize) -> TokenLine<'a> {
        TokenLine::new(self.lexer(line, line_no).collect())
    }
}

/// Iterator over the tokens of one line.
#[derive(Debug, Clone)]
pub struct Lexer<'a, 'c> {
    catalog: &'c Catalog,
    keep_whitespace: bool,
    line: &'a str,
    state: LexState,
}

impl<'a> Lexer<'a, '_> {
    /// Snapshot to resume from; valid between calls to `next`.
    pub fn state(&self) -> LexState {
        self.state
    }

    fn token(&self, kind: TokenKind, start: usize, len: usize) -> Token<'a> {
        Token {
            kind,
            text: &self.line[start..start + len],
            start,
            len,
            line: self.state.line,
            width: None,
            transient: false,
        }
    }

    /// A `:` opens a label when it starts a word after whitespace, `{`, `,`,
    /// `..` or `->`.
    fn label_allowed(&self, offset: usize) -> bool {
        let head = &self.line[..offset];
        let before = head.chars().next_back();
        let after = self.line[offset + 1..].chars().next();
        (matches!(before, None | Some('{' | ','))
            || before.is_some_and(char::is_whitespace)
            || head.ends_with("..")
            || head.ends_with("->"))
            && after.is_some_and(is_word_char)
    }

    fn classify_word(&self, word: &str) -> TokenKind {
        let state = &self.state;
        if state.after_end && (BlockKind::from_end_word(word).is_some() || word == "local") {
            return TokenKind::Keyword;
        }
        if is_register(word) {
            return TokenKind::Register;
        }
        if state.significant == 0
            && self
                .catalog
                .lookup(word)
                .is_some_and(|entry| !entry.is_directive())
        {
            return TokenKind::Keyword;
        }
        let modifier = match state.directive {
            Some(Directive::Class | Directive::Field | Directive::Method) => {
                AccessFlags::is_modifier_word(word)
            }
            Some(Directive::Annotation) => AnnotationVisibility::from_str(word).is_ok(),
            _ => false,
        };
        if modifier || matches!(word, "null" | "true" | "false") {
            return TokenKind::Keyword;
        }
        TokenKind::Identifier
    }

    fn record(&mut self, token: &Token<'a>) {
        if token.kind.is_trivia() {
            return;
        }
        let keyword = token.kind == TokenKind::Keyword;
        if self.state.significant == 0 && keyword && token.text.starts_with('.') {
            self.state.directive = Directive::from_str(token.text).ok();
        }
        self.state.after_end = keyword && matches!(token.text, ".end" | ".restart");
        self.state.significant += 1;
    }

    fn lex(&mut self) -> Option<Token<'a>> {
        let start = self.state.offset;
        let rest = &self.line[start..];
        if rest.is_empty() {
            return None;
        }

        if self.state.label_next {
            self.state.label_next = false;
            let mut input = rest;
            if let Ok(name) = word(&mut input) {
                self.state.offset += name.len();
                return Some(self.token(TokenKind::Label, start, name.len()));
            }
        }

        if rest.starts_with(':') && self.label_allowed(start) {
            self.state.label_next = true;
            self.state.offset += 1;
            let mut colon = self.token(TokenKind::Delimiter, start, 1);
            colon.transient = true;
            return Some(colon);
        }

        let mut input = rest;
        // a member name, even one spelled like `NaN` or `Infinity`
        let member = match self.line[..start].ends_with("->") {
            true => word.value(Lexeme::Word).parse_next(&mut input).ok(),
            false => None,
        };
        let Ok(kind) = member.map_or_else(|| lexeme().parse_next(&mut input), Ok) else {
            self.state.offset = self.line.len();
            return Some(self.token(TokenKind::Error, start, rest.len()));
        };
        let len = rest.len() - input.len();
        let text = &rest[..len];
        self.state.offset += len;

        let mut token = self.token(TokenKind::Error, start, len);
        token.kind = match kind {
            Lexeme::Whitespace => TokenKind::Whitespace,
            Lexeme::Comment => TokenKind::Comment,
            Lexeme::Str => TokenKind::String,
            Lexeme::Number => {
                token.width = literal_width(text, false);
                TokenKind::Number
            }
            Lexeme::HexNumber => {
                token.width = literal_width(text, true);
                TokenKind::HexNumber
            }
            Lexeme::Punct => {
                token.transient = is_transient(text);
                TokenKind::Delimiter
            }
            Lexeme::Directive if Directive::from_str(text).is_ok() => TokenKind::Keyword,
            Lexeme::Directive => TokenKind::Identifier,
            Lexeme::Word => self.classify_word(text),
        };
        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.lex()?;
            self.record(&token);
            if token.kind == TokenKind::Whitespace && !self.keep_whitespace {
                continue;
            }
            return Some(token);
        }
    }
}

/// The tokens of one line plus an offset index for hover and selection.
#[derive(Debug, Clone, Default)]
pub struct TokenLine<'a> {
    tokens: Vec<Token<'a>>,
    index: RangeMap<usize, usize>,
}

impl<'a> TokenLine<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        let mut index = RangeMap::new();
        for (i, t) in tokens.iter().enumerate() {
            if t.len > 0 {
                index.insert(t.start..t.end(), i);
            }
        }
        Self { tokens, index }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token containing byte `offset`, else the closest token before it,
    /// else the first token. `None` only for a line without tokens.
    pub fn token_at(&self, offset: usize) -> Option<&Token<'a>> {
        if let Some(&i) = self.index.get(&offset) {
            return self.tokens.get(i);
        }
        let after = self.tokens.partition_point(|t| t.start <= offset);
        match after {
            0 => self.tokens.first(),
            n => self.tokens.get(n - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(line: &str) -> Vec<Token<'_>> {
        Tokenizer::new(Catalog::builtin()).tokenize(line)
    }

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        tokenize(line).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t").is_empty());
    }

    #[test]
    fn comment_line() {
        let tokens = tokenize("# comment");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].len, 9);
    }

    #[test]
    fn instruction() {
        assert_eq!(
            kinds("    const/4 v1, 0x2   # two"),
            vec![
                (TokenKind::Keyword, "const/4"),
                (TokenKind::Register, "v1"),
                (TokenKind::Delimiter, ","),
                (TokenKind::HexNumber, "0x2"),
                (TokenKind::Comment, "# two"),
            ]
        );
        let tokens = tokenize("const-wide v0, -0x1L");
        assert_eq!(tokens[3].width, Some(LiteralWidth::Long));
        assert_eq!(tokens[3].text, "-0x1L");
        assert!(tokens[2].transient);
    }

    #[test]
    fn labels() {
        assert_eq!(
            kinds(":loop_0"),
            vec![(TokenKind::Delimiter, ":"), (TokenKind::Label, "loop_0")]
        );
        let tokens = tokenize("goto :loop_0");
        assert_eq!(tokens[1].text, ":");
        assert!(tokens[1].transient);
        assert_eq!(tokens[2].kind, TokenKind::Label);
        assert_eq!(tokens[2].text, "loop_0");
    }

    #[test]
    fn labels_without_spaces() {
        assert_eq!(
            kinds("{:a..:b}"),
            vec![
                (TokenKind::Delimiter, "{"),
                (TokenKind::Delimiter, ":"),
                (TokenKind::Label, "a"),
                (TokenKind::Delimiter, ".."),
                (TokenKind::Delimiter, ":"),
                (TokenKind::Label, "b"),
                (TokenKind::Delimiter, "}"),
            ]
        );
        assert_eq!(
            kinds("0x1->:a"),
            vec![
                (TokenKind::HexNumber, "0x1"),
                (TokenKind::Delimiter, "->"),
                (TokenKind::Delimiter, ":"),
                (TokenKind::Label, "a"),
            ]
        );
        assert_eq!(kinds("-5->:b")[0], (TokenKind::Number, "-5"));
    }

    #[test]
    fn field_colon_is_not_a_label() {
        assert_eq!(
            kinds(".field public static final TAG:Ljava/lang/String;"),
            vec![
                (TokenKind::Keyword, ".field"),
                (TokenKind::Keyword, "public"),
                (TokenKind::Keyword, "static"),
                (TokenKind::Keyword, "final"),
                (TokenKind::Identifier, "TAG"),
                (TokenKind::Delimiter, ":"),
                (TokenKind::Identifier, "Ljava/lang/String"),
                (TokenKind::Delimiter, ";"),
            ]
        );
    }

    #[test]
    fn method_reference() {
        let tokens = kinds("invoke-direct {p0}, Ljava/lang/Object;-><init>()V");
        assert_eq!(tokens[0], (TokenKind::Keyword, "invoke-direct"));
        assert_eq!(tokens[2], (TokenKind::Register, "p0"));
        assert!(tokens.contains(&(TokenKind::Delimiter, "->")));
        assert!(tokens.contains(&(TokenKind::Identifier, "<init>")));
    }

    #[test]
    fn unicode_member_names() {
        let tokens = kinds("sget v0, Lcom/a/B;->\u{2010}x:I");
        assert!(tokens.iter().all(|(kind, _)| *kind != TokenKind::Error));
        assert!(tokens.contains(&(TokenKind::Identifier, "\u{2010}x")));
        assert_eq!(kinds("\u{00e9}t\u{00e9}")[0], (TokenKind::Identifier, "\u{00e9}t\u{00e9}"));
    }

    #[test]
    fn special_float_names_after_arrow() {
        let tokens = kinds("sget-wide v0, Ljava/lang/Double;->NaN:D");
        assert!(tokens.contains(&(TokenKind::Identifier, "NaN")));
        let tokens = kinds("sget v0, Ljava/lang/Float;->Infinity:F");
        assert!(tokens.contains(&(TokenKind::Identifier, "Infinity")));
        // still a number as a value
        assert_eq!(kinds("const-wide v0, NaN")[3], (TokenKind::Number, "NaN"));
    }

    #[test]
    fn end_block_word() {
        assert_eq!(
            kinds(".end method"),
            vec![(TokenKind::Keyword, ".end"), (TokenKind::Keyword, "method")]
        );
        // `method` is only a keyword right after `.end`
        assert_eq!(kinds("method")[0].0, TokenKind::Identifier);
    }

    #[test]
    fn strings_and_chars() {
        assert_eq!(
            kinds(r#"const-string v0, "a \"quoted\" # text""#)[3],
            (TokenKind::String, r#""a \"quoted\" # text""#)
        );
        assert_eq!(kinds("'\\n'")[0].0, TokenKind::String);
    }

    #[test]
    fn unterminated_string() {
        let tokens = tokenize(r#"const-string v0, "oops"#);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Error);
        assert_eq!(last.text, "\"oops");
        assert_eq!(last.error_message().unwrap(), "unterminated string literal");
    }

    #[test]
    fn numbers() {
        let tokens = tokenize("0x7ft 12s -5 1.5f 3.0e10d Infinityf 12abc");
        assert_eq!(tokens[0].width, Some(LiteralWidth::Byte));
        assert_eq!(tokens[1].width, Some(LiteralWidth::Short));
        assert_eq!((tokens[2].kind, tokens[2].width), (TokenKind::Number, None));
        assert_eq!(tokens[3].width, Some(LiteralWidth::Float));
        assert_eq!(tokens[4].width, Some(LiteralWidth::Double));
        assert_eq!(tokens[5].kind, TokenKind::Number);
        assert_eq!(tokens[6].kind, TokenKind::Identifier);
    }

    #[test]
    fn whitespace_covers_line() {
        let line = "  iget-object v0, p0, Lfoo/Bar;->baz:I  ";
        let tokens = Tokenizer::new(Catalog::builtin())
            .with_whitespace(true)
            .tokenize(line);
        let mut offset = 0;
        for t in &tokens {
            assert_eq!(t.start, offset);
            offset = t.end();
        }
        assert_eq!(offset, line.len());
    }

    #[test]
    fn resume_mid_line() {
        let tokenizer = Tokenizer::new(Catalog::builtin());
        let line = ".method public static main([Ljava/lang/String;)V";
        let full = tokenizer.tokenize(line);

        let mut lexer = tokenizer.lexer(line, 0);
        let head: Vec<_> = lexer.by_ref().take(2).collect();
        let state = lexer.state();
        let tail: Vec<_> = tokenizer.resume(line, state).collect();

        assert_eq!(head.len() + tail.len(), full.len());
        assert_eq!(tail, full[2..]);
        assert_eq!(tail[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn token_at_offsets() {
        let line = "move v0, v1";
        let tokens = Tokenizer::new(Catalog::builtin()).tokenize_line(line, 3);
        assert_eq!(tokens.token_at(0).unwrap().text, "move");
        assert_eq!(tokens.token_at(6).unwrap().text, "v0");
        // the space after the comma maps back to the comma
        assert_eq!(tokens.token_at(8).unwrap().text, ",");
        assert_eq!(tokens.token_at(100).unwrap().text, "v1");
        assert_eq!(tokens.token_at(4).unwrap().line, 3);

        let indented = Tokenizer::new(Catalog::builtin()).tokenize_line("   nop", 0);
        assert_eq!(indented.token_at(0).unwrap().text, "nop");
        assert!(TokenLine::default().token_at(0).is_none());
    }
}
