use std::path::Path;

use smali_syntax::{
    BlockKind, Catalog, Directive, DiagnosticKind, Parser, SmaliFile, Statement, StatementKind,
    TokenKind, Tokenizer, find_smali_files,
};

fn parser() -> Parser<'static> {
    Parser::new(Catalog::builtin())
}

fn find<'s, 'a>(statements: &'s [Statement<'a>], pred: impl Fn(&Statement<'a>) -> bool) -> &'s Statement<'a> {
    statements
        .iter()
        .flat_map(|s| s.walk())
        .find(|s| pred(s))
        .expect("statement not found")
}

#[test]
fn fixtures_parse_cleanly() {
    let parser = parser();
    let files = find_smali_files(Path::new("tests/fixtures")).unwrap();
    assert_eq!(files.len(), 2);
    for file in &files {
        let doc = file.parse(&parser);
        let diagnostics = doc.diagnostics();
        assert!(
            diagnostics.is_empty(),
            "{}: {:?}",
            file.path.display(),
            diagnostics
        );
    }
}

#[test]
fn activity_structure() {
    let file = SmaliFile::read(Path::new("tests/fixtures/com/example/MainActivity.smali")).unwrap();
    let doc = file.parse(&parser());

    let methods: Vec<_> = doc
        .statements
        .iter()
        .filter(|s| s.directive() == Some(Directive::Method))
        .collect();
    assert_eq!(methods.len(), 4);
    assert!(methods.iter().all(|m| m.end.is_some()));

    // the field with an annotation became a block, the others did not
    let fields: Vec<_> = doc
        .statements
        .iter()
        .filter(|s| s.directive() == Some(Directive::Field))
        .collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(
        fields.iter().filter(|f| f.opens == Some(BlockKind::Field)).count(),
        1
    );

    let on_click = methods[3];
    let labels: Vec<_> = on_click.children.iter().filter_map(Statement::label_name).collect();
    assert_eq!(labels, ["try_start_0", "try_end_0", "cond_0", "catch_0"]);

    // every jump target is defined somewhere in the file
    let defined = doc.labels();
    for stmt in doc.walk() {
        if stmt.kind != StatementKind::Instruction {
            continue;
        }
        for label in stmt.operands.iter().filter_map(|o| o.as_label()) {
            assert!(defined.contains(&label), "undefined label {label}");
        }
    }
}

#[test]
fn switch_and_array_tables() {
    let text = std::fs::read_to_string("tests/fixtures/Tables.smali").unwrap();
    let doc = parser().parse_document(&text);

    let packed = find(&doc.statements, |s| s.directive() == Some(Directive::PackedSwitch));
    assert_eq!(packed.children.len(), 2);
    assert!(packed.children.iter().all(|c| c.kind == StatementKind::Entry));

    let sparse = find(&doc.statements, |s| s.directive() == Some(Directive::SparseSwitch));
    assert_eq!(sparse.children.len(), 2);
    let key = sparse.children[1].operands[0].as_literal().unwrap();
    assert_eq!(key.as_int::<i32>(), Some(-100));

    let array = find(&doc.statements, |s| s.directive() == Some(Directive::ArrayData));
    assert_eq!(array.children.len(), 4);

    let annotation = find(&doc.statements, |s| s.directive() == Some(Directive::Annotation));
    assert_eq!(annotation.children.len(), 3);
    assert_eq!(annotation.children[2].opens, Some(BlockKind::SubAnnotation));
}

#[test]
fn broken_file_reports_every_problem() {
    let file = SmaliFile::read(Path::new("tests/broken/Broken.smali")).unwrap();
    let doc = file.parse(&parser());

    assert_eq!(doc.statements.len(), 5);
    let found: Vec<_> = doc
        .diagnostics()
        .iter()
        .map(|d| (d.span.start.line, d.kind))
        .collect();
    assert_eq!(
        found,
        [
            (3, DiagnosticKind::UnterminatedBlock),
            (5, DiagnosticKind::Syntax),
            (6, DiagnosticKind::Syntax),
            (7, DiagnosticKind::Lex),
            (15, DiagnosticKind::Syntax),
        ]
    );

    // the method after the unterminated one is intact
    let b = &doc.statements[3];
    assert_eq!(b.directive(), Some(Directive::Method));
    assert!(b.error.is_none());
    assert_eq!(b.children.len(), 2);
}

#[test]
fn every_offset_has_a_token() {
    let tokenizer = Tokenizer::new(Catalog::builtin());
    let line = "    invoke-virtual {p0, v1}, Lcom/example/Foo;->bar(I)V  # call";
    let tokens = tokenizer.tokenize_line(line, 0);
    for offset in 0..line.len() {
        let token = tokens.token_at(offset).unwrap();
        assert!(token.start <= offset.max(tokens.tokens()[0].start));
    }
    assert_eq!(tokens.token_at(5).unwrap().kind, TokenKind::Keyword);
    assert_eq!(tokens.token_at(line.len() - 1).unwrap().kind, TokenKind::Comment);
}

#[test]
fn resumed_lexing_matches_full_pass() {
    let tokenizer = Tokenizer::new(Catalog::builtin());
    let file = SmaliFile::read(Path::new("tests/fixtures/com/example/MainActivity.smali")).unwrap();
    for (line_no, line) in file.text.lines().enumerate() {
        let full: Vec<_> = tokenizer.lexer(line, line_no).collect();
        for split in 0..full.len() {
            let mut lexer = tokenizer.lexer(line, line_no);
            let mut head: Vec<_> = lexer.by_ref().take(split).collect();
            let state = lexer.state();
            head.extend(tokenizer.resume(line, state));
            assert_eq!(head, full, "line {line_no} split at {split}");
        }
    }
}
