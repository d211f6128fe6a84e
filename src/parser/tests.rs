use super::*;
use crate::{
    error::DiagnosticKind,
    literal::LiteralValue,
    modifier::{AccessFlags, AnnotationVisibility},
    register::Register,
    signature::Member,
};

fn parser() -> Parser<'static> {
    Parser::new(Catalog::builtin())
}

fn line(text: &str) -> Statement<'_> {
    parser().parse_line(text, &BlockStack::new())
}

fn line_in<'a>(text: &'a str, blocks: &[BlockKind]) -> Statement<'a> {
    parser().parse_line(text, &BlockStack::from(blocks.to_vec()))
}

fn registers(stmt: &Statement<'_>) -> Vec<Register> {
    stmt.operands.iter().filter_map(Operand::as_register).collect()
}

fn int(operand: &Operand<'_>) -> i64 {
    match operand.as_literal().map(|l| l.value) {
        Some(LiteralValue::Int(v)) => v,
        other => panic!("expected an integer literal, got {other:?}"),
    }
}

#[test]
fn move_two_registers() {
    let stmt = line("move v0, v1");
    assert_eq!(stmt.kind, StatementKind::Instruction);
    assert_eq!(stmt.mnemonic(), Some("move"));
    assert_eq!(registers(&stmt), vec![Register::Local(0), Register::Local(1)]);
    assert!(stmt.error.is_none());
}

#[test]
fn const4_hex_literal() {
    let stmt = line("    const/4 v1, 0x2");
    assert_eq!(stmt.mnemonic(), Some("const/4"));
    assert_eq!(stmt.operands[0].as_register(), Some(Register::Local(1)));
    let literal = stmt.operands[1].as_literal().unwrap();
    assert!(literal.hex);
    assert_eq!(int(&stmt.operands[1]), 2);
    assert_eq!(stmt.opcode.and_then(|e| e.opcode()), Some(0x12));
}

#[test]
fn locals_directive() {
    let stmt = line(".locals 2");
    assert_eq!(stmt.kind, StatementKind::Directive(Directive::Locals));
    assert_eq!(stmt.operands.len(), 1);
    assert_eq!(int(&stmt.operands[0]), 2);

    let bad = line(".locals -1");
    assert!(bad.is_error());
}

#[test]
fn label_definition_and_use() {
    let label = line(":loop_0");
    assert_eq!(label.kind, StatementKind::Label);
    assert_eq!(label.label_name(), Some("loop_0"));

    let goto = line("goto :loop_0");
    assert_eq!(goto.mnemonic(), Some("goto"));
    assert_eq!(goto.operands[0].as_label(), label.label_name());
}

#[test]
fn unknown_instruction() {
    let stmt = line("bogus-op v0");
    assert!(stmt.is_error());
    let error = stmt.error.unwrap();
    assert_eq!(error.kind, DiagnosticKind::Syntax);
    assert!(error.message.contains("bogus-op"));
    assert_eq!(error.span.start.column, 0);
}

#[test]
fn wrong_operand_shape_reports_expected_syntax() {
    let stmt = line("move v0");
    assert!(stmt.is_error());
    let error = stmt.error.unwrap();
    assert_eq!(error.expected.as_deref(), Some("move vx,vy"));
    assert_eq!(error.span.start.column, 7);

    let stmt = line("move v0, v1, v2");
    assert!(stmt.error.unwrap().message.contains("expected end of line"));
}

#[test]
fn blank_and_comment_lines() {
    assert_eq!(line("").kind, StatementKind::Blank);
    assert_eq!(line("   ").kind, StatementKind::Blank);
    let comment = line("    # hello");
    assert_eq!(comment.kind, StatementKind::Comment);
    assert_eq!(comment.comment, Some("# hello"));

    let trailing = line("return-void # done");
    assert_eq!(trailing.kind, StatementKind::Instruction);
    assert_eq!(trailing.comment, Some("# done"));
}

#[test]
fn lexical_error_line() {
    let stmt = line("const-string v0, \"unterminated");
    assert!(stmt.is_error());
    assert_eq!(stmt.error.unwrap().kind, DiagnosticKind::Lex);
}

#[test]
fn references_and_types() {
    let stmt = line("iget-object v0, p0, Lcom/example/Foo;->name:Ljava/lang/String;");
    assert_eq!(stmt.kind, StatementKind::Instruction);
    let OperandValue::Reference(reference) = &stmt.operands[2].value else {
        panic!("expected a reference");
    };
    assert_eq!(reference.member.name(), "name");
    assert!(reference.member.is_field());

    let stmt = line("new-instance v0, Ljava/lang/StringBuilder;");
    assert!(matches!(stmt.operands[1].value, OperandValue::Type(_)));

    let stmt = line("new-array v0, v1, [I");
    assert!(stmt.error.is_none());

    // a method where a field is expected
    let stmt = line("iget v0, p0, Lcom/example/Foo;->size()I");
    assert!(stmt.is_error());
    assert_eq!(stmt.error.unwrap().expected.as_deref(), Some("iget vx, vy, field_id"));
}

#[test]
fn invoke_forms() {
    let stmt = line("invoke-virtual {p0, v1}, Ljava/io/PrintStream;->println(Ljava/lang/String;)V");
    assert_eq!(stmt.kind, StatementKind::Instruction);
    assert_eq!(
        stmt.operands[0].value,
        OperandValue::RegisterList(vec![Register::Parameter(0), Register::Local(1)])
    );

    let stmt = line("invoke-static/range {v0 .. v5}, Lcom/example/Foo;->bar(IIIIII)V");
    let OperandValue::RegisterRange(range) = stmt.operands[0].value else {
        panic!("expected a register range");
    };
    assert_eq!(range.len(), 6);

    let stmt = line("invoke-direct {}, Ljava/lang/Object;-><init>()V");
    assert!(stmt.error.is_none());

    let stmt = line("filled-new-array {v0, v1}, [I");
    assert!(stmt.error.is_none());
}

#[test]
fn method_handle_and_range_forms() {
    let stmt = line(
        "invoke-polymorphic {v0, v1}, Ljava/lang/invoke/MethodHandle;->invoke([Ljava/lang/Object;)Ljava/lang/Object;, (I)V",
    );
    assert_eq!(stmt.kind, StatementKind::Instruction);
    assert_eq!(stmt.operands.len(), 3);
    assert!(matches!(stmt.operands[0].value, OperandValue::RegisterList(ref regs) if regs.len() == 2));
    assert!(matches!(stmt.operands[1].value, OperandValue::Reference(_)));
    let OperandValue::Prototype(proto) = &stmt.operands[2].value else {
        panic!("expected a prototype");
    };
    assert_eq!(proto.parameters.len(), 1);

    let stmt = line(
        "invoke-polymorphic/range {v0 .. v2}, Ljava/lang/invoke/MethodHandle;->invoke([Ljava/lang/Object;)Ljava/lang/Object;, (II)V",
    );
    assert_eq!(stmt.operands.len(), 3);
    assert!(matches!(stmt.operands[0].value, OperandValue::RegisterRange(r) if r.len() == 3));
    assert!(matches!(stmt.operands[1].value, OperandValue::Reference(_)));
    assert!(matches!(stmt.operands[2].value, OperandValue::Prototype(_)));

    let stmt = line("const-method-type v0, (II)V");
    assert_eq!(stmt.operands.len(), 2);
    assert_eq!(stmt.operands[0].as_register(), Some(Register::Local(0)));
    let OperandValue::Prototype(proto) = &stmt.operands[1].value else {
        panic!("expected a prototype");
    };
    assert_eq!(proto.parameters.len(), 2);

    let stmt = line("filled-new-array/range {v19 .. v21}, [B");
    assert_eq!(stmt.operands.len(), 2);
    assert!(matches!(stmt.operands[0].value, OperandValue::RegisterRange(r) if r.len() == 3));
    assert!(matches!(stmt.operands[1].value, OperandValue::Type(_)));

    let stmt = line("execute-inline/range {v0 .. v2}, inline@0x3");
    assert!(matches!(stmt.operands[0].value, OperandValue::RegisterRange(_)));
    assert_eq!(
        stmt.operands[1].value,
        OperandValue::Index {
            kind: "inline",
            value: 3
        }
    );

    // a missing prototype
    let stmt = line("const-method-type v0");
    assert!(stmt.is_error());
}

#[test]
fn string_operand_keeps_raw_text() {
    let stmt = line(r#"const-string v0, "a \"quoted\" word""#);
    assert_eq!(stmt.operands[1].value, OperandValue::String(r#"a \"quoted\" word"#));
}

#[test]
fn odex_instructions_follow_options() {
    let text = "iget-quick v0, v1, field@0x8";
    let stmt = line(text);
    assert_eq!(stmt.kind, StatementKind::Instruction);
    assert_eq!(
        stmt.operands[2].value,
        OperandValue::Index {
            kind: "field",
            value: 8
        }
    );

    let strict = Parser::with_options(
        Catalog::builtin(),
        ParseOptions {
            odex: false,
            ..ParseOptions::default()
        },
    );
    let stmt = strict.parse_line(text, &BlockStack::new());
    assert!(stmt.is_error());
    assert!(stmt.error.unwrap().message.contains("odex"));
}

#[test]
fn class_header_directives() {
    let stmt = line(".class public final Lcom/example/Foo;");
    assert_eq!(stmt.kind, StatementKind::Directive(Directive::Class));
    assert_eq!(
        stmt.operands[0].value,
        OperandValue::Flags(AccessFlags::PUBLIC | AccessFlags::FINAL)
    );
    assert!(matches!(stmt.operands[1].value, OperandValue::Type(_)));

    assert!(line(".super Ljava/lang/Object;").error.is_none());
    assert!(line(".super I").is_error());
    assert_eq!(
        line(".source \"Foo.java\"").operands[0].value,
        OperandValue::String("Foo.java")
    );
}

#[test]
fn field_and_method_declarations() {
    let stmt = line(".field private static final TAG:Ljava/lang/String; = \"Foo\"");
    assert_eq!(stmt.kind, StatementKind::Directive(Directive::Field));
    let OperandValue::Member(Member::Field { name, .. }) = &stmt.operands[1].value else {
        panic!("expected a field member");
    };
    assert_eq!(*name, "TAG");
    assert_eq!(stmt.operands[2].value, OperandValue::String("Foo"));

    // a modifier word used as a field name
    let stmt = line(".field public enum:I");
    assert_eq!(stmt.operands[0].value, OperandValue::Flags(AccessFlags::PUBLIC));
    assert!(stmt.error.is_none());

    let stmt = line(".method public constructor <init>(Landroid/content/Context;I)V");
    assert_eq!(stmt.opens, Some(BlockKind::Method));
    let OperandValue::Member(Member::Method(sig)) = &stmt.operands[1].value else {
        panic!("expected a method member");
    };
    assert!(sig.is_constructor());
    assert_eq!(sig.parameters.len(), 2);
}

#[test]
fn debug_directives() {
    assert!(line(".line 42").error.is_none());
    assert!(line(".prologue").error.is_none());
    assert!(line(".param p1, \"savedInstanceState\"").error.is_none());

    let local = line(".local v0, \"name\":Ljava/lang/String;");
    assert_eq!(local.kind, StatementKind::Directive(Directive::Local));
    assert_eq!(local.operands.len(), 3);
    let local = line(".local v1, null:Ljava/util/List;, \"Ljava/util/List<Ljava/lang/String;>;\"");
    assert_eq!(local.operands[1].value, OperandValue::Null);
    assert_eq!(local.operands.len(), 4);

    let end = line(".end local v0");
    assert_eq!(end.kind, StatementKind::Directive(Directive::EndLocal));
    assert_eq!(end.closes, None);
    let restart = line(".restart local v0");
    assert_eq!(restart.kind, StatementKind::Directive(Directive::RestartLocal));
}

#[test]
fn catch_directives() {
    let stmt = line(".catch Ljava/io/IOException; {:try_start_0 .. :try_end_0} :catch_0");
    assert_eq!(stmt.kind, StatementKind::Directive(Directive::Catch));
    assert_eq!(
        stmt.operands[1].value,
        OperandValue::LabelRange {
            start: "try_start_0",
            end: "try_end_0"
        }
    );
    assert_eq!(stmt.operands[2].as_label(), Some("catch_0"));

    let stmt = line(".catchall {:a .. :b} :c");
    assert!(stmt.error.is_none());
}

#[test]
fn labels_need_no_surrounding_spaces() {
    let stmt = line(".catch Ljava/lang/Exception; {:a..:b} :c");
    assert!(stmt.error.is_none());
    assert_eq!(
        stmt.operands[1].value,
        OperandValue::LabelRange { start: "a", end: "b" }
    );

    let stmt = line_in("0x1->:a", &[BlockKind::Method, BlockKind::SparseSwitch]);
    assert_eq!(stmt.kind, StatementKind::Entry);
    assert_eq!(int(&stmt.operands[0]), 1);
    assert_eq!(stmt.operands[1].as_label(), Some("a"));
}

#[test]
fn unicode_member_name() {
    let stmt = line("sget v0, Lcom/a/B;->\u{2010}x:I");
    assert_eq!(stmt.kind, StatementKind::Instruction);
    let OperandValue::Reference(reference) = &stmt.operands[1].value else {
        panic!("expected a reference");
    };
    assert_eq!(reference.member.name(), "\u{2010}x");

    let stmt = line("sget-wide v0, Ljava/lang/Double;->NaN:D");
    assert!(stmt.error.is_none());
}

#[test]
fn block_body_lines() {
    let stmt = line_in("0x1 -> :sswitch_0", &[BlockKind::Method, BlockKind::SparseSwitch]);
    assert_eq!(stmt.kind, StatementKind::Entry);
    assert_eq!(stmt.operands[1].as_label(), Some("sswitch_0"));

    let stmt = line_in(":pswitch_0", &[BlockKind::Method, BlockKind::PackedSwitch]);
    assert_eq!(stmt.kind, StatementKind::Entry);

    let stmt = line_in("0x1t 0x2t", &[BlockKind::Method, BlockKind::ArrayData]);
    assert_eq!(stmt.operands.len(), 2);

    let stmt = line_in("value = .enum Lcom/Foo;->BAR:Lcom/Foo;", &[BlockKind::Annotation]);
    assert!(matches!(stmt.operands[1].value, OperandValue::Enum(_)));

    let stmt = line_in("names = {\"a\", \"b\"}", &[BlockKind::Annotation]);
    let OperandValue::Array(items) = &stmt.operands[1].value else {
        panic!("expected an array");
    };
    assert_eq!(items.len(), 2);

    let stmt = line_in("value = {", &[BlockKind::Annotation]);
    assert_eq!(stmt.opens, Some(BlockKind::ValueArray));

    let stmt = line_in("}", &[BlockKind::Annotation, BlockKind::ValueArray]);
    assert_eq!(stmt.closes, Some(BlockKind::ValueArray));
}

#[test]
fn annotation_directive() {
    let stmt = line(".annotation system Ldalvik/annotation/Signature;");
    assert_eq!(
        stmt.operands[0].value,
        OperandValue::Visibility(AnnotationVisibility::System)
    );
    assert_eq!(stmt.opens, Some(BlockKind::Annotation));
    assert!(line(".annotation Lfoo;").is_error());
}

#[test]
fn malformed_block_directive_still_opens() {
    let stmt = line(".method public");
    assert!(stmt.is_error());
    assert_eq!(stmt.opens, Some(BlockKind::Method));
}

#[test]
fn minimal_method_block() {
    let doc = parser().parse_document(".method public foo()V\n    return-void\n.end method\n");
    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.statements.len(), 1);
    let method = &doc.statements[0];
    assert_eq!(method.kind, StatementKind::Directive(Directive::Method));
    assert_eq!(method.children.len(), 1);
    assert_eq!(method.children[0].kind, StatementKind::Instruction);
    assert_eq!(method.end.as_ref().and_then(|e| e.closes), Some(BlockKind::Method));
    assert_eq!(method.span.end.line, 2);
}

#[test]
fn bad_line_does_not_cascade() {
    let doc = parser().parse_document("bogus-op v0\nmove v0, v1\n:done\n");
    assert_eq!(doc.statements.len(), 3);
    assert!(doc.statements[0].is_error());
    assert_eq!(doc.statements[1].mnemonic(), Some("move"));
    assert_eq!(doc.statements[2].label_name(), Some("done"));
    assert_eq!(doc.diagnostics().len(), 1);
}

#[test]
fn unterminated_method_is_closed_by_next_method() {
    let text = "\
.method public a()V
    return-void
.method public b()V
    return-void
.end method
";
    let doc = parser().parse_document(text);
    assert_eq!(doc.statements.len(), 2);
    let diagnostics = doc.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnterminatedBlock);
    assert_eq!(diagnostics[0].span.start.line, 0);
    assert_eq!(doc.statements[0].children.len(), 1);
    assert!(doc.statements[1].error.is_none());
}

#[test]
fn unterminated_at_end_of_input() {
    let doc = parser().parse_document(".method public a()V\n    .packed-switch 0x1\n        :pswitch_0\n");
    let diagnostics = doc.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.kind == DiagnosticKind::UnterminatedBlock));
    assert_eq!(diagnostics[0].span.start.line, 0);
    assert_eq!(diagnostics[1].span.start.line, 1);
}

#[test]
fn end_closes_inner_blocks() {
    let text = "\
.method public a()V
    .sparse-switch
        0x1 -> :a
.end method
";
    let doc = parser().parse_document(text);
    let method = &doc.statements[0];
    assert!(method.end.is_some());
    assert_eq!(method.children.len(), 1);
    assert_eq!(
        method.children[0].error.as_ref().map(|d| d.kind),
        Some(DiagnosticKind::UnterminatedBlock)
    );
}

#[test]
fn stray_end_is_an_error() {
    let doc = parser().parse_document(".end method\n");
    assert_eq!(doc.statements.len(), 1);
    assert!(doc.statements[0].is_error());
    assert!(doc.statements[0].error.as_ref().unwrap().message.contains(".end method"));
}

#[test]
fn field_block_collects_annotations() {
    let text = "\
.field public x:I
    .annotation runtime Lcom/example/Marker;
    .end annotation
.end field

.field public y:I
";
    let doc = parser().parse_document(text);
    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.statements.len(), 2);
    let field = &doc.statements[0];
    assert_eq!(field.opens, Some(BlockKind::Field));
    assert_eq!(field.children.len(), 1);
    assert_eq!(field.children[0].directive(), Some(Directive::Annotation));
    assert!(doc.statements[1].children.is_empty());
}

#[test]
fn end_field_closes_open_annotation() {
    let text = "\
.field public x:I
    .annotation runtime Lcom/example/Marker;
.end field
";
    let doc = parser().parse_document(text);
    let diagnostics = doc.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnterminatedBlock);
    assert!(diagnostics[0].message.contains(".end annotation"));
    assert_eq!(diagnostics[0].span.start.line, 1);

    assert_eq!(doc.statements.len(), 1);
    let field = &doc.statements[0];
    assert_eq!(field.opens, Some(BlockKind::Field));
    assert_eq!(field.children.len(), 1);
    assert_eq!(field.children[0].directive(), Some(Directive::Annotation));
    assert!(field.end.is_some());
}

#[test]
fn end_param_closes_open_annotation() {
    let text = "\
.method public f(I)V
    .locals 0
    .param p1
        .annotation runtime Lcom/example/Marker;
    .end param
    return-void
.end method
";
    let doc = parser().parse_document(text);
    let diagnostics = doc.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnterminatedBlock);

    let method = &doc.statements[0];
    assert_eq!(method.children.len(), 3);
    let param = &method.children[1];
    assert_eq!(param.opens, Some(BlockKind::Param));
    assert_eq!(param.children.len(), 1);
    assert_eq!(method.children[2].mnemonic(), Some("return-void"));

    let stack = parser().block_stack_at(text, 5);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![BlockKind::Method]);
}

#[test]
fn annotation_with_multiline_array_and_subannotation() {
    let text = "\
.annotation system Ldalvik/annotation/MemberClasses;
    value = {
        Lcom/example/Outer$Inner;,
        Lcom/example/Outer$1;
    }
    inner = .subannotation Lcom/example/Info;
        name = \"x\"
        flag = true
    .end subannotation
.end annotation
";
    let doc = parser().parse_document(text);
    assert!(doc.diagnostics().is_empty(), "{:?}", doc.diagnostics());
    let annotation = &doc.statements[0];
    assert_eq!(annotation.children.len(), 2);
    let array = &annotation.children[0];
    assert_eq!(array.opens, Some(BlockKind::ValueArray));
    assert_eq!(array.children.len(), 2);
    let sub = &annotation.children[1];
    assert_eq!(sub.opens, Some(BlockKind::SubAnnotation));
    assert_eq!(sub.children.len(), 2);
}

#[test]
fn blank_lines_are_optional() {
    let text = ".class public LFoo;\n\n.super Ljava/lang/Object;\n";
    assert_eq!(parser().parse_document(text).statements.len(), 2);

    let keep = Parser::with_options(
        Catalog::builtin(),
        ParseOptions {
            keep_blank_lines: true,
            ..ParseOptions::default()
        },
    );
    assert_eq!(keep.parse_document(text).statements.len(), 3);
}

#[test]
fn crlf_input() {
    let doc = parser().parse_document(".method public a()V\r\n    return-void\r\n.end method\r\n");
    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.statements[0].children.len(), 1);
}

#[test]
fn range_parse_uses_enclosing_blocks() {
    let text = "\
.method public a(I)V
    packed-switch p1, :pswitch_data_0
    :pswitch_data_0
    .packed-switch 0x0
        :pswitch_0
    .end packed-switch
.end method
";
    let p = parser();
    let stack = p.block_stack_at(text, 4);
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        vec![BlockKind::Method, BlockKind::PackedSwitch]
    );

    let statements = p.parse_range(text, 2..6);
    assert_eq!(statements.len(), 4);
    assert_eq!(statements[0].kind, StatementKind::Label);
    assert_eq!(statements[2].kind, StatementKind::Entry);
    assert_eq!(statements[3].closes, Some(BlockKind::PackedSwitch));
}
