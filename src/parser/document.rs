//! Nesting of block contents and recovery from missing `.end` lines.

use log::{debug, warn};

use crate::{
    directive::{BlockKind, BlockStack, Directive},
    error::Diagnostic,
    statement::{Document, Statement, StatementKind},
    token::Span,
};

use super::directive_of;

struct Frame<'a> {
    statement: Statement<'a>,
    kind: BlockKind,
    /// Span of the opening line.
    open: Span,
}

/// Collects parsed lines into a [`Document`], keeping one frame per open block.
#[derive(Default)]
pub(super) struct Builder<'a> {
    frames: Vec<Frame<'a>>,
    top: Vec<Statement<'a>>,
}

fn closer(kind: BlockKind) -> String {
    match kind.end_word() {
        Some(word) => format!("`.end {word}`"),
        None => "`}`".to_string(),
    }
}

impl<'a> Builder<'a> {
    pub fn stack(&self) -> BlockStack {
        BlockStack::from(self.frames.iter().map(|f| f.kind).collect::<Vec<_>>())
    }

    fn container(&mut self) -> &mut Vec<Statement<'a>> {
        match self.frames.last_mut() {
            Some(frame) => &mut frame.statement.children,
            None => &mut self.top,
        }
    }

    pub fn push(&mut self, stmt: Statement<'a>) {
        // a new class member ends whatever was left open
        if directive_of(&stmt).is_some_and(|d| d.is_top_level()) {
            self.unwind(0);
        }

        if let Some(kind) = stmt.closes {
            if kind.is_optional() {
                self.close_optional(stmt, kind);
            } else {
                self.close(stmt, kind);
            }
            return;
        }

        match stmt.opens {
            Some(kind) => {
                debug!("{}: open {kind}", stmt.span.start);
                let open = stmt.span;
                self.frames.push(Frame {
                    statement: stmt,
                    kind,
                    open,
                });
            }
            None => self.container().push(stmt),
        }
    }

    fn close(&mut self, stmt: Statement<'a>, kind: BlockKind) {
        let Some(depth) = self.frames.iter().rposition(|f| f.kind == kind) else {
            self.unmatched(stmt, kind);
            return;
        };
        self.unwind(depth + 1);
        let Some(frame) = self.frames.pop() else {
            return;
        };
        debug!("{}: close {kind}", stmt.span.start);
        let mut block = frame.statement;
        block.span = block.span.to(stmt.span);
        block.end = Some(Box::new(stmt));
        self.container().push(block);
    }

    /// `.end field` and `.end param` turn the latest matching declaration
    /// into a block owning everything after it. Blocks opened since the
    /// declaration are closed first.
    fn close_optional(&mut self, stmt: Statement<'a>, kind: BlockKind) {
        let wanted = match kind {
            BlockKind::Field => Directive::Field,
            _ => Directive::Param,
        };
        let Some((depth, idx)) = self.declaration(wanted) else {
            self.unmatched(stmt, kind);
            return;
        };
        self.unwind(depth);

        let container = self.container();
        let children: Vec<_> = container.drain(idx + 1..).collect();
        let block = &mut container[idx];
        debug!("{}: close {kind}", stmt.span.start);
        block.children.extend(children);
        block.opens = Some(kind);
        block.span = block.span.to(stmt.span);
        block.end = Some(Box::new(stmt));
    }

    /// Frame depth and index of the innermost open `wanted` declaration.
    fn declaration(&self, wanted: Directive) -> Option<(usize, usize)> {
        (0..=self.frames.len()).rev().find_map(|depth| {
            let container = match depth {
                0 => &self.top,
                d => &self.frames[d - 1].statement.children,
            };
            container
                .iter()
                .rposition(|s| s.end.is_none() && directive_of(s) == Some(wanted))
                .map(|idx| (depth, idx))
        })
    }

    fn unmatched(&mut self, mut stmt: Statement<'a>, kind: BlockKind) {
        let message = format!("{} without an open block", closer(kind));
        debug!("{}: {message}", stmt.span.start);
        stmt.kind = StatementKind::Error;
        stmt.error = Some(Diagnostic::syntax(stmt.span, message));
        self.container().push(stmt);
    }

    /// Closes every frame above `depth`, flagging each as unterminated.
    fn unwind(&mut self, depth: usize) {
        while self.frames.len() > depth {
            let Some(frame) = self.frames.pop() else {
                break;
            };
            let message = format!("missing {}", closer(frame.kind));
            warn!("{}: {message}", frame.open.start);
            let diagnostic = Diagnostic::unterminated(frame.open, message);

            let mut block = frame.statement;
            if let Some(last) = block.children.last() {
                block.span = block.span.to(last.span);
            }
            if block.error.is_none() {
                block.error = Some(diagnostic);
            } else {
                // keep the line's own error and report the missing end separately
                let mut end = Statement::new(StatementKind::Error, Vec::new(), frame.open);
                end.error = Some(diagnostic);
                block.end = Some(Box::new(end));
            }
            self.container().push(block);
        }
    }

    pub fn finish(mut self) -> Document<'a> {
        self.unwind(0);
        Document {
            statements: self.top,
        }
    }
}

/// Updates `stack` the way [`Builder`] would for `stmt`, without keeping statements.
pub(super) fn track(stack: &mut BlockStack, stmt: &Statement<'_>) {
    if directive_of(stmt).is_some_and(|d| d.is_top_level()) {
        stack.clear();
    }
    match stmt.closes {
        // a `.field` only ever sits at the top level, a `.param` in a method
        Some(BlockKind::Field) => stack.clear(),
        Some(BlockKind::Param) => {
            stack.unwind_to(BlockKind::Method);
        }
        Some(kind) => {
            stack.close(kind);
        }
        None => {}
    }
    if let Some(kind) = stmt.opens {
        stack.push(kind);
    }
}
