//! Program assembly.
//!
//! Layout of every generated program:
//!
//! ```text
//! <preamble>
//!
//! <statement>        (indented by the backend's body indent)
//! <statement>
//!
//! <postamble>
//! ```
//!
//! With no statements, the preamble and postamble are separated by a single
//! blank line.

use crate::backend::Backend;
use crate::emitter::{Emitter, StringEmitter};
use crate::planner::Op;

/// Render one operation as a statement in `backend`'s syntax.
pub fn statement(backend: &dyn Backend, op: &Op<'_>) -> String {
    match op {
        Op::Declare(container) => backend.declare(container),
        Op::Assign { source, target } => backend.write(target, &backend.read(source)),
    }
}

/// Wrap the planned operations into a complete program.
pub fn render(backend: &dyn Backend, ops: &[Op<'_>]) -> String {
    let preamble = backend.preamble();
    let postamble = backend.postamble();
    let mut emitter = StringEmitter::with_capacity(preamble.len() + postamble.len() + ops.len() * 64);

    emitter.emit(preamble);
    emitter.emit_newline();

    let indent = backend.body_indent();
    for op in ops {
        emitter.emit_indent(indent);
        emitter.emit_line(&statement(backend, op));
    }
    if !ops.is_empty() {
        emitter.emit_newline();
    }

    emitter.emit(postamble);
    emitter.ensure_trailing_newline();
    emitter.output()
}
