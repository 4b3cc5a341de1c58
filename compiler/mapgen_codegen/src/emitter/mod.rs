//! Output Emitter
//!
//! Abstraction for producing generated program text.

/// Trait for emitting generated source.
///
/// Programs are assembled by writing fragments to an emitter. Implementations
/// decide where the text ends up.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);

    /// Emit a fragment followed by a newline.
    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit_newline();
    }
}

/// String-based emitter.
///
/// Builds the program incrementally in memory.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Ensure the output ends with exactly one newline.
    pub fn ensure_trailing_newline(&mut self) {
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    /// Get the generated output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }
}
