//! Code generation context and result types.

use chibi_carton::CompactString;

use crate::ast::{Position, RuntimeHelper, SourceLocation};
use crate::options::CodegenOptions;
use crate::runtime_helpers::{helper_name, RuntimeHelpers};

/// Code generation context: the output buffer plus indentation and position
/// tracking.
pub struct CodegenContext {
    /// Generated code
    pub(super) code: String,
    /// Current indentation level
    pub(super) indent_level: u32,
    /// Current position in the generated code (1-indexed line/column)
    pub(super) line: u32,
    pub(super) column: u32,
    pub(super) offset: u32,
    /// Options
    pub(super) options: CodegenOptions,
    /// Helpers referenced by generated code
    pub(super) used_helpers: RuntimeHelpers,
    /// Generated-to-source mappings (only when `source_map` is on)
    pub(super) mappings: Vec<Mapping>,
}

/// Associates a position in the generated code with the template source
/// position the emitted text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub generated: Position,
    pub original: Position,
}

/// Code generation result
#[derive(Debug)]
pub struct CodegenResult {
    /// Generated code
    pub code: String,
    /// Helpers referenced by the generated code, in identity order
    pub helpers: Vec<RuntimeHelper>,
    /// Source mappings (empty unless `source_map` was requested)
    pub mappings: Vec<Mapping>,
}

impl CodegenContext {
    /// Create a new codegen context
    pub fn new(options: CodegenOptions) -> Self {
        Self {
            code: String::with_capacity(1024),
            indent_level: 0,
            line: 1,
            column: 1,
            offset: 0,
            options,
            used_helpers: RuntimeHelpers::new(),
            mappings: Vec::new(),
        }
    }

    /// Append code to the buffer
    #[inline]
    pub fn push(&mut self, code: &str) {
        self.advance(code);
        self.code.push_str(code);
    }

    /// Append code produced for `loc`. The location only feeds source
    /// mappings; the emitted text is the same as [`Self::push`].
    pub fn push_node(&mut self, code: &str, loc: &SourceLocation) {
        if self.options.source_map && !loc.is_stub() {
            self.mappings.push(Mapping {
                generated: self.position(),
                original: loc.start,
            });
        }
        self.push(code);
    }

    /// Add newline with proper indentation
    #[inline]
    pub fn newline(&mut self) {
        self.push("\n");
        for _ in 0..self.indent_level {
            self.push("  ");
        }
    }

    /// Increase indentation and start a new line at the deeper level
    pub fn indent(&mut self) {
        self.indent_level += 1;
        self.newline();
    }

    /// Decrease indentation, starting a new line at the shallower level
    /// unless `without_newline` is set
    pub fn deindent(&mut self, without_newline: bool) {
        debug_assert!(self.indent_level > 0, "deindent without matching indent");
        self.indent_level = self.indent_level.saturating_sub(1);
        if !without_newline {
            self.newline();
        }
    }

    /// Runtime name of a helper, recording the usage.
    ///
    /// # Panics
    ///
    /// Panics if the helper was never registered; emitting a call to an
    /// unnamed helper would produce code that cannot run.
    pub fn helper(&mut self, helper: RuntimeHelper) -> CompactString {
        self.used_helpers.add(helper);
        match helper_name(helper) {
            Some(name) => name,
            None => panic!(
                "runtime helper #{} is referenced by the AST but was never registered",
                helper.id()
            ),
        }
    }

    /// Current position in the generated code
    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Current indentation level
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    /// Get the generated code as a reference
    pub fn code_as_str(&self) -> &str {
        &self.code
    }

    pub(super) fn into_result(self) -> CodegenResult {
        CodegenResult {
            code: self.code,
            helpers: self.used_helpers.sorted(),
            mappings: self.mappings,
        }
    }

    fn advance(&mut self, code: &str) {
        let bytes = code.as_bytes();
        self.offset += bytes.len() as u32;
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += memchr::memchr_iter(b'\n', bytes).count() as u32;
                self.column = code[last + 1..].chars().count() as u32 + 1;
            }
            None => self.column += code.chars().count() as u32,
        }
    }
}
