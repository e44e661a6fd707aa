// ABOUTME: Generated-file header construction and directive detection
// ABOUTME: Emits the do-not-edit banner and the regeneration directive line

use std::path::Path;

/// Marker shared by the emitted directive and the echo-detection below.
pub const DIRECTIVE_MARKER: &str = "go:generate";

/// Tool name as it appears in the directive line.
pub const TOOL_NAME: &str = "safekeeper";

const GENERATED_WARNING: &str = "// GENERATED by safekeeper, DO NOT EDIT";

/// Header prepended to every generated file: a warning banner, the
/// invocation that regenerates the file, and a reference to the source
/// the caller named.
#[derive(Debug)]
pub struct Header<'a> {
    keys: &'a [String],
    output: Option<&'a Path>,
    source: &'a Path,
}

impl<'a> Header<'a> {
    pub fn new(keys: &'a [String], output: Option<&'a Path>, source: &'a Path) -> Self {
        Self {
            keys,
            output,
            source,
        }
    }

    /// The regeneration directive, reflecting the current flags exactly.
    pub fn directive_line(&self) -> String {
        let mut line = format!(
            "//{} {} --keys={}",
            DIRECTIVE_MARKER,
            TOOL_NAME,
            self.keys.join(",")
        );
        if let Some(output) = self.output {
            line.push_str(&format!(" --output={}", output.display()));
        }
        line
    }

    /// Append the three header lines to the output buffer.
    pub fn write_to(&self, buffer: &mut String) {
        buffer.push_str(GENERATED_WARNING);
        buffer.push('\n');
        buffer.push_str(&self.directive_line());
        buffer.push('\n');
        buffer.push_str(&format!("// source: {}", self.source.display()));
        buffer.push('\n');
    }
}

/// True when a template line echoes the regeneration directive of a prior
/// run. Such lines are dropped; the header already carries the canonical
/// directive.
pub fn is_directive_echo(line: &str) -> bool {
    line.contains(DIRECTIVE_MARKER) && line.contains(TOOL_NAME)
}
