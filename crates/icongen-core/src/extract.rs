//! Icon extraction from Java sources.
//!
//! Scans Java source text for `public final` string constants whose
//! initializer is a base64 payload, e.g.
//!
//! ```java
//! public class SiblingIcons {
//!     public final static String AIcon = "iVBORw0KGgo...";
//! }
//! ```
//!
//! The scanner is a character-level state machine: it strips comments,
//! tracks brace depth and the stack of enclosing `class`/`interface`
//! declarations, and hands each class-level statement to a regex-based
//! field parser. Fields that do not qualify (wrong type, not public/final,
//! initializer not a string literal or not valid base64) are skipped with a
//! log line, never an error; a file that yields nothing is simply an empty
//! result.

use std::path::Path;
use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;
use tracing::{debug, info, warn};

/// An icon constant extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIcon {
    /// Fully qualified name of the declaring class (e.g. `foo.SiblingIcons`)
    pub class_fqn: String,
    /// Field name (e.g. `AIcon`)
    pub field_name: String,
    /// The base64 literal exactly as declared
    pub encoded: String,
    /// Decoded payload bytes
    pub content: Vec<u8>,
}

impl ParsedIcon {
    /// Catalog-style name for this icon: `<class fqn>.<field>`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class_fqn, self.field_name)
    }
}

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:class|interface|enum)\s+([A-Za-z_$][\w$]*)").unwrap()
});

static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*package\s+([\w.]+)\s*$").unwrap());

static DECLARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_$][\w$]*)\s*=\s*(?:"((?:[^"\\]|\\.)*)"|([^,]+))"#).unwrap()
});

/// Java keywords that may prefix a field declaration
const FIELD_MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "transient",
    "volatile",
    "synchronized",
];

/// Extract all qualifying icon constants from Java source text.
///
/// `field_type` is the declared Java type an icon field must have,
/// normally `"String"`.
pub fn extract_icons(source: &str, field_type: &str) -> Vec<ParsedIcon> {
    Scanner::new(field_type).run(source)
}

/// Extract icons from a file on disk.
///
/// An unreadable file is logged and yields no icons; a single bad file must
/// not abort a run over many sources.
pub fn extract_icons_from_file(path: &Path, field_type: &str) -> Vec<ParsedIcon> {
    match std::fs::read_to_string(path) {
        Ok(source) => {
            let icons = extract_icons(&source, field_type);
            debug!("extracted {} icon(s) from {}", icons.len(), path.display());
            icons
        }
        Err(e) => {
            warn!("ignoring file {}, reason: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Lexical state of the scanner
enum Lex {
    Code,
    LineComment,
    BlockComment,
    Str,
    CharLit,
}

struct Scanner<'a> {
    field_type: &'a str,
    package: Option<String>,
    /// Enclosing type names with the brace depth of their body
    class_stack: Vec<(String, usize)>,
    depth: usize,
    /// Current statement text (comments removed, string literals kept)
    stmt: String,
    icons: Vec<ParsedIcon>,
}

impl<'a> Scanner<'a> {
    fn new(field_type: &'a str) -> Self {
        Self {
            field_type,
            package: None,
            class_stack: Vec::new(),
            depth: 0,
            stmt: String::new(),
            icons: Vec::new(),
        }
    }

    fn run(mut self, source: &str) -> Vec<ParsedIcon> {
        let mut lex = Lex::Code;
        let mut chars = source.chars().peekable();
        let mut escaped = false;

        while let Some(c) = chars.next() {
            match lex {
                Lex::LineComment => {
                    if c == '\n' {
                        lex = Lex::Code;
                    }
                }
                Lex::BlockComment => {
                    if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        lex = Lex::Code;
                    }
                }
                Lex::Str => {
                    self.stmt.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        lex = Lex::Code;
                    }
                }
                Lex::CharLit => {
                    self.stmt.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '\'' {
                        lex = Lex::Code;
                    }
                }
                Lex::Code => match c {
                    '/' if chars.peek() == Some(&'/') => {
                        chars.next();
                        lex = Lex::LineComment;
                    }
                    '/' if chars.peek() == Some(&'*') => {
                        chars.next();
                        lex = Lex::BlockComment;
                    }
                    '"' => {
                        self.stmt.push(c);
                        escaped = false;
                        lex = Lex::Str;
                    }
                    '\'' => {
                        self.stmt.push(c);
                        escaped = false;
                        lex = Lex::CharLit;
                    }
                    '{' => self.open_brace(),
                    '}' => self.close_brace(),
                    ';' => self.end_statement(),
                    _ => self.stmt.push(c),
                },
            }
        }

        self.icons
    }

    fn open_brace(&mut self) {
        self.depth += 1;
        if let Some(cap) = CLASS_RE.captures(&self.stmt) {
            self.class_stack.push((cap[1].to_string(), self.depth));
        }
        self.stmt.clear();
    }

    fn close_brace(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        while matches!(self.class_stack.last(), Some((_, d)) if *d > self.depth) {
            self.class_stack.pop();
        }
        self.stmt.clear();
    }

    fn end_statement(&mut self) {
        if self.class_stack.is_empty() {
            if let Some(cap) = PACKAGE_RE.captures(self.stmt.trim()) {
                self.package = Some(cap[1].to_string());
            }
        } else if matches!(self.class_stack.last(), Some((_, d)) if *d == self.depth) {
            // a statement directly inside a class body: candidate field
            let stmt = std::mem::take(&mut self.stmt);
            self.parse_field(&stmt);
            return;
        }
        self.stmt.clear();
    }

    /// Fully qualified name of the innermost enclosing class
    fn class_fqn(&self) -> String {
        let classes = self
            .class_stack
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(".");
        match &self.package {
            Some(pkg) => format!("{pkg}.{classes}"),
            None => classes,
        }
    }

    fn parse_field(&mut self, stmt: &str) {
        let stmt = stmt.trim();
        let Some(eq) = stmt.find('=') else {
            return; // no initializer, nothing to extract
        };

        // header = modifiers, type and the first declarator name
        let header = stmt[..eq].trim_end();
        let mut tokens: Vec<&str> = header.split_whitespace().collect();
        if tokens.len() < 3 {
            return; // at minimum: modifier, type, name
        }
        let first_name = tokens.pop().unwrap_or_default();
        let declared_type = tokens.pop().unwrap_or_default();

        if declared_type != self.field_type {
            return;
        }

        // annotations are not modifiers; drop `@Name` tokens along with any
        // parenthesized annotation arguments before the modifier check
        let mut mods: Vec<&str> = Vec::new();
        let mut ann_depth = 0usize;
        for t in tokens {
            let opens = t.matches('(').count();
            let closes = t.matches(')').count();
            if ann_depth > 0 {
                ann_depth = (ann_depth + opens).saturating_sub(closes);
                continue;
            }
            if t.starts_with('@') {
                ann_depth = opens.saturating_sub(closes);
                continue;
            }
            mods.push(t);
        }

        if let Some(unknown) = mods.iter().find(|t| !FIELD_MODIFIERS.contains(t)) {
            info!("ignoring field, unrecognized modifier `{unknown}`");
            return;
        }
        if !mods.contains(&"public") || !mods.contains(&"final") {
            info!("ignoring field, only public final fields are supported");
            return;
        }

        // declarator list starts at the first name
        let Some(decl_start) = header.rfind(first_name) else {
            return;
        };
        let class_fqn = self.class_fqn();
        for cap in DECLARATOR_RE.captures_iter(&stmt[decl_start..]) {
            let field_name = cap[1].to_string();
            let Some(literal) = cap.get(2) else {
                info!("[{field_name}] ignoring, initializer must be a string literal");
                continue;
            };
            let encoded = literal.as_str().to_string();
            match STANDARD.decode(&encoded) {
                Ok(content) => self.icons.push(ParsedIcon {
                    class_fqn: class_fqn.clone(),
                    field_name,
                    encoded,
                    content,
                }),
                Err(_) => {
                    warn!(
                        "[{field_name}] ignoring, string literal initializer is not a valid \
                         base64 representation"
                    );
                }
            }
        }
    }
}
