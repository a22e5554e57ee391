//! Lexical pattern matching over flat source text.
//!
//! Every operator locates the fragments it rewrites through this module. The
//! patterns are purely textual: a block body ends at the first closing brace
//! after its opening one, so nested blocks are out of reach by construction.
//!
//! ```
//! use rustveil_core::matcher::{occurrences, PatternKind};
//!
//! let names: Vec<_> = occurrences(PatternKind::BindingDeclaration, "let mut total = 0;")
//!     .filter_map(|occ| occ.capture(2))
//!     .collect();
//! assert_eq!(names, vec!["total"]);
//! ```

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::sync::LazyLock;

/// Compile a regex at first use. Panics at runtime if the pattern is invalid.
macro_rules! re {
    ($pat:expr) => {
        LazyLock::new(|| Regex::new($pat).expect(concat!("invalid regex: ", $pat)))
    };
}

static INTEGER_LITERAL: LazyLock<Regex> = re!(r"\b(\d+)\b");
static STRING_LITERAL: LazyLock<Regex> = re!(r#""((?:[^"\\]|\\.)*)""#);
static BINDING_DECLARATION: LazyLock<Regex> = re!(r"\blet\s+(mut\s+)?([a-z_][a-z0-9_]*)\b");
static LITERAL_TRUE_CONDITION: LazyLock<Regex> = re!(r"\bif\s+true\b");
static IF_ELSE: LazyLock<Regex> =
    re!(r"\bif\s+([^{]+?)\s*\{([^}]+)\}\s*else\s*\{([^}]+)\}");
static FUNCTION_OPENING: LazyLock<Regex> = re!(r"\bfn\s+\w+[^{]*\{");
static PARENTHESIZED_ARITHMETIC: LazyLock<Regex> =
    re!(r"\(\s*(\d+)\s*([+\-*])\s*(\d+)\s*\)");
static PARENTHESIZED_CONDITION: LazyLock<Regex> = re!(r"\bif\s+\([^)]+\)");
static BOOLEAN_MATCH: LazyLock<Regex> = re!(
    r"\bmatch\s+([^{]+?)\s*\{\s*true\s*=>\s*\{([^}]+)\},\s*false\s*=>\s*\{([^}]+)\}\s*\}"
);
static CONSTANT_DECLARATION: LazyLock<Regex> =
    re!(r#"const\s+(STR_\d+):\s*&str\s*=\s*("(?:[^"\\]|\\.)*");"#);
static FUNCTION_KEYWORD: LazyLock<Regex> = re!(r"fn ");
static BINDING_KEYWORD: LazyLock<Regex> = re!(r"let ");
static LOOP_KEYWORD: LazyLock<Regex> = re!(r"for|while|loop");
static CONDITIONAL_KEYWORD: LazyLock<Regex> = re!(r"if|match");
static QUOTE_MARK: LazyLock<Regex> = re!(r#"""#);

/// The closed set of fragment shapes the matcher recognises.
///
/// Capture groups are numbered from 1, group 0 being the whole occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Decimal integer literal. 1: digits.
    IntegerLiteral,
    /// Double-quoted string literal. 1: contents between the quotes, escapes left as written.
    StringLiteral,
    /// `let` binding. 1: `mut ` if present, 2: identifier.
    BindingDeclaration,
    /// The exact condition `if true`.
    LiteralTrueCondition,
    /// `if cond {a} else {b}`. 1: condition, 2: if-body, 3: else-body.
    IfElse,
    /// Function signature up to and including its opening brace.
    FunctionOpening,
    /// `(a op b)` with `op` one of `+ - *`. 1: a, 2: op, 3: b.
    ParenthesizedArithmetic,
    /// `if (...)` with a parenthesised condition.
    ParenthesizedCondition,
    /// `match v { true => {a}, false => {b} }`. 1: scrutinee, 2: true arm, 3: false arm.
    BooleanMatch,
    /// `const STR_k: &str = "...";`. 1: constant name, 2: quoted literal.
    ConstantDeclaration,
    /// `fn ` anywhere in the text.
    FunctionKeyword,
    /// `let ` anywhere in the text.
    BindingKeyword,
    /// `for`, `while` or `loop`, including inside longer words.
    LoopKeyword,
    /// `if` or `match`, including inside longer words.
    ConditionalKeyword,
    /// A double quote character.
    QuoteMark,
}

impl PatternKind {
    pub fn regex(self) -> &'static Regex {
        match self {
            PatternKind::IntegerLiteral => &INTEGER_LITERAL,
            PatternKind::StringLiteral => &STRING_LITERAL,
            PatternKind::BindingDeclaration => &BINDING_DECLARATION,
            PatternKind::LiteralTrueCondition => &LITERAL_TRUE_CONDITION,
            PatternKind::IfElse => &IF_ELSE,
            PatternKind::FunctionOpening => &FUNCTION_OPENING,
            PatternKind::ParenthesizedArithmetic => &PARENTHESIZED_ARITHMETIC,
            PatternKind::ParenthesizedCondition => &PARENTHESIZED_CONDITION,
            PatternKind::BooleanMatch => &BOOLEAN_MATCH,
            PatternKind::ConstantDeclaration => &CONSTANT_DECLARATION,
            PatternKind::FunctionKeyword => &FUNCTION_KEYWORD,
            PatternKind::BindingKeyword => &BINDING_KEYWORD,
            PatternKind::LoopKeyword => &LOOP_KEYWORD,
            PatternKind::ConditionalKeyword => &CONDITIONAL_KEYWORD,
            PatternKind::QuoteMark => &QUOTE_MARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::IntegerLiteral => "integer literal",
            PatternKind::StringLiteral => "string literal",
            PatternKind::BindingDeclaration => "binding declaration",
            PatternKind::LiteralTrueCondition => "literal true condition",
            PatternKind::IfElse => "if/else statement",
            PatternKind::FunctionOpening => "function opening",
            PatternKind::ParenthesizedArithmetic => "parenthesized arithmetic",
            PatternKind::ParenthesizedCondition => "parenthesized condition",
            PatternKind::BooleanMatch => "boolean match",
            PatternKind::ConstantDeclaration => "constant declaration",
            PatternKind::FunctionKeyword => "function keyword",
            PatternKind::BindingKeyword => "binding keyword",
            PatternKind::LoopKeyword => "loop keyword",
            PatternKind::ConditionalKeyword => "conditional keyword",
            PatternKind::QuoteMark => "quote mark",
        }
    }
}

/// One matched instance of a pattern inside a buffer.
#[derive(Debug)]
pub struct Occurrence<'t> {
    captures: Captures<'t>,
}

impl<'t> Occurrence<'t> {
    /// The full matched text.
    pub fn as_str(&self) -> &'t str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    /// Byte span of the match within the scanned text.
    pub fn range(&self) -> Range<usize> {
        self.captures.get(0).map_or(0..0, |m| m.range())
    }

    /// A captured sub-fragment, `None` when the group did not participate.
    pub fn capture(&self, group: usize) -> Option<&'t str> {
        self.captures.get(group).map(|m| m.as_str())
    }
}

/// Lazily yields every non-overlapping occurrence of `kind` in `text`, left to right.
pub fn occurrences(kind: PatternKind, text: &str) -> impl Iterator<Item = Occurrence<'_>> {
    kind.regex()
        .captures_iter(text)
        .map(|captures| Occurrence { captures })
}

/// Number of occurrences of `kind` in `text`.
pub fn count(kind: PatternKind, text: &str) -> usize {
    kind.regex().find_iter(text).count()
}

/// Output of [`rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Occurrences replaced.
    pub rewritten: usize,
    /// Occurrences left untouched because the rewrite declined them.
    pub skipped: usize,
}

/// Replaces each occurrence of `kind` with whatever `replace` returns for it.
///
/// Returning `None` keeps that occurrence verbatim and moves on to the next one.
/// The occurrence borrows from `text`, so captured fragments can outlive the
/// callback.
pub fn rewrite<'t, F>(kind: PatternKind, text: &'t str, mut replace: F) -> Rewrite
where
    F: FnMut(&Occurrence<'t>) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut rewritten = 0;
    let mut skipped = 0;

    for occurrence in occurrences(kind, text) {
        let span = occurrence.range();
        out.push_str(&text[last..span.start]);
        match replace(&occurrence) {
            Some(replacement) => {
                out.push_str(&replacement);
                rewritten += 1;
            }
            None => {
                out.push_str(occurrence.as_str());
                skipped += 1;
            }
        }
        last = span.end;
    }
    out.push_str(&text[last..]);

    Rewrite {
        text: out,
        rewritten,
        skipped,
    }
}

/// Replaces whole-word occurrences of every key in `table` in one pass.
///
/// Replacement text is never rescanned, so an entry can map onto a name that
/// another entry rewrites without the two colliding.
pub fn replace_words<'a, I>(text: &str, table: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let table: HashMap<&str, &str> = table.into_iter().collect();
    if table.is_empty() {
        return text.to_string();
    }

    let alternatives: Vec<String> = table.keys().map(|word| regex::escape(word)).collect();
    match Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))) {
        Ok(pattern) => pattern
            .replace_all(text, |caps: &Captures<'_>| {
                let word = &caps[0];
                table.get(word).copied().unwrap_or(word).to_string()
            })
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Generates `<prefix><k>` names for k = 0, 1, 2, ..., skipping any name
/// that already appears as a word in the scanned text.
///
/// ```
/// use rustveil_core::matcher::FreshNames;
///
/// let mut names = FreshNames::new("var_", "let var_0 = 1;");
/// assert_eq!(names.next().as_deref(), Some("var_1"));
/// ```
#[derive(Debug, Clone)]
pub struct FreshNames<'t> {
    prefix: &'static str,
    counter: usize,
    taken: HashSet<&'t str>,
}

impl<'t> FreshNames<'t> {
    pub fn new(prefix: &'static str, text: &'t str) -> Self {
        let taken = text
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|word| word.starts_with(prefix))
            .collect();
        Self {
            prefix,
            counter: 0,
            taken,
        }
    }
}

impl Iterator for FreshNames<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = format!("{}{}", self.prefix, self.counter);
            self.counter = self.counter.checked_add(1)?;
            if !self.taken.contains(candidate.as_str()) {
                return Some(candidate);
            }
        }
    }
}
