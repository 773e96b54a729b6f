/*!
 * Pattern trie mapping L/S symbol strings to metrical foot names, and the
 * foot recognizer built on top of it.
 *
 * Nodes live in a flat arena indexed by `NodeId`; each node has one child
 * slot per symbol. The trie is built once from a `FeetTable` and only read
 * afterwards, so a shared `&FootTrie` can serve any number of recognitions.
 *
 * Recognition walks the trie from the root, one symbol at a time. Two
 * strategies share the walk: "shortest" cuts as soon as a foot is reached,
 * "longest" keeps descending and cuts only when the next symbol has no
 * child. After a cut the walk restarts at the root with the symbols that
 * follow the matched foot. `recognize` runs both and keeps the one with
 * fewer residue tokens, preferring the longest match on a tie.
 */

use log::debug;
use serde::Serialize;
use std::fmt;

use crate::app_config::FeetTable;
use crate::errors::{ConfigError, ScansionError};
use crate::syllable::Symbol;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child per symbol, indexed by `slot(symbol)`
    children: [Option<NodeId>; 2],
    /// Foot name if a pattern ends here
    name: Option<String>,
}

impl TrieNode {
    fn child(&self, symbol: Symbol) -> Option<NodeId> {
        self.children[slot(symbol)]
    }

    fn is_terminal(&self) -> bool {
        self.name.is_some()
    }
}

fn slot(symbol: Symbol) -> usize {
    match symbol {
        Symbol::Long => 0,
        Symbol::Short => 1,
    }
}

/// One element of a recognition result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// A recognized foot, by name
    Foot(String),
    /// Trailing symbols that form no complete foot, kept literally
    Residue(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Foot(name) | Token::Residue(name) => name,
        }
    }

    pub fn is_residue(&self) -> bool {
        matches!(self, Token::Residue(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a traversal cuts once it reaches a foot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Cut at the first terminal node
    Shortest,
    /// Extend as far as the trie allows before cutting
    Longest,
}

/// Prefix tree from symbol patterns to foot names
#[derive(Debug, Clone)]
pub struct FootTrie {
    nodes: Vec<TrieNode>,
    patterns: usize,
}

impl Default for FootTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl FootTrie {
    /// Create an empty trie holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: 0,
        }
    }

    /// Build a trie from a validated feet table, in entry order
    pub fn from_table(table: &FeetTable) -> Result<Self, ConfigError> {
        table.validate()?;
        let mut trie = Self::new();
        for entry in &table.legs {
            let symbols: Vec<Symbol> = entry.pattern.chars().filter_map(Symbol::from_char).collect();
            trie.insert(&symbols, &entry.name);
        }
        debug!("Built foot trie with {} patterns", trie.len());
        Ok(trie)
    }

    /// Parse a feet table from JSON and build a trie from it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let table = FeetTable::from_json(json)?;
        Self::from_table(&table)
    }

    /// Insert a pattern, replacing the name if the pattern already exists
    pub fn insert(&mut self, pattern: &[Symbol], name: &str) {
        let mut node = ROOT;
        for &symbol in pattern {
            node = match self.nodes[node].child(symbol) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children[slot(symbol)] = Some(next);
                    next
                }
            };
        }
        // The root stands for the empty pattern and never carries a name
        if node == ROOT {
            return;
        }
        if self.nodes[node].name.replace(name.to_string()).is_none() {
            self.patterns += 1;
        }
    }

    /// Number of distinct named patterns
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Name of the foot with exactly this pattern, if any
    pub fn get(&self, pattern: &str) -> Option<&str> {
        let mut node = ROOT;
        for c in pattern.chars() {
            node = self.step(node, c)?;
        }
        self.nodes[node].name.as_deref()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.get(pattern).is_some()
    }

    fn step(&self, node: NodeId, c: char) -> Option<NodeId> {
        Symbol::from_char(c).and_then(|symbol| self.nodes[node].child(symbol))
    }

    fn foot(&self, node: NodeId) -> Token {
        Token::Foot(self.nodes[node].name.clone().unwrap_or_default())
    }

    /// Segment a symbol string into feet with one strategy.
    ///
    /// Characters outside {L, S} have no child anywhere in the trie. When a
    /// symbol cannot be consumed and the node reached so far is not a foot,
    /// the whole call fails with `PatternNotFound`. A valid but incomplete
    /// tail at the end of the input becomes a single residue token.
    pub fn fit(&self, symbols: &str, strategy: MatchStrategy) -> Result<Vec<Token>, ScansionError> {
        let chars: Vec<char> = symbols.chars().collect();
        let mut tokens = Vec::new();
        let mut start = 0;

        'feet: while start < chars.len() {
            let mut node = ROOT;
            let mut position = start;

            while position < chars.len() {
                match self.step(node, chars[position]) {
                    Some(next) => {
                        node = next;
                        position += 1;
                        if strategy == MatchStrategy::Shortest && self.nodes[node].is_terminal() {
                            tokens.push(self.foot(node));
                            start = position;
                            continue 'feet;
                        }
                    }
                    None if self.nodes[node].is_terminal() => {
                        tokens.push(self.foot(node));
                        start = position;
                        continue 'feet;
                    }
                    None => {
                        return Err(ScansionError::PatternNotFound {
                            symbols: symbols.to_string(),
                            position,
                        });
                    }
                }
            }

            if self.nodes[node].is_terminal() {
                tokens.push(self.foot(node));
            } else {
                tokens.push(Token::Residue(chars[start..].iter().collect()));
            }
            break;
        }

        Ok(tokens)
    }

    /// Segment a symbol string into feet, choosing between both strategies.
    ///
    /// The shortest-match result wins only with strictly fewer residue
    /// tokens; otherwise the longest-match result is returned. A failure of
    /// either strategy is returned as is.
    pub fn recognize(&self, symbols: &str) -> Result<Vec<Token>, ScansionError> {
        let longest = self.fit(symbols, MatchStrategy::Longest)?;
        let shortest = self.fit(symbols, MatchStrategy::Shortest)?;

        if residue_count(&shortest) < residue_count(&longest) {
            Ok(shortest)
        } else {
            Ok(longest)
        }
    }
}

fn residue_count(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.is_residue()).count()
}

impl fmt::Display for FootTrie {
    /// Pre-order dump, one node per line, indented two spaces per depth
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(NodeId, Option<Symbol>, usize)> = vec![(ROOT, None, 0)];
        while let Some((node, symbol, depth)) = stack.pop() {
            let label = symbol.map(|s| s.as_char().to_string()).unwrap_or_default();
            write!(f, "{:indent$}('{}'", "", label, indent = depth * 2)?;
            if let Some(name) = &self.nodes[node].name {
                write!(f, " <- {}", name)?;
            }
            writeln!(f, ")")?;

            // Short pushed first so Long is printed first
            for child_symbol in [Symbol::Short, Symbol::Long] {
                if let Some(child) = self.nodes[node].child(child_symbol) {
                    stack.push((child, Some(child_symbol), depth + 1));
                }
            }
        }
        Ok(())
    }
}
