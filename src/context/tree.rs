// src/context/tree.rs
//! Penn-style bracketed trees reduced to per-leaf root paths.

use std::collections::HashMap;

use crate::error::{Result, SenseError};
use crate::window::Occurrence;

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Open(usize),
    Close(usize),
    Atom(&'a str),
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token::Atom(&input[s..i]));
            }
            match c {
                '(' => tokens.push(Token::Open(i)),
                ')' => tokens.push(Token::Close(i)),
                _ => {}
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::Atom(&input[s..]));
    }
    tokens
}

#[derive(Debug, Clone)]
enum Tree {
    Node { label: String, children: Vec<Tree> },
    Leaf(String),
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    len: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, message: &str) -> SenseError {
        let offset = match self.tokens.get(self.pos) {
            Some(Token::Open(o) | Token::Close(o)) => *o,
            _ => self.len,
        };
        SenseError::Tree {
            offset,
            message: message.to_string(),
        }
    }

    fn node(&mut self) -> Result<Tree> {
        match self.tokens.get(self.pos) {
            Some(Token::Open(_)) => self.pos += 1,
            _ => return Err(self.error("expected '('")),
        }
        let label = match self.tokens.get(self.pos) {
            Some(Token::Atom(a)) => {
                self.pos += 1;
                (*a).to_string()
            }
            _ => String::new(),
        };

        let mut children = Vec::new();
        loop {
            match self.tokens.get(self.pos) {
                Some(Token::Close(_)) => {
                    self.pos += 1;
                    return Ok(Tree::Node { label, children });
                }
                Some(Token::Open(_)) => children.push(self.node()?),
                Some(Token::Atom(a)) => {
                    children.push(Tree::Leaf((*a).to_string()));
                    self.pos += 1;
                }
                None => return Err(self.error("unbalanced parentheses")),
            }
        }
    }
}

/// A leaf of the tree in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLeaf {
    pub word: String,
    /// Label of the preterminal above the leaf.
    pub tag: String,
    /// Child indices from the root down to the leaf.
    pub path: Vec<usize>,
}

/// Root paths for every leaf occurrence of one context tree.
#[derive(Debug, Clone, Default)]
pub struct TreePaths {
    leaves: Vec<TaggedLeaf>,
    by_occurrence: HashMap<Occurrence, usize>,
}

impl TreePaths {
    /// Builds the mapping directly from `(occurrence, path)` pairs.
    #[must_use]
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = (Occurrence, Vec<usize>)>,
    {
        let mut out = Self::default();
        for (occ, path) in paths {
            out.push(occ.word.clone(), String::new(), path, occ);
        }
        out
    }

    /// Parses one bracketed tree such as `(S (NP (DT the) (NN cat)) (VP (VBD sat)))`.
    ///
    /// # Errors
    /// Returns `Tree` on unbalanced parentheses or trailing input.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = Parser {
            tokens: tokenize(input),
            pos: 0,
            len: input.len(),
        };
        let tree = parser.node()?;
        if parser.pos != parser.tokens.len() {
            return Err(parser.error("trailing input after tree"));
        }

        let mut out = Self::default();
        let mut path = Vec::new();
        out.collect(&tree, "", &mut path);
        Ok(out)
    }

    /// Joins the previous, current, and next sentence trees under one root.
    /// Returns the paths and the leaf offset of the current sentence.
    ///
    /// # Errors
    /// Returns `Tree` if any of the sentences fails to parse.
    pub fn from_context(prev: Option<&str>, current: &str, next: Option<&str>) -> Result<(Self, usize)> {
        let offset = match prev {
            Some(p) => Self::parse(p)?.len(),
            None => 0,
        };
        let mut joined = String::from("(S ");
        for part in [prev, Some(current), next].into_iter().flatten() {
            joined.push_str(part);
            joined.push(' ');
        }
        joined.push(')');
        Ok((Self::parse(&joined)?, offset))
    }

    fn collect(&mut self, tree: &Tree, parent_label: &str, path: &mut Vec<usize>) {
        match tree {
            Tree::Leaf(word) => {
                let index = self.leaves.len();
                let occ = Occurrence::new(word.clone(), index);
                self.push(word.clone(), parent_label.to_string(), path.clone(), occ);
            }
            Tree::Node { label, children } => {
                for (i, child) in children.iter().enumerate() {
                    path.push(i);
                    self.collect(child, label, path);
                    path.pop();
                }
            }
        }
    }

    fn push(&mut self, word: String, tag: String, path: Vec<usize>, occ: Occurrence) {
        self.by_occurrence.insert(occ, self.leaves.len());
        self.leaves.push(TaggedLeaf { word, tag, path });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    #[must_use]
    pub fn leaves(&self) -> &[TaggedLeaf] {
        &self.leaves
    }

    /// `(word, tag)` pairs in leaf order, ready for window cleaning.
    #[must_use]
    pub fn tagged(&self) -> Vec<(String, String)> {
        self.leaves
            .iter()
            .map(|l| (l.word.clone(), l.tag.clone()))
            .collect()
    }

    #[must_use]
    pub fn path(&self, occurrence: &Occurrence) -> Option<&[usize]> {
        self.by_occurrence
            .get(occurrence)
            .and_then(|&i| self.leaves.get(i))
            .map(|l| l.path.as_slice())
    }
}
