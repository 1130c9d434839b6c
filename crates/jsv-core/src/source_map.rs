//! # Source Maps — JSON Pointer to Line Resolution
//!
//! A [`SourceMap`] indexes every value of a JSON document by its JSON
//! Pointer and records where the value's first token starts and, for
//! object members, where the member's key token starts.
//!
//! ## Key vs Value Location
//!
//! Given
//!
//! ```text
//! 1 {
//! 2   "name":
//! 3     "Ka"
//! 4 }
//! ```
//!
//! the entry for `/name` has its key on line 2 and its value on line 3.
//! Errors about the value itself (a `minLength` violation) point at the
//! value; errors about the member (a disallowed property) point at the key.
//!
//! ## Scanner
//!
//! [`SourceMap::from_text`] is a single-pass scanner that only tracks
//! structure and positions. It is meant to run over text `serde_json` has
//! already accepted; it checks structure as it goes but does not validate
//! escapes inside strings or number grammar.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::SourceMapError;
use crate::pointer;

/// A 1-based line/column position. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

/// Location of one value in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The key token, present only for object members.
    pub key: Option<Position>,
    /// The first token of the value.
    pub value: Position,
}

/// Index from data-pointer path to source location.
///
/// Read-only once built; safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    entries: HashMap<String, Entry>,
}

impl SourceMap {
    /// An empty map. Every lookup resolves to line 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map for a JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceMapError`] carrying the position where the
    /// structure stopped making sense.
    pub fn from_text(text: &str) -> Result<Self, SourceMapError> {
        let mut scanner = Scanner::new(text);
        scanner.skip_whitespace();
        scanner.scan_value(String::new(), None)?;
        scanner.skip_whitespace();
        if scanner.peek().is_some() {
            return Err(SourceMapError::TrailingCharacters {
                line: scanner.line,
                column: scanner.column,
            });
        }
        tracing::trace!(entries = scanner.entries.len(), "built source map");
        Ok(Self {
            entries: scanner.entries,
        })
    }

    /// Look up the entry for an exact pointer.
    pub fn get(&self, pointer: &str) -> Option<&Entry> {
        self.entries.get(pointer)
    }

    /// Number of indexed values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a pointer to a line number.
    ///
    /// Returns the key-token line when `want_key` is set and the entry has a
    /// key (a non-root object member); otherwise the value-token line. A
    /// pointer missing from the map resolves to the value line of its
    /// nearest indexed ancestor, and to 0 when nothing matches.
    pub fn lookup_line(&self, pointer: &str, want_key: bool) -> u32 {
        if let Some(entry) = self.entries.get(pointer) {
            return match (want_key, entry.key) {
                (true, Some(key)) => key.line,
                _ => entry.value.line,
            };
        }
        let mut current = pointer;
        while let Some(up) = pointer::parent(current) {
            if let Some(entry) = self.entries.get(up) {
                return entry.value.line;
            }
            current = up;
        }
        0
    }
}

/// Free-function form of [`SourceMap::lookup_line`].
pub fn lookup_line(source_map: &SourceMap, pointer: &str, want_key: bool) -> u32 {
    source_map.lookup_line(pointer, want_key)
}

struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
    entries: HashMap<String, Entry>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
            entries: HashMap::new(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if b & 0xC0 != 0x80 {
            // UTF-8 continuation bytes do not start a new character.
            self.column += 1;
        }
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.advance();
        }
    }

    fn unexpected(&self) -> SourceMapError {
        match self.text[self.pos..].chars().next() {
            Some(found) => SourceMapError::UnexpectedCharacter {
                found,
                line: self.line,
                column: self.column,
            },
            None => SourceMapError::UnexpectedEof {
                line: self.line,
                column: self.column,
            },
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), SourceMapError> {
        if self.peek() == Some(byte) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn scan_value(&mut self, ptr: String, key: Option<Position>) -> Result<(), SourceMapError> {
        let value = self.position();
        match self.peek() {
            Some(b'{') => {
                self.entries.insert(ptr.clone(), Entry { key, value });
                self.scan_object(&ptr)
            }
            Some(b'[') => {
                self.entries.insert(ptr.clone(), Entry { key, value });
                self.scan_array(&ptr)
            }
            Some(b'"') => {
                self.entries.insert(ptr, Entry { key, value });
                self.scan_string().map(|_| ())
            }
            Some(b't') => {
                self.entries.insert(ptr, Entry { key, value });
                self.scan_literal("true")
            }
            Some(b'f') => {
                self.entries.insert(ptr, Entry { key, value });
                self.scan_literal("false")
            }
            Some(b'n') => {
                self.entries.insert(ptr, Entry { key, value });
                self.scan_literal("null")
            }
            Some(b'-' | b'0'..=b'9') => {
                self.entries.insert(ptr, Entry { key, value });
                self.scan_number();
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    fn scan_object(&mut self, ptr: &str) -> Result<(), SourceMapError> {
        self.expect(b'{')?;
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.advance();
            return Ok(());
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected());
            }
            let key_pos = self.position();
            let raw = self.scan_string()?;
            let key: String =
                serde_json::from_str(raw).map_err(|e| SourceMapError::InvalidKey {
                    line: key_pos.line,
                    column: key_pos.column,
                    reason: e.to_string(),
                })?;
            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            self.scan_value(pointer::push_key(ptr, &key), Some(key_pos))?;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b'}') => {
                    self.advance();
                    return Ok(());
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn scan_array(&mut self, ptr: &str) -> Result<(), SourceMapError> {
        self.expect(b'[')?;
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.advance();
            return Ok(());
        }
        let mut index = 0usize;
        loop {
            self.skip_whitespace();
            self.scan_value(pointer::push_index(ptr, index), None)?;
            index += 1;
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b']') => {
                    self.advance();
                    return Ok(());
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// Consume a string token and return its raw text, quotes included.
    fn scan_string(&mut self) -> Result<&'a str, SourceMapError> {
        let text = self.text;
        let start = self.pos;
        self.expect(b'"')?;
        loop {
            match self.advance() {
                Some(b'"') => return Ok(&text[start..self.pos]),
                Some(b'\\') => {
                    if self.advance().is_none() {
                        return Err(self.unexpected());
                    }
                }
                Some(_) => {}
                None => return Err(self.unexpected()),
            }
        }
    }

    fn scan_literal(&mut self, literal: &str) -> Result<(), SourceMapError> {
        if !self.text[self.pos..].starts_with(literal) {
            return Err(self.unexpected());
        }
        for _ in 0..literal.len() {
            self.advance();
        }
        Ok(())
    }

    fn scan_number(&mut self) {
        while let Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9') = self.peek() {
            self.advance();
        }
    }
}
