use crate::block_string::dedent_block_string_lines;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::TokenId;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::Source;
use std::sync::Arc;

/// Scans a [`Source`] into [`GraphQLToken`]s on demand.
///
/// Tokens are materialized lazily, one at a time, and stored in a
/// doubly-linked list owned by the lexer: each token records the ids of
/// its neighbours, so once a token has been scanned any later lookahead
/// at the same position is a plain list walk. The list starts with a
/// synthetic `<SOF>` token (the initial [`token()`](Self::token)) and ends
/// with `<EOF>`; advancing past `<EOF>` keeps returning it.
///
/// Whitespace, commas, and a byte-order mark are ignored. Comments are
/// materialized as `Comment` tokens (so they appear in
/// [`into_tokens()`](Self::into_tokens)) but [`advance()`](Self::advance)
/// and [`lookahead()`](Self::lookahead) step over them.
///
/// # Example
///
/// ```
/// use libgraphql_language::GraphQLLexer;
/// use libgraphql_language::token::GraphQLTokenKind;
///
/// let mut lexer = GraphQLLexer::new("{ hero }");
/// let brace = lexer.advance().unwrap();
/// assert_eq!(lexer.get(brace).kind, GraphQLTokenKind::CurlyBraceOpen);
/// let name = lexer.advance().unwrap();
/// assert_eq!(lexer.get(name).value.as_deref(), Some("hero"));
/// ```
pub struct GraphQLLexer {
    source: Arc<Source>,

    /// Every token materialized so far, indexed by [`TokenId`].
    tokens: Vec<GraphQLToken>,

    /// The previously focused non-ignored token.
    last_token: TokenId,

    /// The currently focused non-ignored token.
    token: TokenId,

    /// 1-indexed line number of the scan position.
    line: usize,

    /// Byte offset at which the current line starts.
    line_start: usize,

    /// `(line_start, position, column)` of the last column computation.
    /// Tokens are created in order, so the next token on the same line
    /// only needs to count the characters since the previous one.
    column_cache: (usize, usize, usize),
}

impl GraphQLLexer {
    pub fn new(source: impl crate::IntoSource) -> Self {
        let source = source.into_source();
        let sof = GraphQLToken {
            kind: GraphQLTokenKind::Sof,
            start: 0,
            end: 0,
            line: 0,
            column: 0,
            value: None,
            prev: None,
            next: None,
        };
        Self {
            source,
            tokens: vec![sof],
            last_token: TokenId(0),
            token: TokenId(0),
            line: 1,
            line_start: 0,
            column_cache: (0, 0, 1),
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// The currently focused token.
    pub fn token(&self) -> &GraphQLToken {
        &self.tokens[self.token.0]
    }

    pub fn token_id(&self) -> TokenId {
        self.token
    }

    /// The token focused before the most recent [`advance()`](Self::advance).
    pub fn last_token(&self) -> &GraphQLToken {
        &self.tokens[self.last_token.0]
    }

    pub fn last_token_id(&self) -> TokenId {
        self.last_token
    }

    /// Looks up a token previously produced by this lexer.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different lexer and is out of range.
    pub fn get(&self, id: TokenId) -> &GraphQLToken {
        &self.tokens[id.0]
    }

    /// The number of tokens (including `<SOF>` and comments) materialized
    /// so far.
    pub fn materialized_len(&self) -> usize {
        self.tokens.len()
    }

    /// Advances to the next non-comment token and returns it.
    pub fn advance(&mut self) -> Result<TokenId, GraphQLError> {
        self.last_token = self.token;
        self.token = self.lookahead()?;
        Ok(self.token)
    }

    /// Returns the next non-comment token without advancing.
    ///
    /// Tokens scanned here stay linked into the token list, so calling
    /// `lookahead()` repeatedly returns the same token without scanning
    /// it again.
    pub fn lookahead(&mut self) -> Result<TokenId, GraphQLError> {
        let mut id = self.token;
        if self.tokens[id.0].kind == GraphQLTokenKind::Eof {
            return Ok(id);
        }
        loop {
            id = match self.tokens[id.0].next {
                Some(next) => next,
                None => {
                    let end = self.tokens[id.0].end;
                    let mut next = self.read_next_token(end)?;
                    next.prev = Some(id);
                    let next_id = TokenId(self.tokens.len());
                    self.tokens.push(next);
                    self.tokens[id.0].next = Some(next_id);
                    next_id
                },
            };
            if self.tokens[id.0].kind != GraphQLTokenKind::Comment {
                return Ok(id);
            }
        }
    }

    /// Scans the remainder of the source and returns every token, from
    /// `<SOF>` to `<EOF>` and including comments, in source order.
    pub fn into_tokens(mut self) -> Result<Vec<GraphQLToken>, GraphQLError> {
        while self.token().kind != GraphQLTokenKind::Eof {
            self.advance()?;
        }
        Ok(self.tokens)
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    fn byte_at(&self, position: usize) -> Option<u8> {
        self.source.body().as_bytes().get(position).copied()
    }

    fn create_token(
        &mut self,
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        value: Option<String>,
    ) -> GraphQLToken {
        let column = self.column_at(start);
        GraphQLToken {
            kind,
            start,
            end,
            line: self.line,
            column,
            value,
            prev: None,
            next: None,
        }
    }

    /// 1-indexed column (in characters) of `position` on the current line.
    fn column_at(&mut self, position: usize) -> usize {
        let (cached_line_start, cached_position, cached_column) = self.column_cache;
        let (from, column) =
            if cached_line_start == self.line_start && cached_position <= position {
                (cached_position, cached_column)
            } else {
                (self.line_start, 1)
            };
        let column = column
            + self
                .source
                .body()
                .get(from..position)
                .map_or(position.saturating_sub(from), |text| text.chars().count());
        self.column_cache = (self.line_start, position, column);
        column
    }

    fn syntax_error(
        &self,
        position: usize,
        description: impl AsRef<str>,
        kind: GraphQLErrorKind,
    ) -> GraphQLError {
        GraphQLError::syntax(&self.source, position, description, kind)
    }

    /// Describes the character at `position` for an error message:
    /// printable ASCII is quoted (`"a"`, or `'"'` for a double quote),
    /// anything else is shown as `U+XXXX`, and the end of input as
    /// `<EOF>`.
    fn print_char_at(&self, position: usize) -> String {
        match self.source.body().get(position..).and_then(|rest| rest.chars().next()) {
            None => GraphQLTokenKind::Eof.as_str().to_string(),
            Some('"') => "'\"'".to_string(),
            Some(c @ '\u{0020}'..='\u{007E}') => format!("\"{c}\""),
            Some(c) => format!("U+{:04X}", c as u32),
        }
    }

    /// Reads the token starting at or after `start`, skipping ignored
    /// characters.
    fn read_next_token(&mut self, start: usize) -> Result<GraphQLToken, GraphQLError> {
        let body_len = self.source.body().len();
        let mut position = start;

        while let Some(byte) = self.byte_at(position) {
            let punctuator = match byte {
                b'\t' | b' ' | b',' => {
                    position += 1;
                    continue;
                },
                b'\n' => {
                    position += 1;
                    self.line += 1;
                    self.line_start = position;
                    continue;
                },
                b'\r' => {
                    position += if self.byte_at(position + 1) == Some(b'\n') { 2 } else { 1 };
                    self.line += 1;
                    self.line_start = position;
                    continue;
                },
                b'#' => return Ok(self.read_comment(position)),
                b'!' => Some(GraphQLTokenKind::Bang),
                b'$' => Some(GraphQLTokenKind::Dollar),
                b'&' => Some(GraphQLTokenKind::Ampersand),
                b'(' => Some(GraphQLTokenKind::ParenOpen),
                b')' => Some(GraphQLTokenKind::ParenClose),
                b'.' => {
                    if self.byte_at(position + 1) == Some(b'.')
                        && self.byte_at(position + 2) == Some(b'.')
                    {
                        return Ok(self.create_token(
                            GraphQLTokenKind::Ellipsis,
                            position,
                            position + 3,
                            None,
                        ));
                    }
                    None
                },
                b':' => Some(GraphQLTokenKind::Colon),
                b'=' => Some(GraphQLTokenKind::Equals),
                b'@' => Some(GraphQLTokenKind::At),
                b'[' => Some(GraphQLTokenKind::SquareBracketOpen),
                b']' => Some(GraphQLTokenKind::SquareBracketClose),
                b'{' => Some(GraphQLTokenKind::CurlyBraceOpen),
                b'|' => Some(GraphQLTokenKind::Pipe),
                b'}' => Some(GraphQLTokenKind::CurlyBraceClose),
                b'"' => {
                    if self.byte_at(position + 1) == Some(b'"')
                        && self.byte_at(position + 2) == Some(b'"')
                    {
                        return self.read_block_string(position);
                    }
                    return self.read_string(position);
                },
                _ => None,
            };

            if let Some(kind) = punctuator {
                return Ok(self.create_token(kind, position, position + 1, None));
            }

            if byte.is_ascii_digit() || byte == b'-' {
                return self.read_number(position, byte);
            }
            if is_name_start(byte) {
                return Ok(self.read_name(position));
            }

            // Byte-order mark (U+FEFF, encoded EF BB BF) is ignored.
            if self.source.body()[position..].starts_with('\u{FEFF}') {
                position += '\u{FEFF}'.len_utf8();
                continue;
            }

            return Err(self.unexpected_character(position, byte));
        }

        Ok(self.create_token(GraphQLTokenKind::Eof, body_len, body_len, None))
    }

    fn unexpected_character(&self, position: usize, byte: u8) -> GraphQLError {
        if byte == b'\'' {
            return self.syntax_error(
                position,
                "Unexpected single quote character ('), did you mean to use a double quote (\")?",
                GraphQLErrorKind::UnexpectedCharacter,
            );
        }
        self.syntax_error(
            position,
            format!("Unexpected character: {}.", self.print_char_at(position)),
            GraphQLErrorKind::UnexpectedCharacter,
        )
    }

    /// Reads a `#` comment up to (not including) the line terminator.
    fn read_comment(&mut self, start: usize) -> GraphQLToken {
        let body = self.source.body();
        let end = memchr::memchr2(b'\n', b'\r', &body.as_bytes()[start + 1..])
            .map_or(body.len(), |offset| start + 1 + offset);
        let value = body[start + 1..end].to_string();
        self.create_token(GraphQLTokenKind::Comment, start, end, Some(value))
    }

    /// Reads `[_A-Za-z][_0-9A-Za-z]*`.
    fn read_name(&mut self, start: usize) -> GraphQLToken {
        let body = self.source.body();
        let end = body.as_bytes()[start + 1..]
            .iter()
            .position(|byte| !is_name_continue(*byte))
            .map_or(body.len(), |offset| start + 1 + offset);
        let value = body[start..end].to_string();
        self.create_token(GraphQLTokenKind::Name, start, end, Some(value))
    }

    /// Reads an `Int` or `Float` literal:
    ///
    /// ```text
    /// -? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?
    /// ```
    ///
    /// A `.` or name-start character directly after the literal is an
    /// error rather than the start of the next token.
    fn read_number(&mut self, start: usize, first_byte: u8) -> Result<GraphQLToken, GraphQLError> {
        let mut position = start;
        let mut byte = Some(first_byte);
        let mut is_float = false;

        if byte == Some(b'-') {
            position += 1;
            byte = self.byte_at(position);
        }

        if byte == Some(b'0') {
            position += 1;
            byte = self.byte_at(position);
            if byte.is_some_and(|b| b.is_ascii_digit()) {
                return Err(self.syntax_error(
                    position,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        self.print_char_at(position),
                    ),
                    GraphQLErrorKind::InvalidNumber,
                ));
            }
        } else {
            position = self.read_digits(position, byte)?;
            byte = self.byte_at(position);
        }

        if byte == Some(b'.') {
            is_float = true;
            position += 1;
            byte = self.byte_at(position);
            position = self.read_digits(position, byte)?;
            byte = self.byte_at(position);
        }

        if matches!(byte, Some(b'E' | b'e')) {
            is_float = true;
            position += 1;
            byte = self.byte_at(position);
            if matches!(byte, Some(b'+' | b'-')) {
                position += 1;
                byte = self.byte_at(position);
            }
            position = self.read_digits(position, byte)?;
            byte = self.byte_at(position);
        }

        if byte.is_some_and(|b| b == b'.' || is_name_start(b)) {
            return Err(self.syntax_error(
                position,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    self.print_char_at(position),
                ),
                GraphQLErrorKind::InvalidNumber,
            ));
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        let value = self.source.body()[start..position].to_string();
        Ok(self.create_token(kind, start, position, Some(value)))
    }

    /// Reads one or more digits, returning the position after the last.
    fn read_digits(&self, start: usize, first_byte: Option<u8>) -> Result<usize, GraphQLError> {
        if !first_byte.is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.syntax_error(
                start,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    self.print_char_at(start),
                ),
                GraphQLErrorKind::InvalidNumber,
            ));
        }
        let mut position = start + 1;
        while self.byte_at(position).is_some_and(|b| b.is_ascii_digit()) {
            position += 1;
        }
        Ok(position)
    }

    /// Reads a single-line `"` string, resolving escape sequences.
    fn read_string(&mut self, start: usize) -> Result<GraphQLToken, GraphQLError> {
        let body = Arc::clone(&self.source);
        let body = body.body();
        let bytes = body.as_bytes();
        let mut position = start + 1;
        let mut chunk_start = position;
        let mut value = String::new();

        while let Some(&byte) = bytes.get(position) {
            match byte {
                b'"' => {
                    value.push_str(&body[chunk_start..position]);
                    return Ok(self.create_token(
                        GraphQLTokenKind::String,
                        start,
                        position + 1,
                        Some(value),
                    ));
                },
                b'\\' => {
                    value.push_str(&body[chunk_start..position]);
                    let (escaped, size) = if bytes.get(position + 1) == Some(&b'u') {
                        if bytes.get(position + 2) == Some(&b'{') {
                            self.read_escaped_unicode_variable_width(position)?
                        } else {
                            self.read_escaped_unicode_fixed_width(position)?
                        }
                    } else {
                        self.read_escaped_character(position)?
                    };
                    value.push(escaped);
                    position += size;
                    chunk_start = position;
                },
                b'\n' | b'\r' => break,
                _ => position += 1,
            }
        }

        Err(self.syntax_error(
            position,
            "Unterminated string.",
            GraphQLErrorKind::UnterminatedString,
        ))
    }

    /// Reads `\u{X...}` at `position` (the backslash). Returns the
    /// decoded character and the escape's length in bytes.
    fn read_escaped_unicode_variable_width(
        &self,
        position: usize,
    ) -> Result<(char, usize), GraphQLError> {
        let mut point: i32 = 0;
        let mut size = 3;
        // At most 8 hex digits fit between the braces; any more and the
        // escape is rejected.
        while size < 12 {
            let byte = self.byte_at(position + size);
            size += 1;
            if byte == Some(b'}') {
                if size < 5 {
                    break;
                }
                match u32::try_from(point).ok().and_then(char::from_u32) {
                    Some(c) => return Ok((c, size)),
                    None => break,
                }
            }
            point = (point << 4) | byte.map_or(-1, read_hex_digit);
            if point < 0 {
                break;
            }
        }

        Err(self.syntax_error(
            position,
            format!(
                "Invalid Unicode escape sequence: \"{}\".",
                self.excerpt(position, position + size),
            ),
            GraphQLErrorKind::InvalidEscapeSequence,
        ))
    }

    /// Reads `\uXXXX` at `position` (the backslash), combining a leading
    /// surrogate with an immediately following `\uXXXX` trailing
    /// surrogate.
    fn read_escaped_unicode_fixed_width(
        &self,
        position: usize,
    ) -> Result<(char, usize), GraphQLError> {
        let code = self.read_16_bit_hex_code(position + 2);

        if let Some(c) = u32::try_from(code).ok().and_then(char::from_u32) {
            return Ok((c, 6));
        }

        if is_leading_surrogate(code)
            && self.byte_at(position + 6) == Some(b'\\')
            && self.byte_at(position + 7) == Some(b'u')
        {
            let trailing_code = self.read_16_bit_hex_code(position + 8);
            if is_trailing_surrogate(trailing_code) {
                let combined =
                    0x10000 + (((code - 0xD800) as u32) << 10) + (trailing_code - 0xDC00) as u32;
                if let Some(c) = char::from_u32(combined) {
                    return Ok((c, 12));
                }
            }
        }

        Err(self.syntax_error(
            position,
            format!(
                "Invalid Unicode escape sequence: \"{}\".",
                self.excerpt(position, position + 6),
            ),
            GraphQLErrorKind::InvalidEscapeSequence,
        ))
    }

    /// Reads four hex digits at `position`. Negative if any is not a hex
    /// digit.
    fn read_16_bit_hex_code(&self, position: usize) -> i32 {
        (0..4).fold(0, |code, offset| {
            let digit = self.byte_at(position + offset).map_or(-1, read_hex_digit);
            (code << 4) | digit
        })
    }

    /// Reads a single-character escape (`\n`, `\"`, ...) at `position`.
    fn read_escaped_character(&self, position: usize) -> Result<(char, usize), GraphQLError> {
        let escaped = match self.byte_at(position + 1) {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{0008}',
            Some(b'f') => '\u{000C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            _ => {
                return Err(self.syntax_error(
                    position,
                    format!(
                        "Invalid character escape sequence: \"{}\".",
                        self.excerpt(position, position + 2),
                    ),
                    GraphQLErrorKind::InvalidEscapeSequence,
                ));
            },
        };
        Ok((escaped, 2))
    }

    /// Reads a `"""` block string. Only `\"""` is an escape; the value is
    /// the dedented content with lines joined by `\n`.
    fn read_block_string(&mut self, start: usize) -> Result<GraphQLToken, GraphQLError> {
        let source = Arc::clone(&self.source);
        let body = source.body();
        let bytes = body.as_bytes();
        let mut line_start = self.line_start;
        let mut position = start + 3;
        let mut chunk_start = position;
        let mut current_line = String::new();
        let mut block_lines = Vec::new();

        while let Some(&byte) = bytes.get(position) {
            if byte == b'"' && body[position..].starts_with("\"\"\"") {
                current_line.push_str(&body[chunk_start..position]);
                block_lines.push(current_line);

                let value = dedent_block_string_lines(&block_lines).join("\n");
                let token = self.create_token(
                    GraphQLTokenKind::BlockString,
                    start,
                    position + 3,
                    Some(value),
                );
                self.line += block_lines.len() - 1;
                self.line_start = line_start;
                return Ok(token);
            }

            if byte == b'\\' && body[position + 1..].starts_with("\"\"\"") {
                current_line.push_str(&body[chunk_start..position]);
                chunk_start = position + 1;
                position += 4;
                continue;
            }

            if byte == b'\n' || byte == b'\r' {
                current_line.push_str(&body[chunk_start..position]);
                block_lines.push(std::mem::take(&mut current_line));
                position += if byte == b'\r' && bytes.get(position + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                chunk_start = position;
                line_start = position;
                continue;
            }

            position += 1;
        }

        Err(self.syntax_error(
            position,
            "Unterminated string.",
            GraphQLErrorKind::UnterminatedString,
        ))
    }

    /// `body[start..end]`, with `end` clamped to the body and widened to
    /// the next character boundary.
    fn excerpt(&self, start: usize, end: usize) -> &str {
        let body = self.source.body();
        let mut end = end.min(body.len());
        while !body.is_char_boundary(end) {
            end += 1;
        }
        body.get(start..end).unwrap_or_default()
    }
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn read_hex_digit(byte: u8) -> i32 {
    match byte {
        b'0'..=b'9' => (byte - b'0') as i32,
        b'A'..=b'F' => (byte - b'A' + 10) as i32,
        b'a'..=b'f' => (byte - b'a' + 10) as i32,
        _ => -1,
    }
}

fn is_leading_surrogate(code: i32) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

fn is_trailing_surrogate(code: i32) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}
