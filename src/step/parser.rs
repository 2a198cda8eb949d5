//! STEP recursive descent parser.
//!
//! Parses token streams into a [`StepFile`]. Supports:
//! - `ISO-10303-21;` envelope, HEADER section records
//! - one or more DATA sections (optionally parameterised, as in edition 3)
//! - simple and complex entity instances
//! - every parameter form: lists, typed values, references, `$`, `*`

use crate::model::{EntityId, Value};
use crate::{Error, Result};
use super::ast::*;
use super::lexer::{Token, TokenKind};

/// Parser state: wraps a token slice with cursor.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token> {
        let tok = self.peek();
        if tok.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.error(format!("Expected {:?}, got {:?} '{}'", kind, tok.kind, tok.text)))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        if self.at_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("Expected {keyword}, got '{}'", self.peek().text)))
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.at(TokenKind::Keyword) && self.peek().text.eq_ignore_ascii_case(keyword)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, msg: String) -> Error {
        Error::SyntaxError {
            position: self.peek().span.start,
            message: msg,
        }
    }
}

/// Parse a complete exchange file from tokens.
pub fn parse_file(tokens: &[Token]) -> Result<StepFile> {
    let mut p = Parser::new(tokens);
    let mut file = StepFile::default();

    p.expect_keyword("ISO-10303-21")?;
    p.expect(TokenKind::Semicolon)?;

    p.expect_keyword("HEADER")?;
    p.expect(TokenKind::Semicolon)?;
    while !p.at_keyword("ENDSEC") {
        if p.at(TokenKind::Eof) {
            return Err(p.error("Unexpected end of file in HEADER section".into()));
        }
        file.header.push(parse_record(&mut p)?);
        p.expect(TokenKind::Semicolon)?;
    }
    p.expect_keyword("ENDSEC")?;
    p.expect(TokenKind::Semicolon)?;

    // ANCHOR / REFERENCE / SIGNATURE sections of edition 3 are not used by IFC.
    while p.at_keyword("DATA") {
        p.advance();
        if p.at(TokenKind::LParen) {
            parse_list(&mut p)?;
        }
        p.expect(TokenKind::Semicolon)?;
        while !p.at_keyword("ENDSEC") {
            if p.at(TokenKind::Eof) {
                return Err(p.error("Unexpected end of file in DATA section".into()));
            }
            file.instances.push(parse_instance(&mut p)?);
        }
        p.expect_keyword("ENDSEC")?;
        p.expect(TokenKind::Semicolon)?;
    }

    p.expect_keyword("END-ISO-10303-21")?;
    p.eat(TokenKind::Semicolon);
    if !p.at(TokenKind::Eof) {
        return Err(p.error(format!("Unexpected token after end of file: {:?}", p.peek_kind())));
    }

    Ok(file)
}

// ============================================================================
// Instance parsers
// ============================================================================

fn parse_instance(p: &mut Parser) -> Result<Instance> {
    let id = parse_instance_name(p)?;
    p.expect(TokenKind::Eq)?;

    let body = if p.eat(TokenKind::LParen) {
        let mut parts = Vec::new();
        while !p.at(TokenKind::RParen) {
            parts.push(parse_record(p)?);
        }
        p.expect(TokenKind::RParen)?;
        if parts.is_empty() {
            return Err(p.error(format!("Complex instance #{id} has no parts")));
        }
        InstanceBody::Complex(parts)
    } else {
        InstanceBody::Simple(parse_record(p)?)
    };

    p.expect(TokenKind::Semicolon)?;
    Ok(Instance { id, body })
}

fn parse_instance_name(p: &mut Parser) -> Result<EntityId> {
    let tok = p.expect(TokenKind::InstanceName)?;
    let position = tok.span.start;
    tok.text
        .parse::<u64>()
        .map(EntityId)
        .map_err(|e| Error::SyntaxError { position, message: format!("Bad instance name: {e}") })
}

fn parse_record(p: &mut Parser) -> Result<Record> {
    let keyword = p.expect(TokenKind::Keyword)?.text.clone();
    let params = parse_list(p)?;
    Ok(Record { keyword, params })
}

// ============================================================================
// Parameter parsers
// ============================================================================

/// `( param, param, ... )`, possibly empty.
fn parse_list(p: &mut Parser) -> Result<Vec<Value>> {
    p.expect(TokenKind::LParen)?;
    let mut items = Vec::new();
    if p.eat(TokenKind::RParen) {
        return Ok(items);
    }
    loop {
        items.push(parse_parameter(p)?);
        if p.eat(TokenKind::Comma) {
            continue;
        }
        p.expect(TokenKind::RParen)?;
        return Ok(items);
    }
}

fn parse_parameter(p: &mut Parser) -> Result<Value> {
    let tok = p.peek().clone();
    match tok.kind {
        TokenKind::Dollar => { p.advance(); Ok(Value::Null) }
        TokenKind::Star => { p.advance(); Ok(Value::Derived) }
        TokenKind::InstanceName => Ok(Value::Ref(parse_instance_name(p)?)),
        TokenKind::StringLiteral => { p.advance(); Ok(Value::String(tok.text)) }
        TokenKind::Enumeration => { p.advance(); Ok(Value::Enum(tok.text)) }
        TokenKind::Binary => { p.advance(); Ok(Value::Binary(tok.text)) }
        TokenKind::Integer => {
            p.advance();
            tok.text.parse::<i64>().map(Value::Int).map_err(|e| Error::SyntaxError {
                position: tok.span.start,
                message: format!("Bad integer '{}': {e}", tok.text),
            })
        }
        TokenKind::Real => {
            p.advance();
            tok.text.parse::<f64>().map(Value::Float).map_err(|e| Error::SyntaxError {
                position: tok.span.start,
                message: format!("Bad real '{}': {e}", tok.text),
            })
        }
        TokenKind::LParen => Ok(Value::List(parse_list(p)?)),
        TokenKind::Keyword => {
            // Typed parameter: IFCLABEL('x')
            p.advance();
            let mut inner = parse_list(p)?;
            let value = if inner.len() == 1 { inner.remove(0) } else { Value::List(inner) };
            Ok(Value::Typed { type_name: tok.text, value: Box::new(value) })
        }
        kind => Err(p.error(format!("Unexpected {kind:?} in parameter list"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::lexer::tokenize;

    fn parse(input: &str) -> Result<StepFile> {
        parse_file(&tokenize(input)?)
    }

    const MINIMAL: &str = "ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
#1=IFCSITE('1a',$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$);
#2=IFCRELAGGREGATES('2b',$,$,$,#1,(#3,#4));
#5=IFCPROPERTYSINGLEVALUE('Width',$,IFCLENGTHMEASURE(0.2),$);
ENDSEC;
END-ISO-10303-21;
";

    #[test]
    fn test_minimal_file() {
        let file = parse(MINIMAL).unwrap();
        assert_eq!(file.header.len(), 2);
        assert_eq!(file.schemas(), vec!["IFC4".to_string()]);
        assert_eq!(file.instances.len(), 3);

        let rel = &file.instances[1];
        assert_eq!(rel.id, EntityId(2));
        match &rel.body {
            InstanceBody::Simple(record) => {
                assert_eq!(record.keyword, "IFCRELAGGREGATES");
                assert_eq!(record.params[4], Value::Ref(EntityId(1)));
                assert_eq!(
                    record.params[5],
                    Value::List(vec![Value::Ref(EntityId(3)), Value::Ref(EntityId(4))])
                );
            }
            other => panic!("expected simple instance, got {other:?}"),
        }
    }

    #[test]
    fn test_typed_parameter() {
        let file = parse(MINIMAL).unwrap();
        let InstanceBody::Simple(record) = &file.instances[2].body else {
            panic!("expected simple instance");
        };
        assert_eq!(
            record.params[2],
            Value::Typed { type_name: "IFCLENGTHMEASURE".into(), value: Box::new(Value::Float(0.2)) }
        );
    }

    #[test]
    fn test_complex_instance() {
        let input = "ISO-10303-21;HEADER;ENDSEC;DATA;
#7=(IFCA(1)IFCB(#2,$));
ENDSEC;END-ISO-10303-21;";
        let file = parse(input).unwrap();
        match &file.instances[0].body {
            InstanceBody::Complex(parts) => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[1].keyword, "IFCB");
            }
            other => panic!("expected complex instance, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_list_and_multiple_data_sections() {
        let input = "ISO-10303-21;HEADER;ENDSEC;
DATA;#1=IFCX(());ENDSEC;
DATA(('second'));#2=IFCY($);ENDSEC;
END-ISO-10303-21;";
        let file = parse(input).unwrap();
        assert_eq!(file.instances.len(), 2);
        let InstanceBody::Simple(record) = &file.instances[0].body else {
            panic!("expected simple instance");
        };
        assert_eq!(record.params, vec![Value::List(vec![])]);
    }

    #[test]
    fn test_syntax_errors() {
        assert!(parse("HEADER;ENDSEC;").is_err());
        assert!(parse("ISO-10303-21;HEADER;ENDSEC;DATA;#1=IFCX(1,;ENDSEC;END-ISO-10303-21;").is_err());
        assert!(parse("ISO-10303-21;HEADER;ENDSEC;DATA;#1=IFCX(1)").is_err());
        assert!(parse("ISO-10303-21;HEADER;ENDSEC;DATA;#1=IFCX(1);").is_err());
    }
}
