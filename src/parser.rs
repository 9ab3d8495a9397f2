//! Recursive-descent parser over the token stream from `lexer.rs`. No
//! grammar file survived in the retrieved original source for this
//! interpreter, so the grammar below is hand-written, in the shape of
//! the teacher's own hand-rolled parser (a `Parser` struct walking a
//! `Vec<Token>` by index, `Result`-returning parse functions, one per
//! grammar production).
//!
//! ```text
//! line        := "let" ident "=" expr | expr
//! expr        := application
//! application := atom+                      (left-associative)
//! atom        := "*" primary                (marks the result parameterized)
//!              | primary
//! primary     := ident
//!              | "(" expr ")"
//!              | "\" ident "." expr
//! ```

use crate::atom::{intern, Ident};
use crate::errors::{LambdaError, LambdaResult};
use crate::expr::Expr;
use crate::lexer::{lex, Token};

pub enum Line {
    Definition(Ident, Expr),
    Expression(Expr),
}

pub fn parse_line(src: &str) -> LambdaResult<Line> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let line = p.line()?;
    p.expect_end()?;
    Ok(line)
}

pub fn parse_expr(src: &str) -> LambdaResult<Expr> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let e = p.expr()?;
    p.expect_end()?;
    Ok(e)
}

/// Parse a `:deparam` directive's argument: a leading repetition count,
/// followed by the expression it applies to (e.g. `3 *x`).
pub fn parse_deparam(src: &str) -> LambdaResult<(usize, Expr)> {
    let tokens = lex(src)?;
    let mut p = Parser { tokens, pos: 0 };
    let count = match p.bump() {
        Some(Token::Number(n)) => n,
        Some(other) => {
            return Err(LambdaError::UnexpectedToken {
                expected: "a parameter count",
                found: format!("{:?}", other),
                pos: p.pos_at(p.pos.saturating_sub(1)),
            })
        }
        None => return Err(LambdaError::UnexpectedEof { expected: "a parameter count" }),
    };
    let e = p.expr()?;
    p.expect_end()?;
    Ok((count, e))
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn pos_at(&self, i: usize) -> usize {
        self.tokens.get(i).map(|(_, p)| *p).unwrap_or(self.tokens.last().map(|(_, p)| *p + 1).unwrap_or(0))
    }

    fn bump(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expect_end(&self) -> LambdaResult<()> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(LambdaError::UnexpectedToken {
                expected: "end of input",
                found: format!("{:?}", self.tokens[self.pos].0),
                pos: self.pos_at(self.pos),
            })
        }
    }

    fn line(&mut self) -> LambdaResult<Line> {
        if matches!(self.peek(), Some(Token::Let)) {
            self.bump();
            let name = self.ident()?;
            self.expect(Token::Equals, "'='")?;
            let e = self.expr()?;
            Ok(Line::Definition(name, e))
        } else {
            Ok(Line::Expression(self.expr()?))
        }
    }

    fn expr(&mut self) -> LambdaResult<Expr> {
        self.application()
    }

    fn application(&mut self) -> LambdaResult<Expr> {
        let mut result = self.atom()?;
        while self.starts_atom() {
            let rhs = self.atom()?;
            result = Expr::application(result, rhs);
        }
        Ok(result)
    }

    fn starts_atom(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Ident(_)) | Some(Token::LParen) | Some(Token::Lambda) | Some(Token::Star)
        )
    }

    fn atom(&mut self) -> LambdaResult<Expr> {
        if matches!(self.peek(), Some(Token::Star)) {
            self.bump();
            let mut e = self.primary()?;
            e.set_parameterized(true);
            Ok(e)
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> LambdaResult<Expr> {
        match self.bump() {
            Some(Token::Ident(name)) => Ok(Expr::variable(intern(&name))),
            Some(Token::LParen) => {
                let e = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(e)
            }
            Some(Token::Lambda) => {
                let bound = self.ident()?;
                self.expect(Token::Dot, "'.'")?;
                let body = self.expr()?;
                Ok(Expr::abstraction(bound, body))
            }
            Some(other) => Err(LambdaError::UnexpectedToken {
                expected: "a variable, '(', or '\\'",
                found: format!("{:?}", other),
                pos: self.pos_at(self.pos.saturating_sub(1)),
            }),
            None => Err(LambdaError::UnexpectedEof { expected: "an expression" }),
        }
    }

    fn ident(&mut self) -> LambdaResult<Ident> {
        match self.bump() {
            Some(Token::Ident(name)) => Ok(intern(&name)),
            Some(other) => Err(LambdaError::UnexpectedToken {
                expected: "an identifier",
                found: format!("{:?}", other),
                pos: self.pos_at(self.pos.saturating_sub(1)),
            }),
            None => Err(LambdaError::UnexpectedEof { expected: "an identifier" }),
        }
    }

    fn expect(&mut self, want: Token, desc: &'static str) -> LambdaResult<()> {
        match self.bump() {
            Some(ref t) if *t == want => Ok(()),
            Some(other) => Err(LambdaError::UnexpectedToken {
                expected: desc,
                found: format!("{:?}", other),
                pos: self.pos_at(self.pos.saturating_sub(1)),
            }),
            None => Err(LambdaError::UnexpectedEof { expected: desc }),
        }
    }
}
