use crate::{
    BinaryOp, Constant, Expr, Func, ParseError,
    lexer::{Token, TokenKind, tokenize},
};

/// Maximum nesting of the source and maximum height of the parsed tree.
///
/// Evaluation, formatting, and dropping all recurse over the tree, so long
/// operator chains count against this limit as well as parentheses.
const MAX_DEPTH: usize = 128;

const OPERAND: &str = "a number, name, or '('";

/// Parses `source` into an expression tree.
pub(crate) fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let node = parser.expr()?;

    match parser.next() {
        None => Ok(node.expr),
        Some(token) => Err(unexpected(&token, "an operator or end of input")),
    }
}

/// A parsed subtree and its height.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|token| &token.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(0, |token| token.offset)
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
    }

    /// Every nested construct passes through here, so recursion is bounded here.
    fn unary(&mut self) -> Result<Node, ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                offset: self.offset(),
            });
        }
        let result = self.unary_inner();
        self.depth -= 1;
        result
    }

    fn unary_inner(&mut self) -> Result<Node, ParseError> {
        if self.eat(&TokenKind::Minus) {
            let inner = self.unary()?;
            return self.grow(inner.height, Expr::Neg(Box::new(inner.expr)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Pow) {
            let exponent = self.unary()?;
            return self.binary(BinaryOp::Pow, base, exponent);
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.next() else {
            return Err(ParseError::UnexpectedEnd { expected: OPERAND });
        };
        match token.kind {
            TokenKind::Number(value) => Ok(Node::leaf(Expr::Number(value))),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.close_paren()?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.name(name, token.offset),
            _ => Err(unexpected(&token, OPERAND)),
        }
    }

    fn binary(&self, op: BinaryOp, lhs: Node, rhs: Node) -> Result<Node, ParseError> {
        let height = lhs.height.max(rhs.height);
        self.grow(height, Expr::binary(op, lhs.expr, rhs.expr))
    }

    /// Wraps `expr`, whose children are at most `child_height` tall, in a node.
    fn grow(&self, child_height: usize, expr: Expr) -> Result<Node, ParseError> {
        let height = child_height + 1;
        if height > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                offset: self.offset(),
            });
        }
        Ok(Node { expr, height })
    }

    /// Resolves a name, which may carry a `math.` prefix.
    fn name(&mut self, first: String, offset: usize) -> Result<Node, ParseError> {
        let (name, qualified) = if first == "math" && self.eat(&TokenKind::Dot) {
            match self.next() {
                Some(Token {
                    kind: TokenKind::Ident(member),
                    ..
                }) => (member, true),
                Some(token) => return Err(unexpected(&token, "a name after 'math.'")),
                None => {
                    return Err(ParseError::UnexpectedEnd {
                        expected: "a name after 'math.'",
                    });
                }
            }
        } else {
            (first, false)
        };
        let display = if qualified {
            format!("math.{name}")
        } else {
            name.clone()
        };

        if let Some(func) = Func::from_name(&name) {
            if !self.eat(&TokenKind::LParen) {
                return Err(ParseError::MissingCall {
                    offset,
                    name: display,
                });
            }
            let arg = self.expr()?;
            self.close_paren()?;
            return self.grow(arg.height, Expr::Call(func, Box::new(arg.expr)));
        }

        let expr = if let Some(constant) = Constant::from_name(&name) {
            Expr::Const(constant)
        } else if name == "x" && !qualified {
            Expr::Var
        } else {
            return Err(ParseError::UnknownName {
                offset,
                name: display,
            });
        };

        if self.peek_kind() == Some(&TokenKind::LParen) {
            return Err(ParseError::NotCallable {
                offset,
                name: display,
            });
        }
        Ok(Node::leaf(expr))
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(unexpected(&token, "')'")),
            None => Err(ParseError::UnexpectedEnd { expected: "')'" }),
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        offset: token.offset,
        expected,
        found: token.kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(shape("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(shape("8 / 4 / 2"), "((8 / 4) / 2)");
        assert_eq!(shape("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
        assert_eq!(shape("2 ^ 3 ^ 2"), "(2 ** (3 ** 2))");
    }

    #[test]
    fn power_binds_tighter_than_unary_minus() {
        assert_eq!(shape("-x**2"), "-((x ** 2))");
        assert_eq!(shape("2**-x"), "(2 ** -(x))");
        assert_eq!(shape("--x"), "-(-(x))");
        assert_eq!(shape("+x"), "x");
    }

    #[test]
    fn calls_and_constants() {
        assert_eq!(shape("sin(x) + pi"), "(sin(x) + pi)");
        assert_eq!(shape("math.sqrt(math.tau * x)"), "sqrt((tau * x))");
        assert_eq!(shape("(x - 2)**2"), "((x - 2) ** 2)");
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            parse("y + 1"),
            Err(ParseError::UnknownName {
                offset: 0,
                name: "y".into()
            })
        );
        assert_eq!(
            parse("__import__(x)"),
            Err(ParseError::UnknownName {
                offset: 0,
                name: "__import__".into()
            })
        );
        assert_eq!(
            parse("math.floor(x)"),
            Err(ParseError::UnknownName {
                offset: 0,
                name: "math.floor".into()
            })
        );
        assert_eq!(
            parse("math.x"),
            Err(ParseError::UnknownName {
                offset: 0,
                name: "math.x".into()
            })
        );
        assert!(matches!(
            parse("math + 1"),
            Err(ParseError::UnknownName { .. })
        ));
    }

    #[test]
    fn functions_must_be_called() {
        assert_eq!(
            parse("x + sin"),
            Err(ParseError::MissingCall {
                offset: 4,
                name: "sin".into()
            })
        );
    }

    #[test]
    fn values_cannot_be_called() {
        assert_eq!(
            parse("pi(2)"),
            Err(ParseError::NotCallable {
                offset: 0,
                name: "pi".into()
            })
        );
        assert!(matches!(
            parse("x(2)"),
            Err(ParseError::NotCallable { .. })
        ));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(
            parse("(x + 1"),
            Err(ParseError::UnexpectedEnd { expected: "')'" })
        );
        assert!(matches!(
            parse("x + 1)"),
            Err(ParseError::UnexpectedToken { offset: 5, .. })
        ));
    }

    #[test]
    fn trailing_and_missing_operands() {
        assert!(matches!(
            parse("2 x"),
            Err(ParseError::UnexpectedToken { offset: 2, .. })
        ));
        assert_eq!(
            parse("x *"),
            Err(ParseError::UnexpectedEnd { expected: OPERAND })
        );
        assert!(matches!(
            parse("* x"),
            Err(ParseError::UnexpectedToken { offset: 0, .. })
        ));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let source = format!("{}x{}", "(".repeat(1000), ")".repeat(1000));
        assert!(matches!(parse(&source), Err(ParseError::TooDeep { .. })));

        let minus = format!("{}x", "-".repeat(1000));
        assert!(matches!(parse(&minus), Err(ParseError::TooDeep { .. })));

        let shallow = format!("{}x{}", "(".repeat(50), ")".repeat(50));
        assert!(parse(&shallow).is_ok());
    }

    #[test]
    fn long_operator_chains_are_rejected() {
        let sum = vec!["x"; 200_000].join(" + ");
        assert!(matches!(parse(&sum), Err(ParseError::TooDeep { .. })));

        let product = vec!["x"; 200_000].join(" * ");
        assert!(matches!(parse(&product), Err(ParseError::TooDeep { .. })));

        let power = vec!["x"; 200_000].join(" ** ");
        assert!(matches!(parse(&power), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn chains_within_the_limit_parse_and_evaluate() {
        let sum = vec!["x"; 100].join(" + ");
        let expr = parse(&sum).unwrap();
        assert_eq!(expr.eval(1.0), Ok(100.0));
    }

    #[test]
    fn nesting_and_chains_share_the_limit() {
        // Each level adds a call node and a sum node on top of its argument.
        let mut source = String::from("x");
        for _ in 0..100 {
            source = format!("abs({source} + 1)");
        }
        assert!(matches!(parse(&source), Err(ParseError::TooDeep { .. })));
    }
}
