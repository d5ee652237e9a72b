use ctint_core::{BigInt, ByteOrder, CtIntError, CtResult};
use std::cmp::Ordering;
use std::fmt;

pub enum Answer {
    Value(BigInt),
    Truth(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Less => ordering == Ordering::Less,
            Self::LessOrEqual => ordering != Ordering::Greater,
            Self::Greater => ordering == Ordering::Greater,
            Self::GreaterOrEqual => ordering != Ordering::Less,
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Number(BigInt),
    Plus,
    Minus,
    Star,
    ShiftLeft,
    ShiftRight,
    Compare(Comparison),
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::ShiftLeft => write!(f, "<<"),
            Self::ShiftRight => write!(f, ">>"),
            Self::Compare(_) => write!(f, "comparison"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

fn engine<T>(result: CtResult<T>) -> Result<T, String> {
    result.map_err(|e: CtIntError| e.to_string())
}

fn parse_decimal(digits: &str) -> Result<BigInt, String> {
    let ten = BigInt::from(10);
    let mut value = BigInt::new();
    let mut scaled = BigInt::new();
    for ch in digits.chars().filter(|&ch| ch != '_') {
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| format!("expected a digit, found '{ch}'"))?;
        engine(scaled.mul(&value, &ten))?;
        engine(value.add(&scaled, &BigInt::from(i64::from(digit))))?;
    }
    Ok(value)
}

fn parse_hex(digits: &str) -> Result<BigInt, String> {
    let mut nibbles = vec![];
    for ch in digits.chars().filter(|&ch| ch != '_') {
        let nibble = ch
            .to_digit(16)
            .ok_or_else(|| format!("expected a hex digit, found '{ch}'"))?;
        nibbles.push(nibble);
    }
    if nibbles.is_empty() {
        return Err("expected hex digits after 0x".to_string());
    }
    if nibbles.len() % 2 == 1 {
        nibbles.insert(0, 0);
    }
    let bytes = nibbles
        .chunks(2)
        .map(|pair| u8::try_from((pair[0] << 4) | pair[1]).map_err(|e| e.to_string()))
        .collect::<Result<Vec<u8>, String>>()?;
    engine(BigInt::from_bytes(&bytes, ByteOrder::BigEndian))
}

fn lex(input: &str) -> Result<Vec<Token>, String> {
    let mut tokens = vec![];
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();
        let (token, width) = match (ch, next) {
            (c, _) if c.is_whitespace() => {
                i += 1;
                continue;
            }
            ('0', Some('x' | 'X')) => {
                let end = scan_word(&chars, i + 2);
                let digits: String = chars[i + 2..end].iter().collect();
                (Token::Number(parse_hex(&digits)?), end - i)
            }
            (c, _) if c.is_ascii_digit() => {
                let end = scan_word(&chars, i);
                let digits: String = chars[i..end].iter().collect();
                (Token::Number(parse_decimal(&digits)?), end - i)
            }
            ('<', Some('<')) => (Token::ShiftLeft, 2),
            ('>', Some('>')) => (Token::ShiftRight, 2),
            ('<', Some('=')) => (Token::Compare(Comparison::LessOrEqual), 2),
            ('>', Some('=')) => (Token::Compare(Comparison::GreaterOrEqual), 2),
            ('=', Some('=')) => (Token::Compare(Comparison::Equal), 2),
            ('!', Some('=')) => (Token::Compare(Comparison::NotEqual), 2),
            ('<', _) => (Token::Compare(Comparison::Less), 1),
            ('>', _) => (Token::Compare(Comparison::Greater), 1),
            ('+', _) => (Token::Plus, 1),
            ('-', _) => (Token::Minus, 1),
            ('*', _) => (Token::Star, 1),
            ('(', _) => (Token::LParen, 1),
            (')', _) => (Token::RParen, 1),
            (c, _) => return Err(format!("unexpected character '{c}'")),
        };
        tokens.push(token);
        i += width;
    }
    Ok(tokens)
}

fn scan_word(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_') {
        end += 1;
    }
    end
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn answer(&mut self) -> Result<Answer, String> {
        let lhs = self.shift()?;
        let answer = if let Some(&Token::Compare(op)) = self.peek() {
            self.pos += 1;
            let rhs = self.shift()?;
            Answer::Truth(op.holds(lhs.compare_signed(&rhs)))
        } else {
            Answer::Value(lhs)
        };
        match self.peek() {
            None => Ok(answer),
            Some(token) => Err(format!("unexpected '{token}'")),
        }
    }

    fn shift(&mut self) -> Result<BigInt, String> {
        let mut value = self.sum()?;
        loop {
            let left = match self.peek() {
                Some(Token::ShiftLeft) => true,
                Some(Token::ShiftRight) => false,
                _ => return Ok(value),
            };
            self.pos += 1;
            let amount = shift_amount(&self.sum()?)?;
            if left {
                engine(value.shift_left(amount))?;
            } else {
                value.shift_right(amount);
            }
        }
    }

    fn sum(&mut self) -> Result<BigInt, String> {
        let mut value = self.product()?;
        loop {
            let plus = match self.peek() {
                Some(Token::Plus) => true,
                Some(Token::Minus) => false,
                _ => return Ok(value),
            };
            self.pos += 1;
            let rhs = self.product()?;
            let mut result = BigInt::new();
            if plus {
                engine(result.add(&value, &rhs))?;
            } else {
                engine(result.sub(&value, &rhs))?;
            }
            value = result;
        }
    }

    fn product(&mut self) -> Result<BigInt, String> {
        let mut value = self.unary()?;
        while let Some(Token::Star) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            let mut result = BigInt::new();
            engine(result.mul(&value, &rhs))?;
            value = result;
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<BigInt, String> {
        if let Some(Token::Minus) = self.peek() {
            self.pos += 1;
            let mut value = self.unary()?;
            value.negate();
            return Ok(value);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<BigInt, String> {
        match self.bump() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.shift()?;
                match self.bump() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err("expected ')'".to_string()),
                }
            }
            Some(token) => Err(format!("unexpected '{token}'")),
            None => Err("unexpected end of input".to_string()),
        }
    }
}

fn shift_amount(n: &BigInt) -> Result<usize, String> {
    if n.is_negative() {
        return Err("shift amount must not be negative".to_string());
    }
    let mut buf = [0; 8];
    if n.export_bytes(&mut buf, ByteOrder::LittleEndian).is_err() {
        return Err("shift amount is too large".to_string());
    }
    usize::try_from(u64::from_le_bytes(buf)).map_err(|_| "shift amount is too large".to_string())
}

/// Evaluates one line. Blank input yields `None`.
pub fn evaluate(input: &str) -> Result<Option<Answer>, String> {
    let tokens = lex(input)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    let mut parser = Parser { tokens, pos: 0 };
    parser.answer().map(Some)
}
