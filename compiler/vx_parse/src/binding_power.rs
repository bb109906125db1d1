//! Operator binding powers for the Pratt engine.
//!
//! Every operator spelling maps to an [`OpKey`], which indexes four parallel
//! tables: prefix, postfix, left-infix and right-infix power. Zero means the
//! operator cannot appear in that position.
//!
//! Associativity comes from the infix pair alone: `left < right` is
//! left-associative, `left > right` right-associative. Equal nonzero powers
//! would be ambiguous and are rejected when the tables are compiled.
//!
//! From loosest to tightest:
//!
//! | Level          | Operators            | Left | Right |
//! |----------------|----------------------|------|-------|
//! | logical or     | `\|\|`               | 1    | 2     |
//! | logical and    | `&&`                 | 3    | 4     |
//! | bitwise or     | `\|`                 | 5    | 6     |
//! | bitwise xor    | `^`                  | 7    | 8     |
//! | bitwise and    | `&`                  | 9    | 10    |
//! | equality       | `==` `!=`            | 11   | 12    |
//! | relational     | `<` `>` `<=` `>=`    | 13   | 14    |
//! | shift          | `<<` `>>`            | 15   | 16    |
//! | additive       | `+` `-`              | 17   | 18    |
//! | multiplicative | `*` `/` `%`          | 19   | 20    |
//! | unary prefix   | `-` `+` `!` `~`      | 21   |       |
//! | postfix        | `[` `(` `.`          | 23   |       |
//!
//! `++` and `--` have keys but no Pratt powers: they only appear after an
//! assignable chain in statement position.

use std::fmt;

/// Operator spelling known to the expression engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OpKey {
    OrOr,
    AndAnd,
    Or,
    Xor,
    And,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Tilde,
    LBracket,
    LParen,
    Dot,
    PlusPlus,
    MinusMinus,
}

const OP_COUNT: usize = 25;

// Columns follow the declaration order of `OpKey`:
//   ||  &&  |   ^   &   ==  !=  <   >   <=  >=  <<  >>  +   -   *   /   %   !   ~   [   (   .   ++  --
const PREFIX: [u8; OP_COUNT] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 21, 21, 0, 0, 0, 21, 21, 0, 0, 0, 0, 0,
];
const POSTFIX: [u8; OP_COUNT] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 23, 23, 23, 0, 0,
];
const LEFT: [u8; OP_COUNT] = [
    1, 3, 5, 7, 9, 11, 11, 13, 13, 13, 13, 15, 15, 17, 17, 19, 19, 19, 0, 0, 0, 0, 0, 0, 0,
];
const RIGHT: [u8; OP_COUNT] = [
    2, 4, 6, 8, 10, 12, 12, 14, 14, 14, 14, 16, 16, 18, 18, 20, 20, 20, 0, 0, 0, 0, 0, 0, 0,
];

// Infix powers come in pairs and never tie.
const _: () = {
    let mut i = 0;
    while i < OP_COUNT {
        assert!((LEFT[i] == 0) == (RIGHT[i] == 0));
        assert!(LEFT[i] == 0 || LEFT[i] != RIGHT[i]);
        i += 1;
    }
};

impl OpKey {
    pub const ALL: [OpKey; OP_COUNT] = [
        OpKey::OrOr,
        OpKey::AndAnd,
        OpKey::Or,
        OpKey::Xor,
        OpKey::And,
        OpKey::EqEq,
        OpKey::NotEq,
        OpKey::Lt,
        OpKey::Gt,
        OpKey::LtEq,
        OpKey::GtEq,
        OpKey::Shl,
        OpKey::Shr,
        OpKey::Plus,
        OpKey::Minus,
        OpKey::Star,
        OpKey::Slash,
        OpKey::Percent,
        OpKey::Bang,
        OpKey::Tilde,
        OpKey::LBracket,
        OpKey::LParen,
        OpKey::Dot,
        OpKey::PlusPlus,
        OpKey::MinusMinus,
    ];

    /// Key for a symbol token's text.
    pub fn from_symbol(text: &[u8]) -> Option<OpKey> {
        let key = match text {
            b"||" => OpKey::OrOr,
            b"&&" => OpKey::AndAnd,
            b"|" => OpKey::Or,
            b"^" => OpKey::Xor,
            b"&" => OpKey::And,
            b"==" => OpKey::EqEq,
            b"!=" => OpKey::NotEq,
            b"<" => OpKey::Lt,
            b">" => OpKey::Gt,
            b"<=" => OpKey::LtEq,
            b">=" => OpKey::GtEq,
            b"<<" => OpKey::Shl,
            b">>" => OpKey::Shr,
            b"+" => OpKey::Plus,
            b"-" => OpKey::Minus,
            b"*" => OpKey::Star,
            b"/" => OpKey::Slash,
            b"%" => OpKey::Percent,
            b"!" => OpKey::Bang,
            b"~" => OpKey::Tilde,
            b"[" => OpKey::LBracket,
            b"(" => OpKey::LParen,
            b"." => OpKey::Dot,
            b"++" => OpKey::PlusPlus,
            b"--" => OpKey::MinusMinus,
            _ => return None,
        };
        Some(key)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            OpKey::OrOr => "||",
            OpKey::AndAnd => "&&",
            OpKey::Or => "|",
            OpKey::Xor => "^",
            OpKey::And => "&",
            OpKey::EqEq => "==",
            OpKey::NotEq => "!=",
            OpKey::Lt => "<",
            OpKey::Gt => ">",
            OpKey::LtEq => "<=",
            OpKey::GtEq => ">=",
            OpKey::Shl => "<<",
            OpKey::Shr => ">>",
            OpKey::Plus => "+",
            OpKey::Minus => "-",
            OpKey::Star => "*",
            OpKey::Slash => "/",
            OpKey::Percent => "%",
            OpKey::Bang => "!",
            OpKey::Tilde => "~",
            OpKey::LBracket => "[",
            OpKey::LParen => "(",
            OpKey::Dot => ".",
            OpKey::PlusPlus => "++",
            OpKey::MinusMinus => "--",
        }
    }

    #[inline]
    pub const fn prefix_power(self) -> u8 {
        PREFIX[self as usize]
    }

    #[inline]
    pub const fn postfix_power(self) -> u8 {
        POSTFIX[self as usize]
    }

    /// `(left, right)` infix powers; `(0, 0)` if not an infix operator.
    #[inline]
    pub const fn infix_power(self) -> (u8, u8) {
        (LEFT[self as usize], RIGHT[self as usize])
    }
}

impl fmt::Display for OpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
