//! Reserved words.
//!
//! The scanner produces keywords as plain identifiers; the parser compares
//! the text exactly.

use std::fmt;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Keyword spelled exactly by `text`.
            pub fn from_text(text: &[u8]) -> Option<Keyword> {
                // Identifier tokens are ASCII, so anything else is no keyword.
                match std::str::from_utf8(text).ok()? {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    If => "if",
    Else => "else",
    Match => "match",
    Def => "def",
    Var => "var",
    Val => "val",
    Public => "public",
    Private => "private",
    Loop => "loop",
    While => "while",
    Break => "break",
    Continue => "continue",
    Return => "return",
    Yield => "yield",
    Import => "import",
}

impl Keyword {
    /// Keywords that start a declaration.
    pub fn starts_declaration(self) -> bool {
        matches!(
            self,
            Keyword::Def | Keyword::Var | Keyword::Val | Keyword::Public | Keyword::Private
        )
    }

    /// `break`, `continue`, `return` or `yield`.
    pub fn is_jump(self) -> bool {
        matches!(
            self,
            Keyword::Break | Keyword::Continue | Keyword::Return | Keyword::Yield
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
