//! Reserved words and multi-character operators
//!
//! Reserved words match case-insensitively. Operators are matched longest
//! first by the lexer; single-character punctuation never appears here.
use serde::{Deserialize, Serialize};

/// PHP reserved words that the lexer emits as keyword tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Abstract,
    And,
    Array,
    As,
    Break,
    Callable,
    Case,
    Catch,
    Class,
    Clone,
    Const,
    Continue,
    Declare,
    Default,
    Do,
    Echo,
    Else,
    ElseIf,
    Empty,
    EndDeclare,
    EndFor,
    EndForeach,
    EndIf,
    EndSwitch,
    EndWhile,
    Eval,
    Exit,
    Extends,
    Final,
    Finally,
    Fn,
    For,
    Foreach,
    Function,
    Global,
    Goto,
    If,
    Implements,
    Include,
    IncludeOnce,
    InstanceOf,
    InsteadOf,
    Interface,
    Isset,
    List,
    Match,
    Namespace,
    New,
    Or,
    Print,
    Private,
    Protected,
    Public,
    Readonly,
    Require,
    RequireOnce,
    Return,
    Static,
    Switch,
    Throw,
    Trait,
    Try,
    Unset,
    Use,
    Var,
    While,
    Xor,
    Yield,
}

impl Keyword {
    /// Lowercase source spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::And => "and",
            Self::Array => "array",
            Self::As => "as",
            Self::Break => "break",
            Self::Callable => "callable",
            Self::Case => "case",
            Self::Catch => "catch",
            Self::Class => "class",
            Self::Clone => "clone",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Declare => "declare",
            Self::Default => "default",
            Self::Do => "do",
            Self::Echo => "echo",
            Self::Else => "else",
            Self::ElseIf => "elseif",
            Self::Empty => "empty",
            Self::EndDeclare => "enddeclare",
            Self::EndFor => "endfor",
            Self::EndForeach => "endforeach",
            Self::EndIf => "endif",
            Self::EndSwitch => "endswitch",
            Self::EndWhile => "endwhile",
            Self::Eval => "eval",
            Self::Exit => "exit",
            Self::Extends => "extends",
            Self::Final => "final",
            Self::Finally => "finally",
            Self::Fn => "fn",
            Self::For => "for",
            Self::Foreach => "foreach",
            Self::Function => "function",
            Self::Global => "global",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Implements => "implements",
            Self::Include => "include",
            Self::IncludeOnce => "include_once",
            Self::InstanceOf => "instanceof",
            Self::InsteadOf => "insteadof",
            Self::Interface => "interface",
            Self::Isset => "isset",
            Self::List => "list",
            Self::Match => "match",
            Self::Namespace => "namespace",
            Self::New => "new",
            Self::Or => "or",
            Self::Print => "print",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Public => "public",
            Self::Readonly => "readonly",
            Self::Require => "require",
            Self::RequireOnce => "require_once",
            Self::Return => "return",
            Self::Static => "static",
            Self::Switch => "switch",
            Self::Throw => "throw",
            Self::Trait => "trait",
            Self::Try => "try",
            Self::Unset => "unset",
            Self::Use => "use",
            Self::Var => "var",
            Self::While => "while",
            Self::Xor => "xor",
            Self::Yield => "yield",
        }
    }

    /// Tokenizer-style type name, e.g. `T_CLASS`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abstract => "T_ABSTRACT",
            Self::And => "T_LOGICAL_AND",
            Self::Array => "T_ARRAY",
            Self::As => "T_AS",
            Self::Break => "T_BREAK",
            Self::Callable => "T_CALLABLE",
            Self::Case => "T_CASE",
            Self::Catch => "T_CATCH",
            Self::Class => "T_CLASS",
            Self::Clone => "T_CLONE",
            Self::Const => "T_CONST",
            Self::Continue => "T_CONTINUE",
            Self::Declare => "T_DECLARE",
            Self::Default => "T_DEFAULT",
            Self::Do => "T_DO",
            Self::Echo => "T_ECHO",
            Self::Else => "T_ELSE",
            Self::ElseIf => "T_ELSEIF",
            Self::Empty => "T_EMPTY",
            Self::EndDeclare => "T_ENDDECLARE",
            Self::EndFor => "T_ENDFOR",
            Self::EndForeach => "T_ENDFOREACH",
            Self::EndIf => "T_ENDIF",
            Self::EndSwitch => "T_ENDSWITCH",
            Self::EndWhile => "T_ENDWHILE",
            Self::Eval => "T_EVAL",
            Self::Exit => "T_EXIT",
            Self::Extends => "T_EXTENDS",
            Self::Final => "T_FINAL",
            Self::Finally => "T_FINALLY",
            Self::Fn => "T_FN",
            Self::For => "T_FOR",
            Self::Foreach => "T_FOREACH",
            Self::Function => "T_FUNCTION",
            Self::Global => "T_GLOBAL",
            Self::Goto => "T_GOTO",
            Self::If => "T_IF",
            Self::Implements => "T_IMPLEMENTS",
            Self::Include => "T_INCLUDE",
            Self::IncludeOnce => "T_INCLUDE_ONCE",
            Self::InstanceOf => "T_INSTANCEOF",
            Self::InsteadOf => "T_INSTEADOF",
            Self::Interface => "T_INTERFACE",
            Self::Isset => "T_ISSET",
            Self::List => "T_LIST",
            Self::Match => "T_MATCH",
            Self::Namespace => "T_NAMESPACE",
            Self::New => "T_NEW",
            Self::Or => "T_LOGICAL_OR",
            Self::Print => "T_PRINT",
            Self::Private => "T_PRIVATE",
            Self::Protected => "T_PROTECTED",
            Self::Public => "T_PUBLIC",
            Self::Readonly => "T_READONLY",
            Self::Require => "T_REQUIRE",
            Self::RequireOnce => "T_REQUIRE_ONCE",
            Self::Return => "T_RETURN",
            Self::Static => "T_STATIC",
            Self::Switch => "T_SWITCH",
            Self::Throw => "T_THROW",
            Self::Trait => "T_TRAIT",
            Self::Try => "T_TRY",
            Self::Unset => "T_UNSET",
            Self::Use => "T_USE",
            Self::Var => "T_VAR",
            Self::While => "T_WHILE",
            Self::Xor => "T_LOGICAL_XOR",
            Self::Yield => "T_YIELD",
        }
    }

    /// Look up a reserved word, ignoring ASCII case
    pub fn from_word(word: &str) -> Option<Self> {
        let keyword = match word.to_ascii_lowercase().as_str() {
            "abstract" => Self::Abstract,
            "and" => Self::And,
            "array" => Self::Array,
            "as" => Self::As,
            "break" => Self::Break,
            "callable" => Self::Callable,
            "case" => Self::Case,
            "catch" => Self::Catch,
            "class" => Self::Class,
            "clone" => Self::Clone,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "declare" => Self::Declare,
            "default" => Self::Default,
            "do" => Self::Do,
            "echo" => Self::Echo,
            "else" => Self::Else,
            "elseif" => Self::ElseIf,
            "empty" => Self::Empty,
            "enddeclare" => Self::EndDeclare,
            "endfor" => Self::EndFor,
            "endforeach" => Self::EndForeach,
            "endif" => Self::EndIf,
            "endswitch" => Self::EndSwitch,
            "endwhile" => Self::EndWhile,
            "eval" => Self::Eval,
            "exit" | "die" => Self::Exit,
            "extends" => Self::Extends,
            "final" => Self::Final,
            "finally" => Self::Finally,
            "fn" => Self::Fn,
            "for" => Self::For,
            "foreach" => Self::Foreach,
            "function" => Self::Function,
            "global" => Self::Global,
            "goto" => Self::Goto,
            "if" => Self::If,
            "implements" => Self::Implements,
            "include" => Self::Include,
            "include_once" => Self::IncludeOnce,
            "instanceof" => Self::InstanceOf,
            "insteadof" => Self::InsteadOf,
            "interface" => Self::Interface,
            "isset" => Self::Isset,
            "list" => Self::List,
            "match" => Self::Match,
            "namespace" => Self::Namespace,
            "new" => Self::New,
            "or" => Self::Or,
            "print" => Self::Print,
            "private" => Self::Private,
            "protected" => Self::Protected,
            "public" => Self::Public,
            "readonly" => Self::Readonly,
            "require" => Self::Require,
            "require_once" => Self::RequireOnce,
            "return" => Self::Return,
            "static" => Self::Static,
            "switch" => Self::Switch,
            "throw" => Self::Throw,
            "trait" => Self::Trait,
            "try" => Self::Try,
            "unset" => Self::Unset,
            "use" => Self::Use,
            "var" => Self::Var,
            "while" => Self::While,
            "xor" => Self::Xor,
            "yield" => Self::Yield,
            _ => return None,
        };
        Some(keyword)
    }

    /// Keywords after which a reserved word is read as a plain name
    pub fn introduces_name(self) -> bool {
        matches!(self, Self::Function | Self::Const)
    }
}

/// Multi-character operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    ObjectOperator,         // ->
    NullsafeObjectOperator, // ?->
    DoubleColon,            // ::
    DoubleArrow,            // =>
    Increment,              // ++
    Decrement,              // --
    IsEqual,                // ==
    IsNotEqual,             // != or <>
    IsIdentical,            // ===
    IsNotIdentical,         // !==
    IsSmallerOrEqual,       // <=
    IsGreaterOrEqual,       // >=
    Spaceship,              // <=>
    BooleanAnd,             // &&
    BooleanOr,              // ||
    Coalesce,               // ??
    CoalesceEqual,          // ??=
    PlusEqual,              // +=
    MinusEqual,             // -=
    MulEqual,               // *=
    DivEqual,               // /=
    ConcatEqual,            // .=
    ModEqual,               // %=
    Pow,                    // **
    PowEqual,               // **=
    AndEqual,               // &=
    OrEqual,                // |=
    XorEqual,               // ^=
    ShiftLeft,              // <<
    ShiftRight,             // >>
    ShiftLeftEqual,         // <<=
    ShiftRightEqual,        // >>=
    Ellipsis,               // ...
}

impl Operator {
    /// Longest operator spelling, in characters
    pub const MAX_LEN: usize = 3;

    /// Canonical source spelling
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ObjectOperator => "->",
            Self::NullsafeObjectOperator => "?->",
            Self::DoubleColon => "::",
            Self::DoubleArrow => "=>",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::IsEqual => "==",
            Self::IsNotEqual => "!=",
            Self::IsIdentical => "===",
            Self::IsNotIdentical => "!==",
            Self::IsSmallerOrEqual => "<=",
            Self::IsGreaterOrEqual => ">=",
            Self::Spaceship => "<=>",
            Self::BooleanAnd => "&&",
            Self::BooleanOr => "||",
            Self::Coalesce => "??",
            Self::CoalesceEqual => "??=",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::MulEqual => "*=",
            Self::DivEqual => "/=",
            Self::ConcatEqual => ".=",
            Self::ModEqual => "%=",
            Self::Pow => "**",
            Self::PowEqual => "**=",
            Self::AndEqual => "&=",
            Self::OrEqual => "|=",
            Self::XorEqual => "^=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::ShiftLeftEqual => "<<=",
            Self::ShiftRightEqual => ">>=",
            Self::Ellipsis => "...",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ObjectOperator => "T_OBJECT_OPERATOR",
            Self::NullsafeObjectOperator => "T_NULLSAFE_OBJECT_OPERATOR",
            Self::DoubleColon => "T_DOUBLE_COLON",
            Self::DoubleArrow => "T_DOUBLE_ARROW",
            Self::Increment => "T_INC",
            Self::Decrement => "T_DEC",
            Self::IsEqual => "T_IS_EQUAL",
            Self::IsNotEqual => "T_IS_NOT_EQUAL",
            Self::IsIdentical => "T_IS_IDENTICAL",
            Self::IsNotIdentical => "T_IS_NOT_IDENTICAL",
            Self::IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
            Self::IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
            Self::Spaceship => "T_SPACESHIP",
            Self::BooleanAnd => "T_BOOLEAN_AND",
            Self::BooleanOr => "T_BOOLEAN_OR",
            Self::Coalesce => "T_COALESCE",
            Self::CoalesceEqual => "T_COALESCE_EQUAL",
            Self::PlusEqual => "T_PLUS_EQUAL",
            Self::MinusEqual => "T_MINUS_EQUAL",
            Self::MulEqual => "T_MUL_EQUAL",
            Self::DivEqual => "T_DIV_EQUAL",
            Self::ConcatEqual => "T_CONCAT_EQUAL",
            Self::ModEqual => "T_MOD_EQUAL",
            Self::Pow => "T_POW",
            Self::PowEqual => "T_POW_EQUAL",
            Self::AndEqual => "T_AND_EQUAL",
            Self::OrEqual => "T_OR_EQUAL",
            Self::XorEqual => "T_XOR_EQUAL",
            Self::ShiftLeft => "T_SL",
            Self::ShiftRight => "T_SR",
            Self::ShiftLeftEqual => "T_SL_EQUAL",
            Self::ShiftRightEqual => "T_SR_EQUAL",
            Self::Ellipsis => "T_ELLIPSIS",
        }
    }

    /// Map an exact symbol to its operator
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let operator = match symbol {
            "->" => Self::ObjectOperator,
            "?->" => Self::NullsafeObjectOperator,
            "::" => Self::DoubleColon,
            "=>" => Self::DoubleArrow,
            "++" => Self::Increment,
            "--" => Self::Decrement,
            "==" => Self::IsEqual,
            "!=" | "<>" => Self::IsNotEqual,
            "===" => Self::IsIdentical,
            "!==" => Self::IsNotIdentical,
            "<=" => Self::IsSmallerOrEqual,
            ">=" => Self::IsGreaterOrEqual,
            "<=>" => Self::Spaceship,
            "&&" => Self::BooleanAnd,
            "||" => Self::BooleanOr,
            "??" => Self::Coalesce,
            "??=" => Self::CoalesceEqual,
            "+=" => Self::PlusEqual,
            "-=" => Self::MinusEqual,
            "*=" => Self::MulEqual,
            "/=" => Self::DivEqual,
            ".=" => Self::ConcatEqual,
            "%=" => Self::ModEqual,
            "**" => Self::Pow,
            "**=" => Self::PowEqual,
            "&=" => Self::AndEqual,
            "|=" => Self::OrEqual,
            "^=" => Self::XorEqual,
            "<<" => Self::ShiftLeft,
            ">>" => Self::ShiftRight,
            "<<=" => Self::ShiftLeftEqual,
            ">>=" => Self::ShiftRightEqual,
            "..." => Self::Ellipsis,
            _ => return None,
        };
        Some(operator)
    }

    /// Operators after which a reserved word is read as a member name
    pub fn introduces_member(self) -> bool {
        matches!(
            self,
            Self::ObjectOperator | Self::NullsafeObjectOperator | Self::DoubleColon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_match_case_insensitively() {
        assert_eq!(Keyword::from_word("CLASS"), Some(Keyword::Class));
        assert_eq!(Keyword::from_word("Namespace"), Some(Keyword::Namespace));
        assert_eq!(Keyword::from_word("die"), Some(Keyword::Exit));
        assert_eq!(Keyword::from_word("int"), None);
        assert_eq!(Keyword::from_word("self"), None);
    }

    #[test]
    fn test_keyword_spelling_round_trips() {
        for word in ["abstract", "elseif", "include_once", "readonly", "yield"] {
            let keyword = Keyword::from_word(word).unwrap();
            assert_eq!(keyword.as_str(), word);
        }
        assert_eq!(Keyword::And.name(), "T_LOGICAL_AND");
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::from_symbol("<>"), Some(Operator::IsNotEqual));
        assert_eq!(Operator::IsNotEqual.symbol(), "!=");
        assert_eq!(Operator::from_symbol("?->"), Some(Operator::NullsafeObjectOperator));
        assert_eq!(Operator::from_symbol(";"), None);
        assert!(Operator::DoubleColon.introduces_member());
        assert!(!Operator::DoubleArrow.introduces_member());
    }
}
