//! Closed sets of tokens: operators and the kinds of properties and declarations.

use crate::error::FromJSONError;
use crate::json::{FromJSON, ToJSON};

use serde_json::Value as JSON;

use std::fmt;

/// Declare an enum of source tokens.
///
/// The first variant is the default.
macro_rules! token_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),* $(,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }
        impl $name {
            /// Every token, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)*
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($name::$variant),)*
                    _ => None,
                }
            }

            pub fn is_valid(token: &str) -> bool {
                Self::from_token(token).is_some()
            }
        }
        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
        impl FromJSON for $name {
            fn import(value: &JSON) -> Result<Self, FromJSONError> {
                match value.as_str() {
                    None => Err(FromJSONError::wrong_type(stringify!($name), value)),
                    Some(token) => Self::from_token(token).ok_or_else(|| {
                        error!(target: "estree_decode", "Unknown {} {:?}", stringify!($name), token);
                        FromJSONError::wrong_value(stringify!($name), token)
                    }),
                }
            }
        }
        impl ToJSON for $name {
            fn export(&self) -> JSON {
                JSON::from(self.as_str())
            }
        }
    }
}

token_enum! {
    /// The operator of a `UnaryExpression`.
    UnaryOperator {
        Minus => "-",
        Plus => "+",
        Not => "!",
        BitwiseNot => "~",
        Typeof => "typeof",
        Void => "void",
        Delete => "delete",
    }
}

token_enum! {
    /// The operator of an `UpdateExpression`.
    UpdateOperator {
        Increment => "++",
        Decrement => "--",
    }
}

token_enum! {
    /// The operator of a `BinaryExpression`.
    BinaryOperator {
        Eq => "==",
        Neq => "!=",
        StrictEq => "===",
        StrictNeq => "!==",
        LessThan => "<",
        LessThanOrEqual => "<=",
        GreaterThan => ">",
        GreaterThanOrEqual => ">=",
        Lsh => "<<",
        Rsh => ">>",
        Ursh => ">>>",
        Plus => "+",
        Minus => "-",
        Mul => "*",
        Div => "/",
        Mod => "%",
        BitOr => "|",
        BitXor => "^",
        BitAnd => "&",
        In => "in",
        Instanceof => "instanceof",
    }
}

token_enum! {
    /// The operator of an `AssignmentExpression`.
    AssignmentOperator {
        Assign => "=",
        PlusAssign => "+=",
        MinusAssign => "-=",
        MulAssign => "*=",
        DivAssign => "/=",
        ModAssign => "%=",
        LshAssign => "<<=",
        RshAssign => ">>=",
        UrshAssign => ">>>=",
        BitOrAssign => "|=",
        BitXorAssign => "^=",
        BitAndAssign => "&=",
    }
}

token_enum! {
    /// The operator of a `LogicalExpression`.
    LogicalOperator {
        Or => "||",
        And => "&&",
    }
}

token_enum! {
    /// Whether a `Property` is a plain value or an accessor.
    PropertyKind {
        Init => "init",
        Get => "get",
        Set => "set",
    }
}

token_enum! {
    /// The keyword of a `VariableDeclaration`.
    ///
    /// `let` and `const` came with ES2015 and are rejected.
    VariableDeclarationKind {
        Var => "var",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        assert_eq!(BinaryOperator::ALL.len(), 21);
        assert_eq!(AssignmentOperator::ALL.len(), 12);
        assert_eq!(UnaryOperator::ALL.len(), 7);
        for op in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_token(op.as_str()), Some(*op));
        }
        assert!(BinaryOperator::is_valid("instanceof"));
        assert!(!BinaryOperator::is_valid("??"));
        assert!(!BinaryOperator::is_valid("**"));
        assert!(!LogicalOperator::is_valid("??"));
        assert!(!VariableDeclarationKind::is_valid("let"));
        assert_eq!(PropertyKind::default(), PropertyKind::Init);
        assert_eq!(UpdateOperator::Decrement.to_string(), "--");
    }

    #[test]
    fn import() {
        assert_eq!(
            AssignmentOperator::import(&json!(">>>=")).unwrap(),
            AssignmentOperator::UrshAssign
        );
        let err = BinaryOperator::import(&json!("??")).unwrap_err();
        assert_eq!(err.to_string(), "unrecognized BinaryOperator \"??\"");
        assert!(BinaryOperator::import(&json!(3)).is_err());
    }
}
