use std::fmt;
use std::fmt::Write;

use super::core::Type;

impl Type {
    pub fn pretty(&self, f: &mut impl Write) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),

            Self::Func { params, ret_type } => {
                write!(f, "(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: ", param.name)?;
                    param.typ.pretty(f)?;
                }
                write!(f, ") => ")?;
                ret_type.pretty(f)
            }

            Self::Object { props } => {
                if props.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, prop) in props.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: ", prop.name)?;
                    prop.typ.pretty(f)?;
                }
                write!(f, " }}")
            }

            Self::TypeVar { name } => write!(f, "{}", name),

            Self::Rec { name, body } => {
                write!(f, "rec {}. ", name)?;
                body.pretty(f)
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty(f)
    }
}
