use std::fmt;

use super::super::language::LocalName;
use super::core::Type;

#[derive(Clone, Debug, PartialEq)]
pub enum TypeError {
    NonBooleanCondition(Type),
    BranchTypeMismatch(Type, Type),
    NonNumberOperand(Type, Type),
    UndefinedVariable(LocalName),
    NotAFunction(Type),
    ArityMismatch(usize, usize),
    ArgumentTypeMismatch(LocalName, Type, Type),
    NotAnObject(Type),
    UnknownProperty(LocalName, Type),
    ReturnTypeMismatch(LocalName, Type, Type),
    UnboundTypeVariable(LocalName),
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonBooleanCondition(_) => write!(f, "Condition of if must be a Boolean"),
            Self::BranchTypeMismatch(_, _) => {
                write!(f, "Then and else branches must have the same type")
            }
            Self::NonNumberOperand(_, _) => write!(f, "Both operands of add must be Numbers"),
            Self::UndefinedVariable(name) => write!(f, "Undefined variable: {}", name),
            Self::NotAFunction(_) => write!(f, "Can only call functions"),
            Self::ArityMismatch(_, _) => write!(f, "Argument count mismatch"),
            Self::ArgumentTypeMismatch(param, _, _) => {
                write!(f, "Argument type mismatch for parameter {}", param)
            }
            Self::NotAnObject(_) => write!(f, "Can only get properties from objects"),
            Self::UnknownProperty(prop, _) => {
                write!(f, "Property {} does not exist on object", prop)
            }
            Self::ReturnTypeMismatch(_, _, _) => {
                write!(f, "Return type does not match declared return type")
            }
            Self::UnboundTypeVariable(name) => {
                write!(f, "Type variable {} is not bound by any rec", name)
            }
        }
    }
}

impl std::error::Error for TypeError {}

impl TypeError {
    /// Extra detail about the types involved, shown under the message in reports.
    pub fn help(&self) -> Option<String> {
        Some(match self {
            Self::NonBooleanCondition(found) => format!("found `{}`", found),
            Self::BranchTypeMismatch(thn, els) => {
                format!("then branch is `{}`, else branch is `{}`", thn, els)
            }
            Self::NonNumberOperand(left, right) => {
                format!("left operand is `{}`, right operand is `{}`", left, right)
            }
            Self::NotAFunction(found) => format!("found `{}`", found),
            Self::ArityMismatch(expected, provided) => format!(
                "the function takes {} arguments, but {} were provided",
                expected, provided
            ),
            Self::ArgumentTypeMismatch(_, expected, found) => {
                format!("expected `{}`, found `{}`", expected, found)
            }
            Self::NotAnObject(found) => format!("found `{}`", found),
            Self::UnknownProperty(_, object) => format!("the object type is `{}`", object),
            Self::ReturnTypeMismatch(func, declared, found) => format!(
                "`{}` declares `{}`, but its body is `{}`",
                func, declared, found
            ),
            Self::UndefinedVariable(_) | Self::UnboundTypeVariable(_) => return None,
        })
    }

    pub fn to_report(&self) -> miette::Report {
        match self.help() {
            Some(help) => miette::miette!(help = help, "{}", self),
            None => miette::miette!("{}", self),
        }
    }
}
