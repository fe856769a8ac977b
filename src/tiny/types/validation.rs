use super::super::language::LocalName;
use super::core::Type;
use super::error::TypeError;

impl Type {
    /// Checks that every `TypeVar` is bound by an enclosing `Rec` of the same name.
    pub fn validate(&self) -> Result<(), TypeError> {
        self.validate_in(&mut Vec::new())
    }

    fn validate_in<'a>(&'a self, bound: &mut Vec<&'a LocalName>) -> Result<(), TypeError> {
        match self {
            Self::Boolean | Self::Number => Ok(()),
            Self::Func { params, ret_type } => {
                for param in params {
                    param.typ.validate_in(bound)?;
                }
                ret_type.validate_in(bound)
            }
            Self::Object { props } => {
                for prop in props {
                    prop.typ.validate_in(bound)?;
                }
                Ok(())
            }
            Self::TypeVar { name } => {
                if bound.contains(&name) {
                    Ok(())
                } else {
                    Err(TypeError::UnboundTypeVariable(name.clone()))
                }
            }
            Self::Rec { name, body } => {
                bound.push(name);
                let result = body.validate_in(bound);
                bound.pop();
                result
            }
        }
    }
}
