use super::super::language::LocalName;
use super::core::{Param, PropType, Type};

impl Type {
    /// Replaces every free `TypeVar` called `name` with `replacement`.
    ///
    /// A nested `Rec` binding the same name shadows the outer one, so its body is left alone.
    pub fn substitute(self, name: &LocalName, replacement: &Type) -> Self {
        match self {
            Self::Boolean => Self::Boolean,
            Self::Number => Self::Number,
            Self::Func { params, ret_type } => Self::Func {
                params: params
                    .into_iter()
                    .map(|Param { name: param, typ }| Param {
                        name: param,
                        typ: typ.substitute(name, replacement),
                    })
                    .collect(),
                ret_type: Box::new(ret_type.substitute(name, replacement)),
            },
            Self::Object { props } => Self::Object {
                props: props
                    .into_iter()
                    .map(|PropType { name: prop, typ }| PropType {
                        name: prop,
                        typ: typ.substitute(name, replacement),
                    })
                    .collect(),
            },
            Self::TypeVar { name: var } => {
                if &var == name {
                    replacement.clone()
                } else {
                    Self::TypeVar { name: var }
                }
            }
            Self::Rec { name: label, body } => {
                if &label == name {
                    Self::Rec { name: label, body }
                } else {
                    Self::Rec {
                        name: label,
                        body: Box::new(body.substitute(name, replacement)),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_through_structure() {
        let typ = Type::func(
            vec![("x", Type::var("a"))],
            Type::object(vec![("next", Type::var("a")), ("other", Type::var("b"))]),
        );
        let expanded = typ.substitute(&"a".into(), &Type::Number);
        assert_eq!(
            expanded,
            Type::func(
                vec![("x", Type::number())],
                Type::object(vec![("next", Type::number()), ("other", Type::var("b"))]),
            )
        );
    }

    #[test]
    fn test_inner_rec_shadows() {
        let inner = Type::rec("a", Type::object(vec![("next", Type::var("a"))]));
        let typ = Type::object(vec![("x", Type::var("a")), ("y", inner.clone())]);
        let expanded = typ.substitute(&"a".into(), &Type::Boolean);
        assert_eq!(
            expanded,
            Type::object(vec![("x", Type::boolean()), ("y", inner)])
        );
    }

    #[test]
    fn test_inner_rec_with_other_name_is_entered() {
        let typ = Type::rec("b", Type::func(vec![("p", Type::var("a"))], Type::var("b")));
        let expanded = typ.substitute(&"a".into(), &Type::Number);
        assert_eq!(
            expanded,
            Type::rec("b", Type::func(vec![("p", Type::number())], Type::var("b")))
        );
    }
}
