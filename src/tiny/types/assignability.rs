use super::core::Type;
use super::equality::Assumption;
use super::error::TypeError;
use super::grow_stack;

impl Type {
    /// Checks if `self` <: `other`: a value of `self` may be used where `other` is expected.
    ///
    /// Functions are contravariant in their parameters and covariant in their return type,
    /// objects have width subtyping. `Rec` on either side is compared through its unfolding,
    /// assuming the pair being unfolded already holds, as in `Subtyping recursive types (1993)`.
    pub fn is_subtype_of(&self, other: &Self) -> Result<bool, TypeError> {
        subtype_under(self, other, None)
    }
}

fn subtype_under(t1: &Type, t2: &Type, seen: Option<&Assumption<'_>>) -> Result<bool, TypeError> {
    if Assumption::holds(seen, t1, t2) {
        tracing::trace!("assumed subtype: {} <: {}", t1, t2);
        return Ok(true);
    }

    grow_stack(|| match (t1, t2) {
        (Type::Rec { .. }, _) => {
            let unfolded = t1.simplify();
            if unfolded.is_rec() {
                // Unguarded types have no shape, they only relate to each other.
                return Ok(t2.is_unguarded());
            }
            let frame = Assumption::new(t1, t2, seen);
            subtype_under(&unfolded, t2, Some(&frame))
        }
        (_, Type::Rec { .. }) => {
            let unfolded = t2.simplify();
            // `t1` is not a `Rec` here, so it has a shape an unguarded `t2` lacks.
            if unfolded.is_rec() {
                return Ok(false);
            }
            let frame = Assumption::new(t1, t2, seen);
            subtype_under(t1, &unfolded, Some(&frame))
        }

        (Type::TypeVar { name }, _) | (_, Type::TypeVar { name }) => {
            Err(TypeError::UnboundTypeVariable(name.clone()))
        }

        (Type::Boolean, Type::Boolean) | (Type::Number, Type::Number) => Ok(true),

        (
            Type::Func {
                params: params1,
                ret_type: ret1,
            },
            Type::Func {
                params: params2,
                ret_type: ret2,
            },
        ) => {
            if params1.len() != params2.len() {
                return Ok(false);
            }
            for (p1, p2) in params1.iter().zip(params2) {
                if !subtype_under(&p2.typ, &p1.typ, seen)? {
                    return Ok(false);
                }
            }
            subtype_under(ret1, ret2, seen)
        }

        (Type::Object { .. }, Type::Object { props: props2 }) => {
            for prop2 in props2 {
                let Some(typ1) = t1.prop(&prop2.name) else {
                    return Ok(false);
                };
                if !subtype_under(typ1, &prop2.typ, seen)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        _ => Ok(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Type {
        Type::object(vec![("x", Type::number())])
    }

    fn point_with_flag() -> Type {
        Type::object(vec![("x", Type::number()), ("y", Type::boolean())])
    }

    fn sub(t1: &Type, t2: &Type) -> bool {
        t1.is_subtype_of(t2).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert!(sub(&Type::Number, &Type::Number));
        assert!(sub(&Type::Boolean, &Type::Boolean));
        assert!(!sub(&Type::Number, &Type::Boolean));
        assert!(!sub(&Type::Number, &point()));
    }

    #[test]
    fn test_width_subtyping() {
        assert!(sub(&point_with_flag(), &point()));
        assert!(!sub(&point(), &point_with_flag()));
        assert!(sub(&point(), &Type::object(vec![])));
        assert!(!sub(
            &Type::object(vec![("x", Type::boolean())]),
            &point()
        ));
    }

    #[test]
    fn test_function_contravariance() {
        let wide = Type::func(vec![("p", point())], Type::number());
        let narrow = Type::func(vec![("p", point_with_flag())], Type::number());
        assert!(sub(&wide, &narrow));
        assert!(!sub(&narrow, &wide));
    }

    #[test]
    fn test_function_covariant_return_and_arity() {
        let f = Type::func(vec![], point_with_flag());
        let g = Type::func(vec![], point());
        assert!(sub(&f, &g));
        assert!(!sub(&g, &f));

        let unary = Type::func(vec![("x", Type::number())], Type::number());
        let binary = Type::func(
            vec![("x", Type::number()), ("y", Type::number())],
            Type::number(),
        );
        assert!(!sub(&unary, &binary));
        assert!(!sub(&binary, &unary));
    }

    #[test]
    fn test_reflexive_and_transitive() {
        let a = Type::object(vec![
            ("x", Type::number()),
            ("y", Type::boolean()),
            ("z", Type::number()),
        ]);
        let b = point_with_flag();
        let c = point();
        for t in [&a, &b, &c] {
            assert!(sub(t, t));
        }
        assert!(sub(&a, &b) && sub(&b, &c) && sub(&a, &c));

        let fc = Type::func(vec![("p", c.clone())], a.clone());
        let fb = Type::func(vec![("p", b.clone())], b.clone());
        let fa = Type::func(vec![("p", a.clone())], c.clone());
        assert!(sub(&fc, &fb) && sub(&fb, &fa) && sub(&fc, &fa));
    }

    #[test]
    fn test_recursive_width_subtyping() {
        // rec n. { value: number; flag: boolean; next: n }  <:  rec m. { value: number; next: m }
        let rich = Type::rec(
            "n",
            Type::object(vec![
                ("value", Type::number()),
                ("flag", Type::boolean()),
                ("next", Type::var("n")),
            ]),
        );
        let plain = Type::rec(
            "m",
            Type::object(vec![("value", Type::number()), ("next", Type::var("m"))]),
        );
        assert!(sub(&rich, &plain));
        assert!(!sub(&plain, &rich));
        assert!(sub(&rich.unfold(), &plain));
        assert!(sub(&rich, &rich));
    }

    #[test]
    fn test_unguarded_is_subtype_of_itself() {
        let direct = Type::rec("a", Type::var("a"));
        let nested = Type::rec("a", Type::rec("b", Type::var("a")));
        assert!(sub(&direct, &direct));
        assert!(sub(&nested, &nested));
        assert!(!sub(&direct, &Type::Number));
        assert!(!sub(&Type::Number, &direct));

        let f = Type::func(vec![("x", nested.clone())], nested);
        assert!(sub(&f, &f));
    }

    #[test]
    fn test_free_type_var_is_an_error() {
        assert_eq!(
            Type::var("a").is_subtype_of(&Type::Number),
            Err(TypeError::UnboundTypeVariable("a".into()))
        );
    }
}
