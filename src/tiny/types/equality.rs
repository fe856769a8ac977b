use super::super::language::LocalName;
use super::core::{Param, PropType, Type};
use super::error::TypeError;
use super::grow_stack;

/// A pair of types assumed related while their unfoldings are being compared.
///
/// The list lives on the call stack: every frame links to the assumptions of its caller,
/// so siblings in the comparison never see each other's assumptions.
#[derive(Clone, Copy)]
pub(super) struct Assumption<'a> {
    pair: (&'a Type, &'a Type),
    parent: Option<&'a Assumption<'a>>,
}

impl<'a> Assumption<'a> {
    pub(super) fn new(t1: &'a Type, t2: &'a Type, parent: Option<&'a Assumption<'a>>) -> Self {
        Self {
            pair: (t1, t2),
            parent,
        }
    }

    /// Whether `(t1, t2)` matches, up to renaming of `Rec` binders, a pair already assumed.
    pub(super) fn holds(seen: Option<&Assumption<'_>>, t1: &Type, t2: &Type) -> bool {
        let mut current = seen;
        while let Some(assumption) = current {
            let (s1, s2) = assumption.pair;
            if s1.alpha_equivalent(t1) && s2.alpha_equivalent(t2) {
                return true;
            }
            current = assumption.parent;
        }
        false
    }
}

impl Type {
    /// Exact equality of possibly recursive types, comparing their infinite unfoldings.
    pub fn is_equal_to(&self, other: &Self) -> Result<bool, TypeError> {
        equal_under(self, other, None)
    }

    /// Structural comparison without unfolding. `Rec` binders match when their bodies
    /// match under a consistent renaming of the two bound names.
    pub fn alpha_equivalent(&self, other: &Self) -> bool {
        alpha_under(self, other, &mut Vec::new())
    }
}

fn equal_under(t1: &Type, t2: &Type, seen: Option<&Assumption<'_>>) -> Result<bool, TypeError> {
    if Assumption::holds(seen, t1, t2) {
        tracing::trace!("assumed equal: {} = {}", t1, t2);
        return Ok(true);
    }

    grow_stack(|| match (t1, t2) {
        (Type::Rec { .. }, _) => {
            let unfolded = t1.simplify();
            if unfolded.is_rec() {
                // Unguarded types have no shape, they only relate to each other.
                return Ok(t2.is_unguarded());
            }
            tracing::trace!("unfolded {} to {}", t1, unfolded);
            let frame = Assumption::new(t1, t2, seen);
            equal_under(&unfolded, t2, Some(&frame))
        }
        (_, Type::Rec { .. }) => {
            let unfolded = t2.simplify();
            // `t1` is not a `Rec` here, so it has a shape an unguarded `t2` lacks.
            if unfolded.is_rec() {
                return Ok(false);
            }
            tracing::trace!("unfolded {} to {}", t2, unfolded);
            let frame = Assumption::new(t1, t2, seen);
            equal_under(t1, &unfolded, Some(&frame))
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
                if !equal_under(&p1.typ, &p2.typ, seen)? {
                    return Ok(false);
                }
            }
            equal_under(ret1, ret2, seen)
        }

        (Type::Object { props: props1 }, Type::Object { props: props2 }) => {
            if props1.len() != props2.len() {
                return Ok(false);
            }
            for prop1 in props1 {
                let Some(typ2) = t2.prop(&prop1.name) else {
                    return Ok(false);
                };
                if !equal_under(&prop1.typ, typ2, seen)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        _ => Ok(false),
    })
}

fn alpha_under<'a>(
    t1: &'a Type,
    t2: &'a Type,
    bound: &mut Vec<(&'a LocalName, &'a LocalName)>,
) -> bool {
    match (t1, t2) {
        (Type::Boolean, Type::Boolean) | (Type::Number, Type::Number) => true,

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
            params1.len() == params2.len()
                && params1
                    .iter()
                    .zip(params2)
                    .all(|(Param { typ: p1, .. }, Param { typ: p2, .. })| {
                        alpha_under(p1, p2, bound)
                    })
                && alpha_under(ret1, ret2, bound)
        }

        (Type::Object { props: props1 }, Type::Object { props: props2 }) => {
            props1.len() == props2.len()
                && props1.iter().all(|PropType { name, typ: typ1 }| {
                    t2.prop(name)
                        .is_some_and(|typ2| alpha_under(typ1, typ2, bound))
                })
        }

        (Type::TypeVar { name: name1 }, Type::TypeVar { name: name2 }) => {
            // The innermost binder of either name decides; both must come from the same pair.
            match bound
                .iter()
                .rev()
                .find(|(b1, b2)| *b1 == name1 || *b2 == name2)
            {
                Some((b1, b2)) => *b1 == name1 && *b2 == name2,
                None => name1 == name2,
            }
        }

        (
            Type::Rec {
                name: name1,
                body: body1,
            },
            Type::Rec {
                name: name2,
                body: body2,
            },
        ) => {
            bound.push((name1, name2));
            let result = alpha_under(body1, body2, bound);
            bound.pop();
            result
        }

        _ => false,
    }
}
