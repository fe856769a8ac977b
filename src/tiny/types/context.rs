use std::sync::Arc;

use indexmap::IndexMap;

use super::super::language::LocalName;
use super::core::Type;

#[derive(Debug)]
struct Scope {
    variables: IndexMap<LocalName, Type>,
    parent: Context,
}

/// The typing environment: a persistent chain of scopes.
///
/// Extending a context creates a new scope on top of a shared parent. The parent is never
/// modified, so sibling branches of a check each see the same bindings.
#[derive(Clone, Debug, Default)]
pub struct Context {
    scope: Option<Arc<Scope>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new context with `bindings` on top of this one. Later bindings of the same
    /// name replace earlier ones.
    pub fn extend(&self, bindings: impl IntoIterator<Item = (LocalName, Type)>) -> Self {
        Self {
            scope: Some(Arc::new(Scope {
                variables: bindings.into_iter().collect(),
                parent: self.clone(),
            })),
        }
    }

    pub fn bind(&self, name: LocalName, typ: Type) -> Self {
        self.extend([(name, typ)])
    }

    pub fn get(&self, name: &LocalName) -> Option<&Type> {
        let mut current = self.scope.as_deref();
        while let Some(scope) = current {
            if let Some(typ) = scope.variables.get(name) {
                return Some(typ);
            }
            current = scope.parent.scope.as_deref();
        }
        None
    }

    pub fn contains(&self, name: &LocalName) -> bool {
        self.get(name).is_some()
    }

    /// Every visible binding, innermost scope first, shadowed bindings left out.
    pub fn variables(&self) -> IndexMap<LocalName, Type> {
        let mut visible = IndexMap::new();
        let mut current = self.scope.as_deref();
        while let Some(scope) = current {
            for (name, typ) in &scope.variables {
                if !visible.contains_key(name) {
                    visible.insert(name.clone(), typ.clone());
                }
            }
            current = scope.parent.scope.as_deref();
        }
        visible
    }
}

impl FromIterator<(LocalName, Type)> for Context {
    fn from_iter<I: IntoIterator<Item = (LocalName, Type)>>(iter: I) -> Self {
        Context::new().extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_does_not_touch_parent() {
        let parent = Context::new().bind("x".into(), Type::Number);
        let child = parent.bind("x".into(), Type::Boolean);
        let sibling = parent.bind("y".into(), Type::Boolean);

        assert_eq!(parent.get(&"x".into()), Some(&Type::Number));
        assert_eq!(child.get(&"x".into()), Some(&Type::Boolean));
        assert_eq!(sibling.get(&"x".into()), Some(&Type::Number));
        assert!(!child.contains(&"y".into()));
        assert!(sibling.contains(&"y".into()));
    }

    #[test]
    fn test_later_binding_wins_within_scope() {
        let context = Context::new().extend([
            ("f".into(), Type::Number),
            ("f".into(), Type::Boolean),
        ]);
        assert_eq!(context.get(&"f".into()), Some(&Type::Boolean));
    }

    #[test]
    fn test_variables_hide_shadowed() {
        let context: Context = [
            (LocalName::from("a"), Type::Number),
            (LocalName::from("b"), Type::Number),
        ]
        .into_iter()
        .collect();
        let context = context.bind("a".into(), Type::Boolean);
        let variables = context.variables();
        assert_eq!(variables.len(), 2);
        assert_eq!(variables.get(&LocalName::from("a")), Some(&Type::Boolean));
    }
}
