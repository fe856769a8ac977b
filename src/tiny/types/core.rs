use serde::{Deserialize, Serialize};

use super::super::language::LocalName;

/// A function parameter. The name is carried for error messages only, comparisons
/// of function types are positional over `typ`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: LocalName,
    #[serde(rename = "type")]
    pub typ: Type,
}

/// A property of an object type. Names are unique within one object, their order
/// is kept for display but never matters for comparisons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropType {
    pub name: LocalName,
    #[serde(rename = "type")]
    pub typ: Type,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Type {
    Boolean,
    Number,
    Func {
        params: Vec<Param>,
        #[serde(rename = "retType")]
        ret_type: Box<Self>,
    },
    Object {
        props: Vec<PropType>,
    },
    TypeVar {
        name: LocalName,
    },
    Rec {
        name: LocalName,
        #[serde(rename = "type")]
        body: Box<Self>,
    },
}

impl Param {
    pub fn new(name: impl Into<LocalName>, typ: Type) -> Self {
        Self {
            name: name.into(),
            typ,
        }
    }

    pub fn list(params: Vec<(&str, Type)>) -> Vec<Self> {
        params
            .into_iter()
            .map(|(name, typ)| Self::new(name, typ))
            .collect()
    }
}

#[allow(unused)]
impl Type {
    pub fn boolean() -> Self {
        Self::Boolean
    }

    pub fn number() -> Self {
        Self::Number
    }

    pub fn func(params: Vec<(&str, Self)>, ret_type: Self) -> Self {
        Self::Func {
            params: Param::list(params),
            ret_type: Box::new(ret_type),
        }
    }

    pub fn object(props: Vec<(&str, Self)>) -> Self {
        Self::Object {
            props: props
                .into_iter()
                .map(|(name, typ)| PropType {
                    name: name.into(),
                    typ,
                })
                .collect(),
        }
    }

    pub fn var(name: &str) -> Self {
        Self::TypeVar { name: name.into() }
    }

    pub fn rec(name: &str, body: Self) -> Self {
        Self::Rec {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn is_rec(&self) -> bool {
        matches!(self, Self::Rec { .. })
    }

    /// Looks up a property of an object type by name.
    pub fn prop(&self, name: &LocalName) -> Option<&Type> {
        match self {
            Self::Object { props } => props
                .iter()
                .find(|prop| &prop.name == name)
                .map(|prop| &prop.typ),
            _ => None,
        }
    }
}
