use std::fmt::{self, Display};

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use super::types::{Param, Type};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalName {
    pub string: ArcStr,
}

impl LocalName {
    pub fn as_str(&self) -> &str {
        self.string.as_str()
    }
}

impl From<ArcStr> for LocalName {
    fn from(value: ArcStr) -> Self {
        LocalName { string: value }
    }
}

impl From<&str> for LocalName {
    fn from(value: &str) -> Self {
        LocalName {
            string: ArcStr::from(value),
        }
    }
}

impl Display for LocalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.string)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub name: LocalName,
    pub term: Term,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Term {
    #[serde(rename = "true")]
    True,
    #[serde(rename = "false")]
    False,
    #[serde(rename = "number")]
    Number { n: f64 },
    #[serde(rename = "if")]
    If {
        cond: Box<Term>,
        thn: Box<Term>,
        els: Box<Term>,
    },
    #[serde(rename = "add")]
    Add { left: Box<Term>, right: Box<Term> },
    #[serde(rename = "var")]
    Var { name: LocalName },
    #[serde(rename = "func")]
    Func { params: Vec<Param>, body: Box<Term> },
    #[serde(rename = "call")]
    Call { func: Box<Term>, args: Vec<Term> },
    #[serde(rename = "seq")]
    Seq { body: Box<Term>, rest: Box<Term> },
    #[serde(rename = "const")]
    Const {
        name: LocalName,
        init: Box<Term>,
        rest: Box<Term>,
    },
    #[serde(rename = "objectNew")]
    ObjectNew { props: Vec<Prop> },
    #[serde(rename = "objectGet")]
    ObjectGet {
        obj: Box<Term>,
        #[serde(rename = "propName")]
        prop_name: LocalName,
    },
    #[serde(rename = "recFunc")]
    RecFunc {
        #[serde(rename = "funcName")]
        func_name: LocalName,
        params: Vec<Param>,
        #[serde(rename = "retType")]
        ret_type: Type,
        body: Box<Term>,
        rest: Box<Term>,
    },
}

// Builders, mostly for tests and embedding. Every builder takes ownership of its children.
#[allow(unused)]
impl Term {
    pub fn number(n: f64) -> Self {
        Self::Number { n }
    }

    pub fn if_(cond: Self, thn: Self, els: Self) -> Self {
        Self::If {
            cond: Box::new(cond),
            thn: Box::new(thn),
            els: Box::new(els),
        }
    }

    pub fn add(left: Self, right: Self) -> Self {
        Self::Add {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn var(name: &str) -> Self {
        Self::Var { name: name.into() }
    }

    pub fn func(params: Vec<(&str, Type)>, body: Self) -> Self {
        Self::Func {
            params: Param::list(params),
            body: Box::new(body),
        }
    }

    pub fn call(func: Self, args: Vec<Self>) -> Self {
        Self::Call {
            func: Box::new(func),
            args,
        }
    }

    pub fn seq(body: Self, rest: Self) -> Self {
        Self::Seq {
            body: Box::new(body),
            rest: Box::new(rest),
        }
    }

    pub fn const_(name: &str, init: Self, rest: Self) -> Self {
        Self::Const {
            name: name.into(),
            init: Box::new(init),
            rest: Box::new(rest),
        }
    }

    pub fn object(props: Vec<(&str, Self)>) -> Self {
        Self::ObjectNew {
            props: props
                .into_iter()
                .map(|(name, term)| Prop {
                    name: name.into(),
                    term,
                })
                .collect(),
        }
    }

    pub fn get(obj: Self, prop_name: &str) -> Self {
        Self::ObjectGet {
            obj: Box::new(obj),
            prop_name: prop_name.into(),
        }
    }

    pub fn rec_func(
        func_name: &str,
        params: Vec<(&str, Type)>,
        ret_type: Type,
        body: Self,
        rest: Self,
    ) -> Self {
        Self::RecFunc {
            func_name: func_name.into(),
            params: Param::list(params),
            ret_type,
            body: Box::new(body),
            rest: Box::new(rest),
        }
    }
}
