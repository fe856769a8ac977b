use super::super::language::{Prop, Term};
use super::core::{PropType, Type};
use super::error::TypeError;
use super::{grow_stack, Context};

impl Context {
    /// Synthesizes the type of `term`, failing on the first violation found.
    ///
    /// Children are checked left to right. Types are only head-normalized where their
    /// outer constructor is inspected.
    pub fn check_term(&self, term: &Term) -> Result<Type, TypeError> {
        grow_stack(|| match term {
            Term::True | Term::False => Ok(Type::Boolean),

            Term::Number { .. } => Ok(Type::Number),

            Term::If { cond, thn, els } => {
                let cond_type = self.check_term(cond)?.simplify();
                if !matches!(cond_type, Type::Boolean) {
                    return Err(TypeError::NonBooleanCondition(cond_type));
                }
                let thn_type = self.check_term(thn)?;
                let els_type = self.check_term(els)?;
                if !thn_type.is_equal_to(&els_type)? {
                    return Err(TypeError::BranchTypeMismatch(thn_type, els_type));
                }
                Ok(thn_type)
            }

            Term::Add { left, right } => {
                let left_type = self.check_term(left)?.simplify();
                let right_type = self.check_term(right)?.simplify();
                match (&left_type, &right_type) {
                    (Type::Number, Type::Number) => Ok(Type::Number),
                    _ => Err(TypeError::NonNumberOperand(left_type, right_type)),
                }
            }

            Term::Var { name } => self
                .get(name)
                .cloned()
                .ok_or_else(|| TypeError::UndefinedVariable(name.clone())),

            Term::Func { params, body } => {
                let inner = self.extend(
                    params
                        .iter()
                        .map(|param| (param.name.clone(), param.typ.clone())),
                );
                let ret_type = inner.check_term(body)?;
                Ok(Type::Func {
                    params: params.clone(),
                    ret_type: Box::new(ret_type),
                })
            }

            Term::Call { func, args } => {
                let func_type = self.check_term(func)?.simplify();
                let (params, ret_type) = match func_type {
                    Type::Func { params, ret_type } => (params, ret_type),
                    other => return Err(TypeError::NotAFunction(other)),
                };
                if params.len() != args.len() {
                    return Err(TypeError::ArityMismatch(params.len(), args.len()));
                }
                for (param, arg) in params.iter().zip(args) {
                    let arg_type = self.check_term(arg)?;
                    if !arg_type.is_subtype_of(&param.typ)? {
                        return Err(TypeError::ArgumentTypeMismatch(
                            param.name.clone(),
                            param.typ.clone(),
                            arg_type,
                        ));
                    }
                }
                Ok(*ret_type)
            }

            Term::Seq { body, rest } => {
                self.check_term(body)?;
                self.check_term(rest)
            }

            Term::Const { name, init, rest } => {
                let init_type = self.check_term(init)?;
                self.bind(name.clone(), init_type).check_term(rest)
            }

            Term::ObjectNew { props } => {
                let props = props
                    .iter()
                    .map(|Prop { name, term }| {
                        Ok(PropType {
                            name: name.clone(),
                            typ: self.check_term(term)?,
                        })
                    })
                    .collect::<Result<_, TypeError>>()?;
                Ok(Type::Object { props })
            }

            Term::ObjectGet { obj, prop_name } => {
                let obj_type = self.check_term(obj)?.simplify();
                if !matches!(obj_type, Type::Object { .. }) {
                    return Err(TypeError::NotAnObject(obj_type));
                }
                match obj_type.prop(prop_name) {
                    Some(typ) => Ok(typ.clone()),
                    None => Err(TypeError::UnknownProperty(prop_name.clone(), obj_type)),
                }
            }

            Term::RecFunc {
                func_name,
                params,
                ret_type,
                body,
                rest,
            } => {
                let func_type = Type::Func {
                    params: params.clone(),
                    ret_type: Box::new(ret_type.clone()),
                };
                let inner = self.extend(
                    std::iter::once((func_name.clone(), func_type.clone())).chain(
                        params
                            .iter()
                            .map(|param| (param.name.clone(), param.typ.clone())),
                    ),
                );
                let body_type = inner.check_term(body)?;
                if !body_type.is_equal_to(ret_type)? {
                    return Err(TypeError::ReturnTypeMismatch(
                        func_name.clone(),
                        ret_type.clone(),
                        body_type,
                    ));
                }
                tracing::trace!("{}: {}", func_name, func_type);
                self.bind(func_name.clone(), func_type).check_term(rest)
            }
        })
    }
}
