//! 泛化与新鲜实例化
//!
//! 变量相对于非泛型集合是泛型的，当且仅当它不出现在集合中的任何类型里。
//! 新鲜实例化把每个泛型变量替换为新变量，同一次调用内同一个源变量映射到同一个新变量

use super::arena::TypeArena;
use super::ty::Type;
use super::var::TypeVar;
use std::collections::HashMap;
use tracing::debug;

impl TypeArena {
    /// 变量相对于 `non_generic` 是否是泛型的
    pub fn is_generic(
        &self,
        var: TypeVar,
        non_generic: &[Type],
    ) -> bool {
        !self.occurs_in(var, non_generic)
    }

    /// 新鲜实例化
    ///
    /// 返回 `ty` 的结构拷贝：泛型变量换成新变量，非泛型变量保持不变，
    /// 算子保留名字与参数个数，参数递归处理
    pub fn fresh(
        &self,
        ty: &Type,
        non_generic: &[Type],
    ) -> Type {
        let mut mappings = HashMap::new();
        let fresh = self.fresh_rec(ty, non_generic, &mut mappings);
        if !mappings.is_empty() {
            debug!(
                ty = %self.display(ty),
                fresh = %self.display(&fresh),
                replaced = mappings.len(),
                "instantiated generic type"
            );
        }
        fresh
    }

    fn fresh_rec(
        &self,
        ty: &Type,
        non_generic: &[Type],
        mappings: &mut HashMap<TypeVar, TypeVar>,
    ) -> Type {
        match self.root(ty) {
            Type::Var(var) => {
                if self.is_generic(var, non_generic) {
                    Type::Var(*mappings.entry(var).or_insert_with(|| self.new_var()))
                } else {
                    Type::Var(var)
                }
            }
            Type::Op(op) if op.args().is_empty() => Type::Op(op),
            Type::Op(op) => Type::op(
                op.name_arc(),
                op.args()
                    .iter()
                    .map(|arg| self.fresh_rec(arg, non_generic, mappings))
                    .collect(),
            ),
        }
    }
}
