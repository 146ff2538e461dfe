//! 合一算法
//!
//! 经典的 Algorithm-W 式合一：自由变量被绑定到另一侧的当前类型，
//! 不计算最小上界（Int 与 Float 不会被提升，直接报不匹配）。
//! 失败时不回滚：之前已经提交的绑定保持不变

use super::arena::TypeArena;
use super::error::UnifyError;
use super::ty::Type;
use super::var::TypeVar;
use tracing::trace;

impl TypeArena {
    /// Unify 两个类型
    ///
    /// 这是变量获得绑定的唯一途径。
    ///
    /// 跨线程不是原子的：`root` 与绑定分别加锁，两个线程同时 unify
    /// 同一 arena 上的变量可能重复绑定或绕过 occurs check 形成环。
    /// 每个推断会话使用自己的 arena；共享 arena 时由调用方串行化 unify
    pub fn unify(
        &self,
        a: &Type,
        b: &Type,
    ) -> Result<(), UnifyError> {
        let a_root = self.root(a);
        let b_root = self.root(b);

        match (&a_root, &b_root) {
            // 同一个变量，已经合一
            (Type::Var(v1), Type::Var(v2)) if v1 == v2 => Ok(()),
            (Type::Var(var), _) => self.bind(*var, b_root.clone()),
            (Type::Op(_), Type::Var(_)) => self.unify(b, a),
            (Type::Op(left), Type::Op(right)) => {
                if left.name() != right.name() || left.arity() != right.arity() {
                    return Err(UnifyError::TypeMismatch {
                        left: self.render(&a_root),
                        right: self.render(&b_root),
                    });
                }
                for (l, r) in left.args().iter().zip(right.args()) {
                    self.unify(l, r)?;
                }
                Ok(())
            }
        }
    }

    /// 绑定类型变量到类型（带 occurs check）
    fn bind(
        &self,
        var: TypeVar,
        ty: Type,
    ) -> Result<(), UnifyError> {
        if self.occurs_in_type(var, &ty) {
            return Err(UnifyError::RecursiveUnification {
                var: var.to_string(),
                ty: self.render(&ty),
            });
        }
        trace!(var = %var, ty = %self.display(&ty), "binding type variable");
        self.set_instance(var, ty);
        Ok(())
    }

    /// 变量是否出现在类型中
    ///
    /// 类型的代表就是该变量，或者代表是算子且变量出现在某个参数中
    pub fn occurs_in_type(
        &self,
        var: TypeVar,
        ty: &Type,
    ) -> bool {
        match self.root(ty) {
            Type::Var(root) => root == var,
            Type::Op(op) => self.occurs_in(var, op.args()),
        }
    }

    /// 变量是否出现在任一类型中
    pub fn occurs_in(
        &self,
        var: TypeVar,
        types: &[Type],
    ) -> bool {
        types.iter().any(|ty| self.occurs_in_type(var, ty))
    }
}
