//! 类型变量 arena
//!
//! 每个类型变量在 arena 中占一个槽位，槽位保存它的 instance（未绑定时为 `None`）。
//! 变量 id 就是槽位下标，由 arena 在写锁下分配，因此同一 arena 内 id 唯一且单调递增。
//!
//! - 线程安全：使用 `parking_lot::RwLock` 保护槽位；
//!   `root` 在链长为一时只持有可升级读锁，需要路径压缩时才升级为写锁

use super::ty::Type;
use super::var::TypeVar;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::fmt;

/// 类型变量 arena（一次推断会话一个）
///
/// 参与 unify 的每个 `Type` 都必须来自同一个 arena
#[derive(Debug, Default)]
pub struct TypeArena {
    /// 每个变量的绑定（instance）
    instances: RwLock<Vec<Option<Type>>>,
}

impl TypeArena {
    /// 创建空 arena
    pub fn new() -> Self {
        TypeArena {
            instances: RwLock::new(Vec::new()),
        }
    }

    /// 分配新的类型变量
    pub fn new_var(&self) -> TypeVar {
        let mut instances = self.instances.write();
        let var = TypeVar::new(instances.len());
        instances.push(None);
        var
    }

    /// 分配新的类型变量并包装为 `Type`
    pub fn fresh_var(&self) -> Type {
        Type::Var(self.new_var())
    }

    /// 已分配的变量个数
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    /// 变量当前的 instance（不做解析）
    pub fn instance(
        &self,
        var: TypeVar,
    ) -> Option<Type> {
        self.instances
            .read()
            .get(var.index())
            .cloned()
            .flatten()
    }

    /// 变量是否已绑定
    pub fn is_bound(
        &self,
        var: TypeVar,
    ) -> bool {
        matches!(self.instances.read().get(var.index()), Some(Some(_)))
    }

    /// 设置变量的 instance
    ///
    /// 不做 occurs check，只应由 unify 调用。
    /// `var` 必须由本 arena 分配；其他 arena 的变量在 release 构建下被忽略
    pub(crate) fn set_instance(
        &self,
        var: TypeVar,
        ty: Type,
    ) {
        let mut instances = self.instances.write();
        debug_assert!(
            var.index() < instances.len(),
            "{var} does not belong to this arena"
        );
        if let Some(slot) = instances.get_mut(var.index()) {
            *slot = Some(ty);
        }
    }

    /// 查找类型的代表（路径压缩）
    ///
    /// 类型算子的代表是它自己；未绑定变量的代表是它自己；
    /// 已绑定变量的代表是其 instance 的代表，并写回链上每个变量
    pub fn root(
        &self,
        ty: &Type,
    ) -> Type {
        match ty {
            Type::Op(_) => ty.clone(),
            Type::Var(var) => self.root_var(*var),
        }
    }

    fn root_var(
        &self,
        var: TypeVar,
    ) -> Type {
        let instances = self.instances.upgradable_read();

        // 链长为零或一：无需压缩
        match slot(&instances, var) {
            None => return Type::Var(var),
            Some(Type::Op(op)) => return Type::Op(op.clone()),
            Some(Type::Var(next)) if slot(&instances, *next).is_none() => {
                return Type::Var(*next);
            }
            Some(Type::Var(_)) => {}
        }

        let mut instances = RwLockUpgradableReadGuard::upgrade(instances);
        let mut chain = Vec::new();
        let mut current = var;
        let root = loop {
            match slot(&instances, current) {
                None => break Type::Var(current),
                Some(Type::Var(next)) => {
                    chain.push(current);
                    current = *next;
                }
                Some(op @ Type::Op(_)) => {
                    chain.push(current);
                    break op.clone();
                }
            }
        };

        for var in chain {
            if let Some(slot) = instances.get_mut(var.index()) {
                *slot = Some(root.clone());
            }
        }
        root
    }

    /// 展开类型：递归替换所有已绑定变量
    pub fn expand(
        &self,
        ty: &Type,
    ) -> Type {
        match self.root(ty) {
            Type::Var(var) => Type::Var(var),
            Type::Op(op) if op.args().is_empty() => Type::Op(op),
            Type::Op(op) => Type::op(
                op.name_arc(),
                op.args().iter().map(|arg| self.expand(arg)).collect(),
            ),
        }
    }

    /// 语义相等：展开两侧后比较结构
    pub fn equals(
        &self,
        left: &Type,
        right: &Type,
    ) -> bool {
        self.expand(left) == self.expand(right)
    }

    /// 可读的类型表示
    pub fn display<'a>(
        &'a self,
        ty: &'a Type,
    ) -> TypeDisplay<'a> {
        TypeDisplay { arena: self, ty }
    }

    pub fn render(
        &self,
        ty: &Type,
    ) -> String {
        self.display(ty).to_string()
    }
}

fn slot(
    instances: &[Option<Type>],
    var: TypeVar,
) -> Option<&Type> {
    instances.get(var.index()).and_then(Option::as_ref)
}

/// 类型的显示包装，经由 arena 读取变量绑定
///
/// 未绑定变量显示为 `typeVarN`；已绑定变量显示其 instance；
/// 算子显示名字，后接以空格分隔的参数（函数类型即 `→ String Int`）
pub struct TypeDisplay<'a> {
    arena: &'a TypeArena,
    ty: &'a Type,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.ty {
            Type::Var(var) => match self.arena.instance(*var) {
                Some(instance) => write!(f, "{}", self.arena.display(&instance)),
                None => write!(f, "{}", var),
            },
            Type::Op(op) => {
                f.write_str(op.name())?;
                for arg in op.args() {
                    write!(f, " {}", self.arena.display(arg))?;
                }
                Ok(())
            }
        }
    }
}
