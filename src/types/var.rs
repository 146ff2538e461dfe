//! 类型变量定义
//!
//! TypeVar 只是一个索引，绑定状态（instance）保存在 [`TypeArena`](super::TypeArena) 中

use std::fmt;

/// 类型变量（用于类型推断）
///
/// 索引由所属的 arena 单调分配；两个变量相等当且仅当索引相等
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVar(usize);

impl TypeVar {
    /// 创建新类型变量（只由 arena 调用）
    pub(crate) fn new(index: usize) -> Self {
        TypeVar(index)
    }

    /// 获取变量的索引
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeVar {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "typeVar{}", self.0)
    }
}
