//! 类型系统
//!
//! 将类型系统拆分为多个子模块：
//! - var: 类型变量定义
//! - ty: 类型表示（变量 / 算子）与内置原子类型
//! - arena: 变量绑定存储、root 解析（路径压缩）、展开与显示
//! - unify: 合一算法（带 occurs check）
//! - generic: 泛化判断与新鲜实例化
//! - error: 类型错误定义

pub mod arena;
pub mod error;
pub mod generic;
pub mod ty;
pub mod unify;
pub mod var;

#[cfg(test)]
mod tests;

// 重新导出主要类型
pub use arena::{TypeArena, TypeDisplay};
pub use error::{TypeError, UnifyError};
pub use ty::{Type, TypeOperator, ERROR, FLOAT, FUNCTION, INT, NONE, STRING, UNDEF};
pub use var::TypeVar;
