//! 类型错误定义
//!
//! - UnifyError: 合一失败，只有类型不匹配和递归合一两种
//! - TypeError: 检查器层面的错误

use thiserror::Error;

/// 合一错误
///
/// 携带两侧类型的文本表示，供诊断使用
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnifyError {
    /// 算子名字或参数个数不一致
    #[error("type mismatch: {left:?} != {right:?}")]
    TypeMismatch { left: String, right: String },

    /// occurs check 失败（会构造无限类型）
    #[error("recursive unification: {var} occurs in {ty}")]
    RecursiveUnification { var: String, ty: String },
}

impl UnifyError {
    /// 冲突的两个类型表示
    pub fn operands(&self) -> (&str, &str) {
        match self {
            UnifyError::TypeMismatch { left, right } => (left.as_str(), right.as_str()),
            UnifyError::RecursiveUnification { var, ty } => (var.as_str(), ty.as_str()),
        }
    }
}

/// 类型检查错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// 合一失败
    #[error(transparent)]
    Unify(#[from] UnifyError),

    /// 未知的内置函数名
    #[error("unknown identifier: {name}")]
    UnknownIdentifier { name: String },

    /// 捕获引用指向未注册的正则
    #[error("unknown pattern: {index}")]
    UnknownPattern { index: usize },
}
