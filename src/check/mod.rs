//! 表达式类型检查器
//!
//! 在一个 [`TypeArena`] 上驱动类型推断：
//! - 字面量直接给出原子类型
//! - 捕获组引用按正则结构推断，捕获组不存在时分配新变量
//! - 内置函数调用先对签名做新鲜实例化，再与实参构成的函数类型合一
//! - 二元运算合一两侧操作数
//!
//! 合一在第一个冲突处失败，检查器不尝试从多个独立错误中恢复

pub mod expr;


pub use expr::{BinOp, Expr};

use crate::builtins::lookup_builtin;
use crate::capture::infer_capture_type_with;
use crate::types::{Type, TypeArena, TypeError};
use crate::util::config::CheckerConfig;
use regex_syntax::hir::Hir;
use tracing::debug;

/// 类型检查器
#[derive(Debug)]
pub struct Checker<'a> {
    /// 变量绑定所在的 arena
    arena: &'a TypeArena,
    config: CheckerConfig,
    /// 已注册的正则语法树，按注册顺序编号
    patterns: Vec<Hir>,
    /// 当前作用域内的非泛型类型
    non_generic: Vec<Type>,
}

impl<'a> Checker<'a> {
    /// 使用默认配置创建检查器
    pub fn new(arena: &'a TypeArena) -> Self {
        Self::with_config(arena, CheckerConfig::default())
    }

    pub fn with_config(
        arena: &'a TypeArena,
        config: CheckerConfig,
    ) -> Self {
        Checker {
            arena,
            config,
            patterns: Vec::new(),
            non_generic: Vec::new(),
        }
    }

    pub fn arena(&self) -> &'a TypeArena {
        self.arena
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// 注册正则语法树，返回供 `Expr::CaptureRef` 使用的编号
    pub fn add_pattern(
        &mut self,
        hir: Hir,
    ) -> usize {
        self.patterns.push(hir);
        self.patterns.len() - 1
    }

    /// 进入作用域：该类型中的变量不再被泛化
    pub fn push_non_generic(
        &mut self,
        ty: Type,
    ) {
        self.non_generic.push(ty);
    }

    /// 退出作用域
    pub fn pop_non_generic(&mut self) -> Option<Type> {
        self.non_generic.pop()
    }

    pub fn non_generic(&self) -> &[Type] {
        &self.non_generic
    }

    /// 检查表达式，返回展开后的类型
    pub fn check(
        &self,
        expr: &Expr,
    ) -> Result<Type, TypeError> {
        let ty = self.infer(expr)?;
        Ok(self.arena.expand(&ty))
    }

    /// 推断表达式的类型（可能仍是类型变量）
    pub fn infer(
        &self,
        expr: &Expr,
    ) -> Result<Type, TypeError> {
        match expr {
            Expr::IntLit(_) => Ok(Type::int()),
            Expr::FloatLit(_) => Ok(Type::float()),
            Expr::StrLit(_) => Ok(Type::string()),
            Expr::CaptureRef { pattern, group } => {
                let hir = self
                    .patterns
                    .get(*pattern)
                    .ok_or(TypeError::UnknownPattern { index: *pattern })?;
                let default = self.config.capture_default.to_type();
                Ok(infer_capture_type_with(hir, *group, default)
                    .unwrap_or_else(|| self.arena.fresh_var()))
            }
            Expr::Call { name, args } => self.infer_call(name, args),
            Expr::Binary { op, lhs, rhs } => {
                let lhs_ty = self.infer(lhs)?;
                let rhs_ty = self.infer(rhs)?;
                self.arena.unify(&lhs_ty, &rhs_ty).inspect_err(|err| {
                    debug!(op = %op, error = %err, "binary operands do not unify");
                })?;
                if op.is_comparison() {
                    Ok(Type::int())
                } else {
                    Ok(lhs_ty)
                }
            }
        }
    }

    fn infer_call(
        &self,
        name: &str,
        args: &[Expr],
    ) -> Result<Type, TypeError> {
        let signature = self.arena.fresh(lookup_builtin(name)?, &self.non_generic);

        let mut call = Vec::with_capacity(args.len() + 1);
        for arg in args {
            call.push(self.infer(arg)?);
        }
        let result = self.arena.fresh_var();
        call.push(result.clone());

        self.arena
            .unify(&signature, &Type::function(call))
            .inspect_err(|err| {
                debug!(builtin = name, error = %err, "call does not match builtin signature");
            })?;
        Ok(result)
    }
}
