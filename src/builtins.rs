//! 内置函数类型表
//!
//! 内置函数名到函数类型的固定映射，首次访问时初始化，之后只读。
//! 调用方在使用签名前必须先做新鲜实例化（[`TypeArena::fresh`](crate::types::TypeArena::fresh)）

use crate::types::{Type, TypeError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 内置函数类型表
pub static BUILTINS: Lazy<HashMap<&'static str, Type>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("timestamp", Type::function(vec![Type::int()]));
    table.insert("len", Type::function(vec![Type::string(), Type::int()]));
    table.insert("settime", Type::function(vec![Type::int(), Type::none()]));
    table.insert("strptime", Type::function(vec![Type::string(), Type::none()]));
    table.insert("strtol", Type::function(vec![Type::string(), Type::int()]));
    table.insert("tolower", Type::function(vec![Type::string(), Type::string()]));
    table.insert("getfilename", Type::function(vec![Type::string()]));
    table
});

/// 查找内置函数的类型
pub fn builtin_type(name: &str) -> Option<&'static Type> {
    BUILTINS.get(name)
}

/// 查找内置函数的类型，未知名字报错
pub fn lookup_builtin(name: &str) -> Result<&'static Type, TypeError> {
    builtin_type(name).ok_or_else(|| TypeError::UnknownIdentifier {
        name: name.to_string(),
    })
}

/// 所有内置函数名（排序后）
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTINS.keys().copied().collect();
    names.sort_unstable();
    names
}
