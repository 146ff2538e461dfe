//! 捕获组类型推断
//!
//! 根据正则语法树中捕获组的结构判断它能匹配的字符集合：
//! 只匹配数字与符号则为 Int，再加上小数点与指数标记则为 Float，
//! 其余情况退回默认类型（当前为 Int，文本类型尚未区分）

use crate::types::Type;
use regex_syntax::hir::{Class, Hir, HirKind};
use regex_syntax::ParserBuilder;
use tracing::{debug, trace};

/// 整数捕获组允许的字符
pub const INT_CHARS: &str = "+-0123456789";

/// 浮点捕获组允许的字符
pub const FLOAT_CHARS: &str = "+-0123456789.eE";

/// 解析正则为语法树
///
/// 关闭 Unicode 的 Perl 字符类（`\d` 即 `[0-9]`），并关闭 UTF-8 限制：
/// 语法树只用于分析，不用于匹配
pub fn parse_pattern(pattern: &str) -> Result<Hir, regex_syntax::Error> {
    ParserBuilder::new()
        .unicode(false)
        .utf8(false)
        .build()
        .parse(pattern)
}

/// 推断编号为 `group` 的捕获组的类型
///
/// 捕获组不存在时返回 `None`，这不是错误
pub fn infer_capture_type(
    hir: &Hir,
    group: usize,
) -> Option<Type> {
    infer_capture_type_with(hir, group, Type::int())
}

/// 同 [`infer_capture_type`]，由调用方指定无法识别时的默认类型
pub fn infer_capture_type_with(
    hir: &Hir,
    group: usize,
    default: Type,
) -> Option<Type> {
    let Some(node) = capture_group(hir, group) else {
        debug!(group, "capture group not found");
        return None;
    };
    let ty = if only_matches(node, INT_CHARS) {
        Type::int()
    } else if only_matches(node, FLOAT_CHARS) {
        Type::float()
    } else {
        default
    };
    trace!(group, ty = ?ty, "inferred capture group type");
    Some(ty)
}

/// 深度优先查找编号为 `group` 的捕获节点（编号从 1 开始）
pub fn capture_group(
    hir: &Hir,
    group: usize,
) -> Option<&Hir> {
    if let HirKind::Capture(capture) = hir.kind() {
        if capture.index as usize == group {
            return Some(hir);
        }
    }
    children(hir)
        .iter()
        .find_map(|sub| capture_group(sub, group))
}

/// 节点能匹配的每个字符是否都属于 `allowed`
///
/// 拼接与选择要求每个子节点都满足；
/// 空匹配、断言等其他节点保守地返回 false
pub fn only_matches(
    hir: &Hir,
    allowed: &str,
) -> bool {
    match hir.kind() {
        HirKind::Literal(literal) => match std::str::from_utf8(&literal.0) {
            Ok(text) => text.chars().all(|c| allowed.contains(c)),
            Err(_) => false,
        },
        HirKind::Class(Class::Unicode(class)) => class
            .iter()
            .all(|range| range_within(range.start(), range.end(), allowed)),
        HirKind::Class(Class::Bytes(class)) => class.iter().all(|range| {
            range_within(char::from(range.start()), char::from(range.end()), allowed)
        }),
        HirKind::Repetition(repetition) => only_matches(&repetition.sub, allowed),
        HirKind::Capture(capture) => only_matches(&capture.sub, allowed),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => {
            subs.iter().all(|sub| only_matches(sub, allowed))
        }
        _ => false,
    }
}

fn range_within(
    lo: char,
    hi: char,
    allowed: &str,
) -> bool {
    (lo..=hi).all(|c| allowed.contains(c))
}

fn children(hir: &Hir) -> &[Hir] {
    match hir.kind() {
        HirKind::Capture(capture) => std::slice::from_ref(&*capture.sub),
        HirKind::Repetition(repetition) => std::slice::from_ref(&*repetition.sub),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => subs,
        _ => &[],
    }
}
