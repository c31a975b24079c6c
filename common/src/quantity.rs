//! 分量パーサー
//!
//! ページ上の分量表記を数値に変換する。受け付けるのは浮動小数点リテラルのみ:
//! `2`, `0.5`, `.5`, `1e3`, `+1.5`, `1_000`（数字間の `_`）。
//! 分数 (`1/2`)、カンマ小数 (`0,5`)、範囲 (`2-3`) は変換しない。
//! `inf` / `nan` などの非有限値はJSONに保存できないため不正扱い。

use thiserror::Error;

/// 分量の変換失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("quantity is empty")]
    Empty,

    #[error("could not convert quantity '{0}' to float")]
    Invalid(String),

    /// 加算すると合計が有限値でなくなる
    #[error("adding quantity '{0}' overflows the total")]
    Overflow(String),
}

/// 分量文字列を数値に変換
pub fn parse_quantity(raw: &str) -> Result<f64, QuantityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }

    let literal = if trimmed.contains('_') {
        strip_digit_separators(trimmed).ok_or_else(|| QuantityError::Invalid(raw.to_string()))?
    } else {
        trimmed.to_string()
    };

    literal
        .parse::<f64>()
        .ok()
        .filter(|quantity| quantity.is_finite())
        .ok_or_else(|| QuantityError::Invalid(raw.to_string()))
}

/// 数字に挟まれた `_` を除去。それ以外の位置の `_` があれば None
fn strip_digit_separators(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }

    Some(out)
}
