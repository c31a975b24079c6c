//! マークアップ検索
//!
//! タグ名 + class属性でノードを検索する最小限のインターフェース。
//! class は空白区切りのトークンのどれか1つに一致すればマッチする。

use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// 検索条件（タグ名 + class）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub tag: String,
    pub class: String,
}

impl Signature {
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: class.into(),
        }
    }

    /// CSSセレクタにコンパイル
    pub fn compile(&self) -> Result<Matcher> {
        let is_token = |s: &str| !s.is_empty() && !s.contains(char::is_whitespace);
        if !is_token(&self.tag) || !is_token(&self.class) {
            return Err(Error::Selector(format!("invalid signature: '{}'", self)));
        }

        let css = format!("{}.{}", self.tag, self.class);
        let selector = Selector::parse(&css)
            .map_err(|e| Error::Selector(format!("{}: {}", css, e)))?;
        Ok(Matcher { selector })
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tag, self.class)
    }
}

/// コンパイル済みの検索条件
#[derive(Debug, Clone)]
pub struct Matcher {
    selector: Selector,
}

/// パース済みドキュメント
pub struct Page {
    document: Html,
}

impl Page {
    /// HTMLをパース（壊れたマークアップでも失敗しない）
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.document.root_element(),
        }
    }
}

/// ドキュメント内の要素
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// 子孫から一致する要素をすべて取得（ドキュメント順）
    pub fn find_all(&self, matcher: &Matcher) -> Vec<Node<'a>> {
        self.element
            .select(&matcher.selector)
            .map(|element| Node { element })
            .collect()
    }

    /// 子孫から最初に一致する要素を取得
    pub fn find_first(&self, matcher: &Matcher) -> Option<Node<'a>> {
        self.element
            .select(&matcher.selector)
            .next()
            .map(|element| Node { element })
    }

    /// 子孫テキストを連結し、前後の空白を除去
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}
