//! Recipe Cart Common Library
//!
//! レシピページの材料抽出と買い物リスト集計（I/Oなし）

pub mod types;
pub mod error;
pub mod markup;
pub mod quantity;
pub mod extractor;
pub mod aggregator;

pub use types::{
    IngredientEntry, IngredientGroup, RecipeResult, ShoppingList, DEFAULT_GROUP_NAME,
    DEFAULT_UNIT,
};
pub use error::{Error, Result};
pub use markup::{Node, Page, Signature};
pub use quantity::{parse_quantity, QuantityError};
pub use extractor::{extract, Extractor, Signatures};
pub use aggregator::{aggregate, Aggregation, SkippedEntry};
