//! 買い物リスト永続化テスト
//!
//! 読み込み・保存・破損ファイルの扱いを検証

use recipe_cart::error::CartError;
use recipe_cart::store::ShoppingListStore;
use recipe_cart_common::ShoppingList;
use tempfile::tempdir;

fn list(pairs: &[(&str, f64)]) -> ShoppingList {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// ファイルが無ければ空のリスト
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ShoppingListStore::new(dir.path().join("shopping_list.json"));

    let loaded = store.load().expect("読み込み失敗");
    assert!(loaded.is_empty());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ShoppingListStore::new(dir.path().join("shopping_list.json"));

    let original = list(&[("Chicken breast", 3.5), ("Salt", 2.0), ("Smântână", 0.1 + 0.2)]);
    store.save(&original).expect("保存失敗");

    let loaded = store.load().expect("読み込み失敗");
    assert_eq!(loaded.len(), original.len());
    for (name, total) in original.iter() {
        let value = loaded.get(name).expect("キーが見つからない");
        assert!((value - total).abs() < 1e-9, "{name}: {value} != {total}");
    }
}

/// 保存形式はインデント付きのフラットなオブジェクト
#[test]
fn test_save_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shopping_list.json");
    let store = ShoppingListStore::new(&path);

    store.save(&list(&[("Salt", 2.0)])).expect("保存失敗");

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\n  \"Salt\": 2.0\n}");
}

/// 保存は既存内容を完全に上書き
#[test]
fn test_save_overwrites() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shopping_list.json");
    let store = ShoppingListStore::new(&path);

    store.save(&list(&[("Salt", 2.0), ("Sugar", 1.0)])).unwrap();
    store.save(&list(&[("Flour", 500.0)])).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, list(&[("Flour", 500.0)]));
}

/// 保存先のディレクトリが無ければ作成
#[test]
fn test_save_creates_parent_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ShoppingListStore::new(dir.path().join("nested").join("list.json"));

    store.save(&list(&[("Salt", 1.0)])).expect("保存失敗");
    assert!(store.path().exists());
}

/// 整数・文字列の数量も数値として読み込む
#[test]
fn test_load_coerces_values() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shopping_list.json");
    std::fs::write(&path, r#"{"Eggs": 3, "Milk": "250.5", "Salt": 1.5}"#).unwrap();

    let loaded = ShoppingListStore::new(&path).load().expect("読み込み失敗");
    assert_eq!(loaded, list(&[("Eggs", 3.0), ("Milk", 250.5), ("Salt", 1.5)]));
}

/// JSONとして不正なファイルはエラーで、内容は変更されない
#[test]
fn test_load_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shopping_list.json");
    std::fs::write(&path, "{ invalid json }").unwrap();

    let result = ShoppingListStore::new(&path).load();
    assert!(matches!(result, Err(CartError::CorruptStore { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ invalid json }");
}

/// オブジェクト以外のJSONはエラー
#[test]
fn test_load_non_object() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shopping_list.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let result = ShoppingListStore::new(&path).load();
    assert!(matches!(result, Err(CartError::CorruptStore { .. })));
}

/// 数量に変換できない値はエラー
#[test]
fn test_load_non_numeric_value() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shopping_list.json");
    std::fs::write(&path, r#"{"Salt": 1.0, "Pepper": "a pinch"}"#).unwrap();

    let result = ShoppingListStore::new(&path).load();
    match result {
        Err(CartError::InvalidStoredQuantity { name, .. }) => assert_eq!(name, "Pepper"),
        other => panic!("InvalidStoredQuantity を期待: {:?}", other),
    }
}

/// 合計が有限値に収まらない加算は保存前に除外され、再読み込みできる
#[test]
fn test_large_totals_stay_loadable() {
    use recipe_cart_common::{aggregate, IngredientEntry, IngredientGroup, RecipeResult};

    let dir = tempdir().expect("Failed to create temp dir");
    let store = ShoppingListStore::new(dir.path().join("shopping_list.json"));

    let batch = vec![RecipeResult {
        source_location: "https://example.com/r".to_string(),
        ingredients: vec![IngredientGroup {
            name: "Other".to_string(),
            ingredients: vec![
                IngredientEntry::new("Salt", "1e308", "g"),
                IngredientEntry::new("Salt", "1e308", "g"),
            ],
        }],
    }];

    let aggregation = aggregate(ShoppingList::new(), &batch);
    assert_eq!(aggregation.skipped.len(), 1);
    store.save(&aggregation.list).expect("保存失敗");

    let loaded = store.load().expect("再読み込み失敗");
    assert_eq!(loaded.get("Salt"), Some(1e308));
}
