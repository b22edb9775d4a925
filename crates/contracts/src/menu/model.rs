use serde::{Deserialize, Serialize};

/// Root of `menu.json`. Loaded once per page and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A named group of items. The name is both the tab label and the filter key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(default)]
    pub name: String,
    /// Lead-in paragraph shown under the heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

/// Price as it appears in the source document.
///
/// Numbers are major currency units; strings carry irregular pricing such as
/// "ab 7,90 €". Anything else (missing, `null`, objects) is kept as `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
    Other(serde_json::Value),
}

impl Default for Price {
    fn default() -> Self {
        Price::Other(serde_json::Value::Null)
    }
}

impl MenuDocument {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let doc = MenuDocument::from_json(
            r#"{
                "categories": [
                    {
                        "name": "Vorspeisen",
                        "note": "Alle Vorspeisen mit Brot",
                        "items": [
                            {"name": "Bruschetta", "desc": "Tomate, Basilikum", "price": 6.9, "badges": ["vegan"]},
                            {"name": "Antipasti", "price": "ab 9,50 €"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.categories.len(), 1);
        let cat = &doc.categories[0];
        assert_eq!(cat.note.as_deref(), Some("Alle Vorspeisen mit Brot"));
        assert_eq!(cat.items[0].price, Price::Amount(6.9));
        assert_eq!(cat.items[0].badges, vec!["vegan".to_string()]);
        assert_eq!(cat.items[1].price, Price::Label("ab 9,50 €".into()));
        assert_eq!(cat.items[1].desc, None);
        assert_eq!(doc.item_count(), 2);
    }

    #[test]
    fn test_integer_price_is_amount() {
        let item: Item = serde_json::from_str(r#"{"name": "Cola", "price": 3}"#).unwrap();
        assert_eq!(item.price, Price::Amount(3.0));
    }

    #[test]
    fn test_malformed_records_decode_best_effort() {
        let doc = MenuDocument::from_json(
            r#"{"categories": [{"name": "Getränke", "items": [{"price": null}, {"desc": "ohne Namen", "price": {"klein": 3}}]}, {}]}"#,
        )
        .unwrap();

        let items = &doc.categories[0].items;
        assert_eq!(items[0].name, "");
        assert_eq!(items[0].price, Price::Other(serde_json::Value::Null));
        assert!(matches!(items[1].price, Price::Other(_)));
        assert_eq!(doc.categories[1].name, "");
        assert!(doc.categories[1].items.is_empty());

        let missing_price: Item = serde_json::from_str(r#"{"name": "Wasser"}"#).unwrap();
        assert_eq!(missing_price.price, Price::default());
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(MenuDocument::from_json("<html>404</html>").is_err());
    }
}
