//! Option bags describing an item to create.
//!
//! Templates describe items loosely (`{"name": "flare_gun", "uses": 4}`), and
//! construction must never fail on a malformed bag: bad or missing counts
//! coerce to `0`, bad or missing booleans coerce to `false`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::parse_int;

/// Everything an [`super::ItemAllocator`] needs to create one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct ItemOptions {
    /// Creates a paired item instead of a single one
    pub double: bool,
    pub name: Option<String>,
    /// Name of the first half of a paired item
    pub first_name: Option<String>,
    /// Name of the second half of a paired item
    pub second_name: Option<String>,
    /// Descriptive text; only its presence takes part in the identity key
    pub extra_text: String,
    pub is_fine: bool,
    pub boxes: u32,
    pub uses: u32,
    pub diamond: bool,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn paired(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            double: true,
            first_name: Some(first_name.into()),
            second_name: Some(second_name.into()),
            ..Self::default()
        }
    }

    pub fn fine(mut self) -> Self {
        self.is_fine = true;
        self
    }

    pub fn boxes(mut self, boxes: u32) -> Self {
        self.boxes = boxes;
        self
    }

    pub fn uses(mut self, uses: u32) -> Self {
        self.uses = uses;
        self
    }

    pub fn diamond(mut self) -> Self {
        self.diamond = true;
        self
    }

    pub fn extra(mut self, text: impl Into<String>) -> Self {
        self.extra_text = text.into();
        self
    }

    pub fn double(mut self) -> Self {
        self.double = true;
        self
    }

    /// Build options from an untyped JSON object, coercing every field.
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| value.get(key).unwrap_or(&Value::Null);
        Self {
            double: truthy(field("double")),
            name: value.get("name").map(text_of),
            first_name: value.get("firstName").map(text_of),
            second_name: value.get("secondName").map(text_of),
            extra_text: if truthy(field("extraText")) {
                text_of(field("extraText"))
            } else {
                String::new()
            },
            is_fine: truthy(field("isFine")),
            boxes: count_of(field("boxes")),
            uses: count_of(field("uses")),
            diamond: truthy(field("diamond")),
        }
    }
}

impl From<Value> for ItemOptions {
    fn from(value: Value) -> Self {
        Self::from_json(&value)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Non-negative count; anything unparsable or negative is `0`.
fn count_of(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_int(s),
        _ => 0,
    };
    u32::try_from(raw).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builders_compose() {
        let options = ItemOptions::named("flare_gun").uses(4).fine();
        assert_eq!(options.name.as_deref(), Some("flare_gun"));
        assert_eq!(options.uses, 4);
        assert!(options.is_fine);
        assert!(!options.double);
    }

    #[test]
    fn json_bag_is_coerced() {
        let options = ItemOptions::from_json(&json!({
            "name": "oil",
            "boxes": "1",
            "uses": "three",
            "isFine": 1,
            "diamond": "",
        }));
        assert_eq!(options.name.as_deref(), Some("oil"));
        assert_eq!(options.boxes, 1);
        assert_eq!(options.uses, 0);
        assert!(options.is_fine);
        assert!(!options.diamond);
    }

    #[test]
    fn negative_and_fractional_counts() {
        let options = ItemOptions::from_json(&json!({ "boxes": -2, "uses": 2.7 }));
        assert_eq!(options.boxes, 0);
        assert_eq!(options.uses, 2);
    }

    #[test]
    fn extra_text_true_counts_as_text() {
        let options = ItemOptions::from_json(&json!({ "extraText": true }));
        assert_eq!(options.extra_text, "true");

        let options = ItemOptions::from_json(&json!({ "extraText": false }));
        assert_eq!(options.extra_text, "");
    }

    #[test]
    fn empty_bag_is_a_plain_single_item() {
        let options: ItemOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ItemOptions::new());

        let options: ItemOptions = serde_json::from_str("null").unwrap();
        assert_eq!(options, ItemOptions::new());
    }

    #[test]
    fn paired_options() {
        let options: ItemOptions = serde_json::from_value(json!({
            "double": true,
            "firstName": "fine_shield",
            "secondName": "fine_pistol",
            "isFine": true,
        }))
        .unwrap();
        assert_eq!(
            options,
            ItemOptions::paired("fine_shield", "fine_pistol").fine()
        );
    }
}
