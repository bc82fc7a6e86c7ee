//! Deep merge over JSON trees.

use serde_json::Value;

/// Deep-merge `overrides` onto `base`, in place.
///
/// Objects merge key-by-key (never replaced wholesale); every other JSON
/// type present in the override replaces the corresponding base value. Keys
/// absent from the override keep the base value; keys absent from the base
/// are inserted as-is.
pub fn deep_merge(base: &mut Value, overrides: &Value) {
    if let (Value::Object(base_map), Value::Object(over_map)) = (&mut *base, overrides) {
        for (key, over_value) in over_map {
            match base_map.get_mut(key) {
                Some(slot) => deep_merge(slot, over_value),
                None => {
                    base_map.insert(key.clone(), over_value.clone());
                }
            }
        }
        return;
    }
    *base = overrides.clone();
}
