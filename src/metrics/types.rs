use serde::{Deserialize, Serialize};

/// One queryable metric and the `captures` column backing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDef {
    pub id: &'static str,
    pub column: &'static str,
}

/// Catalog entry as listed to dashboard clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricInfo {
    pub id: String,
    pub display_name: String,
    pub column: String,
}

impl From<&MetricDef> for MetricInfo {
    fn from(def: &MetricDef) -> Self {
        Self {
            id: def.id.to_string(),
            display_name: display_name(def.id),
            column: def.column.to_string(),
        }
    }
}

/// `weather_wind_speed` -> `Weather Wind Speed`. A letter is capitalised when
/// it does not directly follow another letter, so `load_1min` -> `Load 1Min`.
pub fn display_name(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut prev_is_letter = false;
    for ch in id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
