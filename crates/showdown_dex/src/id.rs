//! Identifier normalization.
//!
//! Every lookup in the dex goes through [`to_id`]: arbitrary input is reduced
//! to a lowercase `[a-z0-9]*` key. Objects carrying an `id` (or `userid`)
//! field normalize to that field's value.

use serde_json::Value;

/// Values that can be reduced to a canonical identifier.
pub trait ToId {
    fn to_id(&self) -> String;
}

/// Lowercase `text` and drop everything outside `[a-z0-9]`.
pub fn to_id(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Escape the characters that would break out of an HTML attribute or text node.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ToId for str {
    fn to_id(&self) -> String {
        to_id(self)
    }
}

impl ToId for String {
    fn to_id(&self) -> String {
        to_id(self)
    }
}

impl<T: ToId + ?Sized> ToId for &T {
    fn to_id(&self) -> String {
        (**self).to_id()
    }
}

impl<T: ToId> ToId for Option<T> {
    fn to_id(&self) -> String {
        self.as_ref().map(ToId::to_id).unwrap_or_default()
    }
}

macro_rules! impl_to_id_for_numbers {
    ($($t:ty),*) => {
        $(
            impl ToId for $t {
                fn to_id(&self) -> String {
                    to_id(&self.to_string())
                }
            }
        )*
    };
}

impl_to_id_for_numbers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl ToId for Value {
    fn to_id(&self) -> String {
        match self {
            Value::String(s) => to_id(s),
            Value::Number(n) => to_id(&n.to_string()),
            Value::Object(map) => {
                // A truthy `id` wins over `userid`, as in the client.
                let field = map
                    .get("id")
                    .filter(|v| is_truthy(v))
                    .or_else(|| map.get("userid").filter(|v| is_truthy(v)));
                match field {
                    Some(Value::String(s)) => to_id(s),
                    Some(Value::Number(n)) => to_id(&n.to_string()),
                    _ => String::new(),
                }
            }
            _ => String::new(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_id_strips_non_alphanumerics() {
        assert_eq!(to_id("Charizard-Mega-X"), "charizardmegax");
        assert_eq!(to_id("Mr. Mime"), "mrmime");
        assert_eq!(to_id("Flabébé"), "flabb");
        assert_eq!(to_id(""), "");
    }

    #[test]
    fn test_to_id_numbers_and_options() {
        assert_eq!(25u32.to_id(), "25");
        assert_eq!((-3i32).to_id(), "3");
        assert_eq!(None::<&str>.to_id(), "");
        assert_eq!(Some("Pikachu").to_id(), "pikachu");
    }

    #[test]
    fn test_to_id_json_values() {
        assert_eq!(json!({"id": "Pikachu"}).to_id(), "pikachu");
        assert_eq!(json!({"userid": "Zarel"}).to_id(), "zarel");
        assert_eq!(json!({"id": "", "userid": "Zarel"}).to_id(), "zarel");
        assert_eq!(json!(null).to_id(), "");
        assert_eq!(json!(true).to_id(), "");
        assert_eq!(json!(["pikachu"]).to_id(), "");
        assert_eq!(json!(151).to_id(), "151");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(sanitize_name("Pikachu"), "Pikachu");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fire"), "Fire");
        assert_eq!(capitalize(""), "");
    }
}
