//! Raw values of the "add inventory" form and their conversion to a payload.

use meatkonnex_core::MeatPartId;
use meatkonnex_inventory::NewInventory;

/// Field values as the form controls hold them (strings, unparsed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub meat_part: String,
    pub stock_lb: String,
    /// `"true"` or `"false"`, as the seasoned `<select>` reports it.
    pub seasoned: String,
    pub location: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            meat_part: String::new(),
            stock_lb: String::new(),
            seasoned: "false".to_string(),
            location: String::new(),
        }
    }
}

impl FormInput {
    /// The chosen meat part, if any. The placeholder option, unparsable
    /// values and id `0` (never a database key) all mean "nothing selected".
    pub fn selected_meat_part(&self) -> Option<MeatPartId> {
        self.meat_part
            .parse::<MeatPartId>()
            .ok()
            .filter(|id| id.get() != 0)
    }

    /// Stock in pounds, converted the way the browser's `Number()` does.
    ///
    /// A blank field counts as zero. `0x`/`0o`/`0b` prefixes are integers in
    /// that radix and `Infinity` may carry a sign. Anything else that is not
    /// a plain decimal literal yields NaN.
    pub fn stock(&self) -> f64 {
        let raw = self.stock_lb.trim();
        if raw.is_empty() {
            return 0.0;
        }

        let radix = match raw.get(..2) {
            Some("0x" | "0X") => Some(16),
            Some("0o" | "0O") => Some(8),
            Some("0b" | "0B") => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&raw[2..], radix);
        }

        match raw {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            // Keeps out Rust-only spellings such as "inf" and "NaN".
            _ if raw
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')) =>
            {
                raw.parse().unwrap_or(f64::NAN)
            }
            _ => f64::NAN,
        }
    }

    pub fn is_seasoned(&self) -> bool {
        self.seasoned == "true"
    }

    pub fn to_payload(&self, meat_part_id: MeatPartId) -> NewInventory {
        NewInventory::new(meat_part_id, self.stock(), self.is_seasoned(), self.location.clone())
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}
