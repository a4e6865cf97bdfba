//! Casing templates.

/// Letter-case pattern of a template word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Casing {
    /// `ORDERS`
    Upper,
    /// `orders`
    Lower,
    /// `Orders`, `Order_Items`: each word capitalized.
    Title,
    /// Anything else. Values are left as given.
    Mixed,
}

impl Casing {
    /// Detect the casing of `template` from its letters.
    ///
    /// Returns `None` when the template has no cased letters, e.g. `1` or `*`.
    pub fn detect(template: &str) -> Option<Casing> {
        let mut upper = false;
        let mut lower = false;
        let mut title = true;

        for word in words(template) {
            let mut letters = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
            if let Some(first) = letters.next() {
                upper |= first.is_uppercase();
                lower |= first.is_lowercase();
                title &= first.is_uppercase();
            }
            for c in letters {
                upper |= c.is_uppercase();
                lower |= c.is_lowercase();
                title &= c.is_lowercase();
            }
        }

        match (upper, lower) {
            (false, false) => None,
            (true, false) => Some(Casing::Upper),
            (false, true) => Some(Casing::Lower),
            (true, true) if title => Some(Casing::Title),
            (true, true) => Some(Casing::Mixed),
        }
    }

    /// Recase `value` to this pattern.
    pub fn apply(self, value: &str) -> String {
        match self {
            Casing::Upper => value.to_uppercase(),
            Casing::Lower => value.to_lowercase(),
            Casing::Mixed => value.to_owned(),
            Casing::Title => {
                let mut out = String::with_capacity(value.len());
                let mut at_word_start = true;
                for c in value.chars() {
                    if c.is_alphanumeric() {
                        if at_word_start {
                            out.extend(c.to_uppercase());
                        } else {
                            out.extend(c.to_lowercase());
                        }
                        at_word_start = false;
                    } else {
                        out.push(c);
                        at_word_start = true;
                    }
                }
                out
            }
        }
    }
}

/// Maximal runs of alphanumeric characters.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}
