use crate::{TokenId, TokenList, TokenValue};

/// A dotted name kept as its separate parts: `db.schema.table` is
/// `[db, schema, table]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MultiPartValue {
    parts: Vec<TokenValue>,
}

impl MultiPartValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: TokenValue) {
        self.parts.push(part);
    }

    #[inline]
    pub fn parts(&self) -> &[TokenValue] {
        &self.parts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Collect a dotted name starting at `first`.
    ///
    /// Parts are name tokens separated by `.` symbols with nothing in
    /// between. Returns the parts and the id of the last part consumed, or
    /// `None` when `first` is not a name token.
    pub fn collect(list: &TokenList<'_>, first: TokenId) -> Option<(Self, TokenId)> {
        let token = list.get(first)?;
        if !token.kind().is_name_part() {
            return None;
        }
        let mut value = MultiPartValue::new();
        value.push(TokenValue::from(token.effective_text(list.source())));
        let mut last = first;

        while let Some(dot) = list.next(last) {
            if !list.text(dot).is_some_and(|text| text == ".") {
                break;
            }
            let Some(part) = list.next(dot) else { break };
            match list.get(part) {
                Some(token) if token.kind().is_name_part() => {
                    value.push(TokenValue::from(token.effective_text(list.source())));
                    last = part;
                }
                _ => break,
            }
        }
        Some((value, last))
    }

    /// Join the parts back with `.`.
    pub fn join(&self) -> TokenValue {
        let mut joined = TokenValue::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                joined.append(".");
            }
            joined.append_value(part);
        }
        joined
    }
}
