//! Client-side form state: the raw text being typed and which product it targets.

use super::product::{Product, ProductId};

/// Unvalidated form contents, kept as text so half-typed input like `"12."`
/// can be shown back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub description: String,
}

/// Identifies a single editable field of a [`FormDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    Stock,
    Description,
}

impl FormDraft {
    /// Fills a draft with the current values of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Stock => self.stock = value,
            DraftField::Description => self.description = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Creating,
    Editing(ProductId),
}

impl EditSession {
    pub fn editing_id(&self) -> Option<&ProductId> {
        match self {
            EditSession::Creating => None,
            EditSession::Editing(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_product_renders_numbers_as_text() {
        let product = Product::new(3, "Monitor", 1199.0, 25).with_description("27 inch");
        let draft = FormDraft::from_product(&product);
        assert_eq!(draft.name, "Monitor");
        assert_eq!(draft.price, "1199");
        assert_eq!(draft.stock, "25");
        assert_eq!(draft.description, "27 inch");

        let draft = FormDraft::from_product(&Product::new(4, "Pen", 1.5, 10));
        assert_eq!(draft.price, "1.5");
    }

    #[test]
    fn test_set_touches_only_the_named_field() {
        let mut draft = FormDraft::default();
        draft.set(DraftField::Price, "12.");
        assert_eq!(draft.price, "12.");
        assert!(draft.name.is_empty());
        assert!(!draft.is_empty());
    }
}
