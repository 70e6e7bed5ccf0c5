use crate::model::{EditSession, FormDraft, Product};

use super::StoreError;

/// Everything the Presentation Layer renders.
///
/// Obtained through [`ProductStore::snapshot`](super::ProductStore::snapshot);
/// the store itself is the only writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// The authoritative list, as last fetched from the server.
    pub products: Vec<Product>,
    pub draft: FormDraft,
    pub session: EditSession,
    pub error: Option<String>,
    pub success: Option<String>,
    // In-flight counts; overlapping operations each hold one.
    loads: usize,
    submits: usize,
}

impl StoreState {
    pub fn is_loading(&self) -> bool {
        self.loads > 0
    }

    pub fn is_submitting(&self) -> bool {
        self.submits > 0
    }

    pub(crate) fn begin_load(&mut self) {
        self.loads += 1;
    }

    pub(crate) fn end_load(&mut self) {
        self.loads = self.loads.saturating_sub(1);
    }

    pub(crate) fn begin_submit(&mut self) {
        self.submits += 1;
    }

    pub(crate) fn end_submit(&mut self) {
        self.submits = self.submits.saturating_sub(1);
    }

    pub(crate) fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub(crate) fn fail(&mut self, error: &StoreError) {
        self.success = None;
        self.error = Some(error.to_string());
    }

    pub(crate) fn succeed(&mut self, message: &str) {
        self.error = None;
        self.success = Some(message.to_string());
    }

    pub(crate) fn reset_form(&mut self) {
        self.draft = FormDraft::default();
        self.session = EditSession::Creating;
    }
}
