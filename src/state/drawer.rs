//! Detail-drawer selection state.

/// Per-page selection slot driving a detail drawer.
///
/// The drawer is open exactly when a record is selected; modeling that as a
/// tagged variant makes "one open drawer holding one record" structurally
/// impossible to violate. Selecting while open replaces the record in a
/// single assignment, so no closed intermediate state is ever observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Drawer<T> {
    #[default]
    Closed,
    Open(T),
}

impl<T> Drawer<T> {
    /// Select a record, opening the drawer or replacing the current record.
    pub fn open(&mut self, record: T) {
        *self = Drawer::Open(record);
    }

    /// Close the drawer (explicit close, backdrop dismiss).
    pub fn close(&mut self) {
        *self = Drawer::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Drawer::Open(_))
    }

    /// The selected record, if any.
    pub fn selected(&self) -> Option<&T> {
        match self {
            Drawer::Open(record) => Some(record),
            Drawer::Closed => None,
        }
    }
}
