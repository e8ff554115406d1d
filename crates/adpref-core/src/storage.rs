use crate::items::RatedItem;

/// Load/save pair for the rated-item history.
///
/// The collection is append-only and rewritten in full on every save. The
/// analysis and recommendation code never calls this trait itself; front
/// ends load the history and pass it in by reference.
pub trait Storage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every stored item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the history exists but cannot be read.
    fn load_items(&self) -> Result<Vec<RatedItem>, Self::Error>;

    /// Append one item and persist the whole collection.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the collection cannot be written.
    fn append_and_persist(&self, item: RatedItem) -> Result<(), Self::Error> {
        self.append_all_and_persist(vec![item])
    }

    /// Append several items and persist once.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the collection cannot be written.
    fn append_all_and_persist(&self, items: Vec<RatedItem>) -> Result<(), Self::Error>;
}
