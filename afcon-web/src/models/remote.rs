/// Data fetched by a page: still loading, ready, or a message to show
/// instead of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Loading
    }
}
