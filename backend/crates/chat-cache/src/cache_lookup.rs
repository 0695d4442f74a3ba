/// Outcome of a typed cache read.
///
/// `Corrupted` means the key held bytes that no longer decode as `T`.
/// Callers usually treat it like `Miss` but it is kept distinct so it can
/// be logged and counted separately.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
    Corrupted(String),
}

impl<T> CacheLookup<T> {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Collapse `Miss` and `Corrupted` into `None`
    pub fn into_hit(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Corrupted(_) => None,
        }
    }
}
