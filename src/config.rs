/// How [`Rbt::gte`](crate::Rbt::gte) treats a lower bound that is equal to
/// the largest key in the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GteMode {
    /// Short-circuit to an empty result when lower bound is greater than
    /// or *equal* to the maximum key. With `lb == max` the maximum entry
    /// is left out of the result, unlike [`Rbt::lte`](crate::Rbt::lte).
    Compat,
    /// Short-circuit only when lower bound is strictly greater than the
    /// maximum key, `lb == max` returns the maximum entry.
    Inclusive,
}

impl Default for GteMode {
    fn default() -> Self {
        GteMode::Compat
    }
}

/// Configuration for [`Rbt`](crate::Rbt) instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub gte_mode: GteMode,
}

impl Config {
    /// Set the boundary behaviour for threshold queries, refer [`GteMode`].
    pub fn set_gte_mode(&mut self, mode: GteMode) -> &mut Self {
        self.gte_mode = mode;
        self
    }
}
