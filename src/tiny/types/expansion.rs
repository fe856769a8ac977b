use super::core::Type;

impl Type {
    /// Unfolds a `Rec` one level, replacing its variable with the whole `Rec`.
    /// Any other type is returned as is.
    pub fn unfold(&self) -> Self {
        match self {
            Self::Rec { name, body } => body.as_ref().clone().substitute(name, self),
            _ => self.clone(),
        }
    }

    /// Head-normalizes the type: unfolds until the outer constructor is not a `Rec`.
    ///
    /// An unguarded type such as `rec a. a` never reaches a non-`Rec` head. The unfolding
    /// stops at the first head that repeats and returns it, so the result is still `Rec`.
    pub fn simplify(&self) -> Self {
        let mut typ = self.clone();
        let mut heads = Vec::new();
        while typ.is_rec() {
            if heads.contains(&typ) {
                tracing::trace!("unguarded recursive type: {}", typ);
                break;
            }
            let next = typ.unfold();
            heads.push(typ);
            typ = next;
        }
        typ
    }

    /// Whether the type never unfolds to a concrete constructor, such as `rec a. a`.
    pub fn is_unguarded(&self) -> bool {
        self.is_rec() && self.simplify().is_rec()
    }
}
