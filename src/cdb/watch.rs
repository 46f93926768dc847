use {super::ConstraintRef, crate::types::*};

/// API for 'watcher list' like `register`, `detach_with` and so on.
pub trait WatchDBIF {
    /// add a constraint to this watcher list.
    fn register(&mut self, cr: ConstraintRef);
    /// remove a constraint from the watcher list. *O(n)* operation.
    fn detach_with(&mut self, cr: ConstraintRef);
}

impl WatchDBIF for Vec<ConstraintRef> {
    #[inline]
    fn register(&mut self, cr: ConstraintRef) {
        self.push(cr);
    }
    fn detach_with(&mut self, cr: ConstraintRef) {
        self.delete_unstable(|w| *w == cr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdb::ClauseId;

    #[test]
    fn test_detach_with() {
        let c = |i: usize| ConstraintRef::Clause(ClauseId::from(i));
        let mut ws: Vec<ConstraintRef> = Vec::new();
        ws.register(c(1));
        ws.register(c(2));
        ws.register(c(3));
        ws.detach_with(c(1));
        assert_eq!(ws.len(), 2);
        assert!(!ws.contains(&c(1)));
        ws.detach_with(c(9));
        assert_eq!(ws.len(), 2);
    }
}
