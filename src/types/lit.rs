/// Literal encoding
use {
    crate::types::VarId,
    std::{
        fmt,
        ops::{Index, IndexMut, Not},
    },
};

/// Lifted bool: `Some(true)`, `Some(false)` or `None` for *undefined*.
pub type Lbool = Option<bool>;

/// Literal encoded on `u32` as `2 * var + (1 if negated)`.
/// So the two literals of a var occupy adjacent indices.
///
/// # Examples
///
/// ```
/// use trailsat::types::*;
/// let l = Lit::from((3, false));
/// assert_eq!(usize::from(l), 6);
/// assert_eq!(usize::from(!l), 7);
/// assert_eq!(l.vi(), 3);
/// assert_eq!(!!l, l);
/// assert_eq!(Lit::from(-4i32), !l);
/// assert_eq!(i32::from(!l), -4);
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Lit {
    ordinal: u32,
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", i32::from(self))
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", i32::from(self))
    }
}

/// convert literals to `[i32]` (for debug).
pub fn i32s(v: &[Lit]) -> Vec<i32> {
    v.iter().map(i32::from).collect::<Vec<_>>()
}

impl From<(VarId, bool)> for Lit {
    /// make a literal from a var and its *negation* flag.
    #[inline]
    fn from((vi, negated): (VarId, bool)) -> Self {
        Lit {
            ordinal: ((vi as u32) << 1) | (negated as u32),
        }
    }
}

impl From<usize> for Lit {
    /// decode an index made by `usize::from(lit)`.
    #[inline]
    fn from(l: usize) -> Self {
        Lit { ordinal: l as u32 }
    }
}

impl From<i32> for Lit {
    /// convert a 1-origin DIMACS integer; `-3` is the negation of var 2.
    #[inline]
    fn from(x: i32) -> Self {
        debug_assert!(x != 0, "0 is not a literal");
        Lit::from(((x.unsigned_abs() - 1) as VarId, x < 0))
    }
}

impl From<Lit> for usize {
    #[inline]
    fn from(l: Lit) -> usize {
        l.ordinal as usize
    }
}

impl From<&Lit> for usize {
    #[inline]
    fn from(l: &Lit) -> usize {
        l.ordinal as usize
    }
}

impl From<Lit> for i32 {
    /// the 1-origin DIMACS integer of a literal.
    #[inline]
    fn from(l: Lit) -> i32 {
        let v = (l.vi() + 1) as i32;
        if l.is_negated() {
            -v
        } else {
            v
        }
    }
}

impl From<&Lit> for i32 {
    #[inline]
    fn from(l: &Lit) -> i32 {
        i32::from(*l)
    }
}

impl From<Lit> for bool {
    /// the value of the var which makes the literal true.
    #[inline]
    fn from(l: Lit) -> bool {
        !l.is_negated()
    }
}

impl Not for Lit {
    type Output = Lit;
    #[inline]
    fn not(self) -> Self {
        Lit {
            ordinal: self.ordinal ^ 1,
        }
    }
}

impl<T> Index<Lit> for Vec<T> {
    type Output = T;
    #[inline]
    fn index(&self, l: Lit) -> &Self::Output {
        &self[usize::from(l)]
    }
}

impl<T> IndexMut<Lit> for Vec<T> {
    #[inline]
    fn index_mut(&mut self, l: Lit) -> &mut Self::Output {
        &mut self[usize::from(l)]
    }
}

impl Lit {
    /// return the var index.
    #[inline]
    pub fn vi(self) -> VarId {
        (self.ordinal >> 1) as VarId
    }
    /// return `true` if the literal is the negation of its var.
    #[inline]
    pub fn is_negated(self) -> bool {
        self.ordinal & 1 == 1
    }
    /// return the value of this literal under the value of its var.
    #[inline]
    pub fn lifted(self, var_value: Lbool) -> Lbool {
        var_value.map(|b| b != self.is_negated())
    }
}
