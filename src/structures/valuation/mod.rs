/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology.
- Each non-zero index of the vector is interpreted as an atom, though most interaction is through the valuation trait.

```rust
# use ht_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);
```
*/

mod slice_impl;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator through all (Atom, Value) pairs (excluding top).
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;
}
