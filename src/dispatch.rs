use std::sync::OnceLock;

use crate::{flash_routines::FlashRoutine, property::PropertyId, StateError};

static GLOBAL_TABLE: OnceLock<FlashDispatchTable> = OnceLock::new();

/// Symmetric lookup from an unordered property pair to the flash routine that solves it.
///
/// Only the upper triangle is registered; construction mirrors it so
/// `resolve(a, b) == resolve(b, a)`. The diagonal is always empty.
///
/// Pairs with quality other than T and P, as well as (H, E), have no backend
/// routine and stay unsupported. (H, Q) in particular is not an omission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashDispatchTable {
    table: [[Option<FlashRoutine>; 7]; 7],
}

impl FlashDispatchTable {
    pub fn new() -> Self {
        let mut table = [[None; 7]; 7];

        for routine in FlashRoutine::ALL {
            let [a, b] = routine.inputs();
            let (i, j) = (a.index().min(b.index()), a.index().max(b.index()));
            table[i][j] = Some(routine);
        }

        for i in 0..7 {
            for j in (i + 1)..7 {
                table[j][i] = table[i][j];
            }
        }

        Self { table }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static FlashDispatchTable {
        GLOBAL_TABLE.get_or_init(FlashDispatchTable::new)
    }

    pub fn resolve(&self, a: PropertyId, b: PropertyId) -> Option<FlashRoutine> {
        self.table[a.index()][b.index()]
    }

    /// Resolves a pair of property letters, e.g. `('P', 'H')`.
    ///
    /// # Errors
    ///
    /// - Returns `StateError::UnsupportedCombination` if either letter is outside
    ///   `TPDHSEQ` or no routine is registered for the pair.
    pub fn resolve_symbols(&self, a: char, b: char) -> Result<FlashRoutine, StateError> {
        let unsupported = || StateError::UnsupportedCombination { a, b };
        let ia = PropertyId::from_symbol(a).ok_or_else(unsupported)?;
        let ib = PropertyId::from_symbol(b).ok_or_else(unsupported)?;
        self.resolve(ia, ib).ok_or_else(unsupported)
    }

    /// Iterates over the supported unordered pairs in alphabet order.
    pub fn supported_pairs(&self) -> impl Iterator<Item = (PropertyId, PropertyId, FlashRoutine)> + '_ {
        PropertyId::ALL.into_iter().flat_map(move |a| {
            PropertyId::ALL
                .into_iter()
                .filter(move |b| a.index() < b.index())
                .filter_map(move |b| self.resolve(a, b).map(|routine| (a, b, routine)))
        })
    }
}

impl Default for FlashDispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PropertyId::*;

    #[test]
    fn table_is_symmetric() {
        let table = FlashDispatchTable::new();
        for a in PropertyId::ALL {
            for b in PropertyId::ALL {
                assert_eq!(table.resolve(a, b), table.resolve(b, a), "{a}{b}");
            }
        }
    }

    #[test]
    fn diagonal_is_empty() {
        let table = FlashDispatchTable::new();
        for id in PropertyId::ALL {
            assert_eq!(table.resolve(id, id), None);
        }
    }

    #[test]
    fn registered_pairs() {
        let table = FlashDispatchTable::new();
        let expected = [
            (T, P, FlashRoutine::TP),
            (T, D, FlashRoutine::TD),
            (T, H, FlashRoutine::TH),
            (T, S, FlashRoutine::TS),
            (T, E, FlashRoutine::TE),
            (T, Q, FlashRoutine::TQ),
            (P, D, FlashRoutine::PD),
            (P, H, FlashRoutine::PH),
            (P, S, FlashRoutine::PS),
            (P, E, FlashRoutine::PE),
            (P, Q, FlashRoutine::PQ),
            (D, H, FlashRoutine::DH),
            (D, S, FlashRoutine::DS),
            (D, E, FlashRoutine::DE),
            (H, S, FlashRoutine::HS),
            (S, E, FlashRoutine::ES),
        ];
        for (a, b, routine) in expected {
            assert_eq!(table.resolve(a, b), Some(routine), "{a}{b}");
        }
        assert_eq!(table.supported_pairs().count(), expected.len());
    }

    #[test]
    fn unregistered_pairs() {
        let table = FlashDispatchTable::new();
        for (a, b) in [(H, Q), (D, Q), (S, Q), (E, Q), (H, E)] {
            assert_eq!(table.resolve(a, b), None, "{a}{b}");
            assert_eq!(table.resolve(b, a), None, "{b}{a}");
        }
    }

    #[test]
    fn resolves_letters() {
        let table = FlashDispatchTable::global();
        assert_eq!(table.resolve_symbols('H', 'P').unwrap(), FlashRoutine::PH);
        assert_eq!(table.resolve_symbols('s', 'e').unwrap(), FlashRoutine::ES);
        assert_eq!(
            table.resolve_symbols('X', 'P'),
            Err(StateError::UnsupportedCombination { a: 'X', b: 'P' })
        );
        assert_eq!(
            table.resolve_symbols('H', 'Q'),
            Err(StateError::UnsupportedCombination { a: 'H', b: 'Q' })
        );
        assert!(table.resolve_symbols('T', 'T').is_err());
    }
}
