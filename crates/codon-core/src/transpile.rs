//! Réécriture d'une suite de codons à l'aide d'une table de substitution

use crate::codon::Codon;
use crate::error::Result;
use crate::table::SubstitutionTable;

/// Itérateur de codons transpilés
///
/// Un codon présent dans la table est remplacé, un codon absent est
/// conservé tel quel. Les erreurs en amont sont transmises sans
/// modification.
#[derive(Debug)]
pub struct Transpiled<'t, I> {
    table: &'t SubstitutionTable,
    codons: I,
    substituted: usize,
    passed_through: usize,
}

impl<'t, I> Transpiled<'t, I> {
    /// Nombre de codons remplacés jusqu'ici
    pub fn substituted(&self) -> usize {
        self.substituted
    }

    /// Nombre de codons conservés jusqu'ici
    pub fn passed_through(&self) -> usize {
        self.passed_through
    }
}

impl<'t, I> Iterator for Transpiled<'t, I>
where
    I: Iterator<Item = Result<Codon>>,
{
    type Item = Result<Codon>;

    fn next(&mut self) -> Option<Self::Item> {
        let codon = match self.codons.next()? {
            Ok(codon) => codon,
            Err(e) => return Some(Err(e)),
        };

        match self.table.get(&codon) {
            Some(target) => {
                self.substituted += 1;
                Some(Ok(target))
            }
            None => {
                self.passed_through += 1;
                Some(Ok(codon))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.codons.size_hint()
    }
}

/// Transpile une suite de codons
pub fn transpile<I>(table: &SubstitutionTable, codons: I) -> Transpiled<'_, I::IntoIter>
where
    I: IntoIterator<Item = Result<Codon>>,
{
    Transpiled {
        table,
        codons: codons.into_iter(),
        substituted: 0,
        passed_through: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::codon::partition;
    use crate::error::TranspileError;
    use crate::sequence::filter_bases;

    fn codon(s: &str) -> Codon {
        Codon::parse(s, Alphabet::Dna).unwrap()
    }

    #[test]
    fn test_substitution_and_pass_through() {
        let table: SubstitutionTable = [(codon("ATG"), codon("AAA"))].into_iter().collect();
        let mut transpiled = transpile(&table, partition(filter_bases("ATGTCA", Alphabet::Dna)));

        let result: Vec<String> = transpiled
            .by_ref()
            .map(|c| c.unwrap().to_string())
            .collect();
        assert_eq!(result, vec!["AAA", "TCA"]);
        assert_eq!(transpiled.substituted(), 1);
        assert_eq!(transpiled.passed_through(), 1);
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = SubstitutionTable::new();
        let codons = vec![codon("GGG"), codon("CCC")];
        let result: Vec<Codon> = transpile(&table, codons.clone().into_iter().map(Ok))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(result, codons);
    }

    #[test]
    fn test_no_chained_substitution() {
        let table: SubstitutionTable = [
            (codon("AAA"), codon("CCC")),
            (codon("CCC"), codon("GGG")),
        ]
        .into_iter()
        .collect();
        let result: Vec<String> = transpile(&table, vec![Ok(codon("AAA"))])
            .map(|c| c.unwrap().to_string())
            .collect();
        assert_eq!(result, vec!["CCC"]);
    }

    #[test]
    fn test_error_propagates() {
        let table = SubstitutionTable::new();
        let result: Result<Vec<Codon>> =
            transpile(&table, partition(filter_bases("ATGA", Alphabet::Dna))).collect();
        assert!(matches!(
            result,
            Err(TranspileError::UnalignedSequence { remainder: 1 })
        ));
    }
}
