//! Conversion ADN <-> ARN par substitution T <-> U

use crate::alphabet::Base;

/// Remplace chaque `T` par `U`, les autres bases sont inchangées
pub fn dna_to_rna<I>(sequence: I) -> impl Iterator<Item = Base>
where
    I: IntoIterator<Item = Base>,
{
    sequence
        .into_iter()
        .map(|b| if b == Base::T { Base::U } else { b })
}

/// Remplace chaque `U` par `T`, les autres bases sont inchangées
pub fn rna_to_dna<I>(sequence: I) -> impl Iterator<Item = Base>
where
    I: IntoIterator<Item = Base>,
{
    sequence
        .into_iter()
        .map(|b| if b == Base::U { Base::T } else { b })
}
