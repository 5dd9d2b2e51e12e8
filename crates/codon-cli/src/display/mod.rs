//! Affichage des résultats

pub mod stats;
