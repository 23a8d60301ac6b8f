use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::normalizer::{Ingredient, IngredientList};
use super::vocabulary::{TermVocabulary, VocabularyKind};

/// A vocabulary match on one ingredient token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalHit {
    pub term: &'static str,
    pub ingredient: String,
    pub position: usize,
}

/// Every vocabulary match for one ingredient list, fixed once detection has run.
#[derive(Debug, Clone)]
pub struct SignalReport {
    ingredients: IngredientList,
    hits: BTreeMap<VocabularyKind, Vec<SignalHit>>,
    memberships: Vec<BTreeSet<VocabularyKind>>,
}

const NO_KINDS: &BTreeSet<VocabularyKind> = &BTreeSet::new();

/// Scan every token against every vocabulary.
///
/// Hits are recorded per vocabulary in label order with one hit per distinct
/// ingredient name; the first position wins for repeated names.
pub fn detect(ingredients: &IngredientList, vocabularies: &[&TermVocabulary]) -> SignalReport {
    let mut hits: BTreeMap<VocabularyKind, Vec<SignalHit>> = BTreeMap::new();
    let mut memberships = vec![BTreeSet::new(); ingredients.len()];

    for ingredient in ingredients.iter() {
        for vocabulary in vocabularies {
            let Some(term) = vocabulary.find(&ingredient.name) else {
                continue;
            };

            if let Some(kinds) = memberships.get_mut(ingredient.position - 1) {
                kinds.insert(vocabulary.kind);
            }

            let entry = hits.entry(vocabulary.kind).or_default();
            if entry.iter().all(|hit| hit.ingredient != ingredient.name) {
                entry.push(SignalHit {
                    term,
                    ingredient: ingredient.name.clone(),
                    position: ingredient.position,
                });
            }
        }
    }

    SignalReport {
        ingredients: ingredients.clone(),
        hits,
        memberships,
    }
}

impl SignalReport {
    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn first_ingredient(&self) -> Option<&Ingredient> {
        self.ingredients.first()
    }

    pub fn hits(&self, kind: VocabularyKind) -> &[SignalHit] {
        self.hits.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn any(&self, kinds: &[VocabularyKind]) -> bool {
        kinds.iter().any(|kind| !self.hits(*kind).is_empty())
    }

    /// Union of hits across `kinds`, one per ingredient name, in label order.
    pub fn hits_for(&self, kinds: &[VocabularyKind]) -> Vec<&SignalHit> {
        let mut merged: Vec<&SignalHit> = Vec::new();
        for kind in kinds {
            for hit in self.hits(*kind) {
                if merged
                    .iter()
                    .all(|existing| existing.ingredient != hit.ingredient)
                {
                    merged.push(hit);
                }
            }
        }
        merged.sort_by_key(|hit| hit.position);
        merged
    }

    /// Number of distinct ingredient tokens matching any of `kinds`.
    pub fn distinct_count(&self, kinds: &[VocabularyKind]) -> usize {
        self.hits_for(kinds).len()
    }

    pub fn kinds_at(&self, position: usize) -> &BTreeSet<VocabularyKind> {
        position
            .checked_sub(1)
            .and_then(|index| self.memberships.get(index))
            .unwrap_or(NO_KINDS)
    }

    pub fn is_member(&self, position: usize, kind: VocabularyKind) -> bool {
        self.kinds_at(position).contains(&kind)
    }

    pub fn matches_any(&self, position: usize, kinds: &[VocabularyKind]) -> bool {
        kinds.iter().any(|kind| self.is_member(position, *kind))
    }

    /// Distinct hit names for `kinds`, in label order.
    pub fn names_for(&self, kinds: &[VocabularyKind]) -> Vec<String> {
        self.hits_for(kinds)
            .into_iter()
            .map(|hit| hit.ingredient.clone())
            .collect()
    }

    /// Tokens that matched no vocabulary at all.
    pub fn unrecognized(&self) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|ingredient| self.kinds_at(ingredient.position).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalizer::normalize;
    use crate::scoring::vocabulary::standard_vocabularies;

    fn report(text: &str) -> SignalReport {
        let list = normalize(text).expect("non-empty list");
        detect(&list, &standard_vocabularies())
    }

    #[test]
    fn one_token_can_match_several_vocabularies() {
        let signals = report("apples, fruit juice concentrate");

        assert!(signals.is_member(2, VocabularyKind::Sugars));
        assert!(signals.is_member(2, VocabularyKind::UmbrellaTerms));
        assert!(!signals.is_member(2, VocabularyKind::WholeFoods));
    }

    #[test]
    fn positions_follow_the_label_not_detection_order() {
        let signals = report("water, almonds, sugar, dextrose");

        let sugars: Vec<usize> = signals
            .hits(VocabularyKind::Sugars)
            .iter()
            .map(|hit| hit.position)
            .collect();
        assert_eq!(sugars, vec![3, 4]);
        assert_eq!(signals.hits(VocabularyKind::NutsSeeds)[0].position, 2);
    }

    #[test]
    fn repeated_names_count_once() {
        let signals = report("sugar, oats, sugar");

        assert_eq!(signals.distinct_count(&[VocabularyKind::Sugars]), 1);
        assert!(signals.is_member(3, VocabularyKind::Sugars));
    }

    #[test]
    fn unrecognized_tokens_are_listed() {
        let signals = report("oats, quuxberry");

        let names: Vec<&str> = signals
            .unrecognized()
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect();
        assert_eq!(names, vec!["quuxberry"]);
    }
}
