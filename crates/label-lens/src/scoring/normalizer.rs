use serde::Serialize;

use super::ScoreError;

/// Pairs of words that stay one ingredient even when joined by "and".
const JOINED_WITH_AND: &[(&str, &str)] = &[
    ("mono", "diglycerides"),
    ("mono", "di"),
    ("natural", "artificial"),
];

const LABEL_HEADINGS: &[&str] = &["ingredient", "ingredients"];

/// One canonical ingredient token and its 1-based position on the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub position: usize,
    pub name: String,
}

/// Ordered, normalized ingredient tokens. Position 1 is the dominant-by-mass ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<Ingredient>,
}

impl IngredientList {
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a list produced by [`normalize`].
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Ingredient> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
    }

    pub fn first(&self) -> Option<&Ingredient> {
        self.items.first()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Render the list back into label text; normalizing it again yields the same list.
    pub fn to_label_text(&self) -> String {
        self.names().join(", ")
    }
}

/// Turn free-form label text into an ordered ingredient list.
pub fn normalize(raw: &str) -> Result<IngredientList, ScoreError> {
    let cleaned = clean_text(raw, true);
    let mut names = Vec::new();

    for segment in cleaned.split(',') {
        let words: Vec<&str> = segment.split_whitespace().collect();
        let mut current: Vec<&str> = Vec::new();

        for (index, &word) in words.iter().enumerate() {
            if word == "and" {
                if !joins_ingredient(&words, index) {
                    push_token(&mut names, &mut current);
                }
                continue;
            }
            current.push(word);
        }
        push_token(&mut names, &mut current);
    }

    strip_heading(&mut names);

    if names.is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    let items = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Ingredient {
            position: index + 1,
            name,
        })
        .collect();

    Ok(IngredientList { items })
}

/// Canonical form of a single phrase: lower-case, punctuation-free, single-spaced.
pub(crate) fn normalize_name(value: &str) -> String {
    clean_text(value, false)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_text(raw: &str, keep_separators: bool) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars().flat_map(char::to_lowercase) {
        match ch {
            '\u{feff}' | '\u{200b}' | '\'' | '\u{2019}' => {}
            ',' | ';' | '\n' | '\r' if keep_separators => cleaned.push(','),
            ch if ch.is_alphanumeric() => cleaned.push(ch),
            _ => cleaned.push(' '),
        }
    }
    cleaned
}

fn joins_ingredient(words: &[&str], index: usize) -> bool {
    let (Some(before), Some(after)) = (
        index.checked_sub(1).and_then(|i| words.get(i)),
        words.get(index + 1),
    ) else {
        return false;
    };

    JOINED_WITH_AND
        .iter()
        .any(|(left, right)| before == left && after == right)
}

fn push_token(names: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        names.push(current.join(" "));
        current.clear();
    }
}

/// Drops leading heading words until the first token is an ingredient.
fn strip_heading(names: &mut Vec<String>) {
    while let Some(first) = names.first_mut() {
        let words: Vec<&str> = first.split(' ').collect();
        let skipped = words
            .iter()
            .take_while(|word| LABEL_HEADINGS.contains(*word))
            .count();
        if skipped == 0 {
            return;
        }

        if skipped == words.len() {
            names.remove(0);
        } else {
            *first = words[skipped..].join(" ");
            return;
        }
    }
}
