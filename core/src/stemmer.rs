//! Simplified suffix-stripping stemmer.
//!
//! Rules are grouped into five ordered stages. The first rule that matches,
//! in any stage, is applied and the word is returned: a word handled by the
//! plural stage never reaches the derivational stages. This single-fire
//! behaviour is part of the contract and differs from a cascading Porter
//! stemmer; term matrices built with stemming depend on it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Replace the suffix (possibly with nothing).
    Replace(&'static str),
    /// Return the word untouched.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    Always,
    /// Word length, in characters, must exceed this.
    LongerThan(usize),
    /// Length left after removing the suffix must exceed this.
    StemLongerThan(usize),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    suffix: &'static str,
    action: Action,
    guard: Guard,
}

impl Rule {
    const fn replace(suffix: &'static str, with: &'static str) -> Self {
        Self { suffix, action: Action::Replace(with), guard: Guard::Always }
    }

    const fn strip(suffix: &'static str) -> Self {
        Self::replace(suffix, "")
    }

    const fn keep(suffix: &'static str) -> Self {
        Self { suffix, action: Action::Keep, guard: Guard::Always }
    }

    const fn when(self, guard: Guard) -> Self {
        Self { guard, ..self }
    }

    fn matches(&self, word: &str, len: usize) -> bool {
        if !word.ends_with(self.suffix) {
            return false;
        }
        match self.guard {
            Guard::Always => true,
            Guard::LongerThan(n) => len > n,
            Guard::StemLongerThan(n) => len - self.suffix.len() > n,
        }
    }

    fn apply(&self, mut word: String) -> String {
        if let Action::Replace(with) = self.action {
            word.truncate(word.len() - self.suffix.len());
            word.push_str(with);
        }
        word
    }
}

struct Stage {
    name: &'static str,
    rules: &'static [Rule],
}

const PLURALS: &[Rule] = &[
    Rule::replace("sses", "ss"),
    Rule::replace("ies", "y"),
    Rule::keep("ss"),
    Rule::strip("s").when(Guard::LongerThan(3)),
];

const DERIVATIONAL: &[Rule] = &[
    Rule::replace("ational", "ate"),
    Rule::replace("tional", "tion"),
    Rule::replace("enci", "ence"),
    Rule::replace("anci", "ance"),
    Rule::replace("izer", "ize"),
    Rule::replace("alli", "al"),
    Rule::replace("entli", "ent"),
    Rule::replace("eli", "e"),
    Rule::replace("ousli", "ous"),
    Rule::replace("ization", "ize"),
    Rule::replace("ation", "ate"),
    Rule::replace("ator", "ate"),
    Rule::replace("alism", "al"),
    Rule::replace("iveness", "ive"),
    Rule::replace("fulness", "ful"),
    Rule::replace("ousness", "ous"),
    Rule::replace("aliti", "al"),
    Rule::replace("iviti", "ive"),
    Rule::replace("biliti", "ble"),
];

const SECONDARY: &[Rule] = &[
    Rule::replace("icate", "ic"),
    Rule::strip("ative"),
    Rule::replace("alize", "al"),
    Rule::replace("iciti", "ic"),
    Rule::replace("ical", "ic"),
    Rule::strip("ful"),
    Rule::strip("ness"),
];

const MIN_STEM: Guard = Guard::StemLongerThan(2);

const TERTIARY: &[Rule] = &[
    Rule::strip("al").when(MIN_STEM),
    Rule::strip("ance").when(MIN_STEM),
    Rule::strip("ence").when(MIN_STEM),
    Rule::strip("er").when(MIN_STEM),
    Rule::strip("ic").when(MIN_STEM),
    Rule::strip("able").when(MIN_STEM),
    Rule::strip("ible").when(MIN_STEM),
    Rule::strip("ant").when(MIN_STEM),
    Rule::strip("ement").when(MIN_STEM),
    Rule::strip("ment").when(MIN_STEM),
    Rule::strip("ent").when(MIN_STEM),
    Rule::strip("ou").when(MIN_STEM),
    Rule::strip("ism").when(MIN_STEM),
    Rule::strip("ate").when(MIN_STEM),
    Rule::strip("iti").when(MIN_STEM),
    Rule::strip("ous").when(MIN_STEM),
    Rule::strip("ive").when(MIN_STEM),
    Rule::strip("ize").when(MIN_STEM),
];

const FINAL: &[Rule] = &[Rule::strip("e").when(Guard::LongerThan(3))];

const STAGES: &[Stage] = &[
    Stage { name: "plural", rules: PLURALS },
    Stage { name: "derivational", rules: DERIVATIONAL },
    Stage { name: "secondary", rules: SECONDARY },
    Stage { name: "tertiary", rules: TERTIARY },
    Stage { name: "final", rules: FINAL },
];

/// Stem a single word. The input is lowercased first; the function never fails.
pub fn stem(word: &str) -> String {
    stem_traced(word).0
}

/// Like [`stem`], also reporting which stage and suffix fired, if any.
pub fn stem_traced(word: &str) -> (String, Option<(&'static str, &'static str)>) {
    let word = word.to_lowercase();
    let len = word.chars().count();
    for stage in STAGES {
        if let Some(rule) = stage.rules.iter().find(|r| r.matches(&word, len)) {
            return (rule.apply(word), Some((stage.name, rule.suffix)));
        }
    }
    (word, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_stage() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "pony");
        assert_eq!(stem("caress"), "caress");
        assert_eq!(stem("cats"), "cat");
        // too short for the bare `s` rule
        assert_eq!(stem("bus"), "bus");
        assert_eq!(stem("as"), "as");
    }

    #[test]
    fn derivational_stage() {
        assert_eq!(stem("relational"), "relate");
        assert_eq!(stem("conditional"), "condition");
        assert_eq!(stem("digitizer"), "digitize");
        assert_eq!(stem("generalization"), "generalize");
        assert_eq!(stem("operator"), "operate");
    }

    #[test]
    fn secondary_stage() {
        assert_eq!(stem("hopeful"), "hope");
        assert_eq!(stem("electrical"), "electric");
        assert_eq!(stem("formalize"), "formal");
        assert_eq!(stem("triplicate"), "triplic");
    }

    #[test]
    fn tertiary_stage_respects_minimum_stem() {
        assert_eq!(stem("adjustment"), "adjust");
        assert_eq!(stem("dependent"), "depend");
        // "rate" minus "ate" leaves one letter, so the final stage handles it
        assert_eq!(stem("rate"), "rat");
    }

    #[test]
    fn final_stage_and_fallthrough() {
        assert_eq!(stem("stone"), "ston");
        assert_eq!(stem("feed"), "feed");
        assert_eq!(stem("running"), "running");
        assert_eq!(stem("the"), "the");
    }

    #[test]
    fn only_one_rule_fires() {
        // "ness" would be stripped by the secondary stage, but "ss" matches first.
        assert_eq!(stem("happiness"), "happiness");
        assert_eq!(stem_traced("happiness").1, Some(("plural", "ss")));
        // plural stripping does not continue into the derivational rules
        assert_eq!(stem("relations"), "relation");
    }

    #[test]
    fn lowercases_and_handles_empty() {
        assert_eq!(stem("Cats"), "cat");
        assert_eq!(stem(""), "");
        assert_eq!(stem_traced("feed").1, None);
    }
}
