// Ordered list of validation rules, evaluated front to back.
//
// Purpose
// - Replace nested if/return validation with a declarative sequence.
//
// Responsibilities
// - Each rule inspects the subject and optionally yields a failure.
// - The first rule that yields a failure wins; later rules are not evaluated.

pub struct Rule<T, F> {
    pub name: &'static str,
    check: fn(&T) -> Option<F>,
}

impl<T, F> Rule<T, F> {
    pub fn new(name: &'static str, check: fn(&T) -> Option<F>) -> Self {
        Self { name, check }
    }

    pub fn check(&self, subject: &T) -> Option<F> {
        (self.check)(subject)
    }
}

pub struct RuleChain<T, F> {
    rules: Vec<Rule<T, F>>,
}

impl<T, F> Default for RuleChain<T, F> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T, F> RuleChain<T, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, name: &'static str, check: fn(&T) -> Option<F>) -> Self {
        self.rules.push(Rule::new(name, check));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    /// Returns the name of the first violated rule together with its failure.
    pub fn first_failure(&self, subject: &T) -> Option<(&'static str, F)> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(subject).map(|failure| (rule.name, failure)))
    }
}
