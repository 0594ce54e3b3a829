//! Validation of `MODELSHIP_*` environment values
//!
//! Invalid values never abort a run: a warning naming the variable and the
//! accepted values is written, and the previous setting is kept.

use std::io::Write;

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, falling back to `current` and warning on stderr.
    pub fn parse<T>(&self, value: &str, parser: impl Fn(&str) -> Option<T>, current: T) -> T {
        self.parse_with_writer(value, parser, current, &mut std::io::stderr())
    }

    /// Parse `value`, writing any warning to `writer`.
    pub fn parse_with_writer<T, W: Write>(
        &self,
        value: &str,
        parser: impl Fn(&str) -> Option<T>,
        current: T,
        writer: &mut W,
    ) -> T {
        if let Some(parsed) = parser(value.trim()) {
            return parsed;
        }

        let hint = self
            .closest(value)
            .map(|candidate| format!(". Did you mean '{}'?", candidate))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name, value, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        current
    }

    /// Closest accepted value within two edits.
    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .filter(|(_, dist)| (1..=2).contains(dist))
            .min_by_key(|(_, dist)| *dist)
            .map(|(valid, _)| valid)
    }
}

/// Edit distance between two ASCII strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
