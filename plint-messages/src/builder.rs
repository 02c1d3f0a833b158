use std::collections::HashMap;
use std::fmt::Display;

/// Fills `{name}` placeholders in a static template.
pub struct MessageBuilder {
    template: &'static str,
    vars: HashMap<&'static str, String>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: HashMap::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Display) -> Self {
        self.vars.insert(key, value.to_string());
        self
    }

    /// Substitute in a single pass over the template, so values that happen
    /// to contain `{...}` are copied through untouched.
    pub fn build(self) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let key = after.find('}').map(|end| &after[..end]);
            match key.and_then(|key| self.vars.get(key).map(|value| (key, value))) {
                Some((key, value)) => {
                    result.push_str(value);
                    rest = &after[key.len() + 1..];
                }
                None => {
                    result.push('{');
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }
}
