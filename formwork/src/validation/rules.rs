//! Chainable value rules.
//!
//! Each builder wraps one field value and applies constraints in order,
//! keeping only the first failure. `finish()` turns the chain into the
//! `Result` a schema check returns.

use super::ValidationError;

/// Rules for text values.
pub fn text(value: &str) -> TextRules<'_> {
    TextRules {
        value,
        error: None,
        skip: false,
    }
}

/// Rules for optional numeric values (`None` = unset).
pub fn amount(value: Option<f64>) -> AmountRules {
    AmountRules { value, error: None }
}

/// Rules for a multi-select, expressed over the number of selections.
pub fn choices(selected: usize) -> ChoiceRules {
    ChoiceRules {
        selected,
        error: None,
    }
}

/// Rules for a bounded integer with a negative "unselected" sentinel.
pub fn count(value: i32) -> CountRules {
    CountRules { value, error: None }
}

/// Rules for a consent flag.
pub fn consent(accepted: bool) -> ConsentRules {
    ConsentRules {
        accepted,
        error: None,
    }
}

pub struct TextRules<'a> {
    value: &'a str,
    error: Option<ValidationError>,
    skip: bool,
}

impl TextRules<'_> {
    /// Fail with `Required` when the value is empty or whitespace.
    pub fn required(mut self) -> Self {
        if self.error.is_none() && !self.skip && self.value.trim().is_empty() {
            self.error = Some(ValidationError::Required);
        }
        self
    }

    /// Allow an empty value: when the value is empty, the remaining
    /// checks in the chain are skipped.
    pub fn optional(mut self) -> Self {
        if self.value.is_empty() {
            self.skip = true;
        }
        self
    }

    /// Minimum length in characters.
    pub fn min_chars(mut self, min: usize) -> Self {
        if self.error.is_none() && !self.skip && self.value.chars().count() < min {
            self.error = Some(ValidationError::TooShort { min });
        }
        self
    }

    /// Maximum length in characters.
    pub fn max_chars(mut self, max: usize) -> Self {
        if self.error.is_none() && !self.skip && self.value.chars().count() > max {
            self.error = Some(ValidationError::TooLong { max });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub struct AmountRules {
    value: Option<f64>,
    error: Option<ValidationError>,
}

impl AmountRules {
    /// Fail with `Required` when the value is unset.
    pub fn required(mut self) -> Self {
        if self.error.is_none() && self.value.is_none() {
            self.error = Some(ValidationError::Required);
        }
        self
    }

    /// Fail with `TooSmall` when the value is below `min`.
    pub fn at_least(mut self, min: f64) -> Self {
        if self.error.is_none()
            && let Some(value) = self.value
            && value < min
        {
            self.error = Some(ValidationError::TooSmall { min });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub struct ChoiceRules {
    selected: usize,
    error: Option<ValidationError>,
}

impl ChoiceRules {
    /// Fail with `Required` when nothing is selected.
    pub fn at_least_one(mut self) -> Self {
        if self.error.is_none() && self.selected == 0 {
            self.error = Some(ValidationError::Required);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub struct CountRules {
    value: i32,
    error: Option<ValidationError>,
}

impl CountRules {
    /// Fail with `Required` while the negative sentinel is in place.
    pub fn selected(mut self) -> Self {
        if self.error.is_none() && self.value < 0 {
            self.error = Some(ValidationError::Required);
        }
        self
    }

    /// Fail with `OutOfRange` outside `[min, max]`.
    pub fn within(mut self, min: i64, max: i64) -> Self {
        let value = i64::from(self.value);
        if self.error.is_none() && (value < min || value > max) {
            self.error = Some(ValidationError::OutOfRange { min, max });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub struct ConsentRules {
    accepted: bool,
    error: Option<ValidationError>,
}

impl ConsentRules {
    /// Fail with `MustAccept` unless the flag is set.
    pub fn must_accept(mut self) -> Self {
        if self.error.is_none() && !self.accepted {
            self.error = Some(ValidationError::MustAccept);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
