// crates/board-core/src/form.rs
// Project input form: raw field values to a validated new project

use log::debug;

use crate::config::FormRules;
use crate::error::{BoardError, Result};
use crate::model::ProjectId;
use crate::store::ProjectStore;
use crate::validation::{self, Rule, Validatable};

/// The three raw strings read from the form on submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Coerce text to a number the way a browser's `Number()` does for form input:
/// blank is 0, anything unparsable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

impl FormInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Constraints for the three fields under the given rules
    pub fn constraints(&self, rules: &FormRules) -> [Validatable; 3] {
        [
            Validatable::text(self.title.as_str()).label("title").required(),
            Validatable::text(self.description.as_str())
                .label("description")
                .required()
                .min_length(rules.description_min_length),
            Validatable::number(coerce_number(&self.people))
                .label("people")
                .required()
                .min(rules.people_min as f64)
                .max(rules.people_max as f64),
        ]
    }

    /// Validate and convert. Nothing is trimmed or rewritten on the way through.
    pub fn gather(&self, rules: &FormRules) -> Result<NewProject> {
        validation::check(&self.constraints(rules))?;

        let people = coerce_number(&self.people);
        if people.fract() != 0.0 {
            return Err(BoardError::Validation {
                field: "people".to_string(),
                rule: Rule::Integer,
            });
        }

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people as u32,
        })
    }

    /// Validate and, on success, add the project to the store.
    /// On failure the store is left untouched.
    pub fn submit(&self, rules: &FormRules, store: &mut ProjectStore) -> Result<ProjectId> {
        let new = self.gather(rules).inspect_err(|e| debug!("Rejected form input: {}", e))?;
        Ok(store.add_project(new.title, new.description, new.people))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectStatus;

    fn rules() -> FormRules {
        FormRules::default()
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("3"), 3.0);
        assert_eq!(coerce_number(" 4 "), 4.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("2.5"), 2.5);
        assert!(coerce_number("three").is_nan());
    }

    #[test]
    fn test_gather_valid_input() {
        let input = FormInput::new("Learn Rust", "Build a small project", "3");
        let new = input.gather(&rules()).unwrap();
        assert_eq!(new.title, "Learn Rust");
        assert_eq!(new.description, "Build a small project");
        assert_eq!(new.people, 3);
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = FormInput::new("   ", "Build a small project", "3")
            .gather(&rules())
            .unwrap_err();
        assert!(matches!(err, BoardError::Validation { ref field, rule: Rule::Required } if field == "title"));
    }

    #[test]
    fn test_short_description_rejected() {
        let err = FormInput::new("Title", "abcd", "3").gather(&rules()).unwrap_err();
        assert!(matches!(err, BoardError::Validation { rule: Rule::MinLength(5), .. }));
    }

    #[test]
    fn test_people_out_of_range_rejected() {
        assert!(FormInput::new("Title", "Long enough", "0").gather(&rules()).is_err());
        assert!(FormInput::new("Title", "Long enough", "6").gather(&rules()).is_err());
        assert!(FormInput::new("Title", "Long enough", "").gather(&rules()).is_err());
        assert!(FormInput::new("Title", "Long enough", "lots").gather(&rules()).is_err());
    }

    #[test]
    fn test_fractional_people_rejected() {
        let err = FormInput::new("Title", "Long enough", "2.5")
            .gather(&rules())
            .unwrap_err();
        assert!(matches!(err, BoardError::Validation { rule: Rule::Integer, .. }));
    }

    #[test]
    fn test_custom_rules() {
        let rules = FormRules {
            description_min_length: 2,
            people_min: 1,
            people_max: 10,
        };
        let new = FormInput::new("T", "ok", "8").gather(&rules).unwrap();
        assert_eq!(new.people, 8);
    }

    #[test]
    fn test_submit_adds_active_project() {
        let mut store = ProjectStore::new();
        let id = FormInput::new("Learn Rust", "Build a small project", "3")
            .submit(&rules(), &mut store)
            .unwrap();
        let project = store.get(&id).unwrap();
        assert_eq!(project.people(), 3);
        assert_eq!(project.status(), ProjectStatus::Active);
    }

    #[test]
    fn test_out_of_range_and_fractional_people_are_user_errors() {
        let mut store = ProjectStore::new();
        for people in ["11", "6", "2.5", "-1"] {
            let err = FormInput::new("Title", "Long enough", people)
                .submit(&rules(), &mut store)
                .unwrap_err();
            assert!(err.is_user_error(), "{} should be a user error", people);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_submit_leaves_store_untouched() {
        let mut store = ProjectStore::new();
        assert!(FormInput::new("", "", "").submit(&rules(), &mut store).is_err());
        assert!(store.is_empty());
    }
}
