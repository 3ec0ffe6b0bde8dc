use super::StudentId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub year: String,
}

/// Body for creating a student - the id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub year: String,
}

/// Partial update where only the fields present in the request are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub year: Option<String>,
}

impl Student {
    /// Merges a patch into this record, field by field. Absent fields are
    /// left unchanged.
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> Student {
        Student {
            id: 11,
            name: "Alex".to_string(),
            age: 16,
            year: "Junior".to_string(),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut student = alex();
        student.apply(StudentPatch::default());
        assert_eq!(student, alex());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut student = alex();
        student.apply(StudentPatch {
            age: Some(17),
            ..StudentPatch::default()
        });

        assert_eq!(student.age, 17);
        assert_eq!(student.name, "Alex");
        assert_eq!(student.year, "Junior");
    }

    #[test]
    fn full_patch_replaces_every_field() {
        let mut student = alex();
        student.apply(StudentPatch {
            name: Some("Alexandra".to_string()),
            age: Some(18),
            year: Some("Senior".to_string()),
        });

        assert_eq!(
            student,
            Student {
                id: 11,
                name: "Alexandra".to_string(),
                age: 18,
                year: "Senior".to_string(),
            }
        );
    }
}
