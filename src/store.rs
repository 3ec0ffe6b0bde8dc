use crate::{
    data::{
        StudentId,
        student::{NewStudent, Student, StudentPatch},
    },
    error::{MissingStudentSnafu, RollcallResult, StudentAlreadyExistsSnafu},
};
use snafu::{OptionExt, ensure};

/// The record store: an ordered collection of students, unique by id.
///
/// Insertion order is preserved for listing. Uniqueness of `id` is enforced
/// on insert rather than by keying the collection on it.
#[derive(Debug, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// The three mock students the service originally shipped with.
    pub fn with_demo_data() -> Self {
        let demo = |id, name: &str, age, year: &str| Student {
            id,
            name: name.to_string(),
            age,
            year: year.to_string(),
        };

        Self {
            students: vec![
                demo(1, "John", 17, "Senior"),
                demo(2, "Jane", 16, "Junior"),
                demo(3, "Sarah", 15, "Sophomore"),
            ],
        }
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn get_by_id(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Finds a student by name, ignoring ASCII case.
    ///
    /// When several students share a name, the first one in stored order
    /// wins. That tie-break is a convention, not a guarantee.
    pub fn get_by_name(&self, name: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.name.eq_ignore_ascii_case(name))
    }

    pub fn create(&mut self, id: StudentId, new_student: NewStudent) -> RollcallResult<Student> {
        ensure!(
            self.get_by_id(id).is_none(),
            StudentAlreadyExistsSnafu { id }
        );

        let student = Student {
            id,
            name: new_student.name,
            age: new_student.age,
            year: new_student.year,
        };
        self.students.push(student.clone());
        Ok(student)
    }

    pub fn update(&mut self, id: StudentId, patch: StudentPatch) -> RollcallResult<Student> {
        let student = self
            .students
            .iter_mut()
            .find(|student| student.id == id)
            .context(MissingStudentSnafu { id })?;

        student.apply(patch);
        Ok(student.clone())
    }

    pub fn delete(&mut self, id: StudentId) -> RollcallResult<()> {
        let index = self
            .students
            .iter()
            .position(|student| student.id == id)
            .context(MissingStudentSnafu { id })?;

        self.students.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;

    fn new_student(name: &str, age: i32, year: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            age,
            year: year.to_string(),
        }
    }

    #[test]
    fn new_store_is_empty() {
        assert!(StudentStore::new().list().is_empty());
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut store = StudentStore::new();
        store.create(3, new_student("Sarah", 15, "Sophomore")).unwrap();
        store.create(1, new_student("John", 17, "Senior")).unwrap();
        store.create(2, new_student("Jane", 16, "Junior")).unwrap();

        let names: Vec<_> = store.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Sarah", "John", "Jane"]);
    }

    #[test]
    fn create_then_get_returns_the_created_record() {
        let mut store = StudentStore::new();
        let created = store.create(11, new_student("Alex", 16, "Junior")).unwrap();

        assert_eq!(store.get_by_id(11), Some(&created));
        //no intervening writes, so a repeat lookup matches too
        assert_eq!(store.get_by_id(11), Some(&created));
    }

    #[test]
    fn duplicate_id_is_rejected_and_store_unchanged() {
        let mut store = StudentStore::new();
        store.create(1, new_student("John", 17, "Senior")).unwrap();

        let err = store
            .create(1, new_student("Impostor", 99, "Senior"))
            .unwrap_err();
        assert!(matches!(err, RollcallError::StudentAlreadyExists { id: 1 }));

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().name, "John");
    }

    #[test]
    fn update_touches_only_supplied_fields() {
        let mut store = StudentStore::new();
        store.create(2, new_student("Jane", 16, "Junior")).unwrap();

        let updated = store
            .update(
                2,
                StudentPatch {
                    age: Some(17),
                    ..StudentPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.age, 17);
        assert_eq!(updated.name, "Jane");
        assert_eq!(updated.year, "Junior");
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = StudentStore::new();
        let err = store.update(404, StudentPatch::default()).unwrap_err();
        assert!(matches!(err, RollcallError::MissingStudent { id: 404 }));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = StudentStore::new();
        store.create(11, new_student("Alex", 16, "Junior")).unwrap();

        store.delete(11).unwrap();
        assert!(store.get_by_id(11).is_none());

        let err = store.delete(11).unwrap_err();
        assert!(matches!(err, RollcallError::MissingStudent { id: 11 }));
    }

    #[test]
    fn get_by_name_ignores_case() {
        let store = StudentStore::with_demo_data();
        assert_eq!(store.get_by_name("jOhN").unwrap().id, 1);
        assert!(store.get_by_name("nobody").is_none());
    }

    #[test]
    fn get_by_name_returns_first_match_in_stored_order() {
        let mut store = StudentStore::new();
        store.create(1, new_student("Sam", 15, "Sophomore")).unwrap();
        store.create(2, new_student("sam", 18, "Senior")).unwrap();

        assert_eq!(store.get_by_name("SAM").unwrap().id, 1);
    }
}
