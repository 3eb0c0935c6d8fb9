use serde::{Deserialize, Serialize};

use crate::domain::Id;

/// The root of the record tree.
///
/// Departments are kept in insertion order. Names are not required to be
/// unique; every lookup resolves to the first entry with a matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    /// Departments in insertion order.
    pub departments: Vec<Department>,
}

/// A department and the professors attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Display name, also the lookup key.
    pub name: String,
    /// Professors in insertion order.
    pub professors: Vec<Professor>,
}

/// A professor and the students they supervise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Display name, also the lookup key within a department.
    pub name: String,
    /// Identifier assigned at creation.
    pub id: Id,
    /// Students in insertion order.
    pub students: Vec<Student>,
}

/// A student. Students are addressed by [`Id`], never by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name.
    pub name: String,
    /// Identifier assigned at creation.
    pub id: Id,
}

impl University {
    /// The built-in example document: two departments, one professor each,
    /// one student each.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            departments: vec![
                Department {
                    name: "Computer Science".to_string(),
                    professors: vec![Professor {
                        name: "Dr. Smith".to_string(),
                        id: Id::new(1),
                        students: vec![Student::new("Alice", Id::new(1001))],
                    }],
                },
                Department {
                    name: "Biotechnology".to_string(),
                    professors: vec![Professor {
                        name: "Dr. Lee".to_string(),
                        id: Id::new(2),
                        students: vec![Student::new("Bob", Id::new(2001))],
                    }],
                },
            ],
        }
    }

    /// Returns the first department called `name`.
    #[must_use]
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Returns the first department called `name`, mutably.
    pub fn department_mut(&mut self, name: &str) -> Option<&mut Department> {
        self.departments.iter_mut().find(|d| d.name == name)
    }

    /// Returns the first department called `name`, appending an empty one if
    /// there is none.
    pub fn department_or_insert(&mut self, name: &str) -> &mut Department {
        let index = self
            .departments
            .iter()
            .position(|d| d.name == name)
            .unwrap_or_else(|| {
                self.departments.push(Department::new(name));
                self.departments.len() - 1
            });
        &mut self.departments[index]
    }

    /// Iterates over every professor in document order.
    pub fn professors(&self) -> impl Iterator<Item = &Professor> {
        self.departments.iter().flat_map(|d| d.professors.iter())
    }

    /// Iterates over every student in document order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.professors().flat_map(|p| p.students.iter())
    }

    /// The largest id held by any professor or student.
    #[must_use]
    pub fn max_id(&self) -> Option<Id> {
        self.professors()
            .map(|p| p.id)
            .chain(self.students().map(|s| s.id))
            .max()
    }
}

impl Department {
    /// Creates a department with no professors.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            professors: Vec::new(),
        }
    }

    /// Returns the first professor called `name`.
    #[must_use]
    pub fn professor(&self, name: &str) -> Option<&Professor> {
        self.professors.iter().find(|p| p.name == name)
    }

    /// Returns the first professor called `name`, mutably.
    pub fn professor_mut(&mut self, name: &str) -> Option<&mut Professor> {
        self.professors.iter_mut().find(|p| p.name == name)
    }

    /// Returns the first professor called `name`, appending a new one whose
    /// id is produced by `next_id` if there is none.
    ///
    /// `next_id` is only called when a professor is created.
    ///
    /// # Errors
    ///
    /// Returns the error from `next_id`, in which case nothing is appended.
    pub fn try_professor_or_insert_with<E>(
        &mut self,
        name: &str,
        next_id: impl FnOnce() -> Result<Id, E>,
    ) -> Result<&mut Professor, E> {
        let index = if let Some(index) = self.professors.iter().position(|p| p.name == name) {
            index
        } else {
            self.professors.push(Professor::new(name, next_id()?));
            self.professors.len() - 1
        };
        Ok(&mut self.professors[index])
    }
}

impl Professor {
    /// Creates a professor with no students.
    #[must_use]
    pub fn new(name: impl Into<String>, id: Id) -> Self {
        Self {
            name: name.into(),
            id,
            students: Vec::new(),
        }
    }

    /// Returns the student with the given id.
    #[must_use]
    pub fn student(&self, id: Id) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Returns the student with the given id, mutably.
    pub fn student_mut(&mut self, id: Id) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// Removes the first student with the given id, keeping the order of the
    /// remaining students.
    pub fn remove_student(&mut self, id: Id) -> Option<Student> {
        let index = self.students.iter().position(|s| s.id == id)?;
        Some(self.students.remove(index))
    }
}

impl Student {
    /// Creates a student.
    #[must_use]
    pub fn new(name: impl Into<String>, id: Id) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_serializes_with_expected_shape() {
        let value = serde_json::to_value(University::seed()).unwrap();
        let expected = serde_json::json!({
            "departments": [
                {
                    "name": "Computer Science",
                    "professors": [
                        { "name": "Dr. Smith", "id": 1, "students": [{ "name": "Alice", "id": 1001 }] }
                    ]
                },
                {
                    "name": "Biotechnology",
                    "professors": [
                        { "name": "Dr. Lee", "id": 2, "students": [{ "name": "Bob", "id": 2001 }] }
                    ]
                }
            ]
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn lookup_returns_first_match() {
        let mut university = University::seed();
        let mut duplicate = Department::new("Computer Science");
        duplicate
            .professors
            .push(Professor::new("Dr. Jones", Id::new(3)));
        university.departments.push(duplicate);

        let found = university.department("Computer Science").unwrap();
        assert_eq!(found.professors[0].name, "Dr. Smith");
    }

    #[test]
    fn department_or_insert_appends_when_missing() {
        let mut university = University::seed();
        university.department_or_insert("Physics");

        let names: Vec<_> = university.departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Computer Science", "Biotechnology", "Physics"]);
    }

    #[test]
    fn department_or_insert_reuses_existing() {
        let mut university = University::seed();
        university.department_or_insert("Biotechnology");
        assert_eq!(university.departments.len(), 2);
    }

    #[test]
    fn professor_or_insert_only_allocates_for_new_professors() {
        let mut department = University::seed().departments.remove(0);

        let existing = department
            .try_professor_or_insert_with::<()>("Dr. Smith", || {
                panic!("id should not be allocated for an existing professor")
            })
            .unwrap();
        assert_eq!(existing.id, Id::new(1));

        let created = department
            .try_professor_or_insert_with::<()>("Dr. Brown", || Ok(Id::new(77)))
            .unwrap();
        assert_eq!(created.id, Id::new(77));
        assert!(created.students.is_empty());
        assert_eq!(department.professors.len(), 2);
    }

    #[test]
    fn failed_id_allocation_appends_nothing() {
        let mut department = University::seed().departments.remove(0);

        let result = department.try_professor_or_insert_with("Dr. Brown", || Err("no ids"));

        assert_eq!(result.unwrap_err(), "no ids");
        assert_eq!(department.professors.len(), 1);
    }

    #[test]
    fn remove_student_preserves_order() {
        let mut professor = Professor::new("Dr. Who", Id::new(1));
        for (name, id) in [("A", 10), ("B", 11), ("C", 12)] {
            professor.students.push(Student::new(name, Id::new(id)));
        }

        let removed = professor.remove_student(Id::new(11)).unwrap();

        assert_eq!(removed.name, "B");
        let names: Vec<_> = professor.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
        assert!(professor.remove_student(Id::new(11)).is_none());
    }

    #[test]
    fn max_id_spans_professors_and_students() {
        assert_eq!(University::seed().max_id(), Some(Id::new(2001)));
        assert_eq!(University::default().max_id(), None);
    }
}
