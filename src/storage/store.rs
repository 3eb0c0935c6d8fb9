//! A file backed store of university records
//!
//! The [`Store`] owns the in-memory document and mirrors it to a single JSON
//! file. Every mutating operation first snapshots the file on disk into a
//! single backup slot, then applies the change and rewrites the whole file.

use std::path::{Path, PathBuf};

use crate::{
    domain::{Config, Id, IdGenerator, IdsExhausted, Professor, Student, University},
    storage::document::{
        BackupError, ReadError, WriteError, backup_document, load_document, save_document,
    },
};

/// File name of the primary document.
pub const DOCUMENT_FILE: &str = "university.json";

/// File name of the single-slot backup.
pub const BACKUP_FILE: &str = "university_backup.json";

/// The fixed locations of the document and its backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    document: PathBuf,
    backup: PathBuf,
}

impl Default for StorePaths {
    /// Both files relative to the working directory.
    fn default() -> Self {
        Self {
            document: PathBuf::from(DOCUMENT_FILE),
            backup: PathBuf::from(BACKUP_FILE),
        }
    }
}

impl StorePaths {
    /// Both files inside `root`.
    #[must_use]
    pub fn in_dir(root: &Path) -> Self {
        Self {
            document: root.join(DOCUMENT_FILE),
            backup: root.join(BACKUP_FILE),
        }
    }

    /// The primary document.
    #[must_use]
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// The backup slot.
    #[must_use]
    pub fn backup(&self) -> &Path {
        &self.backup
    }
}

/// The in-memory record tree, bound to its storage locations.
#[derive(Debug)]
pub struct Store {
    paths: StorePaths,
    university: University,
    ids: IdGenerator,
}

impl Store {
    /// Creates a store holding the example seed document.
    ///
    /// Nothing is read from or written to disk.
    #[must_use]
    pub fn new(paths: StorePaths) -> Self {
        Self::with_document(paths, University::seed())
    }

    /// Creates a store holding `university`.
    ///
    /// Nothing is read from or written to disk.
    #[must_use]
    pub fn with_document(paths: StorePaths, university: University) -> Self {
        let ids = IdGenerator::after(university.max_id());
        Self {
            paths,
            university,
            ids,
        }
    }

    /// Creates a store and loads its document from disk.
    ///
    /// If the document cannot be loaded, the store starts from the seed
    /// document or an empty one, depending on
    /// [`Config::seed_when_missing`].
    #[must_use]
    pub fn open(paths: StorePaths, config: &Config) -> Self {
        let initial = if config.seed_when_missing {
            University::seed()
        } else {
            University::default()
        };
        let mut store = Self::with_document(paths, initial);
        if store.paths.document.exists() {
            // A failed load is already logged and leaves the initial document.
            let _ = store.load();
        } else {
            tracing::debug!(
                "No document at {}, starting from the initial records",
                store.paths.document.display()
            );
        }
        store
    }

    /// The current document.
    #[must_use]
    pub const fn university(&self) -> &University {
        &self.university
    }

    /// The storage locations.
    #[must_use]
    pub const fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Replaces the in-memory document with the one on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing or malformed. The
    /// in-memory document is left untouched in that case.
    pub fn load(&mut self) -> Result<&University, ReadError> {
        let university = load_document(&self.paths.document).inspect_err(|e| {
            tracing::error!("Error reading the document: {e}");
        })?;

        tracing::debug!(
            "Loaded {} department(s) from {}",
            university.departments.len(),
            self.paths.document.display()
        );

        self.ids = IdGenerator::after(university.max_id());
        self.university = university;
        Ok(&self.university)
    }

    /// Writes the whole in-memory document to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. The in-memory document
    /// is never rolled back.
    pub fn save(&self) -> Result<(), WriteError> {
        save_document(&self.paths.document, &self.university).inspect_err(|e| {
            tracing::error!("Error writing the document: {e}");
        })?;

        tracing::debug!("Saved document to {}", self.paths.document.display());
        Ok(())
    }

    /// Copies the document as it currently exists on disk into the backup
    /// slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist yet or either file
    /// cannot be accessed.
    pub fn backup(&self) -> Result<u64, BackupError> {
        let bytes = backup_document(&self.paths.document, &self.paths.backup)?;
        tracing::debug!(
            "Backed up {bytes} byte(s) to {}",
            self.paths.backup.display()
        );
        Ok(bytes)
    }

    /// Takes a backup, logging rather than returning any failure.
    fn backup_before_write(&self) {
        if let Err(e) = self.backup() {
            tracing::warn!("Error creating backup: {e}");
        }
    }

    /// Adds a student under the given professor and department, creating the
    /// department and professor if they do not exist.
    ///
    /// Names are matched exactly and the first match wins. The student is
    /// always appended, even if one with the same name already exists.
    ///
    /// Returns the id assigned to the new student.
    ///
    /// # Errors
    ///
    /// Returns an error if no id is left for the new professor or student,
    /// in which case nothing is saved, or if the document cannot be saved.
    /// After a failed save the student remains in the in-memory document.
    pub fn add_entry(
        &mut self,
        department: &str,
        professor: &str,
        student: &str,
    ) -> Result<Id, EntryError> {
        self.backup_before_write();

        let (professor_id, id) = self
            .reserve_ids(department, professor)
            .inspect_err(|e| tracing::error!("{e}"))?;
        self.university
            .department_or_insert(department)
            .try_professor_or_insert_with(professor, || professor_id.ok_or(IdsExhausted))?
            .students
            .push(Student::new(student, id));

        self.save()?;

        tracing::info!("Added student {student} ({id}) under {professor} in {department}");
        Ok(id)
    }

    /// Reserves an id for a new student and, if the professor does not exist
    /// yet, one for the professor.
    fn reserve_ids(
        &mut self,
        department: &str,
        professor: &str,
    ) -> Result<(Option<Id>, Id), IdsExhausted> {
        let professor_id = if self.search_entry(department, professor).is_none() {
            Some(self.ids.next_id()?)
        } else {
            None
        };
        Ok((professor_id, self.ids.next_id()?))
    }

    /// Renames the student with the given id. The id itself is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first lookup that failed, or if the
    /// document cannot be saved. Nothing is saved when a lookup fails.
    pub fn update_entry(
        &mut self,
        department: &str,
        professor: &str,
        student: Id,
        new_name: &str,
    ) -> Result<(), EntryError> {
        self.backup_before_write();

        let entry = find_student_mut(&mut self.university, department, professor, student)
            .inspect_err(|e| tracing::warn!("{e}"))?;
        entry.name = new_name.to_string();

        self.save()?;

        tracing::info!("Student updated successfully");
        Ok(())
    }

    /// Removes the student with the given id, keeping the order of the
    /// professor's remaining students.
    ///
    /// Returns the removed student.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first lookup that failed, or if the
    /// document cannot be saved. Nothing is saved when a lookup fails.
    pub fn delete_entry(
        &mut self,
        department: &str,
        professor: &str,
        student: Id,
    ) -> Result<Student, EntryError> {
        self.backup_before_write();

        let removed = find_professor_mut(&mut self.university, department, professor)
            .and_then(|p| {
                p.remove_student(student)
                    .ok_or_else(|| EntryError::StudentNotFound {
                        professor: professor.to_string(),
                        id: student,
                    })
            })
            .inspect_err(|e| tracing::warn!("{e}"))?;

        self.save()?;

        tracing::info!("Student deleted successfully");
        Ok(removed)
    }

    /// Returns the students of the given professor, or `None` if either the
    /// department or the professor does not exist.
    ///
    /// This never touches the disk.
    #[must_use]
    pub fn search_entry(&self, department: &str, professor: &str) -> Option<&[Student]> {
        self.university
            .department(department)?
            .professor(professor)
            .map(|p| p.students.as_slice())
    }
}

fn find_professor_mut<'a>(
    university: &'a mut University,
    department: &str,
    professor: &str,
) -> Result<&'a mut Professor, EntryError> {
    university
        .department_mut(department)
        .ok_or_else(|| EntryError::DepartmentNotFound(department.to_string()))?
        .professor_mut(professor)
        .ok_or_else(|| EntryError::ProfessorNotFound {
            department: department.to_string(),
            professor: professor.to_string(),
        })
}

fn find_student_mut<'a>(
    university: &'a mut University,
    department: &str,
    professor: &str,
    student: Id,
) -> Result<&'a mut Student, EntryError> {
    find_professor_mut(university, department, professor)?
        .student_mut(student)
        .ok_or_else(|| EntryError::StudentNotFound {
            professor: professor.to_string(),
            id: student,
        })
}

/// An add, update or delete could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// No department has the given name.
    #[error("Department not found: {0}")]
    DepartmentNotFound(String),
    /// The department has no professor with the given name.
    #[error("Professor not found: {professor} in {department}")]
    ProfessorNotFound {
        /// The department that was searched.
        department: String,
        /// The professor that was looked for.
        professor: String,
    },
    /// The professor has no student with the given id.
    #[error("Student not found: {id} under {professor}")]
    StudentNotFound {
        /// The professor that was searched.
        professor: String,
        /// The student id that was looked for.
        id: Id,
    },
    /// A new professor or student could not be given an id.
    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),
    /// The change was applied in memory but could not be saved.
    #[error(transparent)]
    Write(#[from] WriteError),
}
