use crate::error::{HolocronError, HolocronResult};
use crate::model::Note;
use crate::validation;

/// Notes in insertion order. Titles are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_note(&mut self, title: &str, text: &str, tags: Vec<String>) -> HolocronResult<&Note> {
        let title = validation::non_blank(title, "Title")?;
        self.insert(Note::create(&title, text, tags))?;
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Appends an already built note, rejecting a repeated title.
    pub fn insert(&mut self, note: Note) -> HolocronResult<()> {
        if self.search_by_title(note.title()).is_some() {
            return Err(HolocronError::AlreadyExists {
                entity_type: "Note".into(),
                identifier: note.title().to_string(),
            });
        }
        self.notes.push(note);
        Ok(())
    }

    pub fn search_by_title(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.title() == title)
    }

    /// Notes cannot be renamed through the returned reference.
    pub fn search_by_title_mut(&mut self, title: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.title() == title)
    }

    pub fn search_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.has_tag(tag)).collect()
    }

    /// Returns false when no note has this title.
    pub fn edit_by_title(&mut self, title: &str, new_text: &str) -> bool {
        match self.search_by_title_mut(title) {
            Some(note) => {
                note.set_text(new_text);
                true
            }
            None => false,
        }
    }

    pub fn remove_note(&mut self, title: &str) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.title() == title)?;
        Some(self.notes.remove(index))
    }

    pub fn add_tag_to(&mut self, title: &str, tag: &str) -> HolocronResult<&Note> {
        let note = self
            .search_by_title_mut(title)
            .ok_or_else(|| HolocronError::not_found("Note", title))?;
        note.add_tag(tag);
        Ok(&*note)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
