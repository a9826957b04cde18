use std::fmt;

/// A titled text entry with an ordered tag list. Tags may repeat.
///
/// The title is fixed at creation; `NoteStore` relies on that to keep titles
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    text: String,
    tags: Vec<String>,
}

impl Note {
    pub fn create(title: &str, text: &str, tags: Vec<String>) -> Self {
        Self {
            title: title.trim().to_string(),
            text: text.trim().to_string(),
            tags,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_string();
    }

    pub fn add_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_string());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "title: {} | Note: {} | Tags: {}",
            self.title,
            self.text,
            self.tags.join(", ")
        )
    }
}
