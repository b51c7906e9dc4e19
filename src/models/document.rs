// file: src/models/document.rs
// description: named text unit compared by the similarity engine
// reference: internal data structures

#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    /// `ordinal` is the 0-based input position, used for the `File {n}`
    /// label when no name is given.
    pub fn new(name: Option<String>, text: String, ordinal: usize) -> Self {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| Self::default_name(ordinal));

        Self { name, text }
    }

    pub fn default_name(ordinal: usize) -> String {
        format!("File {}", ordinal + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
