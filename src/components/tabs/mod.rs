mod favorites;
mod folders;
mod notes;
mod search;

pub use favorites::FavoritesTab;
pub use folders::FoldersTab;
pub use notes::NotesTab;
pub use search::SearchTab;
