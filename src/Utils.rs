/// Loading equations from plain-text documents with ALL-CAPS section headers
/// and writing/reading JSON balance reports back into the same document
pub mod load_from_file;
